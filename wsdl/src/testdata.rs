/// A document-literal service with two embedded schemas, referenced elements and attributes,
/// attribute groups and two bindings listing overlapping operations.
pub const USER_SERVICE_WSDL: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<wsdl:definitions xmlns:wsdl="http://schemas.xmlsoap.org/wsdl/"
                  xmlns:soap="http://schemas.xmlsoap.org/wsdl/soap/"
                  xmlns:soap12="http://schemas.xmlsoap.org/wsdl/soap12/"
                  xmlns:xs="http://www.w3.org/2001/XMLSchema"
                  xmlns:tns="http://example.com/users"
                  xmlns:ext="http://example.com/tracing"
                  targetNamespace="http://example.com/users">
  <wsdl:types>
    <xs:schema targetNamespace="http://example.com/users"
               xmlns:audit="http://example.com/audit"
               elementFormDefault="qualified">
      <xs:element name="GetUser">
        <xs:complexType>
          <xs:sequence>
            <xs:element name="id" type="xs:string"/>
          </xs:sequence>
        </xs:complexType>
      </xs:element>
      <xs:element name="GetUserResponse">
        <xs:complexType>
          <xs:sequence>
            <xs:element name="user" type="tns:User"/>
          </xs:sequence>
        </xs:complexType>
      </xs:element>
      <xs:element name="UpdateUser">
        <xs:complexType>
          <xs:sequence>
            <xs:element ref="ext:Trace" minOccurs="0"/>
            <xs:element name="user" type="tns:User"/>
          </xs:sequence>
          <xs:attribute name="mode" type="xs:string"/>
        </xs:complexType>
      </xs:element>
      <xs:element name="UpdateUserResponse" type="tns:Status"/>
      <xs:element name="Person" type="tns:User"/>
      <xs:element name="ListUsers">
        <xs:complexType/>
      </xs:element>
      <xs:element name="ListUsersResponse">
        <xs:complexType>
          <xs:sequence>
            <xs:element name="user" type="tns:User" minOccurs="0" maxOccurs="unbounded"/>
          </xs:sequence>
        </xs:complexType>
      </xs:element>
      <xs:complexType name="User">
        <xs:sequence>
          <xs:element name="name" type="xs:string"/>
          <xs:element name="email" type="xs:string" minOccurs="0"/>
          <xs:element name="address" minOccurs="0">
            <xs:complexType>
              <xs:sequence>
                <xs:element name="street" type="xs:string"/>
                <xs:element name="city" type="xs:string"/>
              </xs:sequence>
              <xs:attribute name="kind" type="xs:string"/>
            </xs:complexType>
          </xs:element>
          <xs:element name="phone" type="tns:Phone" minOccurs="0" maxOccurs="unbounded"/>
        </xs:sequence>
        <xs:attribute name="id" type="xs:string" use="required"/>
        <xs:attributeGroup ref="tns:Audit"/>
      </xs:complexType>
      <xs:complexType name="Phone">
        <xs:sequence>
          <xs:element name="number" type="xs:string"/>
        </xs:sequence>
        <xs:attribute name="type" type="xs:string"/>
      </xs:complexType>
      <xs:attributeGroup name="Audit">
        <xs:attribute name="createdBy" type="xs:string"/>
        <xs:attribute ref="audit:revision"/>
      </xs:attributeGroup>
      <xs:simpleType name="Status">
        <xs:restriction base="xs:string">
          <xs:enumeration value="OK"/>
          <xs:enumeration value="FAILED"/>
        </xs:restriction>
      </xs:simpleType>
    </xs:schema>
    <xs:schema targetNamespace="http://example.com/tracing">
      <xs:element name="Trace">
        <xs:complexType>
          <xs:sequence>
            <xs:element name="requestId" type="xs:string"/>
          </xs:sequence>
        </xs:complexType>
      </xs:element>
    </xs:schema>
    <xs:schema targetNamespace="http://example.com/audit">
      <xs:attribute name="revision" type="xs:int"/>
    </xs:schema>
  </wsdl:types>

  <wsdl:message name="GetUserRequest">
    <wsdl:part name="parameters" element="tns:GetUser"/>
  </wsdl:message>
  <wsdl:message name="GetUserResponse">
    <wsdl:part name="parameters" element="tns:GetUserResponse"/>
  </wsdl:message>
  <wsdl:message name="UpdateUserRequest">
    <wsdl:part name="parameters" element="tns:UpdateUser"/>
  </wsdl:message>
  <wsdl:message name="UpdateUserResponse">
    <wsdl:part name="parameters" element="tns:UpdateUserResponse"/>
  </wsdl:message>
  <wsdl:message name="ListUsersRequest">
    <wsdl:part name="parameters" element="tns:ListUsers"/>
  </wsdl:message>
  <wsdl:message name="ListUsersResponse">
    <wsdl:part name="parameters" element="tns:ListUsersResponse"/>
  </wsdl:message>
  <wsdl:message name="RenameRequest">
    <wsdl:part name="id" type="xs:string"/>
    <wsdl:part name="user" type="tns:User"/>
  </wsdl:message>
  <wsdl:message name="RenameResponse">
    <wsdl:part name="ok" type="xs:boolean"/>
  </wsdl:message>

  <wsdl:portType name="UserPort">
    <wsdl:operation name="GetUser">
      <wsdl:input message="tns:GetUserRequest"/>
      <wsdl:output message="tns:GetUserResponse"/>
    </wsdl:operation>
    <wsdl:operation name="UpdateUser">
      <wsdl:input message="tns:UpdateUserRequest"/>
      <wsdl:output message="tns:UpdateUserResponse"/>
    </wsdl:operation>
    <wsdl:operation name="ListUsers">
      <wsdl:input message="tns:ListUsersRequest"/>
      <wsdl:output message="tns:ListUsersResponse"/>
    </wsdl:operation>
    <wsdl:operation name="Rename">
      <wsdl:input message="tns:RenameRequest"/>
      <wsdl:output message="tns:RenameResponse"/>
    </wsdl:operation>
  </wsdl:portType>

  <wsdl:binding name="UserBinding" type="tns:UserPort">
    <soap:binding transport="http://schemas.xmlsoap.org/soap/http"/>
    <wsdl:operation name="UpdateUser"/>
    <wsdl:operation name="Rename"/>
    <wsdl:operation name="GetUser"/>
    <wsdl:operation name="ListUsers"/>
  </wsdl:binding>
  <wsdl:binding name="UserBinding12" type="tns:UserPort">
    <soap12:binding transport="http://schemas.xmlsoap.org/soap/http"/>
    <wsdl:operation name="GetUser"/>
    <wsdl:operation name="ListUsers"/>
  </wsdl:binding>
</wsdl:definitions>
"#;

/// An unqualified service: no target namespace and no prefixes on message parts.
pub const SIMPLE_WSDL: &str = r#"<?xml version="1.0"?>
<definitions xmlns="http://schemas.xmlsoap.org/wsdl/"
             xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <types>
    <xs:schema>
      <xs:element name="GetUser">
        <xs:complexType>
          <xs:sequence>
            <xs:element name="id" type="xs:string"/>
          </xs:sequence>
        </xs:complexType>
      </xs:element>
      <xs:element name="GetUserResponse">
        <xs:complexType>
          <xs:sequence>
            <xs:element name="name" type="xs:string"/>
          </xs:sequence>
        </xs:complexType>
      </xs:element>
      <xs:element name="Notify">
        <xs:complexType/>
      </xs:element>
    </xs:schema>
  </types>
  <message name="GetUserRequest">
    <part name="parameters" element="GetUser"/>
  </message>
  <message name="GetUserResponse">
    <part name="parameters" element="GetUserResponse"/>
  </message>
  <message name="NotifyRequest">
    <part name="parameters" element="Notify"/>
  </message>
  <portType name="Port">
    <operation name="GetUser">
      <input message="GetUserRequest"/>
      <output message="GetUserResponse"/>
    </operation>
    <operation name="Notify">
      <input message="NotifyRequest"/>
    </operation>
  </portType>
  <binding name="Binding" type="Port">
    <operation name="Notify"/>
    <operation name="GetUser"/>
  </binding>
</definitions>
"#;
