use std::fmt::Write;

use quick_xml::escape::escape;
use serde_json::Value;

use super::{
    builtins::{SOAP_ENV_NAMESPACE, SOAP_ENV_PREFIX, XML_DECLARATION},
    complex_type_def::TypeNode,
    definitions::Definitions,
    operation::{MessagePart, OneOrMany},
    shared::{ContentSpec, TypeShape},
    xstypes::qualified_tag,
};

/// Whether the prefixes used in a rendered body are declared on the envelope
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NamespaceTracking {
    Enabled,
    Disabled,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Indentation {
    #[default]
    Tab,
    Spaces(usize),
}

impl Indentation {
    fn write(self, out: &mut String, levels: usize) {
        match self {
            Self::Tab => out.extend(std::iter::repeat('\t').take(levels)),
            Self::Spaces(width) => out.extend(std::iter::repeat(' ').take(levels * width)),
        }
    }
}

/// Renders data objects as XML according to a resolved type tree.
///
/// Attribute values are written verbatim; they must not contain quotes or markup. Element text is
/// escaped.
#[derive(Clone, Debug)]
pub struct Serializer {
    tracking: NamespaceTracking,
    indentation: Indentation,
    used_namespaces: Vec<String>,
}

impl Serializer {
    pub fn new(tracking: NamespaceTracking) -> Self {
        Self {
            tracking,
            indentation: Indentation::default(),
            used_namespaces: Vec::new(),
        }
    }

    pub fn with_indentation(mut self, indentation: Indentation) -> Self {
        self.indentation = indentation;
        self
    }

    /// Prefixes used so far, in the order they were first used
    pub fn used_namespaces(&self) -> &[String] {
        &self.used_namespaces
    }

    fn record_namespace(&mut self, prefix: Option<&str>) {
        if self.tracking == NamespaceTracking::Disabled {
            return;
        }
        if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
            if !self.used_namespaces.iter().any(|used| used == prefix) {
                self.used_namespaces.push(prefix.to_string());
            }
        }
    }

    /// Renders `value` as the element described by `spec`. The element is assumed to sit at
    /// indentation level `2 + depth`, inside the envelope body; its first line is not indented.
    pub fn render(&mut self, spec: &impl ContentSpec, value: &Value, depth: usize) -> String {
        match spec.type_def() {
            // A complex type without content takes scalars like a leaf
            TypeShape::Complex(type_node) if type_node.is_empty() && !value.is_object() => {
                self.render_leaf(spec, value)
            }
            TypeShape::Complex(type_node) => self.render_complex(spec, type_node, value, depth),
            TypeShape::Leaf(_) => self.render_leaf(spec, value),
        }
    }

    fn render_complex(
        &mut self,
        spec: &impl ContentSpec,
        type_node: &TypeNode,
        value: &Value,
        depth: usize,
    ) -> String {
        let (prefix, local) = spec.tag();
        self.record_namespace(prefix);
        let tag = qualified_tag(prefix, local);

        let mut attributes = String::new();
        let mut children = Vec::new();
        if let Value::Object(fields) = value {
            for (key, field) in fields {
                if let Some(attribute) = type_node.attribute(key) {
                    let Some(text) = scalar_text(field) else {
                        continue;
                    };
                    let attribute_prefix = attribute.namespace.as_deref();
                    self.record_namespace(attribute_prefix);
                    let _ = write!(
                        attributes,
                        " {}=\"{}\"",
                        qualified_tag(attribute_prefix, key),
                        text
                    );
                } else if let Some(element) = type_node.element(key) {
                    match field {
                        Value::Array(items) => {
                            for item in items {
                                children.push(self.render(element, item, depth + 1));
                            }
                        }
                        item => children.push(self.render(element, item, depth + 1)),
                    }
                } else {
                    tracing::debug!("{key:?} is not declared on <{tag}>, skipping it");
                }
            }
        } else if !value.is_null() {
            tracing::debug!("<{tag}> needs an object, skipping {value}");
        }

        self.enclose(&tag, &attributes, children, depth)
    }

    /// Writes `children` one per line inside `<tag>`, or a self-closing tag if there are none.
    fn enclose(&self, tag: &str, attributes: &str, children: Vec<String>, depth: usize) -> String {
        if children.is_empty() {
            return format!("<{tag}{attributes}/>");
        }

        let mut out = format!("<{tag}{attributes}>");
        for child in children {
            out.push('\n');
            self.indentation.write(&mut out, 3 + depth);
            out.push_str(&child);
        }
        out.push('\n');
        self.indentation.write(&mut out, 2 + depth);
        let _ = write!(out, "</{tag}>");
        out
    }

    fn render_leaf(&mut self, spec: &impl ContentSpec, value: &Value) -> String {
        let (prefix, local) = spec.tag();
        self.record_namespace(prefix);
        let tag = qualified_tag(prefix, local);
        match scalar_text(value) {
            Some(text) => format!("<{tag}>{}</{tag}>", escape(text.as_str())),
            None => format!("<{tag}/>"),
        }
    }

    /// Renders the parts of `message` inside a SOAP envelope.
    ///
    /// A single part takes the whole `value`. Several parts are wrapped in an element named after
    /// `operation_name`, and each one takes the field of `value` named after it.
    pub fn render_envelope(
        &mut self,
        definitions: &Definitions,
        operation_name: &str,
        message: &OneOrMany<MessagePart>,
        value: &Value,
    ) -> String {
        self.used_namespaces.clear();

        let body = match message {
            OneOrMany::One(part) => self.render(part, value, 0),
            OneOrMany::Many(parts) => {
                let children = parts
                    .iter()
                    .map(|part| {
                        self.render(part, value.get(&part.name).unwrap_or(&Value::Null), 1)
                    })
                    .collect();
                self.enclose(operation_name, "", children, 0)
            }
        };

        let mut out = String::from(XML_DECLARATION);
        let _ = write!(
            out,
            "\n<{SOAP_ENV_PREFIX}:Envelope xmlns:{SOAP_ENV_PREFIX}='{SOAP_ENV_NAMESPACE}'"
        );
        for prefix in &self.used_namespaces {
            if prefix == SOAP_ENV_PREFIX {
                continue;
            }
            match definitions.namespace_uri(prefix) {
                Some(uri) => {
                    let _ = write!(out, " xmlns:{prefix}=\"{uri}\"");
                }
                None => tracing::warn!("prefix {prefix:?} is not declared in the description"),
            }
        }
        out.push_str(">\n");
        self.indentation.write(&mut out, 1);
        let _ = writeln!(out, "<{SOAP_ENV_PREFIX}:Body>");
        self.indentation.write(&mut out, 2);
        out.push_str(&body);
        out.push('\n');
        self.indentation.write(&mut out, 1);
        let _ = write!(out, "</{SOAP_ENV_PREFIX}:Body>\n</{SOAP_ENV_PREFIX}:Envelope>");
        out
    }
}

/// Text of a scalar value; `null` has none.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

impl<'a, 'input: 'a> Definitions<'a, 'input> {
    /// Renders the request of `operation` in an envelope.
    pub fn encode_request(
        &self,
        operation: &crate::OperationSpec,
        value: &Value,
        tracking: NamespaceTracking,
    ) -> String {
        Serializer::new(tracking).render_envelope(
            self,
            &operation.name,
            &operation.request,
            value,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        element_decl::{ElementSpec, Occurs},
        testdata::{SIMPLE_WSDL, USER_SERVICE_WSDL},
    };
    use roxmltree::Document;
    use serde_json::json;

    fn encode(wsdl: &str, operation: &str, value: Value, tracking: NamespaceTracking) -> String {
        let document = Document::parse(wsdl).unwrap();
        let definitions = Definitions::new(&document).unwrap();
        let operation = definitions.resolve_operation(operation).unwrap();
        definitions.encode_request(&operation, &value, tracking)
    }

    fn leaf(name: &str) -> ElementSpec {
        ElementSpec {
            name: name.into(),
            declared_type: None,
            reference: None,
            min_occurs: Occurs::Count(1),
            max_occurs: Occurs::Count(1),
            namespace: None,
            type_def: TypeShape::Leaf(Some("string".into())),
        }
    }

    #[test]
    fn renders_simple_request() {
        let xml = encode(
            SIMPLE_WSDL,
            "GetUser",
            json!({ "id": "42" }),
            NamespaceTracking::Enabled,
        );
        assert_eq!(
            xml,
            "<?xml version='1.0' encoding='utf-8'?>\n\
             <soapenv:Envelope xmlns:soapenv='http://schemas.xmlsoap.org/soap/envelope/'>\n\
             \t<soapenv:Body>\n\
             \t\t<GetUser>\n\
             \t\t\t<id>42</id>\n\
             \t\t</GetUser>\n\
             \t</soapenv:Body>\n\
             </soapenv:Envelope>"
        );
    }

    #[test]
    fn anonymous_type_takes_the_element_tag() {
        let mut address = leaf("address");
        address.namespace = Some("tns".into());
        address.type_def = TypeShape::Complex(TypeNode {
            elements: vec![leaf("city")],
            ..Default::default()
        });
        let mut serializer = Serializer::new(NamespaceTracking::Enabled);
        let xml = serializer.render(&address, &json!({ "city": "Paris" }), 0);
        assert_eq!(xml, "<tns:address>\n\t\t\t<city>Paris</city>\n\t\t</tns:address>");
        assert_eq!(serializer.used_namespaces(), ["tns"]);
    }

    #[test]
    fn unbounded_elements_render_one_tag_per_item() {
        let xml = encode(
            USER_SERVICE_WSDL,
            "Rename",
            json!({
                "id": "7",
                "user": {
                    "id": "7",
                    "phone": [
                        { "type": "home", "number": "1" },
                        { "type": "work", "number": "2" },
                        { "number": "3" },
                    ],
                },
            }),
            NamespaceTracking::Enabled,
        );
        assert_eq!(xml.matches("<phone").count(), 3);
        assert!(xml.contains("<phone type=\"home\">"));
        assert!(xml.contains("<phone type=\"work\">"));
        assert!(xml.contains("<phone>\n"));
        assert!(xml.contains("<number>3</number>"));
    }

    #[test]
    fn declares_used_namespaces_in_first_use_order() {
        let xml = encode(
            USER_SERVICE_WSDL,
            "UpdateUser",
            json!({
                "mode": "full",
                "Trace": { "requestId": "r-1" },
                "user": { "id": "u1", "name": "Ada" },
            }),
            NamespaceTracking::Enabled,
        );
        let envelope = xml.lines().nth(1).unwrap();
        assert_eq!(
            envelope,
            "<soapenv:Envelope xmlns:soapenv='http://schemas.xmlsoap.org/soap/envelope/' \
             xmlns:tns=\"http://example.com/users\" xmlns:ext=\"http://example.com/tracing\">"
        );
        assert!(xml.contains("<tns:UpdateUser mode=\"full\">"));
        assert!(xml.contains("<ext:Trace>"));
    }

    #[test]
    fn disabled_tracking_emits_no_declarations() {
        let xml = encode(
            USER_SERVICE_WSDL,
            "UpdateUser",
            json!({ "Trace": { "requestId": "r-1" } }),
            NamespaceTracking::Disabled,
        );
        assert!(!xml.contains("xmlns:tns"));
        assert!(!xml.contains("xmlns:ext"));
        assert!(xml.contains("<ext:Trace>"));
    }

    #[test]
    fn qualified_attributes_keep_their_prefix() {
        let xml = encode(
            USER_SERVICE_WSDL,
            "Rename",
            json!({ "id": "7", "user": { "id": "7", "createdBy": "ops", "revision": 3 } }),
            NamespaceTracking::Enabled,
        );
        assert!(xml.contains("<user id=\"7\" createdBy=\"ops\" audit:revision=\"3\"/>"));
        assert!(xml.contains("xmlns:audit=\"http://example.com/audit\""));
    }

    #[test]
    fn leaf_text_is_escaped_and_null_is_self_closing() {
        let mut serializer = Serializer::new(NamespaceTracking::Enabled);
        let spec = leaf("note");
        assert_eq!(
            serializer.render(&spec, &json!("a < b & c"), 0),
            "<note>a &lt; b &amp; c</note>"
        );
        assert_eq!(serializer.render(&spec, &Value::Null, 0), "<note/>");
        assert_eq!(serializer.render(&spec, &json!(12), 0), "<note>12</note>");
    }

    #[test]
    fn empty_complex_type_is_self_closing() {
        let xml = encode(SIMPLE_WSDL, "Notify", json!({}), NamespaceTracking::Enabled);
        assert!(xml.contains("\t\t<Notify/>\n"));
    }

    #[test]
    fn empty_complex_type_takes_scalars_as_text() {
        let xml = encode(
            USER_SERVICE_WSDL,
            "ListUsers",
            json!("all"),
            NamespaceTracking::Enabled,
        );
        assert!(xml.contains("\t\t<tns:ListUsers>all</tns:ListUsers>\n"));

        let xml = encode(USER_SERVICE_WSDL, "GetUser", json!("42"), NamespaceTracking::Enabled);
        assert!(xml.contains("\t\t<tns:GetUser/>\n"));
    }

    #[test]
    fn several_parts_are_wrapped_in_the_operation() {
        let xml = encode(
            USER_SERVICE_WSDL,
            "Rename",
            json!({ "id": "7", "user": { "name": "Ada" } }),
            NamespaceTracking::Enabled,
        );
        assert!(xml.contains(
            "\t<soapenv:Body>\n\
             \t\t<Rename>\n\
             \t\t\t<id>7</id>\n\
             \t\t\t<user>\n\
             \t\t\t\t<name>Ada</name>\n\
             \t\t\t</user>\n\
             \t\t</Rename>\n\
             \t</soapenv:Body>"
        ));
    }

    #[test]
    fn spaces_indentation() {
        let document = Document::parse(SIMPLE_WSDL).unwrap();
        let definitions = Definitions::new(&document).unwrap();
        let operation = definitions.resolve_operation("GetUser").unwrap();
        let xml = Serializer::new(NamespaceTracking::Enabled)
            .with_indentation(Indentation::Spaces(2))
            .render_envelope(
                &definitions,
                &operation.name,
                &operation.request,
                &json!({ "id": "1" }),
            );
        assert!(xml.contains("\n  <soapenv:Body>\n    <GetUser>\n      <id>1</id>\n    </GetUser>\n"));
    }
}
