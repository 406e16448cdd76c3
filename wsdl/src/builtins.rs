use std::collections::HashSet;

use lazy_static::lazy_static;

// Namespaces used by WSDL 1.1 and SOAP 1.1 / 1.2
pub const XS_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";
pub const WSDL_NAMESPACE: &str = "http://schemas.xmlsoap.org/wsdl/";
pub const SOAP_ENV_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";
pub const SOAP12_ENV_NAMESPACE: &str = "http://www.w3.org/2003/05/soap-envelope";

/// Prefix bound to [`SOAP_ENV_NAMESPACE`] in rendered envelopes
pub const SOAP_ENV_PREFIX: &str = "soapenv";
pub const XML_DECLARATION: &str = "<?xml version='1.0' encoding='utf-8'?>";

lazy_static! {
    /// Local names of the built-in datatypes of XML Schema 1.1 Part 2
    pub static ref XS_BUILTIN_TYPES: HashSet<&'static str> = [
        "anyType", "anySimpleType", "anyAtomicType", "string", "boolean", "decimal", "float",
        "double", "duration", "dateTime", "time", "date", "gYearMonth", "gYear", "gMonthDay",
        "gDay", "gMonth", "hexBinary", "base64Binary", "anyURI", "QName", "NOTATION",
        "normalizedString", "token", "language", "NMTOKEN", "NMTOKENS", "Name", "NCName", "ID",
        "IDREF", "IDREFS", "ENTITY", "ENTITIES", "integer", "nonPositiveInteger",
        "negativeInteger", "long", "int", "short", "byte", "nonNegativeInteger", "unsignedLong",
        "unsignedInt", "unsignedShort", "unsignedByte", "positiveInteger", "yearMonthDuration",
        "dayTimeDuration", "dateTimeStamp",
    ]
    .into_iter()
    .collect();
}

pub fn is_builtin_type(local_name: &str) -> bool {
    XS_BUILTIN_TYPES.contains(local_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knows_common_builtins() {
        assert!(is_builtin_type("string"));
        assert!(is_builtin_type("dateTime"));
        assert!(!is_builtin_type("User"));
    }
}
