use serde::{Serialize, Serializer};
use std::fmt;

pub type NCName = String;
pub type Sequence<T> = Vec<T>;

/// A `prefix:local` name as written in a WSDL or schema attribute value.
///
/// The prefix is kept verbatim; it is only mapped to a namespace URI when a declaration has to be
/// emitted (see [`Definitions::namespace_uri`](crate::Definitions::namespace_uri)).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub prefix: Option<String>,
    pub local: NCName,
}

impl QualifiedName {
    pub fn new(prefix: Option<impl Into<String>>, local: impl Into<String>) -> Self {
        Self {
            prefix: prefix.map(Into::into),
            local: local.into(),
        }
    }

    /// Splits on the first colon. A name without a colon has no prefix.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((prefix, local)) => Self::new(Some(prefix), local),
            None => Self::new(None::<String>, raw),
        }
    }

    /// Looks up the namespace URI bound to the prefix in the scope of `context`.
    pub fn namespace_uri<'n>(&self, context: roxmltree::Node<'n, '_>) -> Option<&'n str> {
        context.lookup_namespace_uri(self.prefix.as_deref())
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefix.as_ref() {
            Some(prefix) => write!(f, "{}:{}", prefix, self.local),
            None => write!(f, "{}", self.local),
        }
    }
}

impl Serialize for QualifiedName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub fn split_name(raw: &str) -> QualifiedName {
    QualifiedName::parse(raw)
}

/// Returns the prefix of `raw`, optionally followed by a colon, or an empty string.
pub fn namespace_of(raw: &str, with_suffix: bool) -> String {
    match raw.split_once(':') {
        Some((prefix, _)) if with_suffix => format!("{prefix}:"),
        Some((prefix, _)) => prefix.to_string(),
        None => String::new(),
    }
}

pub fn local_name(raw: &str) -> &str {
    raw.split_once(':').map(|(_, local)| local).unwrap_or(raw)
}

/// Formats a tag name, with the prefix if there is one.
pub(crate) fn qualified_tag(prefix: Option<&str>, local: &str) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{local}"),
        _ => local.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_colon() {
        let name = split_name("tns:GetUser");
        assert_eq!(name.prefix.as_deref(), Some("tns"));
        assert_eq!(name.local, "GetUser");

        let name = split_name("a:b:c");
        assert_eq!(name.prefix.as_deref(), Some("a"));
        assert_eq!(name.local, "b:c");
    }

    #[test]
    fn no_colon_means_no_prefix() {
        let name = split_name("GetUser");
        assert_eq!(name.prefix, None);
        assert_eq!(name.local, "GetUser");
        assert_eq!(name.to_string(), "GetUser");
    }

    #[test]
    fn namespace_of_with_and_without_suffix() {
        assert_eq!(namespace_of("xs:string", true), "xs:");
        assert_eq!(namespace_of("xs:string", false), "xs");
        assert_eq!(namespace_of("string", true), "");
        assert_eq!(local_name("xs:string"), "string");
        assert_eq!(local_name("string"), "string");
    }

    #[test]
    fn tag_formatting_skips_empty_prefix() {
        assert_eq!(qualified_tag(Some("tns"), "User"), "tns:User");
        assert_eq!(qualified_tag(Some(""), "User"), "User");
        assert_eq!(qualified_tag(None, "User"), "User");
    }

    #[test]
    fn prefixes_resolve_in_scope_of_the_node() {
        let document = roxmltree::Document::parse(
            r#"<a xmlns="urn:default" xmlns:t="urn:t"><b xmlns:u="urn:u"/></a>"#,
        )
        .unwrap();
        let inner = document.root_element().first_element_child().unwrap();
        assert_eq!(split_name("t:x").namespace_uri(inner), Some("urn:t"));
        assert_eq!(split_name("u:x").namespace_uri(inner), Some("urn:u"));
        assert_eq!(split_name("x").namespace_uri(inner), Some("urn:default"));
        assert_eq!(split_name("v:x").namespace_uri(inner), None);
    }
}
