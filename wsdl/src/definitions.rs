use roxmltree::{Document, Node};
use serde::Serialize;

use super::{
    error::{Result, WsdlError},
    schema::Schema,
    values::{child_named, children_named},
};

/// A namespace declared on the `<definitions>` element
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NamespaceDeclaration {
    pub prefix: String,
    pub uri: String,
}

/// A parsed WSDL 1.1 `<definitions>` element together with its embedded schema.
#[derive(Clone, Debug)]
pub struct Definitions<'a, 'input> {
    root: Node<'a, 'input>,
    schema: Schema<'a, 'input>,
}

impl<'a, 'input: 'a> Definitions<'a, 'input> {
    pub const TAG_NAME: &'static str = "definitions";

    pub fn new(document: &'a Document<'input>) -> Result<Self> {
        let root = document.root_element();
        if root.tag_name().name() != Self::TAG_NAME {
            return Err(WsdlError::MalformedDocument(format!(
                "expected a <{}> root element, found <{}>",
                Self::TAG_NAME,
                root.tag_name().name()
            )));
        }
        let schema = Schema::from_definitions(root);
        if schema.is_empty() {
            tracing::debug!("the description has no embedded schema");
        }
        Ok(Self { root, schema })
    }

    pub fn root(&self) -> Node<'a, 'input> {
        self.root
    }

    pub fn schema(&self) -> &Schema<'a, 'input> {
        &self.schema
    }

    /// The single required child `tag_name` of the root element
    pub(crate) fn required_child(&self, tag_name: &str) -> Result<Node<'a, 'input>> {
        child_named(self.root, tag_name).ok_or_else(|| {
            WsdlError::MalformedDocument(format!("missing <{tag_name}> declaration"))
        })
    }

    pub(crate) fn children(&self, tag_name: &'a str) -> impl Iterator<Item = Node<'a, 'input>> {
        children_named(self.root, tag_name)
    }

    /// The prefixed namespaces declared on the root element, in declaration order.
    pub fn namespaces(&self) -> Vec<NamespaceDeclaration> {
        self.root
            .namespaces()
            .filter_map(|ns| {
                let prefix = ns.name()?;
                (prefix != "xml").then(|| NamespaceDeclaration {
                    prefix: prefix.to_string(),
                    uri: ns.uri().to_string(),
                })
            })
            .collect()
    }

    /// Resolves a prefix used in the description to its namespace URI. Declarations on the root
    /// element win over declarations on the embedded schemas.
    pub fn namespace_uri(&self, prefix: &str) -> Option<&'a str> {
        self.root.lookup_namespace_uri(Some(prefix)).or_else(|| {
            self.schema
                .schemas()
                .iter()
                .find_map(|schema| schema.lookup_namespace_uri(Some(prefix)))
        })
    }
}
