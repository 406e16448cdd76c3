use serde::Serialize;

use super::{
    attribute_decl::AttributeSpec, complex_type_def::TypeNode, element_decl::ElementSpec,
    xstypes::NCName,
};

/// The resolved shape of a type reference.
///
/// `Leaf` carries the name of the simple type the value is ultimately built on, if it is known
/// (e.g. the restriction base of a `simpleType`, or the built-in type itself).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeShape {
    Leaf(Option<NCName>),
    Complex(TypeNode),
}

impl Default for TypeShape {
    fn default() -> Self {
        Self::Leaf(None)
    }
}

impl TypeShape {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    pub fn complex(&self) -> Option<&TypeNode> {
        match self {
            Self::Complex(node) => Some(node),
            Self::Leaf(_) => None,
        }
    }

    pub fn elements(&self) -> &[ElementSpec] {
        self.complex().map(|c| c.elements.as_slice()).unwrap_or(&[])
    }

    pub fn attributes(&self) -> &[AttributeSpec] {
        self.complex().map(|c| c.attributes.as_slice()).unwrap_or(&[])
    }
}

/// Something that renders to (and parses from) a single XML element: a sequence element or a
/// message part.
pub trait ContentSpec {
    fn name(&self) -> &str;
    fn namespace(&self) -> Option<&str>;
    fn type_def(&self) -> &TypeShape;

    /// Whether the declaration allows an unbounded number of occurrences
    fn is_unbounded(&self) -> bool {
        false
    }

    /// The tag this declaration is written as: the name of a named complex type, otherwise the
    /// declaration's own name. Anonymous types never supply a tag.
    fn tag(&self) -> (Option<&str>, &str) {
        match self.type_def() {
            TypeShape::Complex(TypeNode {
                name: Some(name),
                namespace,
                ..
            }) => (namespace.as_deref().or(self.namespace()), name),
            _ => (self.namespace(), self.name()),
        }
    }
}
