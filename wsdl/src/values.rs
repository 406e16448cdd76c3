use crate::xstypes::QualifiedName;
use roxmltree::Node;

pub trait ActualValue<'a>: Sized {
    fn convert(src: &'a str) -> Option<Self>;
}

impl<'a> ActualValue<'a> for &'a str {
    fn convert(src: &'a str) -> Option<Self> {
        Some(src)
    }
}

impl ActualValue<'_> for String {
    fn convert(src: &'_ str) -> Option<Self> {
        Some(src.to_string())
    }
}

impl ActualValue<'_> for QualifiedName {
    fn convert(src: &'_ str) -> Option<Self> {
        Some(QualifiedName::parse(src.trim()))
    }
}

impl ActualValue<'_> for u64 {
    fn convert(src: &str) -> Option<Self> {
        src.trim().parse().ok()
    }
}

pub fn actual_value<'a, T: ActualValue<'a>>(x: &'a str) -> Option<T> {
    T::convert(x)
}

/// Reads and converts an attribute of `node`. Values that fail to convert are treated as absent.
pub fn attribute_value<'a, T: ActualValue<'a>>(node: Node<'a, '_>, name: &str) -> Option<T> {
    let raw = node.attribute(name)?;
    let value = actual_value(raw);
    if value.is_none() {
        tracing::warn!(
            "ignoring unparseable value {raw:?} for attribute {name:?} on <{}>",
            node.tag_name().name()
        );
    }
    value
}

/// Element children of `node` with the given local name, in document order.
pub fn children_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag_name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |c| c.is_element() && c.tag_name().name() == tag_name)
}

pub fn child_named<'a, 'input: 'a>(node: Node<'a, 'input>, tag_name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|c| c.is_element() && c.tag_name().name() == tag_name)
}

/// Whether `node` has element content besides annotations.
pub fn has_structure(node: Node) -> bool {
    node.children()
        .any(|c| c.is_element() && c.tag_name().name() != "annotation")
}
