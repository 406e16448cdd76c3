use serde::Serialize;

use super::{
    attribute_decl::AttributeSpec,
    attribute_group_def,
    element_decl::ElementSpec,
    error::Result,
    mapping_context::MappingContext,
    shared::TypeShape,
    values::{attribute_value, child_named, children_named},
    xstypes::{NCName, QualifiedName, Sequence},
};
use roxmltree::Node;

/// An expanded complex type.
///
/// A node without a `name` is anonymous: when it is written to or read from XML, the tag comes
/// from the enclosing element declaration or message part.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<NCName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Set when the node was reached through a declaration of the form `name="..." type="..."`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub alias_of: Option<QualifiedName>,
    pub elements: Sequence<ElementSpec>,
    pub attributes: Sequence<AttributeSpec>,
}

impl TypeNode {
    pub const TAG_NAME: &'static str = "complexType";

    /// Model groups whose element children are read in order
    const SEQUENCE_GROUPS: [&'static str; 2] = ["sequence", "all"];

    pub fn element(&self, name: &str) -> Option<&ElementSpec> {
        self.elements.iter().find(|e| e.name == name)
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeSpec> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.attributes.is_empty()
    }

    pub fn has_unbounded_elements(&self) -> bool {
        self.elements.iter().any(|e| {
            e.is_unbounded()
                || e.type_def
                    .complex()
                    .is_some_and(TypeNode::has_unbounded_elements)
        })
    }

    pub(crate) fn map_from_xml<'a, 'input: 'a>(
        context: &mut MappingContext<'_, 'a, 'input>,
        complex_type: Node<'a, 'input>,
        name: Option<NCName>,
    ) -> Result<Self> {
        let mut type_node = TypeNode {
            name,
            ..Default::default()
        };

        // Content derived by extension starts with the content of its base type
        let content = match child_named(complex_type, "complexContent")
            .and_then(|content| child_named(content, "extension"))
        {
            Some(extension) => {
                if let Some(base) = attribute_value::<QualifiedName>(extension, "base") {
                    if let TypeShape::Complex(base_type) =
                        context.resolve_type_reference(&base, extension)?
                    {
                        tracing::debug!("extending {base}");
                        type_node.elements.extend(base_type.elements);
                        type_node.attributes.extend(base_type.attributes);
                    }
                }
                extension
            }
            None => complex_type,
        };

        for group in Self::SEQUENCE_GROUPS {
            let Some(group) = child_named(content, group) else {
                continue;
            };
            for element in children_named(group, ElementSpec::TAG_NAME) {
                type_node
                    .elements
                    .push(ElementSpec::map_from_xml(context, element)?);
            }
        }

        type_node
            .attributes
            .extend(attribute_group_def::extract_attributes(context, content)?);

        Ok(type_node)
    }
}
