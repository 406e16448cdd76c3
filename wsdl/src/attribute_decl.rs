use serde::Serialize;

use super::{
    mapping_context::MappingContext,
    values::attribute_value,
    xstypes::{NCName, QualifiedName},
};
use roxmltree::Node;

/// An attribute declaration, with `ref`s overlaid by the declaration they point to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSpec {
    pub name: NCName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<QualifiedName>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<QualifiedName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl AttributeSpec {
    pub const TAG_NAME: &'static str = "attribute";

    pub(crate) fn map_from_xml(context: &MappingContext, attribute: Node) -> Self {
        let reference: Option<QualifiedName> = attribute_value(attribute, "ref");
        let mut spec = Self {
            name: attribute_value(attribute, "name").unwrap_or_default(),
            declared_type: attribute_value(attribute, "type"),
            reference: reference.clone(),
            namespace: None,
        };

        if let Some(reference) = reference {
            // Global attributes are always qualified, so the prefix of the ref is kept
            spec.namespace = reference.prefix.clone();
            if let Some(referent) = context
                .schema()
                .top_level_of_kind(Self::TAG_NAME, &reference.local)
            {
                tracing::debug!("attribute ref {reference} resolved");
                spec.overlay(referent);
            }
            if spec.name.is_empty() {
                spec.name = reference.local;
            }
        }

        spec
    }

    /// Fills in fields from `declaration` that are not set locally.
    fn overlay(&mut self, declaration: Node) {
        if self.name.is_empty() {
            self.name = attribute_value(declaration, "name").unwrap_or_default();
        }
        if self.declared_type.is_none() {
            self.declared_type = attribute_value(declaration, "type");
        }
    }
}
