use serde::{Serialize, Serializer};

use super::{
    error::Result,
    mapping_context::MappingContext,
    shared::{ContentSpec, TypeShape},
    values::{attribute_value, child_named, ActualValue},
    xstypes::{NCName, QualifiedName},
};

use roxmltree::Node;

/// Value of a `minOccurs` / `maxOccurs` attribute
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Occurs {
    Unbounded,
    Count(u64),
}

impl Default for Occurs {
    fn default() -> Self {
        Self::Count(1)
    }
}

impl ActualValue<'_> for Occurs {
    fn convert(src: &str) -> Option<Self> {
        match src.trim() {
            "unbounded" => Some(Self::Unbounded),
            count => count.parse().ok().map(Self::Count),
        }
    }
}

impl Serialize for Occurs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unbounded => serializer.serialize_str("unbounded"),
            Self::Count(count) => serializer.serialize_u64(*count),
        }
    }
}

/// An element declaration inside a sequence, with its type expanded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSpec {
    pub name: NCName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<QualifiedName>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<QualifiedName>,
    pub min_occurs: Occurs,
    pub max_occurs: Occurs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub type_def: TypeShape,
}

impl ElementSpec {
    pub const TAG_NAME: &'static str = "element";

    pub(crate) fn map_from_xml<'a, 'input: 'a>(
        context: &mut MappingContext<'_, 'a, 'input>,
        element: Node<'a, 'input>,
    ) -> Result<Self> {
        let reference: Option<QualifiedName> = attribute_value(element, "ref");
        let mut spec = Self {
            name: attribute_value(element, "name").unwrap_or_default(),
            declared_type: attribute_value(element, "type"),
            reference: reference.clone(),
            min_occurs: attribute_value(element, "minOccurs").unwrap_or_default(),
            max_occurs: attribute_value(element, "maxOccurs").unwrap_or_default(),
            namespace: None,
            type_def: TypeShape::default(),
        };

        let has_local_type = spec.declared_type.is_some();
        // Where the (anonymous) type definition lives, if it is given inline
        let mut definition_node = element;

        if let Some(reference) = reference {
            // The referenced declaration fills in what the local one leaves open. The prefix
            // comes from the ref itself, not from where the declaration is located.
            spec.namespace = reference.prefix.clone();
            match context.schema().top_level_of_kind(Self::TAG_NAME, &reference.local) {
                Some(referent) => {
                    tracing::debug!("element ref {reference} resolved");
                    if spec.name.is_empty() {
                        spec.name = attribute_value(referent, "name").unwrap_or_default();
                    }
                    if spec.declared_type.is_none() {
                        spec.declared_type = attribute_value(referent, "type");
                    }
                    definition_node = referent;
                }
                None => {
                    tracing::warn!("element ref {reference} does not name a top-level element");
                }
            }
            if spec.name.is_empty() {
                spec.name = reference.local.clone();
            }
        }

        spec.type_def = if let Some(declared_type) = spec.declared_type.as_ref() {
            let scope = if has_local_type { element } else { definition_node };
            context.resolve_type_reference(declared_type, scope)?
        } else if let Some(complex_type) = child_named(definition_node, "complexType") {
            TypeShape::Complex(context.map_complex_type(complex_type, None)?)
        } else if let Some(simple_type) = child_named(definition_node, "simpleType") {
            TypeShape::Leaf(MappingContext::simple_type_hint(simple_type))
        } else {
            TypeShape::Leaf(None)
        };

        Ok(spec)
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_occurs == Occurs::Unbounded
    }
}

impl ContentSpec for ElementSpec {
    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    fn type_def(&self) -> &TypeShape {
        &self.type_def
    }

    fn is_unbounded(&self) -> bool {
        ElementSpec::is_unbounded(self)
    }
}
