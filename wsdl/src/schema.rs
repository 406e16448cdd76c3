use roxmltree::Node;

use super::{
    error::Result,
    mapping_context::MappingContext,
    shared::TypeShape,
    values::{child_named, children_named},
    xstypes::QualifiedName,
};

/// The `<schema>` elements embedded in a WSDL `<types>` section.
///
/// Top-level declarations are looked up by their `name` attribute across all schemas, in
/// document order; the first match wins.
#[derive(Clone, Debug, Default)]
pub struct Schema<'a, 'input> {
    schemas: Vec<Node<'a, 'input>>,
}

impl<'a, 'input: 'a> Schema<'a, 'input> {
    pub const TAG_NAME: &'static str = "schema";

    pub fn new(schemas: Vec<Node<'a, 'input>>) -> Self {
        Self { schemas }
    }

    /// Collects the schemas below the `<types>` child of a WSDL `<definitions>` element. A
    /// description without `<types>` has an empty schema.
    pub fn from_definitions(definitions: Node<'a, 'input>) -> Self {
        let schemas = child_named(definitions, "types")
            .map(|types| children_named(types, Self::TAG_NAME).collect())
            .unwrap_or_default();
        Self::new(schemas)
    }

    pub fn schemas(&self) -> &[Node<'a, 'input>] {
        &self.schemas
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    fn top_level_nodes(&self) -> impl Iterator<Item = Node<'a, 'input>> + '_ {
        self.schemas
            .iter()
            .flat_map(|schema| schema.children().filter(|c| c.is_element()))
    }

    /// Any top-level declaration with the given name
    pub fn top_level(&self, name: &str) -> Option<Node<'a, 'input>> {
        self.top_level_nodes()
            .find(|c| c.attribute("name") == Some(name))
    }

    /// A top-level declaration of the given kind (`element`, `complexType`, ...)
    pub fn top_level_of_kind(&self, tag_name: &str, name: &str) -> Option<Node<'a, 'input>> {
        self.top_level_nodes()
            .find(|c| c.tag_name().name() == tag_name && c.attribute("name") == Some(name))
    }

    /// Expands the declaration named `type_name` into a type tree.
    pub fn resolve_type(&self, type_name: &str) -> Result<TypeShape> {
        MappingContext::new(self).resolve_type(type_name)
    }

    /// Expands a `type="..."` reference, preferring type definitions over element declarations
    /// of the same name. `scope` is the node the reference was written on.
    pub fn resolve_type_reference(
        &self,
        type_name: &QualifiedName,
        scope: Node,
    ) -> Result<TypeShape> {
        MappingContext::new(self).resolve_type_reference(type_name, scope)
    }
}
