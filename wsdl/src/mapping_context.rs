use std::collections::HashSet;

use roxmltree::Node;

use super::{
    builtins::{is_builtin_type, XS_NAMESPACE},
    complex_type_def::TypeNode,
    element_decl::ElementSpec,
    error::{Result, WsdlError},
    schema::Schema,
    shared::TypeShape,
    values::{attribute_value, child_named, has_structure},
    xstypes::{NCName, QualifiedName},
};

/// Names whose resolution is currently on the stack
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum InProgress {
    /// A lookup by declaration name, see [`MappingContext::resolve_type`]
    Declaration(NCName),
    /// A `type="..."` or `base="..."` reference
    TypeDefinition(NCName),
    AttributeGroup(NCName),
}

impl InProgress {
    fn name(&self) -> &str {
        match self {
            Self::Declaration(name) | Self::TypeDefinition(name) | Self::AttributeGroup(name) => {
                name
            }
        }
    }
}

/// State of a single type resolution. Resolved trees are owned values without back-references,
/// so a schema that refers back to a type that is still being expanded is rejected.
pub(crate) struct MappingContext<'s, 'a, 'input> {
    schema: &'s Schema<'a, 'input>,
    in_progress: HashSet<InProgress>,
}

impl<'s, 'a, 'input: 'a> MappingContext<'s, 'a, 'input> {
    pub(crate) fn new(schema: &'s Schema<'a, 'input>) -> Self {
        Self {
            schema,
            in_progress: HashSet::new(),
        }
    }

    pub(crate) fn schema(&self) -> &'s Schema<'a, 'input> {
        self.schema
    }

    /// Runs `f` with `key` marked as in progress.
    pub(crate) fn guarded<T>(
        &mut self,
        key: InProgress,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        if self.in_progress.contains(&key) {
            return Err(WsdlError::CyclicSchema(key.name().to_string()));
        }
        self.in_progress.insert(key.clone());
        let result = f(self);
        let was_removed = self.in_progress.remove(&key);
        debug_assert!(was_removed);
        result
    }

    /// Expands the top-level declaration named `type_name`.
    ///
    /// Names that are not declared at all resolve to a leaf; they are usually built-in types.
    pub(crate) fn resolve_type(&mut self, type_name: &str) -> Result<TypeShape> {
        self.guarded(InProgress::Declaration(type_name.into()), |context| {
            context.resolve_declaration(type_name)
        })
    }

    fn resolve_declaration(&mut self, type_name: &str) -> Result<TypeShape> {
        let Some(anchor) = self.schema.top_level(type_name) else {
            return Ok(Self::undeclared(type_name));
        };
        let kind = anchor.tag_name().name();
        let is_element = kind == ElementSpec::TAG_NAME;

        if kind == TypeNode::TAG_NAME {
            return Ok(TypeShape::Complex(self.map_complex_type(anchor, None)?));
        }

        if !has_structure(anchor) {
            let Some(target) = attribute_value::<QualifiedName>(anchor, "type") else {
                // Terminal simple declaration
                return Ok(TypeShape::Leaf(None));
            };
            tracing::debug!("{type_name} is declared with type {target}");
            return Ok(match self.resolve_type_reference(&target, anchor)? {
                TypeShape::Complex(inner) => TypeShape::Complex(TypeNode {
                    name: Some(type_name.into()),
                    namespace: is_element.then(|| Self::target_prefix(anchor)).flatten(),
                    alias_of: Some(target),
                    elements: inner.elements,
                    attributes: inner.attributes,
                }),
                leaf => leaf,
            });
        }

        if kind == "simpleType" {
            return Ok(TypeShape::Leaf(Self::simple_type_hint(anchor)));
        }

        let complex_type = child_named(anchor, TypeNode::TAG_NAME).or_else(|| {
            self.schema
                .top_level_of_kind(TypeNode::TAG_NAME, type_name)
        });
        match complex_type {
            Some(complex_type) => {
                let name = is_element.then(|| type_name.to_string());
                let mut node = self.map_complex_type(complex_type, name)?;
                if is_element {
                    node.namespace = Self::target_prefix(anchor);
                }
                Ok(TypeShape::Complex(node))
            }
            None => Ok(TypeShape::Leaf(
                child_named(anchor, "simpleType").and_then(Self::simple_type_hint),
            )),
        }
    }

    /// Expands a `type="..."` reference written on `scope`. Type definitions take precedence over
    /// element declarations with the same name.
    pub(crate) fn resolve_type_reference(
        &mut self,
        target: &QualifiedName,
        scope: Node,
    ) -> Result<TypeShape> {
        if target.namespace_uri(scope) == Some(XS_NAMESPACE) {
            return Ok(TypeShape::Leaf(Some(target.local.clone())));
        }
        let schema = self.schema;
        self.guarded(
            InProgress::TypeDefinition(target.local.clone()),
            |context| {
                if let Some(complex_type) =
                    schema.top_level_of_kind(TypeNode::TAG_NAME, &target.local)
                {
                    Ok(TypeShape::Complex(
                        context.map_complex_type(complex_type, None)?,
                    ))
                } else if let Some(simple_type) = schema.top_level_of_kind("simpleType", &target.local)
                {
                    Ok(TypeShape::Leaf(Self::simple_type_hint(simple_type)))
                } else {
                    context.resolve_declaration(&target.local)
                }
            },
        )
    }

    pub(crate) fn map_complex_type(
        &mut self,
        complex_type: Node<'a, 'input>,
        name: Option<NCName>,
    ) -> Result<TypeNode> {
        TypeNode::map_from_xml(self, complex_type, name)
    }

    /// The simple type a `simpleType` is built on, when it says so directly.
    pub(crate) fn simple_type_hint(simple_type: Node) -> Option<NCName> {
        if let Some(restriction) = child_named(simple_type, "restriction") {
            return attribute_value::<QualifiedName>(restriction, "base").map(|base| base.local);
        }
        child_named(simple_type, "list")
            .and_then(|list| attribute_value::<QualifiedName>(list, "itemType"))
            .map(|item| item.local)
    }

    /// The prefix under which the target namespace of the schema containing `declaration` is
    /// in scope.
    fn target_prefix(declaration: Node) -> Option<String> {
        let target_namespace = declaration
            .ancestors()
            .find(|a| a.tag_name().name() == Schema::TAG_NAME)?
            .attribute("targetNamespace")?;
        declaration
            .lookup_prefix(target_namespace)
            .filter(|prefix| !prefix.is_empty())
            .map(Into::into)
    }

    fn undeclared(type_name: &str) -> TypeShape {
        if is_builtin_type(type_name) {
            tracing::debug!("{type_name} is a built-in type");
        } else {
            tracing::warn!("type {type_name:?} is not declared, treating it as a simple value");
        }
        TypeShape::Leaf(Some(type_name.into()))
    }
}
