use std::collections::BTreeSet;

use roxmltree::Node;
use serde::Serialize;

use super::{
    definitions::Definitions,
    error::{Result, WsdlError},
    shared::{ContentSpec, TypeShape},
    values::{attribute_value, child_named, children_named},
    xstypes::{NCName, QualifiedName},
};

/// Either a single value or a sequence of them.
///
/// Messages with exactly one part are represented by the part itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn from_vec(mut items: Vec<T>) -> Self {
        match items.pop() {
            Some(item) if items.is_empty() => Self::One(item),
            Some(item) => {
                items.push(item);
                Self::Many(items)
            }
            None => Self::Many(items),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::One(item) => std::slice::from_ref(item),
            Self::Many(items) => items,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn one(&self) -> Option<&T> {
        match self {
            Self::One(item) => Some(item),
            Self::Many(_) => None,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }
}

/// A `<part>` of a WSDL message
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePart {
    pub name: NCName,
    /// Prefix of the referenced element declaration; parts given by `type` are unqualified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<QualifiedName>,
    pub type_def: TypeShape,
}

impl MessagePart {
    pub const TAG_NAME: &'static str = "part";

    fn map_from_xml(definitions: &Definitions, part: Node) -> Result<Self> {
        let name = attribute_value(part, "name").unwrap_or_default();
        let element: Option<QualifiedName> = attribute_value(part, "element");
        let type_: Option<QualifiedName> = attribute_value(part, "type");

        let (namespace, type_def) = match (&element, &type_) {
            (Some(element), _) => (
                element.prefix.clone(),
                definitions.schema().resolve_type(&element.local)?,
            ),
            (None, Some(type_)) => (
                None,
                definitions.schema().resolve_type_reference(type_, part)?,
            ),
            (None, None) => {
                tracing::warn!("message part {name:?} has neither an element nor a type");
                (None, TypeShape::default())
            }
        };

        Ok(Self {
            name,
            namespace,
            declared_type: element.or(type_),
            type_def,
        })
    }
}

impl ContentSpec for MessagePart {
    fn name(&self) -> &str {
        &self.name
    }

    fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    fn type_def(&self) -> &TypeShape {
        &self.type_def
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OperationSpec {
    pub name: String,
    pub request: OneOrMany<MessagePart>,
    pub response: OneOrMany<MessagePart>,
}

impl<'a, 'input: 'a> Definitions<'a, 'input> {
    /// Names of the operations of all bindings, sorted and without duplicates.
    pub fn list_operations(&self) -> Result<Vec<String>> {
        let bindings = self.children("binding").collect::<Vec<_>>();
        if bindings.is_empty() {
            return Err(WsdlError::MalformedDocument(
                "missing <binding> declaration".into(),
            ));
        }
        let names = bindings
            .into_iter()
            .flat_map(|binding| children_named(binding, "operation"))
            .filter_map(|operation| operation.attribute("name"))
            .map(String::from)
            .collect::<BTreeSet<_>>();
        Ok(names.into_iter().collect())
    }

    pub fn resolve_operation(&self, name: &str) -> Result<OperationSpec> {
        self.required_child("portType")?;
        let operation = self
            .children("portType")
            .flat_map(|port_type| children_named(port_type, "operation"))
            .find(|operation| operation.attribute("name") == Some(name))
            .ok_or_else(|| WsdlError::OperationNotFound(name.into()))?;

        tracing::debug!("resolving operation {name}");
        Ok(OperationSpec {
            name: name.into(),
            request: self.resolve_message(operation, "input")?,
            response: self.resolve_message(operation, "output")?,
        })
    }

    /// Maps the message referenced by the `direction` (`input` or `output`) child of a port type
    /// operation. A missing direction (one-way operations) yields no parts.
    fn resolve_message(
        &self,
        operation: Node,
        direction: &str,
    ) -> Result<OneOrMany<MessagePart>> {
        let Some(reference) = child_named(operation, direction)
            .and_then(|d| attribute_value::<QualifiedName>(d, "message"))
        else {
            return Ok(OneOrMany::Many(Vec::new()));
        };

        let message = self
            .children("message")
            .find(|message| message.attribute("name") == Some(reference.local.as_str()))
            .ok_or_else(|| {
                WsdlError::MalformedDocument(format!("missing <message> declaration {reference}"))
            })?;

        let parts = children_named(message, MessagePart::TAG_NAME)
            .map(|part| MessagePart::map_from_xml(self, part))
            .collect::<Result<Vec<_>>>()?;
        Ok(OneOrMany::from_vec(parts))
    }
}
