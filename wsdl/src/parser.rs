use roxmltree::{Document, Node};
use serde_json::{Map, Value};

use super::{
    definitions::Definitions,
    error::{Result, WsdlError},
    operation::{MessagePart, OneOrMany, OperationSpec},
    shared::{ContentSpec, TypeShape},
    values::child_named,
};

/// Reads `node` into a data object according to `spec`; the inverse of
/// [`Serializer::render`](crate::Serializer::render).
///
/// Leaves yield their text (or `null` when there is none). Complex elements yield an object with
/// the declared attributes and child elements that are present; undeclared content is skipped.
pub fn parse_element(spec: &impl ContentSpec, node: Node) -> Value {
    let type_node = match spec.type_def() {
        TypeShape::Complex(type_node) => type_node,
        TypeShape::Leaf(_) => return leaf_value(node),
    };

    let mut fields = Map::new();
    for attribute in node.attributes() {
        if type_node.attribute(attribute.name()).is_some() {
            fields.insert(
                attribute.name().to_string(),
                Value::String(attribute.value().to_string()),
            );
        }
    }

    // Children grouped by local name, in order of first appearance
    let mut groups: Vec<(&str, Vec<Node>)> = Vec::new();
    for child in node.children().filter(Node::is_element) {
        let name = child.tag_name().name();
        match groups.iter_mut().find(|(group, _)| *group == name) {
            Some((_, nodes)) => nodes.push(child),
            None => groups.push((name, vec![child])),
        }
    }

    for (name, nodes) in groups {
        // Named types are written with their own tag instead of the element name
        let Some(element) = type_node.elements.iter().find(|e| e.tag().1 == name) else {
            tracing::debug!("<{name}> is not declared in {:?}, skipping it", spec.name());
            continue;
        };
        let value = if element.is_unbounded() || nodes.len() > 1 {
            Value::Array(nodes.iter().map(|n| parse_element(element, *n)).collect())
        } else {
            parse_element(element, nodes[0])
        };
        fields.insert(element.name.clone(), value);
    }

    Value::Object(fields)
}

fn leaf_value(node: Node) -> Value {
    let mut texts = node.children().filter(Node::is_text).peekable();
    if texts.peek().is_none() {
        return Value::Null;
    }
    Value::String(texts.filter_map(|t| t.text()).collect())
}

/// The single element inside the body of a SOAP envelope.
pub fn envelope_payload<'a, 'input>(document: &'a Document<'input>) -> Result<Node<'a, 'input>> {
    let envelope = document.root_element();
    if envelope.tag_name().name() != "Envelope" {
        return Err(WsdlError::MalformedEnvelope(format!(
            "expected an Envelope root element, found <{}>",
            envelope.tag_name().name()
        )));
    }
    let body = child_named(envelope, "Body")
        .ok_or_else(|| WsdlError::MalformedEnvelope("the envelope has no Body".into()))?;

    let mut payload = body.children().filter(Node::is_element);
    let (Some(first), None) = (payload.next(), payload.next()) else {
        let count = body.children().filter(Node::is_element).count();
        return Err(WsdlError::MalformedEnvelope(format!(
            "expected exactly one element in the body, found {count}"
        )));
    };

    if first.tag_name().name() == "Fault" {
        return Err(fault(first));
    }
    Ok(first)
}

/// Extracts code and reason from a SOAP 1.1 or 1.2 `Fault`.
fn fault(fault: Node) -> WsdlError {
    let text_of = |name: &str| {
        fault
            .descendants()
            .find(|d| d.is_element() && d.tag_name().name() == name)
            .map(|d| {
                d.descendants()
                    .filter(|t| t.is_text())
                    .filter_map(|t| t.text())
                    .collect::<String>()
            })
            .map(|t| t.trim().to_string())
    };
    let code = text_of("faultcode")
        .or_else(|| text_of("Code"))
        .unwrap_or_default();
    let reason = text_of("faultstring")
        .or_else(|| text_of("Reason"))
        .unwrap_or_default();
    WsdlError::SoapFault { code, reason }
}

/// Reads the payload of a message.
///
/// For a single part whose type is named, the result is nested under that name. Several parts
/// are read from the children of the payload (the RPC wrapper) and nested under its tag.
pub fn parse_message(message: &OneOrMany<MessagePart>, payload: Node) -> Value {
    match message {
        OneOrMany::One(part) => {
            let value = parse_element(part, payload);
            match part.type_def.complex().and_then(|t| t.name.as_ref()) {
                Some(name) => {
                    let mut nested = Map::new();
                    nested.insert(name.clone(), value);
                    Value::Object(nested)
                }
                None => value,
            }
        }
        OneOrMany::Many(parts) => {
            let mut fields = Map::new();
            for part in parts {
                if let Some(node) = child_named(payload, &part.name) {
                    fields.insert(part.name.clone(), parse_element(part, node));
                }
            }
            let mut wrapped = Map::new();
            wrapped.insert(payload.tag_name().name().to_string(), Value::Object(fields));
            Value::Object(wrapped)
        }
    }
}

/// Parses a received envelope against the parts of `message`.
pub fn parse_envelope(message: &OneOrMany<MessagePart>, envelope: &str) -> Result<Value> {
    let document = Document::parse(envelope)?;
    let payload = envelope_payload(&document)?;
    Ok(parse_message(message, payload))
}

impl<'a, 'input: 'a> Definitions<'a, 'input> {
    pub fn decode_response(&self, operation: &OperationSpec, envelope: &str) -> Result<Value> {
        parse_envelope(&operation.response, envelope)
    }
}
