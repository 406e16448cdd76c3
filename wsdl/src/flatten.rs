use roxmltree::Node;
use serde_json::{Map, Value};

use super::error::{Result, WsdlError};

/// Key under which the text of an element with attributes is stored
pub const TEXT_KEY: &str = "value";

/// Converts an element into `{ name: content }` without a schema.
///
/// The content of an element without attributes or child elements is its text (`null` if it has
/// none). Otherwise it is an object holding the attributes, the child elements (repeated names
/// become sequences) and the text under [`TEXT_KEY`].
pub fn flatten(node: Node) -> Result<Value> {
    let name = element_name(node)?;
    let mut root = Map::new();
    root.insert(name.to_string(), content(node)?);
    Ok(Value::Object(root))
}

fn element_name<'input>(node: Node<'_, 'input>) -> Result<&'input str> {
    if !node.is_element() {
        return Err(WsdlError::UnresolvedElement(format!(
            "expected an element, found a {:?} node",
            node.node_type()
        )));
    }
    let name = node.tag_name().name();
    if name.is_empty() {
        return Err(WsdlError::UnresolvedElement(
            "element without a local name".into(),
        ));
    }
    Ok(name)
}

fn content(node: Node) -> Result<Value> {
    let text = text_content(node);
    let has_attributes = node.attributes().next().is_some();
    let has_children = node.children().any(|c| c.is_element());

    if !has_attributes && !has_children {
        return Ok(text.map(Value::String).unwrap_or(Value::Null));
    }

    let mut fields = Map::new();
    for attribute in node.attributes() {
        accumulate(
            &mut fields,
            attribute.name().to_string(),
            Value::String(attribute.value().to_string()),
        );
    }
    for child in node.children().filter(|c| c.is_element()) {
        let name = element_name(child)?;
        accumulate(&mut fields, name.to_string(), content(child)?);
    }
    if let Some(text) = text {
        match fields.get_mut(TEXT_KEY) {
            Some(existing) => deep_merge(existing, Value::String(text)),
            None => {
                fields.insert(TEXT_KEY.to_string(), Value::String(text));
            }
        }
    }
    Ok(Value::Object(fields))
}

/// The direct text of `node` with control characters removed and surrounding whitespace
/// trimmed, if anything is left.
fn text_content(node: Node) -> Option<String> {
    let text = node
        .children()
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .flat_map(str::chars)
        .filter(|c| !c.is_control())
        .collect::<String>();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Adds `value` under `key`. The first occurrence is stored as is; a second one turns the entry
/// into a sequence, and later ones are appended to it.
pub fn accumulate(fields: &mut Map<String, Value>, key: String, value: Value) {
    match fields.get_mut(&key) {
        None => {
            fields.insert(key, value);
        }
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
    }
}

/// Merges `incoming` into `target`: objects are merged key by key, anything else is
/// accumulated into a sequence.
pub fn deep_merge(target: &mut Value, incoming: Value) {
    match (target, incoming) {
        (Value::Object(target), Value::Object(incoming)) => {
            for (key, value) in incoming {
                match target.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (Value::Array(items), incoming) => items.push(incoming),
        (target, incoming) => {
            let first = target.take();
            *target = Value::Array(vec![first, incoming]);
        }
    }
}
