// TODO simpleContent extensions (text plus attributes) are read as leaves

pub mod attribute_decl;
pub mod attribute_group_def;
pub mod builtins;
pub mod complex_type_def;
pub mod definitions;
pub mod element_decl;
pub mod error;
pub mod flatten;
pub mod operation;
pub mod parser;
pub mod schema;
pub mod serializer;
pub mod shared;
pub mod xstypes;

mod mapping_context;
mod values;

#[cfg(test)]
mod testdata;

pub use attribute_decl::AttributeSpec;
pub use complex_type_def::TypeNode;
pub use definitions::{Definitions, NamespaceDeclaration};
pub use element_decl::{ElementSpec, Occurs};
pub use error::{Result, WsdlError};
pub use flatten::flatten;
pub use operation::{MessagePart, OneOrMany, OperationSpec};
pub use parser::{parse_element, parse_envelope};
pub use schema::Schema;
pub use serializer::{Indentation, NamespaceTracking, Serializer};
pub use shared::{ContentSpec, TypeShape};
pub use xstypes::{namespace_of, split_name, QualifiedName};

/// Names of the operations described by `wsdl`, sorted.
pub fn list_operations(wsdl: &str) -> Result<Vec<String>> {
    let document = roxmltree::Document::parse(wsdl)?;
    Definitions::new(&document)?.list_operations()
}

pub fn resolve_operation(wsdl: &str, name: &str) -> Result<OperationSpec> {
    let document = roxmltree::Document::parse(wsdl)?;
    Definitions::new(&document)?.resolve_operation(name)
}

/// Flattens an XML document without a schema, see [`flatten()`].
pub fn flatten_document(xml: &str) -> Result<serde_json::Value> {
    let document = roxmltree::Document::parse(xml)?;
    flatten(document.root_element())
}
