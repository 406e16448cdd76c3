use thiserror::Error;

#[derive(Debug, Error)]
pub enum WsdlError {
    #[error("method {0:?} not exists in wsdl")]
    OperationNotFound(String),
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),
    #[error("element could not be resolved: {0}")]
    UnresolvedElement(String),
    #[error("malformed document: {0}")]
    MalformedDocument(String),
    #[error("circular type reference detected while resolving {0:?}")]
    CyclicSchema(String),
    #[error("SOAP fault {code}: {reason}")]
    SoapFault { code: String, reason: String },
    #[error("failed to parse XML")]
    Xml(#[from] roxmltree::Error),
}

pub type Result<T, E = WsdlError> = std::result::Result<T, E>;
