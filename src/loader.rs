use std::{borrow::Cow, path::Path};

use encoding_rs::{Encoding, UTF_8};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {location}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },
    #[error("request to {location} failed")]
    Http {
        location: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{location} answered with status {status}")]
    Status {
        location: String,
        status: reqwest::StatusCode,
    },
    #[error("no loader accepts {0}")]
    Unsupported(String),
}

/// Fetches the text of a document (a WSDL description or an envelope) by location.
pub trait DocumentLoader {
    fn accepts(&self, location: &str) -> bool;

    fn load(&self, location: &str) -> Result<String, LoadError>;
}

/// Reads documents from the local file system. Accepts every location.
pub struct FileLoader;

impl DocumentLoader for FileLoader {
    fn accepts(&self, _location: &str) -> bool {
        true
    }

    fn load(&self, location: &str) -> Result<String, LoadError> {
        let bytes = std::fs::read(Path::new(location)).map_err(|source| LoadError::Io {
            location: location.to_string(),
            source,
        })?;
        Ok(decode(&bytes).into_owned())
    }
}

/// Downloads documents given by an `http://` or `https://` URL.
pub struct HttpLoader {
    client: reqwest::blocking::Client,
}

impl HttpLoader {
    pub fn new() -> Result<Self, LoadError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|source| LoadError::Http {
                location: String::new(),
                source,
            })?;
        Ok(Self { client })
    }
}

impl DocumentLoader for HttpLoader {
    fn accepts(&self, location: &str) -> bool {
        location.starts_with("http://") || location.starts_with("https://")
    }

    fn load(&self, location: &str) -> Result<String, LoadError> {
        let http_error = |source| LoadError::Http {
            location: location.to_string(),
            source,
        };
        let response = self.client.get(location).send().map_err(http_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                location: location.to_string(),
                status,
            });
        }
        let bytes = response.bytes().map_err(http_error)?;
        Ok(decode(&bytes).into_owned())
    }
}

/// Loads `location` with the first loader that accepts it.
pub fn load(loaders: &[Box<dyn DocumentLoader>], location: &str) -> Result<String, LoadError> {
    let loader = loaders
        .iter()
        .find(|loader| loader.accepts(location))
        .ok_or_else(|| LoadError::Unsupported(location.to_string()))?;
    tracing::debug!("loading {location}");
    loader.load(location)
}

/// Decodes raw document bytes. A byte order mark selects the encoding, UTF-8 otherwise.
pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let (decoded, encoding, had_errors) = Encoding::decode(UTF_8, bytes);
    if had_errors {
        tracing::warn!("document is not valid {}", encoding.name());
    }
    decoded
}
