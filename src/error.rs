//! The default failure type carried by producers.

use std::error::Error as StdError;
use thiserror::Error;

/// A producer failed while resolving a value.
///
/// Two failures are equal when their messages are equal. The optional source
/// is diagnostic detail and does not take part in the comparison.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ProducerFailure {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl ProducerFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl PartialEq for ProducerFailure {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for ProducerFailure {}

impl From<&str> for ProducerFailure {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ProducerFailure {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
