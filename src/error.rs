//! Error types.

use thiserror::Error;

/// Errors produced while decoding a document.
///
/// A decode error is fatal to the document (or remote subtree) being decoded: no partial tree
/// is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A field's JSON shape doesn't match any accepted variant, or the document is not a JSON
    /// object at all.
    #[error("malformed field: {message}")]
    MalformedField { message: String },

    /// A required field is absent.
    #[error("missing field `{field}`")]
    MissingField { field: String },
}

impl DecodeError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        DecodeError::MalformedField {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::malformed(err.to_string())
    }
}

/// Fetch failures. Not distinguished further by the core: any of these replaces a remote subtree
/// with the fallback tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("unexpected status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => TransportError::Status(status.as_u16()),
            None => TransportError::Request(err.to_string()),
        }
    }
}

/// Why a remote subtree failed to load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// A non-fatal condition that is resolved by omission rather than failure.
///
/// These never propagate; they are logged where they are absorbed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderSkip {
    #[error("unknown view type {0:?}; rendering nothing")]
    UnknownKind(String),

    #[error("dropping malformed property `{name}`: {reason}")]
    MalformedProperty { name: String, reason: String },
}
