//! Error types for jetwire.

use std::sync::Arc;

use derive_more::{Display, Error, From};

use crate::ApiError;

// ============================================================================
// Metadata Error
// ============================================================================

/// A failure captured while building decode metadata for a response type.
///
/// Built at most once per type and cache; every later lookup hands out the
/// same instance behind an [`Arc`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("cannot build metadata for `{type_name}`: {reason}")]
pub struct MetadataError {
    type_name: &'static str,
    reason: String,
}

impl MetadataError {
    /// Create a metadata error for the given type.
    #[must_use]
    pub fn new<T: ?Sized>(reason: impl Into<String>) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            reason: reason.into(),
        }
    }

    /// Rust name of the type whose metadata could not be built.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Why the build failed.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

// ============================================================================
// Decode Error
// ============================================================================

/// Why a response buffer could not be turned into a value or an API error.
#[derive(Debug, Display, Error, From)]
pub enum DecodeError {
    /// The buffer held no bytes; a valid reply is never empty.
    #[display("buffer is empty")]
    #[from(skip)]
    EmptyBuffer,

    /// The buffer exceeds the configured size limit.
    #[display("payload of {len} bytes exceeds the limit of {max} bytes")]
    #[from(skip)]
    PayloadTooLarge {
        /// Buffer length.
        len: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The buffer is not a JSON document.
    #[display("invalid JSON document: {_0}")]
    #[from]
    Parse(serde_json::Error),

    /// The document did not match the expected shape.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "config.subjects[0]").
        path: String,
        /// Error message.
        message: String,
    },

    /// The error field is present but is not a valid error envelope.
    #[display("cannot parse error payload: {_0}")]
    #[from(skip)]
    InvalidErrorPayload(#[error(not(source))] String),

    /// The metadata engine knows nothing about the response type.
    #[display("unknown response type `{_0}`")]
    #[from(skip)]
    UnknownResponseType(#[error(not(source))] &'static str),

    /// Building metadata for the response type failed earlier.
    #[display("{_0}")]
    #[from]
    Metadata(Arc<MetadataError>),

    /// The document resolved to `null`.
    #[display("null result")]
    #[from(skip)]
    NullResult,
}

impl DecodeError {
    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid error payload error.
    #[must_use]
    pub fn invalid_error_payload(message: impl Into<String>) -> Self {
        Self::InvalidErrorPayload(message.into())
    }

    /// Returns `true` if the failure comes from the response type's
    /// configuration rather than from the buffer.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::UnknownResponseType(_) | Self::Metadata(_))
    }

    /// Returns the captured metadata error, if any.
    #[must_use]
    pub fn metadata_error(&self) -> Option<&Arc<MetadataError>> {
        match self {
            Self::Metadata(err) => Some(err),
            _ => None,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

/// Main error type once an [`ApiResult`](crate::ApiResult) is flattened.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The server answered with an error envelope.
    #[display("API error: {_0}")]
    Api(ApiError),

    /// The reply could not be decoded.
    #[display("decode error: {_0}")]
    Decode(DecodeError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Returns `true` if the server reported an error.
    #[must_use]
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// Returns `true` if the reply could not be decoded.
    #[must_use]
    pub const fn is_decode_error(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Returns the API error code (HTTP-like status) if the server reported an error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.code),
            Self::Decode(_) => None,
        }
    }

    /// Returns `true` if this is a 404 API error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Api(err) if err.is_not_found())
    }

    /// Returns the API error, if any.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            Self::Decode(_) => None,
        }
    }
}
