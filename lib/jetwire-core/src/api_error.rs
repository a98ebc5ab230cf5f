//! The error envelope returned by the management API.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Error reported by the server in the `error` field of a reply.
///
/// ```json
/// {"error": {"code": 404, "err_code": 10059, "description": "stream not found"}}
/// ```
///
/// The `message` key is accepted in place of `description`, which is
/// required. Status codes default to `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Error, Serialize, Deserialize)]
#[display("{description} (code={code}, err_code={err_code})")]
pub struct ApiError {
    /// HTTP-like status code (e.g. 400, 404, 503).
    #[serde(default)]
    pub code: u16,
    /// Server-specific error code, stable across releases.
    #[serde(default)]
    pub err_code: u16,
    /// Human-readable description.
    #[serde(alias = "message")]
    pub description: String,
}

impl ApiError {
    /// Consumer does not exist.
    pub const CONSUMER_NOT_FOUND: u16 = 10014;
    /// No message matched the request.
    pub const NO_MESSAGE_FOUND: u16 = 10037;
    /// Stream does not exist.
    pub const STREAM_NOT_FOUND: u16 = 10059;
    /// Expected last sequence did not match.
    pub const STREAM_WRONG_LAST_SEQUENCE: u16 = 10071;
    /// The account has no JetStream access.
    pub const JETSTREAM_NOT_ENABLED: u16 = 10076;

    /// Create an API error.
    #[must_use]
    pub fn new(code: u16, err_code: u16, description: impl Into<String>) -> Self {
        Self {
            code,
            err_code,
            description: description.into(),
        }
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.description
    }

    /// Returns `true` for a 404 status.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.code == 404
    }

    /// Returns `true` if the stream does not exist.
    #[must_use]
    pub const fn is_stream_not_found(&self) -> bool {
        self.err_code == Self::STREAM_NOT_FOUND
    }

    /// Returns `true` if the consumer does not exist.
    #[must_use]
    pub const fn is_consumer_not_found(&self) -> bool {
        self.err_code == Self::CONSUMER_NOT_FOUND
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    #[test]
    fn deserialize_full_envelope() {
        let json = r#"{"code":404,"err_code":10059,"description":"stream not found"}"#;
        let_assert!(Ok(err) = serde_json::from_str::<ApiError>(json));

        check!(err == ApiError::new(404, ApiError::STREAM_NOT_FOUND, "stream not found"));
        check!(err.is_not_found());
        check!(err.is_stream_not_found());
        check!(!err.is_consumer_not_found());
    }

    #[test]
    fn deserialize_message_alias() {
        let_assert!(Ok(err) = serde_json::from_str::<ApiError>(r#"{"message":"x"}"#));

        check!(err.message() == "x");
        check!(err.code == 0);
        check!(err.err_code == 0);
    }

    #[test]
    fn reject_missing_description() {
        check!(serde_json::from_str::<ApiError>("{}").is_err());
        check!(serde_json::from_str::<ApiError>(r#"{"code":500}"#).is_err());
    }

    #[test]
    fn reject_non_object() {
        check!(serde_json::from_str::<ApiError>(r#""not-an-object""#).is_err());
        check!(serde_json::from_str::<ApiError>("42").is_err());
    }

    #[test]
    fn display() {
        let err = ApiError::new(404, ApiError::CONSUMER_NOT_FOUND, "consumer not found");
        insta::assert_snapshot!(err, @"consumer not found (code=404, err_code=10014)");
    }
}
