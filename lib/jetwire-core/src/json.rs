//! JSON document utilities.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::DecodeError;

/// Parse bytes into a navigable JSON document.
///
/// # Errors
///
/// Returns [`DecodeError::Parse`] with the parser's error if the bytes are not
/// a JSON document.
///
/// # Example
///
/// ```
/// use jetwire_core::parse_document;
///
/// let doc = parse_document(br#"{"total": 3}"#).expect("parse");
/// assert_eq!(doc["total"], 3);
/// ```
pub fn parse_document(bytes: &[u8]) -> Result<Value, DecodeError> {
    serde_json::from_slice(bytes).map_err(DecodeError::Parse)
}

/// Deserialize a JSON node to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so the error names the exact field that failed
/// (e.g. "config.subjects[0]").
///
/// # Errors
///
/// Returns [`DecodeError::JsonDeserialization`] if the node does not match `T`.
///
/// # Example
///
/// ```
/// use jetwire_core::from_node;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Account { memory: u64 }
///
/// let node = serde_json::json!({"memory": 1024});
/// let account: Account = from_node(&node).expect("deserialize");
/// assert_eq!(account, Account { memory: 1024 });
/// ```
pub fn from_node<T: DeserializeOwned>(node: &Value) -> Result<T, DecodeError> {
    serde_path_to_error::deserialize(node)
        .map_err(|e| DecodeError::json_deserialization(e.path().to_string(), e.inner().to_string()))
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    #[test]
    fn parse_document_object() {
        let_assert!(Ok(doc) = parse_document(br#"{"type":"io.nats.jetstream.api.v1.stream_names_response","total":2}"#));
        check!(doc.get("total") == Some(&Value::from(2)));
        check!(doc.get("error").is_none());
    }

    #[test]
    fn parse_document_syntax_error() {
        let_assert!(Err(DecodeError::Parse(err)) = parse_document(b"not json"));
        check!(err.is_syntax());
    }

    #[test]
    fn parse_document_truncated() {
        let_assert!(Err(DecodeError::Parse(err)) = parse_document(br#"{"total":"#));
        check!(err.is_eof());
    }

    #[test]
    fn from_node_missing_field_error_with_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Config {
            #[allow(dead_code)]
            name: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct Info {
            #[allow(dead_code)]
            config: Config,
        }

        let node = serde_json::json!({"config": {}});
        let_assert!(Err(err) = from_node::<Info>(&node));

        let msg = err.to_string();
        check!(msg.contains("config"), "Expected path 'config' in error: {msg}");
        check!(msg.contains("name"), "Expected field 'name' mentioned in error: {msg}");
    }
}
