//! Decode metadata for response types.
//!
//! A [`TypeInfo`] is built once per response type (see
//! [`MetadataCache`](crate::MetadataCache)) and then used to materialize
//! values from parsed documents without any further setup.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{DecodeError, MetadataError};

/// Function materializing a value from a JSON node.
///
/// Returns `Ok(None)` when the node resolves to `null`.
pub type Materialize<T> = fn(&Value) -> Result<Option<T>, DecodeError>;

/// Response types decodable through a metadata handle.
///
/// Usually derived:
///
/// ```ignore
/// #[derive(Debug, Deserialize, ApiResponse)]
/// #[api_response(schema = "io.nats.jetstream.api.v1.stream_info_response")]
/// pub struct StreamInfo {
///     config: StreamConfig,
///     state: StreamState,
/// }
/// ```
///
/// [`type_info`](ApiResponse::type_info) may be expensive and may fail; it is
/// called at most once per cache, and its failure is remembered.
pub trait ApiResponse: Sized + Send + Sync + 'static {
    /// Build the decode metadata for this type.
    fn type_info() -> Result<TypeInfo<Self>, MetadataError>;
}

/// Decode metadata for values of type `T`.
pub struct TypeInfo<T> {
    type_name: &'static str,
    schema: Option<&'static str>,
    materialize: Materialize<T>,
}

impl<T> TypeInfo<T> {
    /// Create metadata from a custom materialize function.
    #[must_use]
    pub fn new(materialize: Materialize<T>) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            schema: None,
            materialize,
        }
    }

    /// Attach a schema name, e.g. `io.nats.jetstream.api.v1.stream_info_response`.
    ///
    /// # Errors
    ///
    /// Returns an error unless the name is made of non-empty, dot-separated
    /// segments of ASCII alphanumerics, `_` or `-`.
    pub fn with_schema(mut self, schema: &'static str) -> Result<Self, MetadataError> {
        validate_schema(schema).map_err(|reason| MetadataError::new::<T>(reason))?;
        self.schema = Some(schema);
        Ok(self)
    }

    /// Rust type name.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Schema name, if any.
    #[must_use]
    pub const fn schema(&self) -> Option<&'static str> {
        self.schema
    }

    /// Materialize a value from a JSON node.
    ///
    /// # Errors
    ///
    /// Returns an error if the node does not match `T`.
    pub fn materialize(&self, node: &Value) -> Result<Option<T>, DecodeError> {
        (self.materialize)(node)
    }
}

impl<T: DeserializeOwned> TypeInfo<T> {
    /// Metadata driven by `T`'s serde implementation.
    #[must_use]
    pub fn serde() -> Self {
        Self::new(crate::from_node::<Option<T>>)
    }
}

impl<T> fmt::Debug for TypeInfo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("type_name", &self.type_name)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

fn validate_schema(schema: &str) -> Result<(), String> {
    if schema.is_empty() {
        return Err("schema name is empty".to_string());
    }
    for segment in schema.split('.') {
        if segment.is_empty() {
            return Err(format!("schema name `{schema}` has an empty segment"));
        }
        if let Some(c) = segment
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
        {
            return Err(format!("schema name `{schema}` contains `{c}`"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use serde_json::json;

    use super::*;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct PurgeResponse {
        success: bool,
        purged: u64,
    }

    #[test]
    fn serde_materialize() {
        let info = TypeInfo::<PurgeResponse>::serde();

        let_assert!(Ok(Some(value)) = info.materialize(&json!({"success": true, "purged": 12})));
        check!(
            value
                == PurgeResponse {
                    success: true,
                    purged: 12
                }
        );
        check!(info.type_name().ends_with("PurgeResponse"));
        check!(info.schema().is_none());
    }

    #[test]
    fn serde_materialize_null() {
        let info = TypeInfo::<PurgeResponse>::serde();
        let_assert!(Ok(None) = info.materialize(&Value::Null));
    }

    #[test]
    fn serde_materialize_reports_path() {
        let info = TypeInfo::<PurgeResponse>::serde();

        let_assert!(
            Err(DecodeError::JsonDeserialization { path, .. }) =
                info.materialize(&json!({"success": true, "purged": "many"}))
        );
        check!(path == "purged");
    }

    #[test]
    fn custom_materialize() {
        fn first_subject(node: &Value) -> Result<Option<String>, DecodeError> {
            Ok(node
                .pointer("/config/subjects/0")
                .and_then(Value::as_str)
                .map(str::to_string))
        }

        let info = TypeInfo::new(first_subject);
        let_assert!(
            Ok(Some(subject)) = info.materialize(&json!({"config": {"subjects": ["orders.>"]}}))
        );
        check!(subject == "orders.>");
        let_assert!(Ok(None) = info.materialize(&json!({})));
    }

    #[test]
    fn valid_schema() {
        let_assert!(
            Ok(info) = TypeInfo::<PurgeResponse>::serde()
                .with_schema("io.nats.jetstream.api.v1.stream_purge_response")
        );
        check!(info.schema() == Some("io.nats.jetstream.api.v1.stream_purge_response"));
    }

    #[test]
    fn invalid_schema() {
        let_assert!(Err(err) = TypeInfo::<PurgeResponse>::serde().with_schema(""));
        check!(err.reason() == "schema name is empty");
        check!(err.type_name().ends_with("PurgeResponse"));

        let_assert!(Err(err) = TypeInfo::<PurgeResponse>::serde().with_schema("io..v1"));
        check!(err.reason() == "schema name `io..v1` has an empty segment");

        let_assert!(Err(err) = TypeInfo::<PurgeResponse>::serde().with_schema("io.nats/v1"));
        check!(err.reason() == "schema name `io.nats/v1` contains `/`");
    }
}
