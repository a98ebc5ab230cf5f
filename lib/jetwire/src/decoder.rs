//! Typed decoding of management API replies.

use std::sync::Arc;

use jetwire_core::{
    ApiError, ApiResponse, ApiResult, DecodeError, MetadataCache, TypeRegistry, from_node,
    parse_document,
};
use serde_json::Value;
use tracing::debug;

use crate::DecoderConfig;

/// Decoder turning reply buffers into [`ApiResult`]s.
///
/// Cheap to clone; clones share the metadata cache.
///
/// # Example
///
/// ```ignore
/// use jetwire::prelude::*;
///
/// let decoder = ResponseDecoder::new();
/// match decoder.decode::<StreamInfo>(&reply) {
///     ApiResult::Value(info) => println!("stream {}", info.config.name),
///     ApiResult::Error(err) => println!("server error: {err}"),
///     ApiResult::Failure(err) => println!("bad reply: {err}"),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ResponseDecoder {
    config: DecoderConfig,
    cache: Arc<MetadataCache>,
}

impl Default for ResponseDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseDecoder {
    /// Decoder with the default configuration and the process-wide cache.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new decoder builder.
    #[must_use]
    pub fn builder() -> ResponseDecoderBuilder {
        ResponseDecoderBuilder::default()
    }

    /// Decoder configuration.
    #[must_use]
    pub const fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Metadata cache used to decode values.
    #[must_use]
    pub const fn cache(&self) -> &Arc<MetadataCache> {
        &self.cache
    }

    /// Decode one reply buffer.
    ///
    /// The error field, when present, always wins over a value-shaped payload.
    /// Every other problem (empty buffer, invalid JSON, unusable metadata,
    /// `null` document) ends up in [`ApiResult::Failure`].
    pub fn decode<T: ApiResponse>(&self, buffer: &[u8]) -> ApiResult<T> {
        let result = self
            .decode_document::<T>(buffer)
            .unwrap_or_else(ApiResult::Failure);

        match &result {
            ApiResult::Value(_) => {}
            ApiResult::Error(err) => debug!(
                response_type = std::any::type_name::<T>(),
                code = err.code,
                err_code = err.err_code,
                "server reported an error"
            ),
            ApiResult::Failure(err) => debug!(
                response_type = std::any::type_name::<T>(),
                len = buffer.len(),
                error = %err,
                "cannot decode response"
            ),
        }

        result
    }

    fn decode_document<T: ApiResponse>(&self, buffer: &[u8]) -> Result<ApiResult<T>, DecodeError> {
        if buffer.is_empty() {
            return Err(DecodeError::EmptyBuffer);
        }
        if let Some(max) = self.config.max_payload_size
            && buffer.len() > max
        {
            return Err(DecodeError::PayloadTooLarge {
                len: buffer.len(),
                max,
            });
        }

        let document = parse_document(buffer)?;

        if let Some(node) = document.get(self.config.error_field.as_str()) {
            return decode_error(node).map(ApiResult::Error);
        }

        let info = self.cache.get::<T>().into_result()?;
        match info.materialize(&document)? {
            Some(value) => Ok(ApiResult::Value(value)),
            None => Err(DecodeError::NullResult),
        }
    }
}

// Only an object is an envelope; serde would also accept a sequence.
fn decode_error(node: &Value) -> Result<ApiError, DecodeError> {
    match node {
        Value::Object(_) => from_node::<ApiError>(node)
            .map_err(|err| DecodeError::invalid_error_payload(err.to_string())),
        Value::Null => Err(DecodeError::invalid_error_payload("error field is null")),
        _ => Err(DecodeError::invalid_error_payload("error field is not an object")),
    }
}

/// Builder for [`ResponseDecoder`].
#[derive(Debug, Clone, Default)]
pub struct ResponseDecoderBuilder {
    config: Option<DecoderConfig>,
    cache: Option<Arc<MetadataCache>>,
}

impl ResponseDecoderBuilder {
    /// Set the decoder configuration.
    #[must_use]
    pub fn config(mut self, config: DecoderConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Share an existing metadata cache.
    #[must_use]
    pub fn cache(mut self, cache: Arc<MetadataCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Use a fresh metadata cache over the given registry.
    #[must_use]
    pub fn registry(self, registry: TypeRegistry) -> Self {
        self.cache(Arc::new(MetadataCache::new(registry)))
    }

    /// Build the decoder.
    #[must_use]
    pub fn build(self) -> ResponseDecoder {
        ResponseDecoder {
            config: self.config.unwrap_or_default(),
            cache: self.cache.unwrap_or_else(MetadataCache::global),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use jetwire_core::{MetadataError, TypeInfo};
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct StreamState {
        messages: u64,
        bytes: u64,
        first_seq: u64,
        last_seq: u64,
    }

    impl ApiResponse for StreamState {
        fn type_info() -> Result<TypeInfo<Self>, MetadataError> {
            Ok(TypeInfo::serde())
        }
    }

    #[derive(Debug, Deserialize)]
    struct Unsupported;

    impl ApiResponse for Unsupported {
        fn type_info() -> Result<TypeInfo<Self>, MetadataError> {
            Err(MetadataError::new::<Self>("no descriptor for this shape"))
        }
    }

    fn decoder() -> ResponseDecoder {
        ResponseDecoder::builder()
            .registry(TypeRegistry::open())
            .build()
    }

    #[test]
    fn decode_value() {
        let state = StreamState {
            messages: 10,
            bytes: 2048,
            first_seq: 1,
            last_seq: 10,
        };
        let_assert!(Ok(buffer) = serde_json::to_vec(&state));

        let_assert!(ApiResult::Value(decoded) = decoder().decode::<StreamState>(&buffer));
        check!(decoded == state);
    }

    #[test]
    fn decode_empty_buffer() {
        let_assert!(ApiResult::Failure(DecodeError::EmptyBuffer) = decoder().decode::<StreamState>(b""));
    }

    #[test]
    fn decode_invalid_json() {
        let_assert!(ApiResult::Failure(DecodeError::Parse(_)) = decoder().decode::<StreamState>(b"{\"messages\":"));
    }

    #[test]
    fn decode_api_error() {
        let buffer = br#"{"type":"io.nats.jetstream.api.v1.stream_info_response","error":{"code":404,"err_code":10059,"description":"stream not found"}}"#;

        let_assert!(ApiResult::Error(err) = decoder().decode::<StreamState>(buffer));
        check!(err.is_stream_not_found());
        check!(err.message() == "stream not found");
    }

    #[test]
    fn decode_error_wins_over_value() {
        let buffer = br#"{"error":{"message":"x"},"messages":1,"bytes":1,"first_seq":1,"last_seq":1}"#;

        let_assert!(ApiResult::Error(err) = decoder().decode::<StreamState>(buffer));
        check!(err.message() == "x");
    }

    #[test]
    fn decode_malformed_error() {
        let_assert!(
            ApiResult::Failure(DecodeError::InvalidErrorPayload(_)) =
                decoder().decode::<StreamState>(br#"{"error":"not-an-object"}"#)
        );
        let_assert!(
            ApiResult::Failure(DecodeError::InvalidErrorPayload(reason)) =
                decoder().decode::<StreamState>(br#"{"error":null}"#)
        );
        check!(reason == "error field is null");
    }

    #[test]
    fn decode_error_sequence_is_malformed() {
        let buffers: [&[u8]; 2] = [br#"{"error":[]}"#, br#"{"error":[404,10059,"x"]}"#];
        for buffer in buffers {
            let_assert!(
                ApiResult::Failure(DecodeError::InvalidErrorPayload(reason)) =
                    decoder().decode::<StreamState>(buffer)
            );
            check!(reason == "error field is not an object");
        }
    }

    #[test]
    fn decode_error_without_description_is_malformed() {
        let_assert!(
            ApiResult::Failure(DecodeError::InvalidErrorPayload(reason)) =
                decoder().decode::<StreamState>(br#"{"error":{"code":500}}"#)
        );
        check!(reason.contains("missing field `description`"));
    }

    #[test]
    fn decode_null_result() {
        let_assert!(ApiResult::Failure(DecodeError::NullResult) = decoder().decode::<StreamState>(b"null"));
    }

    #[test]
    fn decode_shape_mismatch() {
        let_assert!(
            ApiResult::Failure(DecodeError::JsonDeserialization { path, .. }) =
                decoder().decode::<StreamState>(br#"{"messages":"ten","bytes":0,"first_seq":0,"last_seq":0}"#)
        );
        check!(path == "messages");
    }

    #[test]
    fn decode_failed_metadata_keeps_captured_error() {
        let decoder = decoder();

        let_assert!(ApiResult::Failure(first) = decoder.decode::<Unsupported>(b"{}"));
        let_assert!(ApiResult::Failure(second) = decoder.decode::<Unsupported>(b"{}"));
        let_assert!(Some(first) = first.metadata_error());
        let_assert!(Some(second) = second.metadata_error());

        check!(Arc::ptr_eq(first, second));
        check!(first.reason() == "no descriptor for this shape");
        check!(decoder.cache().build_attempts() == 1);
    }

    #[test]
    fn decode_error_field_skips_metadata() {
        let decoder = decoder();

        let_assert!(ApiResult::Error(_) = decoder.decode::<Unsupported>(br#"{"error":{"code":500,"description":"internal"}}"#));
        check!(decoder.cache().build_attempts() == 0);
    }

    #[test]
    fn decode_unknown_type() {
        let decoder = ResponseDecoder::builder()
            .registry(TypeRegistry::builder().register::<StreamState>().build())
            .build();

        let_assert!(
            ApiResult::Failure(DecodeError::UnknownResponseType(name)) =
                decoder.decode::<Unsupported>(b"{}")
        );
        check!(name.ends_with("Unsupported"));
    }

    #[test]
    fn decode_custom_error_field() {
        let decoder = ResponseDecoder::builder()
            .config(DecoderConfig::builder().error_field("err").build())
            .registry(TypeRegistry::open())
            .build();

        let_assert!(ApiResult::Error(err) = decoder.decode::<StreamState>(br#"{"err":{"code":503,"message":"unavailable"}}"#));
        check!(err.code == 503);

        // The default field name is not special any more.
        let_assert!(
            ApiResult::Failure(DecodeError::JsonDeserialization { .. }) =
                decoder.decode::<StreamState>(br#"{"error":{"code":503,"message":"unavailable"}}"#)
        );
    }

    #[test]
    fn decode_payload_limit() {
        let decoder = ResponseDecoder::builder()
            .config(DecoderConfig::builder().max_payload_size(8).build())
            .registry(TypeRegistry::open())
            .build();

        let_assert!(
            ApiResult::Failure(DecodeError::PayloadTooLarge { len: 11, max: 8 }) =
                decoder.decode::<StreamState>(br#"{"error":1}"#)
        );
    }

    #[test]
    fn default_decoder_uses_global_cache() {
        let decoder = ResponseDecoder::default();

        check!(Arc::ptr_eq(decoder.cache(), &MetadataCache::global()));
        check!(decoder.config() == &DecoderConfig::default());
    }
}
