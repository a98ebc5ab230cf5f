//! Typed response decoding for a messaging control-plane API.
//!
//! Replies of the management API are JSON documents holding either an error
//! envelope or a payload. jetwire decodes them into an [`ApiResult`] using
//! per-type metadata that is built once and cached, failures included.
//!
//! # Example
//!
//! ```ignore
//! use jetwire::prelude::*;
//!
//! #[derive(Debug, Deserialize, ApiResponse)]
//! #[api_response(schema = "io.nats.jetstream.api.v1.account_info_response")]
//! pub struct AccountInfo {
//!     memory: u64,
//!     storage: u64,
//!     streams: u64,
//!     consumers: u64,
//! }
//!
//! let decoder = ResponseDecoder::new();
//! let info = decoder.decode::<AccountInfo>(&reply).into_result()?;
//! ```
//!
//! See the [tutorial][_tutorial] for a complete guide.

pub mod _tutorial;
mod config;
mod decoder;
mod deserializer;
pub mod prelude;

pub use config::{DEFAULT_ERROR_FIELD, DecoderConfig, DecoderConfigBuilder};
pub use decoder::{ResponseDecoder, ResponseDecoderBuilder};
pub use deserializer::ApiDeserializer;

// Re-export core types
pub use jetwire_core::{
    ApiError, ApiResponse, ApiResult, DecodeError, Error, Materialize, Metadata, MetadataCache,
    MetadataError, RawDeserializer, ResponseDeserializer, Result, TypeInfo, TypeRegistry,
    TypeRegistryBuilder, from_node, parse_document,
};

// Re-export for macro-generated code
#[doc(hidden)]
pub use jetwire_core::__private;

// Re-export macros
pub use jetwire_macro::ApiResponse;
