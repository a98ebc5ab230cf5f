//! Core types for jetwire typed control-plane response decoding.
//!
//! This crate provides the foundational types used by jetwire:
//! - [`ApiResult`] - Outcome of decoding one reply (value, API error, or failure)
//! - [`ApiError`] - Error envelope reported by the server
//! - [`DecodeError`], [`MetadataError`], [`Error`] and [`Result`] - Error handling
//! - [`ApiResponse`] and [`TypeInfo`] - Response types and their decode metadata
//! - [`TypeRegistry`] - Set of response types metadata can be built for
//! - [`MetadataCache`] and [`Metadata`] - Memoized per-type metadata
//! - [`ResponseDeserializer`] - Trait for transport-facing deserializers

mod api_error;
mod cache;
mod deserialize;
mod error;
mod json;
mod metadata;
pub mod prelude;
mod registry;
mod result;

pub use api_error::ApiError;
pub use cache::{Metadata, MetadataCache};
pub use deserialize::{RawDeserializer, ResponseDeserializer};
pub use error::{DecodeError, Error, MetadataError, Result};
pub use json::{from_node, parse_document};
pub use metadata::{ApiResponse, Materialize, TypeInfo};
pub use registry::{TypeRegistry, TypeRegistryBuilder};
pub use result::ApiResult;

// Used by `#[derive(ApiResponse)]` expansions.
#[doc(hidden)]
pub mod __private {
    pub use serde::de::DeserializeOwned;
}
