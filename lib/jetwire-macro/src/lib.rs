//! Procedural macros for jetwire typed response decoding.
//!
//! This crate provides:
//! - `#[derive(ApiResponse)]` - Derive macro making a serde type decodable by jetwire
//!
//! # Example
//!
//! ```ignore
//! use jetwire::prelude::*;
//!
//! #[derive(Debug, Deserialize, ApiResponse)]
//! #[api_response(schema = "io.nats.jetstream.api.v1.stream_names_response")]
//! pub struct StreamNames {
//!     total: u64,
//!     streams: Vec<String>,
//! }
//!
//! let names = ResponseDecoder::new().decode::<StreamNames>(&reply).into_result()?;
//! ```

mod api_response_derive;

use proc_macro::TokenStream;

/// Derive macro implementing `ApiResponse` through the type's serde `Deserialize`.
///
/// # Container Attributes
///
/// - `#[api_response(schema = "name")]` - Schema name attached to the metadata.
///   An invalid name makes the metadata build fail at runtime; the failure is
///   cached like any other.
/// - `#[api_response(crate = "path")]` - Path to the crate exporting `ApiResponse`
///   (defaults to `::jetwire`; use `jetwire_core` when depending on the core crate only).
///
/// # Example
///
/// ```ignore
/// use jetwire::ApiResponse;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, ApiResponse)]
/// #[api_response(schema = "io.nats.jetstream.api.v1.consumer_delete_response")]
/// struct ConsumerDeleted {
///     success: bool,
/// }
/// ```
#[proc_macro_derive(ApiResponse, attributes(api_response))]
pub fn derive_api_response(input: TokenStream) -> TokenStream {
    api_response_derive::expand_api_response_derive(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
