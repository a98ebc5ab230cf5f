//! # Chapter 1: Handling Outcomes
//!
//! A reply decodes into exactly one of three outcomes.
//!
//! ## The Three Variants
//!
//! ```ignore
//! match decoder.decode::<StreamInfo>(&reply) {
//!     // The payload, fully typed
//!     ApiResult::Value(info) => println!("{} messages", info.state.messages),
//!     // The server answered with {"error": {...}}
//!     ApiResult::Error(err) => println!("server error {}: {}", err.err_code, err.message()),
//!     // The reply could not be decoded
//!     ApiResult::Failure(err) => println!("bad reply: {err}"),
//! }
//! ```
//!
//! ## Server Errors
//!
//! The `error` field always wins: a reply carrying both an error and payload
//! fields decodes to [`ApiResult::Error`](crate::ApiResult::Error).
//!
//! ```ignore
//! if let ApiResult::Error(err) = decoder.decode::<StreamInfo>(&reply) {
//!     if err.is_stream_not_found() {
//!         create_stream()?;
//!     }
//! }
//! ```
//!
//! ## Decode Failures
//!
//! [`DecodeError`](crate::DecodeError) tells what went wrong:
//!
//! | Variant | Cause |
//! |---------|-------|
//! | `EmptyBuffer` | The reply had no bytes |
//! | `PayloadTooLarge` | The reply exceeds `max_payload_size` |
//! | `Parse` | The reply is not JSON |
//! | `InvalidErrorPayload` | The `error` field is not an error object |
//! | `JsonDeserialization` | The payload does not match the type (with the field path) |
//! | `UnknownResponseType` | The registry does not know the type |
//! | `Metadata` | Building the type's metadata failed |
//! | `NullResult` | The reply is `null` |
//!
//! ## Using `?`
//!
//! [`ApiResult::into_result`](crate::ApiResult::into_result) flattens the
//! outcome into [`jetwire::Result`](crate::Result):
//!
//! ```ignore
//! fn stream_info(decoder: &ResponseDecoder, reply: &[u8]) -> jetwire::Result<StreamInfo> {
//!     decoder.decode(reply).into_result()
//! }
//! ```
//!
//! ## Next Steps
//!
//! - [Chapter 2: Metadata & Caching][super::chapter_2] - Registries and memoized failures
