//! # Chapter 2: Metadata & Caching
//!
//! How decode metadata is built, cached, and shared.
//!
//! ## One Build per Type
//!
//! The first decode of a type asks the [`MetadataCache`](crate::MetadataCache)
//! for its metadata. The cache runs the build once, even when many threads
//! ask at the same time, and keeps the outcome forever:
//!
//! - success: the metadata handle is reused by every later decode;
//! - failure: the captured error is returned by every later decode, without
//!   building again.
//!
//! ## Schemas
//!
//! ```ignore
//! #[derive(Deserialize, ApiResponse)]
//! #[api_response(schema = "io.nats.jetstream.api.v1.consumer_info_response")]
//! pub struct ConsumerInfo { /* ... */ }
//! ```
//!
//! An invalid schema name is a metadata failure: every decode of the type
//! fails with the same [`MetadataError`](crate::MetadataError).
//!
//! ## Closed Registries
//!
//! By default every `ApiResponse` type is decodable. Restrict the set with a
//! [`TypeRegistry`](crate::TypeRegistry); other types fail with
//! `UnknownResponseType`:
//!
//! ```ignore
//! let decoder = ResponseDecoder::builder()
//!     .registry(
//!         TypeRegistry::builder()
//!             .register::<StreamInfo>()
//!             .register::<ConsumerInfo>()
//!             .build(),
//!     )
//!     .build();
//! ```
//!
//! ## Configuration
//!
//! ```ignore
//! let decoder = ResponseDecoder::builder()
//!     .config(
//!         DecoderConfig::builder()
//!             .max_payload_size(1024 * 1024)
//!             .build(),
//!     )
//!     .build();
//! ```
//!
//! ## Handing a Decoder to a Transport
//!
//! [`ApiDeserializer`](crate::ApiDeserializer) implements
//! [`ResponseDeserializer`](crate::ResponseDeserializer) for one reply type:
//!
//! ```ignore
//! let deserializer = ApiDeserializer::<StreamInfo>::new(decoder.clone());
//! let outcome = deserializer.deserialize(&reply.payload);
//! ```
