//! # Chapter 0: Getting Started
//!
//! Your first decoded reply in 5 minutes.
//!
//! ## What You'll Learn
//!
//! - Declare a response type with `#[derive(ApiResponse)]`
//! - Decode a reply buffer with [`ResponseDecoder`](crate::ResponseDecoder)
//!
//! ## Prerequisites
//!
//! Add to `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! jetwire = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ## Your First Response Type
//!
//! ```ignore
//! use jetwire::prelude::*;
//!
//! // A reply payload: any serde type
//! #[derive(Debug, Deserialize, ApiResponse)]
//! pub struct StreamNames {
//!     pub total: u64,
//!     pub streams: Vec<String>,
//! }
//!
//! fn main() -> jetwire::Result<()> {
//!     let reply = br#"{"total":2,"streams":["ORDERS","EVENTS"]}"#;
//!
//!     let names = ResponseDecoder::new()
//!         .decode::<StreamNames>(reply)
//!         .into_result()?;
//!     println!("{:?}", names.streams);
//!     Ok(())
//! }
//! ```
//!
//! ## What Gets Generated
//!
//! `#[derive(ApiResponse)]` implements [`ApiResponse`](crate::ApiResponse):
//! the type can now describe how to materialize itself from a parsed
//! document. The description is built the first time the type is decoded,
//! then reused.
//!
//! ## Next Steps
//!
//! - [Chapter 1: Handling Outcomes][super::chapter_1] - What a reply can turn into
