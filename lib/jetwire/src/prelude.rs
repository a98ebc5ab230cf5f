//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and macros
//! for easy glob importing:
//!
//! ```ignore
//! use jetwire::prelude::*;
//! ```

pub use crate::{
    ApiDeserializer, ApiError, ApiResponse, ApiResult, DecodeError, DecoderConfig, Error,
    MetadataCache, ResponseDecoder, ResponseDeserializer, Result, TypeInfo, TypeRegistry,
};
pub use serde::{Deserialize, Serialize};
