//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use jetwire_core::prelude::*;
//! ```

pub use crate::{
    ApiError, ApiResponse, ApiResult, DecodeError, Error, Metadata, MetadataCache, MetadataError,
    ResponseDeserializer, Result, TypeInfo, TypeRegistry,
};
