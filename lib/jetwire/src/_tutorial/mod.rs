//! # Tutorial: Decoding management API replies with jetwire
//!
//! Learn to decode control-plane replies step by step.
//!
//! ## Chapters
//!
//! 1. [Getting Started][chapter_0] - Your first response type
//! 2. [Handling Outcomes][chapter_1] - Values, server errors, decode failures
//! 3. [Metadata & Caching][chapter_2] - Registries, schemas, and memoized failures
//!
//! Ready? Start with [Chapter 0: Getting Started][chapter_0].

pub mod chapter_0;
pub mod chapter_1;
pub mod chapter_2;
