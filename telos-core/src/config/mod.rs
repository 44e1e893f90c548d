//! Configuration types
//!
//! Controller tuning is constructed in code (or deserialized on a host with
//! the `serde` feature) and validated once; controllers never accept a
//! config that failed validation.

pub mod types;

pub use types::*;
