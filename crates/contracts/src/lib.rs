//! Shared domain model for the offer builder.
//!
//! Everything here is target-independent: the wasm frontend renders it, and the
//! unit tests exercise it natively.

pub mod domain;
pub mod shared;
