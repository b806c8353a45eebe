//! Serializers for generated gamma tables.
//!
//! Two serialization formats are supported:
//! - **Array literal** ([`literal`]) — the single-line `const gamma : [T; N] = [..];` form
//! - **JSON** ([`json`]) — the table plus its gamma and configuration, for non-Rust tooling

#[cfg(feature = "serializers")]
pub mod json;
pub mod literal;
