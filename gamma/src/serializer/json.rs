//! JSON serializer for generated gamma tables.
//!
//! Produces one document holding the exponent, the full table configuration,
//! and the values, so tooling outside Rust can consume a table without
//! parsing source code.

use serde::Serialize;
use serde_json::Value;

use crate::config::TableConfiguration;

/// A generated table together with the inputs that produced it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TableDocument<'a> {
    /// Gamma exponent; non-finite values serialize as `null`.
    pub gamma: f64,
    /// Shape of the table.
    pub configuration: &'a TableConfiguration,
    /// Values in index order.
    pub table: &'a [i64],
}

impl<'a> TableDocument<'a> {
    /// Bundles `table` with its gamma and configuration.
    #[must_use]
    pub fn new(gamma: f64, configuration: &'a TableConfiguration, table: &'a [i64]) -> Self {
        Self {
            gamma,
            configuration,
            table,
        }
    }
}

/// Builds the JSON document for `table`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
///
/// # Errors
///
/// Returns the [`serde_json::Error`] raised while converting the document.
pub fn to_json(
    gamma: f64,
    config: &TableConfiguration,
    table: &[i64],
) -> serde_json::Result<Value> {
    serde_json::to_value(TableDocument::new(gamma, config, table))
}
