//! Gamma-correction lookup tables.
//!
//! The `gamma-lut` crate computes power-law remap tables,
//! `f(i) = trunc((i / (n - 1)) ^ gamma * scale)`, and renders them as Rust
//! source: a single-line array literal, a complete documented module, or a
//! JSON document for other tooling. Nothing here touches pixels; the tables
//! are meant to be checked in and indexed by downstream image code.
//!
//! # Entry Point
//!
//! ```
//! use gamma_lut::{generate, serializer::literal::serialize, Preset};
//!
//! let config = Preset::Entries256.configuration();
//! let table = generate(1.0, &config);
//! assert_eq!(table[128], 128);
//!
//! let text = serialize(&table, config.type_label(), config.entry_count());
//! assert!(text.starts_with("const gamma : [u8; 256] = [0,1,2,"));
//! ```
//!
//! # Presets
//!
//! | Preset | Entries | Divisor | Scale | Element |
//! |--------|---------|---------|-------|---------|
//! | [`Preset::Entries256`] | 256 | 255 | 255 | `u8` |
//! | [`Preset::Entries257`] | 257 | 256 | 256 | `u16` |
//! | [`Preset::Entries1025`] | 1025 | 1024 | 1024 | `u16` |
//!
//! Any other size is available through [`TableConfiguration::for_entries`].

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod emit;
pub mod error;
pub mod remap;
pub mod serializer;

pub use config::{ElementType, Preset, TableConfiguration, MAX_ENTRIES};
pub use error::{GammaError, Result};
pub use remap::{generate, parse_gamma};
