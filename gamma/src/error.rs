//! Error type shared by every fallible operation in the crate.

use std::io;
use std::path::PathBuf;

/// Errors produced while configuring, parsing, or emitting gamma tables.
#[derive(Debug, thiserror::Error)]
pub enum GammaError {
    /// The gamma exponent could not be read as a float.
    #[error("invalid gamma value `{input}`: {source}")]
    InvalidGamma {
        /// The text that failed to parse.
        input: String,
        /// Underlying float parse failure.
        source: std::num::ParseFloatError,
    },

    /// A table needs at least two entries so that the divisor is non-zero.
    #[error("a gamma table needs at least 2 entries, got {0}")]
    InvalidEntryCount(usize),

    /// More entries than the generator will build.
    #[error("a gamma table holds at most {max} entries, got {count}")]
    EntryCountTooLarge {
        /// Requested entry count.
        count: usize,
        /// Largest accepted entry count.
        max: usize,
    },

    /// The `--entries` value is neither a preset nor an integer.
    #[error("invalid entry count `{0}`: expected 256, 257, 1025, or an integer >= 2")]
    InvalidEntries(String),

    /// Element type label other than `u8`, `u16`, or `u32`.
    #[error("unknown element type `{0}`: expected u8, u16, or u32")]
    UnknownElementType(String),

    /// The requested constant name is not a Rust identifier.
    #[error("`{0}` is not a valid Rust identifier")]
    InvalidIdentifier(String),

    /// Text handed to the literal parser does not have the expected shape.
    #[error("malformed gamma literal: {0}")]
    MalformedLiteral(String),

    /// Writing a generated file failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GammaError>;
