//! The gamma remap transform.
//!
//! Entry `i` of a table is `trunc((i / divisor) ^ gamma * scale)`. The exponent
//! is not validated: zero, negative and non-finite values follow `f64::powf`,
//! and nothing is clamped to the declared element width.

use crate::config::TableConfiguration;
use crate::error::{GammaError, Result};

/// Computes the remap table for `gamma` under `config`.
///
/// The result always has exactly `config.entry_count()` entries.
///
/// # Example
///
/// ```
/// use gamma_lut::{generate, Preset};
///
/// let table = generate(2.0, &Preset::Entries256.configuration());
/// assert_eq!(table[0], 0);
/// assert_eq!(table[128], 64);
/// assert_eq!(table[255], 255);
/// ```
pub fn generate(gamma: f64, config: &TableConfiguration) -> Vec<i64> {
    let divisor = config.input_divisor();
    let scale = config.output_scale();
    (0..config.entry_count())
        .map(|i| remap_entry(i, gamma, divisor, scale))
        .collect()
}

/// One table entry. Kept separate so the arithmetic order stays fixed:
/// divide, raise, scale, truncate.
#[inline]
fn remap_entry(index: usize, gamma: f64, divisor: f64, scale: f64) -> i64 {
    let normalized = index as f64 / divisor;
    truncate_toward_zero(normalized.powf(gamma) * scale)
}

/// Drops the fractional part of `value`.
///
/// `as` truncates toward zero, so `-127.5` becomes `-127`, not `-128`.
/// Out-of-range values saturate and NaN becomes 0.
#[inline]
pub fn truncate_toward_zero(value: f64) -> i64 {
    value as i64
}

/// Parses a gamma exponent the way the command line accepts it.
///
/// Surrounding whitespace is ignored; anything `f64` can parse is accepted,
/// including `inf` and `NaN`.
///
/// # Errors
///
/// Returns [`GammaError::InvalidGamma`] when the text is not a float.
pub fn parse_gamma(input: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|source| GammaError::InvalidGamma {
            input: input.to_string(),
            source,
        })
}

/// Number of entries that do not fit the configuration's element type.
pub fn out_of_range_count(table: &[i64], config: &TableConfiguration) -> usize {
    let max = config.element().max_value();
    table.iter().filter(|&&v| v < 0 || v as u64 > max).count()
}
