//! Table configurations and the named presets.
//!
//! A [`TableConfiguration`] fixes everything about a remap table except the
//! gamma exponent: how many entries it has, how indices are normalized, how
//! the result is scaled, and which unsigned integer type the emitted array
//! declares.

use core::fmt;
use core::str::FromStr;

use crate::error::{GammaError, Result};

/// Largest entry count a configuration accepts: 2^24 entries, 128 MiB of
/// generated `i64` values. Every index is exactly representable as `f64`.
pub const MAX_ENTRIES: usize = 1 << 24;

/// Unsigned element type declared by an emitted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ElementType {
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
}

impl ElementType {
    /// Rust type name used in the array declaration.
    pub const fn label(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
        }
    }

    /// Width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::U8 => 8,
            Self::U16 => 16,
            Self::U32 => 32,
        }
    }

    /// Largest value representable by the element type.
    pub const fn max_value(self) -> u64 {
        match self {
            Self::U8 => u8::MAX as u64,
            Self::U16 => u16::MAX as u64,
            Self::U32 => u32::MAX as u64,
        }
    }

    /// Smallest element type that can hold `value`; saturates at `u32`.
    pub const fn fitting(value: u64) -> Self {
        if value <= u8::MAX as u64 {
            Self::U8
        } else if value <= u16::MAX as u64 {
            Self::U16
        } else {
            Self::U32
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ElementType {
    type Err = GammaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "u8" => Ok(Self::U8),
            "u16" => Ok(Self::U16),
            "u32" => Ok(Self::U32),
            other => Err(GammaError::UnknownElementType(other.to_string())),
        }
    }
}

/// Shape of a remap table: entry count, normalization, scale, element type.
///
/// Built through [`TableConfiguration::new`] or [`Preset::configuration`], which
/// guarantee `entry_count >= 2` so the input divisor is never zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfiguration {
    entry_count: usize,
    input_divisor: f64,
    output_scale: f64,
    element: ElementType,
}

/// Serializes every configuration field, including the derived width and
/// type label.
#[cfg(feature = "serde")]
impl serde::Serialize for TableConfiguration {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("TableConfiguration", 5)?;
        s.serialize_field("entry_count", &self.entry_count)?;
        s.serialize_field("input_divisor", &self.input_divisor)?;
        s.serialize_field("output_scale", &self.output_scale)?;
        s.serialize_field("output_width", &self.output_width())?;
        s.serialize_field("type_label", &self.element)?;
        s.end()
    }
}

impl TableConfiguration {
    /// Creates a configuration whose divisor and scale are both `entry_count - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`GammaError::InvalidEntryCount`] when `entry_count < 2` and
    /// [`GammaError::EntryCountTooLarge`] when it exceeds [`MAX_ENTRIES`].
    pub fn new(entry_count: usize, element: ElementType) -> Result<Self> {
        if entry_count < 2 {
            return Err(GammaError::InvalidEntryCount(entry_count));
        }
        if entry_count > MAX_ENTRIES {
            return Err(GammaError::EntryCountTooLarge {
                count: entry_count,
                max: MAX_ENTRIES,
            });
        }
        let max_index = (entry_count - 1) as f64;
        Ok(Self {
            entry_count,
            input_divisor: max_index,
            output_scale: max_index,
            element,
        })
    }

    /// Creates a configuration with the smallest element type that holds
    /// `entry_count - 1`.
    ///
    /// # Errors
    ///
    /// Returns [`GammaError::InvalidEntryCount`] when `entry_count < 2` and
    /// [`GammaError::EntryCountTooLarge`] when it exceeds [`MAX_ENTRIES`].
    pub fn for_entries(entry_count: usize) -> Result<Self> {
        let max_index = entry_count.saturating_sub(1) as u64;
        Self::new(entry_count, ElementType::fitting(max_index))
    }

    /// Returns a copy with a different output scale.
    #[must_use]
    pub fn with_output_scale(mut self, output_scale: f64) -> Self {
        self.output_scale = output_scale;
        self
    }

    /// Returns a copy declaring a different element type.
    #[must_use]
    pub fn with_element(mut self, element: ElementType) -> Self {
        self.element = element;
        self
    }

    /// Number of entries in the table.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Divisor that normalizes an index into `[0, 1]`; always `entry_count - 1`.
    pub fn input_divisor(&self) -> f64 {
        self.input_divisor
    }

    /// Multiplier applied after the power function.
    pub fn output_scale(&self) -> f64 {
        self.output_scale
    }

    /// Declared element type.
    pub fn element(&self) -> ElementType {
        self.element
    }

    /// Declared element width in bits.
    pub fn output_width(&self) -> u32 {
        self.element.bits()
    }

    /// Declared element type name, e.g. `u16`.
    pub fn type_label(&self) -> &'static str {
        self.element.label()
    }

    /// Largest valid index.
    pub fn max_index(&self) -> usize {
        self.entry_count - 1
    }
}

/// Parses an entry count: one of the preset sizes or any integer `>= 2`.
impl FromStr for TableConfiguration {
    type Err = GammaError;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(preset) = s.parse::<Preset>() {
            return Ok(preset.configuration());
        }
        let entries: usize = s
            .trim()
            .parse()
            .map_err(|_| GammaError::InvalidEntries(s.to_string()))?;
        Self::for_entries(entries)
    }
}

/// The three table shapes the generator has always shipped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// 256 entries of `u8`, scaled to 255.
    Entries256,
    /// 257 entries of `u16`, scaled to 256.
    Entries257,
    /// 1025 entries of `u16`, scaled to 1024.
    #[default]
    Entries1025,
}

impl Preset {
    /// Every preset, smallest first.
    pub const ALL: [Preset; 3] = [Self::Entries256, Self::Entries257, Self::Entries1025];

    /// Number of table entries.
    pub const fn entry_count(self) -> usize {
        match self {
            Self::Entries256 => 256,
            Self::Entries257 => 257,
            Self::Entries1025 => 1025,
        }
    }

    /// Declared element type.
    pub const fn element(self) -> ElementType {
        match self {
            Self::Entries256 => ElementType::U8,
            Self::Entries257 | Self::Entries1025 => ElementType::U16,
        }
    }

    /// The full configuration for this preset.
    pub fn configuration(self) -> TableConfiguration {
        let max_index = (self.entry_count() - 1) as f64;
        TableConfiguration {
            entry_count: self.entry_count(),
            input_divisor: max_index,
            output_scale: max_index,
            element: self.element(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entry_count())
    }
}

impl FromStr for Preset {
    type Err = GammaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "256" => Ok(Self::Entries256),
            "257" => Ok(Self::Entries257),
            "1025" => Ok(Self::Entries1025),
            other => Err(GammaError::InvalidEntries(other.to_string())),
        }
    }
}
