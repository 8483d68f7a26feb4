//! Classification of element tag bytes.

use thiserror::Error;
use zerocopy::{Immutable, KnownLayout, TryFromBytes};

/// The tag byte did not name a known element kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown element type ({0:#04x}).")]
pub struct InvalidElementType(pub u8);

/// The kind of an element, discriminated by its wire tag byte.
///
/// Read as a signed byte, valid tags are `1..=19`, `127` (max key), and `-1`
/// (min key).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromBytes, KnownLayout, Immutable)]
pub enum ElementKind {
    Double = 0x01,
    String = 0x02,
    Document = 0x03,
    Array = 0x04,
    Binary = 0x05,
    /// Deprecated.
    Undefined = 0x06,
    ObjectId = 0x07,
    Boolean = 0x08,
    UtcDatetime = 0x09,
    Null = 0x0A,
    Regex = 0x0B,
    /// Deprecated.
    DbPointer = 0x0C,
    JsCode = 0x0D,
    /// Deprecated.
    Symbol = 0x0E,
    /// Deprecated.
    JsCodeWithScope = 0x0F,
    Int32 = 0x10,
    Timestamp = 0x11,
    Int64 = 0x12,
    Decimal128 = 0x13,
    MaxKey = 0x7F,
    MinKey = 0xFF,
}

impl ElementKind {
    /// Classify a tag byte.
    pub fn classify(tag: u8) -> Result<Self, InvalidElementType> {
        zerocopy::try_transmute!(tag).map_err(|_| InvalidElementType(tag))
    }

    /// The wire tag byte of this kind.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Whether this kind is retained only for compatibility with old data.
    pub fn is_deprecated(self) -> bool {
        matches!(
            self,
            Self::Undefined | Self::DbPointer | Self::Symbol | Self::JsCodeWithScope
        )
    }
}

impl TryFrom<u8> for ElementKind {
    type Error = InvalidElementType;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::classify(tag)
    }
}
