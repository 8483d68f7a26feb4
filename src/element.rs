//! Elements and their payloads.
//!
//! Every byte-string payload borrows from the buffer the document was parsed
//! from, so the lifetime `'a` of a tree is bounded by that buffer. Nested
//! documents are owned by the element holding them.

use tartan_bitfield::bitfield;
use zerocopy::{FromBytes, Immutable, KnownLayout, Unaligned};

use crate::{document::Document, kind::ElementKind, subtype::BinarySubtype};

/// A named, typed field of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Element<'a> {
    pub(crate) name: &'a [u8],
    pub(crate) value: Value<'a>,
}

impl<'a> Element<'a> {
    pub fn new(name: &'a [u8], value: Value<'a>) -> Self {
        Self { name, value }
    }

    /// The field name, without its terminator.
    pub fn name(&self) -> &'a [u8] {
        self.name
    }

    pub fn value(&self) -> &Value<'a> {
        &self.value
    }

    pub fn kind(&self) -> ElementKind {
        self.value.kind()
    }

    pub fn into_value(self) -> Value<'a> {
        self.value
    }
}

/// The payload of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Double(f64),
    String(&'a [u8]),
    Document(Document<'a>),
    /// A document whose field names are its positional indices.
    Array(Document<'a>),
    Binary(Binary<'a>),
    Undefined,
    ObjectId(&'a ObjectId),
    Boolean(bool),
    /// Milliseconds since the Unix epoch.
    UtcDatetime(i64),
    Null,
    Regex(Regex<'a>),
    DbPointer(DbPointer<'a>),
    JsCode(&'a [u8]),
    Symbol(&'a [u8]),
    JsCodeWithScope(CodeWithScope<'a>),
    Int32(i32),
    Timestamp(Timestamp),
    Int64(i64),
    Decimal128(Decimal128),
    MinKey,
    MaxKey,
}

impl<'a> Value<'a> {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Double(_) => ElementKind::Double,
            Self::String(_) => ElementKind::String,
            Self::Document(_) => ElementKind::Document,
            Self::Array(_) => ElementKind::Array,
            Self::Binary(_) => ElementKind::Binary,
            Self::Undefined => ElementKind::Undefined,
            Self::ObjectId(_) => ElementKind::ObjectId,
            Self::Boolean(_) => ElementKind::Boolean,
            Self::UtcDatetime(_) => ElementKind::UtcDatetime,
            Self::Null => ElementKind::Null,
            Self::Regex(_) => ElementKind::Regex,
            Self::DbPointer(_) => ElementKind::DbPointer,
            Self::JsCode(_) => ElementKind::JsCode,
            Self::Symbol(_) => ElementKind::Symbol,
            Self::JsCodeWithScope(_) => ElementKind::JsCodeWithScope,
            Self::Int32(_) => ElementKind::Int32,
            Self::Timestamp(_) => ElementKind::Timestamp,
            Self::Int64(_) => ElementKind::Int64,
            Self::Decimal128(_) => ElementKind::Decimal128,
            Self::MinKey => ElementKind::MinKey,
            Self::MaxKey => ElementKind::MaxKey,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int32(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(x) | Self::UtcDatetime(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(x) => Some(*x),
            _ => None,
        }
    }

    /// The raw bytes of a string, code, symbol, or binary payload.
    ///
    /// No UTF-8 validation is performed.
    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match self {
            Self::String(s) | Self::JsCode(s) | Self::Symbol(s) => Some(s),
            Self::Binary(b) => Some(b.data),
            _ => None,
        }
    }

    pub fn as_document(&self) -> Option<&Document<'a>> {
        match self {
            Self::Document(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Document<'a>> {
        match self {
            Self::Array(d) => Some(d),
            _ => None,
        }
    }

    /// Take the nested document this value owns, if any.
    pub(crate) fn into_nested(self) -> Option<Document<'a>> {
        match self {
            Self::Document(d) | Self::Array(d) => Some(d),
            Self::JsCodeWithScope(c) => Some(c.scope),
            _ => None,
        }
    }
}

/// A binary blob with its subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binary<'a> {
    pub subtype: BinarySubtype,
    pub data: &'a [u8],
}

/// A regular expression, as its pattern and option characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regex<'a> {
    pub pattern: &'a [u8],
    pub options: &'a [u8],
}

/// A deprecated reference to a document in another namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbPointer<'a> {
    pub namespace: &'a [u8],
    pub id: &'a ObjectId,
}

/// Deprecated code with an attached scope document.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeWithScope<'a> {
    /// The total length read from the wire.
    pub declared_length: i32,
    pub code: &'a [u8],
    pub scope: Document<'a>,
}

/// A twelve-byte object identifier, borrowed in place.
#[repr(transparent)]
#[derive(Debug, PartialEq, Eq, Hash, FromBytes, KnownLayout, Immutable, Unaligned)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    pub fn bytes(&self) -> &[u8; 12] {
        &self.0
    }
}

/// An opaque 64-bit timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp(pub u64);

bitfield! {
    struct TimestampFields(u64) {
        [0..32] increment: u32,
        [32..64] time: u32,
    }
}

impl Timestamp {
    /// The low half, conventionally an ordinal within a second.
    pub fn increment(self) -> u32 {
        TimestampFields(self.0).increment()
    }

    /// The high half, conventionally seconds since the Unix epoch.
    pub fn time(self) -> u32 {
        TimestampFields(self.0).time()
    }
}

/// An opaque 128-bit decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decimal128(pub u128);

impl Decimal128 {
    pub fn to_le_bytes(self) -> [u8; 16] {
        self.0.to_le_bytes()
    }
}
