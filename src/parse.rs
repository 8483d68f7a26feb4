//! Recursive-descent parsing of documents.
//!
//! A document is laid out as a little-endian `i32` size (counting the whole
//! document), a stream of elements, and a single zero terminator. Each
//! element is a tag byte, a zero-terminated field name, and a payload whose
//! layout is selected by the tag.
//!
//! Nested documents, arrays, and code-with-scope scopes are parsed by the
//! same routine, each over exactly the region its own header declares. The
//! nesting depth is bounded by [`ParseOptions::max_depth`].

mod cursor;
mod error;

use alloc::vec::Vec;

use crate::{
    document::Document,
    element::{
        Binary, CodeWithScope, DbPointer, Decimal128, Element, ObjectId, Regex, Timestamp, Value,
    },
    kind::ElementKind,
    subtype::BinarySubtype,
};

use cursor::Cursor;

pub use error::Error;

/// Default for [`ParseOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Settings for a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    max_depth: usize,
    strict_code_with_scope: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict_code_with_scope: true,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit how deeply documents may nest. The top-level document is at
    /// depth zero.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Require the declared length of a code-with-scope value to match the
    /// bytes of its code and scope exactly (default). When disabled, the
    /// length is only checked to be non-negative and within the bytes
    /// remaining; it is otherwise recorded as read.
    pub fn strict_code_with_scope(mut self, strict: bool) -> Self {
        self.strict_code_with_scope = strict;
        self
    }

    /// Parse a buffer holding exactly one document.
    pub fn parse<'a>(&self, r: &'a [u8]) -> Result<Document<'a>, Error> {
        let result = Parser { options: self }.document(r, 0, 0);

        match &result {
            Ok(document) => tracing::debug!(
                declared_size = document.declared_size(),
                elements = document.len(),
                "parsed document"
            ),
            Err(err) => tracing::debug!(%err, len = r.len(), "rejected document"),
        }

        result
    }
}

/// Parse a buffer holding exactly one document, with default options.
///
/// The returned tree borrows from `r`.
pub fn parse(r: &[u8]) -> Result<Document<'_>, Error> {
    ParseOptions::default().parse(r)
}

/// Parse a buffer holding exactly one document.
pub fn parse_with<'a>(r: &'a [u8], options: &ParseOptions) -> Result<Document<'a>, Error> {
    options.parse(r)
}

struct Parser<'o> {
    options: &'o ParseOptions,
}

impl Parser<'_> {
    /// Parse the region `r`, found at `base` in the top-level buffer.
    fn document<'a>(&self, r: &'a [u8], base: usize, depth: usize) -> Result<Document<'a>, Error> {
        if depth > self.options.max_depth {
            Err(Error::DepthLimitExceeded(self.options.max_depth))?;
        }

        let Some((&0, rest)) = r.split_last() else {
            return Err(Error::InvalidDocumentSize);
        };
        let Some((header, body)) = rest.split_first_chunk::<4>() else {
            return Err(Error::InvalidDocumentSize);
        };

        let declared_size = i32::from_le_bytes(*header);
        if usize::try_from(declared_size) != Ok(r.len()) {
            Err(Error::InvalidDocumentSize)?;
        }

        let c = &mut Cursor::new(body, base + 4);
        let mut elements = Vec::new();

        while !c.is_empty() {
            let element = self.element(c, depth)?;
            elements.try_reserve(1).map_err(Error::Allocation)?;
            elements.push(element);
        }

        Ok(Document {
            declared_size,
            elements,
        })
    }

    fn element<'a>(&self, c: &mut Cursor<'a>, depth: usize) -> Result<Element<'a>, Error> {
        let offset = c.offset();
        let [tag] = c.take::<1>()?;
        let kind = ElementKind::classify(tag)?;
        let name = c.take_cstr()?;

        let value = match kind {
            ElementKind::Double => Value::Double(f64::from_le_bytes(c.take()?)),
            ElementKind::String => Value::String(c.take_string()?),
            ElementKind::Document => Value::Document(self.nested(c, depth)?),
            ElementKind::Array => {
                let array = self.nested(c, depth)?;
                check_indices(&array)?;
                Value::Array(array)
            }
            ElementKind::Binary => Value::Binary(binary(c)?),
            ElementKind::Undefined => Value::Undefined,
            ElementKind::ObjectId => Value::ObjectId(c.take_ref::<ObjectId>()?),
            ElementKind::Boolean => match c.take::<1>()? {
                [0] => Value::Boolean(false),
                [1] => Value::Boolean(true),
                [b] => Err(Error::InvalidBooleanValue(b))?,
            },
            ElementKind::UtcDatetime => Value::UtcDatetime(i64::from_le_bytes(c.take()?)),
            ElementKind::Null => Value::Null,
            ElementKind::Regex => Value::Regex(Regex {
                pattern: c.take_cstr()?,
                options: c.take_cstr()?,
            }),
            ElementKind::DbPointer => Value::DbPointer(DbPointer {
                namespace: c.take_string()?,
                id: c.take_ref::<ObjectId>()?,
            }),
            ElementKind::JsCode => Value::JsCode(c.take_string()?),
            ElementKind::Symbol => Value::Symbol(c.take_string()?),
            ElementKind::JsCodeWithScope => {
                Value::JsCodeWithScope(self.code_with_scope(c, depth)?)
            }
            ElementKind::Int32 => Value::Int32(i32::from_le_bytes(c.take()?)),
            ElementKind::Timestamp => Value::Timestamp(Timestamp(u64::from_le_bytes(c.take()?))),
            ElementKind::Int64 => Value::Int64(i64::from_le_bytes(c.take()?)),
            ElementKind::Decimal128 => {
                Value::Decimal128(Decimal128(u128::from_le_bytes(c.take()?)))
            }
            ElementKind::MinKey => Value::MinKey,
            ElementKind::MaxKey => Value::MaxKey,
        };

        tracing::trace!(?kind, offset, name_len = name.len(), "decoded element");

        Ok(Element { name, value })
    }

    /// Parse an embedded document one level deeper than its parent.
    fn nested<'a>(&self, c: &mut Cursor<'a>, depth: usize) -> Result<Document<'a>, Error> {
        let (r, base) = c.take_document()?;
        self.document(r, base, depth + 1)
    }

    fn code_with_scope<'a>(
        &self,
        c: &mut Cursor<'a>,
        depth: usize,
    ) -> Result<CodeWithScope<'a>, Error> {
        let declared_length = i32::from_le_bytes(c.take()?);

        // The declared length counts its own four bytes.
        let total = usize::try_from(declared_length)
            .ok()
            .filter(|&total| total <= c.remaining() + 4)
            .ok_or(Error::InvalidDocumentSize)?;

        if !self.options.strict_code_with_scope {
            return Ok(CodeWithScope {
                declared_length,
                code: c.take_string()?,
                scope: self.nested(c, depth)?,
            });
        }

        let len = total.checked_sub(4).ok_or(Error::InvalidDocumentSize)?;
        let base = c.offset();
        let r = c.take_slice(len).ok_or(Error::InvalidDocumentSize)?;
        let c = &mut Cursor::new(r, base);

        let code = c.take_string()?;
        let scope = self.nested(c, depth)?;

        if !c.is_empty() {
            Err(Error::InvalidDocumentSize)?;
        }

        Ok(CodeWithScope {
            declared_length,
            code,
            scope,
        })
    }
}

fn binary<'a>(c: &mut Cursor<'a>) -> Result<Binary<'a>, Error> {
    let len = i32::from_le_bytes(c.take()?);
    let len = usize::try_from(len)
        .ok()
        .filter(|&len| len <= c.remaining())
        .ok_or(Error::InvalidBinarySize)?;

    let [subtype] = c.take::<1>()?;
    let subtype = BinarySubtype::new(subtype)?;

    let data = c.take_slice(len).ok_or(Error::InvalidBinarySize)?;

    Ok(Binary { subtype, data })
}

/// Check that the field names of an array count up from zero.
fn check_indices(array: &Document<'_>) -> Result<(), Error> {
    for (i, element) in array.iter().enumerate() {
        if parse_index(element.name()) != Some(i) {
            Err(Error::InvalidArrayIndex)?;
        }
    }

    Ok(())
}

/// Parse a non-empty run of ASCII digits as a base-10 integer.
fn parse_index(name: &[u8]) -> Option<usize> {
    if name.is_empty() {
        return None;
    }

    name.iter().try_fold(0usize, |acc, &b| {
        let digit = b.checked_sub(b'0').filter(|d| *d < 10)?;
        acc.checked_mul(10)?.checked_add(digit as usize)
    })
}
