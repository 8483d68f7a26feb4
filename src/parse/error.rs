//! Errors rejecting a buffer.

use alloc::collections::TryReserveError;

use thiserror::Error;

use crate::{kind, subtype};

/// An error parsing a document.
///
/// Every error aborts the whole parse; no partial document is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A document header, terminator, or embedded length does not match the
    /// bytes available.
    #[error("Invalid document size.")]
    InvalidDocumentSize,
    /// A length-prefixed string is out of range or not zero-terminated.
    #[error("Invalid string size.")]
    InvalidStringSize,
    /// A binary length is negative or exceeds the bytes available.
    #[error("Invalid binary size.")]
    InvalidBinarySize,
    /// An array field name does not match its position.
    #[error("Invalid array index.")]
    InvalidArrayIndex,
    /// A boolean byte other than zero or one.
    #[error("Invalid boolean value ({0}).")]
    InvalidBooleanValue(u8),
    /// Unrecognized element tag.
    #[error(transparent)]
    InvalidElementType(#[from] kind::InvalidElementType),
    /// Reserved binary subtype.
    #[error(transparent)]
    InvalidSubtype(#[from] subtype::InvalidSubtype),
    /// A fixed-width payload or length prefix runs past the end of the
    /// enclosing document.
    #[error("Unexpectedly reached the end of the document.")]
    EndOfSlice,
    /// A field name or regular expression has no terminator.
    #[error("Unterminated string.")]
    UnterminatedCString,
    /// Documents are nested deeper than allowed.
    #[error("Nesting exceeds the depth limit ({0}).")]
    DepthLimitExceeded(usize),
    /// Element storage could not be allocated.
    #[error("Failed to allocate element storage: {0}.")]
    Allocation(TryReserveError),
}
