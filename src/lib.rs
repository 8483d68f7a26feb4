#![no_std]

//! A zero-copy decoder for length-prefixed binary documents.
//!
//! Cassette parses a complete in-memory buffer into a tree of typed
//! [`Element`]s. String, binary, and identifier payloads borrow from the
//! buffer; nested documents are owned by the element holding them, and the
//! whole tree is released at once with [`Document::release`] (or on drop).
//!
//! ```
//! let bytes = b"\x16\x00\x00\x00\x02hello\x00\x06\x00\x00\x00world\x00\x00";
//! let document = cassette::parse(bytes)?;
//! assert_eq!(document.get("hello").and_then(|v| v.as_bytes()), Some(&b"world"[..]));
//! # Ok::<(), cassette::Error>(())
//! ```
//!
//! Parsing is bounded in nesting depth and strict about every length field.
//! See [`ParseOptions`] for the available settings.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable `std` support in dependencies (default).

extern crate alloc;

pub mod document;
pub mod element;
pub mod kind;
pub mod parse;
pub mod subtype;

pub use document::Document;
pub use element::{Element, Value};
pub use kind::ElementKind;
pub use parse::{Error, ParseOptions, parse, parse_with};
pub use subtype::BinarySubtype;
