//! Parsed documents and their release.

use alloc::vec::Vec;
use core::mem;

use crate::element::{Element, Value};

/// An ordered collection of elements.
///
/// A document owns its element sequence and every document nested beneath
/// it. Leaf payloads borrow from the parsed buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<'a> {
    pub(crate) declared_size: i32,
    pub(crate) elements: Vec<Element<'a>>,
}

impl<'a> Document<'a> {
    /// The size from the document header, equal to its encoded length.
    pub fn declared_size(&self) -> i32 {
        self.declared_size
    }

    pub fn elements(&self) -> &[Element<'a>] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Element<'a>> {
        self.elements.iter()
    }

    /// Find the value of the first element with a name.
    pub fn get(&self, name: impl AsRef<[u8]>) -> Option<&Value<'a>> {
        let name = name.as_ref();
        self.elements
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.value)
    }

    /// Iterate over the values of an array in index order.
    pub fn values(&self) -> impl Iterator<Item = &Value<'a>> {
        self.elements.iter().map(|e| &e.value)
    }

    /// Release the storage held by this document and everything nested in it.
    ///
    /// Borrowed payloads are untouched. Taking `self` by value makes a second
    /// release of the same document impossible.
    pub fn release(self) {
        drop(self)
    }
}

impl<'a, 'd> IntoIterator for &'d Document<'a> {
    type Item = &'d Element<'a>;
    type IntoIter = core::slice::Iter<'d, Element<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl Drop for Document<'_> {
    fn drop(&mut self) {
        if self.elements.is_empty() {
            return;
        }

        // Detach nested sequences onto a work stack so that tearing down a
        // deep tree does not recurse.
        let mut pending = Vec::new();
        pending.push(mem::take(&mut self.elements));

        while let Some(mut elements) = pending.pop() {
            for element in elements.drain(..) {
                if let Some(mut nested) = element.into_value().into_nested() {
                    let inner = mem::take(&mut nested.elements);
                    if !inner.is_empty() {
                        pending.push(inner);
                    }
                }
            }
        }
    }
}
