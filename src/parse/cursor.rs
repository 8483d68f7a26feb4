//! Left-to-right reads over an element stream.

use zerocopy::{FromBytes, Immutable, KnownLayout, Unaligned};

use super::Error;

/// A read position within a borrowed region of the input.
#[derive(Debug)]
pub(super) struct Cursor<'a> {
    r: &'a [u8],
    i: usize,
    /// Offset of `r` within the top-level buffer, for diagnostics.
    base: usize,
}

impl<'a> Cursor<'a> {
    pub(super) fn new(r: &'a [u8], base: usize) -> Self {
        Self { r, i: 0, base }
    }

    pub(super) fn is_empty(&self) -> bool {
        self.i == self.r.len()
    }

    pub(super) fn remaining(&self) -> usize {
        self.r.len() - self.i
    }

    /// Absolute offset of the read position.
    pub(super) fn offset(&self) -> usize {
        self.base + self.i
    }

    fn rest(&self) -> &'a [u8] {
        &self.r[self.i..]
    }

    /// Take an exact number of bytes, advancing the position.
    pub(super) fn take<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let bytes = *self.rest().first_chunk::<N>().ok_or(Error::EndOfSlice)?;
        self.i += N;
        Ok(bytes)
    }

    pub(super) fn take_slice(&mut self, n: usize) -> Option<&'a [u8]> {
        let bytes = self.rest().get(..n)?;
        self.i += n;
        Some(bytes)
    }

    /// Borrow a fixed-layout value in place.
    pub(super) fn take_ref<T>(&mut self) -> Result<&'a T, Error>
    where
        T: FromBytes + KnownLayout + Immutable + Unaligned,
    {
        let (value, rest) = T::ref_from_prefix(self.rest()).map_err(|_| Error::EndOfSlice)?;
        self.i = self.r.len() - rest.len();
        Ok(value)
    }

    /// Take a zero-terminated byte string, excluding the terminator.
    pub(super) fn take_cstr(&mut self) -> Result<&'a [u8], Error> {
        let rest = self.rest();
        let end = memchr::memchr(0, rest).ok_or(Error::UnterminatedCString)?;
        self.i += end + 1;
        Ok(&rest[..end])
    }

    /// Take a length-prefixed, zero-terminated string, excluding the
    /// terminator. The length counts the terminator.
    pub(super) fn take_string(&mut self) -> Result<&'a [u8], Error> {
        let len = i32::from_le_bytes(self.take()?);
        let rest = self.rest();

        let len = usize::try_from(len)
            .ok()
            .filter(|&len| len >= 1 && len <= rest.len() && rest[len - 1] == 0)
            .ok_or(Error::InvalidStringSize)?;

        self.i += len;
        Ok(&rest[..len - 1])
    }

    /// Take the bytes of an embedded document, as sized by its own header.
    ///
    /// Only the header is checked here; the region is validated when parsed.
    pub(super) fn take_document(&mut self) -> Result<(&'a [u8], usize), Error> {
        let base = self.offset();
        let rest = self.rest();

        let size = rest
            .first_chunk::<4>()
            .map(|b| i32::from_le_bytes(*b))
            .and_then(|size| usize::try_from(size).ok())
            .filter(|&size| size <= rest.len())
            .ok_or(Error::InvalidDocumentSize)?;

        self.i += size;
        Ok((&rest[..size], base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_requires_terminator_inside_length() {
        let mut c = Cursor::new(b"\x03\x00\x00\x00ab\x00rest", 0);
        assert_eq!(c.take_string(), Ok(&b"ab"[..]));
        assert_eq!(c.offset(), 7);

        let mut c = Cursor::new(b"\x02\x00\x00\x00ab\x00", 0);
        assert_eq!(c.take_string(), Err(Error::InvalidStringSize));

        let mut c = Cursor::new(b"\x00\x00\x00\x00", 0);
        assert_eq!(c.take_string(), Err(Error::InvalidStringSize));

        let mut c = Cursor::new(b"\xff\xff\xff\xff\x00", 0);
        assert_eq!(c.take_string(), Err(Error::InvalidStringSize));
    }

    #[test]
    fn cstr_stops_at_first_zero() {
        let mut c = Cursor::new(b"abc\x00def\x00", 10);
        assert_eq!(c.take_cstr(), Ok(&b"abc"[..]));
        assert_eq!(c.take_cstr(), Ok(&b"def"[..]));
        assert!(c.is_empty());
        assert_eq!(c.offset(), 18);
        assert_eq!(c.take_cstr(), Err(Error::UnterminatedCString));
    }

    #[test]
    fn take_past_end() {
        let mut c = Cursor::new(&[1, 2, 3], 0);
        assert_eq!(c.take::<4>(), Err(Error::EndOfSlice));
        assert_eq!(c.take::<3>(), Ok([1, 2, 3]));
    }
}
