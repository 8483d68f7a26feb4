//! Validation of binary subtype bytes.

use core::fmt;

use thiserror::Error;

/// The subtype byte fell in the reserved range `9..=127`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Reserved binary subtype ({0}).")]
pub struct InvalidSubtype(pub u8);

/// A validated binary subtype.
///
/// Values `0..=8` are well-known; values `128..=255` are user-defined.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BinarySubtype(u8);

impl BinarySubtype {
    pub const GENERIC: Self = Self(0x00);
    pub const FUNCTION: Self = Self(0x01);
    /// Deprecated.
    pub const OLD_BINARY: Self = Self(0x02);
    /// Deprecated.
    pub const OLD_UUID: Self = Self(0x03);
    pub const UUID: Self = Self(0x04);
    pub const MD5: Self = Self(0x05);
    pub const ENCRYPTED_VALUE: Self = Self(0x06);
    pub const COMPRESSED_COLUMN: Self = Self(0x07);
    pub const SENSITIVE: Self = Self(0x08);

    /// Validate a subtype byte.
    pub fn new(raw: u8) -> Result<Self, InvalidSubtype> {
        match raw {
            0x00..=0x08 | 0x80..=0xFF => Ok(Self(raw)),
            _ => Err(InvalidSubtype(raw)),
        }
    }

    /// The raw subtype byte.
    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_user_defined(self) -> bool {
        self.0 >= 0x80
    }

    fn name(self) -> Option<&'static str> {
        Some(match self.0 {
            0x00 => "Generic",
            0x01 => "Function",
            0x02 => "OldBinary",
            0x03 => "OldUuid",
            0x04 => "Uuid",
            0x05 => "Md5",
            0x06 => "EncryptedValue",
            0x07 => "CompressedColumn",
            0x08 => "Sensitive",
            _ => return None,
        })
    }
}

impl TryFrom<u8> for BinarySubtype {
    type Error = InvalidSubtype;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl fmt::Debug for BinarySubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => f.debug_tuple("UserDefined").field(&self.0).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_known_and_user_defined() {
        for raw in 0..=u8::MAX {
            let subtype = BinarySubtype::new(raw);
            match raw {
                0..=8 => assert!(!subtype.unwrap().is_user_defined()),
                9..=127 => assert_eq!(subtype, Err(InvalidSubtype(raw))),
                _ => assert!(subtype.unwrap().is_user_defined()),
            }
        }
    }

    #[test]
    fn named_constants() {
        assert_eq!(BinarySubtype::new(4), Ok(BinarySubtype::UUID));
        assert_eq!(BinarySubtype::SENSITIVE.get(), 8);
        assert_eq!(alloc::format!("{:?}", BinarySubtype::MD5), "Md5");
        assert_eq!(
            alloc::format!("{:?}", BinarySubtype::new(200).unwrap()),
            "UserDefined(200)"
        );
    }
}
