use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Number of name bytes that fit in an [`ObjectId`].
pub const NAME_BYTES: usize = 8;

/// Identifier of a user-visible object.
///
/// An `ObjectId` packs up to the first eight bytes of a short name into a
/// `u64`, first byte in the least significant position. Names that share
/// their first eight bytes map to the same id and cannot be told apart.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Pack a name into an id. Bytes past the eighth are ignored.
    pub fn from_name(name: &str) -> Self {
        let mut packed = [0u8; NAME_BYTES];
        for (slot, byte) in packed.iter_mut().zip(name.bytes()) {
            *slot = byte;
        }
        Self(u64::from_le_bytes(packed))
    }

    /// Recover the (possibly truncated) name this id was packed from.
    pub fn name(&self) -> String {
        let bytes = self.0.to_le_bytes();
        let len = bytes.iter().position(|b| *b == 0).unwrap_or(NAME_BYTES);
        String::from_utf8_lossy(&bytes[..len]).into_owned()
    }
}

impl FromStr for ObjectId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(TypeError::EmptyName);
        }
        Ok(Self::from_name(s))
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({:?})", self.name())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_byte_is_least_significant() {
        let id = ObjectId::from_name("ab");
        assert_eq!(id.0, u64::from(b'a') | u64::from(b'b') << 8);
    }

    #[test]
    fn name_roundtrip() {
        assert_eq!(ObjectId::from_name("P1").name(), "P1");
        assert_eq!(ObjectId::from_name("#001").name(), "#001");
    }

    #[test]
    fn long_names_are_truncated() {
        let id = ObjectId::from_name("circle_center");
        assert_eq!(id.name(), "circle_c");
    }

    #[test]
    fn names_sharing_eight_bytes_collide() {
        assert_eq!(
            ObjectId::from_name("segment_a"),
            ObjectId::from_name("segment_b")
        );
    }

    #[test]
    fn empty_name_is_null() {
        assert_eq!(ObjectId::from_name("").0, 0);
        assert_eq!("".parse::<ObjectId>(), Err(TypeError::EmptyName));
    }

    #[test]
    fn display_shows_name() {
        assert_eq!(ObjectId::from_name("mid").to_string(), "mid");
        assert_eq!(format!("{:?}", ObjectId::from_name("mid")), "ObjectId(\"mid\")");
    }

    #[test]
    fn serde_is_transparent() {
        let id = ObjectId::from_name("A");
        assert_eq!(serde_json::to_string(&id).unwrap(), "65");
    }

    proptest! {
        #[test]
        fn short_ascii_names_survive_packing(name in "[A-Za-z0-9#_]{1,8}") {
            prop_assert_eq!(ObjectId::from_name(&name).name(), name);
        }

        #[test]
        fn only_first_eight_bytes_matter(prefix in "[a-z]{8}", a in "[a-z]{0,6}", b in "[a-z]{0,6}") {
            let left = format!("{prefix}{a}");
            let right = format!("{prefix}{b}");
            prop_assert_eq!(ObjectId::from_name(&left), ObjectId::from_name(&right));
        }
    }
}
