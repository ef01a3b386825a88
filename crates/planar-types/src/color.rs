use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A 24-bit display color, `0xRRGGBB`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(u32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x000000);

    /// Create a color from a packed `0xRRGGBB` value. Bits above 24 are dropped.
    pub const fn new(packed: u32) -> Self {
        Self(packed & 0xff_ffff)
    }

    /// A pseudo-random color drawn from `rng`.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::new(rng.gen::<u32>())
    }

    /// Parse a hexadecimal `RRGGBB` string, with or without a leading `#`.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.is_empty() || digits.len() > 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TypeError::InvalidColor(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::new)
            .map_err(|_| TypeError::InvalidColor(s.to_string()))
    }

    pub fn r(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn g(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn b(&self) -> u8 {
        self.0 as u8
    }
}

impl FromStr for Rgb {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({self})")
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parse_six_digits() {
        let c = Rgb::from_hex("ff8000").unwrap();
        assert_eq!((c.r(), c.g(), c.b()), (0xff, 0x80, 0x00));
    }

    #[test]
    fn parse_with_hash_prefix() {
        assert_eq!(Rgb::from_hex("#00ff00").unwrap(), Rgb::new(0x00ff00));
    }

    #[test]
    fn short_values_are_zero_extended() {
        assert_eq!(Rgb::from_hex("ff").unwrap().0, 0x0000ff);
    }

    #[test]
    fn invalid_colors_are_rejected() {
        for bad in ["", "#", "xyz", "1234567", "12 34"] {
            assert!(matches!(Rgb::from_hex(bad), Err(TypeError::InvalidColor(_))), "{bad}");
        }
    }

    #[test]
    fn random_colors_fit_in_24_bits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            assert!(Rgb::random(&mut rng).0 <= 0xff_ffff);
        }
    }

    #[test]
    fn seeded_random_is_deterministic() {
        let a = Rgb::random(&mut StdRng::seed_from_u64(42));
        let b = Rgb::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Rgb::new(0xABCDEF).to_string(), "#abcdef");
        assert_eq!(Rgb::BLACK.to_string(), "#000000");
    }
}
