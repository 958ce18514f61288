//! Fixed-width bit strings
//!
//! A [`BitString`] is the unit every conversion works on: an ordered run of
//! `'0'`/`'1'` characters whose length is its width. Parsing is the only
//! place input is validated; once a `BitString` exists every decode over it
//! is infallible.

use crate::error::{ReprError, Result};
use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Validated, non-empty string of binary digits (MSB first)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitString(String);

impl BitString {
    /// Parse a bit string, rejecting empty input and non-binary characters
    ///
    /// # Example
    /// ```
    /// use signrep_core::{BitString, ReprError};
    ///
    /// let bits = BitString::parse("1101")?;
    /// assert_eq!(bits.width(), 4);
    /// assert!(matches!(
    ///     BitString::parse("102"),
    ///     Err(ReprError::InvalidDigit { digit: '2', position: 2 })
    /// ));
    /// # Ok::<(), ReprError>(())
    /// ```
    pub fn parse(bits: &str) -> Result<Self> {
        if bits.is_empty() {
            return Err(ReprError::EmptyInput);
        }

        if let Some((position, digit)) = bits
            .chars()
            .enumerate()
            .find(|(_, c)| !matches!(c, '0' | '1'))
        {
            return Err(ReprError::invalid_digit(digit, position));
        }

        Ok(Self(bits.to_string()))
    }

    /// `width` copies of one digit
    pub fn repeat(bit: bool, width: usize) -> Result<Self> {
        if width == 0 {
            return Err(ReprError::InvalidWidth(width));
        }
        let digit = if bit { "1" } else { "0" };
        Ok(Self(digit.repeat(width)))
    }

    /// Zero-padded unsigned encoding of `magnitude`
    ///
    /// Callers must have checked `magnitude < 2^width`.
    pub(crate) fn from_magnitude(magnitude: &BigUint, width: usize) -> Self {
        Self(format!("{:0width$b}", magnitude, width = width))
    }

    /// Number of bits
    pub fn width(&self) -> usize {
        self.0.len()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the most significant bit is set
    pub fn msb(&self) -> bool {
        self.0.starts_with('1')
    }

    /// Everything after the sign bit (empty for a 1-bit string)
    pub fn magnitude_bits(&self) -> &str {
        &self.0[1..]
    }

    /// One's complement: every bit flipped
    pub fn invert(&self) -> Self {
        Self(
            self.0
                .chars()
                .map(|c| if c == '1' { '0' } else { '1' })
                .collect(),
        )
    }

    /// Add one with ripple carry from the LSB, modulo 2^width
    pub fn increment(&self) -> Self {
        let mut bits: Vec<char> = self.0.chars().collect();
        for bit in bits.iter_mut().rev() {
            if *bit == '0' {
                *bit = '1';
                break;
            }
            // 1 + 1 = 0, carry moves left; a carry out of the MSB is dropped
            *bit = '0';
        }
        Self(bits.into_iter().collect())
    }

    /// Same bits with the MSB forced to `1`
    pub fn with_sign_bit(&self) -> Self {
        Self(format!("1{}", self.magnitude_bits()))
    }
}

/// Base-2 magnitude of a run of binary digits; the empty run is zero
pub(crate) fn unsigned_of(bits: &str) -> BigUint {
    bits.bytes().fold(BigUint::zero(), |acc, b| {
        (acc << 1u32) + u32::from(b == b'1')
    })
}

impl FromStr for BitString {
    type Err = ReprError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for BitString {
    type Error = ReprError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for BitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl Serialize for BitString {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    fn bits(s: &str) -> BitString {
        BitString::parse(s).unwrap()
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(BitString::parse(""), Err(ReprError::EmptyInput));
    }

    #[test]
    fn test_parse_reports_first_bad_digit() {
        assert_eq!(
            BitString::parse("10x1y"),
            Err(ReprError::invalid_digit('x', 2))
        );
        assert_eq!(
            BitString::parse(" 101"),
            Err(ReprError::invalid_digit(' ', 0))
        );
    }

    #[test]
    fn test_width_is_length() {
        assert_eq!(bits("1").width(), 1);
        assert_eq!(bits("00010111").width(), 8);
    }

    #[test]
    fn test_invert() {
        assert_eq!(bits("0101").invert(), bits("1010"));
        assert_eq!(bits("0000").invert(), bits("1111"));
    }

    #[test]
    fn test_increment_ripple_carry() {
        assert_eq!(bits("1010").increment(), bits("1011"));
        assert_eq!(bits("0111").increment(), bits("1000"));
        assert_eq!(bits("11101000").increment(), bits("11101001"));
    }

    #[test]
    fn test_increment_discards_carry_out() {
        assert_eq!(bits("1111").increment(), bits("0000"));
        assert_eq!(bits("1").increment(), bits("0"));
    }

    #[test]
    fn test_with_sign_bit() {
        assert_eq!(bits("0101").with_sign_bit(), bits("1101"));
        assert_eq!(bits("1101").with_sign_bit(), bits("1101"));
        assert_eq!(bits("0").with_sign_bit(), bits("1"));
    }

    #[test]
    fn test_from_magnitude_pads() {
        assert_eq!(BitString::from_magnitude(&BigUint::from(5u32), 4), bits("0101"));
        assert_eq!(
            BitString::from_magnitude(&BigUint::from(23u32), 8),
            bits("00010111")
        );
        assert_eq!(BitString::from_magnitude(&BigUint::zero(), 3), bits("000"));
    }

    #[test]
    fn test_repeat() {
        assert_eq!(BitString::repeat(true, 3).unwrap(), bits("111"));
        assert_eq!(BitString::repeat(false, 0), Err(ReprError::InvalidWidth(0)));
    }

    #[test]
    fn test_unsigned_of() {
        assert_eq!(unsigned_of(""), BigUint::zero());
        assert_eq!(unsigned_of("1101"), BigUint::from(13u32));
        assert_eq!(unsigned_of("0000000011111111"), BigUint::from(255u32));
    }

    #[test]
    fn test_display_honors_padding() {
        assert_eq!(format!("{:>6}|", bits("101")), "   101|");
        assert_eq!(bits("1000").to_string(), "1000");
    }

    #[test]
    fn test_serialize_as_string() {
        assert_eq!(serde_json::to_string(&bits("0110")).unwrap(), "\"0110\"");
    }
}
