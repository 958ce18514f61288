//! Bit string → integer
//!
//! The `decode_*` functions take raw text, validate it into a [`BitString`]
//! and apply one interpretation. [`compare_representations`] applies all
//! three to the same input.

use crate::bits::{unsigned_of, BitString};
use crate::error::Result;
use crate::kind::SignKind;
use crate::serde_helpers::serialize_bigint;
use num_bigint::BigInt;
use serde::Serialize;

impl BitString {
    /// All bits as magnitude
    pub fn to_unsigned(&self) -> BigInt {
        BigInt::from(unsigned_of(self.as_str()))
    }

    /// MSB as sign, remaining bits as magnitude
    ///
    /// `1000…0` is negative zero and comes back as plain `0`.
    pub fn to_signed_magnitude(&self) -> BigInt {
        let magnitude = BigInt::from(unsigned_of(self.magnitude_bits()));
        if self.msb() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Two's complement: a set MSB means `-(unsigned(!bits) + 1)`
    pub fn to_twos_complement(&self) -> BigInt {
        if !self.msb() {
            return self.to_unsigned();
        }
        -(self.invert().to_unsigned() + 1u32)
    }

    /// Decode under the given interpretation
    pub fn decode(&self, kind: SignKind) -> BigInt {
        match kind {
            SignKind::Unsigned => self.to_unsigned(),
            SignKind::SignedMagnitude => self.to_signed_magnitude(),
            SignKind::SignedTwosComplement => self.to_twos_complement(),
        }
    }
}

/// Interpret `bits` as an unsigned binary number
///
/// # Errors
/// `EmptyInput` for `""`, `InvalidDigit` for anything but `0`/`1`.
pub fn decode_unsigned(bits: &str) -> Result<BigInt> {
    Ok(BitString::parse(bits)?.to_unsigned())
}

/// Interpret `bits` as signed magnitude
pub fn decode_signed_magnitude(bits: &str) -> Result<BigInt> {
    Ok(BitString::parse(bits)?.to_signed_magnitude())
}

/// Interpret `bits` as two's complement
pub fn decode_twos_complement(bits: &str) -> Result<BigInt> {
    Ok(BitString::parse(bits)?.to_twos_complement())
}

/// Interpret `bits` under `kind`
pub fn decode(bits: &str, kind: SignKind) -> Result<BigInt> {
    Ok(BitString::parse(bits)?.decode(kind))
}

/// One bit pattern read three ways
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub binary: BitString,
    #[serde(serialize_with = "serialize_bigint")]
    pub unsigned: BigInt,
    #[serde(serialize_with = "serialize_bigint")]
    pub signed_magnitude: BigInt,
    #[serde(serialize_with = "serialize_bigint")]
    pub twos_complement: BigInt,
}

impl Comparison {
    /// Value in the column for `kind`
    pub fn value(&self, kind: SignKind) -> &BigInt {
        match kind {
            SignKind::Unsigned => &self.unsigned,
            SignKind::SignedMagnitude => &self.signed_magnitude,
            SignKind::SignedTwosComplement => &self.twos_complement,
        }
    }
}

/// Decode `bits` under every interpretation
pub fn compare_representations(bits: &str) -> Result<Comparison> {
    let binary = BitString::parse(bits)?;
    Ok(Comparison {
        unsigned: binary.to_unsigned(),
        signed_magnitude: binary.to_signed_magnitude(),
        twos_complement: binary.to_twos_complement(),
        binary,
    })
}
