//! Integer → bit string
//!
//! Negative values start from the zero-padded magnitude. Signed magnitude sets
//! the MSB; two's complement inverts every bit and adds one with ripple carry.
//! Values that do not fit the requested width are rejected.

use crate::bits::BitString;
use crate::error::{ReprError, Result};
use crate::kind::SignKind;
use crate::serde_helpers::serialize_bigint;
use num_bigint::BigInt;
use num_traits::Signed;
use serde::Serialize;
use tracing::debug;

/// Both signed encodings of one value at one width
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedEncodings {
    #[serde(serialize_with = "serialize_bigint")]
    pub value: BigInt,
    pub width: usize,
    /// `None` only for `-2^(width-1)`, which signed magnitude cannot hold
    pub signed_magnitude: Option<BitString>,
    pub twos_complement: BitString,
}

/// Worked two's complement derivation: magnitude, flipped, plus one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwosComplementSteps {
    #[serde(serialize_with = "serialize_bigint")]
    pub value: BigInt,
    pub positive: BitString,
    pub ones_complement: BitString,
    pub result: BitString,
}

fn check_range(value: &BigInt, width: usize, kind: SignKind) -> Result<()> {
    if kind.range(width)?.contains(value) {
        return Ok(());
    }
    debug!(%value, width, %kind, "value out of range");
    Err(ReprError::out_of_range(value.clone(), width, kind))
}

/// Zero-padded unsigned encoding
///
/// # Errors
/// `OutOfRange` when `value < 0` or `value >= 2^width`; `InvalidWidth` for 0.
pub fn encode_unsigned(value: impl Into<BigInt>, width: usize) -> Result<BitString> {
    let value = value.into();
    check_range(&value, width, SignKind::Unsigned)?;
    Ok(BitString::from_magnitude(value.magnitude(), width))
}

/// Encode `value` in `width` bits as signed magnitude and two's complement
///
/// # Errors
/// `OutOfRange` unless `-2^(width-1) <= value <= 2^(width-1) - 1`.
///
/// # Example
/// ```
/// use signrep_core::encode_signed_representations;
///
/// let enc = encode_signed_representations(-5, 4)?;
/// assert_eq!(enc.signed_magnitude.unwrap().as_str(), "1101");
/// assert_eq!(enc.twos_complement.as_str(), "1011");
/// # Ok::<(), signrep_core::ReprError>(())
/// ```
pub fn encode_signed_representations(
    value: impl Into<BigInt>,
    width: usize,
) -> Result<SignedEncodings> {
    let value = value.into();
    check_range(&value, width, SignKind::SignedTwosComplement)?;

    let magnitude = BitString::from_magnitude(value.magnitude(), width);

    if !value.is_negative() {
        return Ok(SignedEncodings {
            value,
            width,
            signed_magnitude: Some(magnitude.clone()),
            twos_complement: magnitude,
        });
    }

    let signed_magnitude = SignKind::SignedMagnitude
        .range(width)?
        .contains(&value)
        .then(|| magnitude.with_sign_bit());
    let twos_complement = magnitude.invert().increment();

    debug!(
        %value,
        width,
        twos = %twos_complement,
        "encoded negative value"
    );

    Ok(SignedEncodings {
        value,
        width,
        signed_magnitude,
        twos_complement,
    })
}

/// Intermediate strings of the invert-and-add-one derivation
///
/// Only negative values go through the derivation; `Ok(None)` for `value >= 0`.
pub fn twos_complement_steps(
    value: impl Into<BigInt>,
    width: usize,
) -> Result<Option<TwosComplementSteps>> {
    let value = value.into();
    check_range(&value, width, SignKind::SignedTwosComplement)?;
    if !value.is_negative() {
        return Ok(None);
    }

    let positive = BitString::from_magnitude(value.magnitude(), width);
    let ones_complement = positive.invert();
    let result = ones_complement.increment();
    Ok(Some(TwosComplementSteps {
        value,
        positive,
        ones_complement,
        result,
    }))
}
