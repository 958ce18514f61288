//! Landmark bit patterns
//!
//! The four patterns that show where the signed interpretations diverge:
//! zero, the largest positive value, the pattern with only the MSB set, and
//! all ones.

use crate::bits::BitString;
use crate::error::{ReprError, Result};
use crate::serde_helpers::serialize_bigint;
use num_bigint::BigInt;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialPattern {
    pub bits: BitString,
    pub description: String,
    #[serde(serialize_with = "serialize_bigint")]
    pub signed_magnitude: BigInt,
    #[serde(serialize_with = "serialize_bigint")]
    pub twos_complement: BigInt,
}

impl SpecialPattern {
    fn new(bits: BitString, description: String) -> Self {
        Self {
            signed_magnitude: bits.to_signed_magnitude(),
            twos_complement: bits.to_twos_complement(),
            bits,
            description,
        }
    }
}

/// Landmark patterns for `width` bits (at least 2, so all four are distinct)
pub fn special_patterns(width: usize) -> Result<Vec<SpecialPattern>> {
    if width < 2 {
        return Err(ReprError::InvalidWidth(width));
    }

    let zero = BitString::repeat(false, width)?;
    let ones = BitString::repeat(true, width)?;
    let min = zero.with_sign_bit();
    let max = min.invert();

    let max_desc = format!("Maximum positive ({})", max.to_twos_complement());
    let min_desc = format!(
        "Minimum (signed mag: -0, twos: {})",
        min.to_twos_complement()
    );
    let ones_desc = format!(
        "Maximum negative ({} or {})",
        ones.to_signed_magnitude(),
        ones.to_twos_complement()
    );

    Ok(vec![
        SpecialPattern::new(zero, "Zero".to_string()),
        SpecialPattern::new(max, max_desc),
        SpecialPattern::new(min, min_desc),
        SpecialPattern::new(ones, ones_desc),
    ])
}
