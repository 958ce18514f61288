//! Interpretation rules for a bit string

use crate::bits::BitString;
use crate::error::{ReprError, Result};
use crate::serde_helpers::serialize_bigint;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the bits of a [`BitString`] are turned into a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignKind {
    /// Every bit is magnitude
    Unsigned,
    /// MSB is the sign, the remaining bits are magnitude
    SignedMagnitude,
    /// MSB carries weight `-2^(width-1)`
    #[serde(rename = "twos-complement")]
    SignedTwosComplement,
}

impl SignKind {
    pub const ALL: [SignKind; 3] = [
        SignKind::Unsigned,
        SignKind::SignedMagnitude,
        SignKind::SignedTwosComplement,
    ];

    /// Short column header used in tables
    pub fn label(self) -> &'static str {
        match self {
            SignKind::Unsigned => "Unsigned",
            SignKind::SignedMagnitude => "Signed Mag",
            SignKind::SignedTwosComplement => "Two's Comp",
        }
    }

    /// Smallest and largest value representable in `width` bits
    ///
    /// | Kind | Range |
    /// |------|-------|
    /// | unsigned | `0 ..= 2^w - 1` |
    /// | signed magnitude | `-(2^(w-1) - 1) ..= 2^(w-1) - 1` |
    /// | two's complement | `-2^(w-1) ..= 2^(w-1) - 1` |
    pub fn range(self, width: usize) -> Result<ValueRange> {
        if width == 0 {
            return Err(ReprError::InvalidWidth(width));
        }

        let half = pow2(width - 1);
        let range = match self {
            SignKind::Unsigned => ValueRange {
                min: BigInt::zero(),
                max: pow2(width) - 1u32,
            },
            SignKind::SignedMagnitude => ValueRange {
                min: -(&half - 1u32),
                max: half - 1u32,
            },
            SignKind::SignedTwosComplement => ValueRange {
                min: -&half,
                max: half - 1u32,
            },
        };
        Ok(range)
    }

    /// Every `width`-bit pattern that decodes to zero
    ///
    /// Signed magnitude has two (`+0` and `-0`); the others have one.
    pub fn zero_patterns(self, width: usize) -> Result<Vec<BitString>> {
        let zero = BitString::repeat(false, width)?;
        match self {
            SignKind::SignedMagnitude => {
                let negative_zero = zero.with_sign_bit();
                Ok(vec![zero, negative_zero])
            },
            SignKind::Unsigned | SignKind::SignedTwosComplement => Ok(vec![zero]),
        }
    }
}

impl fmt::Display for SignKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignKind::Unsigned => "unsigned",
            SignKind::SignedMagnitude => "signed magnitude",
            SignKind::SignedTwosComplement => "two's complement",
        };
        f.pad(name)
    }
}

impl FromStr for SignKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "unsigned" | "u" => Ok(SignKind::Unsigned),
            "signed-magnitude" | "sign-magnitude" | "sm" => Ok(SignKind::SignedMagnitude),
            "twos-complement" | "twos" | "tc" => Ok(SignKind::SignedTwosComplement),
            other => Err(format!(
                "unknown sign kind '{}' (expected unsigned, signed-magnitude or twos-complement)",
                other
            )),
        }
    }
}

/// Inclusive range of representable values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueRange {
    #[serde(serialize_with = "serialize_bigint")]
    pub min: BigInt,
    #[serde(serialize_with = "serialize_bigint")]
    pub max: BigInt,
}

impl ValueRange {
    pub fn contains(&self, value: &BigInt) -> bool {
        &self.min <= value && value <= &self.max
    }
}

/// `2^exp` as an unbounded integer
pub(crate) fn pow2(exp: usize) -> BigInt {
    BigInt::one() << exp
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    fn range(kind: SignKind, width: usize) -> (i64, i64) {
        let r = kind.range(width).unwrap();
        (
            i64::try_from(r.min).unwrap(),
            i64::try_from(r.max).unwrap(),
        )
    }

    #[test]
    fn test_four_bit_ranges() {
        assert_eq!(range(SignKind::Unsigned, 4), (0, 15));
        assert_eq!(range(SignKind::SignedMagnitude, 4), (-7, 7));
        assert_eq!(range(SignKind::SignedTwosComplement, 4), (-8, 7));
    }

    #[test]
    fn test_eight_bit_ranges() {
        assert_eq!(range(SignKind::Unsigned, 8), (0, 255));
        assert_eq!(range(SignKind::SignedMagnitude, 8), (-127, 127));
        assert_eq!(range(SignKind::SignedTwosComplement, 8), (-128, 127));
    }

    #[test]
    fn test_one_bit_ranges() {
        assert_eq!(range(SignKind::Unsigned, 1), (0, 1));
        assert_eq!(range(SignKind::SignedMagnitude, 1), (0, 0));
        assert_eq!(range(SignKind::SignedTwosComplement, 1), (-1, 0));
    }

    #[test]
    fn test_zero_width_rejected() {
        for kind in SignKind::ALL {
            assert_eq!(kind.range(0), Err(ReprError::InvalidWidth(0)));
        }
    }

    #[test]
    fn test_wide_range_exceeds_machine_integers() {
        let r = SignKind::SignedTwosComplement.range(200).unwrap();
        assert_eq!(r.max.bits(), 199);
        assert!(r.contains(&BigInt::from(i128::MIN)));
    }

    #[test]
    fn test_zero_patterns() {
        let sm: Vec<String> = SignKind::SignedMagnitude
            .zero_patterns(4)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(sm, vec!["0000", "1000"]);
        assert_eq!(
            SignKind::SignedTwosComplement.zero_patterns(4).unwrap().len(),
            1
        );
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("unsigned".parse::<SignKind>(), Ok(SignKind::Unsigned));
        assert_eq!("Signed_Magnitude".parse::<SignKind>(), Ok(SignKind::SignedMagnitude));
        assert_eq!("tc".parse::<SignKind>(), Ok(SignKind::SignedTwosComplement));
        assert!("ones-complement".parse::<SignKind>().is_err());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&SignKind::SignedTwosComplement).unwrap(),
            "\"twos-complement\""
        );
        assert_eq!(
            serde_json::to_string(&SignKind::SignedMagnitude).unwrap(),
            "\"signed-magnitude\""
        );
    }
}
