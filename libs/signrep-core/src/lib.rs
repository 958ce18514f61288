//! signrep-core - Three readings of a fixed-width bit string
//!
//! Converts between binary strings and integer values under three encodings,
//! in both directions.
//!
//! # Features
//!
//! - **Decoding**: unsigned, signed magnitude, two's complement
//! - **Encoding**: signed magnitude and two's complement at a given width
//! - **Comparison**: all three readings of one pattern side by side
//! - **Ranges**: representable values per encoding and width
//!
//! Values are [`BigInt`], so widths are not limited to machine integers.
//!
//! # Example
//!
//! ```rust
//! use signrep_core::{compare_representations, encode_signed_representations, BigInt};
//!
//! let c = compare_representations("1101")?;
//! assert_eq!(c.unsigned, BigInt::from(13));
//! assert_eq!(c.signed_magnitude, BigInt::from(-5));
//! assert_eq!(c.twos_complement, BigInt::from(-3));
//!
//! let enc = encode_signed_representations(-23, 8)?;
//! assert_eq!(enc.twos_complement.as_str(), "11101001");
//! # Ok::<(), signrep_core::ReprError>(())
//! ```
//!
//! # Encodings (4-bit)
//!
//! | Encoding | Range | Zero patterns |
//! |----------|-------|---------------|
//! | Unsigned | 0 to 15 | `0000` |
//! | Signed magnitude | -7 to +7 | `0000`, `1000` |
//! | Two's complement | -8 to +7 | `0000` |

pub mod bits;
pub mod decode;
pub mod encode;
pub mod error;
pub mod kind;
pub mod serde_helpers;
pub mod special;

// Re-exports for convenience
pub use bits::BitString;
pub use decode::{
    compare_representations, decode, decode_signed_magnitude, decode_twos_complement,
    decode_unsigned, Comparison,
};
pub use encode::{
    encode_signed_representations, encode_unsigned, twos_complement_steps, SignedEncodings,
    TwosComplementSteps,
};
pub use error::{ReprError, Result};
pub use kind::{SignKind, ValueRange};
pub use special::{special_patterns, SpecialPattern};

pub use num_bigint::BigInt;
