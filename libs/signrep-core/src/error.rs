//! Error types for signrep-core

use crate::kind::SignKind;
use num_bigint::BigInt;
use thiserror::Error;

/// Conversion errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReprError {
    #[error("Invalid binary digit '{digit}' at position {position}")]
    InvalidDigit { digit: char, position: usize },

    #[error("Empty bit string")]
    EmptyInput,

    #[error("Value {value} does not fit in {width} bits as {kind}")]
    OutOfRange {
        value: BigInt,
        width: usize,
        kind: SignKind,
    },

    #[error("Invalid bit width: {0}")]
    InvalidWidth(usize),
}

impl ReprError {
    pub fn invalid_digit(digit: char, position: usize) -> Self {
        Self::InvalidDigit { digit, position }
    }

    pub fn out_of_range(value: impl Into<BigInt>, width: usize, kind: SignKind) -> Self {
        Self::OutOfRange {
            value: value.into(),
            width,
            kind,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReprError>;
