//! Serialization helpers for unbounded integers
//!
//! Values that fit in an `i64` are written as native numbers; wider ones fall
//! back to a decimal string so JSON consumers never lose precision.

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::Serializer;

/// Field serializer for `#[serde(serialize_with = "...")]`
pub fn serialize_bigint<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
    match value.to_i64() {
        Some(n) => serializer.serialize_i64(n),
        None => serializer.collect_str(value),
    }
}
