//! Classification of raw argument values.

use crate::defs::Error;
use crate::num::BigInt;

/// A raw argument value as supplied by a caller: either an exact integer,
/// or a floating point number.
///
/// The math operations of this crate accept anything convertible into `Value`
/// and classify it before any arithmetic: a floating point argument is rejected
/// as [`Error::NotIntegral`](crate::Error::NotIntegral) regardless of whether it
/// has a fractional part, and a negative integer is rejected as
/// [`Error::NegativeValue`](crate::Error::NegativeValue).
#[derive(Debug, Clone)]
pub enum Value {
    /// An exact integer.
    Int(BigInt),

    /// A floating point number.
    Float(f64),
}

macro_rules! impl_value_from_int {
    ($t:ty) => {
        impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(BigInt::from(v))
            }
        }
    };
}

impl_value_from_int!(u8);
impl_value_from_int!(u16);
impl_value_from_int!(u32);
impl_value_from_int!(u64);
impl_value_from_int!(u128);
impl_value_from_int!(usize);
impl_value_from_int!(i8);
impl_value_from_int!(i16);
impl_value_from_int!(i32);
impl_value_from_int!(i64);
impl_value_from_int!(i128);
impl_value_from_int!(isize);

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Value::Int(v)
    }
}

impl From<&BigInt> for Value {
    fn from(v: &BigInt) -> Self {
        Value::Int(v.clone())
    }
}

// Classify a raw value, in order: the type check first, the domain check second.
pub(crate) fn checked_nonnegative(v: Value) -> Result<BigInt, Error> {
    match v {
        Value::Float(_) => Err(Error::NotIntegral),
        Value::Int(n) => {
            if n.is_negative() {
                Err(Error::NegativeValue)
            } else {
                Ok(n)
            }
        }
    }
}
