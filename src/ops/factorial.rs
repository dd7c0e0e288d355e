//! Factorial.

use crate::common::consts::ONE;
use crate::defs::Error;
use crate::defs::Sign;
use crate::defs::Word;
use crate::magnitude::Magnitude;
use crate::num::BigInt;
use crate::value::checked_nonnegative;
use crate::value::Value;

// Factorials that fit in 64 bits.
static SMALL_FACTORIALS: [u64; 21] = [
    1,
    1,
    2,
    6,
    24,
    120,
    720,
    5040,
    40320,
    362880,
    3628800,
    39916800,
    479001600,
    6227020800,
    87178291200,
    1307674368000,
    20922789888000,
    355687428096000,
    6402373705728000,
    121645100408832000,
    2432902008176640000,
];

// Ranges of this length and below are multiplied out sequentially.
const PROD_SEQ_THRESHOLD: Word = 8;

/// Computes the factorial of `n`.
///
/// ## Errors
///
///  - NegativeValue: `n` is negative.
///  - NotIntegral: `n` is not an exact integer.
///  - Overflow: `n` does not fit in a machine word, so the result cannot be materialized.
///
/// ## Examples
///
/// ```
/// let f = astro_int::factorial(5).unwrap();
///
/// assert_eq!(f, astro_int::BigInt::from(120u8));
/// ```
pub fn factorial<T: Into<Value>>(n: T) -> Result<BigInt, Error> {
    let n = checked_nonnegative(n.into())?;
    let n = n.to_word().ok_or(Error::Overflow)?;

    if (n as usize) < SMALL_FACTORIALS.len() {
        return Ok(BigInt::from(SMALL_FACTORIALS[n as usize]));
    }

    Ok(BigInt::from_magnitude(Sign::Pos, prod_range(2, n)))
}

// Product of the integers lo..=hi computed as a balanced tree:
// the range is split in half and the products of the halves are multiplied together.
fn prod_range(lo: Word, hi: Word) -> Magnitude {
    if lo > hi {
        return ONE.clone();
    }

    if hi - lo < PROD_SEQ_THRESHOLD {
        let mut acc = Magnitude::from_word(lo);
        for f in lo + 1..=hi {
            acc = acc.mul_word(f);
        }
        acc
    } else {
        let mid = lo + (hi - lo) / 2;
        prod_range(lo, mid).mul(&prod_range(mid + 1, hi))
    }
}
