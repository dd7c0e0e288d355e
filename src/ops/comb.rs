//! Binomial coefficient.

use crate::common::consts::ONE;
use crate::defs::Error;
use crate::defs::Sign;
use crate::num::BigInt;
use crate::value::checked_nonnegative;
use crate::value::Value;

/// Computes the number of ways to choose `k` items from `n` items without repetition
/// and without order.
///
/// Returns 0 when `k` is greater than `n`.
///
/// ## Errors
///
///  - NegativeValue: `n` or `k` is negative.
///  - NotIntegral: `n` or `k` is not an exact integer.
///  - Overflow: the smaller of `k` and `n` - `k` does not fit in a machine word,
///    so the result cannot be materialized.
///
/// ## Examples
///
/// ```
/// let c = astro_int::comb(5, 2).unwrap();
///
/// assert_eq!(c, astro_int::BigInt::from(10u8));
/// ```
pub fn comb<T: Into<Value>, U: Into<Value>>(n: T, k: U) -> Result<BigInt, Error> {
    let n = checked_nonnegative(n.into())?;
    let k = checked_nonnegative(k.into())?;

    if k > n {
        return Ok(BigInt::new());
    }

    // work over the smaller of k and n - k
    let nk = n.magnitude().sub(k.magnitude());
    let r = if k.magnitude().cmp(&nk) <= 0 {
        k.magnitude().clone()
    } else {
        nk
    };
    let r = r.to_word().ok_or(Error::Overflow)?;

    // multiply by n - i + 1 and divide by i; the accumulated value
    // is the binomial coefficient of n and i, so the division is always exact
    let mut acc = ONE.clone();
    let mut f = n.magnitude().clone();

    for i in 1..=r {
        acc = acc.mul(&f);

        let (q, rem) = acc.div_rem_word(i);
        debug_assert!(rem == 0);
        acc = q;

        f = f.sub_word(1);
    }

    Ok(BigInt::from_magnitude(Sign::Pos, acc))
}
