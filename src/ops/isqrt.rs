//! Integer square root.

use crate::defs::Error;
use crate::defs::Sign;
use crate::magnitude::Magnitude;
use crate::num::BigInt;
use crate::value::checked_nonnegative;
use crate::value::Value;

/// Computes the integer square root of `n`, i.e. the largest integer `x`
/// such that `x`*`x` does not exceed `n`.
///
/// ## Errors
///
///  - NegativeValue: `n` is negative.
///  - NotIntegral: `n` is not an exact integer.
///
/// ## Examples
///
/// ```
/// let x = astro_int::isqrt(99u8).unwrap();
///
/// assert_eq!(x, astro_int::BigInt::from(9u8));
/// ```
pub fn isqrt<T: Into<Value>>(n: T) -> Result<BigInt, Error> {
    let n = checked_nonnegative(n.into())?;

    Ok(BigInt::from_magnitude(
        Sign::Pos,
        isqrt_magnitude(n.magnitude()),
    ))
}

// Newton iteration x' = (x + n/x) / 2 with exact division.
// The initial estimate is above the square root of n, and the candidates decrease
// until the iteration stops improving.
fn isqrt_magnitude(n: &Magnitude) -> Magnitude {
    if n.is_zero() {
        return Magnitude::new();
    }

    let mut x = Magnitude::power_of_two((n.bit_len() + 1) / 2);

    loop {
        let (q, _) = n.div_rem(&x);
        let y = x.add(&q).shift_right(1);

        if y.cmp(&x) >= 0 {
            break;
        }

        x = y;
    }

    if x.mul(&x).cmp(n) > 0 {
        x = x.sub_word(1);
    }

    x
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::Word;
    use rand::random;

    #[test]
    fn test_isqrt_small() {
        assert_eq!(isqrt(0).unwrap(), BigInt::new());
        assert_eq!(isqrt(1).unwrap(), BigInt::from(1u8));
        assert_eq!(isqrt(2).unwrap(), BigInt::from(1u8));
        assert_eq!(isqrt(3).unwrap(), BigInt::from(1u8));
        assert_eq!(isqrt(4).unwrap(), BigInt::from(2u8));
        assert_eq!(isqrt(99).unwrap(), BigInt::from(9u8));
        assert_eq!(isqrt(100).unwrap(), BigInt::from(10u8));

        // every value in a dense range is bracketed exactly
        let mut expected: u64 = 0;
        for n in 0u64..10000 {
            if (expected + 1) * (expected + 1) <= n {
                expected += 1;
            }
            assert_eq!(isqrt(n).unwrap(), BigInt::from(expected), "isqrt({})", n);
        }
    }

    #[test]
    fn test_isqrt_perfect_squares() {
        for _ in 0..100 {
            let mut x = BigInt::from(random::<u128>());
            for _ in 0..random::<usize>() % 3 {
                x = x.mul(&BigInt::from(random::<u128>()));
            }

            let sq = x.mul(&x);

            assert_eq!(isqrt(&sq).unwrap(), x);

            if !x.is_zero() {
                // one below a perfect square the root decreases by one
                let below = sq.sub(&BigInt::from(1u8));
                assert_eq!(isqrt(&below).unwrap(), x.sub(&BigInt::from(1u8)));
            }
        }
    }

    #[test]
    fn test_isqrt_bracketing() {
        for _ in 0..100 {
            let mut n = BigInt::from(random::<u128>());
            for _ in 0..random::<usize>() % 4 {
                n = n.mul(&BigInt::from(random::<u128>())).add(&BigInt::from(random::<u64>()));
            }

            let x = isqrt(&n).unwrap();
            let x1 = x.add(&BigInt::from(1u8));

            assert!(x.mul(&x) <= n);
            assert!(x1.mul(&x1) > n);
        }
    }

    #[test]
    fn test_isqrt_word_boundary() {
        // values around the word boundary
        let v = BigInt::from(Word::MAX);
        let sq = v.mul(&v);

        assert_eq!(isqrt(&sq).unwrap(), v);
        assert_eq!(isqrt(&sq.sub(&BigInt::from(1u8))).unwrap(), v.sub(&BigInt::from(1u8)));
        assert_eq!(isqrt(&sq.add(&BigInt::from(1u8))).unwrap(), v);
    }

    #[test]
    fn test_isqrt_errors() {
        assert_eq!(isqrt(-9), Err(Error::NegativeValue));
        assert_eq!(isqrt(-1i128), Err(Error::NegativeValue));
        assert_eq!(isqrt(8.9), Err(Error::NotIntegral));
        assert_eq!(isqrt(-8.9), Err(Error::NotIntegral));
    }
}
