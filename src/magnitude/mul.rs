//! Multiplication algos.

use crate::common::buf::WordBuf;
use crate::defs::DoubleWord;
use crate::defs::Word;
use crate::defs::WORD_BIT_SIZE;
use crate::magnitude::Magnitude;

// Operands of this length in words and above are multiplied with Karatsuba.
const TOOM2_LEN_THRESHOLD: usize = 32;

impl Magnitude {
    /// Computes `self` * `m2`.
    pub fn mul(&self, m2: &Self) -> Self {
        if self.is_zero() || m2.is_zero() {
            return Self::new();
        }

        let mut buf = WordBuf::new(self.len() + m2.len());
        Self::mul_unbalanced(self.digits(), m2.digits(), &mut buf);
        Self::from_word_buf(buf)
    }

    // school multiplication; prereq: m3 has the length of m1 and m2 combined
    pub(super) fn mul_basic(m1: &[Word], m2: &[Word], m3: &mut [Word]) {
        m3.fill(0);

        for (i, d1mi) in m1.iter().enumerate() {
            let d1mi = *d1mi as DoubleWord;
            if d1mi == 0 {
                continue;
            }

            let mut k = 0;
            for (m2j, m3ij) in m2.iter().zip(m3[i..].iter_mut()) {
                let m = d1mi * (*m2j as DoubleWord) + *m3ij as DoubleWord + k;
                *m3ij = m as Word;
                k = m >> WORD_BIT_SIZE;
            }

            m3[i + m2.len()] += k as Word;
        }
    }

    // prereq: m1 is not longer than m2, m3 has the length of m1 and m2 combined
    fn mul_slices(m1: &[Word], m2: &[Word], m3: &mut [Word]) {
        debug_assert!(m1.len() <= m2.len());

        if m1.len() < TOOM2_LEN_THRESHOLD {
            Self::mul_basic(m1, m2, m3);
        } else {
            Self::toom2(m1, m2, m3);
        }
    }

    // general case multiplication
    pub(super) fn mul_unbalanced(m1: &[Word], m2: &[Word], m3: &mut [Word]) {
        let (sm, lg) = if m1.len() < m2.len() { (m1, m2) } else { (m2, m1) };

        if lg.len() >= sm.len() * 2 && sm.len() >= TOOM2_LEN_THRESHOLD {
            // balancing: the longer operand is processed in chunks comparable to the shorter one

            m3.fill(0);

            let mut buf = WordBuf::new(sm.len() * 2);
            let mut lb = 0;

            while lb < lg.len() {
                let ub = if lb + sm.len() <= lg.len() { lb + sm.len() } else { lg.len() };

                Self::mul_slices(&lg[lb..ub], sm, &mut buf[..ub - lb + sm.len()]);

                Self::add_assign_slices(&mut m3[lb..], &buf[..ub - lb + sm.len()]);

                lb = ub;
            }
        } else {
            Self::mul_slices(sm, lg, m3);
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::random;

    #[cfg(not(feature = "std"))]
    use alloc::vec::Vec;

    fn random_slice(min_len: usize, max_len: usize) -> Vec<Word> {
        let mut s1 = Vec::new();
        let l = if max_len > min_len {
            random::<usize>() % (max_len - min_len) + min_len
        } else {
            min_len
        };
        for _ in 0..l {
            s1.push(random());
        }
        s1
    }

    #[test]
    fn test_mul_unbalanced() {
        // chunked multiplication of unbalanced operands agrees with the plain algorithm
        for _ in 0..20 {
            let sz1 = random::<usize>() % 40 + TOOM2_LEN_THRESHOLD;
            let sz2 = sz1 * (random::<usize>() % 4 + 2) + random::<usize>() % sz1;

            let f = random_slice(sz1, sz1);
            let v = random_slice(sz2, sz2);

            let mut ret1 = WordBuf::new(sz1 + sz2);
            let mut ret2 = WordBuf::new(sz1 + sz2);

            Magnitude::mul_unbalanced(&f, &v, &mut ret1);
            Magnitude::mul_basic(&f, &v, &mut ret2);

            assert!(ret1[..] == ret2[..]);
        }
    }

    #[test]
    fn test_mul() {
        // zero operand
        let a = Magnitude::from_words(&random_slice(1, 10));
        assert!(a.mul(&Magnitude::new()).is_zero());
        assert!(Magnitude::new().mul(&a).is_zero());

        // identity
        assert_eq!(a.mul(&Magnitude::from_word(1)), a);

        // small values
        let a = Magnitude::from_word(3);
        let b = Magnitude::from_word(7);
        assert_eq!(a.mul(&b).digits(), &[21]);

        // (a + b)*c = a*c + b*c
        for _ in 0..100 {
            let a = Magnitude::from_words(&random_slice(0, 50));
            let b = Magnitude::from_words(&random_slice(0, 50));
            let c = Magnitude::from_words(&random_slice(0, 50));

            let lhs = a.add(&b).mul(&c);
            let rhs = a.mul(&c).add(&b.mul(&c));

            assert_eq!(lhs, rhs);
        }

        // commutativity on large operands
        for _ in 0..10 {
            let a = Magnitude::from_words(&random_slice(100, 300));
            let b = Magnitude::from_words(&random_slice(100, 300));

            assert_eq!(a.mul(&b), b.mul(&a));
        }
    }
}
