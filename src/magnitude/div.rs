//! Division.

use crate::common::buf::WordBuf;
use crate::common::util::add_carry;
use crate::common::util::shift_slice_left;
use crate::common::util::shift_slice_right;
use crate::defs::DoubleWord;
use crate::defs::SignedWord;
use crate::defs::Word;
use crate::defs::WORD_BASE;
use crate::defs::WORD_BIT_SIZE;
use crate::magnitude::Magnitude;

impl Magnitude {
    /// Computes `self` / `m2` and the remainder.
    /// The caller must ensure `m2` is not zero.
    pub fn div_rem(&self, m2: &Self) -> (Self, Self) {
        debug_assert!(!m2.is_zero());

        if self.cmp(m2) < 0 {
            return (Self::new(), self.clone());
        }

        if m2.len() == 1 {
            let (q, r) = self.div_rem_word(m2.digits()[0]);
            return (q, Self::from_word(r));
        }

        let (q, r) = Self::div_basic(self.digits(), m2.digits());

        (Self::from_word_buf(q), Self::from_word_buf(r))
    }

    // Basic integer division.
    // prereq: m2 is canonical and at least 2 words long, m1 is not shorter than m2.
    fn div_basic(m1: &[Word], m2: &[Word]) -> (WordBuf, WordBuf) {
        let n = m2.len();
        let m = m1.len() - n;

        // normalize: the most significant word of the divisor gets its highest bit set
        let s = m2[n - 1].leading_zeros() as usize;

        let mut vn = WordBuf::from_slice(m2);
        shift_slice_left(&mut vn, s);

        let mut un = WordBuf::new(m1.len() + 1);
        un[..m1.len()].copy_from_slice(m1);
        shift_slice_left(&mut un, s);

        let mut q = WordBuf::new(m + 1);

        let v1 = vn[n - 1] as DoubleWord;
        let v2 = vn[n - 2] as DoubleWord;

        for j in (0..=m).rev() {
            // estimate the quotient word
            let nh = ((un[j + n] as DoubleWord) << WORD_BIT_SIZE) | un[j + n - 1] as DoubleWord;
            let mut qh = nh / v1;
            let mut rh = nh % v1;

            while qh >= WORD_BASE
                || qh * v2 > ((rh << WORD_BIT_SIZE) | un[j + n - 2] as DoubleWord)
            {
                qh -= 1;
                rh += v1;
                if rh >= WORD_BASE {
                    break;
                }
            }

            // multiply and subtract
            let mut k: SignedWord = 0;
            for i in 0..n {
                let p = qh * vn[i] as DoubleWord;
                let t = un[i + j] as SignedWord - k - (p as Word) as SignedWord;
                un[i + j] = t as Word;
                k = (p >> WORD_BIT_SIZE) as SignedWord - (t >> WORD_BIT_SIZE);
            }
            let t = un[j + n] as SignedWord - k;
            un[j + n] = t as Word;

            q[j] = qh as Word;

            if t < 0 {
                // the estimate was too large by one
                q[j] -= 1;

                let mut c = 0;
                for i in 0..n {
                    let a = un[i + j];
                    c = add_carry(a, vn[i], c, &mut un[i + j]);
                }
                un[j + n] = un[j + n].wrapping_add(c);
            }
        }

        un.trunc_leading_zeroes();
        shift_slice_right(&mut un, s);

        (q, un)
    }
}
