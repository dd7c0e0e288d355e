//! Karatsuba multiplication.

use crate::common::buf::WordBuf;
use crate::common::util::add_carry;
use crate::defs::DoubleWord;
use crate::defs::Word;
use crate::defs::WORD_BASE;
use crate::magnitude::Magnitude;
use itertools::izip;

impl Magnitude {
    // s3 = s1 + s2; s3 must be one word longer than the longest of s1 and s2.
    fn add_slices(s1: &[Word], s2: &[Word], s3: &mut [Word]) {
        let mut c = 0;

        let (mut iter1, mut iter2) = if s1.len() > s2.len() {
            (s1.iter(), s2.iter())
        } else {
            (s2.iter(), s1.iter())
        };
        let mut iter3 = s3.iter_mut();

        for (a, b, x) in izip!(iter2.by_ref(), iter1.by_ref(), iter3.by_ref()) {
            c = add_carry(*a, *b, c, x);
        }

        for (a, x) in iter1.zip(iter3.by_ref()) {
            c = add_carry(*a, 0, c, x);
        }

        *iter3.next().unwrap() = c; // s3 is longer than s1 and s2 to hold the carry.
    }

    // s3 -= s1 + s2; the result is known to be non-negative.
    fn paired_sub(s1: &[Word], s2: &[Word], s3: &mut [Word]) {
        let mut c = 0;
        let mut iter3 = s3.iter_mut();

        let (mut iter1, iter2) = if s1.len() > s2.len() {
            (s1.iter(), s2.iter())
        } else {
            (s2.iter(), s1.iter())
        };

        for (a, b, x) in izip!(iter2, iter1.by_ref(), iter3.by_ref()) {
            let v = *x as DoubleWord;
            let s = *a as DoubleWord + *b as DoubleWord + c;

            if v >= s {
                *x = (v - s) as Word;
                c = 0;
            } else if v + WORD_BASE >= s {
                *x = (v + WORD_BASE - s) as Word;
                c = 1;
            } else {
                *x = (v + WORD_BASE * 2 - s) as Word;
                c = 2;
            }
        }

        for (a, x) in iter1.zip(iter3.by_ref()) {
            let v = *x as DoubleWord;
            let s = *a as DoubleWord + c;

            if v >= s {
                *x = (v - s) as Word;
                c = 0;
            } else if v + WORD_BASE >= s {
                *x = (v + WORD_BASE - s) as Word;
                c = 1;
            } else {
                *x = (v + WORD_BASE * 2 - s) as Word;
                c = 2;
            }
        }

        if c > 0 {
            for x in iter3 {
                let v = *x as DoubleWord;
                let s = c;

                if v >= s {
                    *x = (v - s) as Word;
                    c = 0;
                } else if v + WORD_BASE >= s {
                    *x = (v + WORD_BASE - s) as Word;
                    c = 1;
                } else {
                    *x = (v + WORD_BASE * 2 - s) as Word;
                    c = 2;
                }
            }
        }
    }

    // s1 += s2; s1 must not be shorter than s2.
    pub(super) fn add_assign_slices(s1: &mut [Word], s2: &[Word]) {
        debug_assert!(s1.len() >= s2.len());

        let mut c = 0;

        let mut s1iter = s1.iter_mut();
        for (a, b) in s2.iter().zip(s1iter.by_ref()) {
            c = add_carry(*a, *b, c, b);
        }

        if c > 0 {
            for b in s1iter {
                c = add_carry(0, *b, c, b);
            }
        }
    }

    // prereq: m1 and m2 are longer than 2 words, m3 has the length of m1 and m2 combined
    pub(super) fn toom2(m1: &[Word], m2: &[Word], m3: &mut [Word]) {
        let n = (m1.len().min(m2.len()) + 1) >> 1;
        let n2 = n << 1;

        let (m11, m12) = m1.split_at(n);
        let (m21, m22) = m2.split_at(n);
        let (m31, m32) = m3.split_at_mut(n2);

        let x1l = m11.len().max(m12.len()) + 1;
        let x2l = m21.len().max(m22.len()) + 1;
        let buf_sz = (x1l + x2l) * 2;

        let mut buf_holder1;
        let mut buf_holder2;
        let buf = if buf_sz <= 256 {
            buf_holder2 = [0; 256];
            &mut buf_holder2[..buf_sz]
        } else {
            buf_holder1 = WordBuf::new(buf_sz);
            &mut buf_holder1[..]
        };

        let (x1, rest) = buf.split_at_mut(x1l);
        let (x2, rest) = rest.split_at_mut(x2l);
        let z2buf = rest;

        Self::add_slices(m11, m12, x1);
        Self::add_slices(m21, m22, x2);

        Self::mul_unbalanced(x1, x2, z2buf);
        Self::mul_unbalanced(m11, m21, m31);
        Self::mul_unbalanced(m12, m22, m32);

        Self::paired_sub(m31, m32, z2buf);
        Self::add_assign_slices(&mut m3[n..], z2buf);
    }
}
