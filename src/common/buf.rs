//! Buffer for holding the words of a number.

use crate::defs::Word;
use core::ops::Deref;
use core::ops::DerefMut;
use core::ops::Index;
use core::ops::IndexMut;
use core::slice::SliceIndex;
use smallvec::SmallVec;

const STATIC_ALLOCATION: usize = 5;

/// Buffer for holding the words of a number.
/// Short buffers are kept inline and do not allocate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordBuf {
    inner: SmallVec<[Word; STATIC_ALLOCATION]>,
}

impl WordBuf {
    /// Returns a zero-filled buffer of length `sz`.
    #[inline]
    pub fn new(sz: usize) -> Self {
        WordBuf {
            inner: SmallVec::from_elem(0, sz),
        }
    }

    /// Returns a buffer with the contents of `s`.
    #[inline]
    pub fn from_slice(s: &[Word]) -> Self {
        WordBuf {
            inner: SmallVec::from_slice(s),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    // Remove the leading words containing zeroes.
    pub fn trunc_leading_zeroes(&mut self) {
        let mut n = 0;

        for v in self.inner.iter().rev() {
            if *v == 0 {
                n += 1;
            } else {
                break;
            }
        }

        let sz = self.len();
        self.inner.truncate(sz - n);
    }
}

impl<I: SliceIndex<[Word]>> IndexMut<I> for WordBuf {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        self.inner.index_mut(index)
    }
}

impl<I: SliceIndex<[Word]>> Index<I> for WordBuf {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        self.inner.index(index)
    }
}

impl Deref for WordBuf {
    type Target = [Word];

    #[inline]
    fn deref(&self) -> &[Word] {
        self.inner.deref()
    }
}

impl DerefMut for WordBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Word] {
        self.inner.deref_mut()
    }
}
