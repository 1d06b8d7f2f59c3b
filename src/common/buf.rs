//! Fixed capacity buffer holding the chunks of a wide accumulator.

use crate::defs::Error;
use crate::defs::Word;
use crate::defs::ACCUMULATOR_WORDS;
use crate::defs::WORD_BIT_SIZE;
use core::ops::Deref;
use core::ops::DerefMut;
use core::ops::Index;
use core::ops::IndexMut;
use core::slice::SliceIndex;

/// Chunk storage. The first element is the most significant one.
/// Only the first `len()` chunks are active; the rest of the array is never read.
#[derive(Debug, Clone)]
pub struct ChunkBuf {
    inner: [Word; ACCUMULATOR_WORDS],
    len: usize,
}

impl ChunkBuf {
    /// Buffer with no active chunks.
    #[inline]
    pub const fn empty() -> Self {
        ChunkBuf {
            inner: [0; ACCUMULATOR_WORDS],
            len: 0,
        }
    }

    /// Activates enough zeroed chunks to hold `bits` bits.
    pub fn reset_to_bits(&mut self, bits: usize) -> Result<(), Error> {
        let n = (bits + WORD_BIT_SIZE - 1) / WORD_BIT_SIZE;
        if n == 0 || n > ACCUMULATOR_WORDS {
            return Err(Error::InvalidArgument);
        }

        self.len = n;
        self.inner[..n].fill(0);

        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }
}

impl<I: SliceIndex<[Word]>> IndexMut<I> for ChunkBuf {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        self.deref_mut().index_mut(index)
    }
}

impl<I: SliceIndex<[Word]>> Index<I> for ChunkBuf {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        self.deref().index(index)
    }
}

impl Deref for ChunkBuf {
    type Target = [Word];

    #[inline]
    fn deref(&self) -> &[Word] {
        &self.inner[..self.len]
    }
}

impl DerefMut for ChunkBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Word] {
        &mut self.inner[..self.len]
    }
}
