//! Wide fixed point integer used for exact decimal digit extraction.

use super::buf::ChunkBuf;
use crate::defs::DoubleWord;
use crate::defs::Error;
use crate::defs::Word;
use crate::defs::WORD_BASE;
use crate::defs::WORD_BIT_SIZE;

/// Big integer of a fixed capacity of `ACCUMULATOR_BIT_SIZE` bits.
///
/// Chunk 0 is the most significant one. The accumulator is read either as an integer (the
/// last active chunk holds the units) and consumed with `divide_return_remainder`, or as a
/// fraction below 1 (chunk 0 holds the bits right after the binary point) and consumed with
/// `multiply_return_overflow`. Both operations mutate the value in place.
///
/// The span of non-zero chunks is tracked so that untouched chunks are skipped.
#[derive(Debug, Clone)]
pub struct WideAccumulator {
    m: ChunkBuf,
    lowest_non_zero: usize,
    highest_non_zero: usize,
    is_zero: bool,
}

impl WideAccumulator {
    /// Accumulator set to zero, with enough chunks for `bits_needed` bits.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `bits_needed` is zero or exceeds the fixed capacity.
    pub fn new(bits_needed: usize) -> Result<Self, Error> {
        let mut ret = WideAccumulator {
            m: ChunkBuf::empty(),
            lowest_non_zero: 0,
            highest_non_zero: 0,
            is_zero: true,
        };

        ret.init(bits_needed)?;

        Ok(ret)
    }

    /// Resets the value to zero and resizes to `bits_needed` bits rounded up to whole chunks.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `bits_needed` is zero or exceeds the fixed capacity.
    pub fn init(&mut self, bits_needed: usize) -> Result<(), Error> {
        self.m.reset_to_bits(bits_needed)?;
        self.set_empty_span();

        Ok(())
    }

    /// Returns true if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.is_zero
    }

    /// Number of active chunks.
    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.m.len()
    }

    /// Active chunks, most significant first.
    #[inline]
    pub fn chunks(&self) -> &[Word] {
        &self.m
    }

    /// Bounds of the non-zero chunk span, or None if the value is zero.
    pub fn non_zero_span(&self) -> Option<(usize, usize)> {
        if self.is_zero {
            None
        } else {
            Some((self.lowest_non_zero, self.highest_non_zero))
        }
    }

    /// Size of the insertion window: the active chunks plus one chunk below the units,
    /// so that a 32 bit value can be shifted in one bit at a time.
    #[inline]
    fn window_bits(&self) -> usize {
        (self.m.len() + 32 / WORD_BIT_SIZE) * WORD_BIT_SIZE
    }

    /// ORs `bits` into the accumulator so that the value grows by `bits * 2^(shift - 32)`,
    /// counting from the least significant end.
    /// A shift of 1 places the top bit of `bits` into the least significant bit of the
    /// accumulator, a shift of 32 places all of `bits` into the last chunk.
    /// Bits that end up below the last chunk or above the first chunk are dropped.
    pub fn insert_bits_from_end(&mut self, bits: u32, shift: usize) {
        if bits == 0 || shift >= self.window_bits() {
            return;
        }

        let bit_shift = shift % WORD_BIT_SIZE;

        // the chunk receiving the low part, equal to the chunk count if it falls off the end
        let idx = self.m.len() - shift / WORD_BIT_SIZE;

        if bit_shift == 0 {
            self.insert_chunk_bits(bits as Word, idx);
        } else {
            if idx > 0 {
                self.insert_chunk_bits((bits >> (WORD_BIT_SIZE - bit_shift)) as Word, idx - 1);
            }
            self.insert_chunk_bits((bits << bit_shift) as Word, idx);
        }
    }

    /// Same as `insert_bits_from_end`, with the shift counted from the most significant end.
    /// A shift of 1 places the low bit of `bits` into the most significant bit of the
    /// accumulator.
    pub fn insert_bits_from_start(&mut self, bits: u32, shift: usize) {
        if let Some(s) = self.window_bits().checked_sub(shift) {
            self.insert_bits_from_end(bits, s);
        }
    }

    fn insert_chunk_bits(&mut self, bits: Word, idx: usize) {
        if bits == 0 || idx >= self.m.len() {
            return;
        }

        self.m[idx] |= bits;

        if self.is_zero {
            self.is_zero = false;
            self.lowest_non_zero = idx;
            self.highest_non_zero = idx;
        } else {
            self.lowest_non_zero = self.lowest_non_zero.min(idx);
            self.highest_non_zero = self.highest_non_zero.max(idx);
        }

        self.debug_check_span();
    }

    /// Divides the value by `d` in place and returns the remainder.
    /// The value is read as an integer. Nothing happens and 0 is returned if `d` is 0 or the
    /// value is already zero.
    pub fn divide_return_remainder(&mut self, d: u32) -> u32 {
        if self.is_zero || d == 0 {
            return 0;
        }

        let d = d as DoubleWord;
        let mut rh: DoubleWord = 0;
        let mut lowest = None;
        let mut highest = 0;

        // chunks above the span are zero, chunks below it receive the remainders
        let start = self.lowest_non_zero;
        for (i, v) in self.m.iter_mut().enumerate().skip(start) {
            let qh = rh * WORD_BASE + *v as DoubleWord;

            rh = qh % d;
            *v = (qh / d) as Word;

            if *v != 0 {
                lowest.get_or_insert(i);
                highest = i;
            }
        }

        self.update_span(lowest, highest);

        rh as u32
    }

    /// Multiplies the value by `m` in place and returns the part that overflows above the
    /// most significant chunk.
    /// The value is read as a fraction below 1, so a multiplier of 10 yields the next decimal
    /// digit. Nothing happens and 0 is returned if the value is zero.
    pub fn multiply_return_overflow(&mut self, m: u32) -> u32 {
        if self.is_zero {
            return 0;
        }

        let m = m as DoubleWord;
        let mut k: DoubleWord = 0;
        let mut lowest = None;
        let mut highest = 0;

        // chunks below the span are zero, chunks above it receive the carries
        let end = self.highest_non_zero + 1;
        for (i, v) in self.m[..end].iter_mut().enumerate().rev() {
            let p = m * (*v as DoubleWord) + k;

            *v = p as Word;
            k = p >> WORD_BIT_SIZE;

            if *v != 0 {
                if lowest.is_none() {
                    highest = i;
                }
                lowest = Some(i);
            }
        }

        self.update_span(lowest, highest);

        k as u32
    }

    fn update_span(&mut self, lowest: Option<usize>, highest: usize) {
        match lowest {
            Some(lowest) => {
                self.lowest_non_zero = lowest;
                self.highest_non_zero = highest;
            }
            None => self.set_empty_span(),
        }

        self.debug_check_span();
    }

    fn set_empty_span(&mut self) {
        self.is_zero = true;
        self.lowest_non_zero = self.m.len();
        self.highest_non_zero = 0;
    }

    #[inline]
    fn debug_check_span(&self) {
        debug_assert!(
            self.is_zero
                || (self.m[self.lowest_non_zero] != 0
                    && self.m[self.highest_non_zero] != 0
                    && self.m[..self.lowest_non_zero].iter().all(|v| *v == 0)
                    && self.m[self.highest_non_zero + 1..].iter().all(|v| *v == 0))
        );
        debug_assert!(!self.is_zero || self.m.iter().all(|v| *v == 0));
    }
}
