//! Conversion of a decomposed number into integer and fractional accumulators, and the
//! decimal digit streams read from them.

use crate::bits::FloatBits;
use crate::common::int::WideAccumulator;
use crate::defs::Error;

/// Number of bits the integer accumulator needs for `fb`: one more than the
/// largest exponent, 2^(n-1) for an n bit exponent.
fn integer_bits_needed(fb: &FloatBits) -> usize {
    1 << (fb.get_exponent_bit_count() - 1)
}

/// Number of bits the fractional accumulator needs for `fb`: the magnitude of the smallest
/// normal exponent, 2^(n-1) - 2, plus the stored mantissa bits.
fn fraction_bits_needed(fb: &FloatBits) -> usize {
    integer_bits_needed(fb) - 2 + (fb.get_mantissa_bit_count() as usize - 1)
}

/// Number of bits an accumulator needs to hold either part of any number of the format of `fb`.
pub fn accumulator_bits_needed(fb: &FloatBits) -> usize {
    integer_bits_needed(fb) + fb.get_mantissa_bit_count() as usize
}

/// Splits `fb` at the binary point.
/// `int_part` is reset and receives the mantissa bits at or above the binary point as an
/// integer, `frac_part` is reset and receives the bits below it as a fraction.
///
/// ## Errors
///
///  - InvalidArgument: `fb` was never initialized with a number.
pub fn separate_integer_fraction(
    int_part: &mut WideAccumulator,
    frac_part: &mut WideAccumulator,
    fb: &FloatBits,
) -> Result<(), Error> {
    if !fb.is_valid() {
        return Err(Error::InvalidArgument);
    }

    int_part.init(integer_bits_needed(fb))?;
    frac_part.init(fraction_bits_needed(fb))?;

    if fb.is_zero() {
        return Ok(());
    }

    let mbc = fb.get_mantissa_bit_count() as i64;
    let e = fb.get_exponent() as i64;
    let m = fb.get_mantissa();

    // the mantissa is inserted in 32 bit pieces; a piece starting at bit `pos` of the mantissa
    // weighs 2^(e - (mbc - 1) + pos)
    let mut pos = 0;
    while pos < mbc {
        let piece = (m >> pos) as u32;

        if let Ok(shift) = usize::try_from(32 + 1 - mbc + e + pos) {
            int_part.insert_bits_from_end(piece, shift);
        }

        if let Ok(shift) = usize::try_from(mbc - 1 - e - pos) {
            frac_part.insert_bits_from_start(piece, shift);
        }

        pos += 32;
    }

    Ok(())
}

/// Decimal digits of an integer accumulator, least significant first.
/// The accumulator is consumed as the digits are read.
pub struct IntegerDigits<'a> {
    acc: &'a mut WideAccumulator,
}

impl<'a> IntegerDigits<'a> {
    /// Reads the digits of `acc`.
    pub fn new(acc: &'a mut WideAccumulator) -> Self {
        IntegerDigits { acc }
    }
}

impl<'a> Iterator for IntegerDigits<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.acc.is_zero() {
            None
        } else {
            Some(self.acc.divide_return_remainder(10) as u8)
        }
    }
}

/// Decimal digits of a fractional accumulator, most significant first.
/// The accumulator is consumed as the digits are read. The iterator ends when the remaining
/// fraction is zero.
pub struct FractionDigits<'a> {
    acc: &'a mut WideAccumulator,
}

impl<'a> FractionDigits<'a> {
    /// Reads the digits of `acc`.
    pub fn new(acc: &'a mut WideAccumulator) -> Self {
        FractionDigits { acc }
    }
}

impl<'a> Iterator for FractionDigits<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.acc.is_zero() {
            None
        } else {
            Some(self.acc.multiply_return_overflow(10) as u8)
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::ACCUMULATOR_BIT_SIZE;
    use rand::random;

    fn split(fb: &FloatBits) -> (WideAccumulator, WideAccumulator) {
        let mut i = WideAccumulator::new(ACCUMULATOR_BIT_SIZE).unwrap();
        let mut f = WideAccumulator::new(ACCUMULATOR_BIT_SIZE).unwrap();
        separate_integer_fraction(&mut i, &mut f, fb).unwrap();
        (i, f)
    }

    fn digits(fb: &FloatBits) -> (Vec<u8>, Vec<u8>) {
        let (mut i, mut f) = split(fb);
        let mut int: Vec<u8> = IntegerDigits::new(&mut i).collect();
        int.reverse();
        let frac: Vec<u8> = FractionDigits::new(&mut f).collect();
        (int, frac)
    }

    #[test]
    fn test_sizes() {
        let (i, f) = split(&FloatBits::from(1.0f64));
        assert_eq!(i.chunk_count(), 32);
        assert_eq!(f.chunk_count(), 34);
        assert_eq!(accumulator_bits_needed(&FloatBits::from(1.0f64)), 1077);
        assert_eq!(accumulator_bits_needed(&FloatBits::from(1.0f32)), 152);
        assert_eq!(accumulator_bits_needed(&FloatBits::decompose16(0)), 27);

        let (i, f) = split(&FloatBits::from(1.0f32));
        assert_eq!(i.chunk_count(), 4);
        assert_eq!(f.chunk_count(), 5);

        let (i, f) = split(&FloatBits::decompose16(0x3C00));
        assert_eq!(i.chunk_count(), 1);
        assert_eq!(f.chunk_count(), 1);
    }

    #[test]
    fn test_split() {
        let (i, f) = digits(&FloatBits::from(12.375f64));
        assert_eq!(i, [1, 2]);
        assert_eq!(f, [3, 7, 5]);

        let (i, f) = digits(&FloatBits::from(-0.5f32));
        assert!(i.is_empty());
        assert_eq!(f, [5]);

        let (i, f) = digits(&FloatBits::from(4096.0f64));
        assert_eq!(i, [4, 0, 9, 6]);
        assert!(f.is_empty());

        // 2^-1074, the smallest subnormal
        let (i, f) = digits(&FloatBits::decompose64(1));
        assert!(i.is_empty());
        assert_eq!(f.len(), 1074);
        assert_eq!(&f[..323], &[0; 323]);
        assert_eq!(&f[323..327], &[4, 9, 4, 0]);
        assert_eq!(f[1073], 5);

        // largest double
        let (i, f) = digits(&FloatBits::from(f64::MAX));
        assert_eq!(i.len(), 309);
        assert_eq!(&i[..6], &[1, 7, 9, 7, 6, 9]);
        assert!(f.is_empty());

        // largest half: 65504
        let (i, f) = digits(&FloatBits::decompose16(0x7BFF));
        assert_eq!(i, [6, 5, 5, 0, 4]);
        assert!(f.is_empty());

        // smallest half subnormal: 2^-24
        let (i, f) = digits(&FloatBits::decompose16(0x0001));
        assert!(i.is_empty());
        assert_eq!(f.len(), 24);
        assert_eq!(f[23], 5);

        // zero leaves both parts empty
        let (i, f) = split(&FloatBits::from(-0.0f64));
        assert!(i.is_zero());
        assert!(f.is_zero());

        let mut i = WideAccumulator::new(1).unwrap();
        let mut f = WideAccumulator::new(1).unwrap();
        assert_eq!(
            separate_integer_fraction(&mut i, &mut f, &FloatBits::default()).unwrap_err(),
            Error::InvalidArgument
        );
    }

    #[test]
    fn test_split_integers() {
        for _ in 0..1000 {
            let n = random::<u64>() >> (random::<u32>() % 53 + 11);
            let (i, f) = digits(&FloatBits::from(n as f64));

            let s: String = i.iter().map(|d| char::from(b'0' + d)).collect();
            if n == 0 {
                assert!(s.is_empty());
            } else {
                assert_eq!(s, n.to_string());
            }
            assert!(f.is_empty());

            let n = n as u32 >> 8;
            let (i, _) = digits(&FloatBits::from(n as f32));
            let s: String = i.iter().map(|d| char::from(b'0' + d)).collect();
            if n != 0 {
                assert_eq!(s, n.to_string());
            }
        }
    }
}
