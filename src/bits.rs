//! Decomposition of IEEE-754 numbers into their components.

use crate::defs::Sign;

/// Layout constants of a binary interchange format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatFormat {
    sign_bit: u64,
    exponent_mask: u64,
    mantissa_mask: u64,
    mantissa_bit_count: u32,
    exponent_bit_count: u32,
    exponent_bias: i32,
    special_exponent: u32,
}

impl FloatFormat {
    /// 16 bit half precision.
    pub const HALF: FloatFormat = FloatFormat {
        sign_bit: 0x8000,
        exponent_mask: 0x7C00,
        mantissa_mask: 0x03FF,
        mantissa_bit_count: 10,
        exponent_bit_count: 5,
        exponent_bias: 15,
        special_exponent: 0x1F,
    };

    /// 32 bit single precision.
    pub const SINGLE: FloatFormat = FloatFormat {
        sign_bit: 0x8000_0000,
        exponent_mask: 0x7F80_0000,
        mantissa_mask: 0x007F_FFFF,
        mantissa_bit_count: 23,
        exponent_bit_count: 8,
        exponent_bias: 127,
        special_exponent: 0xFF,
    };

    /// 64 bit double precision.
    pub const DOUBLE: FloatFormat = FloatFormat {
        sign_bit: 0x8000_0000_0000_0000,
        exponent_mask: 0x7FF0_0000_0000_0000,
        mantissa_mask: 0x000F_FFFF_FFFF_FFFF,
        mantissa_bit_count: 52,
        exponent_bit_count: 11,
        exponent_bias: 1023,
        special_exponent: 0x7FF,
    };

    /// Bit that tells a quiet NaN from a signaling one.
    #[inline]
    fn nan_type_bit(&self) -> u64 {
        1 << (self.mantissa_bit_count - 1)
    }

    /// The implicit leading bit of normal numbers.
    #[inline]
    fn implicit_bit(&self) -> u64 {
        1 << self.mantissa_bit_count
    }
}

const FLAG_VALID: u8 = 0x01;
const FLAG_NEGATIVE: u8 = 0x02;
const FLAG_ZERO: u8 = 0x04;
const FLAG_NAN: u8 = 0x08;
const FLAG_QNAN: u8 = 0x10;
const FLAG_INDEFINITE_NAN: u8 = 0x20;
const FLAG_INFINITY: u8 = 0x40;
const FLAG_SUBNORMAL: u8 = 0x80;

/// Components of a floating point number.
///
/// The value is immutable once constructed. A default instance has not analyzed anything and
/// reports `is_valid() == false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloatBits {
    mantissa: u64,
    biased_exponent: u32,
    exponent: i32,
    mantissa_bit_count: u32,
    exponent_bit_count: u32,
    flags: u8,
}

impl FloatBits {
    /// Decomposes a raw bit pattern of a number in format `fmt`.
    /// Only the low bits covered by the format masks are examined.
    pub fn decompose(bits: u64, fmt: &FloatFormat) -> Self {
        let biased_exponent = ((bits & fmt.exponent_mask) >> fmt.mantissa_bit_count) as u32;
        let mut mantissa = bits & fmt.mantissa_mask;
        let mut exponent = biased_exponent as i32 - fmt.exponent_bias;

        let mut flags = FLAG_VALID;
        if bits & fmt.sign_bit != 0 {
            flags |= FLAG_NEGATIVE;
        }

        if bits & (fmt.exponent_mask | fmt.mantissa_mask) == 0 {
            flags |= FLAG_ZERO;
        } else if biased_exponent == fmt.special_exponent {
            if mantissa == 0 {
                flags |= FLAG_INFINITY;
            } else {
                flags |= FLAG_NAN;

                let nan_bit = fmt.nan_type_bit();
                if mantissa & nan_bit != 0 {
                    flags |= FLAG_QNAN;

                    // negative quiet NaN with an empty payload
                    if flags & FLAG_NEGATIVE != 0 && mantissa & (nan_bit - 1) == 0 {
                        flags |= FLAG_INDEFINITE_NAN;
                    }
                }
            }
        } else if biased_exponent == 0 {
            // no implicit bit, the leading bit weighs as much as in the smallest normal
            flags |= FLAG_SUBNORMAL;
            exponent += 1;
        } else {
            mantissa |= fmt.implicit_bit();
        }

        FloatBits {
            mantissa,
            biased_exponent,
            exponent,
            mantissa_bit_count: fmt.mantissa_bit_count + 1,
            exponent_bit_count: fmt.exponent_bit_count,
            flags,
        }
    }

    /// Decomposes a 16 bit half precision number given by its bit pattern.
    pub fn decompose16(bits: u16) -> Self {
        Self::decompose(bits as u64, &FloatFormat::HALF)
    }

    /// Decomposes a 32 bit single precision number given by its bit pattern.
    pub fn decompose32(bits: u32) -> Self {
        Self::decompose(bits as u64, &FloatFormat::SINGLE)
    }

    /// Decomposes a 64 bit double precision number given by its bit pattern.
    pub fn decompose64(bits: u64) -> Self {
        Self::decompose(bits, &FloatFormat::DOUBLE)
    }

    /// Returns the mantissa with the implicit bit restored for normal numbers.
    pub fn get_mantissa(&self) -> u64 {
        self.mantissa
    }

    /// Returns the exponent as it is stored in the number.
    pub fn get_biased_exponent(&self) -> u32 {
        self.biased_exponent
    }

    /// Returns the unbiased exponent of the leading mantissa bit.
    pub fn get_exponent(&self) -> i32 {
        self.exponent
    }

    /// Returns the number of mantissa bits including the implicit bit.
    pub fn get_mantissa_bit_count(&self) -> u32 {
        self.mantissa_bit_count
    }

    /// Returns the number of exponent bits.
    pub fn get_exponent_bit_count(&self) -> u32 {
        self.exponent_bit_count
    }

    /// Returns the sign of the number.
    pub fn get_sign(&self) -> Sign {
        if self.is_negative() {
            Sign::Neg
        } else {
            Sign::Pos
        }
    }

    /// Returns true if a number was analyzed.
    pub fn is_valid(&self) -> bool {
        self.flags & FLAG_VALID != 0
    }

    /// Returns true if the sign bit is set. This includes negative zero and NaN.
    pub fn is_negative(&self) -> bool {
        self.flags & FLAG_NEGATIVE != 0
    }

    /// Returns true for both positive and negative zero.
    pub fn is_zero(&self) -> bool {
        self.flags & FLAG_ZERO != 0
    }

    /// Returns true for all forms of NaN.
    pub fn is_nan(&self) -> bool {
        self.flags & FLAG_NAN != 0
    }

    /// Returns true if the number is a quiet NaN.
    pub fn is_quiet_nan(&self) -> bool {
        self.flags & FLAG_QNAN != 0
    }

    /// Returns true if the number is the indefinite NaN.
    pub fn is_indefinite_nan(&self) -> bool {
        self.flags & FLAG_INDEFINITE_NAN != 0
    }

    /// Returns true if the number is an infinity.
    pub fn is_infinity(&self) -> bool {
        self.flags & FLAG_INFINITY != 0
    }

    /// Returns true if the number is subnormal.
    pub fn is_subnormal(&self) -> bool {
        self.flags & FLAG_SUBNORMAL != 0
    }

    /// Returns true if the number is neither zero nor a special value nor subnormal.
    pub fn is_normal(&self) -> bool {
        self.is_valid()
            && self.flags & (FLAG_ZERO | FLAG_NAN | FLAG_INFINITY | FLAG_SUBNORMAL) == 0
    }
}

impl From<f32> for FloatBits {
    fn from(f: f32) -> Self {
        Self::decompose32(f.to_bits())
    }
}

impl From<f64> for FloatBits {
    fn from(f: f64) -> Self {
        Self::decompose64(f.to_bits())
    }
}
