//! Analysis of the decimal digits a number prints with.

use crate::bits::FloatBits;
use crate::common::int::WideAccumulator;
use crate::conv::accumulator_bits_needed;
use crate::conv::separate_integer_fraction;
use crate::conv::FractionDigits;
use crate::conv::IntegerDigits;
use crate::defs::Error;

/// Names of the special values, lower case.
pub const SPECIAL_TEXT_LOWER: [&str; 5] = ["inf", "-inf", "nan", "-nan", "-nan"];

/// Names of the special values, upper case.
pub const SPECIAL_TEXT_UPPER: [&str; 5] = ["INF", "-INF", "NAN", "-NAN", "-NAN"];

/// What kind of output a number produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Zero, printed as a single `0` integer digit.
    Zero,

    /// Digits are printed as they are extracted.
    Normal,

    /// The last printed digit has to be incremented, the carry stays within the printed digits.
    RoundedUpAtEnd,

    /// All printed digits were 9 and rounding up produced a new leading `1`.
    RoundedUpADigit,

    /// Positive infinity.
    PositiveInfinity,

    /// Negative infinity.
    NegativeInfinity,

    /// NaN with the sign bit clear.
    PositiveNaN,

    /// NaN with the sign bit set.
    NegativeNaN,

    /// Signaling NaN.
    SignalingNaN,

    /// Quiet NaN.
    QuietNaN,

    /// The indefinite NaN: negative, quiet, empty payload.
    IndefiniteNaN,
}

impl Classification {
    /// Returns true for infinities and all kinds of NaN.
    pub fn is_special(&self) -> bool {
        self.is_infinity() || self.is_nan()
    }

    /// Returns true for infinities.
    pub fn is_infinity(&self) -> bool {
        matches!(self, Classification::PositiveInfinity | Classification::NegativeInfinity)
    }

    /// Returns true for all kinds of NaN.
    pub fn is_nan(&self) -> bool {
        matches!(
            self,
            Classification::PositiveNaN
                | Classification::NegativeNaN
                | Classification::SignalingNaN
                | Classification::QuietNaN
                | Classification::IndefiniteNaN
        )
    }

    /// Text printed for a special value, or None if the classification is a number.
    pub fn special_text(&self, uppercase: bool) -> Option<&'static str> {
        let idx = match self {
            Classification::PositiveInfinity => 0,
            Classification::NegativeInfinity => 1,
            Classification::PositiveNaN | Classification::SignalingNaN | Classification::QuietNaN => 2,
            Classification::NegativeNaN => 3,
            Classification::IndefiniteNaN => 4,
            _ => return None,
        };

        Some(if uppercase {
            SPECIAL_TEXT_UPPER[idx]
        } else {
            SPECIAL_TEXT_LOWER[idx]
        })
    }
}

/// Digit positions of a number printed with a given number of fractional digits.
///
/// Positions are 1-based and counted from the decimal point outward, 0 stands for "none".
/// Only positions are recorded: a renderer extracts the digits again from a fresh split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitLayout {
    has_integer: bool,
    has_fractional: bool,
    special_digit_count: usize,
    first_non_zero_int_digit: usize,
    last_non_zero_int_digit: usize,
    first_non_zero_frac_digit: usize,
    last_non_zero_frac_digit: usize,
    classification: Classification,
}

impl Default for DigitLayout {
    fn default() -> Self {
        DigitLayout {
            has_integer: false,
            has_fractional: false,
            special_digit_count: 0,
            first_non_zero_int_digit: 0,
            last_non_zero_int_digit: 0,
            first_non_zero_frac_digit: 0,
            last_non_zero_frac_digit: 0,
            classification: Classification::Zero,
        }
    }
}

impl DigitLayout {
    /// Analyzes `fb` printed with `precision` fractional digits.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `fb` was never initialized with a number.
    pub fn analyze(fb: &FloatBits, precision: usize) -> Result<Self, Error> {
        if !fb.is_valid() {
            return Err(Error::InvalidArgument);
        }

        let mut ret = DigitLayout::default();

        if fb.is_zero() {
            ret.has_integer = true;
            ret.first_non_zero_int_digit = 1;
            ret.last_non_zero_int_digit = 1;
        } else if fb.is_infinity() {
            ret.set_special(if fb.is_negative() {
                Classification::NegativeInfinity
            } else {
                Classification::PositiveInfinity
            });
        } else if fb.is_nan() {
            ret.set_special(if fb.is_negative() {
                Classification::NegativeNaN
            } else {
                Classification::PositiveNaN
            });
        } else {
            ret.analyze_digits(fb, precision)?;
        }

        Ok(ret)
    }

    fn set_special(&mut self, classification: Classification) {
        self.classification = classification;
        self.special_digit_count = classification.special_text(false).map_or(0, |s| s.len());
    }

    fn analyze_digits(&mut self, fb: &FloatBits, precision: usize) -> Result<(), Error> {
        let bits_needed = accumulator_bits_needed(fb);

        let mut int_part = WideAccumulator::new(bits_needed)?;
        let mut frac_part = WideAccumulator::new(bits_needed)?;

        separate_integer_fraction(&mut int_part, &mut frac_part, fb)?;

        self.classification = Classification::Normal;

        // integer digits, right to left from the decimal point
        self.has_integer = !int_part.is_zero();
        let mut count = 0;
        let mut int_all_nines = true;
        for d in IntegerDigits::new(&mut int_part) {
            count += 1;
            if d != 0 && self.first_non_zero_int_digit == 0 {
                self.first_non_zero_int_digit = count;
            }
            int_all_nines &= d == 9;
        }
        self.last_non_zero_int_digit = count;

        // fractional digits, left to right from the decimal point, up to the precision
        self.has_fractional = !frac_part.is_zero();
        let mut count = 0;
        let mut frac_all_nines = true;
        for d in FractionDigits::new(&mut frac_part).take(precision) {
            count += 1;
            if d != 0 && self.first_non_zero_frac_digit == 0 {
                self.first_non_zero_frac_digit = count;
            }
            frac_all_nines &= d == 9;
        }
        self.last_non_zero_frac_digit = count;

        // the first dropped digit decides rounding
        if !frac_part.is_zero() && frac_part.multiply_return_overflow(10) >= 5 {
            if int_all_nines && frac_all_nines {
                self.last_non_zero_int_digit += 1;
                self.first_non_zero_int_digit = self.last_non_zero_int_digit;
                self.classification = Classification::RoundedUpADigit;
            } else {
                self.classification = Classification::RoundedUpAtEnd;
            }
        }

        Ok(())
    }

    /// Returns the signaling, quiet or indefinite kind of a NaN, or None if `fb` is not a NaN.
    pub fn nan_kind(fb: &FloatBits) -> Option<Classification> {
        if !fb.is_nan() {
            None
        } else if fb.is_indefinite_nan() {
            Some(Classification::IndefiniteNaN)
        } else if fb.is_quiet_nan() {
            Some(Classification::QuietNaN)
        } else {
            Some(Classification::SignalingNaN)
        }
    }

    /// Returns true if there are integer digits.
    pub fn has_integer(&self) -> bool {
        self.has_integer
    }

    /// Returns true if there are fractional digits.
    pub fn has_fractional(&self) -> bool {
        self.has_fractional
    }

    /// Returns the length of the special value text, or 0 for numbers.
    pub fn get_special_digit_count(&self) -> usize {
        self.special_digit_count
    }

    /// Returns the position of the lowest non-zero integer digit.
    pub fn get_first_non_zero_int_digit(&self) -> usize {
        self.first_non_zero_int_digit
    }

    /// Returns the number of integer digits, i.e. the position of the leading digit.
    pub fn get_last_non_zero_int_digit(&self) -> usize {
        self.last_non_zero_int_digit
    }

    /// Returns the position of the first non-zero fractional digit.
    pub fn get_first_non_zero_frac_digit(&self) -> usize {
        self.first_non_zero_frac_digit
    }

    /// Returns the number of fractional digits extracted before the precision ran out
    /// or the fraction became zero.
    pub fn get_last_non_zero_frac_digit(&self) -> usize {
        self.last_non_zero_frac_digit
    }

    /// Returns the kind of output.
    pub fn get_classification(&self) -> Classification {
        self.classification
    }

    /// Returns true for infinities and NaN.
    pub fn is_special(&self) -> bool {
        self.classification.is_special()
    }

    /// Returns true for infinities.
    pub fn is_infinity(&self) -> bool {
        self.classification.is_infinity()
    }

    /// Returns true for NaN.
    pub fn is_nan(&self) -> bool {
        self.classification.is_nan()
    }
}
