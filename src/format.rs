//! Fixed point formatting.

use crate::bits::FloatBits;
use crate::common::int::WideAccumulator;
use crate::conv::accumulator_bits_needed;
use crate::conv::separate_integer_fraction;
use crate::conv::IntegerDigits;
use crate::ctx::Context;
use crate::ctx::SignMode;
use crate::defs::Error;
use crate::defs::DEFAULT_PRECISION;
use crate::layout::Classification;
use crate::layout::DigitLayout;
use core::fmt::Alignment;
use core::fmt::Display;
use core::fmt::Formatter;
use itertools::Itertools;
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use alloc::string::String;

const DIGITS_INLINE: usize = 32;

type DigitBuf = SmallVec<[u8; DIGITS_INLINE]>;

impl FloatBits {
    /// Formats the number in fixed point notation using the parameters of `ctx`.
    /// Digits are exact: the number is rounded half up only at the last printed digit.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the number was never initialized.
    ///  - MemoryAllocation: failed to allocate memory for the output.
    pub fn format(&self, ctx: &Context) -> Result<String, Error> {
        let precision = ctx.get_precision();
        let layout = DigitLayout::analyze(self, precision)?;

        if let Some(text) = layout.get_classification().special_text(ctx.get_uppercase()) {
            // negative special text carries its own sign
            let sign = if text.starts_with('-') { "" } else { sign_prefix(false, ctx) };
            return pad(sign, text, false, ctx);
        }

        let (int_digits, frac_digits) = match layout.get_classification() {
            Classification::Zero => (lead_digit(0, 1)?, lead_digit(0, precision)?),
            Classification::RoundedUpADigit => (
                lead_digit(1, layout.get_last_non_zero_int_digit())?,
                lead_digit(0, precision)?,
            ),
            _ => self.extract_digits(&layout, precision)?,
        };

        let mut body = String::new();
        body.try_reserve(int_digits.len() * 4 / 3 + precision + 2)?;

        if ctx.get_group_separator() {
            let groups = int_digits.rchunks(3).rev().map(digits_to_str).join(",");
            body.push_str(&groups);
        } else {
            body.push_str(&digits_to_str(&int_digits));
        }

        if ctx.has_decimal_point() {
            body.push('.');
        }

        body.extend(frac_digits.iter().map(|d| char::from(b'0' + d)));

        pad(sign_prefix(self.is_negative(), ctx), &body, true, ctx)
    }

    /// Formats the number with `precision` fractional digits and default parameters otherwise.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the number was never initialized.
    ///  - MemoryAllocation: failed to allocate memory for the output.
    pub fn to_fixed(&self, precision: usize) -> Result<String, Error> {
        let mut ctx = Context::new();
        ctx.precision(precision);
        self.format(&ctx)
    }

    /// Returns the number of fractional digits that print the number exactly, or 0 for
    /// zero, infinities and NaN.
    pub fn exact_precision(&self) -> usize {
        if !self.is_valid() || self.is_zero() || self.is_infinity() || self.is_nan() {
            return 0;
        }

        // every binary place below the point adds one decimal place
        let frac_bits = self.get_mantissa_bit_count() as i64
            - 1
            - self.get_exponent() as i64
            - self.get_mantissa().trailing_zeros() as i64;

        usize::try_from(frac_bits).unwrap_or(0)
    }

    // Splits the number again and reads the printed digits, most significant first.
    fn extract_digits(
        &self,
        layout: &DigitLayout,
        precision: usize,
    ) -> Result<(DigitBuf, DigitBuf), Error> {
        let bits_needed = accumulator_bits_needed(self);
        let mut int_part = WideAccumulator::new(bits_needed)?;
        let mut frac_part = WideAccumulator::new(bits_needed)?;

        separate_integer_fraction(&mut int_part, &mut frac_part, self)?;

        let mut int_digits = DigitBuf::new();
        int_digits.try_reserve(layout.get_last_non_zero_int_digit().max(1) + 1)?;
        int_digits.extend(IntegerDigits::new(&mut int_part));
        if int_digits.is_empty() {
            int_digits.push(0);
        }
        int_digits.reverse();

        // a zero fraction keeps yielding zeros
        let mut frac_digits = DigitBuf::new();
        frac_digits.try_reserve(precision)?;
        for _ in 0..precision {
            frac_digits.push(frac_part.multiply_return_overflow(10) as u8);
        }

        debug_assert_eq!(int_digits.len(), layout.get_last_non_zero_int_digit().max(1));

        if layout.get_classification() == Classification::RoundedUpAtEnd {
            round_up_last(&mut int_digits, &mut frac_digits);
        }

        Ok((int_digits, frac_digits))
    }
}

/// Adds one unit of the last printed digit.
fn round_up_last(int_digits: &mut DigitBuf, frac_digits: &mut DigitBuf) {
    for d in frac_digits.iter_mut().rev().chain(int_digits.iter_mut().rev()) {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }

    int_digits.insert(0, 1);
}

/// `n` digits: `lead` followed by zeros.
fn lead_digit(lead: u8, n: usize) -> Result<DigitBuf, Error> {
    let mut ret = DigitBuf::new();
    if n > 0 {
        ret.try_reserve(n)?;
        ret.push(lead);
        ret.resize(n, 0);
    }
    Ok(ret)
}

fn digits_to_str(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

fn sign_prefix(is_negative: bool, ctx: &Context) -> &'static str {
    if is_negative {
        "-"
    } else {
        match ctx.get_sign_mode() {
            SignMode::Negative => "",
            SignMode::Always => "+",
            SignMode::Blank => " ",
        }
    }
}

/// Pads `sign` followed by `body` to the field width.
fn pad(sign: &str, body: &str, allow_zeros: bool, ctx: &Context) -> Result<String, Error> {
    let len = sign.len() + body.len();
    let fill = ctx.get_width().map_or(0, |w| w.saturating_sub(len));

    let mut ret = String::new();
    ret.try_reserve_exact(len + fill)?;

    if ctx.get_left_justify() {
        ret.push_str(sign);
        ret.push_str(body);
        ret.extend(core::iter::repeat(' ').take(fill));
    } else if allow_zeros && ctx.get_zero_pad() {
        ret.push_str(sign);
        ret.extend(core::iter::repeat('0').take(fill));
        ret.push_str(body);
    } else {
        ret.extend(core::iter::repeat(' ').take(fill));
        ret.push_str(sign);
        ret.push_str(body);
    }

    Ok(ret)
}

impl Display for FloatBits {
    /// Formats with the precision, width, `+`, `0`, `-` and `#` flags of the formatter.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let mut ctx = Context::new();
        ctx.precision(f.precision().unwrap_or(DEFAULT_PRECISION))
            .sign_mode(if f.sign_plus() { SignMode::Always } else { SignMode::Negative })
            .width(f.width())
            .zero_pad(f.sign_aware_zero_pad())
            .left_justify(matches!(f.align(), Some(Alignment::Left)))
            .alternate(f.alternate());

        let s = self.format(&ctx).map_err(|_| core::fmt::Error)?;
        f.write_str(&s)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn fixed(f: f64, p: usize) -> String {
        FloatBits::from(f).to_fixed(p).unwrap()
    }

    #[test]
    fn test_format_digits() {
        assert_eq!(fixed(1.0, 6), "1.000000");
        assert_eq!(fixed(12.375, 3), "12.375");
        assert_eq!(fixed(12.375, 1), "12.4");
        assert_eq!(fixed(-0.5, 3), "-0.500");
        assert_eq!(fixed(0.0625, 3), "0.063");
        assert_eq!(fixed(0.1, 20), "0.10000000000000000555");
        assert_eq!(fixed(1200.25, 0), "1200");
        assert_eq!(fixed(4096.0, 2), "4096.00");

        assert_eq!(fixed(0.0, 6), "0.000000");
        assert_eq!(fixed(0.0, 0), "0");
        assert_eq!(fixed(-0.0, 2), "-0.00");

        let s = fixed(f64::MAX, 0);
        assert_eq!(s.len(), 309);
        assert!(s.starts_with("179769313486231570814527423731704356798070"));

        let s = FloatBits::decompose64(1).to_fixed(1074).unwrap();
        assert_eq!(s.len(), 1076);
        assert!(s.starts_with("0.000"));
        assert!(s.ends_with('5'));
        assert_eq!(&s[2 + 323..2 + 327], "4940");

        assert_eq!(FloatBits::from(0.1f32).to_fixed(12).unwrap(), "0.100000001490");
        assert_eq!(FloatBits::decompose16(0x3555).to_fixed(12).unwrap(), "0.333251953125");
        assert_eq!(FloatBits::decompose16(0x7BFF).to_fixed(1).unwrap(), "65504.0");
    }

    #[test]
    fn test_exact_precision() {
        assert_eq!(FloatBits::from(12.375).exact_precision(), 3);
        assert_eq!(FloatBits::from(0.5f32).exact_precision(), 1);
        assert_eq!(FloatBits::from(4096.0).exact_precision(), 0);
        assert_eq!(FloatBits::from(f64::MAX).exact_precision(), 0);
        assert_eq!(FloatBits::from(0.0).exact_precision(), 0);
        assert_eq!(FloatBits::from(f64::INFINITY).exact_precision(), 0);
        assert_eq!(FloatBits::decompose64(1).exact_precision(), 1074);
        assert_eq!(FloatBits::decompose16(1).exact_precision(), 24);
        assert_eq!(FloatBits::from(0.3f32).exact_precision(), 24);

        let x = FloatBits::from(0.1);
        let s = x.to_fixed(x.exact_precision()).unwrap();
        assert_eq!(s, "0.1000000000000000055511151231257827021181583404541015625");
    }

    #[test]
    fn test_format_rounding() {
        assert_eq!(fixed(9.99999951, 6), "10.000000");
        assert_eq!(fixed(9.9999995, 6), "9.999999");
        assert_eq!(fixed(0.96, 1), "1.0");
        assert_eq!(fixed(19.96, 1), "20.0");
        assert_eq!(fixed(99.5, 0), "100");
        assert_eq!(fixed(9.94, 1), "9.9");

        // ties round away from zero
        assert_eq!(fixed(0.5, 0), "1");
        assert_eq!(fixed(1.5, 0), "2");
        assert_eq!(fixed(2.5, 0), "3");
        assert_eq!(fixed(-2.5, 0), "-3");
        assert_eq!(fixed(0.125, 2), "0.13");

        assert_eq!(fixed(0.3, 0), "0");
        assert_eq!(fixed(-999.9996, 3), "-1000.000");
    }

    #[test]
    fn test_format_special() {
        assert_eq!(fixed(f64::INFINITY, 6), "inf");
        assert_eq!(fixed(f64::NEG_INFINITY, 6), "-inf");
        assert_eq!(FloatBits::decompose64(0x7FF8_0000_0000_0000).to_fixed(2).unwrap(), "nan");
        assert_eq!(FloatBits::decompose32(0xFFC0_0000).to_fixed(2).unwrap(), "-nan");

        let mut ctx = Context::new();
        ctx.uppercase(true).width(Some(6)).zero_pad(true).sign_mode(SignMode::Always);
        assert_eq!(FloatBits::from(f64::NEG_INFINITY).format(&ctx).unwrap(), "  -INF");
        assert_eq!(FloatBits::from(f64::INFINITY).format(&ctx).unwrap(), "  +INF");

        assert_eq!(FloatBits::default().to_fixed(6).unwrap_err(), Error::InvalidArgument);
    }

    #[test]
    fn test_format_context() {
        let x = FloatBits::from(3.25);
        let y = FloatBits::from(-3.25);
        let mut ctx = Context::new();
        ctx.precision(2);

        ctx.sign_mode(SignMode::Always);
        assert_eq!(x.format(&ctx).unwrap(), "+3.25");
        assert_eq!(y.format(&ctx).unwrap(), "-3.25");

        ctx.sign_mode(SignMode::Blank);
        assert_eq!(x.format(&ctx).unwrap(), " 3.25");

        ctx.sign_mode(SignMode::Negative).width(Some(8));
        assert_eq!(x.format(&ctx).unwrap(), "    3.25");

        ctx.zero_pad(true);
        assert_eq!(x.format(&ctx).unwrap(), "00003.25");
        assert_eq!(y.format(&ctx).unwrap(), "-0003.25");

        ctx.left_justify(true);
        assert_eq!(y.format(&ctx).unwrap(), "-3.25   ");

        ctx.left_justify(false).zero_pad(false).width(Some(2));
        assert_eq!(y.format(&ctx).unwrap(), "-3.25");

        let mut ctx = Context::new();
        ctx.precision(0).alternate(true);
        assert_eq!(x.format(&ctx).unwrap(), "3.");
        assert_eq!(FloatBits::from(0.0).format(&ctx).unwrap(), "0.");

        let mut ctx = Context::new();
        ctx.precision(2).group_separator(true);
        assert_eq!(FloatBits::from(1234567.5).format(&ctx).unwrap(), "1,234,567.50");
        assert_eq!(FloatBits::from(-123.0).format(&ctx).unwrap(), "-123.00");
        assert_eq!(FloatBits::from(1000.0).format(&ctx).unwrap(), "1,000.00");
        assert_eq!(FloatBits::from(999.999).format(&ctx).unwrap(), "1,000.00");
    }

    #[test]
    fn test_display() {
        let x = FloatBits::from(-3.25);
        assert_eq!(format!("{}", x), "-3.250000");
        assert_eq!(format!("{:.1}", x), "-3.3");
        assert_eq!(format!("{:08.2}", x), "-0003.25");
        assert_eq!(format!("{:<8.2}", x), "-3.25   ");
        assert_eq!(format!("{:+.0}", FloatBits::from(7.5f32)), "+8");
        assert_eq!(format!("{:#.0}", FloatBits::from(7.0f32)), "7.");
        assert_eq!(format!("{:>5}", FloatBits::decompose32(0x7FC0_0000)), "  nan");
    }
}
