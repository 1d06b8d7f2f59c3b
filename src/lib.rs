//! Exact decomposition and fixed point decimal printing of IEEE-754 binary numbers.
//!
//! Half, single and double precision numbers are split into sign, exponent and mantissa,
//! the mantissa is distributed into an integer and a fractional wide accumulator, and decimal
//! digits are extracted from the accumulators by repeated division and multiplication by 10.
//! Every digit printed is exact, rounding happens only at the last requested digit.
//!
//! Characteristics:
//!
//! | Name                                 | Value  |
//! |:-------------------------------------|-------:|
//! | Accumulator capacity, bits           |   1088 |
//! | Accumulator chunk size, bits         |     32 |
//! | Integer digits of the largest double |    309 |
//! | Digits of the smallest double        |   1074 |
//!
//! ## Examples
//!
//! ``` rust
//! use fpprint::{Classification, Context, DigitLayout, FloatBits};
//!
//! let fb = FloatBits::from(9.99999951f64);
//! let layout = DigitLayout::analyze(&fb, 6).unwrap();
//!
//! assert_eq!(layout.get_classification(), Classification::RoundedUpADigit);
//! assert_eq!(layout.get_last_non_zero_int_digit(), 2);
//! assert_eq!(fb.to_fixed(6).unwrap(), "10.000000");
//!
//! let mut ctx = Context::new();
//! ctx.precision(2).width(Some(10)).zero_pad(true);
//! assert_eq!(FloatBits::from(-3.25f32).format(&ctx).unwrap(), "-000003.25");
//! ```
//!
//! The library can be used without the standard library.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(clippy::suspicious)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod bits;
mod common;
mod conv;
mod ctx;
mod defs;
mod format;
mod layout;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::bits::FloatBits;
pub use crate::bits::FloatFormat;
pub use crate::common::int::WideAccumulator;
pub use crate::conv::accumulator_bits_needed;
pub use crate::conv::separate_integer_fraction;
pub use crate::conv::FractionDigits;
pub use crate::conv::IntegerDigits;
pub use crate::ctx::Context;
pub use crate::ctx::SignMode;
pub use crate::defs::DoubleWord;
pub use crate::defs::Error;
pub use crate::defs::Sign;
pub use crate::defs::Word;
pub use crate::layout::Classification;
pub use crate::layout::DigitLayout;

pub use crate::defs::ACCUMULATOR_BIT_SIZE;
pub use crate::defs::ACCUMULATOR_WORDS;
pub use crate::defs::DEFAULT_PRECISION;
pub use crate::defs::WORD_BASE;
pub use crate::defs::WORD_BIT_SIZE;
pub use crate::defs::WORD_MAX;
pub use crate::layout::SPECIAL_TEXT_LOWER;
pub use crate::layout::SPECIAL_TEXT_UPPER;
