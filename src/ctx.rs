//! Formatting parameters.

use crate::defs::DEFAULT_PRECISION;

/// How the sign of a non-negative number is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignMode {
    /// Only negative numbers get a sign.
    Negative,

    /// Non-negative numbers get a `+`.
    Always,

    /// Non-negative numbers get a blank.
    Blank,
}

/// Context contains the parameters of fixed point formatting.
/// The default context prints 6 fractional digits with no padding, like `%f`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    precision: usize,
    sign_mode: SignMode,
    uppercase: bool,
    group_separator: bool,
    width: Option<usize>,
    zero_pad: bool,
    left_justify: bool,
    alternate: bool,
}

impl Context {
    /// Create a new context with default parameters.
    pub fn new() -> Self {
        Context {
            precision: DEFAULT_PRECISION,
            sign_mode: SignMode::Negative,
            uppercase: false,
            group_separator: false,
            width: None,
            zero_pad: false,
            left_justify: false,
            alternate: false,
        }
    }

    /// Sets the number of fractional digits.
    pub fn precision(&mut self, p: usize) -> &mut Self {
        self.precision = p;
        self
    }

    /// Sets how the sign of non-negative numbers is printed.
    pub fn sign_mode(&mut self, sign_mode: SignMode) -> &mut Self {
        self.sign_mode = sign_mode;
        self
    }

    /// Print special values in upper case.
    pub fn uppercase(&mut self, uppercase: bool) -> &mut Self {
        self.uppercase = uppercase;
        self
    }

    /// Separate groups of three integer digits with commas.
    pub fn group_separator(&mut self, group_separator: bool) -> &mut Self {
        self.group_separator = group_separator;
        self
    }

    /// Sets the minimum field width.
    pub fn width(&mut self, width: Option<usize>) -> &mut Self {
        self.width = width;
        self
    }

    /// Pad to the field width with zeros after the sign instead of leading blanks.
    pub fn zero_pad(&mut self, zero_pad: bool) -> &mut Self {
        self.zero_pad = zero_pad;
        self
    }

    /// Pad to the field width with trailing blanks.
    pub fn left_justify(&mut self, left_justify: bool) -> &mut Self {
        self.left_justify = left_justify;
        self
    }

    /// Always print the decimal point.
    pub fn alternate(&mut self, alternate: bool) -> &mut Self {
        self.alternate = alternate;
        self
    }

    /// Returns the number of fractional digits.
    pub fn get_precision(&self) -> usize {
        self.precision
    }

    /// Returns how the sign of non-negative numbers is printed.
    pub fn get_sign_mode(&self) -> SignMode {
        self.sign_mode
    }

    /// Returns true if special values are printed in upper case.
    pub fn get_uppercase(&self) -> bool {
        self.uppercase
    }

    /// Returns true if integer digits are grouped.
    pub fn get_group_separator(&self) -> bool {
        self.group_separator
    }

    /// Returns the minimum field width.
    pub fn get_width(&self) -> Option<usize> {
        self.width
    }

    /// Returns true if zeros pad the number to the field width.
    /// Left justification and digit grouping turn zero padding off.
    pub fn get_zero_pad(&self) -> bool {
        self.zero_pad && !self.left_justify && !self.group_separator
    }

    /// Returns true if the number is padded with trailing blanks.
    pub fn get_left_justify(&self) -> bool {
        self.left_justify
    }

    /// Returns true if the decimal point is always printed.
    pub fn get_alternate(&self) -> bool {
        self.alternate
    }

    /// Returns true if the decimal point is printed.
    pub fn has_decimal_point(&self) -> bool {
        self.precision > 0 || self.alternate
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new()
    }
}
