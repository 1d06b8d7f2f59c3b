//! Serialization of decomposed numbers and their digit layouts.
//! A number serializes to its exact decimal representation.

use crate::layout::Classification;
use crate::layout::DigitLayout;
use crate::FloatBits;
use serde::ser::Error;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

#[cfg(not(feature = "std"))]
use alloc::format;

impl Serialize for FloatBits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_fixed(self.exact_precision()) {
            Ok(s) => serializer.serialize_str(&s),
            Err(e) => Err(Error::custom(format!("{e:?}"))),
        }
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (idx, name) = match self {
            Classification::Zero => (0, "Zero"),
            Classification::Normal => (1, "Normal"),
            Classification::RoundedUpAtEnd => (2, "RoundedUpAtEnd"),
            Classification::RoundedUpADigit => (3, "RoundedUpADigit"),
            Classification::PositiveInfinity => (4, "PositiveInfinity"),
            Classification::NegativeInfinity => (5, "NegativeInfinity"),
            Classification::PositiveNaN => (6, "PositiveNaN"),
            Classification::NegativeNaN => (7, "NegativeNaN"),
            Classification::SignalingNaN => (8, "SignalingNaN"),
            Classification::QuietNaN => (9, "QuietNaN"),
            Classification::IndefiniteNaN => (10, "IndefiniteNaN"),
        };
        serializer.serialize_unit_variant("Classification", idx, name)
    }
}

impl Serialize for DigitLayout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("DigitLayout", 8)?;
        st.serialize_field("has_integer", &self.has_integer())?;
        st.serialize_field("has_fractional", &self.has_fractional())?;
        st.serialize_field("special_digit_count", &self.get_special_digit_count())?;
        st.serialize_field("first_non_zero_int_digit", &self.get_first_non_zero_int_digit())?;
        st.serialize_field("last_non_zero_int_digit", &self.get_last_non_zero_int_digit())?;
        st.serialize_field("first_non_zero_frac_digit", &self.get_first_non_zero_frac_digit())?;
        st.serialize_field("last_non_zero_frac_digit", &self.get_last_non_zero_frac_digit())?;
        st.serialize_field("classification", &self.get_classification())?;
        st.end()
    }
}
