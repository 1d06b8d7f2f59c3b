//! Deserialization of decomposed numbers.
//! Numbers and decimal strings are read as double precision values.

use core::fmt::Formatter;

use crate::FloatBits;
use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

#[cfg(not(feature = "std"))]
use {alloc::format, alloc::string::String};

pub struct FloatBitsVisitor {}

impl<'de> Deserialize<'de> for FloatBits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FloatBitsVisitor {})
    }
}

impl<'de> Visitor<'de> for FloatBitsVisitor {
    type Value = FloatBits;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "expect `String` or `Number`")
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(FloatBits::from(v as f64))
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(FloatBits::from(v as f64))
    }

    fn visit_f32<E: Error>(self, v: f32) -> Result<Self::Value, E> {
        Ok(FloatBits::from(v))
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(FloatBits::from(v))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        match v.parse::<f64>() {
            Ok(f) => Ok(FloatBits::from(f)),
            Err(e) => Err(Error::custom(format!("{e:?}"))),
        }
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}
