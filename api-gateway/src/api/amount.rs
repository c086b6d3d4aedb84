//! Request amounts
//!
//! Amounts in request bodies must be JSON numbers. A quoted amount such as
//! `"50"` is rejected instead of being parsed from the string.

use std::fmt;
use std::str::FromStr;

use common::decimal::Amount;
use serde::de::{self, Deserializer, Unexpected, Visitor};

struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = Amount;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON number")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Amount, E> {
        Ok(Amount::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Amount, E> {
        Ok(Amount::from(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Amount, E> {
        Amount::from_str(&value.to_string())
            .map_err(|_| E::invalid_value(Unexpected::Float(value), &self))
    }
}

/// Deserialize an amount from a JSON number only
pub fn deserialize<'de, D>(deserializer: D) -> Result<Amount, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_f64(NumberVisitor)
}
