use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use thiserror::Error;

/// Exact decimal token quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

#[derive(Debug, Error, PartialEq)]
pub enum AmountError {
    #[error("invalid decimal value: '{0}'")]
    Invalid(String),
    #[error("amount must not be negative: {0}")]
    Negative(String),
}

impl Amount {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        // ".6" shorthand
        let normalized = match raw.strip_prefix('.') {
            Some(fraction) => format!("0.{fraction}"),
            None => raw.to_string(),
        };
        let value = Decimal::from_str(&normalized).map_err(|_| AmountError::Invalid(raw.to_string()))?;
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmountError::Negative(raw.to_string()));
        }
        Ok(Amount(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_dot() {
        let amount: Amount = ".6".parse().unwrap();
        assert_eq!(amount.to_string(), "0.6");
        assert_eq!(amount, "0.6".parse().unwrap());
    }

    #[test]
    fn test_display_keeps_natural_form() {
        assert_eq!("2".parse::<Amount>().unwrap().to_string(), "2");
        assert_eq!("1.5".parse::<Amount>().unwrap().to_string(), "1.5");
        assert_eq!("0.4".parse::<Amount>().unwrap().to_string(), "0.4");
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert_eq!(
            "abc".parse::<Amount>(),
            Err(AmountError::Invalid("abc".to_string()))
        );
        assert!("1.2.3".parse::<Amount>().is_err());
        assert!("".parse::<Amount>().is_err());
    }

    #[test]
    fn test_rejects_negative() {
        assert_eq!(
            "-1".parse::<Amount>(),
            Err(AmountError::Negative("-1".to_string()))
        );
    }
}
