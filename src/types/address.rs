use std::{fmt, str::FromStr};

use thiserror::Error;

/// Blockchain account or contract address. Chain-specific checks are left
/// to the transfer service.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(String);

#[derive(Debug, Error, PartialEq)]
pub enum AddressError {
    #[error("address cannot be empty")]
    Empty,
    #[error("invalid address: {0}")]
    InvalidCharacters(String),
}

impl Address {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(AddressError::Empty);
        }
        if !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AddressError::InvalidCharacters(raw.to_string()));
        }
        Ok(Address(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_case() {
        let raw = "0x2003c848eB0201AA261892081fBC9E4FC559c494";
        let address: Address = raw.parse().unwrap();
        assert_eq!(address.as_str(), raw);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Address>(), Err(AddressError::Empty));
        assert!("0x12 34".parse::<Address>().is_err());
        assert!("0x12;drop".parse::<Address>().is_err());
    }
}
