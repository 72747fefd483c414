use std::{fmt, str::FromStr};

use thiserror::Error;

const MAX_SYMBOL_LEN: usize = 10;

/// Symbol of a Pantos-supported token, always stored upper-cased.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TokenSymbol(String);

#[derive(Debug, Error, PartialEq)]
pub enum TokenSymbolError {
    #[error("token symbol cannot be empty")]
    Empty,
    #[error("token symbol too long: {0} characters (at most {MAX_SYMBOL_LEN})")]
    TooLong(usize),
    #[error("token symbol must be alphanumeric: {0}")]
    InvalidCharacters(String),
}

impl TokenSymbol {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TokenSymbol {
    type Err = TokenSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(TokenSymbolError::Empty);
        }
        if raw.len() > MAX_SYMBOL_LEN {
            return Err(TokenSymbolError::TooLong(raw.len()));
        }
        if !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(TokenSymbolError::InvalidCharacters(raw.to_string()));
        }
        Ok(TokenSymbol(raw.to_ascii_uppercase()))
    }
}
