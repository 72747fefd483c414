use std::{fmt, str::FromStr};

use thiserror::Error;

/// Blockchains supported by the Pantos multi-blockchain token system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Chain {
    Ethereum,
    BnbChain,
    Avalanche,
    Solana,
    Polygon,
    Cronos,
    Fantom,
    Celo,
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown blockchain: {0}")]
pub struct ChainParseError(pub String);

impl Chain {
    pub const ALL: [Chain; 8] = [
        Chain::Ethereum,
        Chain::BnbChain,
        Chain::Avalanche,
        Chain::Solana,
        Chain::Polygon,
        Chain::Cronos,
        Chain::Fantom,
        Chain::Celo,
    ];

    /// Canonical upper snake case name, e.g. `BNB_CHAIN`.
    pub fn name(&self) -> &'static str {
        match self {
            Chain::Ethereum => "ETHEREUM",
            Chain::BnbChain => "BNB_CHAIN",
            Chain::Avalanche => "AVALANCHE",
            Chain::Solana => "SOLANA",
            Chain::Polygon => "POLYGON",
            Chain::Cronos => "CRONOS",
            Chain::Fantom => "FANTOM",
            Chain::Celo => "CELO",
        }
    }

    /// Lower-cased name used on the command line, e.g. `bnb_chain`.
    pub fn key(&self) -> &'static str {
        match self {
            Chain::Ethereum => "ethereum",
            Chain::BnbChain => "bnb_chain",
            Chain::Avalanche => "avalanche",
            Chain::Solana => "solana",
            Chain::Polygon => "polygon",
            Chain::Cronos => "cronos",
            Chain::Fantom => "fantom",
            Chain::Celo => "celo",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Chain {
    type Err = ChainParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chain::ALL
            .into_iter()
            .find(|chain| chain.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChainParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("bnb_chain".parse::<Chain>(), Ok(Chain::BnbChain));
        assert_eq!("BNB_CHAIN".parse::<Chain>(), Ok(Chain::BnbChain));
        assert_eq!("Ethereum".parse::<Chain>(), Ok(Chain::Ethereum));
    }

    #[test]
    fn test_parse_unknown_chain() {
        let err = "bitcoin".parse::<Chain>().unwrap_err();
        assert_eq!(err.to_string(), "unknown blockchain: bitcoin");
    }

    #[test]
    fn test_key_is_lowercased_name() {
        for chain in Chain::ALL {
            assert_eq!(chain.key(), chain.name().to_lowercase());
            assert_eq!(chain.to_string(), chain.name());
        }
    }
}
