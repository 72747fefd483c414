use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::PathBuf;

use age::secrecy::SecretString;
use clap::builder::{BoolishValueParser, TypedValueParser};
use thiserror::Error;

use crate::types::Chain;

pub const DOTENV_PATH_VAR: &str = "DOTENV_PATH";
pub const DEFAULT_DOTENV_PATH: &str = "client-cli.env";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid boolean value for {key}: '{value}'")]
    InvalidBool { key: String, value: String },
    #[error("{key} is set but {required} is missing")]
    MissingKeystoreFile { key: String, required: String },
    #[error("invalid env file {path}: {message}")]
    EnvFile { path: String, message: String },
}

#[derive(Clone, Debug)]
pub struct KeystoreConfig {
    pub file: PathBuf,
    pub password: Option<SecretString>,
}

#[derive(Clone, Debug)]
pub struct BlockchainConfig {
    pub active: bool,
    pub keystore: Option<KeystoreConfig>,
}

impl Default for BlockchainConfig {
    fn default() -> Self {
        Self {
            active: true,
            keystore: None,
        }
    }
}

/// Process-wide client configuration, loaded once at startup.
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub debug: bool,
    pub log_file: Option<PathBuf>,
    pub blockchains: BTreeMap<Chain, BlockchainConfig>,
}

impl Configuration {
    /// Load the dotenv file named by `DOTENV_PATH` (default
    /// `client-cli.env`) into the environment, then read the configuration
    /// from it. Variables already set in the environment take precedence.
    pub fn load() -> Result<Self, ConfigError> {
        let dotenv_path =
            std::env::var(DOTENV_PATH_VAR).unwrap_or_else(|_| DEFAULT_DOTENV_PATH.into());
        match dotenvy::from_filename(&dotenv_path) {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(ConfigError::EnvFile {
                    path: dotenv_path,
                    message: e.to_string(),
                })
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup. Empty
    /// values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let debug = parse_bool("APPLICATION_DEBUG", get("APPLICATION_DEBUG"))?.unwrap_or(false);
        let log_file = get("APPLICATION_LOG_FILE").map(PathBuf::from);

        let mut blockchains = BTreeMap::new();
        for chain in Chain::ALL {
            let prefix = format!("BLOCKCHAINS_{}", chain.name());
            let active_key = format!("{prefix}_ACTIVE");
            let file_key = format!("{prefix}_KEYSTORE_FILE");
            let password_key = format!("{prefix}_KEYSTORE_PASSWORD");

            let active = parse_bool(&active_key, get(&active_key))?.unwrap_or(true);
            let password = get(&password_key).map(SecretString::from);
            let keystore = match get(&file_key) {
                Some(file) => Some(KeystoreConfig {
                    file: PathBuf::from(file),
                    password,
                }),
                None if password.is_some() => {
                    return Err(ConfigError::MissingKeystoreFile {
                        key: password_key,
                        required: file_key,
                    })
                }
                None => None,
            };
            blockchains.insert(chain, BlockchainConfig { active, keystore });
        }

        Ok(Self {
            debug,
            log_file,
            blockchains,
        })
    }

    pub fn blockchain(&self, chain: Chain) -> BlockchainConfig {
        self.blockchains.get(&chain).cloned().unwrap_or_default()
    }

    pub fn keystore(&self, chain: Chain) -> Option<&KeystoreConfig> {
        self.blockchains
            .get(&chain)
            .and_then(|blockchain| blockchain.keystore.as_ref())
    }

    /// Active blockchains, sorted by their command line name.
    pub fn active_chains(&self) -> Vec<Chain> {
        let mut chains: Vec<Chain> = Chain::ALL
            .into_iter()
            .filter(|chain| self.blockchain(*chain).active)
            .collect();
        chains.sort_by_key(|chain| chain.key());
        chains
    }
}

fn parse_bool(key: &str, value: Option<String>) -> Result<Option<bool>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let cmd = clap::Command::new("configuration");
    BoolishValueParser::new()
        .parse_ref(&cmd, None, OsStr::new(value.trim()))
        .map(Some)
        .map_err(|_| ConfigError::InvalidBool {
            key: key.to_string(),
            value,
        })
}
