pub mod local;

use std::fmt;

use age::secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use uuid::Uuid;

use crate::types::{
    Address, Amount, Chain, ServiceNodeBid, TaskInfo, TokenSymbol, TransferRequest, TransferStatus,
};

pub use local::LocalService;

/// Decrypted signing key of an account.
#[derive(Clone)]
pub struct PrivateKey(SecretString);

impl PrivateKey {
    pub fn new(secret: SecretString) -> Self {
        Self(secret)
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unable to decrypt the keystore: {0}")]
    Decryption(String),
    #[error("{operation} is not available: {reason}")]
    Unavailable {
        operation: &'static str,
        reason: String,
    },
    #[error("{0}")]
    Request(String),
}

/// Transfer and query operations of the Pantos client library. All calls
/// block until the library has an answer.
pub trait TransferService {
    fn decrypt_private_key(
        &self,
        chain: Chain,
        keystore: &str,
        password: &SecretString,
    ) -> Result<PrivateKey, ServiceError>;

    fn retrieve_token_balance(
        &self,
        chain: Chain,
        private_key: &PrivateKey,
        token: &TokenSymbol,
    ) -> Result<Amount, ServiceError>;

    fn retrieve_service_node_bids(
        &self,
        source: Chain,
        destination: Chain,
    ) -> Result<Vec<ServiceNodeBid>, ServiceError>;

    fn transfer_tokens(
        &self,
        request: &TransferRequest,
        private_key: &PrivateKey,
    ) -> Result<TaskInfo, ServiceError>;

    fn get_token_transfer_status(
        &self,
        source: Chain,
        service_node: &Address,
        task_id: Uuid,
        blocks: Option<u64>,
    ) -> Result<TransferStatus, ServiceError>;
}
