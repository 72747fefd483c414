use std::io::Read;

use age::secrecy::SecretString;
use age::{scrypt, Decryptor};
use uuid::Uuid;

use super::{PrivateKey, ServiceError, TransferService};
use crate::types::{
    Address, Amount, Chain, ServiceNodeBid, TaskInfo, TokenSymbol, TransferRequest, TransferStatus,
};

const UNLINKED: &str = "no Pantos client library is linked into this build";

/// Transfer service that works without network access. It unlocks
/// age-encrypted keystores and reports every operation that needs a
/// blockchain or a service node as unavailable.
///
/// A keystore file holds the hex encoding of an age ciphertext protected by
/// a passphrase; the plaintext is the hex encoded private key.
#[derive(Debug, Default)]
pub struct LocalService;

impl LocalService {
    pub fn new() -> Self {
        Self
    }

    fn unavailable<T>(operation: &'static str) -> Result<T, ServiceError> {
        Err(ServiceError::Unavailable {
            operation,
            reason: UNLINKED.to_string(),
        })
    }
}

fn decryption(message: impl Into<String>) -> ServiceError {
    ServiceError::Decryption(message.into())
}

impl TransferService for LocalService {
    fn decrypt_private_key(
        &self,
        chain: Chain,
        keystore: &str,
        password: &SecretString,
    ) -> Result<PrivateKey, ServiceError> {
        let ciphertext = hex::decode(keystore.trim())
            .map_err(|e| decryption(format!("keystore is not hex encoded ({e})")))?;

        let decryptor = Decryptor::new(&ciphertext[..])
            .map_err(|e| decryption(format!("keystore is not an age file ({e})")))?;
        if !decryptor.is_scrypt() {
            return Err(decryption("keystore is not passphrase protected"));
        }
        let identity = scrypt::Identity::new(password.clone());
        let mut reader = decryptor
            .decrypt(std::iter::once(&identity as &dyn age::Identity))
            .map_err(|e| decryption(e.to_string()))?;
        let mut plaintext = Vec::new();
        reader
            .read_to_end(&mut plaintext)
            .map_err(|e| decryption(e.to_string()))?;

        let key = String::from_utf8(plaintext)
            .map_err(|_| decryption("private key is not valid utf-8"))?;
        let key = key.trim().trim_start_matches("0x");
        if key.is_empty() || hex::decode(key).is_err() {
            return Err(decryption("private key is not hex encoded"));
        }
        log::debug!("decrypted {} keystore", chain);
        Ok(PrivateKey::new(SecretString::from(key.to_string())))
    }

    fn retrieve_token_balance(
        &self,
        _chain: Chain,
        _private_key: &PrivateKey,
        _token: &TokenSymbol,
    ) -> Result<Amount, ServiceError> {
        Self::unavailable("token balance retrieval")
    }

    fn retrieve_service_node_bids(
        &self,
        _source: Chain,
        _destination: Chain,
    ) -> Result<Vec<ServiceNodeBid>, ServiceError> {
        Self::unavailable("service node bid retrieval")
    }

    fn transfer_tokens(
        &self,
        _request: &TransferRequest,
        _private_key: &PrivateKey,
    ) -> Result<TaskInfo, ServiceError> {
        Self::unavailable("token transfer")
    }

    fn get_token_transfer_status(
        &self,
        _source: Chain,
        _service_node: &Address,
        _task_id: Uuid,
        _blocks: Option<u64>,
    ) -> Result<TransferStatus, ServiceError> {
        Self::unavailable("token transfer status retrieval")
    }
}
