use std::fmt;

use super::{Address, Amount, Chain};

/// Status of a transfer on its source blockchain, as reported by the
/// service node. Only a confirmed transfer has on-chain identifiers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceTransfer {
    Accepted,
    Failed,
    Submitted,
    Reverted,
    Confirmed {
        transfer_id: u64,
        transaction_id: String,
    },
}

impl SourceTransfer {
    pub fn name(&self) -> &'static str {
        match self {
            SourceTransfer::Accepted => "ACCEPTED",
            SourceTransfer::Failed => "FAILED",
            SourceTransfer::Submitted => "SUBMITTED",
            SourceTransfer::Reverted => "REVERTED",
            SourceTransfer::Confirmed { .. } => "CONFIRMED",
        }
    }
}

/// Identifiers and validator signatures of a transfer found on the
/// destination blockchain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DestinationDetails {
    pub transfer_id: u64,
    pub transaction_id: String,
    pub validator_nonce: u64,
    /// Index-aligned with `signatures`.
    pub signer_addresses: Vec<Address>,
    pub signatures: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DestinationTransfer {
    Unknown,
    Submitted(DestinationDetails),
    Reverted(DestinationDetails),
    Confirmed(DestinationDetails),
}

impl DestinationTransfer {
    pub fn name(&self) -> &'static str {
        match self {
            DestinationTransfer::Unknown => "UNKNOWN",
            DestinationTransfer::Submitted(_) => "SUBMITTED",
            DestinationTransfer::Reverted(_) => "REVERTED",
            DestinationTransfer::Confirmed(_) => "CONFIRMED",
        }
    }

    pub fn details(&self) -> Option<&DestinationDetails> {
        match self {
            DestinationTransfer::Unknown => None,
            DestinationTransfer::Submitted(d)
            | DestinationTransfer::Reverted(d)
            | DestinationTransfer::Confirmed(d) => Some(d),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferStatus {
    pub sender_address: Address,
    pub recipient_address: Address,
    pub amount: Amount,
    pub source_token_address: Address,
    pub destination_token_address: Address,
    pub destination_blockchain: Chain,
    pub source: SourceTransfer,
    pub destination: DestinationTransfer,
}

impl fmt::Display for SourceTransfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for DestinationTransfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
