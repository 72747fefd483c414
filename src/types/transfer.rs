use thiserror::Error;
use uuid::Uuid;

use super::{Address, Amount, Chain, TokenSymbol};

/// A specific service node bid to execute a transfer with. Without one the
/// transfer service picks the least expensive bid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServicePin {
    pub service_node: String,
    pub bid_id: u64,
}

#[derive(Debug, Error, PartialEq)]
pub enum ServicePinError {
    #[error("expected a service node address and a bid ID, got {0} value(s)")]
    Arity(usize),
    #[error("invalid int value: '{0}'")]
    InvalidBid(String),
}

impl ServicePin {
    /// Builds a pin from the `NODE BID` pair given on the command line. The
    /// node is taken verbatim and the bid must be an integer.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, ServicePinError> {
        match tokens {
            [node, bid] => {
                let bid = bid.as_ref();
                let bid_id = bid
                    .parse::<u64>()
                    .map_err(|_| ServicePinError::InvalidBid(bid.to_string()))?;
                Ok(ServicePin {
                    service_node: node.as_ref().to_string(),
                    bid_id,
                })
            }
            _ => Err(ServicePinError::Arity(tokens.len())),
        }
    }
}

/// Everything the transfer service needs to execute one token transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferRequest {
    pub source: Chain,
    pub destination: Chain,
    pub recipient: Address,
    pub token: TokenSymbol,
    pub amount: Amount,
    pub service: Option<ServicePin>,
}

/// Returned by a service node once it has accepted a transfer request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskInfo {
    pub service_node: Address,
    pub task_id: Uuid,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceNodeBid {
    pub service_node: Address,
    pub source: Chain,
    pub destination: Chain,
    pub bid_id: u64,
    pub fee: Amount,
    /// Seconds.
    pub execution_time: u64,
    pub valid_until: u64,
    pub signature: String,
}
