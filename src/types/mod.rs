mod address;
mod amount;
mod chain;
mod status;
mod token;
mod transfer;

pub use address::{Address, AddressError};
pub use amount::{Amount, AmountError};
pub use chain::{Chain, ChainParseError};
pub use status::{DestinationDetails, DestinationTransfer, SourceTransfer, TransferStatus};
pub use token::{TokenSymbol, TokenSymbolError};
pub use transfer::{ServiceNodeBid, ServicePin, ServicePinError, TaskInfo, TransferRequest};
