use std::path::PathBuf;

use clap::{Args, Subcommand};
use uuid::Uuid;

use crate::types::{
    Address, Amount, Chain, ServicePin, ServicePinError, TokenSymbol, TransferRequest,
};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(about = "Show the balance of your accounts")]
    Balance(BalanceArgs),
    #[command(about = "List the available service node bids")]
    Bids(BidsArgs),
    #[command(about = "Transfer tokens to another account (possibly on another blockchain)")]
    Transfer(TransferArgs),
    #[command(about = "Show the status of a transfer")]
    Status(StatusArgs),
    #[command(about = "Create new empty .env files")]
    CreateConfig(CreateConfigArgs),
}

#[derive(Args, Debug, Clone)]
pub struct BalanceArgs {
    #[arg(
        index = 1,
        value_name = "BLOCKCHAIN",
        help = "Blockchain where your account is located"
    )]
    pub blockchain: Chain,
    #[arg(
        index = 2,
        value_name = "TOKEN",
        help = "Symbol of the Pantos-supported token to show the balance for"
    )]
    pub token: TokenSymbol,
    #[arg(
        short = 'k',
        long,
        value_name = "PATH",
        help = "Path to a keystore file with your encrypted private key (default keystore is used if not provided)"
    )]
    pub keystore: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct BidsArgs {
    #[arg(
        index = 1,
        value_name = "SOURCE",
        help = "Source blockchain (where you hold the tokens to be transferred)"
    )]
    pub source: Chain,
    #[arg(
        index = 2,
        value_name = "DESTINATION",
        help = "Destination blockchain (where the recipient's account is located)"
    )]
    pub destination: Chain,
}

#[derive(Args, Debug, Clone)]
pub struct TransferArgs {
    #[arg(
        index = 1,
        value_name = "SOURCE",
        help = "Source blockchain (where you hold the tokens to be transferred)"
    )]
    pub source: Chain,
    #[arg(
        index = 2,
        value_name = "DESTINATION",
        help = "Destination blockchain (where the recipient's account is located)"
    )]
    pub destination: Chain,
    #[arg(
        index = 3,
        value_name = "RECIPIENT",
        help = "Address of the recipient on the destination blockchain"
    )]
    pub recipient: Address,
    #[arg(
        index = 4,
        value_name = "TOKEN",
        help = "Symbol of the Pantos-supported token to be transferred"
    )]
    pub token: TokenSymbol,
    #[arg(
        index = 5,
        value_name = "AMOUNT",
        help = "Amount of tokens to be transferred to the recipient"
    )]
    pub amount: Amount,
    #[arg(
        short = 'k',
        long,
        value_name = "PATH",
        help = "Path to a keystore file with your encrypted private key (default keystore is used if not provided)"
    )]
    pub keystore: Option<PathBuf>,
    #[arg(
        short = 's',
        long,
        num_args = 2,
        value_names = ["NODE", "BID"],
        action = clap::ArgAction::Set,
        help = "Address and bid ID of the service node on the source blockchain (least expensive service node bid is used if not provided)"
    )]
    pub service: Option<Vec<String>>,
    /// Validated form of `service`, set while parsing.
    #[arg(skip)]
    pub pin: Option<ServicePin>,
    #[arg(
        short = 'y',
        long,
        default_value_t = false,
        help = "Transfer the tokens immediately without prior confirmation"
    )]
    pub yes: bool,
}

impl TransferArgs {
    /// Check the `--service` tokens and keep the resulting pin.
    pub fn resolve_service_pin(&mut self) -> Result<(), ServicePinError> {
        self.pin = self
            .service
            .as_deref()
            .map(ServicePin::from_tokens)
            .transpose()?;
        Ok(())
    }

    pub fn request(&self) -> TransferRequest {
        TransferRequest {
            source: self.source,
            destination: self.destination,
            recipient: self.recipient.clone(),
            token: self.token.clone(),
            amount: self.amount,
            service: self.pin.clone(),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[arg(
        index = 1,
        value_name = "SOURCE",
        help = "The source blockchain of the transfer"
    )]
    pub source: Chain,
    #[arg(
        index = 2,
        value_name = "SERVICE",
        help = "The service node which processed the transfer"
    )]
    pub service: Address,
    #[arg(
        index = 3,
        value_name = "TASK",
        help = "Task ID of the transfer to show the status for"
    )]
    pub task: Uuid,
    #[arg(
        short = 'b',
        long,
        value_name = "N",
        help = "The number of blocks to query for the transfer on the destination blockchain. If not specified, the query will include all blocks from the latest to the genesis block."
    )]
    pub blocks: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct CreateConfigArgs {
    #[arg(
        short = 'p',
        long,
        value_name = "DIR",
        help = "Path where to create the env files, defaults to the current working directory"
    )]
    pub path: Option<PathBuf>,
}
