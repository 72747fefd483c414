//! Fixed-layout text output of the client commands. Other tooling parses
//! these layouts, so columns are separated by tabs and headers never change.

use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

use uuid::Uuid;

use crate::types::{
    Address, Amount, Chain, ServiceNodeBid, SourceTransfer, TaskInfo, TokenSymbol, TransferRequest,
    TransferStatus,
};

const BIDS_RULE: &str = "=====================================================================";
const DEFAULT_KEYSTORE: &str = "default (from configuration)";
const DEFAULT_BID: &str = "default (lowest fee)";

pub fn balance(
    out: &mut dyn Write,
    chain: Chain,
    token: &TokenSymbol,
    amount: &Amount,
) -> io::Result<()> {
    writeln!(out, "Your {token} token balance on {chain}:\n{amount}")
}

pub fn bids(
    out: &mut dyn Write,
    source: Chain,
    destination: Chain,
    bids: &[ServiceNodeBid],
) -> io::Result<()> {
    writeln!(
        out,
        "Pantos service node bids for token transfers from the\n\
         source blockchain {source} to the destination blockchain {destination}:\n"
    )?;
    writeln!(out, "Service node\t\t\t\t\tTime\tFee")?;
    writeln!(out, "\t\t\t\t\t\t(s)\t(PAN)")?;
    writeln!(out, "{BIDS_RULE}")?;
    for bid in bids {
        writeln!(out, "{}\t{}\t{}", bid.service_node, bid.execution_time, bid.fee)?;
    }
    Ok(())
}

/// Summary shown before asking the user to confirm a transfer.
pub fn transfer_summary(
    out: &mut dyn Write,
    request: &TransferRequest,
    keystore: Option<&Path>,
) -> io::Result<()> {
    let source = request.source;
    let destination = request.destination;
    let keystore = keystore
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| DEFAULT_KEYSTORE.to_string());
    let (node, bid) = match &request.service {
        Some(pin) => (pin.service_node.clone(), pin.bid_id.to_string()),
        None => (DEFAULT_BID.to_string(), DEFAULT_BID.to_string()),
    };

    writeln!(out, "New Pantos transfer:\n")?;
    writeln!(out, "Source blockchain:\t{source}")?;
    writeln!(out, "Destination blockchain:\t{destination}")?;
    writeln!(out, "Recipient ({destination}):\t{}", request.recipient)?;
    writeln!(out, "Token symbol:\t\t{}", request.token)?;
    writeln!(out, "Amount:\t\t\t{}", request.amount)?;
    writeln!(out, "Keystore ({source}):\t{keystore}")?;
    writeln!(out, "Service node:\t\t{node}")?;
    writeln!(out, "Service node bid:\t{bid}\n")
}

pub fn transfer_receipt(out: &mut dyn Write, task: &TaskInfo) -> io::Result<()> {
    writeln!(
        out,
        "\nThe service node {}\naccepted the transfer request and returned\nthe following task ID: {}",
        task.service_node, task.task_id
    )
}

pub fn status(
    out: &mut dyn Write,
    source: Chain,
    service_node: &Address,
    task_id: Uuid,
    status: &TransferStatus,
) -> io::Result<()> {
    writeln!(out, "Transfer status:\n")?;
    writeln!(out, "Service node address:\t\t{service_node}")?;
    writeln!(out, "Service node task ID:\t\t{task_id}\n")?;
    writeln!(out, "Sender address:\t\t\t{}", status.sender_address)?;
    writeln!(out, "Recipient address:\t\t{}", status.recipient_address)?;
    writeln!(out, "Token amount:\t\t\t{}", status.amount)?;
    writeln!(out, "Source token address:\t\t{}", status.source_token_address)?;
    writeln!(
        out,
        "Destination token address:\t{}\n",
        status.destination_token_address
    )?;

    writeln!(out, "Source blockchain:\t\t{source}")?;
    writeln!(out, "Source transfer status:\t\t{}", status.source)?;
    if let SourceTransfer::Confirmed {
        transfer_id,
        transaction_id,
    } = &status.source
    {
        writeln!(out, "Source transfer ID:\t\t{transfer_id}")?;
        writeln!(out, "Source transaction ID:\t\t{transaction_id}")?;
    }
    writeln!(out)?;

    writeln!(out, "Destination blockchain:\t\t{}", status.destination_blockchain)?;
    writeln!(out, "Destination transfer status:\t{}", status.destination)?;
    if let Some(details) = status.destination.details() {
        writeln!(out, "Destination transfer ID:\t{}", details.transfer_id)?;
        writeln!(out, "Destination transaction ID:\t{}", details.transaction_id)?;
        writeln!(out, "Validator nonce:\t\t{}", details.validator_nonce)?;
        writeln!(out, "Signer addresses:\t\t{}", list(&details.signer_addresses))?;
        writeln!(out, "Signatures:\t\t\t{}", list(&details.signatures))?;
    }
    Ok(())
}

fn list<T: Display>(items: &[T]) -> String {
    let items: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
