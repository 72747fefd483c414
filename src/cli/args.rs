use std::ffi::OsString;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::error::ErrorKind;
use clap::{CommandFactory, FromArgMatches, Parser};

use crate::cli::command::Command;
use crate::configuration::Configuration;
use crate::types::Chain;

#[derive(Parser, Debug)]
#[command(
    name = "pantos-client",
    version,
    about = "Client for interacting with the Pantos multi-blockchain token system.",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

fn chain_parser(active: &[Chain]) -> impl TypedValueParser<Value = Chain> {
    let keys: Vec<&'static str> = active.iter().map(|chain| chain.key()).collect();
    PossibleValuesParser::new(keys).try_map(|key| key.parse::<Chain>())
}

fn restrict_chains(cmd: clap::Command, args: &[&str], active: &[Chain]) -> clap::Command {
    args.iter().fold(cmd, |cmd, arg| {
        cmd.mut_arg(*arg, |a| a.value_parser(chain_parser(active)))
    })
}

/// The full grammar, with every chain argument restricted to `active`.
pub fn command(active: &[Chain]) -> clap::Command {
    Cli::command()
        .mut_subcommand("balance", |c| restrict_chains(c, &["blockchain"], active))
        .mut_subcommand("bids", |c| restrict_chains(c, &["source", "destination"], active))
        .mut_subcommand("transfer", |c| {
            restrict_chains(c, &["source", "destination"], active)
        })
        .mut_subcommand("status", |c| restrict_chains(c, &["source"], active))
}

pub fn try_parse_from<I, T>(args: I, active: &[Chain]) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut cmd = command(active);
    let matches = cmd.try_get_matches_from_mut(args)?;
    let mut cli = Cli::from_arg_matches(&matches).map_err(|e| e.format(&mut cmd))?;

    if let Command::Transfer(transfer) = &mut cli.command {
        transfer
            .resolve_service_pin()
            .map_err(|e| cmd.error(ErrorKind::ValueValidation, e))?;
    }
    Ok(cli)
}

/// Parse the process arguments, exiting with a usage message on failure.
pub fn parse(config: &Configuration) -> Cli {
    try_parse_from(std::env::args_os(), &config.active_chains()).unwrap_or_else(|e| e.exit())
}
