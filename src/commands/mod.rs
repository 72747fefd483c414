use crate::cli::Command;
use crate::context::Context;
use crate::error::ClientCliError;

pub mod balance;
pub mod bids;
pub mod create_config;
pub mod status;
pub mod transfer;

pub trait CommandRunner {
    fn run(&self, ctx: &mut Context<'_>) -> Result<(), ClientCliError>;
}

impl Command {
    pub fn run(&self, ctx: &mut Context<'_>) -> Result<(), ClientCliError> {
        match self {
            Command::Balance(args) => args.run(ctx),
            Command::Bids(args) => args.run(ctx),
            Command::Transfer(args) => args.run(ctx),
            Command::Status(args) => args.run(ctx),
            Command::CreateConfig(args) => args.run(ctx),
        }
    }
}
