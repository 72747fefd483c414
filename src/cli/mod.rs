mod args;
mod command;

pub use args::{command, parse, try_parse_from, Cli};
pub use command::{
    BalanceArgs, BidsArgs, Command, CreateConfigArgs, StatusArgs, TransferArgs,
};
