use crate::cli::Cli;
use crate::context::Context;

pub const SUCCESS: u8 = 0;
pub const FAILURE: u8 = 1;

/// Run one parsed command. Failures become a single line on the console
/// and [`FAILURE`]; in debug mode they are returned to the caller instead.
pub fn execute(cli: &Cli, ctx: &mut Context<'_>) -> anyhow::Result<u8> {
    log::debug!("running {:?}", cli.command);
    match cli.command.run(ctx) {
        Ok(()) => Ok(SUCCESS),
        Err(e) if ctx.config.debug => Err(e.into()),
        Err(e) => {
            log::debug!("command failed: {e:?}");
            writeln!(ctx.console.out(), "{e}")?;
            Ok(FAILURE)
        }
    }
}
