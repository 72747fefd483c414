use super::CommandRunner;
use crate::cli::StatusArgs;
use crate::context::Context;
use crate::error::ClientCliError;
use crate::render;

impl CommandRunner for StatusArgs {
    fn run(&self, ctx: &mut Context<'_>) -> Result<(), ClientCliError> {
        let status = ctx.service.get_token_transfer_status(
            self.source,
            &self.service,
            self.task,
            self.blocks,
        )?;
        log::debug!(
            "task {} at {}: source {}, destination {}",
            self.task,
            self.service,
            status.source,
            status.destination
        );

        render::status(ctx.console.out(), self.source, &self.service, self.task, &status)
            .map_err(ClientCliError::Output)
    }
}
