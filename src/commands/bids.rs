use super::CommandRunner;
use crate::cli::BidsArgs;
use crate::context::Context;
use crate::error::ClientCliError;
use crate::render;

impl CommandRunner for BidsArgs {
    fn run(&self, ctx: &mut Context<'_>) -> Result<(), ClientCliError> {
        let bids = ctx
            .service
            .retrieve_service_node_bids(self.source, self.destination)?;
        log::debug!(
            "{} bids from {} to {}",
            bids.len(),
            self.source,
            self.destination
        );

        render::bids(ctx.console.out(), self.source, self.destination, &bids)
            .map_err(ClientCliError::Output)
    }
}
