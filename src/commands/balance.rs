use super::CommandRunner;
use crate::cli::BalanceArgs;
use crate::context::Context;
use crate::error::ClientCliError;
use crate::keystore::resolve_private_key;
use crate::render;

impl CommandRunner for BalanceArgs {
    fn run(&self, ctx: &mut Context<'_>) -> Result<(), ClientCliError> {
        let private_key = resolve_private_key(ctx, self.blockchain, self.keystore.as_deref())?;
        let balance =
            ctx.service
                .retrieve_token_balance(self.blockchain, &private_key, &self.token)?;
        log::debug!("{} balance on {}: {}", self.token, self.blockchain, balance);

        render::balance(ctx.console.out(), self.blockchain, &self.token, &balance)
            .map_err(ClientCliError::Output)
    }
}
