use super::CommandRunner;
use crate::cli::TransferArgs;
use crate::context::Context;
use crate::error::ClientCliError;
use crate::keystore::resolve_private_key;
use crate::render;

pub const CONFIRM_PROMPT: &str = "Are you sure you want to execute this transfer? (no/yes, default: no) ";
const CONFIRMATION: &str = "yes";

impl CommandRunner for TransferArgs {
    fn run(&self, ctx: &mut Context<'_>) -> Result<(), ClientCliError> {
        let request = self.request();

        if !self.yes {
            render::transfer_summary(ctx.console.out(), &request, self.keystore.as_deref())
                .map_err(ClientCliError::Output)?;
            let answer = ctx
                .console
                .read_line(CONFIRM_PROMPT)
                .map_err(ClientCliError::Input)?;
            if answer != CONFIRMATION {
                log::debug!("transfer not confirmed, answer was {answer:?}");
                return writeln!(ctx.console.out(), "\nTransfer aborted")
                    .map_err(ClientCliError::Output);
            }
        }

        let private_key = resolve_private_key(ctx, request.source, self.keystore.as_deref())?;
        let task = ctx.service.transfer_tokens(&request, &private_key)?;
        log::info!(
            "transfer from {} to {} accepted by {} as task {}",
            request.source,
            request.destination,
            task.service_node,
            task.task_id
        );

        render::transfer_receipt(ctx.console.out(), &task).map_err(ClientCliError::Output)
    }
}
