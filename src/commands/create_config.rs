use std::fs;
use std::path::PathBuf;

use super::CommandRunner;
use crate::cli::CreateConfigArgs;
use crate::context::Context;
use crate::error::ClientCliError;

const CLIENT_CLI_ENV: (&str, &str) = (
    "client-cli.env",
    include_str!("../../resources/client-cli.env"),
);
const CLIENT_LIBRARY_ENV: (&str, &str) = (
    "client-library.env",
    include_str!("../../resources/client-library.env"),
);

impl CommandRunner for CreateConfigArgs {
    fn run(&self, ctx: &mut Context<'_>) -> Result<(), ClientCliError> {
        let dir = match &self.path {
            Some(path) => path.clone(),
            None => std::env::current_dir().map_err(|source| ClientCliError::CreateConfig {
                path: PathBuf::from("."),
                source,
            })?,
        };
        let failed = |source| ClientCliError::CreateConfig {
            path: dir.clone(),
            source,
        };

        fs::create_dir_all(&dir).map_err(failed)?;
        for (name, template) in [CLIENT_CLI_ENV, CLIENT_LIBRARY_ENV] {
            let path = dir.join(name);
            fs::write(&path, template).map_err(failed)?;
            log::debug!("wrote {}", path.display());
        }

        writeln!(ctx.console.out(), "Created .env files in {}", dir.display())
            .map_err(ClientCliError::Output)
    }
}
