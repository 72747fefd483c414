use std::process::ExitCode;

use pantos_client_cli::configuration::Configuration;
use pantos_client_cli::console::StdConsole;
use pantos_client_cli::context::Context;
use pantos_client_cli::service::LocalService;
use pantos_client_cli::{app, cli, tracing};

fn main() -> anyhow::Result<ExitCode> {
    let config = match Configuration::load() {
        Ok(config) => config,
        Err(e) => {
            println!("unable to load the configuration: {e}");
            return Ok(ExitCode::from(app::FAILURE));
        }
    };
    tracing::init(&config);

    let cli = cli::parse(&config);
    let service = LocalService::new();
    let mut console = StdConsole::new();
    let mut ctx = Context::new(&config, &service, &mut console);

    let code = app::execute(&cli, &mut ctx)?;
    Ok(ExitCode::from(code))
}
