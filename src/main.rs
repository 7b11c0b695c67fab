#![warn(clippy::pedantic)]

use anyhow::Result;
use billing_smoke::commands::handle_command;
use billing_smoke::state::{State, StateOptions};
use billing_smoke::{utils, CLI};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // setup panic hook
    utils::set_hook();

    let cli = CLI::parse();

    utils::logs(cli.verbose);

    if let Err(error) = run(cli).await {
        log::error!("{error:#}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: CLI) -> Result<()> {
    let state = State::new(StateOptions {
        base_url: cli.base_url,
        timeout: cli.timeout,
    })?;

    handle_command(cli.commands, state).await
}
