pub mod all;
pub mod billing;
pub mod completions;
pub mod hello;

use anyhow::Result;
use clap::Subcommand;

use self::billing::{checkout, customer};
use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(alias = "root")]
    Hello(hello::Options),
    #[clap(alias = "customer")]
    CreateCustomer(customer::Options),
    #[clap(alias = "checkout")]
    CreateCheckoutSession(checkout::Options),
    All(all::Options),
    Completions(completions::Options),
}

/// Without a subcommand only the checkout session check runs.
pub fn resolve(command: Option<Commands>) -> Commands {
    command.unwrap_or_else(|| Commands::CreateCheckoutSession(checkout::Options::default()))
}

pub async fn handle_command(command: Option<Commands>, state: State) -> Result<()> {
    match resolve(command) {
        Commands::Hello(options) => hello::handle(&options, &state).await,
        Commands::CreateCustomer(options) => customer::handle(&options, &state).await,
        Commands::CreateCheckoutSession(options) => checkout::handle(&options, &state).await,
        Commands::All(options) => all::handle(&options, &state).await,
        Commands::Completions(options) => {
            completions::handle(&options);

            Ok(())
        }
    }
}
