pub mod commands;
pub mod config;
pub mod state;
pub mod utils;

use clap::Parser;
use commands::Commands;
use config::DEFAULT_BASE_URL;

#[derive(Debug, Parser)]
#[clap(
    name = "billing-smoke",
    about = "🧾 Smoke check a local billing API from your terminal",
    version
)]
pub struct CLI {
    #[clap(subcommand)]
    pub commands: Option<Commands>,

    #[clap(
        short = 'u',
        long = "base-url",
        env = "BILLING_API_URL",
        default_value = DEFAULT_BASE_URL,
        help = "Base URL of the billing API",
        global = true
    )]
    pub base_url: String,

    #[clap(
        short = 't',
        long = "timeout",
        help = "Seconds to wait for each response, waits forever if not set",
        global = true
    )]
    pub timeout: Option<u64>,

    #[clap(
        short = 'v',
        long = "verbose",
        help = "Print more information",
        global = true
    )]
    pub verbose: bool,
}
