//! Command-line configuration.

mod server;

use clap::Parser;

pub use server::ServerConfig;

/// Command-line arguments for the Flowra server.
#[derive(Debug, Parser)]
#[command(name = "flowra", version, about)]
pub struct Cli {
    /// HTTP server configuration.
    #[command(flatten)]
    pub server: ServerConfig,

    /// Seeds the in-memory store with demo workflows and runs.
    #[arg(long, env = "SEED_DEMO_DATA", default_value_t = false)]
    pub seed: bool,
}
