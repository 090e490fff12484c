//! HPC CLI - run heat-pump calculations against the backend from a terminal.

use clap::Parser;
use hpc_core::http::{HttpTransport, DEFAULT_BASE_URL};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "hpc-cli",
    version,
    about = "Heat-pump calculator backend client"
)]
struct Cli {
    /// Base URL of the calculation backend
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: hpc_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let transport = HttpTransport::new(&cli.base_url, Duration::from_secs(cli.timeout_secs))?;
    log::info!("using backend {}", transport.base_url());
    let report = hpc_cmd::run(cli.command, &transport).await?;
    print!("{report}");
    Ok(())
}
