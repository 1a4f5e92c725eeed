use clap::Parser;
use logger::Logger;
use utils::IntoDiagnosticShorthand;

mod args;
mod cli;
mod config;
mod csi;
mod error;
mod logger;
mod publish;
mod utils;

#[tokio::main(flavor = "current_thread")]
async fn main() -> miette::Result<()> {
    let logger = Logger::new();
    let args = cli::Args::parse();
    let config = config::load().d()?;
    args.execute(config, logger).await
}
