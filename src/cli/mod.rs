mod node;

use std::time::Duration;

use clap::Parser;

use crate::{
    args::{parse_duration, parse_key_values, KeyValues},
    config::Config,
    logger::Logger,
};

/// A command line client for Container Storage Interface plugins
#[derive(Parser)]
#[command(name = "csc", version)]
pub struct Args {
    #[command(flatten)]
    global: GlobalArgs,
    #[clap(subcommand)]
    subcommand: Subcommand,
}

// flags shared by every RPC command
#[derive(Parser, Debug)]
pub struct GlobalArgs {
    /// The CSI endpoint, e.g. unix:///var/run/csi.sock or tcp://127.0.0.1:10000
    #[arg(long, global = true, env = "CSI_ENDPOINT")]
    pub endpoint: Option<String>,
    /// How long to wait for each RPC (e.g. 500ms, 30s, 1m)
    #[arg(long, global = true, value_parser = parse_duration)]
    pub timeout: Option<Duration>,
    /// Credentials sent with requests that carry secrets, as key=val[,key=val...]
    #[arg(long, global = true, value_name = "KEY=VAL", value_parser = parse_key_values)]
    pub creds: Vec<KeyValues>,
    /// Validate requests against the CSI spec before sending them
    #[arg(long, global = true)]
    pub with_spec_validation: bool,
    /// Log requests and connection details to stderr
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Parser)]
pub enum Subcommand {
    Node(node::Args),
}

impl Args {
    pub async fn execute(self, config: Config, logger: Logger) -> miette::Result<()> {
        if self.global.debug {
            logger.enable_trace();
        }
        match self.subcommand {
            Subcommand::Node(args) => args.execute(&self.global, config, logger).await,
        }
    }
}
