mod publish;

use clap::Parser;

use super::GlobalArgs;
use crate::{config::Config, logger::Logger};

/// Node service RPCs
#[derive(Parser)]
pub struct Args {
    #[clap(subcommand)]
    subcommand: Subcommand,
}

#[derive(Parser)]
pub enum Subcommand {
    /// Invokes the rpc "NodePublishVolume"
    #[command(visible_aliases = ["mnt", "mount"])]
    Publish(publish::Args),
}

impl Args {
    pub async fn execute(self, global: &GlobalArgs, config: Config, logger: Logger) -> miette::Result<()> {
        match self.subcommand {
            Subcommand::Publish(args) => args.execute(global, config, logger).await,
        }
    }
}
