use std::collections::HashMap;

use clap::Parser;

use crate::{
    args::{self, parse_capability, parse_key_values, Capability, KeyValues},
    cli::GlobalArgs,
    config::{Config, Overrides},
    csi::NodeClient,
    logger::Logger,
    publish::{first_capability, Invoker, Template},
};

#[derive(Parser, Debug)]
#[command(override_usage = "csc node publish [OPTIONS] VOLUME_ID [VOLUME_ID...]")]
pub struct Args {
    /// The path from which to bind mount the volume
    #[arg(long)]
    staging_target_path: Option<String>,
    /// The path to which to mount the volume
    #[arg(long)]
    target_path: Option<String>,
    /// Key/value pairs sent as the request's PublishInfo field; may be repeated
    #[arg(long = "pub-info", value_name = "KEY=VAL[,KEY=VAL...]", value_parser = parse_key_values)]
    pub_info: Vec<KeyValues>,
    /// Key/value pairs sent as the request's VolumeAttributes field; may be repeated
    #[arg(long = "attrib", value_name = "KEY=VAL[,KEY=VAL...]", value_parser = parse_key_values)]
    attribs: Vec<KeyValues>,
    /// Volume capability as ACCESS_MODE,ACCESS_TYPE[,FS_TYPE,MOUNT_FLAGS]; only the first is sent
    #[arg(long = "cap", value_name = "CAPABILITY", value_parser = parse_capability)]
    caps: Vec<Capability>,
    /// Mark the volume as read-only
    #[arg(long)]
    read_only: bool,
    /// Marks the request's PublishInfo field as required. Also enables --with-spec-validation
    #[arg(long)]
    with_requires_pub_info: bool,
    /// Marks the request's credentials as required. Also enables --with-spec-validation
    #[arg(long)]
    with_requires_creds: bool,
    /// Marks the request's VolumeAttributes field as required. Also enables --with-spec-validation
    #[arg(long)]
    with_requires_attributes: bool,
    #[arg(required = true, value_name = "VOLUME_ID")]
    volume_ids: Vec<String>,
}

impl Args {
    pub async fn execute(self, global: &GlobalArgs, config: Config, logger: Logger) -> miette::Result<()> {
        let settings = config.settings(Overrides {
            endpoint: global.endpoint.as_deref(),
            timeout: global.timeout,
            creds: &global.creds,
            with_spec_validation: global.with_spec_validation,
            requires_pub_info: self.with_requires_pub_info,
            requires_creds: self.with_requires_creds,
            requires_attributes: self.with_requires_attributes,
        })?;

        let template = self.template(&settings.creds, &logger);
        let channel = settings.endpoint.connect(&logger, settings.timeout).await?;

        let mut stdout = std::io::stdout().lock();
        Invoker::new(NodeClient::new(channel), &settings, &logger)
            .run(&template, &self.volume_ids, &mut stdout)
            .await?;
        Ok(())
    }

    fn template(&self, creds: &HashMap<String, String>, logger: &Logger) -> Template {
        Template {
            staging_target_path: self.staging_target_path.clone().unwrap_or_default(),
            target_path: self.target_path.clone().unwrap_or_default(),
            publish_info: args::merge(&self.pub_info),
            volume_attributes: args::merge(&self.attribs),
            readonly: self.read_only,
            capability: first_capability(&self.caps, logger),
            creds: creds.clone(),
        }
    }
}
