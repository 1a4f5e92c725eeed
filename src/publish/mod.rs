// one NodePublishVolume per volume ID, in order, stopping at the first failure

use std::{collections::HashMap, io::Write};

use crate::{
    args::Capability,
    config::Settings,
    csi::{
        proto::{NodePublishVolumeRequest, VolumeCapability},
        NodePublish,
    },
    error::{Error, Result},
    logger::Logger,
};

pub mod validate;

/// Every request field except the volume ID. Fixed for a whole run.
#[derive(Clone, Debug, Default)]
pub struct Template {
    pub staging_target_path: String,
    pub target_path: String,
    pub publish_info: HashMap<String, String>,
    pub volume_attributes: HashMap<String, String>,
    pub readonly: bool,
    pub capability: Option<VolumeCapability>,
    pub creds: HashMap<String, String>,
}

impl Template {
    pub fn request(&self, volume_id: &str) -> NodePublishVolumeRequest {
        NodePublishVolumeRequest {
            volume_id: volume_id.to_string(),
            publish_info: self.publish_info.clone(),
            staging_target_path: self.staging_target_path.clone(),
            target_path: self.target_path.clone(),
            volume_capability: self.capability.clone(),
            readonly: self.readonly,
            node_publish_secrets: self.creds.clone(),
            volume_attributes: self.volume_attributes.clone(),
        }
    }
}

/// The request carries a single capability: the first one given wins.
pub fn first_capability(capabilities: &[Capability], logger: &Logger) -> Option<VolumeCapability> {
    if capabilities.len() > 1 {
        logger.warn(format!(
            "{} volume capabilities given, only the first is sent",
            capabilities.len()
        ));
    }
    capabilities.first().map(VolumeCapability::from)
}

pub struct Invoker<'a, N> {
    node: N,
    settings: &'a Settings,
    logger: &'a Logger,
}

impl<'a, N: NodePublish> Invoker<'a, N> {
    pub fn new(node: N, settings: &'a Settings, logger: &'a Logger) -> Self {
        Invoker { node, settings, logger }
    }

    /// Publishes each volume in turn and writes its ID to `out` once the call
    /// succeeds. The first error aborts the run; later IDs are never sent.
    pub async fn run(&mut self, template: &Template, volume_ids: &[String], out: &mut impl Write) -> Result<()> {
        for volume_id in volume_ids {
            self.publish_one(template.request(volume_id)).await?;
            writeln!(out, "{volume_id}")?;
            out.flush()?;
        }
        Ok(())
    }

    async fn publish_one(&mut self, req: NodePublishVolumeRequest) -> Result<()> {
        if self.settings.with_spec_validation {
            validate::validate(self.settings, &req)?;
        }

        self.logger.trace(format!("mounting volume: {:?}", redacted(&req)));

        let timeout = self.settings.timeout;
        let volume_id = req.volume_id.clone();
        match tokio::time::timeout(timeout, self.node.node_publish_volume(req, timeout)).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(status)) => Err(Error::rpc(volume_id, status)),
            Err(_) => Err(Error::Timeout { volume_id, timeout }),
        }
    }
}

fn redacted(req: &NodePublishVolumeRequest) -> NodePublishVolumeRequest {
    let mut req = req.clone();
    for value in req.node_publish_secrets.values_mut() {
        *value = "****".into();
    }
    req
}
