use crate::{
    config::Settings,
    csi::proto::{volume_capability::access_mode::Mode, NodePublishVolumeRequest},
    error::{Error, Result},
};

/// Client-side check of the fields a conforming plugin would reject a
/// request for. Only called when spec validation is enabled.
pub fn validate(settings: &Settings, req: &NodePublishVolumeRequest) -> Result<()> {
    if req.volume_id.is_empty() {
        return Err(Error::Required("VolumeId"));
    }
    if req.target_path.is_empty() {
        return Err(Error::Required("TargetPath"));
    }

    let mode = req
        .volume_capability
        .as_ref()
        .and_then(|cap| cap.access_mode.as_ref())
        .and_then(|access| Mode::try_from(access.mode).ok());
    match mode {
        None | Some(Mode::Unknown) => return Err(Error::Required("VolumeCapability")),
        Some(_) => {}
    }
    if req.volume_capability.as_ref().is_some_and(|cap| cap.access_type.is_none()) {
        return Err(Error::Required("VolumeCapability.AccessType"));
    }

    if settings.requires_pub_info && req.publish_info.is_empty() {
        return Err(Error::Required("PublishInfo"));
    }
    if settings.requires_creds && req.node_publish_secrets.is_empty() {
        return Err(Error::Required("NodePublishSecrets"));
    }
    if settings.requires_attributes && req.volume_attributes.is_empty() {
        return Err(Error::Required("VolumeAttributes"));
    }

    Ok(())
}
