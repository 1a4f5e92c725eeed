// value types for repeatable command line flags

use std::{collections::HashMap, time::Duration};

use crate::{
    csi::proto::{
        volume_capability::{access_mode::Mode, AccessMode, AccessType, BlockVolume, MountVolume},
        VolumeCapability,
    },
    error::{Error, Result},
};

/// One occurrence of a `key=val[,key=val...]` flag, in the order given.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyValues(pub Vec<(String, String)>);

pub fn parse_key_values(value: &str) -> Result<KeyValues> {
    let mut pairs = Vec::new();
    for entry in value.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let (key, val) = entry.split_once('=').unwrap_or((entry, ""));
        if key.is_empty() {
            return Err(Error::KeyValue(value.to_string()));
        }
        pairs.push((key.to_string(), val.to_string()));
    }
    Ok(KeyValues(pairs))
}

/// Folds every occurrence of a repeatable map flag into one map. Later pairs
/// overwrite earlier ones.
pub fn merge(occurrences: &[KeyValues]) -> HashMap<String, String> {
    occurrences
        .iter()
        .flat_map(|kv| kv.0.iter().cloned())
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessKind {
    Block,
    Mount { fs_type: String, mount_flags: Vec<String> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Capability {
    pub mode: Mode,
    pub kind: AccessKind,
}

impl From<&Capability> for VolumeCapability {
    fn from(cap: &Capability) -> Self {
        let access_type = match &cap.kind {
            AccessKind::Block => AccessType::Block(BlockVolume {}),
            AccessKind::Mount { fs_type, mount_flags } => AccessType::Mount(MountVolume {
                fs_type: fs_type.clone(),
                mount_flags: mount_flags.clone(),
            }),
        };
        VolumeCapability {
            access_mode: Some(AccessMode { mode: cap.mode.into() }),
            access_type: Some(access_type),
        }
    }
}

/// Parses `ACCESS_MODE,ACCESS_TYPE[,FS_TYPE[,MOUNT_FLAGS...]]`.
pub fn parse_capability(value: &str) -> Result<Capability> {
    let invalid = |reason: String| Error::Capability {
        value: value.to_string(),
        reason,
    };

    let fields: Vec<&str> = value.splitn(4, ',').collect();
    if fields.len() < 2 {
        return Err(invalid("missing access type".into()));
    }

    let mode = match Mode::from_str_name(&fields[0].to_ascii_uppercase()) {
        Some(mode) => mode,
        None => fields[0]
            .parse::<i32>()
            .ok()
            .and_then(|n| Mode::try_from(n).ok())
            .ok_or_else(|| invalid(format!("unknown access mode `{}`", fields[0])))?,
    };
    if mode == Mode::Unknown {
        return Err(invalid("access mode must not be UNKNOWN".into()));
    }

    let kind = match fields[1] {
        t if t == "1" || t.eq_ignore_ascii_case("block") => AccessKind::Block,
        t if t == "2" || t.eq_ignore_ascii_case("mount") => {
            let fs_type = fields
                .get(2)
                .ok_or_else(|| invalid("mount capability needs a filesystem type field".into()))?;
            let mount_flags = fields
                .get(3)
                .map(|flags| flags.split(',').filter(|f| !f.is_empty()).map(String::from).collect::<Vec<_>>())
                .unwrap_or_default();
            AccessKind::Mount {
                fs_type: fs_type.to_string(),
                mount_flags,
            }
        }
        t => return Err(invalid(format!("unknown access type `{t}`"))),
    };

    Ok(Capability { mode, kind })
}

pub fn parse_duration(value: &str) -> Result<Duration> {
    let value = value.trim();
    let split = value.find(|c: char| !c.is_ascii_digit()).unwrap_or(value.len());
    let (digits, unit) = value.split_at(split);
    let n: u64 = digits.parse().map_err(|_| Error::Duration(value.to_string()))?;
    let secs = |scale: u64| n.checked_mul(scale).map(Duration::from_secs);
    let duration = match unit {
        "ms" => Some(Duration::from_millis(n)),
        "" | "s" => Some(Duration::from_secs(n)),
        "m" => secs(60),
        "h" => secs(60 * 60),
        _ => None,
    }
    .ok_or_else(|| Error::Duration(value.to_string()))?;
    if duration.is_zero() {
        return Err(Error::Duration(value.to_string()));
    }
    Ok(duration)
}
