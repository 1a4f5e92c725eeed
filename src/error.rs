use std::time::Duration;

use miette::Diagnostic;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum Error {
    #[error("invalid key/value pair `{0}`")]
    #[diagnostic(help("expected key=val[,key=val...]"))]
    KeyValue(String),

    #[error("invalid volume capability `{value}`: {reason}")]
    #[diagnostic(help("expected ACCESS_MODE,ACCESS_TYPE[,FS_TYPE,MOUNT_FLAGS]"))]
    Capability { value: String, reason: String },

    #[error("invalid duration `{0}`")]
    #[diagnostic(help("expected a number followed by ms, s, m or h"))]
    Duration(String),

    #[error("invalid endpoint `{0}`")]
    #[diagnostic(help("expected unix:///path/to/csi.sock or tcp://host:port"))]
    Endpoint(String),

    #[error("no endpoint configured")]
    #[diagnostic(help("pass --endpoint, set CSI_ENDPOINT, or add `endpoint` to the config file"))]
    NoEndpoint,

    #[error("failed to connect to {endpoint}")]
    Connect {
        endpoint: String,
        #[source]
        source: tonic::transport::Error,
    },

    #[error("required: {0}")]
    #[diagnostic(code(csc::validation))]
    Required(&'static str),

    #[error("NodePublishVolume `{volume_id}` timed out after {timeout:?}")]
    #[diagnostic(code(csc::timeout))]
    Timeout { volume_id: String, timeout: Duration },

    #[error("NodePublishVolume `{volume_id}` failed: {code}: {}", .status.message())]
    Rpc {
        volume_id: String,
        code: tonic::Code,
        #[source]
        status: tonic::Status,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn rpc(volume_id: impl Into<String>, status: tonic::Status) -> Error {
        Error::Rpc {
            volume_id: volume_id.into(),
            code: status.code(),
            status,
        }
    }
}
