use std::{fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use hyper_util::rt::TokioIo;
use tonic::transport::{Channel, Endpoint as TonicEndpoint, Uri};
use tower::service_fn;
use url::Url;

use crate::{
    error::{Error, Result},
    logger::Logger,
};

/// Where the plugin's gRPC server listens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Unix(PathBuf),
    Tcp(String),
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::Endpoint(s.to_string());

        if s.starts_with('/') {
            return Ok(Endpoint::Unix(PathBuf::from(s)));
        }

        // `unix://rel/path` would otherwise put the first segment in the host
        if let Some(path) = s.strip_prefix("unix://") {
            if path.is_empty() {
                return Err(invalid());
            }
            return Ok(Endpoint::Unix(PathBuf::from(path)));
        }

        let url = match Url::parse(s) {
            Ok(url) if url.scheme() == "tcp" => url,
            Ok(url) if url.has_host() || url.cannot_be_a_base() => {
                // `host:port` parses with the host as scheme
                return tcp_from_host_port(s).ok_or_else(invalid);
            }
            Ok(_) => return Err(invalid()),
            Err(_) => return tcp_from_host_port(s).ok_or_else(invalid),
        };

        match (url.host_str(), url.port()) {
            (Some(host), Some(port)) if url.path().is_empty() || url.path() == "/" => {
                Ok(Endpoint::Tcp(format!("{host}:{port}")))
            }
            _ => Err(invalid()),
        }
    }
}

fn tcp_from_host_port(s: &str) -> Option<Endpoint> {
    let (host, port) = s.rsplit_once(':')?;
    if host.is_empty() || host.contains('/') || port.parse::<u16>().is_err() {
        return None;
    }
    Some(Endpoint::Tcp(s.to_string()))
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Unix(path) => write!(f, "unix://{}", path.display()),
            Endpoint::Tcp(addr) => write!(f, "tcp://{addr}"),
        }
    }
}

impl Endpoint {
    pub async fn connect(&self, logger: &Logger, timeout: Duration) -> Result<Channel> {
        logger.trace(format!("connecting to {self}"));
        let connect_err = |source| Error::Connect {
            endpoint: self.to_string(),
            source,
        };

        let channel = match self {
            Endpoint::Unix(path) => {
                let path = path.clone();
                // the authority is ignored by the connector
                TonicEndpoint::from_static("http://[::]:50051")
                    .connect_timeout(timeout)
                    .connect_with_connector(service_fn(move |_: Uri| {
                        let path = path.clone();
                        async move {
                            let stream = tokio::net::UnixStream::connect(path).await?;
                            Ok::<_, std::io::Error>(TokioIo::new(stream))
                        }
                    }))
                    .await
                    .map_err(connect_err)?
            }
            Endpoint::Tcp(addr) => TonicEndpoint::from_shared(format!("http://{addr}"))
                .map_err(connect_err)?
                .connect_timeout(timeout)
                .connect()
                .await
                .map_err(connect_err)?,
        };

        logger.trace("connected");
        Ok(channel)
    }
}
