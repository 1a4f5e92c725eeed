#![allow(dead_code)]

use std::{
    convert::Infallible,
    path::PathBuf,
    sync::Arc,
    task::{Context, Poll},
};

use assert_cmd::Command;
use parking_lot::Mutex;
use tempfile::TempDir;
use tokio_stream::wrappers::UnixListenerStream;
use tonic::{
    codec::ProstCodec,
    codegen::{empty_body, http, Body, BoxFuture, Service, StdError},
    server::{Grpc, NamedService, UnaryService},
};

pub fn csc() -> Command {
    let mut cmd = Command::cargo_bin("csc").unwrap();
    cmd.env("CSC_CONFIG", "/nonexistent/csc.toml")
        .env_remove("CSI_ENDPOINT")
        .env_remove("CSC_ENDPOINT")
        .env_remove("CSC_TIMEOUT")
        .env_remove("CSC_TRACE");
    cmd
}

// csi.v0 messages as a plugin would decode them, declared independently of
// the client's copy so a tag mismatch on either side shows up
pub mod proto {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct NodePublishVolumeRequest {
        #[prost(string, tag = "1")]
        pub volume_id: String,
        #[prost(map = "string, string", tag = "2")]
        pub publish_info: ::std::collections::HashMap<String, String>,
        #[prost(string, tag = "3")]
        pub staging_target_path: String,
        #[prost(string, tag = "4")]
        pub target_path: String,
        #[prost(message, optional, tag = "5")]
        pub volume_capability: Option<VolumeCapability>,
        #[prost(bool, tag = "6")]
        pub readonly: bool,
        #[prost(map = "string, string", tag = "7")]
        pub node_publish_secrets: ::std::collections::HashMap<String, String>,
        #[prost(map = "string, string", tag = "8")]
        pub volume_attributes: ::std::collections::HashMap<String, String>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct NodePublishVolumeResponse {}

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct VolumeCapability {
        #[prost(message, optional, tag = "3")]
        pub access_mode: Option<AccessMode>,
        #[prost(oneof = "AccessType", tags = "1, 2")]
        pub access_type: Option<AccessType>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct AccessMode {
        #[prost(int32, tag = "1")]
        pub mode: i32,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct BlockVolume {}

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MountVolume {
        #[prost(string, tag = "1")]
        pub fs_type: String,
        #[prost(string, repeated, tag = "2")]
        pub mount_flags: Vec<String>,
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum AccessType {
        #[prost(message, tag = "1")]
        Block(BlockVolume),
        #[prost(message, tag = "2")]
        Mount(MountVolume),
    }
}

use proto::{NodePublishVolumeRequest, NodePublishVolumeResponse};

pub struct Received {
    pub request: NodePublishVolumeRequest,
    pub grpc_timeout: Option<String>,
}

/// Node service that records every NodePublishVolume it receives and rejects
/// the volume IDs listed in `reject`.
#[derive(Clone, Default)]
pub struct FakeNode {
    received: Arc<Mutex<Vec<Received>>>,
    reject: Arc<Vec<String>>,
}

impl FakeNode {
    fn publish(&self, request: tonic::Request<NodePublishVolumeRequest>) -> Result<NodePublishVolumeResponse, tonic::Status> {
        let grpc_timeout = request
            .metadata()
            .get("grpc-timeout")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let request = request.into_inner();
        let rejected = self.reject.contains(&request.volume_id);
        let volume_id = request.volume_id.clone();
        self.received.lock().push(Received { request, grpc_timeout });
        if rejected {
            return Err(tonic::Status::not_found(format!("volume {volume_id} not found")));
        }
        Ok(NodePublishVolumeResponse {})
    }
}

struct PublishSvc(FakeNode);

impl UnaryService<NodePublishVolumeRequest> for PublishSvc {
    type Response = NodePublishVolumeResponse;
    type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;

    fn call(&mut self, request: tonic::Request<NodePublishVolumeRequest>) -> Self::Future {
        let node = self.0.clone();
        Box::pin(async move { node.publish(request).map(tonic::Response::new) })
    }
}

impl<B> Service<http::Request<B>> for FakeNode
where
    B: Body + Send + 'static,
    B::Error: Into<StdError> + Send + 'static,
{
    type Response = http::Response<tonic::body::BoxBody>;
    type Error = Infallible;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<B>) -> Self::Future {
        let node = self.clone();
        match req.uri().path() {
            "/csi.v0.Node/NodePublishVolume" => Box::pin(async move {
                let mut grpc = Grpc::new(ProstCodec::default());
                Ok(grpc.unary(PublishSvc(node), req).await)
            }),
            _ => Box::pin(async move {
                let mut response = http::Response::new(empty_body());
                let headers = response.headers_mut();
                headers.insert(tonic::Status::GRPC_STATUS, (tonic::Code::Unimplemented as i32).into());
                headers.insert(http::header::CONTENT_TYPE, tonic::metadata::GRPC_CONTENT_TYPE);
                Ok(response)
            }),
        }
    }
}

impl NamedService for FakeNode {
    const NAME: &'static str = "csi.v0.Node";
}

/// A FakeNode served on a unix socket in a temporary directory.
pub struct Plugin {
    pub node: FakeNode,
    socket: PathBuf,
    _dir: TempDir,
}

impl Plugin {
    pub fn start(reject: &[&str]) -> Plugin {
        let dir = tempfile::Builder::new().prefix("csc").tempdir().unwrap();
        let socket = dir.path().join("csi.sock");
        let listener = tokio::net::UnixListener::bind(&socket).unwrap();

        let node = FakeNode {
            received: Default::default(),
            reject: Arc::new(reject.iter().map(|id| id.to_string()).collect()),
        };
        let service = node.clone();
        tokio::spawn(async move {
            tonic::transport::Server::builder()
                .add_service(service)
                .serve_with_incoming(UnixListenerStream::new(listener))
                .await
                .unwrap();
        });

        Plugin { node, socket, _dir: dir }
    }

    pub fn endpoint(&self) -> String {
        format!("unix://{}", self.socket.display())
    }

    pub fn volume_ids(&self) -> Vec<String> {
        self.node.received.lock().iter().map(|r| r.request.volume_id.clone()).collect()
    }

    pub fn take_received(&self) -> Vec<Received> {
        std::mem::take(&mut *self.node.received.lock())
    }
}
