use std::time::Duration;

use tonic::{codec::ProstCodec, codegen::http::uri::PathAndQuery, transport::Channel, GrpcMethod};

use super::proto::{NodePublishVolumeRequest, NodePublishVolumeResponse};

const SERVICE: &str = "csi.v0.Node";
const NODE_PUBLISH_VOLUME: &str = "/csi.v0.Node/NodePublishVolume";

/// The one Node RPC this tool issues. Implemented by [`NodeClient`] and by
/// stubs in tests.
pub trait NodePublish {
    async fn node_publish_volume(
        &mut self,
        request: NodePublishVolumeRequest,
        deadline: Duration,
    ) -> Result<(), tonic::Status>;
}

#[derive(Debug, Clone)]
pub struct NodeClient {
    inner: tonic::client::Grpc<Channel>,
}

impl NodeClient {
    pub fn new(channel: Channel) -> Self {
        NodeClient {
            inner: tonic::client::Grpc::new(channel),
        }
    }
}

impl NodePublish for NodeClient {
    async fn node_publish_volume(
        &mut self,
        request: NodePublishVolumeRequest,
        deadline: Duration,
    ) -> Result<(), tonic::Status> {
        self.inner
            .ready()
            .await
            .map_err(|e| tonic::Status::unknown(format!("service was not ready: {e}")))?;

        let mut request = tonic::Request::new(request);
        request.set_timeout(deadline);
        request
            .extensions_mut()
            .insert(GrpcMethod::new(SERVICE, "NodePublishVolume"));

        let codec: ProstCodec<NodePublishVolumeRequest, NodePublishVolumeResponse> = ProstCodec::default();
        self.inner
            .unary(request, PathAndQuery::from_static(NODE_PUBLISH_VOLUME), codec)
            .await?;
        Ok(())
    }
}
