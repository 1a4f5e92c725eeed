// client side of the CSI Node service, NodePublishVolume only

mod client;
mod endpoint;
pub mod proto;

pub use client::{NodeClient, NodePublish};
pub use endpoint::Endpoint;
