//! Object metadata gateway
//!
//! The gateway is the seam between the flow resolver and whatever supplies
//! object definitions: a live administrative API in production, a topology
//! snapshot or a mock in tests. The resolver only ever sees this trait, so
//! traversals can run against canned attribute sets without a live queue
//! manager.

pub mod snapshot;

use async_trait::async_trait;

use crate::models::{
    ChannelAttributes, QueueAttributes, SubscriptionAttributes, TopicAttributes,
};

pub use snapshot::SnapshotGateway;

/// Gateway errors
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// No configured endpoint or credentials for the named queue manager.
    /// Hops into such managers are reported, not expanded.
    #[error("no access to queue manager {0}")]
    Unreachable(String),

    #[error("gateway request timed out for queue manager {0}")]
    Timeout(String),

    #[error("gateway failure: {0}")]
    Other(String),
}

/// Result type for gateway lookups. `Ok(None)` means the object does not
/// exist on the named queue manager.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Read-only access to object definitions across queue managers.
///
/// Every method is addressed against one queue manager; cross-manager hops
/// re-enter through a fresh call with the target manager's name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectGateway: Send + Sync {
    /// Fetch a queue definition by name.
    async fn fetch_queue(
        &self,
        queue_manager: &str,
        queue_name: &str,
    ) -> GatewayResult<Option<QueueAttributes>>;

    /// Fetch a topic definition by name.
    async fn fetch_topic(
        &self,
        queue_manager: &str,
        topic_name: &str,
    ) -> GatewayResult<Option<TopicAttributes>>;

    /// Fetch the channels draining a transmission queue, in definition order.
    async fn fetch_channels(
        &self,
        queue_manager: &str,
        transmission_queue: &str,
    ) -> GatewayResult<Vec<ChannelAttributes>>;

    /// Fetch the subscriptions matching a topic object name, in the order
    /// the queue manager returns them (stable by name).
    async fn fetch_subscriptions(
        &self,
        queue_manager: &str,
        topic_name: &str,
    ) -> GatewayResult<Vec<SubscriptionAttributes>>;
}
