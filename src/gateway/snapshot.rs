//! Snapshot-backed gateway
//!
//! Serves object definitions from a YAML topology document instead of a live
//! administrative connection. Queue managers absent from the snapshot are
//! treated as unreachable, which is exactly how a live gateway reports a
//! manager it has no endpoint for.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{GatewayError, GatewayResult, ObjectGateway};
use crate::models::{
    ChannelAttributes, QueueAttributes, SubscriptionAttributes, TopicAttributes,
};

/// A full topology snapshot: every queue manager the gateway can answer for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TopologySnapshot {
    #[serde(default)]
    pub queue_managers: HashMap<String, QueueManagerSnapshot>,
}

/// Object definitions captured from one queue manager.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct QueueManagerSnapshot {
    #[serde(default)]
    pub queues: Vec<QueueAttributes>,

    #[serde(default)]
    pub topics: Vec<TopicAttributes>,

    #[serde(default)]
    pub channels: Vec<ChannelAttributes>,

    #[serde(default)]
    pub subscriptions: Vec<SubscriptionAttributes>,
}

/// Gateway implementation over an in-memory [`TopologySnapshot`].
pub struct SnapshotGateway {
    snapshot: TopologySnapshot,
}

impl SnapshotGateway {
    pub fn new(snapshot: TopologySnapshot) -> Self {
        Self { snapshot }
    }

    /// Load a snapshot from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;
        Self::from_yaml(&contents)
            .with_context(|| format!("Failed to parse snapshot file: {}", path.display()))
    }

    /// Parse a snapshot from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let snapshot: TopologySnapshot =
            serde_yaml::from_str(yaml).context("Failed to parse topology snapshot YAML")?;
        Ok(Self::new(snapshot))
    }

    fn manager(&self, queue_manager: &str) -> GatewayResult<&QueueManagerSnapshot> {
        self.snapshot
            .queue_managers
            .get(queue_manager)
            .ok_or_else(|| GatewayError::Unreachable(queue_manager.to_string()))
    }
}

#[async_trait]
impl ObjectGateway for SnapshotGateway {
    async fn fetch_queue(
        &self,
        queue_manager: &str,
        queue_name: &str,
    ) -> GatewayResult<Option<QueueAttributes>> {
        let mgr = self.manager(queue_manager)?;
        Ok(mgr.queues.iter().find(|q| q.name == queue_name).cloned())
    }

    async fn fetch_topic(
        &self,
        queue_manager: &str,
        topic_name: &str,
    ) -> GatewayResult<Option<TopicAttributes>> {
        let mgr = self.manager(queue_manager)?;
        Ok(mgr.topics.iter().find(|t| t.name == topic_name).cloned())
    }

    async fn fetch_channels(
        &self,
        queue_manager: &str,
        transmission_queue: &str,
    ) -> GatewayResult<Vec<ChannelAttributes>> {
        let mgr = self.manager(queue_manager)?;
        Ok(mgr
            .channels
            .iter()
            .filter(|ch| ch.transmission_queue.as_deref() == Some(transmission_queue))
            .cloned()
            .collect())
    }

    async fn fetch_subscriptions(
        &self,
        queue_manager: &str,
        topic_name: &str,
    ) -> GatewayResult<Vec<SubscriptionAttributes>> {
        let mgr = self.manager(queue_manager)?;
        Ok(mgr
            .subscriptions
            .iter()
            .filter(|sub| sub.topic == topic_name)
            .cloned()
            .collect())
    }
}
