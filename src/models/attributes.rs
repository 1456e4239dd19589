//! Raw administrative attribute snapshots
//!
//! These structs carry the object definitions exactly as a gateway fetched
//! them, before classification. Field sets mirror the attributes an
//! administrative inquiry returns for each object class: queues carry their
//! type plus forwarding references, channels carry their transmission-queue
//! binding and connection address, subscriptions bind a topic to a
//! destination queue.

use serde::{Deserialize, Serialize};

use super::object_kind::QueueType;

/// Attributes of a queue definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct QueueAttributes {
    /// Queue name
    pub name: String,

    /// Administrative queue type
    #[serde(default)]
    pub queue_type: QueueType,

    /// Base object an alias queue redirects to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_object_name: Option<String>,

    /// Target queue name of a remote definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_queue: Option<String>,

    /// Target queue manager of a remote definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_queue_manager: Option<String>,

    /// Transmission queue used to stage messages for a remote manager
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission_queue: Option<String>,
}

impl QueueAttributes {
    /// Transmission queue, with empty strings treated as absent (queue
    /// managers pad unset character attributes with blanks).
    pub fn transmission_queue(&self) -> Option<&str> {
        self.transmission_queue
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Base object name, blank-stripped.
    pub fn base_object_name(&self) -> Option<&str> {
        self.base_object_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Remote queue name, blank-stripped.
    pub fn remote_queue(&self) -> Option<&str> {
        self.remote_queue
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Remote queue manager name, blank-stripped.
    pub fn remote_queue_manager(&self) -> Option<&str> {
        self.remote_queue_manager
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Attributes of a topic definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TopicAttributes {
    /// Topic object name
    pub name: String,

    /// Topic string messages are published to
    #[serde(default)]
    pub topic_string: String,
}

/// Attributes of a channel definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ChannelAttributes {
    /// Channel name
    pub name: String,

    /// Channel type (e.g. "sender", "server")
    #[serde(default)]
    pub channel_type: String,

    /// Transmission queue this channel drains
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission_queue: Option<String>,

    /// Connection name (host/port of the partner queue manager)
    #[serde(default)]
    pub connection_name: String,
}

/// Attributes of a subscription binding a topic to a destination queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SubscriptionAttributes {
    /// Subscription name
    pub name: String,

    /// Topic object name the subscription matches
    pub topic: String,

    /// Destination queue messages are delivered to
    pub destination_queue: String,

    /// Destination queue manager; absent means the subscription's own manager
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_queue_manager: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_padded_attributes_read_as_absent() {
        let attrs = QueueAttributes {
            name: "Q1".to_string(),
            queue_type: QueueType::Remote,
            base_object_name: None,
            remote_queue: Some("TARGET.QUEUE  ".to_string()),
            remote_queue_manager: Some("   ".to_string()),
            transmission_queue: Some(String::new()),
        };
        assert_eq!(attrs.remote_queue(), Some("TARGET.QUEUE"));
        assert_eq!(attrs.remote_queue_manager(), None);
        assert_eq!(attrs.transmission_queue(), None);
    }

    #[test]
    fn test_queue_attributes_yaml_defaults() {
        let yaml = "name: PLAIN.QUEUE";
        let attrs: QueueAttributes = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(attrs.queue_type, QueueType::Local);
        assert!(attrs.base_object_name.is_none());
    }
}
