//! Data structures for flow results
//!
//! The serialized field names and nesting here are a compatibility contract
//! with existing consumers of the trace output; do not rename them.

use serde::{Deserialize, Serialize};

use crate::models::ObjectType;

/// Identifies one node to visit: an object on a queue manager.
///
/// Doubles as the visitation key for cycle detection, so equality covers all
/// three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    pub queue_manager: String,
    pub object_name: String,
    pub object_type: ObjectType,
}

impl ObjectRef {
    pub fn new(
        queue_manager: impl Into<String>,
        object_name: impl Into<String>,
        object_type: ObjectType,
    ) -> Self {
        Self {
            queue_manager: queue_manager.into(),
            object_name: object_name.into(),
            object_type,
        }
    }

    /// Queue shorthand, the common case for hops.
    pub fn queue(queue_manager: impl Into<String>, object_name: impl Into<String>) -> Self {
        Self::new(queue_manager, object_name, ObjectType::Queue)
    }

    /// The textual hop label: `"<object_name> on <queue_manager>"`.
    pub fn label(&self) -> String {
        hop_label(&self.object_name, &self.queue_manager)
    }
}

/// Format the textual next-hop label for an object on a queue manager.
pub(crate) fn hop_label(object_name: &str, queue_manager: &str) -> String {
    format!("{} on {}", object_name, queue_manager)
}

/// Channel metadata attached to forwarding hops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub channel_type: String,
    pub connection_name: String,
}

/// One subscription next-hop candidate on a topic node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionInfo {
    pub name: String,
    pub destination_queue: String,
    pub destination_queue_manager: String,
}

/// Classified details of a visited object, tagged by kind.
///
/// Alias nodes over a Remote base carry the base's forwarding definition
/// inline (`base_queue_type: "Remote"` plus the remote fields); that is the
/// shape downstream consumers parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectDetails {
    /// Terminal delivery endpoint. Carries transmission-queue metadata when
    /// the local queue doubles as a forwarding staging point.
    Local {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        transmission_queue: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        channel: Option<ChannelInfo>,
    },

    /// Redirection to a base queue or topic on the same queue manager.
    Alias {
        base_object_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        base_object_type: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        base_queue_type: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        remote_queue_manager: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        remote_queue: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        transmission_queue: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        channel: Option<ChannelInfo>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        next_hop: Option<String>,
    },

    /// Forwarding definition pointing at a queue on another queue manager.
    Remote {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        remote_queue_manager: Option<String>,
        remote_queue: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        transmission_queue: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        channel: Option<ChannelInfo>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        next_hop: Option<String>,
    },

    /// Template definition; terminal for tracing purposes.
    Model {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        base_template: Option<String>,
    },

    /// Publish/subscribe fan-out point. The only place a traversal branches.
    Topic {
        topic_string: String,
        subscriptions: Vec<SubscriptionInfo>,
        next_hops: Vec<String>,
    },

    /// Queue type the classifier cannot map; terminal, not fatal.
    Other,

    /// The traversal revisited an already-visited node.
    CycleDetected { note: String },

    /// The branch could not be expanded (object absent, manager unreachable,
    /// or a gateway failure). Terminal for this branch only.
    Unresolved { reason: String },
}

/// One visited entry in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowNode {
    pub queue_manager: String,
    pub object_name: String,
    pub object_type: ObjectType,
    pub details: ObjectDetails,
}

impl FlowNode {
    pub(crate) fn new(object_ref: &ObjectRef, details: ObjectDetails) -> Self {
        Self {
            queue_manager: object_ref.queue_manager.clone(),
            object_name: object_ref.object_name.clone(),
            object_type: object_ref.object_type,
            details,
        }
    }
}

/// The traversal's final output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowResult {
    pub starting_queue_manager: String,
    pub object_name: String,
    pub object_type: ObjectType,
    pub flow_path: Vec<FlowNode>,
}
