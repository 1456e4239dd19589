//! mqflow model layer
//!
//! Typed representations of the raw administrative attributes a gateway can
//! return for queue-manager objects, plus the closed kind enums used to
//! branch on them.

pub mod attributes;
pub mod object_kind;

pub use attributes::{ChannelAttributes, QueueAttributes, SubscriptionAttributes, TopicAttributes};
pub use object_kind::{ObjectType, QueueType};
