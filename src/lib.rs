//! mqflow library
//!
//! Traces the end-to-end delivery path of a queue or topic through a network
//! of queue managers. The flow resolver walks alias indirection, remote
//! forwarding and topic fan-out over an injected gateway, so it runs equally
//! against a topology snapshot or canned attribute sets in tests.

pub mod cli;
pub mod config;
pub mod flow;
pub mod gateway;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use flow::{
    ChannelInfo, FlowNode, FlowResolver, FlowResult, MissingRemoteManager, ObjectDetails,
    ObjectRef, ResolveOptions, SubscriptionInfo,
};
pub use gateway::{GatewayError, ObjectGateway, SnapshotGateway};
pub use models::ObjectType;
pub use services::FlowService;
