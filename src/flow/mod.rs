//! Flow resolution
//!
//! Traces the delivery path of a queue or topic through a network of queue
//! managers: classify each visited object, follow its redirection semantics
//! (alias indirection, remote forwarding, topic fan-out), and assemble the
//! visited nodes into a flow path.

mod assembler;
mod classifier;
mod models;
mod resolver;

pub use models::{
    ChannelInfo, FlowNode, FlowResult, ObjectDetails, ObjectRef, SubscriptionInfo,
};
pub use resolver::{FlowResolver, MissingRemoteManager, ResolveOptions};
