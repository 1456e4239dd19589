//! Flow service

use anyhow::{bail, Result};

use crate::flow::{FlowResolver, FlowResult, ObjectRef, ResolveOptions};
use crate::gateway::ObjectGateway;
use crate::models::ObjectType;

/// Service for resolving message flow paths against one gateway.
///
/// Stateless across invocations: every `resolve` call runs a fresh traversal
/// and nothing is retained afterwards.
pub struct FlowService<G: ObjectGateway> {
    gateway: G,
    options: ResolveOptions,
}

impl<G: ObjectGateway> FlowService<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            options: ResolveOptions::default(),
        }
    }

    pub fn with_options(gateway: G, options: ResolveOptions) -> Self {
        Self { gateway, options }
    }

    /// Trace the delivery path of an object.
    ///
    /// The only fatal error is an invalid starting triple; everything the
    /// traversal runs into after that is reported inside the result.
    pub async fn resolve(
        &self,
        queue_manager: &str,
        object_name: &str,
        object_type: ObjectType,
    ) -> Result<FlowResult> {
        if queue_manager.trim().is_empty() {
            bail!("starting queue manager name must not be empty");
        }
        if object_name.trim().is_empty() {
            bail!("starting object name must not be empty");
        }

        tracing::debug!(
            "resolving flow for {} {} on {}",
            object_type,
            object_name,
            queue_manager
        );

        let resolver = FlowResolver::with_options(&self.gateway, self.options.clone());
        let start = ObjectRef::new(queue_manager, object_name, object_type);
        Ok(resolver.resolve(start).await)
    }

    /// Get a reference to the underlying gateway
    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}
