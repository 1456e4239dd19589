//! Core flow-resolution algorithm
//!
//! An iterative work-list traversal: pop the next pending ref, fetch and
//! classify it, enqueue its next hops, repeat until nothing is pending. The
//! visited set is keyed on the full (queue manager, object name, object type)
//! triple, so any finite object graph terminates no matter how deep aliases
//! or remote definitions chain. Every failure along the way is branch-local:
//! it becomes a terminal node in the output instead of aborting the
//! traversal.

use std::collections::{HashSet, VecDeque};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use crate::gateway::{GatewayError, GatewayResult, ObjectGateway};
use crate::models::{ChannelAttributes, ObjectType, QueueAttributes, QueueType};

use super::assembler::{self, VisitEntry};
use super::classifier::{self, AliasBase, Classified};
use super::models::{FlowNode, FlowResult, ObjectDetails, ObjectRef};

/// Policy for a remote definition whose remote-queue-manager attribute is
/// blank: either assume the current queue manager or stop the branch there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingRemoteManager {
    /// Treat the hop as staying on the current queue manager
    #[default]
    #[serde(rename = "same")]
    SameManager,
    /// Leave the node terminal with no next hop
    Unresolved,
}

/// Caller-supplied knobs for one traversal.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Policy for blank remote-queue-manager attributes
    pub missing_remote_manager: MissingRemoteManager,

    /// Timeout applied to each individual gateway call; an elapsed timeout
    /// terminates that branch as unresolved
    pub call_timeout: Option<Duration>,

    /// Overall traversal budget; when it elapses the partial result
    /// accumulated so far is returned
    pub overall_deadline: Option<Duration>,
}

/// Stateless traversal engine over an injected gateway.
pub struct FlowResolver<'a, G: ObjectGateway + ?Sized> {
    gateway: &'a G,
    options: ResolveOptions,
}

impl<'a, G: ObjectGateway + ?Sized> FlowResolver<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self {
            gateway,
            options: ResolveOptions::default(),
        }
    }

    pub fn with_options(gateway: &'a G, options: ResolveOptions) -> Self {
        Self { gateway, options }
    }

    /// Trace the delivery path starting from one object.
    pub async fn resolve(&self, start: ObjectRef) -> FlowResult {
        let deadline = self.options.overall_deadline.map(|d| Instant::now() + d);
        let mut visited: HashSet<ObjectRef> = HashSet::new();
        let mut log: Vec<VisitEntry> = Vec::new();
        let mut pending: VecDeque<(ObjectRef, Option<usize>)> = VecDeque::new();
        pending.push_back((start.clone(), None));

        while let Some((object_ref, parent)) = pending.pop_front() {
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    tracing::warn!(
                        "traversal deadline reached with {} refs pending, returning partial result",
                        pending.len() + 1
                    );
                    break;
                }
            }

            if visited.contains(&object_ref) {
                tracing::debug!("cycle detected at {}", object_ref.label());
                log.push(VisitEntry {
                    node: FlowNode::new(
                        &object_ref,
                        ObjectDetails::CycleDetected {
                            note: format!("already visited {}", object_ref.label()),
                        },
                    ),
                    parent,
                });
                continue;
            }

            let classified = match object_ref.object_type {
                ObjectType::Queue => self.visit_queue(&object_ref).await,
                ObjectType::Topic => self.visit_topic(&object_ref).await,
            };

            visited.insert(object_ref.clone());
            let index = log.len();
            log.push(VisitEntry {
                node: FlowNode::new(&object_ref, classified.details),
                parent,
            });
            for next in classified.next {
                pending.push_back((next, Some(index)));
            }
        }

        assembler::assemble(&start, log)
    }

    async fn visit_queue(&self, object_ref: &ObjectRef) -> Classified {
        let attrs = match self
            .call(&object_ref.queue_manager, || {
                self.gateway
                    .fetch_queue(&object_ref.queue_manager, &object_ref.object_name)
            })
            .await
        {
            Ok(Some(attrs)) => attrs,
            Ok(None) => return Classified::terminal(not_found()),
            Err(e) => return Classified::terminal(unresolved(e)),
        };

        match attrs.queue_type {
            QueueType::Local => {
                let channels = self
                    .channels_for(&object_ref.queue_manager, attrs.transmission_queue())
                    .await;
                classifier::classify_local(&attrs, &channels)
            }
            QueueType::Model => classifier::classify_model(&attrs),
            QueueType::Other => classifier::classify_other(),
            QueueType::Remote => {
                let channels = self
                    .channels_for(&object_ref.queue_manager, attrs.transmission_queue())
                    .await;
                let manager = self.remote_manager(&object_ref.queue_manager, &attrs);
                classifier::classify_remote(&attrs, &channels, manager.as_deref())
            }
            QueueType::Alias => {
                let (base, manager) = self.alias_base(object_ref, &attrs).await;
                classifier::classify_alias(object_ref, &attrs, base, manager.as_deref())
            }
        }
    }

    async fn visit_topic(&self, object_ref: &ObjectRef) -> Classified {
        let attrs = match self
            .call(&object_ref.queue_manager, || {
                self.gateway
                    .fetch_topic(&object_ref.queue_manager, &object_ref.object_name)
            })
            .await
        {
            Ok(Some(attrs)) => attrs,
            Ok(None) => return Classified::terminal(not_found()),
            Err(e) => return Classified::terminal(unresolved(e)),
        };

        let subscriptions = match self
            .call(&object_ref.queue_manager, || {
                self.gateway
                    .fetch_subscriptions(&object_ref.queue_manager, &object_ref.object_name)
            })
            .await
        {
            Ok(subs) => subs,
            Err(e) => {
                tracing::warn!(
                    "failed to fetch subscriptions for {}: {}",
                    object_ref.label(),
                    e
                );
                // An empty subscription list is indistinguishable from a
                // topic with no subscribers, so a failed inquiry terminates
                // the branch as unresolved instead.
                return Classified::terminal(unresolved(e));
            }
        };

        classifier::classify_topic(object_ref, &attrs, &subscriptions)
    }

    /// Resolve an alias queue's base: queue first, then topic, never guessed.
    /// Returns the base classification plus, for a Remote base, the target
    /// queue manager after applying the missing-manager policy.
    async fn alias_base(
        &self,
        object_ref: &ObjectRef,
        attrs: &QueueAttributes,
    ) -> (AliasBase, Option<String>) {
        let Some(base_name) = attrs.base_object_name() else {
            return (AliasBase::Unknown, None);
        };

        match self
            .call(&object_ref.queue_manager, || {
                self.gateway.fetch_queue(&object_ref.queue_manager, base_name)
            })
            .await
        {
            Ok(Some(base_attrs)) => {
                let channels = self
                    .channels_for(&object_ref.queue_manager, base_attrs.transmission_queue())
                    .await;
                let manager = (base_attrs.queue_type == QueueType::Remote)
                    .then(|| self.remote_manager(&object_ref.queue_manager, &base_attrs))
                    .flatten();
                (AliasBase::Queue(base_attrs, channels), manager)
            }
            Ok(None) => match self
                .call(&object_ref.queue_manager, || {
                    self.gateway.fetch_topic(&object_ref.queue_manager, base_name)
                })
                .await
            {
                Ok(Some(_)) => (AliasBase::Topic, None),
                Ok(None) => (AliasBase::Unknown, None),
                Err(e) => {
                    tracing::warn!("failed to classify alias base {}: {}", base_name, e);
                    (AliasBase::Unknown, None)
                }
            },
            Err(e) => {
                tracing::warn!("failed to classify alias base {}: {}", base_name, e);
                (AliasBase::Unknown, None)
            }
        }
    }

    /// Channels draining a transmission queue; lookup failures degrade to no
    /// channel metadata rather than killing the branch.
    async fn channels_for(
        &self,
        queue_manager: &str,
        transmission_queue: Option<&str>,
    ) -> Vec<ChannelAttributes> {
        let Some(transmission_queue) = transmission_queue else {
            return Vec::new();
        };
        match self
            .call(queue_manager, || {
                self.gateway.fetch_channels(queue_manager, transmission_queue)
            })
            .await
        {
            Ok(channels) => channels,
            Err(e) => {
                tracing::warn!(
                    "failed to fetch channels for {} on {}: {}",
                    transmission_queue,
                    queue_manager,
                    e
                );
                Vec::new()
            }
        }
    }

    fn remote_manager(&self, current: &str, attrs: &QueueAttributes) -> Option<String> {
        match attrs.remote_queue_manager() {
            Some(manager) => Some(manager.to_string()),
            None => match self.options.missing_remote_manager {
                MissingRemoteManager::SameManager => Some(current.to_string()),
                MissingRemoteManager::Unresolved => None,
            },
        }
    }

    async fn call<T, F, Fut>(&self, queue_manager: &str, f: F) -> GatewayResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = GatewayResult<T>>,
    {
        match self.options.call_timeout {
            Some(limit) => match tokio::time::timeout(limit, f()).await {
                Ok(result) => result,
                Err(_) => Err(GatewayError::Timeout(queue_manager.to_string())),
            },
            None => f().await,
        }
    }
}

fn not_found() -> ObjectDetails {
    ObjectDetails::Unresolved {
        reason: "object not found".to_string(),
    }
}

fn unresolved(error: GatewayError) -> ObjectDetails {
    let reason = match &error {
        GatewayError::Unreachable(_) => "queue manager unreachable".to_string(),
        other => other.to_string(),
    };
    ObjectDetails::Unresolved { reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MockObjectGateway;
    use crate::models::{SubscriptionAttributes, TopicAttributes};
    use async_trait::async_trait;
    use mockall::predicate::eq;

    fn local_queue(name: &str) -> QueueAttributes {
        QueueAttributes {
            name: name.to_string(),
            queue_type: QueueType::Local,
            base_object_name: None,
            remote_queue: None,
            remote_queue_manager: None,
            transmission_queue: None,
        }
    }

    #[tokio::test]
    async fn test_gateway_failure_on_one_branch_leaves_siblings_intact() {
        let mut gateway = MockObjectGateway::new();
        gateway
            .expect_fetch_topic()
            .with(eq("QM1"), eq("MY.TOPIC"))
            .returning(|_, name| {
                let name = name.to_string();
                Ok(Some(TopicAttributes {
                    name,
                    topic_string: "my/topic".to_string(),
                }))
            });
        gateway
            .expect_fetch_subscriptions()
            .returning(|_, _| {
                Ok(vec![
                    SubscriptionAttributes {
                        name: "SUB1".to_string(),
                        topic: "MY.TOPIC".to_string(),
                        destination_queue: "GOOD.QUEUE".to_string(),
                        destination_queue_manager: None,
                    },
                    SubscriptionAttributes {
                        name: "SUB2".to_string(),
                        topic: "MY.TOPIC".to_string(),
                        destination_queue: "BAD.QUEUE".to_string(),
                        destination_queue_manager: Some("QM9".to_string()),
                    },
                ])
            });
        gateway
            .expect_fetch_queue()
            .with(eq("QM1"), eq("GOOD.QUEUE"))
            .returning(|_, name| Ok(Some(local_queue(name))));
        gateway
            .expect_fetch_queue()
            .with(eq("QM9"), eq("BAD.QUEUE"))
            .returning(|qm, _| Err(GatewayError::Unreachable(qm.to_string())));

        let resolver = FlowResolver::new(&gateway);
        let result = resolver
            .resolve(ObjectRef::new("QM1", "MY.TOPIC", ObjectType::Topic))
            .await;

        assert_eq!(result.flow_path.len(), 3);
        assert!(matches!(
            result.flow_path[1].details,
            ObjectDetails::Local { .. }
        ));
        match &result.flow_path[2].details {
            ObjectDetails::Unresolved { reason } => {
                assert_eq!(reason, "queue manager unreachable")
            }
            other => panic!("expected Unresolved details, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_subscription_fetch_failure_marks_topic_unresolved() {
        let mut gateway = MockObjectGateway::new();
        gateway
            .expect_fetch_topic()
            .with(eq("QM1"), eq("MY.TOPIC"))
            .returning(|_, name| {
                Ok(Some(TopicAttributes {
                    name: name.to_string(),
                    topic_string: "my/topic".to_string(),
                }))
            });
        gateway
            .expect_fetch_subscriptions()
            .returning(|_, _| Err(GatewayError::Other("inquiry failed".to_string())));

        let resolver = FlowResolver::new(&gateway);
        let result = resolver
            .resolve(ObjectRef::new("QM1", "MY.TOPIC", ObjectType::Topic))
            .await;

        // Not a Topic node with empty lists: that would look identical to a
        // topic with no subscribers.
        assert_eq!(result.flow_path.len(), 1);
        match &result.flow_path[0].details {
            ObjectDetails::Unresolved { reason } => {
                assert_eq!(reason, "gateway failure: inquiry failed")
            }
            other => panic!("expected Unresolved details, got {:?}", other),
        }
    }

    /// Gateway that never answers for one queue, for timeout tests.
    struct StallingGateway;

    #[async_trait]
    impl ObjectGateway for StallingGateway {
        async fn fetch_queue(
            &self,
            _queue_manager: &str,
            queue_name: &str,
        ) -> GatewayResult<Option<QueueAttributes>> {
            if queue_name == "SLOW.QUEUE" {
                tokio::time::sleep(Duration::from_secs(60)).await;
            }
            Ok(Some(local_queue(queue_name)))
        }

        async fn fetch_topic(
            &self,
            _queue_manager: &str,
            topic_name: &str,
        ) -> GatewayResult<Option<TopicAttributes>> {
            Ok(Some(TopicAttributes {
                name: topic_name.to_string(),
                topic_string: "my/topic".to_string(),
            }))
        }

        async fn fetch_channels(
            &self,
            _queue_manager: &str,
            _transmission_queue: &str,
        ) -> GatewayResult<Vec<ChannelAttributes>> {
            Ok(Vec::new())
        }

        async fn fetch_subscriptions(
            &self,
            _queue_manager: &str,
            _topic_name: &str,
        ) -> GatewayResult<Vec<SubscriptionAttributes>> {
            Ok(vec![
                SubscriptionAttributes {
                    name: "SUB1".to_string(),
                    topic: "MY.TOPIC".to_string(),
                    destination_queue: "GOOD.QUEUE".to_string(),
                    destination_queue_manager: None,
                },
                SubscriptionAttributes {
                    name: "SUB2".to_string(),
                    topic: "MY.TOPIC".to_string(),
                    destination_queue: "SLOW.QUEUE".to_string(),
                    destination_queue_manager: None,
                },
            ])
        }
    }

    #[tokio::test]
    async fn test_per_call_timeout_marks_only_that_branch_unresolved() {
        let options = ResolveOptions {
            call_timeout: Some(Duration::from_millis(50)),
            ..Default::default()
        };
        let resolver = FlowResolver::with_options(&StallingGateway, options);
        let result = resolver
            .resolve(ObjectRef::new("QM1", "MY.TOPIC", ObjectType::Topic))
            .await;

        assert_eq!(result.flow_path.len(), 3);
        assert!(matches!(
            result.flow_path[1].details,
            ObjectDetails::Local { .. }
        ));
        match &result.flow_path[2].details {
            ObjectDetails::Unresolved { reason } => {
                assert!(reason.contains("timed out"), "unexpected reason: {}", reason)
            }
            other => panic!("expected Unresolved details, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_remote_manager_same_policy_stays_on_manager() {
        let mut gateway = MockObjectGateway::new();
        gateway
            .expect_fetch_queue()
            .with(eq("QM1"), eq("REMOTE.QUEUE"))
            .returning(|_, _| {
                Ok(Some(QueueAttributes {
                    name: "REMOTE.QUEUE".to_string(),
                    queue_type: QueueType::Remote,
                    base_object_name: None,
                    remote_queue: Some("TARGET.QUEUE".to_string()),
                    remote_queue_manager: None,
                    transmission_queue: None,
                }))
            });
        gateway
            .expect_fetch_queue()
            .with(eq("QM1"), eq("TARGET.QUEUE"))
            .returning(|_, name| Ok(Some(local_queue(name))));

        let resolver = FlowResolver::new(&gateway);
        let result = resolver.resolve(ObjectRef::queue("QM1", "REMOTE.QUEUE")).await;

        assert_eq!(result.flow_path.len(), 2);
        match &result.flow_path[0].details {
            ObjectDetails::Remote {
                remote_queue_manager,
                next_hop,
                ..
            } => {
                assert_eq!(remote_queue_manager.as_deref(), Some("QM1"));
                assert_eq!(next_hop.as_deref(), Some("TARGET.QUEUE on QM1"));
            }
            other => panic!("expected Remote details, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_remote_manager_unresolved_policy_terminates() {
        let mut gateway = MockObjectGateway::new();
        gateway
            .expect_fetch_queue()
            .with(eq("QM1"), eq("REMOTE.QUEUE"))
            .returning(|_, _| {
                Ok(Some(QueueAttributes {
                    name: "REMOTE.QUEUE".to_string(),
                    queue_type: QueueType::Remote,
                    base_object_name: None,
                    remote_queue: Some("TARGET.QUEUE".to_string()),
                    remote_queue_manager: None,
                    transmission_queue: None,
                }))
            });

        let options = ResolveOptions {
            missing_remote_manager: MissingRemoteManager::Unresolved,
            ..Default::default()
        };
        let resolver = FlowResolver::with_options(&gateway, options);
        let result = resolver.resolve(ObjectRef::queue("QM1", "REMOTE.QUEUE")).await;

        assert_eq!(result.flow_path.len(), 1);
        match &result.flow_path[0].details {
            ObjectDetails::Remote { next_hop, .. } => assert!(next_hop.is_none()),
            other => panic!("expected Remote details, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_elapsed_deadline_returns_partial_result() {
        let mut gateway = MockObjectGateway::new();
        gateway
            .expect_fetch_queue()
            .with(eq("QM1"), eq("ALIAS.A"))
            .returning(|_, _| {
                Ok(Some(QueueAttributes {
                    name: "ALIAS.A".to_string(),
                    queue_type: QueueType::Alias,
                    base_object_name: Some("ALIAS.B".to_string()),
                    remote_queue: None,
                    remote_queue_manager: None,
                    transmission_queue: None,
                }))
            });
        gateway
            .expect_fetch_queue()
            .with(eq("QM1"), eq("ALIAS.B"))
            .returning(|_, _| {
                std::thread::sleep(Duration::from_millis(20));
                Ok(Some(local_queue("ALIAS.B")))
            });

        let options = ResolveOptions {
            overall_deadline: Some(Duration::from_millis(0)),
            ..Default::default()
        };
        let resolver = FlowResolver::with_options(&gateway, options);
        let result = resolver.resolve(ObjectRef::queue("QM1", "ALIAS.A")).await;

        // Deadline already elapsed before the first pop: empty partial result
        assert!(result.flow_path.is_empty());
        assert_eq!(result.starting_queue_manager, "QM1");
    }
}
