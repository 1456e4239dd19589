//! Object classification
//!
//! Pure functions that turn already-fetched administrative attributes into
//! the classified details of a flow node plus its candidate next hops. All
//! gateway traffic happens in the resolver; nothing here performs I/O, so
//! classification is total over any attribute set the gateway can return.

use crate::models::{
    ChannelAttributes, ObjectType, QueueAttributes, SubscriptionAttributes, TopicAttributes,
};

use super::models::{hop_label, ChannelInfo, ObjectDetails, ObjectRef, SubscriptionInfo};

/// A classified object: its output details and the refs to visit next.
#[derive(Debug, Clone)]
pub(crate) struct Classified {
    pub details: ObjectDetails,
    pub next: Vec<ObjectRef>,
}

impl Classified {
    pub(crate) fn terminal(details: ObjectDetails) -> Self {
        Self {
            details,
            next: Vec::new(),
        }
    }
}

/// What an alias queue's base object turned out to be, as resolved by the
/// resolver's follow-up lookups.
#[derive(Debug, Clone)]
pub(crate) enum AliasBase {
    /// Base is a queue on the same manager; its attributes and (for a
    /// forwarding base) the channels draining its transmission queue.
    Queue(QueueAttributes, Vec<ChannelAttributes>),
    /// Base is a topic on the same manager.
    Topic,
    /// Gateway reported neither a queue nor a topic under the base name.
    Unknown,
}

/// Pick the channel serving a transmission queue. Channels arrive already
/// filtered by transmission queue; the first definition wins, and an empty
/// list stays empty rather than fabricating channel fields.
pub(crate) fn channel_info(channels: &[ChannelAttributes]) -> Option<ChannelInfo> {
    channels.first().map(|ch| ChannelInfo {
        name: ch.name.trim().to_string(),
        channel_type: ch.channel_type.clone(),
        connection_name: ch.connection_name.trim().to_string(),
    })
}

/// Classify a local queue: the delivery endpoint. Transmission-queue
/// metadata is carried along when present.
pub(crate) fn classify_local(
    attrs: &QueueAttributes,
    channels: &[ChannelAttributes],
) -> Classified {
    Classified::terminal(ObjectDetails::Local {
        transmission_queue: attrs.transmission_queue().map(str::to_string),
        channel: channel_info(channels),
    })
}

/// Classify a model (template) queue; terminal.
pub(crate) fn classify_model(attrs: &QueueAttributes) -> Classified {
    Classified::terminal(ObjectDetails::Model {
        base_template: attrs.base_object_name().map(str::to_string),
    })
}

/// Classify an unsupported queue type; terminal, not an error.
pub(crate) fn classify_other() -> Classified {
    Classified::terminal(ObjectDetails::Other)
}

/// Classify a remote queue definition.
///
/// `resolved_manager` is the target queue manager after the resolver applied
/// its missing-manager policy; `None` means the hop cannot be followed and
/// the node stays terminal with no `next_hop`.
pub(crate) fn classify_remote(
    attrs: &QueueAttributes,
    channels: &[ChannelAttributes],
    resolved_manager: Option<&str>,
) -> Classified {
    let remote_queue = attrs.remote_queue().unwrap_or_default().to_string();

    let mut next = Vec::new();
    let mut next_hop = None;
    if let Some(manager) = resolved_manager {
        if !remote_queue.is_empty() {
            next_hop = Some(hop_label(&remote_queue, manager));
            next.push(ObjectRef::queue(manager, remote_queue.clone()));
        }
    }

    Classified {
        details: ObjectDetails::Remote {
            remote_queue_manager: resolved_manager
                .map(str::to_string)
                .or_else(|| attrs.remote_queue_manager().map(str::to_string)),
            remote_queue,
            transmission_queue: attrs.transmission_queue().map(str::to_string),
            channel: channel_info(channels),
            next_hop,
        },
        next,
    }
}

/// Classify an alias queue given what its base resolved to.
///
/// A Local base continues the chain on the same manager. A Remote base folds
/// the forwarding definition into the alias node and hops straight to the
/// remote target. A topic base switches the traversal to the topic branch.
/// An unknown base leaves the alias node terminal; no kind is guessed.
pub(crate) fn classify_alias(
    object_ref: &ObjectRef,
    attrs: &QueueAttributes,
    base: AliasBase,
    resolved_remote_manager: Option<&str>,
) -> Classified {
    let base_object_name = attrs.base_object_name().unwrap_or_default().to_string();

    let mut base_object_type = None;
    let mut base_queue_type = None;
    let mut remote_queue_manager = None;
    let mut remote_queue = None;
    let mut transmission_queue = None;
    let mut channel = None;
    let mut next_hop = None;
    let mut next = Vec::new();

    match base {
        AliasBase::Queue(base_attrs, base_channels) => {
            base_object_type = Some("queue".to_string());
            base_queue_type = Some(base_attrs.queue_type.as_str().to_string());
            transmission_queue = base_attrs.transmission_queue().map(str::to_string);
            channel = channel_info(&base_channels);

            if base_attrs.queue_type == crate::models::QueueType::Remote {
                remote_queue_manager = resolved_remote_manager
                    .map(str::to_string)
                    .or_else(|| base_attrs.remote_queue_manager().map(str::to_string));
                remote_queue = base_attrs.remote_queue().map(str::to_string);

                if let (Some(manager), Some(queue)) =
                    (resolved_remote_manager, base_attrs.remote_queue())
                {
                    next_hop = Some(hop_label(queue, manager));
                    next.push(ObjectRef::queue(manager, queue));
                }
            } else {
                next.push(ObjectRef::queue(
                    object_ref.queue_manager.clone(),
                    base_object_name.clone(),
                ));
            }
        }
        AliasBase::Topic => {
            base_object_type = Some("topic".to_string());
            next.push(ObjectRef::new(
                object_ref.queue_manager.clone(),
                base_object_name.clone(),
                ObjectType::Topic,
            ));
        }
        AliasBase::Unknown => {}
    }

    Classified {
        details: ObjectDetails::Alias {
            base_object_name,
            base_object_type,
            base_queue_type,
            remote_queue_manager,
            remote_queue,
            transmission_queue,
            channel,
            next_hop,
        },
        next,
    }
}

/// Classify a topic and fan out one candidate hop per subscription, in the
/// order the gateway returned them. Zero subscriptions is a terminal node,
/// not an error.
pub(crate) fn classify_topic(
    object_ref: &ObjectRef,
    attrs: &TopicAttributes,
    subscriptions: &[SubscriptionAttributes],
) -> Classified {
    let mut infos = Vec::with_capacity(subscriptions.len());
    let mut next_hops = Vec::new();
    let mut next = Vec::new();

    for sub in subscriptions {
        let destination_manager = sub
            .destination_queue_manager
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&object_ref.queue_manager)
            .to_string();

        infos.push(SubscriptionInfo {
            name: sub.name.trim().to_string(),
            destination_queue: sub.destination_queue.trim().to_string(),
            destination_queue_manager: destination_manager.clone(),
        });

        let destination_queue = sub.destination_queue.trim();
        if !destination_queue.is_empty() {
            next_hops.push(hop_label(destination_queue, &destination_manager));
            next.push(ObjectRef::queue(destination_manager, destination_queue));
        }
    }

    Classified {
        details: ObjectDetails::Topic {
            topic_string: attrs.topic_string.trim().to_string(),
            subscriptions: infos,
            next_hops,
        },
        next,
    }
}
