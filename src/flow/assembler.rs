//! Path assembly
//!
//! Renders the resolver's visit log into the output flow path. A chain-like
//! traversal comes out as a flat ordered sequence; once a topic fans out,
//! each subscription's sub-path is kept contiguous under its branch root,
//! with sibling branches in gateway-returned subscription order. Ordering is
//! decided here, not by execution order.

use super::models::{FlowNode, FlowResult, ObjectRef};

/// One resolver visit plus the log index of the node that enqueued it.
#[derive(Debug, Clone)]
pub(crate) struct VisitEntry {
    pub node: FlowNode,
    pub parent: Option<usize>,
}

/// Flatten the visit log into a `FlowResult`.
///
/// The log arrives in discovery (pop) order, so each node's children appear
/// after it and, among themselves, in enqueue order. A pre-order walk over
/// the parent links therefore yields chains unchanged and groups every
/// branch's sub-path behind its branch point.
pub(crate) fn assemble(start: &ObjectRef, log: Vec<VisitEntry>) -> FlowResult {
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); log.len()];
    let mut roots: Vec<usize> = Vec::new();
    for (index, entry) in log.iter().enumerate() {
        match entry.parent {
            Some(parent) => children[parent].push(index),
            None => roots.push(index),
        }
    }

    let mut nodes: Vec<Option<FlowNode>> = log.into_iter().map(|e| Some(e.node)).collect();

    let mut flow_path = Vec::with_capacity(nodes.len());
    let mut stack: Vec<usize> = roots.into_iter().rev().collect();
    while let Some(index) = stack.pop() {
        if let Some(node) = nodes[index].take() {
            flow_path.push(node);
        }
        for &child in children[index].iter().rev() {
            stack.push(child);
        }
    }

    FlowResult {
        starting_queue_manager: start.queue_manager.clone(),
        object_name: start.object_name.clone(),
        object_type: start.object_type,
        flow_path,
    }
}
