//! Service layer
//!
//! Thin façade between callers (CLI, embedding applications) and the flow
//! resolver. Owns the gateway and validates the starting triple before a
//! traversal begins.

pub mod flow_service;

pub use flow_service::FlowService;
