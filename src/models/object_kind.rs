//! Object kind definitions
//!
//! Closed enums for the two addressable object types and the administrative
//! queue-type codes. Unknown queue-type codes map to `Other` so new object
//! kinds fail closed instead of silently.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two addressable object types a trace can start from or hop to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Queue,
    Topic,
}

impl ObjectType {
    /// Get the display name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Queue => "queue",
            ObjectType::Topic => "topic",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "queue" | "q" => Ok(ObjectType::Queue),
            "topic" | "t" => Ok(ObjectType::Topic),
            _ => Err(format!("unknown object type: {} (expected queue or topic)", s)),
        }
    }
}

/// Administrative queue-type of a queue definition.
///
/// Mirrors the queue-type codes a queue manager reports (local=1, model=2,
/// alias=3, remote=6). Anything else deserializes to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QueueType {
    #[default]
    Local,
    Alias,
    Remote,
    Model,
    Other,
}

impl Serialize for QueueType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_str().to_lowercase())
    }
}

impl<'de> Deserialize<'de> for QueueType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.to_lowercase().as_str() {
            "local" => QueueType::Local,
            "alias" => QueueType::Alias,
            "remote" => QueueType::Remote,
            "model" => QueueType::Model,
            // Unknown queue types fail closed to a generic terminal kind
            _ => QueueType::Other,
        })
    }
}

impl QueueType {
    /// Get the display name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueType::Local => "Local",
            QueueType::Alias => "Alias",
            QueueType::Remote => "Remote",
            QueueType::Model => "Model",
            QueueType::Other => "Other",
        }
    }

    /// Map a numeric queue-type code to a kind, failing closed to `Other`.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => QueueType::Local,
            2 => QueueType::Model,
            3 => QueueType::Alias,
            6 => QueueType::Remote,
            _ => QueueType::Other,
        }
    }
}

impl fmt::Display for QueueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
