//! Configuration schema definitions
//!
//! Defines the structure of configuration files using serde for serialization.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::flow::MissingRemoteManager;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Object type assumed when the caller does not specify one
    #[serde(default = "default_object_type")]
    pub default_object_type: String,

    /// Topology snapshot served by the offline gateway
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,

    /// Resolver configuration
    #[serde(default)]
    pub resolver: ResolverConfig,
}

/// Resolver configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Timeout for each individual gateway call, in seconds (0 disables)
    #[serde(default = "default_call_timeout_secs")]
    pub call_timeout_secs: u64,

    /// Overall traversal budget in seconds (0 disables); an elapsed budget
    /// returns the partial result accumulated so far
    #[serde(default = "default_overall_timeout_secs")]
    pub overall_timeout_secs: u64,

    /// Policy for remote definitions with a blank remote-queue-manager
    /// attribute: "same" or "unresolved"
    #[serde(default)]
    pub missing_remote_queue_manager: MissingRemoteManager,
}

// Default value functions
fn default_object_type() -> String {
    "queue".to_string()
}

fn default_call_timeout_secs() -> u64 {
    30
}

fn default_overall_timeout_secs() -> u64 {
    0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_object_type: default_object_type(),
            snapshot_path: None,
            resolver: ResolverConfig::default(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            call_timeout_secs: default_call_timeout_secs(),
            overall_timeout_secs: default_overall_timeout_secs(),
            missing_remote_queue_manager: MissingRemoteManager::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.default_object_type, "queue");
        assert_eq!(config.resolver.call_timeout_secs, 30);
        assert_eq!(
            config.resolver.missing_remote_queue_manager,
            MissingRemoteManager::SameManager
        );
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("defaultObjectType"));
        assert!(yaml.contains("callTimeoutSecs"));
    }

    #[test]
    fn test_config_deserialization() {
        let yaml = r#"
defaultObjectType: topic
snapshotPath: /var/lib/mqflow/topology.yaml
resolver:
  missingRemoteQueueManager: unresolved
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.default_object_type, "topic");
        assert_eq!(
            config.snapshot_path.as_deref(),
            Some(std::path::Path::new("/var/lib/mqflow/topology.yaml"))
        );
        assert_eq!(
            config.resolver.missing_remote_queue_manager,
            MissingRemoteManager::Unresolved
        );
        // Unspecified fields keep their defaults
        assert_eq!(config.resolver.call_timeout_secs, 30);
    }
}
