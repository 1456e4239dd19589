//! Configuration system for mqflow
//!
//! Layered YAML configuration: built-in defaults, a root config file, and
//! environment variable overrides.

mod defaults;
pub mod loader;
pub mod paths;
pub mod schema;

use std::time::Duration;

pub use loader::ConfigLoader;
pub use schema::Config;
#[allow(unused_imports)] // Public API exports - may be used by external code
pub use schema::ResolverConfig;

use crate::flow::{MissingRemoteManager, ResolveOptions};

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &schema::Config, key: &str) -> anyhow::Result<String> {
    match key {
        "defaultObjectType" => Ok(config.default_object_type.clone()),
        "snapshotPath" => Ok(config
            .snapshot_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "resolver.callTimeoutSecs" => Ok(config.resolver.call_timeout_secs.to_string()),
        "resolver.overallTimeoutSecs" => Ok(config.resolver.overall_timeout_secs.to_string()),
        "resolver.missingRemoteQueueManager" => Ok(
            match config.resolver.missing_remote_queue_manager {
                MissingRemoteManager::SameManager => "same".to_string(),
                MissingRemoteManager::Unresolved => "unresolved".to_string(),
            },
        ),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key (dot notation)
pub fn set_config_value(config: &mut schema::Config, key: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    match key {
        "defaultObjectType" => {
            value
                .parse::<crate::models::ObjectType>()
                .map_err(|e| anyhow::anyhow!(e))?;
            config.default_object_type = value.to_string();
        }
        "snapshotPath" => {
            if value.is_empty() {
                config.snapshot_path = None;
            } else {
                config.snapshot_path = Some(value.into());
            }
        }
        "resolver.callTimeoutSecs" => {
            config.resolver.call_timeout_secs = value
                .parse()
                .context("resolver.callTimeoutSecs must be a number")?;
        }
        "resolver.overallTimeoutSecs" => {
            config.resolver.overall_timeout_secs = value
                .parse()
                .context("resolver.overallTimeoutSecs must be a number")?;
        }
        "resolver.missingRemoteQueueManager" => {
            config.resolver.missing_remote_queue_manager = match value {
                "same" => MissingRemoteManager::SameManager,
                "unresolved" => MissingRemoteManager::Unresolved,
                _ => {
                    return Err(anyhow::anyhow!(
                        "resolver.missingRemoteQueueManager must be 'same' or 'unresolved'"
                    ))
                }
            };
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    Ok(())
}

/// Build resolver options from the resolver section of the config.
pub fn resolve_options(config: &Config) -> ResolveOptions {
    let secs_to_duration = |secs: u64| (secs > 0).then(|| Duration::from_secs(secs));
    ResolveOptions {
        missing_remote_manager: config.resolver.missing_remote_queue_manager,
        call_timeout: secs_to_duration(config.resolver.call_timeout_secs),
        overall_deadline: secs_to_duration(config.resolver.overall_timeout_secs),
    }
}
