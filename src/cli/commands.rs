//! CLI command handlers

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::config::{self, paths, ConfigLoader};
use crate::gateway::SnapshotGateway;
use crate::models::ObjectType;
use crate::services::FlowService;

/// Arguments for the trace command
#[derive(Args, Debug)]
pub struct TraceArgs {
    /// Queue manager hosting the starting object
    #[arg(long, short = 'm')]
    pub queue_manager: String,

    /// Name of the starting queue or topic
    #[arg(long, short = 'o')]
    pub object_name: String,

    /// Object type: queue or topic (defaults to the configured type)
    #[arg(long, short = 't')]
    pub object_type: Option<String>,

    /// Topology snapshot file (overrides config and MQFLOW_SNAPSHOT)
    #[arg(long, short = 's')]
    pub snapshot: Option<PathBuf>,

    /// Overall traversal budget in seconds (overrides config)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(long, short = 'p')]
    pub pretty: bool,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get configuration value
    Get {
        /// Configuration key (e.g., "defaultObjectType", "resolver.callTimeoutSecs")
        key: Option<String>,
    },
    /// Set configuration value
    Set {
        /// Configuration key (e.g., "defaultObjectType", "resolver.callTimeoutSecs")
        key: String,
        /// Configuration value
        value: String,
    },
    /// List all configuration
    List,
    /// Show configuration file path
    Path,
    /// Validate configuration
    Validate,
}

/// Handle the trace command: resolve a flow path and print it as JSON
pub async fn handle_trace_command(args: TraceArgs) -> Result<()> {
    let cfg = ConfigLoader::load().unwrap_or_else(|_| ConfigLoader::load_defaults());

    let object_type: ObjectType = args
        .object_type
        .as_deref()
        .unwrap_or(&cfg.default_object_type)
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let snapshot_path = args
        .snapshot
        .or_else(|| cfg.snapshot_path.clone())
        .unwrap_or_else(paths::default_snapshot_path);
    tracing::debug!("loading topology snapshot from {}", snapshot_path.display());
    let gateway = SnapshotGateway::from_file(&snapshot_path)?;

    let mut options = config::resolve_options(&cfg);
    if let Some(secs) = args.timeout_secs {
        options.overall_deadline = (secs > 0).then(|| std::time::Duration::from_secs(secs));
    }

    let service = FlowService::with_options(gateway, options);
    let result = service
        .resolve(&args.queue_manager, &args.object_name, object_type)
        .await?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    }
    .context("Failed to serialize flow result")?;
    println!("{}", json);

    Ok(())
}

/// Handle configuration subcommands
pub async fn handle_config_command(cmd: ConfigSubcommand) -> Result<()> {
    match cmd {
        ConfigSubcommand::Get { key } => {
            // Load config (will use defaults if no file exists)
            let cfg = ConfigLoader::load().context("Failed to load configuration")?;

            if let Some(key) = key {
                let value = config::get_config_value(&cfg, &key)?;
                println!("{}", value);
            } else {
                // Print all config as YAML
                let yaml =
                    serde_yaml::to_string(&cfg).context("Failed to serialize configuration")?;
                print!("{}", yaml);
            }
        }
        ConfigSubcommand::Set { key, value } => {
            // Load existing config or create default
            let mut cfg = ConfigLoader::load().unwrap_or_else(|_| ConfigLoader::load_defaults());

            config::set_config_value(&mut cfg, &key, &value)
                .with_context(|| format!("Failed to set {} = {}", key, value))?;

            ConfigLoader::save_root(&cfg).context("Failed to save configuration")?;
            println!("Configuration saved");
        }
        ConfigSubcommand::List => {
            let cfg = ConfigLoader::load().context("Failed to load configuration")?;

            let yaml = serde_yaml::to_string(&cfg).context("Failed to serialize configuration")?;
            print!("{}", yaml);
        }
        ConfigSubcommand::Path => {
            let config_path = paths::root_config_path();
            println!("{}", config_path.display());
        }
        ConfigSubcommand::Validate => match ConfigLoader::validate() {
            Ok(_) => {
                println!("Configuration is valid");
            }
            Err(e) => {
                eprintln!("Configuration validation failed: {}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
