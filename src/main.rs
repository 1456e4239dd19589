//! mqflow - Trace the delivery path of a queue or topic through a network of
//! queue managers
//!
//! Resolves every hop a message would take from a starting object to its
//! final resting point(s) and prints the flow path as JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};

use mqflow::cli::{handle_config_command, handle_trace_command, init_logging, ConfigSubcommand, TraceArgs};

/// Trace the delivery path of a queue or topic through a network of queue managers
#[derive(Parser, Debug)]
#[command(name = "mqflow")]
#[command(about = "Trace message flow paths across queue managers", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Trace the flow path of a queue or topic
    Trace(TraceArgs),

    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging if debug flag is set
    let log_file = init_logging(cli.debug);

    // Print log file location to stderr so it never mixes with JSON output
    if let Some(ref log_path) = log_file {
        eprintln!(
            "Debug logging enabled. Logs written to: {}",
            log_path.display()
        );
        tracing::debug!("Debug logging enabled");
    }

    match cli.command {
        Command::Trace(args) => handle_trace_command(args).await,
        Command::Config { subcommand } => handle_config_command(subcommand).await,
    }
}
