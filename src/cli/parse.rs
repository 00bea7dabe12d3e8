//! CLI parse: clap types for sdbcli. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sdbcli - console and web viewer for a schema-less attribute store
#[derive(Parser)]
#[command(name = "sdbcli")]
#[command(about = "Command line interface and read-only web viewer for a schema-less attribute store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Access key ID
    #[arg(short = 'a', long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
    pub access_key: Option<String>,

    /// Secret access key
    #[arg(short = 's', long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_key: Option<String>,

    /// Store region (overrides configuration)
    #[arg(long)]
    pub region: Option<String>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed the in-memory store from a TOML fixture file
    #[arg(long)]
    pub fixture: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, both, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive console (default)
    Console,
    /// Serve the read-only web viewer
    Serve {
        /// Bind host
        #[arg(long)]
        host: Option<String>,
        /// Bind port
        #[arg(short, long)]
        port: Option<u16>,
    },
}
