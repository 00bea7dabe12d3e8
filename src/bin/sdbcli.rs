//! sdbcli Binary
//!
//! Interactive console (default) and read-only web viewer for the attribute store.

use clap::Parser;
use sdbview::cli::{Cli, Commands, Console};
use sdbview::config::{ConfigLoader, Credentials, SdbConfig};
use sdbview::error::AppError;
use sdbview::logging::{init_logging, LoggingConfig};
use sdbview::store::fixture::Fixture;
use sdbview::store::{MemoryClient, SharedClient};
use sdbview::web::{run_web_server, WebServerConfig};
use std::process;
use std::sync::Arc;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load_with(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("sdbcli starting");

    // Missing credentials are reported on stdout and end the run without an action
    let credentials = match Credentials::resolve(
        cli.access_key.as_deref(),
        cli.secret_key.as_deref(),
        cli.region.as_deref(),
        &config.credentials,
    ) {
        Ok(credentials) => credentials,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };

    let client = match build_client(&cli, &config, &credentials) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to set up store client: {}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let result = match cli.command.clone().unwrap_or(Commands::Console) {
        Commands::Console => run_console(client),
        Commands::Serve { host, port } => {
            run_web(WebServerConfig::from_config(&config.web, host, port), client)
        }
    };

    if let Err(e) = result {
        error!("sdbcli failed: {}", e);
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run_console(client: SharedClient) -> Result<(), AppError> {
    let stdin = std::io::stdin();
    let mut console = Console::new(client, std::io::stdout())?;
    console.run(stdin.lock())
}

fn run_web(web_config: WebServerConfig, client: SharedClient) -> Result<(), AppError> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run_web_server(web_config, client))
}

/// Construct the single client handle shared by the console or web viewer.
fn build_client(
    cli: &Cli,
    config: &SdbConfig,
    credentials: &Credentials,
) -> Result<SharedClient, AppError> {
    let fixture_path = cli.fixture.clone().or_else(|| config.store.fixture.clone());
    let client = match fixture_path {
        Some(path) => {
            let fixture = Fixture::load(&path)?;
            info!(fixture = %path.display(), domains = fixture.domains.len(), "seeding in-memory store");
            MemoryClient::from_fixture(&fixture)
        }
        None => MemoryClient::new(),
    };
    info!(region = %credentials.region, "store client ready");
    Ok(Arc::new(client))
}

/// Build logging configuration from CLI args and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &SdbConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    // The web viewer has no command output to protect; default it to request logs
    if matches!(cli.command, Some(Commands::Serve { .. })) && logging.level == "warn" {
        logging.level = "info".to_string();
    }
    if cli.quiet {
        logging.enabled = false;
    }
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }

    logging
}
