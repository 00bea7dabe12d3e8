//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("credentials.region", "eu-west-1")?
        .set_default("web.host", "127.0.0.1")?
        .set_default("web.port", 8080)?
        .set_default("logging.level", "warn")?
        .set_default("logging.output", "stderr")
}
