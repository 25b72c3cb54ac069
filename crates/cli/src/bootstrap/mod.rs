mod logging;

pub use logging::init_logging;

use anyhow::Context;
use ferrous_mdns_domain::{CliOverrides, Config};

/// Runs before the subscriber exists, so failures travel in the returned
/// error instead of being logged.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    Config::load(path, overrides).context("Failed to load configuration")
}
