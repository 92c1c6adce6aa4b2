//! Config loading shared by CLI handlers.

use std::path::Path;

use super::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Load the config file and initialize logging for a one-shot command.
///
/// One-shot commands print their results on stdout, so logging is held at
/// `warn` unless `-v` is given.
#[allow(clippy::result_large_err)]
pub fn load_for_command(path: &Path) -> Result<Config> {
    let mut config = Config::load(path)?;
    config.logging.level = match output::verbosity() {
        0 => "warn".into(),
        1 => "info".into(),
        _ => "debug".into(),
    };
    config.init_logging();
    Ok(config)
}
