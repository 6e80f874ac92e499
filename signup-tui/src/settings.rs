//! Loading the form configuration.

use std::fs;
use std::io;
use std::path::Path;

use signup_form::FormConfig;

use crate::error::AppError;

/// Load the form configuration from a JSON file.
///
/// A missing file yields the default configuration; unset keys take their
/// default values.
pub fn load_form_config(path: &Path) -> Result<FormConfig, AppError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(FormConfig::default());
        }
        Err(e) => return Err(e.into()),
    };

    let config = serde_json::from_str(&contents).map_err(|source| AppError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}
