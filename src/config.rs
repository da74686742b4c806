//! Scenario files: JSON objects keyed by [`Assumptions`] field names.
//!
//! ```json
//! { "price": 1300000, "monthly_rent": 3100, "down_payment_source": "cash" }
//! ```
//!
//! Missing keys take the reference defaults.

use crate::core::assumptions::Assumptions;
use crate::core::error::ProjectionError;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors arising while loading a scenario.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ProjectionError),
}

/// Parse and validate a scenario from JSON text.
pub fn parse_assumptions(json: &str) -> Result<Assumptions, ConfigError> {
    let assumptions: Assumptions = serde_json::from_str(json)?;
    assumptions.validate()?;
    Ok(assumptions)
}

/// Read, parse and validate a scenario file.
pub fn load_assumptions(path: impl AsRef<Path>) -> Result<Assumptions, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded scenario from {}", path.display());
    parse_assumptions(&content)
}
