//! TOML overrides for [`WithholdingConfig`].
//!
//! A rate file may set any subset of the configuration fields; everything
//! it leaves out keeps the statutory default. Amounts are best written as
//! quoted strings so they parse exactly:
//!
//! ```toml
//! health_rate = "0.03545"
//! pension_monthly_cap = "248850"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use salary_core::{WithholdingConfig, WithholdingConfigError};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading a rate file.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid withholding config: {0}")]
    Invalid(#[from] WithholdingConfigError),
}

/// Parses and validates a rate configuration from TOML text.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_data::parse_withholding_config;
///
/// let config = parse_withholding_config(r#"local_tax_rate = "0.2""#).unwrap();
///
/// assert_eq!(config.local_tax_rate, dec!(0.2));
/// assert_eq!(config.pension_rate, dec!(0.045));
/// ```
pub fn parse_withholding_config(text: &str) -> Result<WithholdingConfig, ConfigFileError> {
    let config: WithholdingConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Reads, parses and validates the rate file at `path`.
pub fn load_withholding_config(path: &Path) -> Result<WithholdingConfig, ConfigFileError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_withholding_config(&text)?;
    debug!(path = %path.display(), ?config, "loaded withholding config");
    Ok(config)
}
