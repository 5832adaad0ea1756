//! Comparison configuration: TOML file, then command-line overrides.
//!
//! A config file only needs the keys it changes:
//!
//! ```toml
//! volume_marker = "Volume 3"
//! allowed_libraries = ["Core", "Oncology"]
//! path_delimiter = " >> "
//! include_conditionally_required = false
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use mdr_model::CompareConfig;

/// Values given on the command line; `None`/empty leaves the file value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub volume_marker: Option<String>,
    pub libraries: Vec<String>,
    pub path_delimiter: Option<String>,
    /// Only ever widens the scope; absent means "keep the file value".
    pub include_conditionally_required: bool,
}

impl ConfigOverrides {
    pub fn apply(self, mut config: CompareConfig) -> CompareConfig {
        if let Some(marker) = self.volume_marker {
            config.volume_marker = marker;
        }
        if !self.libraries.is_empty() {
            config.allowed_libraries = self.libraries.into_iter().collect();
        }
        if let Some(delimiter) = self.path_delimiter {
            config.path_delimiter = delimiter;
        }
        if self.include_conditionally_required {
            config.include_conditionally_required = true;
        }
        config
    }
}

/// Parses a TOML config file.
pub fn load_config_file(path: &Path) -> Result<CompareConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    let config: CompareConfig = toml::from_str(&content)
        .with_context(|| format!("parse config file {}", path.display()))?;
    info!(path = %path.display(), "loaded comparison config");
    Ok(config)
}

/// File values (or defaults), overridden by command-line values, validated.
pub fn resolve_config(file: Option<&Path>, overrides: ConfigOverrides) -> Result<CompareConfig> {
    let base = match file {
        Some(path) => load_config_file(path)?,
        None => CompareConfig::default(),
    };
    let config = overrides.apply(base);
    config.validate().context("invalid comparison config")?;
    debug!(
        volume_marker = %config.volume_marker,
        libraries = config.allowed_libraries.len(),
        path_delimiter = %config.path_delimiter,
        include_conditionally_required = config.include_conditionally_required,
        "resolved comparison config"
    );
    Ok(config)
}
