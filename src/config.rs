//! Configuration file support for depgraph-report.
//!
//! Provides YAML-based configuration through `depgraph-report.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::shared::error::ReportError;
use crate::shared::Result;

/// File name looked up by [`discover_config`]
pub const CONFIG_FILENAME: &str = "depgraph-report.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub identifiers: Option<PathBuf>,
    pub edges: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parses the `format` field, if set.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|format| {
                OutputFormat::from_str(format).map_err(|message| {
                    anyhow::Error::from(ReportError::InvalidConfig {
                        message,
                        hint: "Set 'format' to 'markdown' or 'json'.".to_string(),
                    })
                })
            })
            .transpose()
    }

    /// Makes relative record and output paths relative to `base_dir`.
    fn resolve_paths(&mut self, base_dir: &Path) {
        for path in [&mut self.identifiers, &mut self.edges, &mut self.output]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base_dir.join(&*path);
            }
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
///
/// Relative paths inside the file are resolved against the file's directory.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    if let Some(base_dir) = path.parent() {
        config.resolve_paths(base_dir);
    }

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.output_format()?;

    let paths = [
        ("identifiers", &config.identifiers),
        ("edges", &config.edges),
        ("output", &config.output),
    ];
    for (key, path) in paths {
        if let Some(path) = path {
            if path.as_os_str().to_string_lossy().trim().is_empty() {
                return Err(ReportError::InvalidConfig {
                    message: format!("'{}' must not be empty.", key),
                    hint: format!("Remove '{}' or give it a file path.", key),
                }
                .into());
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
