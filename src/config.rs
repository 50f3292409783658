//! Configuration file support for oc2oscal.
//!
//! Provides YAML-based configuration through `oc2oscal.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use oc2oscal::shared::Result;
use oc2oscal::ssp_generation::services::PlanIdPolicy;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "oc2oscal.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output_dir: Option<String>,
    pub plan_id: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `plan_id`, if set
    pub fn plan_id_policy(&self) -> Result<Option<PlanIdPolicy>> {
        self.plan_id
            .as_deref()
            .map(|value| value.parse::<PlanIdPolicy>().map_err(anyhow::Error::msg))
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str::<Option<ConfigFile>>(&content)
        .with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
        .unwrap_or_default();

    validate_config(&config)?;
    warn_unknown_fields(&config);

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
    if let Some(ref output_dir) = config.output_dir {
        if output_dir.trim().is_empty() {
            bail!(
                "Invalid config: output_dir must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default 'oscal' directory."
            );
        }
    }

    if let Err(e) = config.plan_id_policy() {
        bail!("Invalid config: {}", e);
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
