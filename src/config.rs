//! Configuration file support for bom-stockcheck.
//!
//! Provides YAML-based configuration through `bom-stockcheck.config.yml`
//! files placed next to the BOM, including data structures, file loading
//! and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::shared::Result;
use crate::stock_check::domain::VendorKind;

pub const CONFIG_FILENAME: &str = "bom-stockcheck.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub exclude_references: Option<Vec<String>>,
    pub vendors: Option<Vec<String>>,
    pub farnell_store: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Vendors listed in the file, parsed. Validation guarantees they parse.
    pub fn vendor_kinds(&self) -> Result<Option<Vec<VendorKind>>> {
        let Some(vendors) = &self.vendors else {
            return Ok(None);
        };
        let kinds = vendors
            .iter()
            .map(|v| VendorKind::from_str(v).map_err(|e| anyhow::anyhow!(e)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Some(kinds))
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

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

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
    if let Some(ref patterns) = config.exclude_references {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                bail!(
                    "Invalid config: exclude_references[{}] must not be empty.\n\n\
                     💡 Hint: Use a regular expression such as \"^TP\" to skip test points.",
                    i
                );
            }
        }
    }

    if let Some(ref vendors) = config.vendors {
        if vendors.is_empty() {
            bail!(
                "Invalid config: vendors must not be empty.\n\n\
                 💡 Hint: Remove the key to check every vendor, or list at least one."
            );
        }
        for (i, vendor) in vendors.iter().enumerate() {
            if let Err(e) = VendorKind::from_str(vendor) {
                bail!("Invalid config: vendors[{}]: {}", i, e);
            }
        }
    }

    if let Some(ref store) = config.farnell_store {
        if store.trim().is_empty() {
            bail!("Invalid config: farnell_store must not be empty.");
        }
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
