//! Tool configuration.
//!
//! Everything has a default, so the tool runs with no config file and no
//! flags at all. An optional `event-photos.toml` in the base directory
//! overrides the defaults, and command-line flags override the file.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! source_dir = "photos"          # Photo tree root, relative to the base directory
//! json_output = "photos.json"    # Structured manifest
//! js_output = "photosData.js"    # Script embedding the same manifest
//! js_variable = "photos"         # Name assigned in the script file
//! report_skipped = false         # List skipped event folders on stderr
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the optional config file looked up in the base directory.
pub const CONFIG_FILE: &str = "event-photos.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration loaded from `event-photos.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EventPhotosConfig {
    /// Photo tree root, relative to the base directory.
    pub source_dir: String,
    /// File name of the JSON manifest.
    pub json_output: String,
    /// File name of the script that assigns the manifest to a constant.
    pub js_output: String,
    /// Name of the constant declared in the script file.
    pub js_variable: String,
    /// Report skipped event folders and stray photos on stderr.
    pub report_skipped: bool,
}

impl Default for EventPhotosConfig {
    fn default() -> Self {
        Self {
            source_dir: "photos".to_string(),
            json_output: "photos.json".to_string(),
            js_output: "photosData.js".to_string(),
            js_variable: "photos".to_string(),
            report_skipped: false,
        }
    }
}

impl EventPhotosConfig {
    /// Validate values that serde alone cannot check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "source_dir must not be empty".into(),
            ));
        }
        if self.json_output.trim().is_empty() || self.js_output.trim().is_empty() {
            return Err(ConfigError::Validation(
                "json_output and js_output must not be empty".into(),
            ));
        }
        if self.json_output == self.js_output {
            return Err(ConfigError::Validation(
                "json_output and js_output must be different files".into(),
            ));
        }
        if !is_js_identifier(&self.js_variable) {
            return Err(ConfigError::Validation(format!(
                "js_variable '{}' is not a valid JavaScript identifier",
                self.js_variable
            )));
        }
        Ok(())
    }
}

/// `[A-Za-z_$][A-Za-z0-9_$]*`
fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    // A struct of strings and a bool always serializes to a TOML table.
    toml::Value::try_from(EventPhotosConfig::default())
        .unwrap_or_else(|_| toml::Value::Table(toml::Table::new()))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `event-photos.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from the base directory: stock defaults with the file's
/// values on top, unknown keys rejected, result validated.
pub fn load_config(base: &Path) -> Result<EventPhotosConfig, ConfigError> {
    let merged = match load_raw_config(base)? {
        Some(overlay) => merge_toml(stock_defaults_value(), overlay),
        None => stock_defaults_value(),
    };
    let config: EventPhotosConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `event-photos.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# event-photos configuration
# ==========================
# Place this file next to the photos/ directory. All settings are optional;
# the values below are the defaults. Unknown keys cause an error.

# Photo tree root, relative to this directory.
# Expected layout: <source_dir>/<year>/<month>/<dd-mm-yyyy - Event name>/...
source_dir = "photos"

# JSON array of photo records, pretty-printed with 2-space indentation.
json_output = "photos.json"

# Script file containing `const <js_variable> = <same array>;` so a page can
# include the manifest with a plain <script> tag.
js_output = "photosData.js"
js_variable = "photos"

# List event folders skipped for a malformed name, and photos found outside
# any event folder, on stderr. Output files are not affected.
report_skipped = false
"##
}
