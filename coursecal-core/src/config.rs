//! Converter configuration.
//!
//! Loaded from `~/.config/coursecal/config.toml` (or an explicit path).
//! Every field has a default, so a missing file is the same as an empty one.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, ConvertResult};

static DEFAULT_UID_DOMAIN: &str = "rhodes.edu";
static DEFAULT_VENDOR: &str = "Rhodes College";
static DEFAULT_PRODUCT: &str = "Schedule Converter";

/// Zero-based index of the header row in registrar exports.
pub const DEFAULT_HEADER_ROW: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub calendar: CalendarConfig,

    #[serde(default)]
    pub input: InputConfig,
}

/// Settings that shape the generated calendar document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Appended to every UID after `@`
    #[serde(default = "default_uid_domain")]
    pub uid_domain: String,

    #[serde(default = "default_vendor")]
    pub vendor: String,

    #[serde(default = "default_product")]
    pub product: String,
}

/// Settings for reading the source spreadsheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Zero-based row holding the column names; rows above it are ignored
    #[serde(default = "default_header_row")]
    pub header_row: usize,

    /// Worksheet to read (default: the first one)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet: Option<String>,
}

fn default_uid_domain() -> String {
    DEFAULT_UID_DOMAIN.to_string()
}

fn default_vendor() -> String {
    DEFAULT_VENDOR.to_string()
}

fn default_product() -> String {
    DEFAULT_PRODUCT.to_string()
}

fn default_header_row() -> usize {
    DEFAULT_HEADER_ROW
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            uid_domain: default_uid_domain(),
            vendor: default_vendor(),
            product: default_product(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            header_row: default_header_row(),
            sheet: None,
        }
    }
}

impl CalendarConfig {
    /// `PRODID` value: `-//<vendor>//<product> v1.0//EN`
    pub fn prodid(&self) -> String {
        format!("-//{}//{} v1.0//EN", self.vendor, self.product)
    }
}

impl Config {
    pub fn config_path() -> ConvertResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConvertError::Config("Could not determine config directory".into()))?
            .join("coursecal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config at `path`, or the default location when `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> ConvertResult<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> ConvertResult<Self> {
        toml::from_str(content).map_err(|e| ConvertError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ConvertResult<()> {
        let contents = format!(
            "\
# coursecal configuration

[calendar]
# Domain appended to event UIDs:
# uid_domain = \"{DEFAULT_UID_DOMAIN}\"

# PRODID is built as -//<vendor>//<product> v1.0//EN
# vendor = \"{DEFAULT_VENDOR}\"
# product = \"{DEFAULT_PRODUCT}\"

[input]
# Zero-based row holding the column names:
# header_row = {DEFAULT_HEADER_ROW}

# Worksheet to read (defaults to the first sheet):
# sheet = \"Sheet1\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConvertError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ConvertError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
