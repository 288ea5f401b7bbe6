// File: signup-form/src/config.rs
// Purpose: Selector and class-name configuration for the form validator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How the validator finds the form and paints field containers
///
/// Keys are snake_case in TOML; the camelCase aliases let the same struct be
/// read from a JavaScript object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Selector used to locate the form (default: "form")
    #[serde(default = "default_form_selector", alias = "formSelector")]
    pub form_selector: String,

    /// Selector of the message slot inside each container (default: ".error")
    #[serde(default = "default_error_slot_selector", alias = "errorSlotSelector")]
    pub error_slot_selector: String,

    #[serde(default = "default_success_class", alias = "successClass")]
    pub success_class: String,

    #[serde(default = "default_error_class", alias = "errorClass")]
    pub error_class: String,
}

fn default_form_selector() -> String {
    "form".to_string()
}

fn default_error_slot_selector() -> String {
    ".error".to_string()
}

fn default_success_class() -> String {
    "success".to_string()
}

fn default_error_class() -> String {
    "error".to_string()
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            form_selector: default_form_selector(),
            error_slot_selector: default_error_slot_selector(),
            success_class: default_success_class(),
            error_class: default_error_class(),
        }
    }
}

impl ValidatorConfig {
    /// Parse configuration from a TOML string
    ///
    /// An empty string yields the default configuration.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        toml::from_str(content).context("Failed to parse validator config")
    }

    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {:?}", path))
    }
}
