//! Widget configuration.
//!
//! Every field has a default that reproduces the plain markup contract
//! (`<img data-default="...">`, `dragover` and `img-input-reset` classes),
//! so pages only need a configuration object to rename hooks or messages.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Log level setting for the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    #[default]
    Warn,
    /// Show errors, warnings, and info messages
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

pub const DEFAULT_ACCEPT: &str = "image/jpeg";
pub const DEFAULT_DRAG_OVER_CLASS: &str = "dragover";
pub const DEFAULT_RESET_CLASS: &str = "img-input-reset";
pub const DEFAULT_RESET_LABEL: &str = "Remove image";
pub const DEFAULT_SOURCE_ATTRIBUTE: &str = "data-default";
pub const DEFAULT_UNSUPPORTED_MESSAGE: &str = "Terribly sorry, only JPEGs are supported for now!";

/// Configuration shared by every widget attached in one activation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    /// `accept` attribute of the transient file input
    pub accept: String,

    /// Class set on the image during drag-over and loading
    pub drag_over_class: String,

    /// Class set on the remove-image link
    pub reset_class: String,

    /// Text of the remove-image link
    pub reset_label: String,

    /// Attribute holding the default (reset) source
    pub default_attribute: String,

    /// Alert shown for each rejected file
    pub unsupported_message: String,

    /// Log verbosity level
    pub log_level: LogLevel,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            accept: DEFAULT_ACCEPT.to_string(),
            drag_over_class: DEFAULT_DRAG_OVER_CLASS.to_string(),
            reset_class: DEFAULT_RESET_CLASS.to_string(),
            reset_label: DEFAULT_RESET_LABEL.to_string(),
            default_attribute: DEFAULT_SOURCE_ATTRIBUTE.to_string(),
            unsupported_message: DEFAULT_UNSUPPORTED_MESSAGE.to_string(),
            log_level: LogLevel::default(),
        }
    }
}

impl WidgetConfig {
    /// Parse a JSON object. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty class and attribute names, which the DOM would refuse.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("accept", &self.accept),
            ("drag_over_class", &self.drag_over_class),
            ("reset_class", &self.reset_class),
            ("default_attribute", &self.default_attribute),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(field));
            }
        }
        Ok(())
    }
}
