//! Configuration errors.
//!
//! Every error here is a startup error: a preset or consumer configuration
//! that cannot be resolved is reported as-is and never patched over.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Serialization format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Picks the format from a file extension (`yaml`, `yml` or `json`).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Yaml => f.write_str("YAML"),
            ConfigFormat::Json => f.write_str("JSON"),
        }
    }
}

/// Error returned when a preset or configuration cannot be loaded or resolved.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not name a supported format.
    #[error("unsupported config file '{}': expected a .yaml, .yml or .json extension", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The document does not have the expected shape.
    #[error("malformed {format} config: {message}")]
    Parse {
        format: ConfigFormat,
        message: String,
    },

    /// The resolved configuration could not be serialized.
    #[error("failed to serialize resolved config as {format}: {message}")]
    Serialize {
        format: ConfigFormat,
        message: String,
    },

    /// A utility or component selector is not a class selector.
    #[error("invalid selector '{selector}' in {section} of plugin '{plugin}': expected a class selector starting with '.'")]
    InvalidSelector {
        plugin: String,
        section: &'static str,
        selector: String,
    },

    /// A theme category or token key is malformed.
    #[error("invalid theme token in '{category}': {reason}")]
    InvalidToken { category: String, reason: String },

    /// A `theme(...)` reference in a plugin declaration names no token.
    #[error("plugin '{plugin}' references unknown theme value '{path}'")]
    UnresolvedThemeReference { plugin: String, path: String },

    /// The class prefix is empty or contains whitespace.
    #[error("invalid prefix '{0}': must be non-empty and contain no whitespace")]
    InvalidPrefix(String),

    /// The variant separator is empty, contains whitespace or is reserved.
    #[error("invalid separator '{0}': must be non-empty, contain no whitespace and not be '-', '_' or '/'")]
    InvalidSeparator(String),

    /// A plugin was referenced by a name that is not built in.
    #[error("unknown plugin '{name}'. Available: {}", .available.join(", "))]
    UnknownPlugin {
        name: String,
        available: Vec<String>,
    },

    /// A `corePlugins` entry names no known core plugin.
    #[error("unknown core plugin '{0}'")]
    UnknownCorePlugin(String),

    /// A plugin depends on a core plugin that the configuration disabled.
    #[error("plugin '{plugin}' requires core plugin '{core_plugin}', which is disabled")]
    DisabledRequirement { plugin: String, core_plugin: String },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
