//! Presets and consumer configurations.
//!
//! A [`Preset`] and a consumer [`Config`] share one shape: the consumer is
//! simply the last layer. Both can be written in YAML or JSON with the same
//! camelCase keys as a `tailwind.config` object:
//!
//! ```yaml
//! darkMode: class
//! corePlugins:
//!   container: false
//! presets:
//!   - name: project
//!     theme:
//!       extend:
//!         gap: { "0.25": 0.0625rem }
//!     plugins: [typography, forms, container-queries]
//! content:
//!   files: ["./src/**/*.{ts,tsx,astro}"]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::core_plugins::CorePlugins;
use crate::error::{ConfigError, ConfigFormat};
use crate::plugin::PluginRef;
use crate::theme::ThemeLayer;

/// How dark-mode variants are triggered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// `prefers-color-scheme` media query.
    #[default]
    Media,
    /// A `.dark` class on an ancestor.
    Class,
    /// A custom selector strategy.
    Selector,
}

/// Files scanned for class names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Content {
    pub files: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub relative: bool,
}

impl Content {
    pub fn files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            relative: false,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ContentDef {
    List(Vec<String>),
    Detailed {
        files: Vec<String>,
        #[serde(default)]
        relative: bool,
    },
}

impl<'de> Deserialize<'de> for Content {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match ContentDef::deserialize(deserializer)? {
            ContentDef::List(files) => Content {
                files,
                relative: false,
            },
            ContentDef::Detailed { files, relative } => Content { files, relative },
        })
    }
}

/// One layer of style configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Preset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub presets: Vec<Preset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<DarkMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub important: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    #[serde(default, skip_serializing_if = "ThemeLayer::is_empty")]
    pub theme: ThemeLayer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_plugins: Option<CorePlugins>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginRef>,
}

/// The consumer configuration: the last, highest-precedence layer.
pub type Config = Preset;

impl Preset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Adds a nested preset, layered before this one.
    pub fn preset(mut self, preset: Preset) -> Self {
        self.presets.push(preset);
        self
    }

    pub fn dark_mode(mut self, mode: DarkMode) -> Self {
        self.dark_mode = Some(mode);
        self
    }

    pub fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    pub fn separator(mut self, separator: &str) -> Self {
        self.separator = Some(separator.to_string());
        self
    }

    pub fn important(mut self, important: bool) -> Self {
        self.important = Some(important);
        self
    }

    pub fn theme(mut self, theme: ThemeLayer) -> Self {
        self.theme = theme;
        self
    }

    pub fn core_plugins(mut self, plugins: CorePlugins) -> Self {
        self.core_plugins = Some(plugins);
        self
    }

    /// Disables a core plugin, keeping any other toggles of this layer.
    pub fn disable_core_plugin(mut self, name: &str) -> Self {
        match &mut self.core_plugins {
            Some(CorePlugins::Toggles(map)) => {
                map.insert(name.to_string(), false);
            }
            Some(CorePlugins::Enabled(list)) => list.retain(|n| n != name),
            None => self.core_plugins = Some(CorePlugins::disabled([name])),
        }
        self
    }

    pub fn content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    pub fn plugin(mut self, plugin: impl Into<PluginRef>) -> Self {
        self.plugins.push(plugin.into());
        self
    }

    /// Human-readable layer name for logs and errors.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<anonymous>")
    }

    /// Flattens nested presets into resolution order.
    ///
    /// A preset's own presets come first (depth-first), then the preset.
    pub fn layers(&self) -> Vec<&Preset> {
        let mut out = Vec::new();
        self.collect_layers(&mut out);
        out
    }

    fn collect_layers<'a>(&'a self, out: &mut Vec<&'a Preset>) {
        for preset in &self.presets {
            preset.collect_layers(out);
        }
        out.push(self);
    }

    /// Checks the shape constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(prefix) = &self.prefix {
            if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidPrefix(prefix.clone()));
            }
        }
        if let Some(separator) = &self.separator {
            if separator.is_empty()
                || separator.chars().any(char::is_whitespace)
                || matches!(separator.as_str(), "-" | "_" | "/")
            {
                return Err(ConfigError::InvalidSeparator(separator.clone()));
            }
        }
        self.theme.validate()?;
        if let Some(core_plugins) = &self.core_plugins {
            core_plugins.validate()?;
        }
        Ok(())
    }

    /// Parses a preset from YAML.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(source).map_err(|e| ConfigError::Parse {
            format: ConfigFormat::Yaml,
            message: e.to_string(),
        })
    }

    /// Parses a preset from JSON.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(source).map_err(|e| ConfigError::Parse {
            format: ConfigFormat::Json,
            message: e.to_string(),
        })
    }

    /// Loads a preset from a `.yaml`, `.yml` or `.json` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(ConfigFormat::from_extension)
            .ok_or_else(|| ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            })?;
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), %format, "loading style config");
        match format {
            ConfigFormat::Yaml => Self::from_yaml_str(&source),
            ConfigFormat::Json => Self::from_json_str(&source),
        }
    }
}
