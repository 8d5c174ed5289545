//! Layer resolution.
//!
//! Resolution is a left-to-right fold over layers:
//!
//! 1. built-in default theme (unless the resolver is [`Resolver::bare`])
//! 2. every preset, nested presets first
//! 3. the consumer configuration
//!
//! Each layer is validated before it is applied, so a malformed preset fails
//! the whole resolution with the layer's error. Plugins run last, against the
//! fully resolved theme, and their contributions are folded with
//! [`Contribution::merge`].

use std::collections::BTreeMap;

use indexmap::IndexSet;
use serde::Serialize;

use crate::core_plugins::{is_core_plugin, CorePluginState, CORE_PLUGINS};
use crate::error::{ConfigError, ConfigFormat};
use crate::plugin::Contribution;
use crate::preset::{Config, Content, DarkMode};
use crate::style::{class_name, StyleSheet};
use crate::theme::Theme;

/// Default variant separator.
pub const DEFAULT_SEPARATOR: &str = ":";

/// The single resolved configuration handed to every consumer.
///
/// Built once at startup and never mutated afterwards. Serializing the same
/// resolution twice yields identical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub dark_mode: DarkMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    pub important: bool,
    pub separator: String,
    pub theme: Theme,
    /// Every known core plugin and whether it is enabled.
    pub core_plugins: BTreeMap<String, bool>,
    pub content: Content,
    pub base: StyleSheet,
    pub utilities: StyleSheet,
    pub components: StyleSheet,
    pub variants: Vec<String>,
    /// Names of the plugins that contributed, in order.
    pub plugins: Vec<String>,
}

impl ResolvedConfig {
    pub fn is_enabled(&self, core_plugin: &str) -> bool {
        self.core_plugins.get(core_plugin).copied().unwrap_or(false)
    }

    pub fn disabled_core_plugins(&self) -> impl Iterator<Item = &str> {
        self.core_plugins
            .iter()
            .filter(|(_, enabled)| !**enabled)
            .map(|(name, _)| name.as_str())
    }

    /// Returns whether a plugin with this name contributed.
    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p == name)
    }

    /// Class names of every plugin utility, in order.
    pub fn utility_classes(&self) -> impl Iterator<Item = &str> {
        self.utilities.keys().filter_map(|s| class_name(s))
    }

    /// Class names of every plugin component, in order.
    pub fn component_classes(&self) -> impl Iterator<Item = &str> {
        self.components.keys().filter_map(|s| class_name(s))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            format: ConfigFormat::Json,
            message: e.to_string(),
        })
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Serialize {
            format: ConfigFormat::Yaml,
            message: e.to_string(),
        })
    }
}

/// Resolves configurations into [`ResolvedConfig`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolver {
    include_defaults: bool,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// A resolver that starts from the built-in default theme.
    pub fn new() -> Self {
        Self {
            include_defaults: true,
        }
    }

    /// A resolver that starts from an empty theme.
    pub fn bare() -> Self {
        Self {
            include_defaults: false,
        }
    }

    pub fn includes_defaults(&self) -> bool {
        self.include_defaults
    }

    /// Resolves `config` and all of its presets.
    ///
    /// Layers apply in order, deepest preset first and `config` last. Each
    /// layer replaces whole theme categories before its own `extend` is
    /// merged in, so a later replacement of a category drops what earlier
    /// layers extended it with.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed layer, unknown plugin, plugin error, or
    /// plugin that requires an unknown or disabled core plugin.
    pub fn resolve(&self, config: &Config) -> Result<ResolvedConfig, ConfigError> {
        let layers = config.layers();
        for layer in &layers {
            layer.validate()?;
        }

        let mut theme = if self.include_defaults {
            Theme::tailwind_default().clone()
        } else {
            Theme::new()
        };
        let mut dark_mode = DarkMode::default();
        let mut prefix = None;
        let mut important = false;
        let mut separator = DEFAULT_SEPARATOR.to_string();
        let mut core_plugins = CorePluginState::default();
        let mut content = Content::default();
        let mut plugins = Vec::new();

        for (index, layer) in layers.iter().enumerate() {
            tracing::debug!(index, layer = layer.label(), "applying style layer");
            theme.apply(&layer.theme);
            if let Some(mode) = layer.dark_mode {
                dark_mode = mode;
            }
            if let Some(p) = &layer.prefix {
                prefix = Some(p.clone());
            }
            if let Some(i) = layer.important {
                important = i;
            }
            if let Some(s) = &layer.separator {
                separator = s.clone();
            }
            if let Some(toggles) = &layer.core_plugins {
                core_plugins.apply(toggles);
            }
            if let Some(c) = &layer.content {
                content = c.clone();
            }
            plugins.extend(layer.plugins.iter());
        }

        let core_plugins: BTreeMap<String, bool> = CORE_PLUGINS
            .iter()
            .map(|name| (name.to_string(), core_plugins.is_enabled(name)))
            .collect();

        let mut contribution = Contribution::new();
        let mut applied = IndexSet::new();
        for entry in plugins {
            let plugin = entry.resolve()?;
            for required in plugin.requires() {
                if !is_core_plugin(&required) {
                    return Err(ConfigError::UnknownCorePlugin(required));
                }
                if !core_plugins.get(&required).copied().unwrap_or(false) {
                    return Err(ConfigError::DisabledRequirement {
                        plugin: plugin.name().to_string(),
                        core_plugin: required,
                    });
                }
            }
            let output = plugin.contribute(&theme)?;
            tracing::trace!(
                plugin = plugin.name(),
                base = output.base.len(),
                utilities = output.utilities.len(),
                components = output.components.len(),
                "plugin contributed"
            );
            contribution = contribution.merge(output);
            applied.insert(plugin.name().to_string());
        }

        let resolved = ResolvedConfig {
            dark_mode,
            prefix,
            important,
            separator,
            theme,
            core_plugins,
            content,
            base: contribution.base,
            utilities: contribution.utilities,
            components: contribution.components,
            variants: contribution.variants,
            plugins: applied.into_iter().collect(),
        };
        tracing::debug!(
            layers = layers.len(),
            plugins = resolved.plugins.len(),
            disabled = resolved.disabled_core_plugins().count(),
            "resolved style config"
        );
        Ok(resolved)
    }
}

/// Resolves `config` starting from the built-in default theme.
pub fn resolve(config: &Config) -> Result<ResolvedConfig, ConfigError> {
    Resolver::new().resolve(config)
}
