//! Plugins: pure functions from a resolved theme to style contributions.
//!
//! A plugin never mutates shared state. It receives the resolved [`Theme`]
//! and returns a [`Contribution`]; the resolver folds contributions left to
//! right with [`Contribution::merge`].
//!
//! Three kinds of plugins can appear in a configuration:
//!
//! - built-in plugins referenced by name (`typography`, `forms`,
//!   `container-queries`, optionally written as `@tailwindcss/forms`)
//! - [`DeclaredPlugin`]s written out in the configuration file
//! - any Rust type implementing [`Plugin`], attached with [`PluginRef::custom`]

mod builtin;
mod declared;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;
use crate::style::{StyleBlock, StyleSheet};
use crate::theme::Theme;

pub use builtin::BuiltinPlugin;
pub use declared::DeclaredPlugin;

/// A style plugin.
pub trait Plugin: fmt::Debug + Send + Sync {
    /// Name reported in the resolved configuration and in errors.
    fn name(&self) -> &str;

    /// Core plugins this plugin depends on.
    ///
    /// Resolution fails if any of them is disabled.
    fn requires(&self) -> Vec<String> {
        Vec::new()
    }

    /// Produces this plugin's styles for the resolved theme.
    fn contribute(&self, theme: &Theme) -> Result<Contribution, ConfigError>;
}

/// Styles and variants produced by one plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contribution {
    pub base: StyleSheet,
    pub utilities: StyleSheet,
    pub components: StyleSheet,
    pub variants: Vec<String>,
}

impl Contribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(mut self, selector: &str, block: StyleBlock) -> Self {
        self.base.insert(selector.to_string(), block);
        self
    }

    pub fn utility(mut self, selector: &str, block: StyleBlock) -> Self {
        self.utilities.insert(selector.to_string(), block);
        self
    }

    pub fn component(mut self, selector: &str, block: StyleBlock) -> Self {
        self.components.insert(selector.to_string(), block);
        self
    }

    pub fn variant(mut self, name: &str) -> Self {
        if !self.variants.iter().any(|v| v == name) {
            self.variants.push(name.to_string());
        }
        self
    }

    /// Folds a later contribution into this one.
    ///
    /// An identical selector takes the later block; distinct selectors
    /// accumulate in order.
    pub fn merge(mut self, later: Contribution) -> Self {
        overlay(&mut self.base, later.base);
        overlay(&mut self.utilities, later.utilities);
        overlay(&mut self.components, later.components);
        for variant in later.variants {
            if !self.variants.contains(&variant) {
                self.variants.push(variant);
            }
        }
        self
    }
}

fn overlay(sheet: &mut StyleSheet, later: StyleSheet) {
    for (selector, block) in later {
        sheet.insert(selector, block);
    }
}

/// A plugin entry of a configuration.
#[derive(Debug, Clone)]
pub enum PluginRef {
    /// A built-in plugin by name, resolved when the configuration is resolved.
    Named(String),
    /// A plugin declared inline in the configuration.
    Declared(DeclaredPlugin),
    /// A plugin implemented in Rust.
    Custom(Arc<dyn Plugin>),
}

impl PluginRef {
    pub fn named(name: &str) -> Self {
        PluginRef::Named(name.to_string())
    }

    pub fn custom(plugin: impl Plugin + 'static) -> Self {
        PluginRef::Custom(Arc::new(plugin))
    }

    pub fn name(&self) -> &str {
        match self {
            PluginRef::Named(name) => name,
            PluginRef::Declared(plugin) => plugin.name(),
            PluginRef::Custom(plugin) => plugin.name(),
        }
    }

    /// Returns the plugin behind this entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPlugin`] for a name that is not built in.
    pub fn resolve(&self) -> Result<&dyn Plugin, ConfigError> {
        match self {
            PluginRef::Named(name) => BuiltinPlugin::from_name(name)
                .map(|p| p as &dyn Plugin)
                .ok_or_else(|| ConfigError::UnknownPlugin {
                    name: name.clone(),
                    available: BuiltinPlugin::names(),
                }),
            PluginRef::Declared(plugin) => Ok(plugin),
            PluginRef::Custom(plugin) => Ok(plugin.as_ref()),
        }
    }
}

impl From<BuiltinPlugin> for PluginRef {
    fn from(plugin: BuiltinPlugin) -> Self {
        PluginRef::Named(plugin.name().to_string())
    }
}

impl From<DeclaredPlugin> for PluginRef {
    fn from(plugin: DeclaredPlugin) -> Self {
        PluginRef::Declared(plugin)
    }
}

impl Serialize for PluginRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PluginRef::Declared(plugin) => plugin.serialize(serializer),
            other => serializer.serialize_str(other.name()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PluginDef {
    Named(String),
    Declared(DeclaredPlugin),
}

impl<'de> Deserialize<'de> for PluginRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match PluginDef::deserialize(deserializer)? {
            PluginDef::Named(name) => PluginRef::Named(name),
            PluginDef::Declared(plugin) => PluginRef::Declared(plugin),
        })
    }
}
