//! # Tailfold Preset - Layered style configuration
//!
//! `tailfold-preset` resolves an ordered stack of style presets and a final
//! consumer configuration into one immutable [`ResolvedConfig`]: a theme of
//! design tokens, core plugin switches, and the base styles, utilities and
//! components contributed by plugins.
//!
//! ## Quick Start
//!
//! ```rust
//! use tailfold_preset::{resolve, BuiltinPlugin, Config, Preset};
//!
//! let preset = Preset::new()
//!     .named("brand")
//!     .plugin(BuiltinPlugin::Typography);
//! let config = Config::new()
//!     .disable_core_plugin("container")
//!     .preset(preset);
//!
//! let resolved = resolve(&config).unwrap();
//! assert!(!resolved.is_enabled("container"));
//! assert_eq!(resolved.plugins, vec!["typography"]);
//! ```
//!
//! ## Layering rules
//!
//! Layers are applied left to right: the built-in default theme, every preset
//! (nested presets first), then the consumer configuration.
//!
//! - Theme categories set at the top level of a layer replace the category.
//! - Categories under `extend` deep-merge: unmentioned keys are inherited, a
//!   mentioned key replaces the earlier value at that key.
//! - Scalar settings (`darkMode`, `prefix`, `important`, `separator`,
//!   `content`) take the value of the last layer that sets them.
//! - Disabling a core plugin is terminal; no later layer re-enables it.
//! - Plugins run against the resolved theme. An identical selector from a
//!   later plugin replaces the earlier block.
//!
//! Malformed layers fail resolution with a [`ConfigError`]; nothing is
//! silently dropped.
//!
//! ## Files
//!
//! Presets and configurations load from YAML or JSON with `tailwind.config`
//! camelCase keys, see [`Preset::from_path`].

mod core_plugins;
mod error;
pub mod plugin;
mod preset;
mod project;
mod resolve;
pub mod style;
mod theme;
pub mod token;

pub use core_plugins::{is_core_plugin, CorePlugins, CORE_PLUGINS};
pub use error::{ConfigError, ConfigFormat, ConfigResult};
pub use plugin::{BuiltinPlugin, Contribution, DeclaredPlugin, Plugin, PluginRef};
pub use preset::{Config, Content, DarkMode, Preset};
pub use project::{project_config, project_preset, PROJECT_CONTENT_GLOB};
pub use resolve::{resolve, ResolvedConfig, Resolver, DEFAULT_SEPARATOR};
pub use style::{StyleBlock, StyleSheet, StyleValue};
pub use theme::{Theme, ThemeLayer};
pub use token::{TokenTable, TokenValue, DEFAULT_KEY};
