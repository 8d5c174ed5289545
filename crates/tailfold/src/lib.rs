//! # Tailfold
//!
//! Front end over the two tailfold crates:
//!
//! - [`tailfold_preset`] resolves layered style presets into one
//!   [`ResolvedConfig`].
//! - [`tailfold_merge`] composes class names and resolves utility conflicts.
//!
//! [`StyleContext`] ties them together for a rendering layer, and
//! [`register_cn`] exposes composition to MiniJinja templates.
//!
//! ```rust
//! use minijinja::{context, Environment};
//! use tailfold::StyleContext;
//!
//! let ctx = StyleContext::project().unwrap();
//! let mut env = Environment::new();
//! ctx.register(&mut env);
//!
//! let out = env
//!     .render_str("{{ cn('px-2 text-sm', {'px-4': wide}) }}", context! { wide => true })
//!     .unwrap();
//! assert_eq!(out, "text-sm px-4");
//! ```

pub mod cli;
mod context;
mod error;
mod template;

pub use context::StyleContext;
pub use error::Error;
pub use template::{register_cn, to_class_value};

pub use tailfold_merge::{cn, compose, join, ClassInfo, ClassValue, MergeConfig, MergeConfigError, Merger};
pub use tailfold_preset::{
    project_config, project_preset, resolve, Config, ConfigError, Preset, ResolvedConfig, Resolver,
};
