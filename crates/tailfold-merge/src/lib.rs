//! # Tailfold Merge - Conflict-aware class name composition
//!
//! Builds a class attribute out of conditional pieces and resolves
//! utility-class conflicts so the last class of each axis wins.
//!
//! ## Quick Start
//!
//! ```rust
//! use tailfold_merge::{cn, compose, ClassValue};
//!
//! let disabled = false;
//! assert_eq!(cn!("px-2 py-1 bg-red-500", "p-3 bg-blue-500"), "p-3 bg-blue-500");
//! assert_eq!(cn!("btn", ("btn-disabled", disabled), None::<&str>), "btn");
//!
//! let out = compose([
//!     ClassValue::from("text-sm hover:underline"),
//!     ClassValue::from(vec!["text-lg", "hover:no-underline"]),
//! ]);
//! assert_eq!(out, "text-lg hover:no-underline");
//! ```
//!
//! ## How conflicts are found
//!
//! Each class is parsed into variants (`hover:`, `md:`), an important flag,
//! a negative flag and a base. The base is looked up in a class table that
//! assigns it to a group such as `p` (padding) or `text-color`. Two classes
//! conflict when they share a group under the same variants and important
//! flag. Some groups also override related groups: `p-4` overrides an
//! earlier `px-2`, but not the other way round.
//!
//! Classes outside the table are kept as written; only exact duplicates
//! collapse.
//!
//! ## Configuration
//!
//! [`compose`] and [`cn!`] use a shared merger over the built-in default
//! theme. Projects with their own theme, prefix or separator build a
//! [`Merger`] from a [`MergeConfig`], usually via
//! [`MergeConfig::from_resolved`].

mod config;
mod error;
mod group;
mod merger;
mod parse;
mod rules;
mod table;
mod trie;
mod value;

use once_cell::sync::Lazy;

pub use config::MergeConfig;
pub use error::MergeConfigError;
pub use group::{ClassGroup, ClassRule};
pub use merger::{ClassInfo, Merger};
pub use parse::{parse_class, ParsedClass, IMPORTANT_MARKER};
pub use rules::{ArbitraryKind, ThemeScales, ValueRule};
pub use table::{default_conflicts, default_groups, default_postfix_conflicts};
pub use value::{join, ClassValue};

static DEFAULT_MERGER: Lazy<Merger> =
    Lazy::new(|| Merger::new(MergeConfig::default()).expect("built-in class table is valid"));

/// The shared merger over the built-in default theme.
pub fn default_merger() -> &'static Merger {
    &DEFAULT_MERGER
}

/// Flattens `inputs` and merges them with the default merger.
pub fn compose<I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue>,
{
    default_merger().compose(inputs)
}

/// Composes any mix of class values with the default merger.
///
/// Each argument may be anything convertible into a [`ClassValue`]: string
/// slices, `Option`s, `(class, condition)` pairs, vectors or maps.
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($input:expr),+ $(,)?) => {
        $crate::compose([$($crate::ClassValue::from($input)),+])
    };
}
