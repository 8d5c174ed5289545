//! Merger construction errors.
//!
//! Merging itself never fails. These errors come from building a [`Merger`]
//! out of a [`MergeConfig`] whose class table does not hold together.
//!
//! [`Merger`]: crate::Merger
//! [`MergeConfig`]: crate::MergeConfig

use thiserror::Error;

/// Error returned by [`Merger::new`](crate::Merger::new).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeConfigError {
    /// A class group was registered without an id.
    #[error("class group id must not be empty")]
    EmptyGroupId,

    /// A class rule has no prefix or no value rules.
    #[error("class group '{group}' has an empty rule: {reason}")]
    EmptyRule { group: String, reason: &'static str },

    /// A conflict entry names a group that is not in the table.
    #[error("conflict entry for '{group}' names unknown class group '{unknown}'")]
    UnknownConflictGroup { group: String, unknown: String },

    /// The class prefix is empty or contains whitespace.
    #[error("invalid class prefix '{0}': must be non-empty and contain no whitespace")]
    InvalidPrefix(String),

    /// The variant separator is empty or contains whitespace.
    #[error("invalid variant separator '{0}': must be non-empty and contain no whitespace")]
    InvalidSeparator(String),
}
