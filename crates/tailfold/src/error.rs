use tailfold_merge::MergeConfigError;
use tailfold_preset::ConfigError;
use thiserror::Error;

/// Errors raised while setting up a [`StyleContext`](crate::StyleContext).
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Merge(#[from] MergeConfigError),
}
