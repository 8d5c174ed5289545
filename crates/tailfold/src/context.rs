//! A resolved style configuration paired with its merger.

use std::sync::Arc;

use minijinja::Environment;
use tailfold_merge::{ClassValue, MergeConfig, Merger};
use tailfold_preset::{project_config, Config, ResolvedConfig, Resolver};

use crate::error::Error;
use crate::template::register_cn;

/// Everything a rendering layer needs: the resolved configuration and a
/// merger that classifies classes against its theme.
///
/// Cheap to clone; the merger is shared.
#[derive(Debug, Clone)]
pub struct StyleContext {
    resolved: Arc<ResolvedConfig>,
    merger: Arc<Merger>,
}

impl StyleContext {
    /// Builds the merger for an already resolved configuration.
    pub fn new(resolved: ResolvedConfig) -> Result<Self, Error> {
        let merger = Merger::new(MergeConfig::from_resolved(&resolved))?;
        Ok(Self {
            resolved: Arc::new(resolved),
            merger: Arc::new(merger),
        })
    }

    /// Resolves `config` with `resolver` and builds its merger.
    pub fn resolve_with(resolver: Resolver, config: &Config) -> Result<Self, Error> {
        Self::new(resolver.resolve(config)?)
    }

    /// Resolves `config` over the default theme.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::resolve_with(Resolver::new(), config)
    }

    /// The bundled project configuration.
    pub fn project() -> Result<Self, Error> {
        Self::from_config(&project_config())
    }

    pub fn resolved(&self) -> &ResolvedConfig {
        &self.resolved
    }

    pub fn merger(&self) -> &Arc<Merger> {
        &self.merger
    }

    /// Composes class values with this context's merger.
    pub fn compose<I>(&self, inputs: I) -> String
    where
        I: IntoIterator,
        I::Item: Into<ClassValue>,
    {
        self.merger.compose(inputs)
    }

    /// Registers `cn` on a template environment, bound to this context.
    pub fn register(&self, env: &mut Environment<'_>) {
        register_cn(env, Arc::clone(&self.merger));
    }
}
