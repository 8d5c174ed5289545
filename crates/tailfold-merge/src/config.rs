//! Merger configuration.
//!
//! A [`MergeConfig`] is an explicit value: it is built once, optionally
//! derived from a [`ResolvedConfig`], and handed to [`Merger::new`]. Nothing
//! here is global or mutable after the merger is built.
//!
//! [`Merger::new`]: crate::Merger::new

use std::collections::BTreeSet;

use indexmap::IndexMap;
use tailfold_preset::{is_core_plugin, ResolvedConfig, Theme, DEFAULT_SEPARATOR};

use crate::group::ClassGroup;
use crate::rules::ThemeScales;
use crate::table::{default_conflicts, default_groups, default_postfix_conflicts};

/// Everything a [`Merger`](crate::Merger) needs to classify and merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConfig {
    prefix: Option<String>,
    separator: String,
    scales: ThemeScales,
    groups: Vec<ClassGroup>,
    conflicts: IndexMap<String, Vec<String>>,
    postfix_conflicts: IndexMap<String, Vec<String>>,
    disabled_plugins: BTreeSet<String>,
}

impl Default for MergeConfig {
    /// The built-in class table over the built-in default theme.
    fn default() -> Self {
        Self::with_scales(ThemeScales::from_theme(Theme::tailwind_default()))
    }
}

impl MergeConfig {
    fn with_scales(scales: ThemeScales) -> Self {
        Self {
            prefix: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            scales,
            groups: default_groups(),
            conflicts: default_conflicts().into_iter().collect(),
            postfix_conflicts: default_postfix_conflicts().into_iter().collect(),
            disabled_plugins: BTreeSet::new(),
        }
    }

    /// Derives a configuration from a resolved preset stack.
    ///
    /// The theme scales, prefix and separator come from `resolved`. Groups
    /// of disabled core plugins, and of official plugins that were not
    /// applied, do not take part in merging.
    pub fn from_resolved(resolved: &ResolvedConfig) -> Self {
        let mut config = Self::with_scales(ThemeScales::from_theme(&resolved.theme));
        config.prefix = resolved.prefix.clone();
        config.separator = resolved.separator.clone();

        let inactive: BTreeSet<String> = config
            .groups
            .iter()
            .map(ClassGroup::plugin)
            .filter(|plugin| {
                if is_core_plugin(plugin) {
                    !resolved.is_enabled(plugin)
                } else {
                    !resolved.has_plugin(plugin)
                }
            })
            .map(str::to_string)
            .collect();
        tracing::debug!(
            disabled = inactive.len(),
            prefix = ?config.prefix,
            separator = %config.separator,
            "derived merge config from resolved style config"
        );
        config.disabled_plugins = inactive;
        config
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    /// Replaces the theme scales with those of `theme`.
    pub fn with_theme(mut self, theme: &Theme) -> Self {
        self.scales = ThemeScales::from_theme(theme);
        self
    }

    /// Adds a group, or appends its rules to the group with the same id.
    pub fn extend_group(mut self, group: ClassGroup) -> Self {
        match self.groups.iter_mut().find(|g| g.id() == group.id()) {
            Some(existing) => existing.append_rules(group),
            None => self.groups.push(group),
        }
        self
    }

    /// Makes `group` override each of `overrides` when it comes later.
    pub fn add_conflict<I, S>(mut self, group: &str, overrides: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_conflicts(&mut self.conflicts, group, overrides);
        self
    }

    /// Like [`add_conflict`](Self::add_conflict), for classes with a postfix
    /// modifier only.
    pub fn add_postfix_conflict<I, S>(mut self, group: &str, overrides: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_conflicts(&mut self.postfix_conflicts, group, overrides);
        self
    }

    /// Takes every group generated by `plugin` out of merging.
    pub fn disable_plugin(mut self, plugin: &str) -> Self {
        self.disabled_plugins.insert(plugin.to_string());
        self
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn scales(&self) -> &ThemeScales {
        &self.scales
    }

    pub fn groups(&self) -> &[ClassGroup] {
        &self.groups
    }

    pub fn conflicts(&self) -> &IndexMap<String, Vec<String>> {
        &self.conflicts
    }

    pub fn postfix_conflicts(&self) -> &IndexMap<String, Vec<String>> {
        &self.postfix_conflicts
    }

    pub fn disabled_plugins(&self) -> &BTreeSet<String> {
        &self.disabled_plugins
    }

    pub fn is_plugin_enabled(&self, plugin: &str) -> bool {
        !self.disabled_plugins.contains(plugin)
    }
}

fn extend_conflicts<I, S>(table: &mut IndexMap<String, Vec<String>>, group: &str, overrides: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let entry = table.entry(group.to_string()).or_default();
    for target in overrides {
        let target = target.into();
        if !entry.contains(&target) {
            entry.push(target);
        }
    }
}
