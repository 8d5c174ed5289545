//! Class groups: the utility axes classes are compared on.

use crate::rules::{ArbitraryKind, ValueRule};

/// How a class is recognised as a member of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassRule {
    /// A full class name such as `flex-row`.
    Exact(String),
    /// `prefix-<value>` where the value satisfies any of the rules.
    Prefixed { prefix: String, values: Vec<ValueRule> },
}

/// A set of classes that set the same style property.
///
/// Within one variant context, only the last member of a group survives a
/// merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassGroup {
    id: String,
    plugin: String,
    rules: Vec<ClassRule>,
}

impl ClassGroup {
    /// Creates an empty group owned by `plugin`.
    ///
    /// `plugin` is a core plugin name (`padding`) or an official plugin
    /// name (`typography`); the group is dropped when that plugin is not
    /// active.
    pub fn new(id: &str, plugin: &str) -> Self {
        Self {
            id: id.to_string(),
            plugin: plugin.to_string(),
            rules: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn plugin(&self) -> &str {
        &self.plugin
    }

    pub fn rules(&self) -> &[ClassRule] {
        &self.rules
    }

    /// Adds exact class names.
    pub fn exact<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules
            .extend(classes.into_iter().map(|c| ClassRule::Exact(c.into())));
        self
    }

    /// Adds a `prefix-<value>` rule.
    pub fn prefixed<I>(mut self, prefix: &str, values: I) -> Self
    where
        I: IntoIterator<Item = ValueRule>,
    {
        self.rules.push(ClassRule::Prefixed {
            prefix: prefix.to_string(),
            values: values.into_iter().collect(),
        });
        self
    }

    /// `prefix-<keyword>` for each keyword.
    pub fn keywords<I, S>(self, prefix: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixed(prefix, [ValueRule::keywords(words)])
    }

    /// `prefix-<theme token>` or `prefix-[arbitrary]`.
    pub fn themed(self, prefix: &str, category: &str, arbitrary: ArbitraryKind) -> Self {
        self.prefixed(
            prefix,
            [ValueRule::theme(category), ValueRule::Arbitrary(arbitrary)],
        )
    }

    pub(crate) fn append_rules(&mut self, other: ClassGroup) {
        self.rules.extend(other.rules);
    }
}
