//! Conflict-resolving class merger.

use std::collections::HashSet;

use serde::Serialize;

use crate::config::MergeConfig;
use crate::error::MergeConfigError;
use crate::group::ClassRule;
use crate::parse::{parse_class, ParsedClass};
use crate::trie::ClassTrie;
use crate::value::ClassValue;

/// Group id prefix of `[property:value]` classes.
const ARBITRARY_PROPERTY_GROUP: &str = "arbitrary..";

/// How one class was read by a [`Merger`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassInfo {
    pub class: String,
    pub variants: Vec<String>,
    pub important: bool,
    pub negative: bool,
    pub base: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postfix: Option<String>,
    /// `None` for classes outside the class table.
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,
    /// Groups this class overrides when it comes later.
    pub conflicts: Vec<String>,
}

/// Resolves class lists so that the last class of each utility axis wins.
///
/// Built once from a [`MergeConfig`]; immutable afterwards and safe to
/// share across threads.
///
/// ```
/// use tailfold_merge::{MergeConfig, Merger};
///
/// let merger = Merger::new(MergeConfig::default()).unwrap();
/// assert_eq!(merger.merge("px-2 py-1 p-3"), "p-3");
/// assert_eq!(merger.merge("hover:bg-red-500 bg-blue-500"), "hover:bg-red-500 bg-blue-500");
/// ```
#[derive(Debug)]
pub struct Merger {
    config: MergeConfig,
    trie: ClassTrie,
}

/// Claim key of a classified class.
struct Classified {
    group: String,
    /// Index into the config's groups; `None` for arbitrary properties.
    index: Option<usize>,
}

impl Merger {
    /// Validates `config` and builds the lookup trie.
    pub fn new(config: MergeConfig) -> Result<Self, MergeConfigError> {
        validate(&config)?;
        let trie = ClassTrie::build(config.groups(), |group| {
            config.is_plugin_enabled(group.plugin())
        });
        tracing::debug!(
            groups = config.groups().len(),
            disabled_plugins = config.disabled_plugins().len(),
            prefix = ?config.prefix(),
            "built class merger"
        );
        Ok(Self { config, trie })
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Merges a whitespace-separated class string.
    pub fn merge(&self, classes: &str) -> String {
        self.merge_classes(classes.split_ascii_whitespace())
    }

    /// Merges classes given one by one, in order.
    ///
    /// Items may still contain whitespace; they are split first.
    pub fn merge_classes<'a, I>(&self, classes: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let classes: Vec<&str> = classes
            .into_iter()
            .flat_map(str::split_ascii_whitespace)
            .collect();

        let mut claimed: HashSet<String> = HashSet::new();
        let mut kept: Vec<&str> = Vec::with_capacity(classes.len());

        for &class in classes.iter().rev() {
            let parsed = parse_class(class, self.config.separator(), self.config.prefix());
            let Some(found) = self.classify_parsed(&parsed) else {
                if claimed.insert(class.to_string()) {
                    kept.push(class);
                } else {
                    tracing::trace!(class, "dropped duplicate class");
                }
                continue;
            };

            let context = parsed.context();
            let key = claim_key(&context, &found.group);
            if claimed.contains(&key) {
                tracing::trace!(class, group = %found.group, "dropped overridden class");
                continue;
            }
            claimed.insert(key);
            for target in self.overrides(&found.group, parsed.postfix().is_some()) {
                claimed.insert(claim_key(&context, target));
            }
            kept.push(class);
        }

        kept.reverse();
        kept.join(" ")
    }

    /// Flattens `inputs` and merges the result.
    pub fn compose<I>(&self, inputs: I) -> String
    where
        I: IntoIterator,
        I::Item: Into<ClassValue>,
    {
        let values: Vec<ClassValue> = inputs.into_iter().map(Into::into).collect();
        let mut flat = Vec::new();
        for value in &values {
            value.flatten_into(&mut flat);
        }
        self.merge_classes(flat)
    }

    /// Group id of a single class, if it is in the class table.
    pub fn classify(&self, class: &str) -> Option<String> {
        let parsed = parse_class(class, self.config.separator(), self.config.prefix());
        self.classify_parsed(&parsed)
            .map(|found| found.group)
    }

    /// Describes how `class` is parsed and classified.
    pub fn explain(&self, class: &str) -> ClassInfo {
        let parsed = parse_class(class, self.config.separator(), self.config.prefix());
        let found = self.classify_parsed(&parsed);
        let (group, plugin, conflicts) = match &found {
            Some(found) => {
                let plugin = found
                    .index
                    .map(|index| self.config.groups()[index].plugin().to_string());
                let mut conflicts: Vec<String> = Vec::new();
                for target in self.overrides(&found.group, parsed.postfix().is_some()) {
                    if !conflicts.iter().any(|c| c == target) {
                        conflicts.push(target.to_string());
                    }
                }
                (Some(found.group.clone()), plugin, conflicts)
            }
            None => (None, None, Vec::new()),
        };
        ClassInfo {
            class: class.to_string(),
            variants: parsed.variants.iter().map(|v| v.to_string()).collect(),
            important: parsed.important,
            negative: parsed.negative,
            base: parsed.base.to_string(),
            postfix: parsed.postfix().map(str::to_string),
            group,
            plugin,
            conflicts,
        }
    }

    fn classify_parsed(&self, parsed: &ParsedClass<'_>) -> Option<Classified> {
        if !parsed.has_prefix {
            return None;
        }
        if let Some(property) = parsed.arbitrary_property() {
            return Some(Classified {
                group: format!("{ARBITRARY_PROPERTY_GROUP}{property}"),
                index: None,
            });
        }
        let scales = self.config.scales();
        let index = match parsed.postfix_at {
            Some(_) => self
                .trie
                .classify(parsed.base_without_postfix(), scales)
                .or_else(|| self.trie.classify(parsed.base, scales)),
            None => self.trie.classify(parsed.base, scales),
        }?;
        Some(Classified {
            group: self.config.groups()[index].id().to_string(),
            index: Some(index),
        })
    }

    fn overrides<'s>(&'s self, group: &str, with_postfix: bool) -> impl Iterator<Item = &'s str> {
        let conflicts = self.config.conflicts().get(group);
        let postfix = if with_postfix {
            self.config.postfix_conflicts().get(group)
        } else {
            None
        };
        conflicts
            .into_iter()
            .chain(postfix)
            .flatten()
            .map(String::as_str)
    }
}

fn claim_key(context: &str, group: &str) -> String {
    format!("{context}\u{0}{group}")
}

fn validate(config: &MergeConfig) -> Result<(), MergeConfigError> {
    if let Some(prefix) = config.prefix() {
        if prefix.is_empty() || prefix.contains(char::is_whitespace) {
            return Err(MergeConfigError::InvalidPrefix(prefix.to_string()));
        }
    }
    let separator = config.separator();
    if separator.is_empty() || separator.contains(char::is_whitespace) {
        return Err(MergeConfigError::InvalidSeparator(separator.to_string()));
    }

    let mut ids = HashSet::new();
    for group in config.groups() {
        if group.id().is_empty() {
            return Err(MergeConfigError::EmptyGroupId);
        }
        ids.insert(group.id());
        for rule in group.rules() {
            let reason = match rule {
                ClassRule::Exact(class) if class.is_empty() => Some("exact class name is empty"),
                ClassRule::Prefixed { prefix, .. } if prefix.is_empty() => Some("prefix is empty"),
                ClassRule::Prefixed { values, .. } if values.is_empty() => {
                    Some("prefix has no value rules")
                }
                _ => None,
            };
            if let Some(reason) = reason {
                return Err(MergeConfigError::EmptyRule {
                    group: group.id().to_string(),
                    reason,
                });
            }
        }
    }

    for (group, targets) in config
        .conflicts()
        .iter()
        .chain(config.postfix_conflicts().iter())
    {
        for name in std::iter::once(group).chain(targets) {
            if !ids.contains(name.as_str()) {
                return Err(MergeConfigError::UnknownConflictGroup {
                    group: group.clone(),
                    unknown: name.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::ClassGroup;
    use crate::rules::ValueRule;

    fn merger() -> Merger {
        Merger::new(MergeConfig::default()).unwrap()
    }

    #[test]
    fn test_last_class_of_a_group_wins() {
        assert_eq!(merger().merge("text-red-500 text-blue-500"), "text-blue-500");
        assert_eq!(merger().merge("p-4 m-2"), "p-4 m-2");
    }

    #[test]
    fn test_refinement_is_one_way() {
        assert_eq!(merger().merge("p-4 px-2"), "p-4 px-2");
        assert_eq!(merger().merge("px-2 p-4"), "p-4");
    }

    #[test]
    fn test_unknown_classes_only_collapse_duplicates() {
        assert_eq!(merger().merge("foo bar foo"), "bar foo");
    }

    #[test]
    fn test_postfix_font_size_overrides_leading() {
        assert_eq!(merger().merge("leading-9 text-lg/7"), "text-lg/7");
        assert_eq!(merger().merge("bg-red-500/50 bg-blue-500"), "bg-blue-500");
    }

    #[test]
    fn test_explain_reports_group_and_conflicts() {
        let info = merger().explain("md:!-mx-2");
        assert_eq!(info.variants, vec!["md"]);
        assert!(info.important);
        assert!(info.negative);
        assert_eq!(info.base, "mx-2");
        assert_eq!(info.group.as_deref(), Some("mx"));
        assert_eq!(info.plugin.as_deref(), Some("margin"));
        assert_eq!(info.conflicts, vec!["mr", "ml"]);

        let unknown = merger().explain("not-a-utility");
        assert_eq!(unknown.group, None);
        assert!(unknown.conflicts.is_empty());
    }

    #[test]
    fn test_explain_serializes() {
        let json = serde_json::to_value(merger().explain("[mask-type:luminance]")).unwrap();
        assert_eq!(json["group"], "arbitrary..mask-type");
        assert!(json.get("plugin").is_none());
    }

    #[test]
    fn test_validation_errors() {
        let err = Merger::new(MergeConfig::default().add_conflict("p", ["padding-x"])).unwrap_err();
        assert_eq!(
            err,
            MergeConfigError::UnknownConflictGroup {
                group: "p".to_string(),
                unknown: "padding-x".to_string(),
            }
        );

        let err = Merger::new(MergeConfig::default().extend_group(ClassGroup::new("", "custom")))
            .unwrap_err();
        assert_eq!(err, MergeConfigError::EmptyGroupId);

        let err = Merger::new(
            MergeConfig::default().extend_group(ClassGroup::new("btn", "custom").prefixed("btn", Vec::<ValueRule>::new())),
        )
        .unwrap_err();
        assert!(matches!(err, MergeConfigError::EmptyRule { group, .. } if group == "btn"));

        let err = Merger::new(MergeConfig::default().with_separator(" ")).unwrap_err();
        assert_eq!(err, MergeConfigError::InvalidSeparator(" ".to_string()));

        let err = Merger::new(MergeConfig::default().with_prefix("")).unwrap_err();
        assert_eq!(err, MergeConfigError::InvalidPrefix(String::new()));
    }

    #[test]
    fn test_custom_group_takes_part() {
        let merger = Merger::new(
            MergeConfig::default()
                .extend_group(
                    ClassGroup::new("btn-size", "custom")
                        .prefixed("btn", [ValueRule::keywords(["sm", "lg"])]),
                )
                .add_conflict("btn-size", ["p"]),
        )
        .unwrap();
        assert_eq!(merger.merge("btn-sm btn-lg"), "btn-lg");
        assert_eq!(merger.merge("p-2 btn-sm"), "btn-sm");
    }

    #[test]
    fn test_disabled_plugin_groups_are_unknown() {
        let merger = Merger::new(MergeConfig::default().disable_plugin("padding")).unwrap();
        assert_eq!(merger.classify("p-4"), None);
        assert_eq!(merger.merge("p-2 p-4"), "p-2 p-4");
    }
}
