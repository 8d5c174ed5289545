//! Prefix trie over dash-separated class parts.

use std::collections::HashMap;

use crate::group::{ClassGroup, ClassRule};
use crate::rules::{ThemeScales, ValueRule};

#[derive(Debug, Default)]
struct Node {
    children: HashMap<String, Node>,
    /// Group of the class that ends exactly at this node.
    exact: Option<usize>,
    /// `(group index, value rules)` for values following this node's path.
    values: Vec<(usize, Vec<ValueRule>)>,
}

impl Node {
    fn descend<'a, I>(&mut self, parts: I) -> &mut Node
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut node = self;
        for part in parts {
            node = node.children.entry(part.to_string()).or_default();
        }
        node
    }

    fn find(&self, parts: &[&str], scales: &ThemeScales) -> Option<usize> {
        let Some((first, rest)) = parts.split_first() else {
            return self.exact.or_else(|| self.match_values("", scales));
        };
        if let Some(found) = self
            .children
            .get(*first)
            .and_then(|child| child.find(rest, scales))
        {
            return Some(found);
        }
        if self.values.is_empty() {
            return None;
        }
        self.match_values(&parts.join("-"), scales)
    }

    fn match_values(&self, value: &str, scales: &ThemeScales) -> Option<usize> {
        self.values
            .iter()
            .find(|(_, rules)| rules.iter().any(|rule| rule.matches(value, scales)))
            .map(|(group, _)| *group)
    }
}

/// Maps class bases to group indexes.
///
/// Children are tried before the value rules of their parent, so the more
/// specific prefix wins (`border-x-2` is `border-w-x`, not `border-w`).
#[derive(Debug, Default)]
pub(crate) struct ClassTrie {
    root: Node,
}

impl ClassTrie {
    /// Builds the trie for the groups whose index `include` accepts.
    pub(crate) fn build<F>(groups: &[ClassGroup], include: F) -> Self
    where
        F: Fn(&ClassGroup) -> bool,
    {
        let mut root = Node::default();
        for (index, group) in groups.iter().enumerate() {
            if !include(group) {
                continue;
            }
            for rule in group.rules() {
                match rule {
                    ClassRule::Exact(class) => {
                        let node = root.descend(class.split('-'));
                        if node.exact.is_none() {
                            node.exact = Some(index);
                        } else {
                            tracing::trace!(class = %class, group = group.id(), "exact class already claimed");
                        }
                    }
                    ClassRule::Prefixed { prefix, values } => {
                        root.descend(prefix.split('-'))
                            .values
                            .push((index, values.clone()));
                    }
                }
            }
        }
        Self { root }
    }

    /// Finds the group index of a class base such as `px-4`.
    pub(crate) fn classify(&self, base: &str, scales: &ThemeScales) -> Option<usize> {
        if base.is_empty() {
            return None;
        }
        let parts: Vec<&str> = base.split('-').collect();
        self.root.find(&parts, scales)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ArbitraryKind;

    fn groups() -> Vec<ClassGroup> {
        vec![
            ClassGroup::new("display", "display").exact(["block", "flex"]),
            ClassGroup::new("flex", "flex").keywords("flex", ["1", "auto"]),
            ClassGroup::new("border-w", "borderWidth").prefixed(
                "border",
                [ValueRule::keywords(["", "2"]), ValueRule::Arbitrary(ArbitraryKind::Length)],
            ),
            ClassGroup::new("border-w-x", "borderWidth").keywords("border-x", ["", "2"]),
        ]
    }

    #[test]
    fn test_exact_and_prefixed_share_a_node() {
        let trie = ClassTrie::build(&groups(), |_| true);
        let scales = ThemeScales::new();
        assert_eq!(trie.classify("flex", &scales), Some(0));
        assert_eq!(trie.classify("flex-1", &scales), Some(1));
        assert_eq!(trie.classify("flex-2", &scales), None);
    }

    #[test]
    fn test_child_wins_over_parent_values() {
        let trie = ClassTrie::build(&groups(), |_| true);
        let scales = ThemeScales::new();
        assert_eq!(trie.classify("border-x-2", &scales), Some(3));
        assert_eq!(trie.classify("border-x", &scales), Some(3));
        assert_eq!(trie.classify("border", &scales), Some(2));
        assert_eq!(trie.classify("border-[3px]", &scales), Some(2));
    }

    #[test]
    fn test_arbitrary_value_with_dashes() {
        let trie = ClassTrie::build(&groups(), |_| true);
        assert_eq!(
            trie.classify("border-[calc(1px-0.5px)]", &ThemeScales::new()),
            Some(2)
        );
    }

    #[test]
    fn test_excluded_groups_are_unknown() {
        let trie = ClassTrie::build(&groups(), |g| g.id() != "display");
        assert_eq!(trie.classify("block", &ThemeScales::new()), None);
        assert_eq!(trie.classify("", &ThemeScales::new()), None);
    }
}
