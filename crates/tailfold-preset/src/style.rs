//! CSS-in-data style declarations contributed by plugins.
//!
//! A [`StyleSheet`] maps selectors to [`StyleBlock`]s. Blocks hold
//! declarations (`"color-scheme": "light"`) and nested blocks for nested
//! selectors, at-rules and `@apply` directives, in declaration order.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::ConfigError;
use crate::token::impl_tree_deserialize;

/// Ordered declarations of one selector.
pub type StyleBlock = IndexMap<String, StyleValue>;

/// Ordered selector → block map.
pub type StyleSheet = IndexMap<String, StyleBlock>;

/// A declaration value or a nested block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Declaration(String),
    Block(StyleBlock),
}

impl_tree_deserialize!(StyleValue, Declaration, Block, "a declaration value or a nested style block");

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Declaration(value.to_string())
    }
}

impl From<StyleBlock> for StyleValue {
    fn from(block: StyleBlock) -> Self {
        StyleValue::Block(block)
    }
}

/// Builds a block from `(property, value)` pairs.
pub fn block<I, K, V>(entries: I) -> StyleBlock
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<StyleValue>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Builds an `@apply` directive entry for the given classes.
pub fn apply(classes: &str) -> (String, StyleValue) {
    (format!("@apply {classes}"), StyleValue::Block(StyleBlock::new()))
}

/// Returns the class name of a simple class selector (`.cx-focus` → `cx-focus`).
pub fn class_name(selector: &str) -> Option<&str> {
    selector
        .strip_prefix('.')
        .filter(|rest| !rest.is_empty() && !rest.contains(|c: char| c.is_whitespace() || c == ','))
}

/// Checks that every selector of a utilities/components sheet is a class selector.
pub(crate) fn validate_class_sheet(
    plugin: &str,
    section: &'static str,
    sheet: &StyleSheet,
) -> Result<(), ConfigError> {
    for selector in sheet.keys() {
        if class_name(selector).is_none() {
            return Err(ConfigError::InvalidSelector {
                plugin: plugin.to_string(),
                section,
                selector: selector.clone(),
            });
        }
    }
    Ok(())
}

/// Applies `f` to every declaration value of a block, recursively.
pub(crate) fn try_map_declarations<F>(block: &StyleBlock, f: &mut F) -> Result<StyleBlock, ConfigError>
where
    F: FnMut(&str) -> Result<String, ConfigError>,
{
    let mut out = StyleBlock::with_capacity(block.len());
    for (key, value) in block {
        let mapped = match value {
            StyleValue::Declaration(v) => StyleValue::Declaration(f(v)?),
            StyleValue::Block(inner) => StyleValue::Block(try_map_declarations(inner, f)?),
        };
        out.insert(key.clone(), mapped);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name() {
        assert_eq!(class_name(".cx-focus"), Some("cx-focus"));
        assert_eq!(class_name(".@container"), Some("@container"));
        assert_eq!(class_name("html"), None);
        assert_eq!(class_name("."), None);
        assert_eq!(class_name(".a, .b"), None);
    }

    #[test]
    fn test_validate_class_sheet_rejects_element_selector() {
        let mut sheet = StyleSheet::new();
        sheet.insert("body".to_string(), StyleBlock::new());
        let err = validate_class_sheet("inline", "utilities", &sheet).unwrap_err();
        assert!(err.to_string().contains("'body'"));
    }

    #[test]
    fn test_apply_entry_is_empty_block() {
        let (key, value) = apply("block max-w-full");
        assert_eq!(key, "@apply block max-w-full");
        assert_eq!(value, StyleValue::Block(StyleBlock::new()));
    }

    #[test]
    fn test_deserialize_nested_block() {
        let sheet: StyleSheet = serde_yaml::from_str(
            "img:\n  '@apply block max-w-full': {}\n  '&.full-width':\n    max-height: 45vh\n",
        )
        .unwrap();
        let img = &sheet["img"];
        assert_eq!(img.len(), 2);
        assert!(matches!(img["&.full-width"], StyleValue::Block(_)));
    }

    #[test]
    fn test_try_map_declarations_recurses() {
        let inner = block([("color", "red")]);
        let outer = block([("margin", StyleValue::from("0")), ("&:hover", inner.into())]);
        let mapped = try_map_declarations(&outer, &mut |v| Ok(v.to_uppercase())).unwrap();
        assert_eq!(mapped["margin"], StyleValue::from("0"));
        match &mapped["&:hover"] {
            StyleValue::Block(b) => assert_eq!(b["color"], StyleValue::from("RED")),
            other => panic!("expected block, got {other:?}"),
        }
    }
}
