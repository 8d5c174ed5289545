//! Theme token tables and their deep-merge rules.
//!
//! A token table is an ordered tree: leaves are strings, inner nodes are
//! tables. Merging a later table into an earlier one recurses where both sides
//! hold a table and otherwise lets the later value replace the earlier one, so
//! keys a later layer does not mention are inherited unchanged.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::Serialize;

use crate::error::ConfigError;

/// Key whose value applies to the bare name of its parent table.
pub const DEFAULT_KEY: &str = "DEFAULT";

/// Ordered table of theme tokens.
pub type TokenTable = IndexMap<String, TokenValue>;

/// A theme token: a single value or a nested table of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    Value(String),
    Table(TokenTable),
}

impl TokenValue {
    /// Returns the leaf value, or the `DEFAULT` entry of a table.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Value(v) => Some(v),
            TokenValue::Table(table) => table.get(DEFAULT_KEY).and_then(TokenValue::as_str),
        }
    }

    pub fn as_table(&self) -> Option<&TokenTable> {
        match self {
            TokenValue::Table(table) => Some(table),
            TokenValue::Value(_) => None,
        }
    }

    /// Merges `later` into `self`.
    ///
    /// Tables merge key by key; anything else is replaced by `later`.
    pub fn merge_from(&mut self, later: &TokenValue) {
        match (self, later) {
            (TokenValue::Table(existing), TokenValue::Table(incoming)) => {
                merge_tables(existing, incoming)
            }
            (slot, _) => *slot = later.clone(),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Value(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Value(value)
    }
}

impl From<TokenTable> for TokenValue {
    fn from(table: TokenTable) -> Self {
        TokenValue::Table(table)
    }
}

/// Deep-merges `later` into `base`, preserving the position of existing keys.
pub fn merge_tables(base: &mut TokenTable, later: &TokenTable) {
    for (key, value) in later {
        match base.get_mut(key) {
            Some(existing) => existing.merge_from(value),
            None => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Flattens a token table into utility-style names.
///
/// Nested keys are joined with `-` and `DEFAULT` entries map to the name of
/// their parent, so `{ red: { DEFAULT, 500 } }` yields `red` and `red-500`.
/// A top-level `DEFAULT` yields the empty string.
pub fn flatten_keys(table: &TokenTable) -> Vec<String> {
    let mut keys = Vec::new();
    collect_keys(table, "", &mut keys);
    keys
}

fn collect_keys(table: &TokenTable, parent: &str, out: &mut Vec<String>) {
    for (key, value) in table {
        let name = match (parent.is_empty(), key == DEFAULT_KEY) {
            (_, true) => parent.to_string(),
            (true, false) => key.clone(),
            (false, false) => format!("{parent}-{key}"),
        };
        match value {
            TokenValue::Value(_) => out.push(name),
            TokenValue::Table(inner) => collect_keys(inner, &name, out),
        }
    }
}

/// Checks that every key in a table is non-empty and free of whitespace.
pub(crate) fn validate_table(category: &str, table: &TokenTable) -> Result<(), ConfigError> {
    for (key, value) in table {
        if key.is_empty() || key.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidToken {
                category: category.to_string(),
                reason: format!("key '{key}' must be non-empty and contain no whitespace"),
            });
        }
        if let TokenValue::Table(inner) = value {
            validate_table(category, inner)?;
        }
    }
    Ok(())
}

/// Implements lenient deserialization for a string-or-table tree.
///
/// Configuration files routinely write numeric keys and values
/// (`opacity: { 50: 0.5 }`); those are read back as their textual form.
macro_rules! impl_tree_deserialize {
    ($ty:ident, $leaf:ident, $table:ident, $expecting:literal) => {
        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                struct TreeVisitor;

                impl<'de> ::serde::de::Visitor<'de> for TreeVisitor {
                    type Value = $ty;

                    fn expecting(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                        f.write_str($expecting)
                    }

                    fn visit_str<E: ::serde::de::Error>(self, v: &str) -> Result<$ty, E> {
                        Ok($ty::$leaf(v.to_string()))
                    }

                    fn visit_string<E: ::serde::de::Error>(self, v: String) -> Result<$ty, E> {
                        Ok($ty::$leaf(v))
                    }

                    fn visit_i64<E: ::serde::de::Error>(self, v: i64) -> Result<$ty, E> {
                        Ok($ty::$leaf(v.to_string()))
                    }

                    fn visit_u64<E: ::serde::de::Error>(self, v: u64) -> Result<$ty, E> {
                        Ok($ty::$leaf(v.to_string()))
                    }

                    fn visit_f64<E: ::serde::de::Error>(self, v: f64) -> Result<$ty, E> {
                        Ok($ty::$leaf(v.to_string()))
                    }

                    fn visit_map<A>(self, mut map: A) -> Result<$ty, A::Error>
                    where
                        A: ::serde::de::MapAccess<'de>,
                    {
                        let mut table = ::indexmap::IndexMap::new();
                        while let Some((key, value)) =
                            map.next_entry::<$crate::token::LenientKey, $ty>()?
                        {
                            table.insert(key.0, value);
                        }
                        Ok($ty::$table(table))
                    }
                }

                deserializer.deserialize_any(TreeVisitor)
            }
        }
    };
}

pub(crate) use impl_tree_deserialize;

impl_tree_deserialize!(TokenValue, Value, Table, "a token value or a table of tokens");

/// Map key that accepts strings and numbers.
pub(crate) struct LenientKey(pub(crate) String);

impl<'de> Deserialize<'de> for LenientKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KeyVisitor;

        impl<'de> Visitor<'de> for KeyVisitor {
            type Value = LenientKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or numeric key")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<LenientKey, E> {
                Ok(LenientKey(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<LenientKey, E> {
                Ok(LenientKey(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<LenientKey, E> {
                Ok(LenientKey(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<LenientKey, E> {
                Ok(LenientKey(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<LenientKey, E> {
                Ok(LenientKey(v.to_string()))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, TokenValue)]) -> TokenTable {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_merge_inherits_unmentioned_keys() {
        let mut base = table(&[("sm", "4px".into()), ("md", "8px".into())]);
        merge_tables(&mut base, &table(&[("md", "10px".into())]));

        assert_eq!(base["sm"], TokenValue::from("4px"));
        assert_eq!(base["md"], TokenValue::from("10px"));
    }

    #[test]
    fn test_merge_recurses_into_tables() {
        let mut base = table(&[(
            "brand",
            table(&[("500", "#111".into()), ("600", "#222".into())]).into(),
        )]);
        let later = table(&[("brand", table(&[("600", "#333".into())]).into())]);
        merge_tables(&mut base, &later);

        let brand = base["brand"].as_table().unwrap();
        assert_eq!(brand["500"], TokenValue::from("#111"));
        assert_eq!(brand["600"], TokenValue::from("#333"));
    }

    #[test]
    fn test_merge_leaf_replaces_table() {
        let mut base = table(&[("brand", table(&[("500", "#111".into())]).into())]);
        merge_tables(&mut base, &table(&[("brand", "#000".into())]));
        assert_eq!(base["brand"], TokenValue::from("#000"));
    }

    #[test]
    fn test_merge_keeps_existing_key_position() {
        let mut base = table(&[("a", "1".into()), ("b", "2".into())]);
        merge_tables(&mut base, &table(&[("c", "3".into()), ("a", "9".into())]));
        let keys: Vec<_> = base.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_flatten_keys_handles_default() {
        let colors = table(&[
            ("white", "#fff".into()),
            (
                "primary",
                table(&[("DEFAULT", "#00f".into()), ("500", "#00e".into())]).into(),
            ),
        ]);
        assert_eq!(flatten_keys(&colors), vec!["white", "primary", "primary-500"]);
    }

    #[test]
    fn test_as_str_falls_back_to_default() {
        let value: TokenValue = table(&[("DEFAULT", "1px".into())]).into();
        assert_eq!(value.as_str(), Some("1px"));
    }

    #[test]
    fn test_deserialize_numeric_keys_and_values() {
        let value: TokenValue = serde_yaml::from_str("{ 50: 0.5, 100: 1, px: 1px }").unwrap();
        let table = value.as_table().unwrap();
        assert_eq!(table["50"], TokenValue::from("0.5"));
        assert_eq!(table["100"], TokenValue::from("1"));
        assert_eq!(table["px"], TokenValue::from("1px"));
    }

    #[test]
    fn test_validate_rejects_empty_key() {
        let bad = table(&[("", "x".into())]);
        assert!(matches!(
            validate_table("spacing", &bad),
            Err(ConfigError::InvalidToken { .. })
        ));
    }
}
