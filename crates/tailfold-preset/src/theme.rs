//! Theme layers and the resolved theme.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::token::{flatten_keys, validate_table, TokenValue, DEFAULT_KEY};

static DEFAULT_THEME_SOURCE: &str = include_str!("default_theme.yaml");

static DEFAULT_THEME: Lazy<Theme> = Lazy::new(|| {
    let categories: IndexMap<String, TokenValue> =
        serde_yaml::from_str(DEFAULT_THEME_SOURCE).expect("embedded default theme is valid YAML");
    Theme { categories }
});

/// The theme contribution of a single preset or configuration.
///
/// Top-level categories replace the whole category of earlier layers;
/// categories under `extend` are deep-merged into them.
///
/// ```yaml
/// theme:
///   screens: { sm: 480px }        # replaces every earlier screen
///   extend:
///     gap: { "0.25": 0.0625rem }  # adds one gap step
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeLayer {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub extend: IndexMap<String, TokenValue>,
    #[serde(flatten)]
    pub categories: IndexMap<String, TokenValue>,
}

impl ThemeLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces a whole category, returning the layer for chaining.
    pub fn set(mut self, category: &str, value: impl Into<TokenValue>) -> Self {
        self.categories.insert(category.to_string(), value.into());
        self
    }

    /// Deep-extends a category, returning the layer for chaining.
    pub fn extend(mut self, category: &str, value: impl Into<TokenValue>) -> Self {
        let value = value.into();
        match self.extend.get_mut(category) {
            Some(existing) => existing.merge_from(&value),
            None => {
                self.extend.insert(category.to_string(), value);
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.extend.is_empty()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (category, value) in self.categories.iter().chain(self.extend.iter()) {
            if category.is_empty() {
                return Err(ConfigError::InvalidToken {
                    category: category.clone(),
                    reason: "category name must not be empty".to_string(),
                });
            }
            if let TokenValue::Table(table) = value {
                validate_table(category, table)?;
            }
        }
        Ok(())
    }
}

/// A fully resolved theme: category → token table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    categories: IndexMap<String, TokenValue>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in default scales (palette, spacing, type scale, radii, ...).
    pub fn tailwind_default() -> &'static Theme {
        &DEFAULT_THEME
    }

    /// Applies one layer: replacements first, then extensions.
    pub fn apply(&mut self, layer: &ThemeLayer) {
        for (category, value) in &layer.categories {
            self.categories.insert(category.clone(), value.clone());
        }
        for (category, value) in &layer.extend {
            match self.categories.get_mut(category) {
                Some(existing) => existing.merge_from(value),
                None => {
                    self.categories.insert(category.clone(), value.clone());
                }
            }
        }
    }

    pub fn category(&self, name: &str) -> Option<&TokenValue> {
        self.categories.get(name)
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Looks up a dotted path such as `colors.red.500` or `borderRadius`.
    ///
    /// A path ending on a table yields its `DEFAULT` entry. A dash-joined
    /// segment also matches a nested key (`colors.red-500`).
    pub fn lookup(&self, path: &str) -> Option<&str> {
        let mut segments = path.split('.');
        let category = segments.next()?;
        let mut current = self.categories.get(category)?;
        for segment in segments {
            current = descend(current, segment)?;
        }
        current.as_str()
    }

    /// Names of every token in a category, flattened with `-`.
    ///
    /// A `DEFAULT` token is reported as the empty string.
    pub fn scale_keys(&self, category: &str) -> Vec<String> {
        match self.categories.get(category) {
            Some(TokenValue::Table(table)) => flatten_keys(table),
            Some(TokenValue::Value(_)) => vec![String::new()],
            None => Vec::new(),
        }
    }
}

fn descend<'a>(value: &'a TokenValue, segment: &str) -> Option<&'a TokenValue> {
    let table = value.as_table()?;
    if let Some(next) = table.get(segment) {
        return Some(next);
    }
    if segment == DEFAULT_KEY {
        return None;
    }
    // `red-500` inside `colors`
    let (head, rest) = segment.split_once('-')?;
    descend(table.get(head)?, rest)
}
