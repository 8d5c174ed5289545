//! Plugins declared as data in a configuration file.

use serde::{Deserialize, Serialize};

use super::{Contribution, Plugin};
use crate::error::ConfigError;
use crate::style::{try_map_declarations, validate_class_sheet, StyleBlock, StyleSheet};
use crate::theme::Theme;

const THEME_FN: &str = "theme(";

/// A plugin written out as base styles, utilities and components.
///
/// Declaration values may reference the resolved theme with
/// `theme(colors.orange.400)`; references are substituted when the plugin
/// contributes, and an unknown path is a configuration error.
///
/// ```yaml
/// plugins:
///   - name: focus-ring
///     requires: [ringWidth]
///     utilities:
///       .cx-focus:
///         "@apply focus-visible:ring": {}
///         outline-color: theme(colors.orange.400)
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeclaredPlugin {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<String>,
    #[serde(default, skip_serializing_if = "StyleSheet::is_empty")]
    pub base: StyleSheet,
    #[serde(default, skip_serializing_if = "StyleSheet::is_empty")]
    pub utilities: StyleSheet,
    #[serde(default, skip_serializing_if = "StyleSheet::is_empty")]
    pub components: StyleSheet,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
}

impl DeclaredPlugin {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn require(mut self, core_plugin: &str) -> Self {
        self.requires.push(core_plugin.to_string());
        self
    }

    pub fn base(mut self, selector: &str, block: StyleBlock) -> Self {
        self.base.insert(selector.to_string(), block);
        self
    }

    pub fn utility(mut self, selector: &str, block: StyleBlock) -> Self {
        self.utilities.insert(selector.to_string(), block);
        self
    }

    pub fn component(mut self, selector: &str, block: StyleBlock) -> Self {
        self.components.insert(selector.to_string(), block);
        self
    }

    fn resolve_sheet(&self, sheet: &StyleSheet, theme: &Theme) -> Result<StyleSheet, ConfigError> {
        let mut substitute = |value: &str| substitute_theme_refs(&self.name, value, theme);
        sheet
            .iter()
            .map(|(selector, block)| {
                let block = try_map_declarations(block, &mut substitute)?;
                Ok::<_, ConfigError>((selector.clone(), block))
            })
            .collect()
    }
}

impl Plugin for DeclaredPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn requires(&self) -> Vec<String> {
        self.requires.clone()
    }

    fn contribute(&self, theme: &Theme) -> Result<Contribution, ConfigError> {
        validate_class_sheet(&self.name, "utilities", &self.utilities)?;
        validate_class_sheet(&self.name, "components", &self.components)?;

        Ok(Contribution {
            base: self.resolve_sheet(&self.base, theme)?,
            utilities: self.resolve_sheet(&self.utilities, theme)?,
            components: self.resolve_sheet(&self.components, theme)?,
            variants: self.variants.clone(),
        })
    }
}

/// Replaces every `theme(path)` in `value` with the theme token at `path`.
fn substitute_theme_refs(plugin: &str, value: &str, theme: &Theme) -> Result<String, ConfigError> {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find(THEME_FN) {
        let args = &rest[start + THEME_FN.len()..];
        let Some(end) = args.find(')') else {
            break;
        };
        out.push_str(&rest[..start]);

        let path = args[..end].trim().trim_matches(|c| c == '\'' || c == '"');
        let token = theme
            .lookup(path)
            .ok_or_else(|| ConfigError::UnresolvedThemeReference {
                plugin: plugin.to_string(),
                path: path.to_string(),
            })?;
        out.push_str(token);
        rest = &args[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{block, StyleValue};

    #[test]
    fn test_substitute_theme_refs() {
        let theme = Theme::tailwind_default();
        let out = substitute_theme_refs("p", "2px solid theme('colors.orange.400')", theme).unwrap();
        assert_eq!(out, "2px solid #fb923c");
    }

    #[test]
    fn test_substitute_multiple_refs() {
        let theme = Theme::tailwind_default();
        let out =
            substitute_theme_refs("p", "theme(spacing.1) theme(spacing.2)", theme).unwrap();
        assert_eq!(out, "0.25rem 0.5rem");
    }

    #[test]
    fn test_substitute_unknown_path_fails() {
        let theme = Theme::tailwind_default();
        let err = substitute_theme_refs("p", "theme(colors.brand)", theme).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnresolvedThemeReference { ref path, .. } if path == "colors.brand"
        ));
    }

    #[test]
    fn test_unterminated_reference_left_as_is() {
        let theme = Theme::tailwind_default();
        let out = substitute_theme_refs("p", "theme(colors", theme).unwrap();
        assert_eq!(out, "theme(colors");
    }

    #[test]
    fn test_contribute_rejects_element_utility() {
        let plugin = DeclaredPlugin::new("bad").utility("body", StyleBlock::new());
        let err = plugin.contribute(Theme::tailwind_default()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSelector { section: "utilities", .. }));
    }

    #[test]
    fn test_contribute_substitutes_nested_values() {
        let hover = block([("color", "theme(colors.red.500)")]);
        let plugin = DeclaredPlugin::new("links")
            .component(".link", block([("&:hover", StyleValue::Block(hover))]));

        let contribution = plugin.contribute(Theme::tailwind_default()).unwrap();
        let expected = block([("&:hover", StyleValue::Block(block([("color", "#ef4444")])))]);
        assert_eq!(contribution.components[".link"], expected);
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result: Result<DeclaredPlugin, _> =
            serde_yaml::from_str("name: x\naddUtilities: {}\n");
        assert!(result.is_err());
    }
}
