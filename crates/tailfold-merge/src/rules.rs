//! Value rules: what may follow a utility prefix.
//!
//! `p-4`, `p-px` and `p-[3px]` all belong to the padding group because the
//! value after `p-` satisfies one of the group's rules: a spacing token, a
//! keyword, or an arbitrary value.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use tailfold_preset::Theme;

static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(\.\d+)?|\.\d+)$").expect("valid number pattern"));
static FRACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+/\d+$").expect("valid fraction pattern"));
static PERCENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(\.\d+)?|\.\d+)%$").expect("valid percent pattern"));
static LENGTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\d+(%|px|r?em|[sdl]?v([hwib]|min|max)|pt|pc|in|cm|mm|cap|ch|ex|r?lh|cq(w|h|i|b|min|max))|\b(calc|min|max|clamp)\(.+\)|^0$",
    )
    .expect("valid length pattern")
});
static COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})|(rgba?|hsla?|hwb|(ok)?(lab|lch)|color-mix)\(.+\))$")
        .expect("valid color pattern")
});
static IMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(url|image|image-set|cross-fade|element|(repeating-)?(linear|radial|conic)-gradient)\(.+\)$")
        .expect("valid image pattern")
});
static SHADOW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(inset_)?-?((\d+)?\.?(\d+)[a-z]+|0)_-?((\d+)?\.?(\d+)[a-z]+|0)")
        .expect("valid shadow pattern")
});

/// Kind of an arbitrary `[...]` value.
///
/// An explicit label (`[length:var(--gap)]`) decides the kind on its own.
/// Unlabelled values are recognised by shape where the shape is
/// unambiguous; `Position` and `Size` only accept labelled values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArbitraryKind {
    Length,
    Color,
    Number,
    Image,
    Position,
    Size,
    Shadow,
    /// Any arbitrary value at all.
    Any,
}

impl ArbitraryKind {
    fn accepts_label(self, label: &str) -> bool {
        match self {
            ArbitraryKind::Length => label == "length",
            ArbitraryKind::Color => label == "color",
            ArbitraryKind::Number => label == "number",
            ArbitraryKind::Image => matches!(label, "image" | "url"),
            ArbitraryKind::Position => label == "position",
            ArbitraryKind::Size => matches!(label, "length" | "size" | "percentage"),
            ArbitraryKind::Shadow => label == "shadow",
            ArbitraryKind::Any => true,
        }
    }

    fn accepts_value(self, value: &str) -> bool {
        match self {
            ArbitraryKind::Length => LENGTH.is_match(value) && !COLOR.is_match(value),
            ArbitraryKind::Color => COLOR.is_match(value),
            ArbitraryKind::Number => NUMBER.is_match(value.strip_prefix('-').unwrap_or(value)),
            ArbitraryKind::Image => IMAGE.is_match(value),
            ArbitraryKind::Shadow => SHADOW.is_match(value),
            ArbitraryKind::Position | ArbitraryKind::Size => false,
            ArbitraryKind::Any => true,
        }
    }

    /// Checks whether `value` is a bracketed arbitrary value of this kind.
    pub fn matches(self, value: &str) -> bool {
        let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) else {
            return false;
        };
        if inner.is_empty() {
            return false;
        }
        match arbitrary_label(inner) {
            Some(label) => self.accepts_label(label),
            None => self.accepts_value(inner),
        }
    }
}

/// Type labels recognised in `[label:value]`.
const LABELS: &[&str] = &[
    "any",
    "color",
    "family-name",
    "image",
    "length",
    "number",
    "percentage",
    "position",
    "shadow",
    "size",
    "url",
];

fn arbitrary_label(inner: &str) -> Option<&str> {
    let (label, _) = inner.split_once(':')?;
    LABELS.contains(&label).then_some(label)
}

/// One way a utility value may be spelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueRule {
    /// One of a fixed set of words. `""` matches the bare prefix.
    Keywords(Vec<String>),
    /// A token of a theme category, flattened with `-` (`red-500`). The
    /// category's `DEFAULT` token matches the bare prefix.
    Theme(String),
    /// A non-negative integer.
    Integer,
    /// A non-negative decimal number.
    Number,
    /// `n/m`
    Fraction,
    /// `n%`
    Percent,
    /// A bracketed arbitrary value.
    Arbitrary(ArbitraryKind),
}

impl ValueRule {
    pub fn keywords<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValueRule::Keywords(words.into_iter().map(Into::into).collect())
    }

    pub fn theme(category: &str) -> Self {
        ValueRule::Theme(category.to_string())
    }

    /// Checks `value` against this rule.
    pub fn matches(&self, value: &str, scales: &ThemeScales) -> bool {
        match self {
            ValueRule::Keywords(words) => words.iter().any(|w| w == value),
            ValueRule::Theme(category) => scales.contains(category, value),
            ValueRule::Integer => !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()),
            ValueRule::Number => NUMBER.is_match(value),
            ValueRule::Fraction => FRACTION.is_match(value),
            ValueRule::Percent => PERCENT.is_match(value),
            ValueRule::Arbitrary(kind) => kind.matches(value),
        }
    }
}

/// Flattened token names of every theme category.
///
/// Built once from a theme; value rules consult it instead of walking the
/// token tree for every class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeScales {
    scales: HashMap<String, HashSet<String>>,
}

impl ThemeScales {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_theme(theme: &Theme) -> Self {
        let scales = theme
            .categories()
            .map(|(name, _)| (name.to_string(), theme.scale_keys(name).into_iter().collect()))
            .collect();
        Self { scales }
    }

    /// Adds `keys` to a category, creating it if needed.
    pub fn insert<I, S>(&mut self, category: &str, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scales
            .entry(category.to_string())
            .or_default()
            .extend(keys.into_iter().map(Into::into));
    }

    pub fn contains(&self, category: &str, key: &str) -> bool {
        self.scales
            .get(category)
            .is_some_and(|keys| keys.contains(key))
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_scales() -> ThemeScales {
        ThemeScales::from_theme(Theme::tailwind_default())
    }

    #[test]
    fn test_theme_rule_uses_flattened_keys() {
        let scales = default_scales();
        let colors = ValueRule::theme("colors");
        assert!(colors.matches("red-500", &scales));
        assert!(colors.matches("white", &scales));
        assert!(!colors.matches("red-550", &scales));
    }

    #[test]
    fn test_theme_default_matches_bare_prefix() {
        let scales = default_scales();
        assert!(ValueRule::theme("borderRadius").matches("", &scales));
        assert!(!ValueRule::theme("colors").matches("", &scales));
    }

    #[test]
    fn test_numeric_rules() {
        let scales = ThemeScales::new();
        assert!(ValueRule::Integer.matches("12", &scales));
        assert!(!ValueRule::Integer.matches("+1", &scales));
        assert!(!ValueRule::Integer.matches("", &scales));
        assert!(ValueRule::Number.matches("1.5", &scales));
        assert!(!ValueRule::Number.matches("1e3", &scales));
        assert!(ValueRule::Fraction.matches("2/3", &scales));
        assert!(ValueRule::Percent.matches("33.3%", &scales));
    }

    #[test]
    fn test_arbitrary_shapes() {
        assert!(ArbitraryKind::Length.matches("[3px]"));
        assert!(ArbitraryKind::Length.matches("[calc(100%-1rem)]"));
        assert!(!ArbitraryKind::Length.matches("[#fff]"));
        assert!(ArbitraryKind::Color.matches("[#ff0000]"));
        assert!(ArbitraryKind::Color.matches("[rgb(0,0,0)]"));
        assert!(ArbitraryKind::Image.matches("[url(/a.png)]"));
        assert!(ArbitraryKind::Shadow.matches("[0_35px_60px_-15px_rgba(0,0,0,0.3)]"));
        assert!(ArbitraryKind::Number.matches("[0.5]"));
        assert!(ArbitraryKind::Any.matches("[var(--x)]"));
        assert!(!ArbitraryKind::Any.matches("[]"));
        assert!(!ArbitraryKind::Any.matches("3px"));
    }

    #[test]
    fn test_arbitrary_labels_decide() {
        assert!(ArbitraryKind::Length.matches("[length:var(--gap)]"));
        assert!(!ArbitraryKind::Color.matches("[length:var(--gap)]"));
        assert!(ArbitraryKind::Position.matches("[position:center_top]"));
        assert!(!ArbitraryKind::Position.matches("[center_top]"));
        assert!(ArbitraryKind::Size.matches("[size:200px_100px]"));
    }

    #[test]
    fn test_scales_insert() {
        let mut scales = ThemeScales::new();
        scales.insert("colors", ["brand"]);
        assert!(ValueRule::theme("colors").matches("brand", &scales));
        assert_eq!(scales.len(), 1);
    }
}
