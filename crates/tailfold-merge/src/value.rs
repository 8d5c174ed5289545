//! Class tokens and flattening.
//!
//! A [`ClassValue`] describes zero or more class names: a literal string
//! (possibly holding several whitespace-separated classes), a set of
//! classes gated by booleans, or a nested list of further values. Anything
//! falsy contributes nothing.
//!
//! ```rust
//! use tailfold_merge::{join, ClassValue};
//!
//! let active = true;
//! let out = join([
//!     ClassValue::from("btn  btn-primary"),
//!     ClassValue::from(("btn-active", active)),
//!     ClassValue::from(None::<&str>),
//!     ClassValue::from(vec!["", "ml-2"]),
//! ]);
//! assert_eq!(out, "btn btn-primary btn-active ml-2");
//! ```

use std::collections::BTreeMap;

use indexmap::IndexMap;

/// A class-name expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClassValue {
    /// Contributes nothing (`None`, `false`, `true`, empty input).
    #[default]
    Empty,
    /// Whitespace-separated class names.
    Str(String),
    /// Class names gated by a condition; only `true` entries contribute.
    Map(Vec<(String, bool)>),
    /// Nested values, flattened in order.
    List(Vec<ClassValue>),
}

impl ClassValue {
    /// Builds a list from any iterable of convertible values.
    pub fn list<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ClassValue>,
    {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }

    /// Returns whether this value can contribute no class at all.
    pub fn is_empty(&self) -> bool {
        match self {
            ClassValue::Empty => true,
            ClassValue::Str(s) => s.trim().is_empty(),
            ClassValue::Map(entries) => entries
                .iter()
                .all(|(name, enabled)| !enabled || name.trim().is_empty()),
            ClassValue::List(items) => items.iter().all(ClassValue::is_empty),
        }
    }

    /// Appends every class name of this value to `out`, in order.
    ///
    /// Duplicates are kept; resolving them is the merger's job.
    pub fn flatten_into<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            ClassValue::Empty => {}
            ClassValue::Str(s) => out.extend(s.split_ascii_whitespace()),
            ClassValue::Map(entries) => {
                for (name, enabled) in entries {
                    if *enabled {
                        out.extend(name.split_ascii_whitespace());
                    }
                }
            }
            ClassValue::List(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }

    /// Returns every class name of this value, in order.
    pub fn flatten(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }
}

/// Flattens `inputs` and joins the class names with single spaces.
///
/// No conflict resolution and no deduplication happen here; see
/// [`compose`](crate::compose) for that.
pub fn join<I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue>,
{
    let values: Vec<ClassValue> = inputs.into_iter().map(Into::into).collect();
    let mut classes = Vec::new();
    for value in &values {
        value.flatten_into(&mut classes);
    }
    classes.join(" ")
}

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        ClassValue::Str(value.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        ClassValue::Str(value)
    }
}

impl From<&String> for ClassValue {
    fn from(value: &String) -> Self {
        ClassValue::Str(value.clone())
    }
}

/// `true` and `false` alone name no class.
impl From<bool> for ClassValue {
    fn from(_: bool) -> Self {
        ClassValue::Empty
    }
}

impl From<()> for ClassValue {
    fn from(_: ()) -> Self {
        ClassValue::Empty
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassValue::Empty, Into::into)
    }
}

/// `("active", is_active)`
impl<S: Into<String>> From<(S, bool)> for ClassValue {
    fn from((name, enabled): (S, bool)) -> Self {
        ClassValue::Map(vec![(name.into(), enabled)])
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(values: Vec<T>) -> Self {
        ClassValue::list(values)
    }
}

impl<T: Into<ClassValue>, const N: usize> From<[T; N]> for ClassValue {
    fn from(values: [T; N]) -> Self {
        ClassValue::list(values)
    }
}

impl<K: Into<String>> From<BTreeMap<K, bool>> for ClassValue {
    fn from(map: BTreeMap<K, bool>) -> Self {
        ClassValue::Map(map.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<K: Into<String>> From<IndexMap<K, bool>> for ClassValue {
    fn from(map: IndexMap<K, bool>) -> Self {
        ClassValue::Map(map.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// JSON values follow JavaScript truthiness: `null`, `false`, `0` and `""`
/// contribute nothing, object keys are gated by the truthiness of their
/// values.
impl From<serde_json::Value> for ClassValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null | Value::Bool(_) => ClassValue::Empty,
            Value::Number(n) => {
                if n.as_f64() == Some(0.0) {
                    ClassValue::Empty
                } else {
                    ClassValue::Str(n.to_string())
                }
            }
            Value::String(s) => ClassValue::Str(s),
            Value::Array(items) => ClassValue::list(items),
            Value::Object(map) => ClassValue::Map(
                map.into_iter()
                    .map(|(k, v)| {
                        let enabled = json_truthy(&v);
                        (k, enabled)
                    })
                    .collect(),
            ),
        }
    }
}

fn json_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;

    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
