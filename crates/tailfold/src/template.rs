//! MiniJinja registration of the `cn` filter and function.

use std::sync::Arc;

use minijinja::value::{Rest, ValueKind};
use minijinja::{Environment, Value};
use tailfold_merge::{ClassValue, Merger};

/// Registers `cn` as both a filter and a function on `env`.
///
/// ```jinja
/// <button class="{{ cn('btn px-2', {'btn-active': active}, extra) }}">
/// <div class="{{ base_classes | cn('p-4', none) }}">
/// ```
///
/// Strings, numbers, sequences and maps are accepted. Map keys contribute
/// when their value is truthy and keep their template order; `none`,
/// undefined, booleans, zero and NaN contribute nothing.
pub fn register_cn(env: &mut Environment<'_>, merger: Arc<Merger>) {
    let filter_merger = Arc::clone(&merger);
    env.add_filter("cn", move |value: Value, rest: Rest<Value>| -> String {
        let inputs = std::iter::once(&value)
            .chain(rest.iter())
            .map(to_class_value);
        filter_merger.compose(inputs)
    });

    env.add_function("cn", move |args: Rest<Value>| -> String {
        merger.compose(args.iter().map(to_class_value))
    });
}

/// Converts a template value into a class value.
pub fn to_class_value(value: &Value) -> ClassValue {
    match value.kind() {
        ValueKind::Undefined | ValueKind::None | ValueKind::Bool => ClassValue::Empty,
        ValueKind::String => value
            .as_str()
            .map(ClassValue::from)
            .unwrap_or_default(),
        ValueKind::Number => match f64::try_from(value.clone()) {
            Ok(n) if n == 0.0 || n.is_nan() => ClassValue::Empty,
            _ => ClassValue::Str(value.to_string()),
        },
        ValueKind::Map => {
            let Ok(keys) = value.try_iter() else {
                return ClassValue::Empty;
            };
            let entries = keys
                .map(|key| {
                    let enabled = value.get_item(&key).is_ok_and(|v| v.is_true());
                    let name = key.as_str().map_or_else(|| key.to_string(), str::to_string);
                    (name, enabled)
                })
                .collect();
            ClassValue::Map(entries)
        }
        ValueKind::Seq | ValueKind::Iterable => match value.try_iter() {
            Ok(items) => ClassValue::List(items.map(|item| to_class_value(&item)).collect()),
            Err(_) => ClassValue::Empty,
        },
        _ => {
            tracing::trace!(kind = ?value.kind(), "ignoring template value in cn");
            ClassValue::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use minijinja::context;
    use tailfold_merge::MergeConfig;

    use super::*;

    fn env() -> Environment<'static> {
        let mut env = Environment::new();
        register_cn(&mut env, Arc::new(Merger::new(MergeConfig::default()).unwrap()));
        env
    }

    #[test]
    fn test_cn_function_merges() {
        let out = env()
            .render_str("{{ cn('px-2 py-1', 'p-3') }}", context! {})
            .unwrap();
        assert_eq!(out, "p-3");
    }

    #[test]
    fn test_cn_filter_takes_extra_arguments() {
        let out = env()
            .render_str("{{ base | cn('text-lg', none) }}", context! { base => "text-sm font-bold" })
            .unwrap();
        assert_eq!(out, "font-bold text-lg");
    }

    #[test]
    fn test_maps_gate_on_truthiness() {
        let out = env()
            .render_str(
                "{{ cn('btn', {'btn-active': active, 'btn-disabled': disabled}) }}",
                context! { active => true, disabled => 0 },
            )
            .unwrap();
        assert_eq!(out, "btn btn-active");
    }

    #[test]
    fn test_falsy_and_nested_values() {
        let out = env()
            .render_str(
                "{{ cn(missing, none, false, ['a', ['b', none]], '') }}",
                context! {},
            )
            .unwrap();
        assert_eq!(out, "a b");
    }

    #[test]
    fn test_to_class_value_number() {
        assert_eq!(to_class_value(&Value::from(3)), ClassValue::Str("3".to_string()));
        assert_eq!(to_class_value(&Value::from(0)), ClassValue::Empty);
        assert_eq!(to_class_value(&Value::from(0.0)), ClassValue::Empty);
        assert_eq!(to_class_value(&Value::from(f64::NAN)), ClassValue::Empty);
    }

    #[test]
    fn test_map_keys_keep_template_order() {
        let out = env()
            .render_str("{{ cn({'p-4': true, 'p-2': true}) }}", context! {})
            .unwrap();
        assert_eq!(out, "p-2");
    }
}
