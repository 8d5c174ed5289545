use minijinja::{context, Environment};
use tailfold::{Config, StyleContext};
use tailfold_preset::{ThemeLayer, TokenTable, TokenValue};

fn brand_context() -> StyleContext {
    let mut colors = TokenTable::new();
    colors.insert("brand".to_string(), TokenValue::from("#ff5500"));
    StyleContext::from_config(&Config::new().theme(ThemeLayer::new().extend("colors", colors))).unwrap()
}

#[test]
fn test_template_uses_context_theme() {
    let ctx = brand_context();
    let mut env = Environment::new();
    ctx.register(&mut env);
    env.add_template("button", r#"<button class="{{ cn('btn text-white', variant_classes, {'opacity-50': disabled}) }}">"#)
        .unwrap();

    let out = env
        .get_template("button")
        .unwrap()
        .render(context! { variant_classes => ["text-brand", "px-4"], disabled => false })
        .unwrap();
    assert_eq!(out, r#"<button class="btn text-brand px-4">"#);
}

#[test]
fn test_filter_chain() {
    let ctx = StyleContext::project().unwrap();
    let mut env = Environment::new();
    ctx.register(&mut env);

    let out = env
        .render_str(
            "{{ 'p-2 hover:p-2' | cn(extra) }}",
            context! { extra => "p-4" },
        )
        .unwrap();
    assert_eq!(out, "hover:p-2 p-4");
}

#[test]
fn test_contexts_are_independent() {
    let project = StyleContext::project().unwrap();
    let brand = brand_context();
    assert_eq!(project.compose(["text-red-500 text-brand"]), "text-red-500 text-brand");
    assert_eq!(brand.compose(["text-red-500 text-brand"]), "text-brand");
}

#[test]
fn test_zero_and_map_order() {
    let ctx = StyleContext::project().unwrap();
    let mut env = Environment::new();
    ctx.register(&mut env);

    let out = env
        .render_str("{{ cn('a', count, {'p-4': true, 'p-2': true}) }}", context! { count => 0 })
        .unwrap();
    assert_eq!(out, "a p-2");

    let out = env
        .render_str("{{ cn('a', count) }}", context! { count => 2 })
        .unwrap();
    assert_eq!(out, "a 2");
}
