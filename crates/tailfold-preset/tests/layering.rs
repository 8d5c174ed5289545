use std::fs;

use proptest::prelude::*;
use tailfold_preset::{
    project_config, resolve, BuiltinPlugin, Config, ConfigError, CorePlugins, DeclaredPlugin,
    Preset, Resolver, StyleValue, ThemeLayer, TokenTable, TokenValue,
};

fn table(entries: &[(&str, &str)]) -> TokenTable {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), TokenValue::from(*v)))
        .collect()
}

fn enables_container() -> CorePlugins {
    CorePlugins::Toggles([("container".to_string(), true)].into_iter().collect())
}

#[test]
fn test_container_disabled_regardless_of_preset_order() {
    let enabling = Preset::new().named("enabling").core_plugins(enables_container());
    let neutral = Preset::new().named("neutral");

    for presets in [
        vec![enabling.clone(), neutral.clone()],
        vec![neutral.clone(), enabling.clone()],
    ] {
        let mut config = Config::new().disable_core_plugin("container");
        for preset in presets {
            config = config.preset(preset);
        }
        let resolved = resolve(&config).unwrap();
        assert!(!resolved.is_enabled("container"));
        assert_eq!(resolved.core_plugins.get("container"), Some(&false));
    }
}

#[test]
fn test_preset_disable_survives_consumer_enable() {
    let config = Config::new()
        .core_plugins(enables_container())
        .preset(Preset::new().disable_core_plugin("container"));
    assert!(!resolve(&config).unwrap().is_enabled("container"));
}

#[test]
fn test_resolution_is_byte_identical() {
    let first = resolve(&project_config()).unwrap();
    let second = resolve(&project_config()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    assert_eq!(first.to_yaml().unwrap(), second.to_yaml().unwrap());
}

#[test]
fn test_extend_is_deep_and_leaf_replacing() {
    let mut brand = TokenTable::new();
    brand.insert(
        "brand".into(),
        table(&[("500", "#111111"), ("600", "#222222")]).into(),
    );
    let mut override_600 = TokenTable::new();
    override_600.insert("brand".into(), table(&[("600", "#333333")]).into());

    let config = Config::new()
        .preset(Preset::new().theme(ThemeLayer::new().extend("colors", brand)))
        .theme(ThemeLayer::new().extend("colors", override_600));

    let resolved = resolve(&config).unwrap();
    assert_eq!(resolved.theme.lookup("colors.brand.500"), Some("#111111"));
    assert_eq!(resolved.theme.lookup("colors.brand.600"), Some("#333333"));
    assert_eq!(resolved.theme.lookup("colors.red.500"), Some("#ef4444"));
}

#[test]
fn test_category_replacement_drops_earlier_keys() {
    let config = Config::new()
        .preset(Preset::new().theme(ThemeLayer::new().extend("spacing", table(&[("huge", "40rem")]))))
        .theme(ThemeLayer::new().set("spacing", table(&[("1", "2px")])));

    let resolved = resolve(&config).unwrap();
    assert_eq!(resolved.theme.scale_keys("spacing"), vec!["1"]);
}

#[test]
fn test_later_preset_overrides_identical_key_only() {
    let first = Preset::new().theme(ThemeLayer::new().extend(
        "borderRadius",
        table(&[("card", "12px"), ("pill", "999px")]),
    ));
    let second = Preset::new().theme(ThemeLayer::new().extend("borderRadius", table(&[("card", "8px")])));

    let resolved = resolve(&Config::new().preset(first).preset(second)).unwrap();
    assert_eq!(resolved.theme.lookup("borderRadius.card"), Some("8px"));
    assert_eq!(resolved.theme.lookup("borderRadius.pill"), Some("999px"));
}

#[test]
fn test_required_core_plugin_disabled_is_an_error() {
    let config = project_config().disable_core_plugin("padding");
    let err = resolve(&config).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::DisabledRequirement { ref plugin, ref core_plugin }
            if plugin == "project" && core_plugin == "padding"
    ));
}

#[test]
fn test_unknown_named_plugin_fails() {
    let config = Config::new().plugin(tailfold_preset::PluginRef::named("aspect-ratio"));
    assert!(matches!(
        resolve(&config),
        Err(ConfigError::UnknownPlugin { .. })
    ));
}

#[test]
fn test_bare_resolver_keeps_only_layer_tokens() {
    let config = Config::new().theme(ThemeLayer::new().set("colors", table(&[("ink", "#000")])));
    let resolved = Resolver::bare().resolve(&config).unwrap();
    assert_eq!(resolved.theme.scale_keys("colors"), vec!["ink"]);
    assert_eq!(resolved.theme.lookup("spacing.4"), None);
}

#[test]
fn test_load_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tailfold.config.yaml");
    fs::write(
        &path,
        r##"
darkMode: class
corePlugins:
  container: false
presets:
  - name: brand
    theme:
      extend:
        colors:
          brand: "#ff5500"
    plugins:
      - "@tailwindcss/typography"
      - name: brand
        utilities:
          .text-brand-soft:
            color: theme(colors.brand)
content:
  files: ["./src/**/*.rs"]
"##,
    )
    .unwrap();

    let config = Config::from_path(&path).unwrap();
    let resolved = resolve(&config).unwrap();
    assert!(!resolved.is_enabled("container"));
    assert_eq!(resolved.theme.lookup("colors.brand"), Some("#ff5500"));
    assert_eq!(resolved.plugins, vec!["typography", "brand"]);
    assert_eq!(
        resolved.utilities[".text-brand-soft"]["color"],
        StyleValue::from("#ff5500")
    );
}

#[test]
fn test_load_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preset.json");
    fs::write(
        &path,
        r#"{"name": "json", "prefix": "tw-", "plugins": ["forms"]}"#,
    )
    .unwrap();

    let resolved = resolve(&Config::from_path(&path).unwrap()).unwrap();
    assert_eq!(resolved.prefix.as_deref(), Some("tw-"));
    assert!(resolved.has_plugin("forms"));
}

#[test]
fn test_load_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tailfold.config.toml");
    fs::write(&path, "darkMode = 'class'").unwrap();
    assert!(matches!(
        Config::from_path(&path),
        Err(ConfigError::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_path(dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_malformed_preset_fails_resolution() {
    let config = Config::new().preset(Preset::new().separator(" "));
    assert!(matches!(
        resolve(&config),
        Err(ConfigError::InvalidSeparator(_))
    ));
}

#[test]
fn test_declared_plugin_rejects_element_utility() {
    let plugin = DeclaredPlugin::new("bad").utility("p", Default::default());
    let config = Config::new().plugin(plugin);
    assert!(matches!(
        resolve(&config),
        Err(ConfigError::InvalidSelector { .. })
    ));
}

#[test]
fn test_resolved_config_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<tailfold_preset::ResolvedConfig>();
    assert_send_sync::<Config>();
}

proptest! {
    #[test]
    fn prop_disabled_core_plugin_stays_disabled(
        idx in 0usize..tailfold_preset::CORE_PLUGINS.len(),
        enable_in_preset in any::<bool>(),
        preset_first in any::<bool>(),
    ) {
        let name = tailfold_preset::CORE_PLUGINS[idx];
        let toggles = CorePlugins::Toggles([(name.to_string(), enable_in_preset)].into_iter().collect());
        let other = Preset::new().plugin(BuiltinPlugin::Forms);
        let toggling = Preset::new().core_plugins(toggles);

        let mut config = Config::new().disable_core_plugin(name);
        config = if preset_first {
            config.preset(toggling).preset(other)
        } else {
            config.preset(other).preset(toggling)
        };

        // Forms requires nothing, so any core plugin may be switched off.
        let resolved = resolve(&config).unwrap();
        prop_assert!(!resolved.is_enabled(name));
    }

    #[test]
    fn prop_resolution_is_deterministic(keys in proptest::collection::vec("[a-z]{1,6}", 0..6)) {
        let extension: TokenTable = keys
            .iter()
            .map(|k| (k.clone(), TokenValue::from(format!("#{k}"))))
            .collect();
        let config = Config::new().theme(ThemeLayer::new().extend("colors", extension));

        let first = resolve(&config).unwrap().to_json().unwrap();
        let second = resolve(&config).unwrap().to_json().unwrap();
        prop_assert_eq!(first, second);
    }
}
