//! The bundled project preset and consumer configuration.
//!
//! These are the layers a new project starts from: a preset enabling the
//! official plugins plus the project's own base styles, the `cx-focus`
//! utility and a fluid `.container` component; and a consumer config that
//! switches off the core `container` plugin in favour of that component.

use once_cell::sync::Lazy;

use crate::preset::{Config, Content, DarkMode, Preset};

static PROJECT_PRESET_SOURCE: &str = include_str!("../presets/project.yaml");

static PROJECT_PRESET: Lazy<Preset> = Lazy::new(|| {
    Preset::from_yaml_str(PROJECT_PRESET_SOURCE).expect("embedded project preset is valid")
});

/// Files scanned for class names by the project configuration.
pub const PROJECT_CONTENT_GLOB: &str =
    "./src/**/*!(*.stories|*.spec|*.test).{ts,tsx,astro,vue,svelte,js,jsx,md,mdx,html}";

/// The project preset.
pub fn project_preset() -> Preset {
    PROJECT_PRESET.clone()
}

/// The project consumer configuration layered over [`project_preset`].
pub fn project_config() -> Config {
    Config::new()
        .named("tailfold.config")
        .dark_mode(DarkMode::Class)
        .disable_core_plugin("container")
        .preset(project_preset())
        .content(Content::files([PROJECT_CONTENT_GLOB]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::PluginRef;
    use crate::resolve::resolve;

    #[test]
    fn test_project_preset_parses() {
        let preset = project_preset();
        assert_eq!(preset.label(), "project");
        assert_eq!(preset.dark_mode, Some(DarkMode::Class));
        let names: Vec<_> = preset.plugins.iter().map(PluginRef::name).collect();
        assert_eq!(names, vec!["typography", "forms", "container-queries", "project"]);
    }

    #[test]
    fn test_project_config_resolves() {
        let resolved = resolve(&project_config()).unwrap();
        assert!(!resolved.is_enabled("container"));
        assert_eq!(resolved.dark_mode, DarkMode::Class);
        assert_eq!(resolved.theme.scale_keys("gap"), vec!["0.25"]);
        assert_eq!(resolved.content.files, vec![PROJECT_CONTENT_GLOB]);
        assert!(resolved.component_classes().any(|c| c == "container"));
        assert!(resolved.utility_classes().any(|c| c == "cx-focus"));
        assert!(resolved.base.contains_key("html"));
    }
}
