//! Official plugins bundled with the resolver.

use super::{Contribution, Plugin};
use crate::error::ConfigError;
use crate::style::{block, StyleBlock, StyleValue};
use crate::theme::Theme;

const SCOPE: &str = "@tailwindcss/";

const TEXT_INPUTS: &str = "[type='text'],input:where(:not([type])),[type='email'],[type='url'],\
[type='password'],[type='number'],[type='date'],[type='datetime-local'],[type='month'],\
[type='search'],[type='tel'],[type='time'],[type='week'],textarea,select[multiple],select";

/// The official plugins that can be referenced by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinPlugin {
    /// `prose` typography components.
    Typography,
    /// Form element resets and `form-*` components.
    Forms,
    /// `@container` utilities and `@<size>` variants.
    ContainerQueries,
}

impl BuiltinPlugin {
    pub const ALL: &'static [BuiltinPlugin] = &[
        BuiltinPlugin::Typography,
        BuiltinPlugin::Forms,
        BuiltinPlugin::ContainerQueries,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BuiltinPlugin::Typography => "typography",
            BuiltinPlugin::Forms => "forms",
            BuiltinPlugin::ContainerQueries => "container-queries",
        }
    }

    /// Looks a plugin up by name, with or without the `@tailwindcss/` scope.
    pub fn from_name(name: &str) -> Option<&'static BuiltinPlugin> {
        let name = name.strip_prefix(SCOPE).unwrap_or(name);
        Self::ALL.iter().find(|p| p.name() == name)
    }

    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|p| p.name().to_string()).collect()
    }
}

impl Plugin for BuiltinPlugin {
    fn name(&self) -> &str {
        BuiltinPlugin::name(self)
    }

    fn contribute(&self, theme: &Theme) -> Result<Contribution, ConfigError> {
        Ok(match self {
            BuiltinPlugin::Typography => typography(theme),
            BuiltinPlugin::Forms => forms(theme),
            BuiltinPlugin::ContainerQueries => container_queries(theme),
        })
    }
}

fn token<'a>(theme: &'a Theme, path: &str, fallback: &'a str) -> &'a str {
    theme.lookup(path).unwrap_or(fallback)
}

fn typography(theme: &Theme) -> Contribution {
    let body = token(theme, "colors.gray.700", "#374151");
    let heading = token(theme, "colors.gray.900", "#111827");

    let mut prose = block([
        ("color", body),
        ("max-width", "65ch"),
        ("line-height", "1.75"),
    ]);
    prose.insert(
        ":where(a):not(:where([class~='not-prose'] *))".to_string(),
        StyleValue::Block(block([
            ("color", heading),
            ("text-decoration", "underline"),
            ("font-weight", "500"),
        ])),
    );
    prose.insert(
        ":where(h1,h2,h3,strong):not(:where([class~='not-prose'] *))".to_string(),
        StyleValue::Block(block([("color", heading), ("font-weight", "700")])),
    );

    let mut contribution = Contribution::new().component(".prose", prose);
    for size in ["sm", "base", "lg", "xl", "2xl"] {
        if let Some(font_size) = theme.lookup(&format!("fontSize.{size}")) {
            contribution =
                contribution.component(&format!(".prose-{size}"), block([("font-size", font_size)]));
        }
    }

    contribution.component(
        ".prose-invert",
        block([
            ("color", token(theme, "colors.gray.300", "#d1d5db")),
            ("--tw-prose-links", token(theme, "colors.white", "#fff")),
        ]),
    )
}

fn form_control(theme: &Theme) -> StyleBlock {
    block([
        ("appearance", "none"),
        ("background-color", token(theme, "colors.white", "#fff")),
        ("border-color", token(theme, "colors.gray.500", "#6b7280")),
        ("border-width", "1px"),
        ("border-radius", "0px"),
        ("padding-top", token(theme, "spacing.2", "0.5rem")),
        ("padding-right", token(theme, "spacing.3", "0.75rem")),
        ("padding-bottom", token(theme, "spacing.2", "0.5rem")),
        ("padding-left", token(theme, "spacing.3", "0.75rem")),
        ("font-size", token(theme, "fontSize.base", "1rem")),
    ])
}

fn form_toggle(theme: &Theme) -> StyleBlock {
    block([
        ("appearance", "none"),
        ("padding", "0"),
        ("display", "inline-block"),
        ("vertical-align", "middle"),
        ("flex-shrink", "0"),
        ("height", token(theme, "spacing.4", "1rem")),
        ("width", token(theme, "spacing.4", "1rem")),
        ("color", token(theme, "colors.blue.600", "#2563eb")),
        ("border-color", token(theme, "colors.gray.500", "#6b7280")),
        ("border-width", "1px"),
    ])
}

fn forms(theme: &Theme) -> Contribution {
    let control = form_control(theme);
    let toggle = form_toggle(theme);
    let mut radio = toggle.clone();
    radio.insert("border-radius".to_string(), "100%".into());

    Contribution::new()
        .base(TEXT_INPUTS, control.clone())
        .base("[type='checkbox'],[type='radio']", toggle.clone())
        .base("[type='radio']", block([("border-radius", "100%")]))
        .component(".form-input", control.clone())
        .component(".form-textarea", control.clone())
        .component(".form-select", control.clone())
        .component(".form-multiselect", control)
        .component(".form-checkbox", toggle)
        .component(".form-radio", radio)
}

fn container_queries(theme: &Theme) -> Contribution {
    let mut contribution = Contribution::new()
        .utility(".@container", block([("container-type", "inline-size")]))
        .utility(".@container-normal", block([("container-type", "normal")]));
    for size in theme.scale_keys("containers") {
        if !size.is_empty() {
            contribution = contribution.variant(&format!("@{size}"));
        }
    }
    contribution
}
