//! Core plugin toggles.
//!
//! Core plugins are the built-in utility families (`padding`, `textColor`,
//! `container`, ...). A configuration switches them off with a map of
//! `name: false` entries or restricts them with a whitelist. Disabling is
//! terminal: once any layer disables a plugin, no later layer re-enables it.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Every core plugin name a configuration may refer to.
pub const CORE_PLUGINS: &[&str] = &[
    "accentColor",
    "accessibility",
    "alignContent",
    "alignItems",
    "alignSelf",
    "animation",
    "appearance",
    "aspectRatio",
    "backdropBlur",
    "backdropBrightness",
    "backdropFilter",
    "backdropOpacity",
    "backgroundAttachment",
    "backgroundBlendMode",
    "backgroundClip",
    "backgroundColor",
    "backgroundImage",
    "backgroundOpacity",
    "backgroundOrigin",
    "backgroundPosition",
    "backgroundRepeat",
    "backgroundSize",
    "blur",
    "borderCollapse",
    "borderColor",
    "borderOpacity",
    "borderRadius",
    "borderSpacing",
    "borderStyle",
    "borderWidth",
    "boxDecorationBreak",
    "boxShadow",
    "boxShadowColor",
    "boxSizing",
    "breakAfter",
    "breakBefore",
    "breakInside",
    "brightness",
    "captionSide",
    "caretColor",
    "clear",
    "columns",
    "container",
    "content",
    "contrast",
    "cursor",
    "display",
    "divideColor",
    "divideOpacity",
    "divideStyle",
    "divideWidth",
    "dropShadow",
    "fill",
    "filter",
    "flex",
    "flexBasis",
    "flexDirection",
    "flexGrow",
    "flexShrink",
    "flexWrap",
    "float",
    "fontFamily",
    "fontSize",
    "fontSmoothing",
    "fontStyle",
    "fontVariantNumeric",
    "fontWeight",
    "gap",
    "gradientColorStops",
    "grayscale",
    "gridAutoColumns",
    "gridAutoFlow",
    "gridAutoRows",
    "gridColumn",
    "gridColumnEnd",
    "gridColumnStart",
    "gridRow",
    "gridRowEnd",
    "gridRowStart",
    "gridTemplateColumns",
    "gridTemplateRows",
    "height",
    "hueRotate",
    "hyphens",
    "inset",
    "invert",
    "isolation",
    "justifyContent",
    "justifyItems",
    "justifySelf",
    "letterSpacing",
    "lineClamp",
    "lineHeight",
    "listStyleImage",
    "listStylePosition",
    "listStyleType",
    "margin",
    "maxHeight",
    "maxWidth",
    "minHeight",
    "minWidth",
    "mixBlendMode",
    "objectFit",
    "objectPosition",
    "opacity",
    "order",
    "outlineColor",
    "outlineOffset",
    "outlineStyle",
    "outlineWidth",
    "overflow",
    "overscrollBehavior",
    "padding",
    "placeContent",
    "placeItems",
    "placeSelf",
    "pointerEvents",
    "position",
    "preflight",
    "resize",
    "ringColor",
    "ringOffsetColor",
    "ringOffsetWidth",
    "ringOpacity",
    "ringWidth",
    "rotate",
    "saturate",
    "scale",
    "scrollBehavior",
    "scrollMargin",
    "scrollPadding",
    "scrollSnapAlign",
    "scrollSnapStop",
    "scrollSnapType",
    "sepia",
    "size",
    "skew",
    "space",
    "stroke",
    "strokeWidth",
    "tableLayout",
    "textAlign",
    "textColor",
    "textDecoration",
    "textDecorationColor",
    "textDecorationStyle",
    "textDecorationThickness",
    "textIndent",
    "textOpacity",
    "textOverflow",
    "textTransform",
    "textUnderlineOffset",
    "textWrap",
    "touchAction",
    "transform",
    "transformOrigin",
    "transitionDelay",
    "transitionDuration",
    "transitionProperty",
    "transitionTimingFunction",
    "translate",
    "userSelect",
    "verticalAlign",
    "visibility",
    "whitespace",
    "width",
    "willChange",
    "wordBreak",
    "zIndex",
];

/// Returns whether `name` is a known core plugin.
pub fn is_core_plugin(name: &str) -> bool {
    CORE_PLUGINS.binary_search(&name).is_ok()
}

/// The `corePlugins` entry of one configuration layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorePlugins {
    /// `{ container: false, float: false }`
    Toggles(IndexMap<String, bool>),
    /// `[padding, margin]`: only these stay enabled.
    Enabled(Vec<String>),
}

impl CorePlugins {
    /// A toggle map with the given plugins disabled.
    pub fn disabled<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CorePlugins::Toggles(names.into_iter().map(|n| (n.into(), false)).collect())
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let names: Box<dyn Iterator<Item = &String>> = match self {
            CorePlugins::Toggles(map) => Box::new(map.keys()),
            CorePlugins::Enabled(list) => Box::new(list.iter()),
        };
        for name in names {
            if !is_core_plugin(name) {
                return Err(ConfigError::UnknownCorePlugin(name.clone()));
            }
        }
        Ok(())
    }
}

/// Accumulated core plugin state across layers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CorePluginState {
    disabled: BTreeSet<String>,
    allowed: Option<BTreeSet<String>>,
}

impl CorePluginState {
    pub(crate) fn apply(&mut self, plugins: &CorePlugins) {
        match plugins {
            CorePlugins::Toggles(map) => {
                for (name, enabled) in map {
                    if !enabled {
                        self.disabled.insert(name.clone());
                    }
                }
            }
            CorePlugins::Enabled(list) => {
                let listed: BTreeSet<String> = list.iter().cloned().collect();
                self.allowed = Some(match self.allowed.take() {
                    Some(current) => current.intersection(&listed).cloned().collect(),
                    None => listed,
                });
            }
        }
    }

    pub(crate) fn is_enabled(&self, name: &str) -> bool {
        !self.disabled.contains(name)
            && self
                .allowed
                .as_ref()
                .map_or(true, |allowed| allowed.contains(name))
    }
}
