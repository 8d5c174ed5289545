//! The built-in class table.
//!
//! Groups follow the utility families of the default utility set, each
//! tagged with the core plugin that generates it. Where several groups share
//! a prefix (`text-lg` is a font size, `text-red-500` a color) the group
//! listed first is tried first, so narrow value rules come before the
//! catch-all arbitrary color rules.

use crate::group::ClassGroup;
use crate::rules::ArbitraryKind::{self, Any, Image, Length, Number, Position, Shadow, Size};
use crate::rules::ValueRule;

fn g(id: &str, plugin: &str) -> ClassGroup {
    ClassGroup::new(id, plugin)
}

fn kw(words: &[&str]) -> ValueRule {
    ValueRule::keywords(words.iter().copied())
}

fn theme(category: &str) -> ValueRule {
    ValueRule::theme(category)
}

fn arb(kind: ArbitraryKind) -> ValueRule {
    ValueRule::Arbitrary(kind)
}

/// Spacing scale, an optional own category, then any arbitrary value.
fn spacing(own: &str) -> Vec<ValueRule> {
    vec![theme("spacing"), theme(own), arb(Any)]
}

fn spacing_auto(own: &str) -> Vec<ValueRule> {
    vec![theme("spacing"), theme(own), kw(&["auto"]), arb(Any)]
}

fn inset_values() -> Vec<ValueRule> {
    vec![
        theme("spacing"),
        theme("inset"),
        kw(&["auto", "full", "px"]),
        ValueRule::Fraction,
        arb(Any),
    ]
}

fn color_values(own: &str) -> Vec<ValueRule> {
    vec![theme("colors"), theme(own), arb(Any)]
}

fn width_values(own: &str) -> Vec<ValueRule> {
    vec![theme(own), theme("borderWidth"), arb(Length)]
}

fn sized(own: &str, keywords: &[&str]) -> Vec<ValueRule> {
    vec![
        theme("spacing"),
        theme(own),
        kw(keywords),
        ValueRule::Fraction,
        arb(Any),
    ]
}

const SIDES: &[&str] = &["t", "r", "b", "l"];
const BLEND_MODES: &[&str] = &[
    "normal",
    "multiply",
    "screen",
    "overlay",
    "darken",
    "lighten",
    "color-dodge",
    "color-burn",
    "hard-light",
    "soft-light",
    "difference",
    "exclusion",
    "hue",
    "saturation",
    "color",
    "luminosity",
    "plus-lighter",
];
const LINE_STYLES: &[&str] = &["solid", "dashed", "dotted", "double"];
const ALIGN: &[&str] = &["start", "end", "center", "between", "around", "evenly", "stretch", "baseline", "normal"];

/// Every built-in class group, in lookup order.
pub fn default_groups() -> Vec<ClassGroup> {
    let mut groups = Vec::with_capacity(256);
    layout(&mut groups);
    flexbox_and_grid(&mut groups);
    spacing_groups(&mut groups);
    sizing(&mut groups);
    typography(&mut groups);
    backgrounds(&mut groups);
    borders(&mut groups);
    effects_and_filters(&mut groups);
    tables_transitions_transforms(&mut groups);
    interactivity(&mut groups);
    official_plugins(&mut groups);
    groups
}

fn layout(groups: &mut Vec<ClassGroup>) {
    groups.extend([
        g("container", "container").exact(["container"]),
        g("aspect", "aspectRatio").prefixed("aspect", [theme("aspectRatio"), arb(Any)]),
        g("columns", "columns").prefixed("columns", [theme("columns"), ValueRule::Integer, arb(Any)]),
        g("break-after", "breakAfter").keywords(
            "break-after",
            ["auto", "avoid", "all", "avoid-page", "page", "left", "right", "column"],
        ),
        g("break-before", "breakBefore").keywords(
            "break-before",
            ["auto", "avoid", "all", "avoid-page", "page", "left", "right", "column"],
        ),
        g("break-inside", "breakInside")
            .keywords("break-inside", ["auto", "avoid", "avoid-page", "avoid-column"]),
        g("box-decoration", "boxDecorationBreak").exact(["box-decoration-slice", "box-decoration-clone"]),
        g("box", "boxSizing").exact(["box-border", "box-content"]),
        g("display", "display").exact([
            "block",
            "inline-block",
            "inline",
            "flex",
            "inline-flex",
            "table",
            "inline-table",
            "table-caption",
            "table-cell",
            "table-column",
            "table-column-group",
            "table-footer-group",
            "table-header-group",
            "table-row-group",
            "table-row",
            "flow-root",
            "grid",
            "inline-grid",
            "contents",
            "list-item",
            "hidden",
        ]),
        g("float", "float").keywords("float", ["right", "left", "start", "end", "none"]),
        g("clear", "clear").keywords("clear", ["left", "right", "both", "none", "start", "end"]),
        g("isolation", "isolation").exact(["isolate", "isolation-auto"]),
        g("object-fit", "objectFit").keywords("object", ["contain", "cover", "fill", "none", "scale-down"]),
        g("object-position", "objectPosition").prefixed(
            "object",
            [
                kw(&["bottom", "center", "left", "left-bottom", "left-top", "right", "right-bottom", "right-top", "top"]),
                arb(Any),
            ],
        ),
        g("overflow", "overflow").keywords("overflow", ["auto", "hidden", "clip", "visible", "scroll"]),
        g("overflow-x", "overflow").keywords("overflow-x", ["auto", "hidden", "clip", "visible", "scroll"]),
        g("overflow-y", "overflow").keywords("overflow-y", ["auto", "hidden", "clip", "visible", "scroll"]),
        g("overscroll", "overscrollBehavior").keywords("overscroll", ["auto", "contain", "none"]),
        g("overscroll-x", "overscrollBehavior").keywords("overscroll-x", ["auto", "contain", "none"]),
        g("overscroll-y", "overscrollBehavior").keywords("overscroll-y", ["auto", "contain", "none"]),
        g("position", "position").exact(["static", "fixed", "absolute", "relative", "sticky"]),
        g("inset", "inset").prefixed("inset", inset_values()),
        g("inset-x", "inset").prefixed("inset-x", inset_values()),
        g("inset-y", "inset").prefixed("inset-y", inset_values()),
        g("start", "inset").prefixed("start", inset_values()),
        g("end", "inset").prefixed("end", inset_values()),
        g("top", "inset").prefixed("top", inset_values()),
        g("right", "inset").prefixed("right", inset_values()),
        g("bottom", "inset").prefixed("bottom", inset_values()),
        g("left", "inset").prefixed("left", inset_values()),
        g("visibility", "visibility").exact(["visible", "invisible", "collapse"]),
        g("z", "zIndex").prefixed("z", [theme("zIndex"), kw(&["auto"]), ValueRule::Integer, arb(Any)]),
    ]);
}

fn flexbox_and_grid(groups: &mut Vec<ClassGroup>) {
    groups.extend([
        g("basis", "flexBasis").prefixed(
            "basis",
            [
                theme("spacing"),
                theme("flexBasis"),
                kw(&["auto", "full", "px"]),
                ValueRule::Fraction,
                arb(Any),
            ],
        ),
        g("flex-direction", "flexDirection").keywords("flex", ["row", "row-reverse", "col", "col-reverse"]),
        g("flex-wrap", "flexWrap").keywords("flex", ["wrap", "wrap-reverse", "nowrap"]),
        g("flex", "flex").prefixed("flex", [theme("flex"), kw(&["1", "auto", "initial", "none"]), arb(Any)]),
        g("grow", "flexGrow")
            .exact(["grow"])
            .prefixed("grow", [theme("flexGrow"), ValueRule::Integer, arb(Any)]),
        g("shrink", "flexShrink")
            .exact(["shrink"])
            .prefixed("shrink", [theme("flexShrink"), ValueRule::Integer, arb(Any)]),
        g("order", "order").prefixed(
            "order",
            [theme("order"), kw(&["first", "last", "none"]), ValueRule::Integer, arb(Any)],
        ),
        g("grid-cols", "gridTemplateColumns").prefixed(
            "grid-cols",
            [theme("gridTemplateColumns"), kw(&["none", "subgrid"]), ValueRule::Integer, arb(Any)],
        ),
        g("col-start-end", "gridColumn")
            .exact(["col-auto"])
            .prefixed("col-span", [kw(&["full"]), ValueRule::Integer, arb(Any)])
            .prefixed("col", [theme("gridColumn"), arb(Any)]),
        g("col-start", "gridColumnStart")
            .prefixed("col-start", [kw(&["auto"]), ValueRule::Integer, arb(Any)]),
        g("col-end", "gridColumnEnd").prefixed("col-end", [kw(&["auto"]), ValueRule::Integer, arb(Any)]),
        g("grid-rows", "gridTemplateRows").prefixed(
            "grid-rows",
            [theme("gridTemplateRows"), kw(&["none", "subgrid"]), ValueRule::Integer, arb(Any)],
        ),
        g("row-start-end", "gridRow")
            .exact(["row-auto"])
            .prefixed("row-span", [kw(&["full"]), ValueRule::Integer, arb(Any)])
            .prefixed("row", [theme("gridRow"), arb(Any)]),
        g("row-start", "gridRowStart").prefixed("row-start", [kw(&["auto"]), ValueRule::Integer, arb(Any)]),
        g("row-end", "gridRowEnd").prefixed("row-end", [kw(&["auto"]), ValueRule::Integer, arb(Any)]),
        g("grid-flow", "gridAutoFlow")
            .keywords("grid-flow", ["row", "col", "dense", "row-dense", "col-dense"]),
        g("auto-cols", "gridAutoColumns")
            .prefixed("auto-cols", [kw(&["auto", "min", "max", "fr"]), arb(Any)]),
        g("auto-rows", "gridAutoRows")
            .prefixed("auto-rows", [kw(&["auto", "min", "max", "fr"]), arb(Any)]),
        g("gap", "gap").prefixed("gap", spacing("gap")),
        g("gap-x", "gap").prefixed("gap-x", spacing("gap")),
        g("gap-y", "gap").prefixed("gap-y", spacing("gap")),
        g("justify-content", "justifyContent").prefixed("justify", [kw(ALIGN)]),
        g("justify-items", "justifyItems")
            .keywords("justify-items", ["start", "end", "center", "stretch", "normal"]),
        g("justify-self", "justifySelf")
            .keywords("justify-self", ["auto", "start", "end", "center", "stretch"]),
        g("align-content", "alignContent").prefixed("content", [kw(ALIGN)]),
        g("align-items", "alignItems")
            .keywords("items", ["start", "end", "center", "baseline", "stretch"]),
        g("align-self", "alignSelf")
            .keywords("self", ["auto", "start", "end", "center", "stretch", "baseline"]),
        g("place-content", "placeContent").prefixed("place-content", [kw(ALIGN)]),
        g("place-items", "placeItems")
            .keywords("place-items", ["start", "end", "center", "baseline", "stretch"]),
        g("place-self", "placeSelf")
            .keywords("place-self", ["auto", "start", "end", "center", "stretch"]),
    ]);
}

fn spacing_groups(groups: &mut Vec<ClassGroup>) {
    for id in ["p", "px", "py", "ps", "pe", "pt", "pr", "pb", "pl"] {
        groups.push(g(id, "padding").prefixed(id, spacing("padding")));
    }
    for id in ["m", "mx", "my", "ms", "me", "mt", "mr", "mb", "ml"] {
        groups.push(g(id, "margin").prefixed(id, spacing_auto("margin")));
    }
    groups.extend([
        g("space-x", "space").prefixed("space-x", spacing("space")),
        g("space-x-reverse", "space").exact(["space-x-reverse"]),
        g("space-y", "space").prefixed("space-y", spacing("space")),
        g("space-y-reverse", "space").exact(["space-y-reverse"]),
    ]);
}

fn sizing(groups: &mut Vec<ClassGroup>) {
    groups.extend([
        g("w", "width").prefixed(
            "w",
            sized("width", &["auto", "px", "full", "screen", "svw", "lvw", "dvw", "min", "max", "fit"]),
        ),
        g("min-w", "minWidth").prefixed(
            "min-w",
            sized("minWidth", &["px", "full", "min", "max", "fit"]),
        ),
        g("max-w", "maxWidth").prefixed(
            "max-w",
            vec![
                theme("maxWidth"),
                kw(&["none", "full", "min", "max", "fit", "prose"]),
                arb(Any),
            ],
        )
        .prefixed("max-w-screen", [theme("screens")]),
        g("h", "height").prefixed(
            "h",
            sized("height", &["auto", "px", "full", "screen", "svh", "lvh", "dvh", "min", "max", "fit"]),
        ),
        g("min-h", "minHeight").prefixed(
            "min-h",
            sized("minHeight", &["px", "full", "screen", "svh", "lvh", "dvh", "min", "max", "fit"]),
        ),
        g("max-h", "maxHeight").prefixed(
            "max-h",
            sized("maxHeight", &["none", "px", "full", "screen", "svh", "lvh", "dvh", "min", "max", "fit"]),
        ),
        g("size", "size").prefixed("size", sized("size", &["auto", "px", "full", "min", "max", "fit"])),
    ]);
}

fn typography(groups: &mut Vec<ClassGroup>) {
    groups.extend([
        g("font-size", "fontSize").prefixed("text", [theme("fontSize"), arb(Length)]),
        g("font-smoothing", "fontSmoothing").exact(["antialiased", "subpixel-antialiased"]),
        g("font-style", "fontStyle").exact(["italic", "not-italic"]),
        g("font-weight", "fontWeight").prefixed("font", [theme("fontWeight"), arb(Number)]),
        g("font-family", "fontFamily").prefixed("font", [theme("fontFamily"), arb(Any)]),
        g("fvn-normal", "fontVariantNumeric").exact(["normal-nums"]),
        g("fvn-ordinal", "fontVariantNumeric").exact(["ordinal"]),
        g("fvn-slashed-zero", "fontVariantNumeric").exact(["slashed-zero"]),
        g("fvn-figure", "fontVariantNumeric").exact(["lining-nums", "oldstyle-nums"]),
        g("fvn-spacing", "fontVariantNumeric").exact(["proportional-nums", "tabular-nums"]),
        g("fvn-fraction", "fontVariantNumeric").exact(["diagonal-fractions", "stacked-fractions"]),
        g("tracking", "letterSpacing").themed("tracking", "letterSpacing", Any),
        g("line-clamp", "lineClamp")
            .prefixed("line-clamp", [kw(&["none"]), ValueRule::Integer, arb(Number)]),
        g("leading", "lineHeight").prefixed("leading", [theme("lineHeight"), theme("spacing"), arb(Any)]),
        g("list-image", "listStyleImage").prefixed("list-image", [kw(&["none"]), arb(Any)]),
        g("list-style-position", "listStylePosition").exact(["list-inside", "list-outside"]),
        g("list-style-type", "listStyleType")
            .prefixed("list", [kw(&["none", "disc", "decimal"]), arb(Any)]),
        g("text-alignment", "textAlign")
            .keywords("text", ["left", "center", "right", "justify", "start", "end"]),
        g("text-opacity", "textOpacity").themed("text-opacity", "opacity", Number),
        g("text-color", "textColor").prefixed("text", color_values("textColor")),
        g("text-decoration", "textDecoration").exact(["underline", "overline", "line-through", "no-underline"]),
        g("text-decoration-style", "textDecorationStyle")
            .prefixed("decoration", [kw(LINE_STYLES), kw(&["wavy"])]),
        g("text-decoration-thickness", "textDecorationThickness").prefixed(
            "decoration",
            [theme("textDecorationThickness"), kw(&["auto", "from-font"]), ValueRule::Integer, arb(Length)],
        ),
        g("text-decoration-color", "textDecorationColor").prefixed("decoration", color_values("textDecorationColor")),
        g("underline-offset", "textUnderlineOffset").prefixed(
            "underline-offset",
            [kw(&["auto"]), ValueRule::Integer, arb(Any)],
        ),
        g("text-transform", "textTransform").exact(["uppercase", "lowercase", "capitalize", "normal-case"]),
        g("text-overflow", "textOverflow").exact(["truncate", "text-ellipsis", "text-clip"]),
        g("text-wrap", "textWrap").keywords("text", ["wrap", "nowrap", "balance", "pretty"]),
        g("indent", "textIndent").prefixed("indent", spacing("textIndent")),
        g("vertical-align", "verticalAlign").prefixed(
            "align",
            [
                kw(&["baseline", "top", "middle", "bottom", "text-top", "text-bottom", "sub", "super"]),
                arb(Any),
            ],
        ),
        g("whitespace", "whitespace")
            .keywords("whitespace", ["normal", "nowrap", "pre", "pre-line", "pre-wrap", "break-spaces"]),
        g("break", "wordBreak").keywords("break", ["normal", "words", "all", "keep"]),
        g("hyphens", "hyphens").keywords("hyphens", ["none", "manual", "auto"]),
        g("content", "content").prefixed("content", [kw(&["none"]), arb(Any)]),
    ]);
}

fn backgrounds(groups: &mut Vec<ClassGroup>) {
    groups.extend([
        g("bg-attachment", "backgroundAttachment").keywords("bg", ["fixed", "local", "scroll"]),
        g("bg-clip", "backgroundClip").keywords("bg-clip", ["border", "padding", "content", "text"]),
        g("bg-opacity", "backgroundOpacity").themed("bg-opacity", "opacity", Number),
        g("bg-origin", "backgroundOrigin").keywords("bg-origin", ["border", "padding", "content"]),
        g("bg-position", "backgroundPosition").prefixed(
            "bg",
            [
                kw(&["bottom", "center", "left", "left-bottom", "left-top", "right", "right-bottom", "right-top", "top"]),
                arb(Position),
            ],
        ),
        g("bg-repeat", "backgroundRepeat")
            .exact(["bg-repeat", "bg-no-repeat"])
            .keywords("bg-repeat", ["x", "y", "round", "space"]),
        g("bg-size", "backgroundSize").prefixed("bg", [kw(&["auto", "cover", "contain"]), arb(Size)]),
        g("bg-image", "backgroundImage")
            .exact(["bg-none"])
            .keywords("bg-gradient-to", ["t", "tr", "r", "br", "b", "bl", "l", "tl"])
            .prefixed("bg", [theme("backgroundImage"), arb(Image)]),
        g("bg-color", "backgroundColor").prefixed("bg", color_values("backgroundColor")),
        g("gradient-from-pos", "gradientColorStops")
            .prefixed("from", [ValueRule::Percent, arb(Length)]),
        g("gradient-via-pos", "gradientColorStops").prefixed("via", [ValueRule::Percent, arb(Length)]),
        g("gradient-to-pos", "gradientColorStops").prefixed("to", [ValueRule::Percent, arb(Length)]),
        g("gradient-from", "gradientColorStops").prefixed("from", color_values("gradientColorStops")),
        g("gradient-via", "gradientColorStops").prefixed("via", color_values("gradientColorStops")),
        g("gradient-to", "gradientColorStops").prefixed("to", color_values("gradientColorStops")),
    ]);
}

fn borders(groups: &mut Vec<ClassGroup>) {
    groups.push(g("rounded", "borderRadius").themed("rounded", "borderRadius", Any));
    for corner in ["s", "e", "t", "r", "b", "l", "ss", "se", "ee", "es", "tl", "tr", "br", "bl"] {
        let prefix = format!("rounded-{corner}");
        groups.push(g(&prefix, "borderRadius").themed(&prefix, "borderRadius", Any));
    }

    groups.push(g("border-w", "borderWidth").prefixed("border", width_values("borderWidth")));
    for side in ["x", "y", "s", "e"].iter().chain(SIDES) {
        let prefix = format!("border-{side}");
        groups.push(
            g(&format!("border-w-{side}"), "borderWidth").prefixed(&prefix, width_values("borderWidth")),
        );
    }
    groups.push(g("border-opacity", "borderOpacity").themed("border-opacity", "opacity", Number));
    groups.push(
        g("border-style", "borderStyle")
            .prefixed("border", [kw(LINE_STYLES), kw(&["hidden", "none"])]),
    );
    groups.push(g("border-color", "borderColor").prefixed("border", color_values("borderColor")));
    for side in ["x", "y", "s", "e"].iter().chain(SIDES) {
        let prefix = format!("border-{side}");
        groups.push(
            g(&format!("border-color-{side}"), "borderColor")
                .prefixed(&prefix, color_values("borderColor")),
        );
    }

    groups.extend([
        g("divide-x", "divideWidth").prefixed("divide-x", width_values("divideWidth")),
        g("divide-x-reverse", "divideWidth").exact(["divide-x-reverse"]),
        g("divide-y", "divideWidth").prefixed("divide-y", width_values("divideWidth")),
        g("divide-y-reverse", "divideWidth").exact(["divide-y-reverse"]),
        g("divide-opacity", "divideOpacity").themed("divide-opacity", "opacity", Number),
        g("divide-style", "divideStyle").prefixed("divide", [kw(LINE_STYLES), kw(&["none"])]),
        g("divide-color", "divideColor").prefixed("divide", color_values("divideColor")),
        g("outline-style", "outlineStyle")
            .exact(["outline"])
            .prefixed("outline", [kw(&["none", "dashed", "dotted", "double"])]),
        g("outline-offset", "outlineOffset").prefixed(
            "outline-offset",
            [theme("outlineOffset"), ValueRule::Integer, arb(Length)],
        ),
        g("outline-w", "outlineWidth").prefixed(
            "outline",
            [theme("outlineWidth"), ValueRule::Integer, arb(Length)],
        ),
        g("outline-color", "outlineColor").prefixed("outline", color_values("outlineColor")),
        g("ring-w", "ringWidth").themed("ring", "ringWidth", Length),
        g("ring-w-inset", "ringWidth").exact(["ring-inset"]),
        g("ring-opacity", "ringOpacity").themed("ring-opacity", "opacity", Number),
        g("ring-color", "ringColor").prefixed("ring", color_values("ringColor")),
        g("ring-offset-w", "ringOffsetWidth").themed("ring-offset", "ringOffsetWidth", Length),
        g("ring-offset-color", "ringOffsetColor").prefixed("ring-offset", color_values("ringOffsetColor")),
    ]);
}

fn effects_and_filters(groups: &mut Vec<ClassGroup>) {
    groups.extend([
        g("shadow", "boxShadow").prefixed(
            "shadow",
            [theme("boxShadow"), arb(Shadow)],
        ),
        g("shadow-color", "boxShadowColor").prefixed("shadow", color_values("boxShadowColor")),
        g("opacity", "opacity").prefixed("opacity", [theme("opacity"), ValueRule::Integer, arb(Any)]),
        g("mix-blend", "mixBlendMode").prefixed("mix-blend", [kw(BLEND_MODES)]),
        g("bg-blend", "backgroundBlendMode").prefixed("bg-blend", [kw(BLEND_MODES)]),
        g("filter", "filter").exact(["filter", "filter-none"]),
        g("blur", "blur").themed("blur", "blur", Any),
        g("brightness", "brightness").prefixed("brightness", [theme("brightness"), ValueRule::Integer, arb(Any)]),
        g("contrast", "contrast").prefixed("contrast", [theme("contrast"), ValueRule::Integer, arb(Any)]),
        g("drop-shadow", "dropShadow").prefixed(
            "drop-shadow",
            [theme("dropShadow"), kw(&["", "sm", "md", "lg", "xl", "2xl", "none"]), arb(Any)],
        ),
        g("grayscale", "grayscale")
            .exact(["grayscale"])
            .prefixed("grayscale", [ValueRule::Integer, arb(Any)]),
        g("hue-rotate", "hueRotate").prefixed("hue-rotate", [ValueRule::Integer, arb(Any)]),
        g("invert", "invert")
            .exact(["invert"])
            .prefixed("invert", [ValueRule::Integer, arb(Any)]),
        g("saturate", "saturate").prefixed("saturate", [ValueRule::Integer, arb(Any)]),
        g("sepia", "sepia")
            .exact(["sepia"])
            .prefixed("sepia", [ValueRule::Integer, arb(Any)]),
        g("backdrop-filter", "backdropFilter").exact(["backdrop-filter", "backdrop-filter-none"]),
        g("backdrop-blur", "backdropBlur").themed("backdrop-blur", "blur", Any),
        g("backdrop-brightness", "backdropBrightness")
            .prefixed("backdrop-brightness", [ValueRule::Integer, arb(Any)]),
        g("backdrop-opacity", "backdropOpacity")
            .prefixed("backdrop-opacity", [theme("opacity"), ValueRule::Integer, arb(Any)]),
    ]);
}

fn tables_transitions_transforms(groups: &mut Vec<ClassGroup>) {
    groups.extend([
        g("border-collapse", "borderCollapse").exact(["border-collapse", "border-separate"]),
        g("border-spacing", "borderSpacing").prefixed("border-spacing", spacing("borderSpacing")),
        g("border-spacing-x", "borderSpacing").prefixed("border-spacing-x", spacing("borderSpacing")),
        g("border-spacing-y", "borderSpacing").prefixed("border-spacing-y", spacing("borderSpacing")),
        g("table-layout", "tableLayout").keywords("table", ["auto", "fixed"]),
        g("caption", "captionSide").keywords("caption", ["top", "bottom"]),
        g("transition", "transitionProperty").prefixed(
            "transition",
            [kw(&["", "none", "all", "colors", "opacity", "shadow", "transform"]), arb(Any)],
        ),
        g("duration", "transitionDuration")
            .prefixed("duration", [theme("transitionDuration"), ValueRule::Integer, arb(Any)]),
        g("ease", "transitionTimingFunction").themed("ease", "transitionTimingFunction", Any),
        g("delay", "transitionDelay")
            .prefixed("delay", [theme("transitionDelay"), ValueRule::Integer, arb(Any)]),
        g("animate", "animation").themed("animate", "animation", Any),
        g("transform", "transform").exact(["transform", "transform-cpu", "transform-gpu", "transform-none"]),
        g("scale", "scale").prefixed("scale", [theme("scale"), ValueRule::Integer, arb(Any)]),
        g("scale-x", "scale").prefixed("scale-x", [theme("scale"), ValueRule::Integer, arb(Any)]),
        g("scale-y", "scale").prefixed("scale-y", [theme("scale"), ValueRule::Integer, arb(Any)]),
        g("rotate", "rotate").prefixed("rotate", [theme("rotate"), ValueRule::Integer, arb(Any)]),
        g("translate-x", "translate").prefixed("translate-x", inset_values()),
        g("translate-y", "translate").prefixed("translate-y", inset_values()),
        g("skew-x", "skew").prefixed("skew-x", [theme("skew"), ValueRule::Integer, arb(Any)]),
        g("skew-y", "skew").prefixed("skew-y", [theme("skew"), ValueRule::Integer, arb(Any)]),
        g("transform-origin", "transformOrigin").prefixed(
            "origin",
            [
                kw(&["center", "top", "top-right", "right", "bottom-right", "bottom", "bottom-left", "left", "top-left"]),
                arb(Any),
            ],
        ),
    ]);
}

fn interactivity(groups: &mut Vec<ClassGroup>) {
    groups.extend([
        g("accent", "accentColor").prefixed("accent", {
            let mut values = color_values("accentColor");
            values.insert(0, kw(&["auto"]));
            values
        }),
        g("appearance", "appearance").keywords("appearance", ["none", "auto"]),
        g("cursor", "cursor").prefixed(
            "cursor",
            [
                kw(&[
                    "auto", "default", "pointer", "wait", "text", "move", "help", "not-allowed", "none",
                    "context-menu", "progress", "cell", "crosshair", "vertical-text", "alias", "copy",
                    "no-drop", "grab", "grabbing", "all-scroll", "col-resize", "row-resize", "n-resize",
                    "e-resize", "s-resize", "w-resize", "ne-resize", "nw-resize", "se-resize",
                    "sw-resize", "ew-resize", "ns-resize", "nesw-resize", "nwse-resize", "zoom-in",
                    "zoom-out",
                ]),
                arb(Any),
            ],
        ),
        g("caret", "caretColor").prefixed("caret", color_values("caretColor")),
        g("pointer-events", "pointerEvents").keywords("pointer-events", ["none", "auto"]),
        g("resize", "resize")
            .exact(["resize"])
            .keywords("resize", ["none", "x", "y"]),
        g("scroll-behavior", "scrollBehavior").keywords("scroll", ["auto", "smooth"]),
    ]);
    for id in ["scroll-m", "scroll-mx", "scroll-my", "scroll-ms", "scroll-me", "scroll-mt", "scroll-mr", "scroll-mb", "scroll-ml"] {
        groups.push(g(id, "scrollMargin").prefixed(id, spacing("scrollMargin")));
    }
    for id in ["scroll-p", "scroll-px", "scroll-py", "scroll-ps", "scroll-pe", "scroll-pt", "scroll-pr", "scroll-pb", "scroll-pl"] {
        groups.push(g(id, "scrollPadding").prefixed(id, spacing("scrollPadding")));
    }
    groups.extend([
        g("snap-align", "scrollSnapAlign").keywords("snap", ["start", "end", "center", "align-none"]),
        g("snap-stop", "scrollSnapStop").keywords("snap", ["normal", "always"]),
        g("snap-type", "scrollSnapType").keywords("snap", ["none", "x", "y", "both"]),
        g("snap-strictness", "scrollSnapType").keywords("snap", ["mandatory", "proximity"]),
        g("touch", "touchAction").keywords("touch", ["auto", "none", "manipulation"]),
        g("touch-x", "touchAction").keywords("touch-pan", ["x", "left", "right"]),
        g("touch-y", "touchAction").keywords("touch-pan", ["y", "up", "down"]),
        g("touch-pz", "touchAction").exact(["touch-pinch-zoom"]),
        g("select", "userSelect").keywords("select", ["none", "text", "all", "auto"]),
        g("will-change", "willChange")
            .prefixed("will-change", [kw(&["auto", "scroll", "contents", "transform"]), arb(Any)]),
        g("fill", "fill").prefixed("fill", {
            let mut values = color_values("fill");
            values.insert(0, kw(&["none"]));
            values
        }),
        g("stroke-w", "strokeWidth").prefixed(
            "stroke",
            [theme("strokeWidth"), ValueRule::Integer, arb(Length), arb(Number)],
        ),
        g("stroke", "stroke").prefixed("stroke", {
            let mut values = color_values("stroke");
            values.insert(0, kw(&["none"]));
            values
        }),
        g("sr", "accessibility").exact(["sr-only", "not-sr-only"]),
    ]);
}

fn official_plugins(groups: &mut Vec<ClassGroup>) {
    groups.extend([
        g("prose-size", "typography").keywords("prose", ["sm", "base", "lg", "xl", "2xl"]),
        g("prose-invert", "typography").exact(["prose-invert"]),
        g("container-type", "container-queries").exact(["@container", "@container-normal"]),
    ]);
}

/// Built-in conflicts: a group and the groups it overrides.
///
/// Overriding is one-way. A later `p-4` drops an earlier `px-2`, while a
/// later `px-2` refines an earlier `p-4` and both are kept.
pub fn default_conflicts() -> Vec<(String, Vec<String>)> {
    let mut conflicts: Vec<(String, Vec<String>)> = Vec::new();
    let mut add = |group: &str, overrides: &[&str]| {
        conflicts.push((
            group.to_string(),
            overrides.iter().map(|s| s.to_string()).collect(),
        ));
    };

    add("overflow", &["overflow-x", "overflow-y"]);
    add("overscroll", &["overscroll-x", "overscroll-y"]);
    add(
        "inset",
        &["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"],
    );
    add("inset-x", &["right", "left"]);
    add("inset-y", &["top", "bottom"]);
    add("flex", &["basis", "grow", "shrink"]);
    add("gap", &["gap-x", "gap-y"]);
    add("p", &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"]);
    add("px", &["pr", "pl"]);
    add("py", &["pt", "pb"]);
    add("m", &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"]);
    add("mx", &["mr", "ml"]);
    add("my", &["mt", "mb"]);
    add("size", &["w", "h"]);
    add("font-size", &["leading"]);
    add(
        "fvn-normal",
        &["fvn-ordinal", "fvn-slashed-zero", "fvn-figure", "fvn-spacing", "fvn-fraction"],
    );
    for id in ["fvn-ordinal", "fvn-slashed-zero", "fvn-figure", "fvn-spacing", "fvn-fraction"] {
        add(id, &["fvn-normal"]);
    }
    add("line-clamp", &["display", "overflow"]);
    add(
        "rounded",
        &[
            "rounded-s", "rounded-e", "rounded-t", "rounded-r", "rounded-b", "rounded-l",
            "rounded-ss", "rounded-se", "rounded-ee", "rounded-es", "rounded-tl", "rounded-tr",
            "rounded-br", "rounded-bl",
        ],
    );
    add("rounded-s", &["rounded-ss", "rounded-es"]);
    add("rounded-e", &["rounded-se", "rounded-ee"]);
    add("rounded-t", &["rounded-tl", "rounded-tr"]);
    add("rounded-r", &["rounded-tr", "rounded-br"]);
    add("rounded-b", &["rounded-br", "rounded-bl"]);
    add("rounded-l", &["rounded-tl", "rounded-bl"]);
    add("border-spacing", &["border-spacing-x", "border-spacing-y"]);
    add(
        "border-w",
        &[
            "border-w-x", "border-w-y", "border-w-s", "border-w-e", "border-w-t", "border-w-r",
            "border-w-b", "border-w-l",
        ],
    );
    add("border-w-x", &["border-w-r", "border-w-l"]);
    add("border-w-y", &["border-w-t", "border-w-b"]);
    add(
        "border-color",
        &[
            "border-color-x", "border-color-y", "border-color-s", "border-color-e",
            "border-color-t", "border-color-r", "border-color-b", "border-color-l",
        ],
    );
    add("border-color-x", &["border-color-r", "border-color-l"]);
    add("border-color-y", &["border-color-t", "border-color-b"]);
    add(
        "scroll-m",
        &[
            "scroll-mx", "scroll-my", "scroll-ms", "scroll-me", "scroll-mt", "scroll-mr",
            "scroll-mb", "scroll-ml",
        ],
    );
    add("scale", &["scale-x", "scale-y"]);
    add("scroll-mx", &["scroll-mr", "scroll-ml"]);
    add("scroll-my", &["scroll-mt", "scroll-mb"]);
    add(
        "scroll-p",
        &[
            "scroll-px", "scroll-py", "scroll-ps", "scroll-pe", "scroll-pt", "scroll-pr",
            "scroll-pb", "scroll-pl",
        ],
    );
    add("scroll-px", &["scroll-pr", "scroll-pl"]);
    add("scroll-py", &["scroll-pt", "scroll-pb"]);
    add("touch", &["touch-x", "touch-y", "touch-pz"]);
    add("touch-x", &["touch"]);
    add("touch-y", &["touch"]);
    add("touch-pz", &["touch"]);

    conflicts
}

/// Extra overrides of a group when its class carries a postfix modifier.
///
/// `text-lg/7` sets the line height too, so it overrides `leading-*`.
pub fn default_postfix_conflicts() -> Vec<(String, Vec<String>)> {
    vec![("font-size".to_string(), vec!["leading".to_string()])]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use tailfold_preset::{is_core_plugin, BuiltinPlugin};

    use super::*;

    #[test]
    fn test_group_ids_are_unique() {
        let groups = default_groups();
        let mut seen = HashSet::new();
        for group in &groups {
            assert!(seen.insert(group.id().to_string()), "duplicate group {}", group.id());
        }
    }

    #[test]
    fn test_every_group_names_a_known_plugin() {
        for group in default_groups() {
            assert!(
                is_core_plugin(group.plugin()) || BuiltinPlugin::from_name(group.plugin()).is_some(),
                "group {} names unknown plugin {}",
                group.id(),
                group.plugin()
            );
        }
    }

    #[test]
    fn test_conflicts_reference_known_groups() {
        let ids: HashSet<String> = default_groups().iter().map(|g| g.id().to_string()).collect();
        for (group, overrides) in default_conflicts().iter().chain(default_postfix_conflicts().iter()) {
            assert!(ids.contains(group), "unknown conflict source {group}");
            for target in overrides {
                assert!(ids.contains(target), "unknown conflict target {target}");
            }
        }
    }
}
