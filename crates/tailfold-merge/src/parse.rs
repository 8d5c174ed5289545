//! Class name parsing.
//!
//! A class such as `md:hover:!-mt-2/50` breaks down into:
//!
//! - variants `md` and `hover`, split on the separator at bracket depth 0
//! - the important flag (`!`, leading or trailing)
//! - the negative flag (leading `-`)
//! - the base `mt-2`, with a postfix modifier `50` after a top-level `/`
//!
//! Arbitrary variants (`[&>*]:`) and arbitrary values (`w-[calc(100%-1rem)]`)
//! may contain the separator, dashes and slashes; only characters outside
//! brackets and parentheses are structural.

/// Important marker, v3 style (`!p-4`) or trailing (`p-4!`).
pub const IMPORTANT_MARKER: char = '!';

/// A class name broken into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClass<'a> {
    /// The class exactly as written.
    pub class: &'a str,
    /// Variants in written order.
    pub variants: Vec<&'a str>,
    pub important: bool,
    pub negative: bool,
    /// Whether the configured prefix was present (always true without one).
    pub has_prefix: bool,
    /// The base with markers and prefix removed, postfix included.
    pub base: &'a str,
    /// Byte offset of the postfix `/` within `base`, if any.
    pub postfix_at: Option<usize>,
}

impl<'a> ParsedClass<'a> {
    /// The base without its postfix modifier.
    pub fn base_without_postfix(&self) -> &'a str {
        match self.postfix_at {
            Some(at) => &self.base[..at],
            None => self.base,
        }
    }

    /// The postfix modifier, without the `/`.
    pub fn postfix(&self) -> Option<&'a str> {
        self.postfix_at.map(|at| &self.base[at + 1..])
    }

    /// `[property:value]` classes yield their property.
    pub fn arbitrary_property(&self) -> Option<&'a str> {
        let inner = self.base.strip_prefix('[')?.strip_suffix(']')?;
        let (property, value) = inner.split_once(':')?;
        if property.is_empty() || value.is_empty() || property.contains(['[', '(']) {
            return None;
        }
        Some(property)
    }

    /// Variants in comparison order.
    ///
    /// Ordinary variants are order-insensitive and get sorted. Arbitrary
    /// variants keep their position and fence off the sorting on either
    /// side, since `[&>*]:hover:` and `hover:[&>*]:` select different
    /// elements.
    pub fn sorted_variants(&self) -> Vec<&'a str> {
        let mut sorted = Vec::with_capacity(self.variants.len());
        let mut pending: Vec<&'a str> = Vec::new();
        for &variant in &self.variants {
            if variant.starts_with('[') {
                pending.sort_unstable();
                sorted.append(&mut pending);
                sorted.push(variant);
            } else {
                pending.push(variant);
            }
        }
        pending.sort_unstable();
        sorted.append(&mut pending);
        sorted
    }

    /// Key of the variant and important scope this class applies in.
    ///
    /// Two classes conflict only when their contexts are equal.
    pub fn context(&self) -> String {
        let mut key = self.sorted_variants().join(":");
        if self.important {
            key.push(IMPORTANT_MARKER);
        }
        key
    }
}

/// Parses `class` with the given variant separator and optional prefix.
pub fn parse_class<'a>(class: &'a str, separator: &str, prefix: Option<&str>) -> ParsedClass<'a> {
    let mut variants = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut skip_until = 0;

    for (i, c) in class.char_indices() {
        if i < skip_until {
            continue;
        }
        if depth == 0 && !separator.is_empty() && class[i..].starts_with(separator) {
            variants.push(&class[start..i]);
            start = i + separator.len();
            skip_until = start;
            continue;
        }
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    let mut base = &class[start..];
    let mut important = false;
    if let Some(rest) = base.strip_prefix(IMPORTANT_MARKER) {
        base = rest;
        important = true;
    } else if let Some(rest) = base.strip_suffix(IMPORTANT_MARKER) {
        base = rest;
        important = true;
    }

    let mut has_prefix = true;
    let mut negative = false;
    if let Some(prefix) = prefix {
        if let Some(rest) = base.strip_prefix(prefix) {
            base = rest;
        } else if let Some(rest) = base.strip_prefix('-').and_then(|r| r.strip_prefix(prefix)) {
            // `-tw-m-2` is the negative form of `tw-m-2`
            base = rest;
            negative = true;
        } else {
            has_prefix = false;
        }
    }

    if !negative && base.len() > 1 {
        if let Some(rest) = base.strip_prefix('-') {
            base = rest;
            negative = true;
        }
    }

    ParsedClass {
        class,
        variants,
        important,
        negative,
        has_prefix,
        base,
        postfix_at: postfix_position(base),
    }
}

/// Position of the last `/` outside brackets and parentheses.
fn postfix_position(base: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut found = None;
    for (i, c) in base.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            '/' if depth == 0 && i > 0 => found = Some(i),
            _ => {}
        }
    }
    found.filter(|&at| at + 1 < base.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(class: &str) -> ParsedClass<'_> {
        parse_class(class, ":", None)
    }

    #[test]
    fn test_plain_class() {
        let parsed = parse("p-4");
        assert!(parsed.variants.is_empty());
        assert_eq!(parsed.base, "p-4");
        assert!(!parsed.important);
        assert!(!parsed.negative);
        assert_eq!(parsed.postfix(), None);
    }

    #[test]
    fn test_variants_split_at_top_level() {
        let parsed = parse("md:[&:nth-child(3)]:hover:underline");
        assert_eq!(parsed.variants, vec!["md", "[&:nth-child(3)]", "hover"]);
        assert_eq!(parsed.base, "underline");
    }

    #[test]
    fn test_arbitrary_value_keeps_separator() {
        let parsed = parse("bg-[url(https://x.test/a.png)]");
        assert!(parsed.variants.is_empty());
        assert_eq!(parsed.base, "bg-[url(https://x.test/a.png)]");
        assert_eq!(parsed.postfix(), None);
    }

    #[test]
    fn test_important_leading_and_trailing() {
        assert!(parse("hover:!p-4").important);
        assert!(parse("p-4!").important);
        assert_eq!(parse("!p-4").base, "p-4");
    }

    #[test]
    fn test_negative() {
        let parsed = parse("-mt-2");
        assert!(parsed.negative);
        assert_eq!(parsed.base, "mt-2");
        assert!(!parse("-").negative);
    }

    #[test]
    fn test_postfix() {
        let parsed = parse("bg-red-500/50");
        assert_eq!(parsed.base_without_postfix(), "bg-red-500");
        assert_eq!(parsed.postfix(), Some("50"));

        let bracketed = parse("text-[1rem/2]");
        assert_eq!(bracketed.postfix(), None);
    }

    #[test]
    fn test_sorted_variants_respect_arbitrary_barrier() {
        let parsed = parse("hover:focus:[&>*]:md:dark:p-2");
        assert_eq!(
            parsed.sorted_variants(),
            vec!["focus", "hover", "[&>*]", "dark", "md"]
        );
    }

    #[test]
    fn test_context_is_order_insensitive() {
        assert_eq!(parse("hover:focus:p-2").context(), parse("focus:hover:p-2").context());
        assert_ne!(parse("hover:p-2").context(), parse("hover:!p-2").context());
    }

    #[test]
    fn test_custom_separator() {
        let parsed = parse_class("hover__p-2", "__", None);
        assert_eq!(parsed.variants, vec!["hover"]);
        assert_eq!(parsed.base, "p-2");
    }

    #[test]
    fn test_prefix() {
        let parsed = parse_class("hover:tw-p-2", ":", Some("tw-"));
        assert!(parsed.has_prefix);
        assert_eq!(parsed.base, "p-2");

        let negative = parse_class("-tw-m-2", ":", Some("tw-"));
        assert!(negative.has_prefix);
        assert!(negative.negative);
        assert_eq!(negative.base, "m-2");

        let missing = parse_class("p-2", ":", Some("tw-"));
        assert!(!missing.has_prefix);
    }

    #[test]
    fn test_arbitrary_property() {
        assert_eq!(parse("[mask-type:luminance]").arbitrary_property(), Some("mask-type"));
        assert_eq!(parse("[&>*]").arbitrary_property(), None);
        assert_eq!(parse("p-4").arbitrary_property(), None);
    }
}
