//! Locale-aware count formatting

/// Shown when no valid number is available
pub const PLACEHOLDER: &str = "-";

/// Digit grouping conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberLocale {
    /// `1,234,567` (en, ko, ja, zh)
    #[default]
    Comma,
    /// `1.234.567` (de, es, it, nl, pt, ...)
    Period,
    /// `1 234 567` with a no-break space (fr, ru, pl, sv, ...)
    Space,
    /// `1234567`
    Plain,
}

impl NumberLocale {
    /// Map a locale tag such as `de-DE`, `ko_KR.UTF-8` or `plain`.
    /// The names returned by [`NumberLocale::tag`] map back to themselves.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "de" | "es" | "it" | "nl" | "pt" | "id" | "tr" | "da" | "el" | "ro" | "hr" | "sl"
            | "vi" => NumberLocale::Period,
            "fr" | "ru" | "pl" | "cs" | "sk" | "sv" | "nb" | "no" | "fi" | "uk" | "hu" | "bg"
            | "lt" | "lv" | "et" => NumberLocale::Space,
            "period" => NumberLocale::Period,
            "space" => NumberLocale::Space,
            "plain" | "none" => NumberLocale::Plain,
            _ => NumberLocale::Comma,
        }
    }

    /// Pick a locale from `LC_ALL`, `LC_NUMERIC` or `LANG`
    pub fn from_env() -> Self {
        ["LC_ALL", "LC_NUMERIC", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|v| !v.is_empty())
            .map(|v| Self::from_tag(&v))
            .unwrap_or_default()
    }

    /// Explicit tag if given, otherwise the environment
    pub fn resolve(tag: Option<&str>) -> Self {
        match tag {
            Some(t) if !t.trim().is_empty() => Self::from_tag(t.trim()),
            _ => Self::from_env(),
        }
    }

    /// Stable lowercase name used in machine-readable output
    pub fn tag(self) -> &'static str {
        match self {
            NumberLocale::Comma => "comma",
            NumberLocale::Period => "period",
            NumberLocale::Space => "space",
            NumberLocale::Plain => "plain",
        }
    }

    fn group_separator(self) -> Option<char> {
        match self {
            NumberLocale::Comma => Some(','),
            NumberLocale::Period => Some('.'),
            NumberLocale::Space => Some('\u{a0}'),
            NumberLocale::Plain => None,
        }
    }
}

/// Format a visitor count with grouping separators
pub fn format_count(n: u64, locale: NumberLocale) -> String {
    group_digits(&n.to_string(), locale)
}

fn group_digits(digits: &str, locale: NumberLocale) -> String {
    let Some(sep) = locale.group_separator() else {
        return digits.to_string();
    };

    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_comma() {
        assert_eq!(format_count(0, NumberLocale::Comma), "0");
        assert_eq!(format_count(999, NumberLocale::Comma), "999");
        assert_eq!(format_count(1000, NumberLocale::Comma), "1,000");
        assert_eq!(format_count(1234567, NumberLocale::Comma), "1,234,567");
    }

    #[test]
    fn test_format_count_other_locales() {
        assert_eq!(format_count(1234567, NumberLocale::Period), "1.234.567");
        assert_eq!(format_count(1234567, NumberLocale::Space), "1\u{a0}234\u{a0}567");
        assert_eq!(format_count(1234567, NumberLocale::Plain), "1234567");
    }

    #[test]
    fn test_format_count_max() {
        assert_eq!(
            format_count(u64::MAX, NumberLocale::Comma),
            "18,446,744,073,709,551,615"
        );
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(NumberLocale::from_tag("en-US"), NumberLocale::Comma);
        assert_eq!(NumberLocale::from_tag("ko_KR.UTF-8"), NumberLocale::Comma);
        assert_eq!(NumberLocale::from_tag("de-DE"), NumberLocale::Period);
        assert_eq!(NumberLocale::from_tag("fr_FR"), NumberLocale::Space);
        assert_eq!(NumberLocale::from_tag("plain"), NumberLocale::Plain);
        assert_eq!(NumberLocale::from_tag("C"), NumberLocale::Comma);
    }

    #[test]
    fn test_tag_maps_back() {
        for locale in [
            NumberLocale::Comma,
            NumberLocale::Period,
            NumberLocale::Space,
            NumberLocale::Plain,
        ] {
            assert_eq!(NumberLocale::from_tag(locale.tag()), locale);
        }
        assert_eq!(NumberLocale::Period.tag(), "period");
    }

    #[test]
    fn test_resolve_prefers_explicit_tag() {
        assert_eq!(NumberLocale::resolve(Some("de")), NumberLocale::Period);
    }
}
