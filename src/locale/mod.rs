// Number symbols per locale (decimal point, group separator, grouping pattern)
//
// A small built-in subset of CLDR data. Tags are resolved as
// language-REGION, then language, then en-US.

use lazy_static::lazy_static;
use regex::Regex;

pub const DEFAULT_LOCALE: &str = "en-US";

lazy_static! {
    /// BCP-47 shape: language, optional script, optional region, then any
    /// variant/extension subtags. Underscores are accepted as separators.
    static ref LOCALE_TAG: Regex = Regex::new(
        r"^([A-Za-z]{2,3})(?:[-_]([A-Za-z]{4}))?(?:[-_]([A-Za-z]{2}|[0-9]{3}))?(?:[-_][A-Za-z0-9]{1,8})*$"
    ).unwrap();
}

/// How integer digits are split into groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// 1,234,567
    Thousands,
    /// 12,34,567 (first group of three, then pairs)
    Indian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSymbols {
    pub decimal: &'static str,
    pub group: &'static str,
    pub grouping: Grouping,
}

const DOT_COMMA: NumberSymbols = NumberSymbols {
    decimal: ".",
    group: ",",
    grouping: Grouping::Thousands,
};

const COMMA_DOT: NumberSymbols = NumberSymbols {
    decimal: ",",
    group: ".",
    grouping: Grouping::Thousands,
};

const COMMA_NBSP: NumberSymbols = NumberSymbols {
    decimal: ",",
    group: "\u{a0}",
    grouping: Grouping::Thousands,
};

const COMMA_NARROW_NBSP: NumberSymbols = NumberSymbols {
    decimal: ",",
    group: "\u{202f}",
    grouping: Grouping::Thousands,
};

const DOT_APOSTROPHE: NumberSymbols = NumberSymbols {
    decimal: ".",
    group: "\u{2019}",
    grouping: Grouping::Thousands,
};

const INDIAN: NumberSymbols = NumberSymbols {
    decimal: ".",
    group: ",",
    grouping: Grouping::Indian,
};

/// Parsed language/region pair of a locale tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleId {
    pub language: String,
    pub region: Option<String>,
}

impl LocaleId {
    /// Parse a tag such as "de-CH", "zh-Hant-TW" or "pt_BR".
    /// Returns None when the tag is not well formed.
    pub fn parse(tag: &str) -> Option<Self> {
        let captures = LOCALE_TAG.captures(tag.trim())?;
        let language = captures.get(1)?.as_str().to_ascii_lowercase();
        let region = captures.get(3).map(|m| m.as_str().to_ascii_uppercase());
        Some(Self { language, region })
    }
}

fn symbols_for_region(language: &str, region: &str) -> Option<NumberSymbols> {
    match (language, region) {
        ("de", "CH") | ("de", "LI") | ("it", "CH") => Some(DOT_APOSTROPHE),
        ("en", "IN") => Some(INDIAN),
        ("pt", "PT") => Some(COMMA_NBSP),
        ("es", "MX") | ("es", "US") | ("es", "419") => Some(DOT_COMMA),
        ("en", "ZA") => Some(COMMA_NBSP),
        _ => None,
    }
}

fn symbols_for_language(language: &str) -> Option<NumberSymbols> {
    match language {
        "en" | "ja" | "zh" | "ko" | "th" | "he" | "ms" | "fil" => Some(DOT_COMMA),
        "de" | "es" | "it" | "nl" | "pt" | "id" | "da" | "tr" | "el" | "ro" | "hr" | "sl"
        | "sr" | "vi" => Some(COMMA_DOT),
        "fr" => Some(COMMA_NARROW_NBSP),
        "ru" | "uk" | "be" | "pl" | "cs" | "sk" | "fi" | "sv" | "nb" | "no" | "hu" | "bg"
        | "lt" | "lv" | "et" => Some(COMMA_NBSP),
        "hi" | "bn" | "mr" => Some(INDIAN),
        _ => None,
    }
}

/// Resolve the number symbols for `tag`. Never fails: unknown or malformed
/// tags fall back to en-US.
pub fn symbols(tag: &str) -> NumberSymbols {
    let Some(id) = LocaleId::parse(tag) else {
        log::warn!("malformed locale tag '{}', using {}", tag, DEFAULT_LOCALE);
        return DOT_COMMA;
    };

    if let Some(symbols) = id
        .region
        .as_deref()
        .and_then(|region| symbols_for_region(&id.language, region))
    {
        return symbols;
    }

    symbols_for_language(&id.language).unwrap_or_else(|| {
        log::debug!("no number symbols for locale '{}', using {}", tag, DEFAULT_LOCALE);
        DOT_COMMA
    })
}
