//! Locale type used to choose the language of verification messages

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A language tag such as `en-GB` or `zh-Hant-TW`
///
/// Only the language, script and region subtags are modelled. Components are
/// stored in canonical BCP-47 casing (lowercase language, titlecase script,
/// uppercase region) regardless of how they were supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    script: Option<String>,
    region: Option<String>,
}

/// Error returned when a string is not a usable language tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLocaleError {
    input: String,
}

impl fmt::Display for ParseLocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid locale: {}", self.input)
    }
}

impl std::error::Error for ParseLocaleError {}

impl Locale {
    /// Create a language-only locale, e.g. `Locale::new("de")`
    pub fn new(language: impl AsRef<str>) -> Self {
        Self {
            language: language.as_ref().to_ascii_lowercase(),
            script: None,
            region: None,
        }
    }

    /// Create a locale with a region, e.g. `Locale::with_region("en", "GB")`
    pub fn with_region(language: impl AsRef<str>, region: impl AsRef<str>) -> Self {
        Self {
            language: language.as_ref().to_ascii_lowercase(),
            script: None,
            region: Some(region.as_ref().to_ascii_uppercase()),
        }
    }

    /// British English
    pub fn uk() -> Self {
        Self::with_region("en", "GB")
    }

    /// American English
    pub fn us() -> Self {
        Self::with_region("en", "US")
    }

    /// ISO 639 language code
    pub fn language(&self) -> &str {
        &self.language
    }

    /// ISO 15924 script code, if any
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// ISO 3166 region code, if any
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// IETF language tag in canonical casing (e.g. `en-GB`)
    pub fn language_tag(&self) -> String {
        let mut tag = self.language.clone();
        if let Some(script) = &self.script {
            tag.push('-');
            tag.push_str(script);
        }
        if let Some(region) = &self.region {
            tag.push('-');
            tag.push_str(region);
        }
        tag
    }

    /// Lower-cased language tag (e.g. `en-gb`), the form the API expects
    pub fn dashed(&self) -> String {
        self.language_tag().to_ascii_lowercase()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language_tag())
    }
}

impl std::str::FromStr for Locale {
    type Err = ParseLocaleError;

    /// Accepts `-` or `_` separators in any case: `en-GB`, `en_gb`, `zh-Hant-TW`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseLocaleError {
            input: s.to_string(),
        };

        let mut parts = s.trim().split(['-', '_']);
        let language = parts.next().filter(|l| is_language(l)).ok_or_else(invalid)?;

        let mut locale = Locale::new(language);
        for part in parts {
            if locale.script.is_none() && locale.region.is_none() && is_script(part) {
                locale.script = Some(titlecase(part));
            } else if locale.region.is_none() && is_region(part) {
                locale.region = Some(part.to_ascii_uppercase());
            } else {
                return Err(invalid());
            }
        }

        Ok(locale)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.language_tag())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

fn is_language(s: &str) -> bool {
    (2..=3).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_script(s: &str) -> bool {
    s.len() == 4 && s.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_region(s: &str) -> bool {
    (s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()))
        || (s.len() == 3 && s.chars().all(|c| c.is_ascii_digit()))
}

fn titlecase(s: &str) -> String {
    let lower = s.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
