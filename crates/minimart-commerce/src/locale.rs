//! Storefront locales.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported storefront locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Dutch.
    Nl,
    /// Arabic.
    Ar,
}

impl Locale {
    /// All supported locales, in display order.
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Nl, Locale::Ar];

    /// Get the locale code (e.g., "en").
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Nl => "nl",
            Locale::Ar => "ar",
        }
    }

    /// Parse a locale code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "en" => Some(Locale::En),
            "nl" => Some(Locale::Nl),
            "ar" => Some(Locale::Ar),
            _ => None,
        }
    }

    /// Decimal separator glyph used when rendering prices.
    ///
    /// The numeric value is identical across locales, only the glyph
    /// differs.
    pub fn decimal_separator(&self) -> char {
        match self {
            Locale::En => '.',
            Locale::Nl | Locale::Ar => ',',
        }
    }

    /// Whether text in this locale runs right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::Ar)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_code() {
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("NL"), Some(Locale::Nl));
        assert_eq!(Locale::from_code("ar"), Some(Locale::Ar));
        assert_eq!(Locale::from_code("fr"), None);
    }

    #[test]
    fn test_decimal_separator() {
        assert_eq!(Locale::En.decimal_separator(), '.');
        assert_eq!(Locale::Nl.decimal_separator(), ',');
        assert_eq!(Locale::Ar.decimal_separator(), ',');
    }

    #[test]
    fn test_locale_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::Nl).unwrap(), r#""nl""#);
        let locale: Locale = serde_json::from_str(r#""ar""#).unwrap();
        assert_eq!(locale, Locale::Ar);
    }
}
