//! Supported formatting locales.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("Unsupported locale: {0}. Supported: en-US, en-GB, en-IN, de-DE, fr-FR, ja-JP")]
    Unsupported(String),
}

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `$1.00`
    Prefix,
    /// `1,00 €` with a no-break space
    Suffix,
}

/// Digit grouping of the integer part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// 1,234,567
    Thousands,
    /// 12,34,567
    Indian,
}

/// Locales the formatter knows how to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    EnIn,
    DeDe,
    FrFr,
    JaJp,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::EnIn => "en-IN",
            Locale::DeDe => "de-DE",
            Locale::FrFr => "fr-FR",
            Locale::JaJp => "ja-JP",
        }
    }

    pub fn decimal_separator(&self) -> char {
        match self {
            Locale::DeDe | Locale::FrFr => ',',
            _ => '.',
        }
    }

    pub fn group_separator(&self) -> char {
        match self {
            Locale::DeDe => '.',
            Locale::FrFr => '\u{202f}',
            _ => ',',
        }
    }

    pub fn symbol_position(&self) -> SymbolPosition {
        match self {
            Locale::DeDe | Locale::FrFr => SymbolPosition::Suffix,
            _ => SymbolPosition::Prefix,
        }
    }

    pub fn grouping(&self) -> Grouping {
        match self {
            Locale::EnIn => Grouping::Indian,
            _ => Grouping::Thousands,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    /// Accepts `en-US` as well as POSIX-style `en_US`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "en-us" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            "en-in" => Ok(Locale::EnIn),
            "de-de" => Ok(Locale::DeDe),
            "fr-fr" => Ok(Locale::FrFr),
            "ja-jp" => Ok(Locale::JaJp),
            _ => Err(LocaleError::Unsupported(s.to_string())),
        }
    }
}
