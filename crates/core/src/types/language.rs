//! UI languages.

use serde::{Deserialize, Serialize};

/// Error returned when a language code is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {0}")]
pub struct LanguageError(pub String);

/// Language the admin panel is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Russian (default).
    #[default]
    Ru,
    /// English.
    En,
    /// Simplified Chinese.
    Cn,
}

impl Language {
    /// Every supported language, in switcher order.
    pub const ALL: [Self; 3] = [Self::Ru, Self::En, Self::Cn];

    /// Short code used in forms and the session (`ru`, `en`, `cn`).
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
            Self::Cn => "cn",
        }
    }

    /// BCP 47 tag for the HTML `lang` attribute.
    #[must_use]
    pub const fn html_lang(&self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
            Self::Cn => "zh-CN",
        }
    }

    /// Native name shown in the language switcher.
    #[must_use]
    pub const fn native_name(&self) -> &'static str {
        match self {
            Self::Ru => "Русский",
            Self::En => "English",
            Self::Cn => "中文",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            "cn" | "zh" => Ok(Self::Cn),
            _ => Err(LanguageError(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_russian() {
        assert_eq!(Language::default(), Language::Ru);
    }

    #[test]
    fn test_parse() {
        assert_eq!("cn".parse::<Language>().unwrap(), Language::Cn);
        assert_eq!("zh".parse::<Language>().unwrap(), Language::Cn);
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
    }
}
