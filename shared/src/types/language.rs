//! Language and internationalization types

use serde::{Deserialize, Serialize};

/// Language used for user-facing messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "pt")]
    Portuguese,
}

impl Language {
    /// Extract language from Accept-Language header.
    ///
    /// Only the primary tag of each entry is inspected; the first supported
    /// one wins.
    pub fn from_accept_language(header: &str) -> Self {
        header
            .split(',')
            .filter_map(|entry| entry.split(';').next())
            .map(|tag| tag.trim().to_lowercase())
            .find_map(|tag| {
                let primary = tag.split('-').next().unwrap_or_default().to_string();
                primary.parse::<Language>().ok()
            })
            .unwrap_or_default()
    }

    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Portuguese => "pt",
        }
    }

    /// Get locale code
    pub fn locale(&self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Portuguese => "pt-BR",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "pt" | "por" | "portuguese" | "português" => Ok(Language::Portuguese),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}
