//! Supported languages and analysis kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GatewayError;

/// Language of the analysed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Language {
    /// French.
    Fr,
    /// Malagasy.
    Mg,
}

impl Language {
    /// Every supported language, in the order they are advertised.
    pub const ALL: [Language; 2] = [Language::Fr, Language::Mg];

    /// ISO 639-1 code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::Mg => "mg",
        }
    }
}

impl FromStr for Language {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fr" => Ok(Language::Fr),
            "mg" => Ok(Language::Mg),
            other => Err(GatewayError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = GatewayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for &'static str {
    fn from(language: Language) -> Self {
        language.as_str()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which text analysis to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum AnalysisType {
    /// Polarity and emotion breakdown.
    Sentiment,
    /// Category, subcategory and topics.
    Classification,
    /// Keyword and named-entity extraction.
    Keywords,
}

impl AnalysisType {
    /// Every supported analysis type, in the order they are advertised.
    pub const ALL: [AnalysisType; 3] = [
        AnalysisType::Sentiment,
        AnalysisType::Classification,
        AnalysisType::Keywords,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::Sentiment => "sentiment",
            AnalysisType::Classification => "classification",
            AnalysisType::Keywords => "keywords",
        }
    }
}

impl FromStr for AnalysisType {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sentiment" => Ok(AnalysisType::Sentiment),
            "classification" => Ok(AnalysisType::Classification),
            "keywords" => Ok(AnalysisType::Keywords),
            other => Err(GatewayError::UnsupportedAnalysisType(other.to_string())),
        }
    }
}

impl TryFrom<String> for AnalysisType {
    type Error = GatewayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AnalysisType> for &'static str {
    fn from(kind: AnalysisType) -> Self {
        kind.as_str()
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
