//! Legal document kinds that can be drafted

use crate::core::error::DomainError;
use crate::core::language::Language;
use serde::{Deserialize, Serialize};

/// Kind of legal document to draft (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// First Information Report, filed with the police
    Fir,
    /// Right to Information application
    Rti,
}

impl DocumentKind {
    /// Short name used inside prompts
    pub fn abbreviation(&self) -> &'static str {
        match self {
            DocumentKind::Fir => "FIR",
            DocumentKind::Rti => "RTI",
        }
    }

    /// Display label in the given language
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (DocumentKind::Fir, Language::English) => "FIR (First Information Report)",
            (DocumentKind::Rti, Language::English) => "RTI (Right to Information)",
            (DocumentKind::Fir, Language::Hindi) => "प्राथमिकी (FIR)",
            (DocumentKind::Rti, Language::Hindi) => "सूचना का अधिकार (RTI)",
            (DocumentKind::Fir, Language::Telugu) => "ప్రాథమిక నివేదిక (FIR)",
            (DocumentKind::Rti, Language::Telugu) => "సమాచార హక్కు (RTI)",
            (DocumentKind::Fir, Language::Marathi) => "प्राथमिक अहवाल (FIR)",
            (DocumentKind::Rti, Language::Marathi) => "माहिती अधिकार (RTI)",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fir" => Ok(DocumentKind::Fir),
            "rti" => Ok(DocumentKind::Rti),
            other => Err(DomainError::UnknownDocumentKind(other.to_string())),
        }
    }
}
