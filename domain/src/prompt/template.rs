//! Prompt templates for the legal assistant features

use super::document::DocumentKind;
use crate::core::language::Language;

/// Terms suggested to users of the legal dictionary
pub const COMMON_LEGAL_TERMS: &[&str] = &[
    "Affidavit",
    "Bail",
    "FIR",
    "RTI",
    "PIL",
    "Writ Petition",
    "Habeas Corpus",
    "Civil Rights",
    "Consumer Rights",
    "Fundamental Rights",
];

/// Templates for generating prompts for each feature
pub struct LegalPromptTemplate;

impl LegalPromptTemplate {
    /// System prompt for the chat assistant
    pub fn chat_system(language: Language) -> String {
        format!(
            r#"You are Vakyalok, a helpful legal assistant for people in India.
Explain Indian law, legal rights and procedures (such as filing an FIR, RTI applications, bail, consumer complaints) in simple language that a non-lawyer can follow.
Give practical next steps and mention the relevant authority or office when useful.
You are not a lawyer: for serious or urgent matters, advise the user to consult a qualified advocate or a legal aid service.
Always respond in {}."#,
            language.english_name()
        )
    }

    /// Single-turn prompt for drafting an FIR or RTI document
    pub fn document_draft(kind: DocumentKind, description: &str, language: Language) -> String {
        let abbr = kind.abbreviation();
        format!(
            r#"Generate a formal {abbr} document in {lang} based on the following issue description. Make it official, properly formatted, and include all necessary legal sections:

Issue Description: {description}

Please create a complete {abbr} document that follows Indian legal format and requirements. Include proper sections, formal language, and all necessary details that would be required by authorities."#,
            lang = language.english_name(),
        )
    }

    /// Single-turn prompt for explaining a legal term
    pub fn term_explanation(term: &str, language: Language) -> String {
        format!(
            r#"Explain the legal term "{}" in {}.

Format the response as follows:
1. Term Definition
2. Usage in Legal Context
3. Related Terms
4. Key Points to Remember
5. Example Usage in a Sentence

Keep the explanation simple and easy to understand for non-lawyers."#,
            term,
            language.english_name()
        )
    }
}
