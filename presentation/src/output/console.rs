//! Console output formatter for assistant replies

use colored::Colorize;
use serde::Serialize;
use vakyalok_application::{DocumentDraft, GatewayError, TermExplanation};
use vakyalok_domain::{COMMON_LEGAL_TERMS, Completion, Language, Model};

/// Formats replies, drafts and listings for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the answer to a one-shot question
    pub fn format_answer(question: &str, completion: &Completion) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n\n", "Q:".bold(), question));
        output.push_str(&completion.text);
        output.push('\n');
        output.push_str(&format!(
            "\n{} {}\n",
            "Model:".dimmed(),
            completion.model.to_string().dimmed()
        ));

        output
    }

    /// Format a chat reply as printed inside the REPL
    pub fn format_reply(completion: &Completion) -> String {
        format!("{}\n{}\n", "Assistant:".green().bold(), completion.text)
    }

    /// Format a drafted document
    pub fn format_draft(draft: &DocumentDraft) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(draft.kind.label(draft.language)));
        output.push_str("\n\n");
        output.push_str(&draft.content);
        output.push('\n');
        output.push_str(&Self::footer());
        output.push_str(&format!(
            "{}\n",
            "Review the draft and fill in any missing details before submitting it.".yellow()
        ));

        output
    }

    /// Format a dictionary entry
    pub fn format_term(entry: &TermExplanation) -> String {
        format!(
            "{}\n{}\n\n{}\n",
            entry.term.cyan().bold(),
            "-".repeat(40),
            entry.explanation
        )
    }

    /// Format the list of common legal terms
    pub fn format_terms() -> String {
        let mut output = format!("{}\n", "Common legal terms:".cyan().bold());
        for term in COMMON_LEGAL_TERMS {
            output.push_str(&format!("  * {}\n", term));
        }
        output.push_str(&format!(
            "\n{}\n",
            "Use `vakyalok define <term>` for an explanation.".dimmed()
        ));
        output
    }

    /// Format the model catalogue, marking the default
    pub fn format_models(default_model: &Model) -> String {
        let mut output = format!("{}\n", "Available models:".cyan().bold());
        let mut listed_default = false;

        for model in Model::catalogue() {
            let is_default = model == *default_model;
            listed_default |= is_default;
            output.push_str(&Self::model_line(&model, is_default));
        }
        if !listed_default {
            output.push_str(&Self::model_line(default_model, true));
        }

        output
    }

    /// Model catalogue as JSON
    pub fn format_models_json(default_model: &Model) -> String {
        let mut models = Model::catalogue();
        if !models.contains(default_model) {
            models.push(default_model.clone());
        }
        let entries: Vec<serde_json::Value> = models
            .iter()
            .map(|m| {
                serde_json::json!({
                    "id": m.as_str(),
                    "label": m.label(),
                    "default": m == default_model,
                })
            })
            .collect();
        Self::format_json(&entries)
    }

    fn model_line(model: &Model, is_default: bool) -> String {
        let marker = if is_default {
            "*".green().bold().to_string()
        } else {
            " ".to_string()
        };
        format!("{} {:<34} {}\n", marker, model.as_str(), model.label().dimmed())
    }

    /// Format the supported reply languages
    pub fn format_languages(current: Language) -> String {
        Language::ALL
            .iter()
            .map(|lang| {
                let line = format!("{}  {} ({})", lang.code(), lang.english_name(), lang.native_name());
                if *lang == current {
                    format!("* {}", line.green())
                } else {
                    format!("  {}", line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a gateway failure as a transient notification
    pub fn format_gateway_error(error: &GatewayError) -> String {
        let mut output = format!("{} {}", "Error:".red().bold(), error);
        if error.kind().is_transient() {
            output.push_str(&format!("\n{}", "You can retry the same request.".dimmed()));
        }
        output
    }

    /// Format any serializable result as JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vakyalok_domain::DocumentKind;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_answer() {
        plain();
        let completion = Completion::new("An FIR is a report.", Model::default());
        let output = ConsoleFormatter::format_answer("What is an FIR?", &completion);
        assert!(output.starts_with("Q: What is an FIR?"));
        assert!(output.contains("An FIR is a report."));
        assert!(output.contains("mistralai/mistral-7b-instruct"));
    }

    #[test]
    fn test_format_draft_uses_localized_title() {
        plain();
        let draft = DocumentDraft {
            kind: DocumentKind::Rti,
            language: Language::English,
            model: Model::default(),
            content: "To the Public Information Officer".to_string(),
        };
        let output = ConsoleFormatter::format_draft(&draft);
        assert!(output.contains(DocumentKind::Rti.label(Language::English)));
        assert!(output.contains("To the Public Information Officer"));
    }

    #[test]
    fn test_format_terms_lists_all() {
        plain();
        let output = ConsoleFormatter::format_terms();
        for term in COMMON_LEGAL_TERMS {
            assert!(output.contains(term));
        }
    }

    #[test]
    fn test_format_models_marks_default() {
        plain();
        let output = ConsoleFormatter::format_models(&Model::Gemma7bIt);
        let marked: Vec<&str> = output.lines().filter(|l| l.starts_with('*')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("google/gemma-7b-it"));
    }

    #[test]
    fn test_format_models_appends_custom_default() {
        plain();
        let custom = Model::from("meta-llama/llama-3-8b-instruct");
        let output = ConsoleFormatter::format_models(&custom);
        assert_eq!(output.lines().count(), Model::catalogue().len() + 2);
        assert!(output.lines().last().unwrap().contains("meta-llama/llama-3-8b-instruct"));
    }

    #[test]
    fn test_format_gateway_error_hints_retry_for_transient() {
        plain();
        let output = ConsoleFormatter::format_gateway_error(&GatewayError::rate_limited());
        assert!(output.contains("retry"));

        let output = ConsoleFormatter::format_gateway_error(&GatewayError::auth());
        assert!(output.contains("API key is invalid or expired"));
        assert!(!output.contains("retry"));
    }

    #[test]
    fn test_format_models_json() {
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_models_json(&Model::Claude3Haiku))
                .unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[2]["id"], "anthropic/claude-3-haiku");
        assert_eq!(entries[2]["default"], true);
        assert_eq!(entries[0]["default"], false);
    }

    #[test]
    fn test_format_json() {
        let entry = TermExplanation {
            term: "bail".to_string(),
            language: Language::Telugu,
            explanation: "...".to_string(),
        };
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&entry)).unwrap();
        assert_eq!(value["term"], "bail");
        assert_eq!(value["language"], "te");
    }
}
