//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use vakyalok_domain::{DocumentKind, Model};

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Formatted, human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Document type accepted by `draft`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentArg {
    /// First Information Report (police complaint)
    Fir,
    /// Right to Information application
    Rti,
}

impl From<DocumentArg> for DocumentKind {
    fn from(arg: DocumentArg) -> Self {
        match arg {
            DocumentArg::Fir => DocumentKind::Fir,
            DocumentArg::Rti => DocumentKind::Rti,
        }
    }
}

/// CLI arguments for vakyalok
#[derive(Parser, Debug)]
#[command(name = "vakyalok")]
#[command(author, version, about = "Legal assistant for Indian law, backed by OpenRouter models")]
#[command(long_about = r#"
Vakyalok answers legal questions, drafts FIR and RTI documents, and explains
legal terms in English, Hindi, Telugu or Marathi.

The API key is read from OPENROUTER_API_KEY (or the variable named by
gateway.api_key_env in the config).

Configuration files are loaded from (in priority order):
1. VAKYALOK_* environment variables (e.g. VAKYALOK_GATEWAY__MODEL)
2. --config <path>        Explicit config file
3. ./vakyalok.toml        Project-level config
4. ~/.config/vakyalok/config.toml   Global config

Example:
  vakyalok ask "Can the police refuse to register an FIR?"
  vakyalok --lang hi define "anticipatory bail"
  vakyalok draft rti "Status of my ration card application" --save rti.txt
  vakyalok chat -m openai/gpt-3.5-turbo
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Model ID to use instead of the configured default
    #[arg(short, long, global = true, value_name = "MODEL")]
    pub model: Option<String>,

    /// Reply language: en, hi, te or mr
    #[arg(short, long, global = true, value_name = "LANG")]
    pub lang: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ask a single legal question
    Ask {
        /// The question
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Start an interactive chat (the default when no command is given)
    Chat,

    /// Draft an FIR or RTI document from a description of the issue
    Draft {
        /// Document type
        #[arg(value_enum)]
        kind: DocumentArg,

        /// What happened, in your own words
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,

        /// Also write the draft to this file
        #[arg(long, value_name = "PATH")]
        save: Option<PathBuf>,
    },

    /// Explain a legal term in plain language
    Define {
        /// The term to explain
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// List common legal terms
    Terms,

    /// List the available models
    Models,
}

impl Cli {
    /// Subcommand to run; chat when none was given
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Chat)
    }

    /// Model given with `--model`; a blank value counts as not given
    pub fn model_override(&self) -> Option<Model> {
        self.model
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Model::from)
    }
}

/// Join free-form words collected from the command line
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}
