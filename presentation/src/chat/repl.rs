//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::{ConsoleFormatter, WaitSpinner};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use vakyalok_application::{ChatError, ChatSession, SendChatTurnUseCase};
use vakyalok_domain::{Language, Model};

/// A parsed slash command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Quit,
    Clear,
    /// `/lang` with an optional new language
    Language(Option<String>),
    /// `/model` with an optional model ID (`default` resets the override)
    Model(Option<String>),
    Models,
    History,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`
    pub fn parse(line: &str) -> Self {
        let mut parts = line.trim().splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or_default();
        let arg = parts
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        match name {
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/clear" | "/new" => ReplCommand::Clear,
            "/lang" | "/language" => ReplCommand::Language(arg),
            "/model" => ReplCommand::Model(arg),
            "/models" => ReplCommand::Models,
            "/history" => ReplCommand::History,
            _ => ReplCommand::Unknown(name.to_string()),
        }
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: SendChatTurnUseCase,
    session: ChatSession,
    model: Option<Model>,
    default_model: Model,
    show_progress: bool,
    history_path: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl replying in `language`
    pub fn new(use_case: SendChatTurnUseCase, language: Language, default_model: Model) -> Self {
        Self {
            use_case,
            session: ChatSession::new(language),
            model: None,
            default_model,
            show_progress: true,
            history_path: None,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Override the configured model for this session
    pub fn with_model(mut self, model: Option<Model>) -> Self {
        self.model = model;
        self
    }

    /// Persist line history at `path`
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    fn active_model(&self) -> &Model {
        self.model.as_ref().unwrap_or(&self.default_model)
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if line.starts_with('/') {
                        if self.handle_command(ReplCommand::parse(line)) {
                            break;
                        }
                        continue;
                    }

                    self.process_message(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Vakyalok - Legal Assistant Chat      │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Language: {}    Model: {}",
            self.session.language().english_name(),
            self.active_model()
        );
        println!();
        println!("Ask any question about Indian law. Type /help for commands.");
        println!("This is general information, not a substitute for a lawyer.");
        println!();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?      - Show this help");
        println!("  /clear             - Start a new conversation");
        println!("  /lang [code]       - Show or switch reply language (en, hi, te, mr)");
        println!("  /model [id]        - Show or switch model (`default` to reset)");
        println!("  /models            - List available models");
        println!("  /history           - Show the number of turns so far");
        println!("  /quit, /exit, /q   - Exit chat");
        println!();
    }

    /// Handle a slash command. Returns true if the REPL should exit.
    fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Clear => {
                self.session.clear();
                println!("Started a new conversation.");
            }
            ReplCommand::Language(None) => {
                println!("{}", ConsoleFormatter::format_languages(self.session.language()));
            }
            ReplCommand::Language(Some(raw)) => match raw.parse::<Language>() {
                Ok(language) => {
                    self.session.set_language(language);
                    println!("Replies will now be in {}.", language.english_name());
                }
                Err(e) => println!("{}", e),
            },
            ReplCommand::Model(None) => println!("Current model: {}", self.active_model()),
            ReplCommand::Model(Some(raw)) => {
                self.model = if raw == "default" {
                    None
                } else {
                    Some(Model::from(raw.as_str()))
                };
                println!("Using model: {}", self.active_model());
            }
            ReplCommand::Models => {
                print!("{}", ConsoleFormatter::format_models(self.active_model()));
            }
            ReplCommand::History => {
                println!("{} turn(s) in this conversation.", self.session.turns().len());
            }
            ReplCommand::Unknown(name) => {
                println!("Unknown command: {}", name);
                println!("Type /help for available commands");
            }
        }
        false
    }

    async fn process_message(&mut self, message: &str) {
        println!();

        let result = WaitSpinner::run(
            "Thinking...",
            self.show_progress,
            self.use_case
                .execute(&mut self.session, message, self.model.as_ref()),
        )
        .await;

        match result {
            Ok(completion) => println!("{}", ConsoleFormatter::format_reply(&completion)),
            Err(ChatError::Gateway(e)) => eprintln!("{}", ConsoleFormatter::format_gateway_error(&e)),
            Err(e) => eprintln!("Error: {}", e),
        }
        println!();
    }
}
