//! CLI entrypoint for Vakyalok
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use vakyalok_application::{
    ChatError, ChatSession, CompletionGateway, ConversationLogger, DraftDocumentUseCase,
    DraftError, DraftRequest, GatewayError, LookupError, LookupTermUseCase, NoConversationLogger,
    SendChatTurnUseCase,
};
use vakyalok_domain::{COMMON_LEGAL_TERMS, Language};
use vakyalok_infrastructure::{
    CoalescingGateway, ConfigLoader, FileConfig, JsonlConversationLogger, OpenRouterGateway,
};
use vakyalok_presentation::{
    ChatRepl, Cli, Command, ConsoleFormatter, OutputFormat, WaitSpinner, join_words,
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("config: {}", issue);
        }
        bail!("Invalid configuration ({} issue(s))", issues.len());
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting Vakyalok");

    let language = match &cli.lang {
        Some(raw) => raw.parse::<Language>()?,
        None => config.chat.parse_language()?,
    };
    let model_override = cli.model_override();
    let default_model = model_override
        .clone()
        .or_else(|| config.gateway.parse_model())
        .unwrap_or_default();
    let command = cli.selected_command();

    // Listings need no backend
    match command {
        Command::Terms => {
            match cli.output {
                OutputFormat::Text => print!("{}", ConsoleFormatter::format_terms()),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&COMMON_LEGAL_TERMS)),
            }
            return Ok(ExitCode::SUCCESS);
        }
        Command::Models => {
            match cli.output {
                OutputFormat::Text => print!("{}", ConsoleFormatter::format_models(&default_model)),
                OutputFormat::Json => {
                    println!("{}", ConsoleFormatter::format_models_json(&default_model))
                }
            }
            return Ok(ExitCode::SUCCESS);
        }
        _ => {}
    }

    // === Dependency Injection ===
    let gateway = build_gateway(&config)?;
    let logger = build_conversation_logger(&config);
    let show_progress = !cli.quiet && cli.output == OutputFormat::Text && config.chat.show_progress;

    match command {
        Command::Ask { question } => {
            let question = join_words(&question);
            let use_case =
                SendChatTurnUseCase::new(gateway).with_conversation_logger(logger);
            let mut session = ChatSession::new(language);

            let result = WaitSpinner::run(
                "Consulting the legal assistant...",
                show_progress,
                use_case.execute(&mut session, &question, model_override.as_ref()),
            )
            .await;

            match result {
                Ok(completion) => {
                    match cli.output {
                        OutputFormat::Text => {
                            println!("{}", ConsoleFormatter::format_answer(&question, &completion))
                        }
                        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&completion)),
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(ChatError::Gateway(e)) => Ok(report_gateway_error(&e)),
                Err(e) => Err(e.into()),
            }
        }

        Command::Draft {
            kind,
            description,
            save,
        } => {
            let mut request = DraftRequest::new(kind.into(), join_words(&description))
                .with_language(language);
            if let Some(model) = model_override {
                request = request.with_model(model);
            }
            let use_case = DraftDocumentUseCase::new(gateway).with_conversation_logger(logger);

            let result = WaitSpinner::run(
                "Drafting document...",
                show_progress,
                use_case.execute(request),
            )
            .await;

            match result {
                Ok(draft) => {
                    if let Some(path) = &save {
                        std::fs::write(path, &draft.content).with_context(|| {
                            format!("Failed to save draft to {}", path.display())
                        })?;
                        debug!(path = %path.display(), "Draft saved");
                    }
                    match cli.output {
                        OutputFormat::Text => {
                            print!("{}", ConsoleFormatter::format_draft(&draft));
                            if let Some(path) = &save {
                                println!("Saved to {}", path.display());
                            }
                        }
                        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&draft)),
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(DraftError::Gateway(e)) => Ok(report_gateway_error(&e)),
                Err(e) => Err(e.into()),
            }
        }

        Command::Define { term } => {
            let term = join_words(&term);
            let use_case = LookupTermUseCase::new(gateway).with_conversation_logger(logger);

            let result = WaitSpinner::run(
                "Looking up term...",
                show_progress,
                use_case.execute(&term, language, model_override.as_ref()),
            )
            .await;

            match result {
                Ok(entry) => {
                    match cli.output {
                        OutputFormat::Text => println!("{}", ConsoleFormatter::format_term(&entry)),
                        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&entry)),
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(LookupError::Gateway(e)) => Ok(report_gateway_error(&e)),
                Err(e) => Err(e.into()),
            }
        }

        Command::Chat => {
            let use_case =
                SendChatTurnUseCase::new(gateway).with_conversation_logger(logger);
            let history_file = config
                .chat
                .history_file
                .as_deref()
                .map(PathBuf::from)
                .or_else(ConfigLoader::default_history_path);

            let mut repl = ChatRepl::new(use_case, language, default_model)
                .with_model(model_override)
                .with_progress(!cli.quiet && config.chat.show_progress)
                .with_history_file(history_file);

            repl.run().await?;
            Ok(ExitCode::SUCCESS)
        }

        Command::Terms | Command::Models => Ok(ExitCode::SUCCESS),
    }
}

/// Build the completion gateway from the `[gateway]` section.
///
/// Fails before any request when no API key can be found.
fn build_gateway(config: &FileConfig) -> Result<Arc<dyn CompletionGateway>> {
    let api_key = config.gateway.resolve_api_key().ok_or_else(|| {
        anyhow!(
            "No API key found. Set the {} environment variable or gateway.api_key in the config file.",
            config.gateway.api_key_env
        )
    })?;

    let gateway = OpenRouterGateway::new(config.gateway.to_gateway_config(api_key))
        .context("Failed to initialize the completion gateway")?;

    if config.gateway.coalesce_in_flight {
        debug!("Coalescing identical in-flight requests");
        Ok(Arc::new(CoalescingGateway::new(Arc::new(gateway))))
    } else {
        Ok(Arc::new(gateway))
    }
}

fn build_conversation_logger(config: &FileConfig) -> Arc<dyn ConversationLogger> {
    match config
        .logging
        .conversation_log_path()
        .and_then(|path| JsonlConversationLogger::new(path))
    {
        Some(logger) => Arc::new(logger),
        None => Arc::new(NoConversationLogger),
    }
}

fn report_gateway_error(error: &GatewayError) -> ExitCode {
    eprintln!("{}", ConsoleFormatter::format_gateway_error(error));
    ExitCode::FAILURE
}
