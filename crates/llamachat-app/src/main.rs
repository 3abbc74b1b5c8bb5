use anyhow::Result;
use clap::Parser;
use colored::Colorize;

mod cli;
mod repl;

use cli::Cli;
use llamachat_api::{BackendType, ChatClient, ClientFactory, HistoryPolicy};
use llamachat_chat::Session;
use llamachat_models::ChatError;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before reading any credentials
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let backend_type = BackendType::from_str(&cli.backend).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown backend '{}' (expected ollama, openai or llama.cpp)",
            cli.backend
        )
    })?;

    let backend = match ClientFactory::create_with_verbose(
        backend_type,
        cli.api_key.clone(),
        cli.api_url.clone(),
        cli.verbose,
    ) {
        Ok(backend) => backend,
        Err(err @ ChatError::MissingCredential(_)) => {
            // Fatal startup condition, reported to the user
            eprintln!("{} {}", "✗".red(), err);
            eprintln!(
                "{}",
                "Set OPENAI_API_KEY in the environment (or a .env file) before running."
                    .bright_black()
            );
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("{} {}", "✗".red(), err);
            std::process::exit(1);
        }
    };

    let policy = if cli.latest_only {
        HistoryPolicy::LatestOnly
    } else {
        HistoryPolicy::FullHistory
    };
    let client = ChatClient::new(backend).with_history_policy(policy);

    let mut session = Session::new(cli.model_config(backend_type));

    match cli.question.clone() {
        Some(question) => run_one_shot(&client, &mut session, &question).await,
        None => repl::run_repl(&client, &mut session).await,
    }
}

/// Answer a single question and exit (the scripted-use mode)
async fn run_one_shot(client: &ChatClient, session: &mut Session, question: &str) -> Result<()> {
    match session.send(client, question).await {
        Ok(reply) => {
            println!("{}", reply.text);
            Ok(())
        }
        Err(ChatError::EmptyInput) => {
            eprintln!("{} Please enter a question.", "⚠️".yellow());
            Ok(())
        }
        Err(err) => {
            eprintln!("{} {}", "✗".red(), err);
            std::process::exit(1);
        }
    }
}
