use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use llamachat_api::{ChatClient, HistoryPolicy};
use llamachat_chat::Session;
use llamachat_models::{ChatError, ModelConfig, Role};

/// Run interactive REPL mode
pub async fn run_repl(client: &ChatClient, session: &mut Session) -> Result<()> {
    println!("{}", "💬 llamachat".bright_cyan().bold());
    println!(
        "{}",
        format!(
            "Backend: {} • Model: {} • History: {}",
            client.backend_name(),
            session.current_config().model_name,
            match client.history_policy() {
                HistoryPolicy::FullHistory => "full",
                HistoryPolicy::LatestOnly => "latest message only",
            }
        )
        .bright_black()
    );
    println!(
        "{}",
        "Type 'exit' or 'quit' to exit, '/help' for commands\n".bright_black()
    );

    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline(&"You: ".bright_blue().to_string()) {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    println!("{} Please enter a message.", "⚠️".yellow());
                    continue;
                }

                let _ = editor.add_history_entry(input);

                if input == "exit" || input == "quit" {
                    break;
                }

                if let Some(command) = input.strip_prefix('/') {
                    handle_command(command, session);
                    continue;
                }

                match session.send(client, input).await {
                    Ok(reply) => {
                        println!("{} {}", "Assistant:".bright_green(), reply.text);
                        println!(
                            "{}\n",
                            format!("({} ms)", reply.latency.as_millis()).bright_black()
                        );
                    }
                    Err(ChatError::EmptyInput) => {
                        println!("{} Please enter a message.", "⚠️".yellow());
                    }
                    Err(err) => {
                        println!("{} {}\n", "✗".red(), err);
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Input error: {}", err);
                break;
            }
        }
    }

    println!("{}", "Goodbye!".bright_cyan());
    Ok(())
}

fn handle_command(command: &str, session: &mut Session) {
    let (name, arg) = match command.split_once(' ') {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    match name {
        "help" => print_help(),
        "clear" => {
            session.clear();
            println!("{} History cleared.\n", "✅".green());
        }
        "config" => print_config(session.current_config()),
        "model" => {
            if arg.is_empty() {
                println!("{} Usage: /model NAME\n", "⚠️".yellow());
                return;
            }
            let cfg = ModelConfig {
                model_name: arg.to_string(),
                ..session.current_config().clone()
            };
            session.set_config(cfg);
            println!("{} Model set to {}.\n", "✅".green(), arg);
        }
        "temperature" => match arg.parse::<f32>() {
            Ok(temperature) if (0.0..=1.0).contains(&temperature) => {
                let cfg = ModelConfig {
                    temperature,
                    ..session.current_config().clone()
                };
                session.set_config(cfg);
                println!("{} Temperature set to {}.\n", "✅".green(), temperature);
            }
            _ => println!(
                "{} Usage: /temperature FLOAT (between 0 and 1)\n",
                "⚠️".yellow()
            ),
        },
        "max-tokens" => match arg.parse::<u32>() {
            Ok(max_tokens) if max_tokens > 0 => {
                let cfg = ModelConfig {
                    max_tokens,
                    ..session.current_config().clone()
                };
                session.set_config(cfg);
                println!("{} Max tokens set to {}.\n", "✅".green(), max_tokens);
            }
            _ => println!("{} Usage: /max-tokens N (positive integer)\n", "⚠️".yellow()),
        },
        "history" => print_history(session),
        "export" => export_transcript(session, arg),
        _ => println!(
            "{} Unknown command '/{}' - try /help\n",
            "⚠️".yellow(),
            name
        ),
    }
}

fn print_help() {
    println!("{}", "Commands:".bright_yellow());
    println!("  /clear              clear conversation history");
    println!("  /config             show the active model configuration");
    println!("  /model NAME         switch model");
    println!("  /temperature FLOAT  set sampling temperature (0..1)");
    println!("  /max-tokens N       set the generation limit");
    println!("  /history            show the transcript");
    println!("  /export [PATH]      save the transcript as Q/A text");
    println!("  exit, quit          leave\n");
}

fn print_config(cfg: &ModelConfig) {
    println!("{}", "Model configuration:".bright_yellow());
    println!("  model:       {}", cfg.model_name);
    println!("  temperature: {}", cfg.temperature);
    println!("  max tokens:  {}", cfg.max_tokens);
    if let Some(top_p) = cfg.top_p {
        println!("  top p:       {}", top_p);
    }
    if let Some(system_prompt) = &cfg.system_prompt {
        println!("  system:      {}", system_prompt);
    }
    println!();
}

fn print_history(session: &Session) {
    if session.is_empty() {
        println!("{} No history yet.\n", "⚠️".yellow());
        return;
    }
    for turn in session.turns() {
        let label = match turn.role {
            Role::User => turn.role.display_name().bright_blue(),
            Role::Assistant => turn.role.display_name().bright_green(),
        };
        println!("{}: {}", label, turn.text);
    }
    println!();
}

fn export_transcript(session: &Session, arg: &str) {
    if session.is_empty() {
        println!("{} No conversation history to export.\n", "⚠️".yellow());
        return;
    }
    let path = if arg.is_empty() { "conversation.txt" } else { arg };
    match std::fs::write(path, session.export_transcript()) {
        Ok(()) => println!("{} Conversation saved to {}.\n", "✅".green(), path),
        Err(err) => println!("{} Export failed: {}\n", "✗".red(), err),
    }
}
