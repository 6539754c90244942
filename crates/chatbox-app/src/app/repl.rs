use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use chatbox_client::SubmitOutcome;

use crate::app::{build_controller, open_storage};
use crate::config::AppConfig;

/// Commands understood by the REPL besides plain messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Exit,
    Theme,
    History,
    Help,
}

impl ReplCommand {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "exit" | "quit" | "/exit" | "/quit" => Some(ReplCommand::Exit),
            "/theme" => Some(ReplCommand::Theme),
            "/history" => Some(ReplCommand::History),
            "/help" => Some(ReplCommand::Help),
            _ => None,
        }
    }
}

fn print_help() {
    println!("{}", "Commands:".bright_black());
    println!("{}", "  /theme     toggle light/dark theme".bright_black());
    println!("{}", "  /history   show the stored conversation again".bright_black());
    println!("{}", "  exit       leave (or Ctrl-D)".bright_black());
}

/// Run interactive REPL mode
pub async fn run_repl_mode(config: &AppConfig) -> Result<()> {
    println!("{}", "Chatbox".bright_cyan().bold());
    println!("{}", format!("Backend: {}", config.endpoint).bright_black());
    match &config.data_dir {
        Some(dir) => println!("{}", format!("History: {}", dir.display()).bright_black()),
        None => println!("{}", "History: in memory only".bright_black()),
    }
    println!("{}", "Type 'exit' to quit, '/help' for commands\n".bright_black());

    let storage = open_storage(config);
    let mut chat = build_controller(config, storage)?;

    let replayed = chat.load();
    if replayed > 0 {
        println!("{}", format!("({} earlier messages)\n", replayed).bright_black());
    }

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline(&format!("{} ", ">".bright_green().bold()));

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                rl.add_history_entry(line)?;

                match ReplCommand::parse(line) {
                    Some(ReplCommand::Exit) => {
                        println!("{}", "Goodbye!".bright_cyan());
                        break;
                    }
                    Some(ReplCommand::Theme) => {
                        let theme = chat.toggle_theme();
                        println!("{}", format!("Theme: {}", theme).bright_black());
                    }
                    Some(ReplCommand::History) => {
                        if chat.replay() == 0 {
                            println!("{}", "No conversation history yet.".bright_black());
                        }
                    }
                    Some(ReplCommand::Help) => print_help(),
                    None => {
                        let outcome = chat.submit(line).await;
                        if outcome == SubmitOutcome::Busy {
                            println!("{}", "Still waiting for the previous reply.".yellow());
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".bright_black());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Input error: {}", err).red());
                break;
            }
        }
    }

    if chat.history().is_degraded() {
        eprintln!("{}", "Warning: history could not be saved during this session.".yellow());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("exit"), Some(ReplCommand::Exit));
        assert_eq!(ReplCommand::parse(" quit "), Some(ReplCommand::Exit));
        assert_eq!(ReplCommand::parse("/theme"), Some(ReplCommand::Theme));
        assert_eq!(ReplCommand::parse("/history"), Some(ReplCommand::History));
        assert_eq!(ReplCommand::parse("/help"), Some(ReplCommand::Help));
        assert_eq!(ReplCommand::parse("exit the building"), None);
        assert_eq!(ReplCommand::parse("hello"), None);
    }
}
