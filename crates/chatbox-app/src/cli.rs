use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for chatbox
#[derive(Parser, Debug)]
#[command(name = "chatbox")]
#[command(about = "Chatbox - terminal chat widget with persistent history")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the chat backend; requests go to <URL>/api/chat
    #[arg(
        long,
        value_name = "URL",
        env = "CHATBOX_ENDPOINT",
        default_value = "http://127.0.0.1:8000"
    )]
    pub endpoint: String,

    /// Directory holding the conversation log and theme (default: ~/.chatbox)
    #[arg(long, value_name = "DIR", env = "CHATBOX_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Request timeout in seconds; 0 waits indefinitely
    #[arg(long, value_name = "SECS", env = "CHATBOX_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Keep history and theme in memory only; nothing is written to disk
    #[arg(long)]
    pub ephemeral: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Send one message, print the reply and exit
    Send {
        /// Message text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Print the stored conversation and exit
    History,
    /// Show the stored theme, or change it
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_joins_words() {
        let cli = Cli::try_parse_from(["chatbox", "send", "hello", "there"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Send {
                message: vec!["hello".to_string(), "there".to_string()]
            })
        );
    }

    #[test]
    fn test_theme_action() {
        let cli = Cli::try_parse_from(["chatbox", "theme", "toggle"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Theme {
                action: Some(ThemeAction::Toggle)
            })
        );

        let cli = Cli::try_parse_from(["chatbox", "theme"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Theme { action: None }));
    }

    #[test]
    fn test_send_requires_text() {
        assert!(Cli::try_parse_from(["chatbox", "send"]).is_err());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "chatbox",
            "--endpoint",
            "http://chat.local:9000",
            "--timeout-secs",
            "0",
            "--ephemeral",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.endpoint, "http://chat.local:9000");
        assert_eq!(cli.timeout_secs, 0);
        assert!(cli.ephemeral);
        assert!(cli.verbose);
        assert!(cli.command.is_none());
    }
}
