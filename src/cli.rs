use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// calctui - A terminal calculator with history and a scientific mode
#[derive(Parser)]
#[command(name = "calctui")]
#[command(about = "A terminal calculator with history and a scientific mode")]
#[command(version)]
pub struct Cli {
    /// Path to a configuration file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file.
    ///
    /// The interactive calculator owns the terminal, so without this flag it
    /// does not log at all. Other commands log to stderr.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive calculator (default)
    Run {
        /// Start with the scientific keypad
        #[arg(short, long)]
        scientific: bool,

        /// Start with the history panel open
        #[arg(long)]
        show_history: bool,
    },
    /// Apply keys to a fresh calculator and print the display
    ///
    /// Example: calctui eval 7 + 3 =
    Eval {
        /// Print the whole display snapshot as JSON
        #[arg(long)]
        json: bool,

        /// Keys such as 12.5 + * / ^ = sin sqrt x2 ! pi c back recall:0
        #[arg(required = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        config: PathBuf,
    },
    /// Write the default configuration to a file
    InitConfig {
        /// Destination path
        path: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_no_args() {
        // Running with no args should succeed (defaults to the TUI)
        let cli = Cli::try_parse_from(["calctui"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_run_flags() {
        let cli = Cli::try_parse_from(["calctui", "run", "--scientific", "--show-history"]).unwrap();
        match cli.command {
            Some(Commands::Run {
                scientific,
                show_history,
            }) => {
                assert!(scientific);
                assert!(show_history);
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_cli_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["calctui", "run", "--config", "/tmp/calc.json"]).unwrap();
        assert_eq!(cli.config.unwrap().to_str().unwrap(), "/tmp/calc.json");
    }

    #[test]
    fn test_cli_eval_accepts_minus() {
        let cli = Cli::try_parse_from(["calctui", "eval", "9", "-", "4", "="]).unwrap();
        match cli.command {
            Some(Commands::Eval { json, tokens }) => {
                assert!(!json);
                assert_eq!(tokens, vec!["9", "-", "4", "="]);
            }
            _ => panic!("Expected Eval command"),
        }
    }

    #[test]
    fn test_cli_eval_json() {
        let cli = Cli::try_parse_from(["calctui", "eval", "--json", "2", "x2"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Eval { json: true, .. })));
    }

    #[test]
    fn test_cli_eval_requires_tokens() {
        assert!(Cli::try_parse_from(["calctui", "eval"]).is_err());
    }

    #[test]
    fn test_cli_validate_command() {
        let cli = Cli::try_parse_from(["calctui", "validate", "/path/to/config.json"]).unwrap();
        match cli.command {
            Some(Commands::Validate { config }) => {
                assert_eq!(config.to_str().unwrap(), "/path/to/config.json");
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_init_config_command() {
        let cli = Cli::try_parse_from(["calctui", "init-config", "calc.json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::InitConfig { .. })));
    }
}
