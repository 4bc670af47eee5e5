//! calctui - Main entry point
//!
//! Parses the command line, sets up logging and either runs the interactive
//! calculator or one of the headless commands.

use calctui::app::App;
use calctui::cli::{Cli, Commands};
use calctui::config_file::CalculatorConfig;
use calctui::engine::{Calculator, Intent};
use calctui::error::{general_error, CalcTuiError};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Initialize tracing.
///
/// The TUI owns the terminal, so it only logs when a log file is given.
/// Headless commands log to stderr. `RUST_LOG` overrides the `info` default.
fn init_tracing(log_file: Option<&Path>, tui: bool) -> Result<(), CalcTuiError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| general_error(format!("Failed to initialize logging: {}", e)))?;
        }
        None if tui => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| general_error(format!("Failed to initialize logging: {}", e)))?;
        }
    }
    Ok(())
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();

    let tui = matches!(cli.command, None | Some(Commands::Run { .. }));
    init_tracing(cli.log_file.as_deref(), tui)?;
    info!("calctui starting up");
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::Validate { config }) => {
            info!("Validating configuration file: {:?}", config);
            match CalculatorConfig::load_from_file(&config) {
                Ok(config) => match config.validate() {
                    Ok(_) => {
                        info!("Configuration validation successful");
                        println!("✓ Configuration file is valid: {:?}", config);
                    }
                    Err(e) => {
                        error!("Configuration validation failed: {}", e);
                        eprintln!("✗ Configuration validation failed: {}", e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    error!("Failed to load configuration file: {}", e);
                    eprintln!("✗ Failed to load configuration file: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::InitConfig { path }) => {
            info!("Writing default configuration to {:?}", path);
            CalculatorConfig::default()
                .save_to_file(&path)
                .map_err(|e| CalcTuiError::config(format!("{:#}", e)))?;
            println!("✓ Wrote default configuration to {}", path.display());
        }
        Some(Commands::Eval { json, tokens }) => {
            let calculator = run_eval(&tokens)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&calculator.snapshot())?);
            } else {
                println!("{}", calculator.current_operand());
            }
        }
        Some(Commands::Run {
            scientific,
            show_history,
        }) => {
            let config = load_config(cli.config.as_deref())?;
            run_tui(&config.with_overrides(scientific, show_history))?;
        }
        None => {
            info!("No command specified, launching calculator");
            let config = load_config(cli.config.as_deref())?;
            run_tui(&config)?;
        }
    }

    Ok(())
}

/// Load and validate the configuration, falling back to defaults
fn load_config(path: Option<&Path>) -> Result<CalculatorConfig, CalcTuiError> {
    let Some(path) = path else {
        debug!("No configuration file given, using defaults");
        return Ok(CalculatorConfig::default());
    };

    info!("Loading configuration from {:?}", path);
    let config = CalculatorConfig::load_from_file(path)
        .map_err(|e| CalcTuiError::config(format!("{:#}", e)))?;
    config
        .validate()
        .map_err(|e| CalcTuiError::config(e.to_string()))?;
    Ok(config)
}

/// Apply command line keys to a fresh calculator
fn run_eval(tokens: &[String]) -> Result<Calculator, CalcTuiError> {
    let intents = Intent::parse_tokens(tokens)?;
    debug!("Evaluating {} intents", intents.len());

    let mut calculator = Calculator::new();
    for intent in intents {
        calculator.apply(intent);
    }
    Ok(calculator)
}

/// Run the interactive calculator
fn run_tui(config: &CalculatorConfig) -> Result<(), Box<dyn std::error::Error>> {
    debug!("Initializing terminal for TUI mode");

    // Initialize terminal
    enable_raw_mode()
        .map_err(|e| general_error(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| general_error(format!("Failed to enter alternate screen: {}", e)))?;

    // Create terminal backend
    let backend = CrosstermBackend::new(stdout());
    let result = match Terminal::new(backend) {
        Ok(mut terminal) => App::new(config).run(&mut terminal),
        Err(e) => Err(CalcTuiError::terminal(format!("Failed to create terminal: {}", e)).into()),
    };

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture);

    if let Err(e) = &result {
        error!("Calculator exited with error: {}", e);
    }
    result
}
