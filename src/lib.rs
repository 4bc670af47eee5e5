//! calctui Library
//!
//! A calculator engine with history and a scientific mode, plus the terminal
//! front end that drives it.

pub mod app;
pub mod cli;
pub mod components;
pub mod config_file;
pub mod engine;
pub mod error;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppState};
pub use config_file::CalculatorConfig;
pub use engine::{
    CalcError, Calculator, DisplaySnapshot, History, HistoryRecord, Intent, Operator,
    ScientificFunction,
};
pub use error::CalcTuiError;
pub use types::KeypadMode;
