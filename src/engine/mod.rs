//! Calculator engine
//!
//! Pure state machine with no terminal dependencies. The presentation layer
//! turns raw events into [`Intent`]s, applies them and renders the
//! [`DisplaySnapshot`].

pub mod calculator;
pub mod history;
pub mod intent;
pub mod number;
pub mod operator;

pub use calculator::{Calculator, DisplaySnapshot, ERROR_TEXT};
pub use history::{History, HistoryRecord};
pub use intent::{Intent, IntentParseError};
pub use number::{format_number, parse_number};
pub use operator::{CalcError, Exponent, FunctionOutcome, Operator, ScientificFunction};
