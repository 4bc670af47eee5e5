//! Intents: the discrete requests the presentation layer sends to the engine
//!
//! Keys, keypad clicks and headless `eval` tokens all end up as an
//! [`Intent`]. The textual form is used by the command line driver.

use super::operator::{Exponent, Operator, ScientificFunction};
use std::str::FromStr;
use thiserror::Error;

/// A single user request to the calculator engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Append a digit 0-9 to the operand
    Digit(u8),
    /// Append a decimal point to the operand
    DecimalPoint,
    /// Choose a binary operator
    Operator(Operator),
    /// Compute the pending operation
    Equals,
    /// Reset operand and pending operation (history is kept)
    Clear,
    /// Remove the last entered character
    Backspace,
    /// Apply a scientific function to the operand
    Scientific(ScientificFunction),
    /// Empty the history log
    ClearHistory,
    /// Load the result of a history record (0 = newest)
    RecallHistory(usize),
}

/// Errors from turning text into intents
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntentParseError {
    #[error("unknown key '{0}'")]
    UnknownToken(String),

    #[error("invalid history index in '{0}'")]
    InvalidHistoryIndex(String),
}

impl Intent {
    /// Parse one command line token.
    ///
    /// A numeric literal such as `12.5` expands into one intent per
    /// character; any other token maps to exactly one intent.
    pub fn parse_token(token: &str) -> Result<Vec<Self>, IntentParseError> {
        let token = token.trim();
        let is_literal = token.len() > 1
            && token.chars().any(|c| c.is_ascii_digit())
            && token.chars().all(|c| c.is_ascii_digit() || c == '.');

        if is_literal {
            token.chars().map(|c| c.to_string().parse()).collect()
        } else {
            Ok(vec![token.parse()?])
        }
    }

    /// Parse a sequence of command line tokens, in order.
    pub fn parse_tokens<I, S>(tokens: I) -> Result<Vec<Self>, IntentParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut intents = Vec::new();
        for token in tokens {
            intents.extend(Self::parse_token(token.as_ref())?);
        }
        Ok(intents)
    }
}

impl FromStr for Intent {
    type Err = IntentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();

        if let Some(index) = token.strip_prefix("recall:") {
            return index
                .parse()
                .map(Self::RecallHistory)
                .map_err(|_| IntentParseError::InvalidHistoryIndex(token.to_string()));
        }

        let intent = match token.to_ascii_lowercase().as_str() {
            "." => Self::DecimalPoint,
            "=" => Self::Equals,
            "c" | "clear" => Self::Clear,
            "back" | "backspace" => Self::Backspace,
            "ch" | "clear-history" => Self::ClearHistory,
            "sin" => Self::Scientific(ScientificFunction::Sin),
            "cos" => Self::Scientific(ScientificFunction::Cos),
            "tan" => Self::Scientific(ScientificFunction::Tan),
            "log" => Self::Scientific(ScientificFunction::Log),
            "ln" => Self::Scientific(ScientificFunction::Ln),
            "sqrt" | "√" => Self::Scientific(ScientificFunction::Sqrt),
            "sq" | "x2" | "x²" => Self::Scientific(ScientificFunction::Power(Exponent::Square)),
            "cube" | "x3" | "x³" => Self::Scientific(ScientificFunction::Power(Exponent::Cube)),
            "xy" | "xʸ" => Self::Scientific(ScientificFunction::Power(Exponent::Y)),
            "!" | "n!" | "fact" => Self::Scientific(ScientificFunction::Factorial),
            "pi" | "π" => Self::Scientific(ScientificFunction::Pi),
            "e" => Self::Scientific(ScientificFunction::E),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Self::Digit(c as u8 - b'0'),
                    _ => other
                        .parse::<Operator>()
                        .map(Self::Operator)
                        .map_err(|_| IntentParseError::UnknownToken(token.to_string()))?,
                }
            }
        };

        Ok(intent)
    }
}
