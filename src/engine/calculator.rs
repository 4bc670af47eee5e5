//! Calculator state machine
//!
//! The calculator is a single-pending-operator accumulator. Two orthogonal
//! flags describe where it is:
//!
//! ```text
//!                    no pending operator      pending operator
//! entering operand   "12"                     "12" after "7 +"
//! awaiting operand   "10" after "="           "7" after "7 +"
//! ```
//!
//! `compute()` always returns to the "no pending operator" column. Every
//! intent is applied to completion in the order received; invalid requests
//! are no-ops rather than errors.

use super::history::{History, HistoryRecord};
use super::intent::Intent;
use super::number::{format_number, parse_number};
use super::operator::{CalcError, FunctionOutcome, Operator, ScientificFunction};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Display text of an operand that ended in an error
pub const ERROR_TEXT: &str = "Error";

/// The value in the main display
#[derive(Debug, Clone, PartialEq)]
enum Operand {
    /// Text being entered, or the text of a computed result
    Entry(String),
    /// The last computation failed
    Failed(CalcError),
}

impl Operand {
    fn zero() -> Self {
        Self::Entry("0".to_string())
    }

    fn as_text(&self) -> &str {
        match self {
            Self::Entry(text) => text,
            Self::Failed(_) => ERROR_TEXT,
        }
    }

    fn value(&self) -> Option<f64> {
        match self {
            Self::Entry(text) => parse_number(text),
            Self::Failed(_) => None,
        }
    }
}

/// A binary operator waiting for its right operand
#[derive(Debug, Clone, PartialEq)]
struct PendingOperation {
    /// Left operand text as it was displayed
    left: String,
    operator: Operator,
    /// Whether a right operand was supplied since the operator was chosen
    has_right_operand: bool,
}

impl PendingOperation {
    fn new(left: &str, operator: Operator) -> Self {
        Self {
            left: left.to_string(),
            operator,
            has_right_operand: false,
        }
    }

    /// Pending expression text, e.g. `7 +`
    fn expression(&self) -> String {
        format!("{} {}", self.left, self.operator)
    }
}

/// What the presentation layer reads after each intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// Main display text, or `Error`
    pub current_operand: String,
    /// Pending expression such as `7 +`, empty when none
    pub previous_operand: String,
    /// History, newest first
    pub history: Vec<HistoryRecord>,
}

/// Calculator engine.
///
/// Owns the operand, the pending operation and the bounded history. Callers
/// hold the value and drive it through [`Calculator::apply`] or the
/// individual operations.
///
/// # Example
///
/// ```
/// use calctui::engine::{Calculator, Operator};
///
/// let mut calc = Calculator::new();
/// calc.append_digit(7);
/// calc.choose_operator(Operator::Add);
/// calc.append_digit(3);
/// calc.compute();
///
/// assert_eq!(calc.current_operand(), "10");
/// assert_eq!(calc.history().newest().unwrap().expression, "7 + 3");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    current: Operand,
    pending: Option<PendingOperation>,
    waiting_for_new_operand: bool,
    history: History,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator showing `0` with empty history
    pub fn new() -> Self {
        Self {
            current: Operand::zero(),
            pending: None,
            waiting_for_new_operand: false,
            history: History::new(),
        }
    }

    /// Main display text
    pub fn current_operand(&self) -> &str {
        self.current.as_text()
    }

    /// Pending expression text, empty when no operator is pending
    pub fn previous_operand(&self) -> String {
        self.pending
            .as_ref()
            .map(PendingOperation::expression)
            .unwrap_or_default()
    }

    /// The pending binary operator
    pub fn operation(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    /// Whether the next digit starts a fresh operand
    pub fn is_waiting_for_new_operand(&self) -> bool {
        self.waiting_for_new_operand
    }

    /// The error the display is showing, if any
    pub fn error(&self) -> Option<CalcError> {
        match self.current {
            Operand::Failed(err) => Some(err),
            Operand::Entry(_) => None,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Snapshot of everything the display shows
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            current_operand: self.current_operand().to_string(),
            previous_operand: self.previous_operand(),
            history: self.history.to_vec(),
        }
    }

    /// Apply one intent
    pub fn apply(&mut self, intent: Intent) {
        debug!("Applying intent {:?}", intent);
        match intent {
            Intent::Digit(digit) => self.append_digit(digit),
            Intent::DecimalPoint => self.append_decimal_point(),
            Intent::Operator(operator) => self.choose_operator(operator),
            Intent::Equals => self.compute(),
            Intent::Clear => self.clear(),
            Intent::Backspace => self.backspace(),
            Intent::Scientific(function) => self.apply_scientific_function(function),
            Intent::ClearHistory => self.clear_history(),
            Intent::RecallHistory(index) => self.recall_history(index),
        }
    }

    /// Append a digit (0-9) to the operand.
    ///
    /// Starts a fresh operand when waiting for one; a lone `0` is replaced.
    pub fn append_digit(&mut self, digit: u8) {
        if digit > 9 {
            debug!("Ignoring invalid digit {}", digit);
            return;
        }
        let ch = char::from(b'0' + digit);

        match &mut self.current {
            Operand::Entry(text) if !self.waiting_for_new_operand => {
                if text == "0" {
                    *text = ch.to_string();
                } else {
                    text.push(ch);
                }
            }
            _ => {
                self.current = Operand::Entry(ch.to_string());
                self.waiting_for_new_operand = false;
            }
        }
        self.mark_right_operand();
    }

    /// Append a decimal point; a second point in the same operand is ignored.
    pub fn append_decimal_point(&mut self) {
        match &mut self.current {
            Operand::Entry(text) if !self.waiting_for_new_operand => {
                if !text.contains('.') {
                    text.push('.');
                }
            }
            _ => {
                self.current = Operand::Entry("0.".to_string());
                self.waiting_for_new_operand = false;
            }
        }
        self.mark_right_operand();
    }

    /// Choose a binary operator.
    ///
    /// A pending operation with an entered right operand is computed first
    /// (`3 + 4 ×` becomes `7 ×`). Choosing again before a right operand was
    /// entered only replaces the pending operator.
    pub fn choose_operator(&mut self, operator: Operator) {
        if self.current_operand().is_empty() {
            return;
        }

        if self.pending.as_ref().is_some_and(|p| p.has_right_operand) {
            self.compute();
        }

        self.pending = Some(PendingOperation::new(self.current_operand(), operator));
        self.waiting_for_new_operand = true;
    }

    /// Apply the pending operator to the left and current operands.
    ///
    /// No-op without a pending operator or when either operand is not a
    /// number. Successful results are recorded in history.
    pub fn compute(&mut self) {
        let Some(pending) = self.pending.as_ref() else {
            return;
        };
        let (Some(left), Some(right)) = (parse_number(&pending.left), self.current.value()) else {
            debug!(
                "Skipping computation of '{}' with operand '{}'",
                pending.expression(),
                self.current_operand()
            );
            return;
        };

        let expression = format!("{} {}", pending.expression(), self.current_operand());
        let outcome = pending.operator.apply(left, right);
        self.finish(outcome, Some(expression));

        self.pending = None;
        self.waiting_for_new_operand = true;
    }

    /// Reset operand and pending operation. History is kept.
    pub fn clear(&mut self) {
        self.current = Operand::zero();
        self.pending = None;
        self.waiting_for_new_operand = false;
    }

    /// Remove the last entered character; no-op after a computation.
    pub fn backspace(&mut self) {
        if self.waiting_for_new_operand {
            return;
        }
        if let Operand::Entry(text) = &mut self.current {
            if text.chars().count() <= 1 {
                *text = "0".to_string();
            } else {
                text.pop();
            }
        }
    }

    /// Apply a scientific function to the operand.
    ///
    /// `xʸ` turns into a pending `^` with the operand as its left side.
    /// Constants replace the operand without a history entry.
    pub fn apply_scientific_function(&mut self, function: ScientificFunction) {
        let Some(value) = self.current.value() else {
            debug!(
                "Skipping {} on non-numeric operand '{}'",
                function,
                self.current_operand()
            );
            return;
        };

        match function.evaluate(value) {
            Ok(FunctionOutcome::AwaitExponent) => {
                self.pending = Some(PendingOperation::new(
                    self.current_operand(),
                    Operator::Power,
                ));
                self.waiting_for_new_operand = true;
                return;
            }
            Ok(FunctionOutcome::Constant(constant)) => {
                self.current = Operand::Entry(format_number(constant));
            }
            outcome => {
                let expression = function.expression(self.current_operand());
                let outcome = outcome.map(|o| match o {
                    FunctionOutcome::Value(v) | FunctionOutcome::Constant(v) => v,
                    FunctionOutcome::AwaitExponent => value,
                });
                self.finish(outcome, expression);
            }
        }

        self.mark_right_operand();
        self.waiting_for_new_operand = true;
    }

    /// Empty the history log
    pub fn clear_history(&mut self) {
        info!("Clearing {} history records", self.history.len());
        self.history.clear();
    }

    /// Load the result of history record `index` (0 = newest) as the operand.
    ///
    /// A pending operation is kept, so the recalled value can be its right
    /// operand.
    pub fn recall_history(&mut self, index: usize) {
        let Some(record) = self.history.get(index) else {
            debug!("No history record at index {}", index);
            return;
        };
        self.current = Operand::Entry(record.result.clone());
        self.waiting_for_new_operand = true;
        self.mark_right_operand();
    }

    /// Store the outcome of a computation and record it when it succeeded.
    ///
    /// A NaN result counts as a failure.
    fn finish(&mut self, outcome: Result<f64, CalcError>, expression: Option<String>) {
        let outcome = outcome.and_then(|v| {
            if v.is_nan() {
                Err(CalcError::Undefined)
            } else {
                Ok(v)
            }
        });
        match outcome {
            Ok(value) => {
                let result = format_number(value);
                if let Some(expression) = expression {
                    info!("{} = {}", expression, result);
                    self.history.record(HistoryRecord::new(expression, result.clone()));
                }
                self.current = Operand::Entry(result);
            }
            Err(err) => {
                info!("Computation failed: {}", err);
                self.current = Operand::Failed(err);
            }
        }
    }

    fn mark_right_operand(&mut self) {
        if let Some(pending) = self.pending.as_mut() {
            pending.has_right_operand = true;
        }
    }
}
