//! Operators and scientific functions
//!
//! Binary operators and unary functions are closed enums with an explicit
//! symbol mapping. Evaluation failures are reported as [`CalcError`] values
//! and never panic.

use serde::{Deserialize, Serialize};
use std::f64::consts::{E, PI};
use std::fmt;
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

/// Largest argument accepted by the factorial function.
pub const FACTORIAL_LIMIT: f64 = 100.0;

/// Errors a computation can end in.
///
/// These are shown as the `Error` sentinel on the display and are never
/// recorded in history.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// Right operand of a division was zero
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Argument outside the domain of a scientific function
    #[error("{function} is undefined for this input")]
    Domain { function: ScientificFunction },

    /// The computation produced no number, e.g. a fractional power of a
    /// negative base
    #[error("Result is undefined")]
    Undefined,
}

/// Binary operators that can be pending between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Operator {
    #[strum(to_string = "+")]
    Add,
    #[strum(to_string = "-")]
    Subtract,
    #[strum(to_string = "×", serialize = "*", serialize = "x")]
    Multiply,
    #[strum(to_string = "÷", serialize = "/")]
    Divide,
    #[strum(to_string = "^")]
    Power,
}

impl Operator {
    /// Symbol shown on the display and in history expressions
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }

    /// Apply the operator to `left` and `right`.
    ///
    /// # Errors
    ///
    /// - `DivisionByZero` when dividing by zero
    pub fn apply(self, left: f64, right: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Subtract => Ok(left - right),
            Self::Multiply => Ok(left * right),
            Self::Divide if right == 0.0 => Err(CalcError::DivisionByZero),
            Self::Divide => Ok(left / right),
            Self::Power => Ok(left.powf(right)),
        }
    }
}

/// Exponent selector of the power function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Exponent {
    #[strum(serialize = "2")]
    Square,
    #[strum(serialize = "3")]
    Cube,
    /// Exponent entered as the next operand
    #[strum(serialize = "y")]
    Y,
}

/// Scientific functions available in scientific mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScientificFunction {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
    Power(Exponent),
    Factorial,
    Pi,
    E,
}

/// What applying a scientific function produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FunctionOutcome {
    /// A computed value, recorded in history
    Value(f64),
    /// A constant that replaces the operand without a history entry
    Constant(f64),
    /// The exponent is the next operand; the function becomes a pending `^`
    AwaitExponent,
}

impl ScientificFunction {
    /// Every function, in keypad order
    pub const ALL: [Self; 12] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Log,
        Self::Ln,
        Self::Sqrt,
        Self::Power(Exponent::Square),
        Self::Power(Exponent::Cube),
        Self::Power(Exponent::Y),
        Self::Factorial,
        Self::Pi,
        Self::E,
    ];

    /// Short label used on keypad buttons and in messages
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "√",
            Self::Power(Exponent::Square) => "x²",
            Self::Power(Exponent::Cube) => "x³",
            Self::Power(Exponent::Y) => "xʸ",
            Self::Factorial => "n!",
            Self::Pi => "π",
            Self::E => "e",
        }
    }

    /// Evaluate the function for `x`.
    ///
    /// Trigonometric functions take their argument in degrees.
    ///
    /// # Errors
    ///
    /// - `Domain` for `log`/`ln` of x <= 0, `sqrt` of x < 0, and `factorial`
    ///   of anything but an integer in `0..=100`
    pub fn evaluate(self, x: f64) -> Result<FunctionOutcome, CalcError> {
        let domain_error = CalcError::Domain { function: self };
        let value = match self {
            Self::Sin => (x * PI / 180.0).sin(),
            Self::Cos => (x * PI / 180.0).cos(),
            Self::Tan => (x * PI / 180.0).tan(),
            Self::Log if x > 0.0 => x.log10(),
            Self::Ln if x > 0.0 => x.ln(),
            Self::Log | Self::Ln => return Err(domain_error),
            Self::Sqrt if x >= 0.0 => x.sqrt(),
            Self::Sqrt => return Err(domain_error),
            Self::Power(Exponent::Square) => x.powf(2.0),
            Self::Power(Exponent::Cube) => x.powf(3.0),
            Self::Power(Exponent::Y) => return Ok(FunctionOutcome::AwaitExponent),
            Self::Factorial => factorial(x).ok_or(domain_error)?,
            Self::Pi => return Ok(FunctionOutcome::Constant(PI)),
            Self::E => return Ok(FunctionOutcome::Constant(E)),
        };
        Ok(FunctionOutcome::Value(value))
    }

    /// History expression for applying the function to `operand`.
    ///
    /// Returns `None` for functions that never record history.
    pub fn expression(self, operand: &str) -> Option<String> {
        match self {
            Self::Sin | Self::Cos | Self::Tan | Self::Log | Self::Ln => {
                Some(format!("{}({operand})", self.label()))
            }
            Self::Sqrt => Some(format!("√({operand})")),
            Self::Power(Exponent::Square) => Some(format!("{operand}²")),
            Self::Power(Exponent::Cube) => Some(format!("{operand}³")),
            Self::Factorial => Some(format!("{operand}!")),
            Self::Power(Exponent::Y) | Self::Pi | Self::E => None,
        }
    }
}

impl fmt::Display for ScientificFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// n! for integers in `0..=100`, computed as the product 2·3·…·n
fn factorial(x: f64) -> Option<f64> {
    if x < 0.0 || x.fract() != 0.0 || x > FACTORIAL_LIMIT {
        return None;
    }
    let n = x as u32;
    Some((2..=n).fold(1.0, |acc, i| acc * f64::from(i)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_operator_symbols_match_display() {
        for op in Operator::iter() {
            assert_eq!(op.to_string(), op.symbol());
        }
    }

    #[test]
    fn test_operator_parses_keyboard_aliases() {
        assert_eq!("*".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("×".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("/".parse::<Operator>().unwrap(), Operator::Divide);
        assert_eq!("÷".parse::<Operator>().unwrap(), Operator::Divide);
        assert!("%".parse::<Operator>().is_err());
    }

    #[test]
    fn test_operator_arithmetic() {
        assert_eq!(Operator::Add.apply(7.0, 3.0), Ok(10.0));
        assert_eq!(Operator::Subtract.apply(7.0, 3.0), Ok(4.0));
        assert_eq!(Operator::Multiply.apply(7.0, 3.0), Ok(21.0));
        assert_eq!(Operator::Divide.apply(9.0, 3.0), Ok(3.0));
        assert_eq!(Operator::Power.apply(2.0, 10.0), Ok(1024.0));
        assert_eq!(Operator::Power.apply(4.0, -0.5), Ok(0.5));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            Operator::Divide.apply(5.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            Operator::Divide.apply(0.0, -0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_power_of_negative_base_follows_ieee() {
        let value = Operator::Power.apply(-8.0, 1.0 / 3.0).unwrap();
        assert!(value.is_nan());
    }

    #[test]
    fn test_trig_uses_degrees() {
        let FunctionOutcome::Value(v) = ScientificFunction::Sin.evaluate(90.0).unwrap() else {
            panic!("sin should produce a value");
        };
        assert!((v - 1.0).abs() < 1e-12);

        let FunctionOutcome::Value(v) = ScientificFunction::Cos.evaluate(60.0).unwrap() else {
            panic!("cos should produce a value");
        };
        assert!((v - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_log_domain() {
        assert_eq!(
            ScientificFunction::Log.evaluate(1000.0),
            Ok(FunctionOutcome::Value(3.0))
        );
        assert!(ScientificFunction::Log.evaluate(0.0).is_err());
        assert!(ScientificFunction::Ln.evaluate(-1.0).is_err());
    }

    #[test]
    fn test_sqrt_domain() {
        assert_eq!(
            ScientificFunction::Sqrt.evaluate(0.0),
            Ok(FunctionOutcome::Value(0.0))
        );
        assert_eq!(
            ScientificFunction::Sqrt.evaluate(-4.0),
            Err(CalcError::Domain {
                function: ScientificFunction::Sqrt
            })
        );
    }

    #[test]
    fn test_factorial_domain() {
        assert_eq!(
            ScientificFunction::Factorial.evaluate(0.0),
            Ok(FunctionOutcome::Value(1.0))
        );
        assert_eq!(
            ScientificFunction::Factorial.evaluate(5.0),
            Ok(FunctionOutcome::Value(120.0))
        );
        assert!(ScientificFunction::Factorial.evaluate(100.0).is_ok());
        assert!(ScientificFunction::Factorial.evaluate(101.0).is_err());
        assert!(ScientificFunction::Factorial.evaluate(2.5).is_err());
        assert!(ScientificFunction::Factorial.evaluate(-1.0).is_err());
        assert!(ScientificFunction::Factorial.evaluate(f64::INFINITY).is_err());
    }

    #[test]
    fn test_constants_and_pending_exponent() {
        assert_eq!(
            ScientificFunction::Pi.evaluate(9.0),
            Ok(FunctionOutcome::Constant(PI))
        );
        assert_eq!(
            ScientificFunction::Power(Exponent::Y).evaluate(2.0),
            Ok(FunctionOutcome::AwaitExponent)
        );
    }

    #[test]
    fn test_expressions() {
        assert_eq!(
            ScientificFunction::Sin.expression("30").as_deref(),
            Some("sin(30)")
        );
        assert_eq!(
            ScientificFunction::Power(Exponent::Square).expression("2").as_deref(),
            Some("2²")
        );
        assert_eq!(
            ScientificFunction::Factorial.expression("5").as_deref(),
            Some("5!")
        );
        assert_eq!(ScientificFunction::E.expression("5"), None);
    }

    #[test]
    fn test_domain_error_message() {
        let err = CalcError::Domain {
            function: ScientificFunction::Ln,
        };
        assert_eq!(err.to_string(), "ln is undefined for this input");
    }
}
