//! Typed domain errors raised when an input violates a mathematical
//! precondition of one of the erosion formulas.
use std::fmt;

/// Which equation rejected its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formula {
    RainfallDetachment,
    FlowDetachment,
    TransportCapacity,
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Formula::RainfallDetachment => "rainfall detachment",
            Formula::FlowDetachment => "flow detachment",
            Formula::TransportCapacity => "transport capacity",
        };
        f.write_str(name)
    }
}

/// Precondition violations.  Each variant names the formula and the
/// parameter (or intermediate term) that failed.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("{formula}: {parameter} is not finite ({value})")]
    NonFinite {
        formula: Formula,
        parameter: &'static str,
        value: f64,
    },
    #[error("{formula}: {parameter} = {value} must be > 0 (logarithm argument)")]
    NonPositiveLogArgument {
        formula: Formula,
        parameter: &'static str,
        value: f64,
    },
    #[error("{formula}: {parameter} = {value} is negative under the non-integer power {exponent}")]
    NegativeFractionalBase {
        formula: Formula,
        parameter: &'static str,
        value: f64,
        exponent: f64,
    },
    #[error("{formula}: {parameter} = {value} is negative under a square root")]
    NegativeSquareRoot {
        formula: Formula,
        parameter: &'static str,
        value: f64,
    },
    #[error("{formula}: {parameter} is zero in a denominator")]
    ZeroDivisor {
        formula: Formula,
        parameter: &'static str,
    },
    #[error("{formula}: {parameter} evaluated to a non-finite value ({value})")]
    NonFiniteResult {
        formula: Formula,
        parameter: &'static str,
        value: f64,
    },
}

impl DomainError {
    pub fn formula(&self) -> Formula {
        match *self {
            DomainError::NonFinite { formula, .. }
            | DomainError::NonPositiveLogArgument { formula, .. }
            | DomainError::NegativeFractionalBase { formula, .. }
            | DomainError::NegativeSquareRoot { formula, .. }
            | DomainError::ZeroDivisor { formula, .. }
            | DomainError::NonFiniteResult { formula, .. } => formula,
        }
    }

    /// Name of the offending parameter or intermediate term.
    pub fn parameter(&self) -> &'static str {
        match *self {
            DomainError::NonFinite { parameter, .. }
            | DomainError::NonPositiveLogArgument { parameter, .. }
            | DomainError::NegativeFractionalBase { parameter, .. }
            | DomainError::NegativeSquareRoot { parameter, .. }
            | DomainError::ZeroDivisor { parameter, .. }
            | DomainError::NonFiniteResult { parameter, .. } => parameter,
        }
    }
}
