//! Shared domain guards used by the detachment and transport formulas.
//! `pub(crate)` only — callers see the resulting `DomainError`s.
use crate::error::{DomainError, Formula};

/// Reject NaN and ±∞ inputs.
pub(crate) fn finite(formula: Formula, parameter: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite { formula, parameter, value })
    }
}

/// Reject a zero denominator.
pub(crate) fn nonzero(formula: Formula, parameter: &'static str, value: f64) -> Result<f64, DomainError> {
    if value == 0.0 {
        Err(DomainError::ZeroDivisor { formula, parameter })
    } else {
        Ok(value)
    }
}

/// `log10(value)`, requiring `value > 0`.
pub(crate) fn log10(formula: Formula, parameter: &'static str, value: f64) -> Result<f64, DomainError> {
    if value > 0.0 {
        Ok(value.log10())
    } else {
        Err(DomainError::NonPositiveLogArgument { formula, parameter, value })
    }
}

/// `base^exponent` for a non-integer exponent.
///
/// A negative base has no real result; a zero base with a negative exponent
/// is a division by zero.
pub(crate) fn powf(
    formula: Formula,
    parameter: &'static str,
    base: f64,
    exponent: f64,
) -> Result<f64, DomainError> {
    if base < 0.0 {
        return Err(DomainError::NegativeFractionalBase {
            formula,
            parameter,
            value: base,
            exponent,
        });
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(DomainError::ZeroDivisor { formula, parameter });
    }
    Ok(base.powf(exponent))
}

/// `√value`, requiring `value ≥ 0`.
pub(crate) fn sqrt(formula: Formula, parameter: &'static str, value: f64) -> Result<f64, DomainError> {
    if value < 0.0 {
        Err(DomainError::NegativeSquareRoot { formula, parameter, value })
    } else {
        Ok(value.sqrt())
    }
}

/// Reject an intermediate that overflowed.
pub(crate) fn finite_result(formula: Formula, parameter: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFiniteResult { formula, parameter, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const F: Formula = Formula::TransportCapacity;

    #[test]
    fn powf_rejects_negative_base() {
        let err = powf(F, "x", -0.5, 1.5).unwrap_err();
        assert!(matches!(err, DomainError::NegativeFractionalBase { exponent, .. } if exponent == 1.5));
    }

    #[test]
    fn powf_zero_base() {
        assert_eq!(powf(F, "x", 0.0, 0.7).unwrap(), 0.0);
        assert_eq!(powf(F, "x", 0.0, -0.7).unwrap_err(), DomainError::ZeroDivisor { formula: F, parameter: "x" });
    }

    #[test]
    fn log10_requires_strictly_positive() {
        assert!(log10(F, "x", 0.0).is_err());
        assert!(log10(F, "x", -1.0).is_err());
        assert_eq!(log10(F, "x", 100.0).unwrap(), 2.0);
    }

    #[test]
    fn finite_rejects_nan_and_infinity() {
        assert!(finite(F, "x", f64::NAN).is_err());
        assert!(finite(F, "x", f64::INFINITY).is_err());
        assert!(finite(F, "x", f64::NEG_INFINITY).is_err());
        assert_eq!(finite(F, "x", -3.0).unwrap(), -3.0);
    }

    #[test]
    fn sqrt_and_nonzero() {
        assert!(sqrt(F, "x", -1e-12).is_err());
        assert_eq!(sqrt(F, "x", 4.0).unwrap(), 2.0);
        assert!(nonzero(F, "x", 0.0).is_err());
        assert!(nonzero(F, "x", -0.0).is_err());
    }
}
