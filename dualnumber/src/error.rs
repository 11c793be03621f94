//! Domain errors for dual-number operations.
//!
//! Every fallible operation in this crate checks its precondition on the
//! real part before computing anything. A violated precondition is a
//! contract violation by the caller, reported as a [`DomainError`]
//! carrying the offending value.

use std::fmt;

use num_traits::ToPrimitive;
use thiserror::Error;

use crate::Dual;

/// Result of a fallible dual-number operation.
pub type DualResult<T> = Result<Dual<T>, DomainError>;

/// The precondition a power operation requires of its base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PowerPrecondition {
    /// The real part of a dual base must not be zero.
    NonZeroBase,
    /// A scalar base raised to a dual exponent must be strictly positive.
    PositiveBase,
    /// The real part of a dual base raised to a dual exponent must not
    /// be negative.
    NonNegativeBase,
}

impl fmt::Display for PowerPrecondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerPrecondition::NonZeroBase => f.write_str("real part of the base must be nonzero"),
            PowerPrecondition::PositiveBase => f.write_str("scalar base must be positive"),
            PowerPrecondition::NonNegativeBase => {
                f.write_str("real part of a base under a dual exponent must not be negative")
            }
        }
    }
}

/// Errors raised when an operation is applied outside its domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DomainError {
    /// Division by a value whose real part is zero.
    #[error("division undefined when the real part of the denominator is zero: got ({real}, {tangent})")]
    Division { real: f64, tangent: f64 },

    /// Natural logarithm of a value whose real part is zero.
    #[error("logarithm undefined when the real part of the argument is zero: got ({real}, {tangent})")]
    Logarithm { real: f64, tangent: f64 },

    /// Natural logarithm of a value whose real part is negative.
    #[error("logarithm undefined when the real part of the argument is negative: got ({real}, {tangent})")]
    NegativeLogarithm { real: f64, tangent: f64 },

    /// Power with a base outside the allowed domain.
    #[error("power undefined: {precondition}, got base {base}")]
    Power {
        base: f64,
        precondition: PowerPrecondition,
    },
}

impl DomainError {
    pub(crate) fn division<T: ToPrimitive>(real: T, tangent: T) -> Self {
        let err = DomainError::Division {
            real: lossy(real),
            tangent: lossy(tangent),
        };
        log::debug!("rejected division: {err}");
        err
    }

    pub(crate) fn logarithm<T: ToPrimitive>(real: T, tangent: T) -> Self {
        let err = DomainError::Logarithm {
            real: lossy(real),
            tangent: lossy(tangent),
        };
        log::debug!("rejected logarithm: {err}");
        err
    }

    pub(crate) fn negative_logarithm<T: ToPrimitive>(real: T, tangent: T) -> Self {
        let err = DomainError::NegativeLogarithm {
            real: lossy(real),
            tangent: lossy(tangent),
        };
        log::debug!("rejected logarithm: {err}");
        err
    }

    pub(crate) fn power<T: ToPrimitive>(base: T, precondition: PowerPrecondition) -> Self {
        let err = DomainError::Power {
            base: lossy(base),
            precondition,
        };
        log::debug!("rejected power: {err}");
        err
    }
}

// Float types always convert; NaN marks a scalar with no f64 image.
fn lossy<T: ToPrimitive>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
