//! Forward-mode automatic differentiation with dual numbers.
//!
//! A [`Dual`] pairs a value with its derivative (the *tangent*). Build an
//! ordinary expression out of dual numbers instead of scalars and the
//! result carries both the value and the exact derivative, computed in
//! the same pass.
//!
//! # Single-variable differentiation
//!
//! Seed the input with tangent `1` using [`Dual::variable`], evaluate,
//! then read [`Dual::real`] and [`Dual::tangent`]:
//!
//! ```
//! use dualnumber::Dual;
//!
//! // Define a function
//! fn f(x: Dual<f64>) -> Dual<f64> {
//!     x * x + 2.0 * x
//! }
//!
//! // Compute f and f' at x=3
//! let y = f(Dual::variable(3.0));
//! assert_eq!(y.real(), 15.0);    // f(3) = 15
//! assert_eq!(y.tangent(), 8.0);  // f'(3) = 8
//! ```
//!
//! # Operations
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, negation, with plain `f32`/`f64`
//!   scalars accepted on either side
//! - **Transcendental**: `sin`, `cos`, `tanh`, `exp`, `ln`/`log`, `relu`
//! - **Power**: [`num_traits::Pow`] for dual/dual, dual/scalar and
//!   scalar/dual
//! - **Utility**: `conjugate`, `abs`, comparison on the real part,
//!   `Display` as `(real, tangent)`
//!
//! # Domain errors
//!
//! Division, logarithm and power check their preconditions up front and
//! return [`DomainError`] instead of a NaN or infinite result:
//!
//! ```
//! use dualnumber::{DomainError, Dual};
//! use num_traits::Pow;
//!
//! let x = Dual::variable(0.0_f64);
//!
//! assert!(matches!(Dual::constant(5.0) / x, Err(DomainError::Division { .. })));
//! assert!(matches!(x.ln(), Err(DomainError::Logarithm { .. })));
//! assert!(matches!(x.pow(2.0), Err(DomainError::Power { .. })));
//! ```
//!
//! Fallible operations compose with `?`:
//!
//! ```
//! use dualnumber::{Dual, DualResult};
//!
//! // f(x) = ln(x) / x
//! fn f(x: Dual<f64>) -> DualResult<f64> {
//!     x.ln()? / x
//! }
//!
//! let y = f(Dual::variable(1.0)).unwrap();
//! assert_eq!(y.real(), 0.0);     // ln(1)/1 = 0
//! assert_eq!(y.tangent(), 1.0);  // (1 - ln x)/x² at x=1 is 1
//! ```

pub mod arith;
pub mod dual;
pub mod error;
pub mod transcendental;

pub use dual::Dual;
pub use error::{DomainError, DualResult, PowerPrecondition};
