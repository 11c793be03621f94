//! The dual-number value type.
//!
//! A dual number represents a value and its derivative simultaneously,
//! enabling automatic computation of derivatives through operator
//! overloading.
//!
//! # Mathematical Background
//!
//! A dual number has the form `a + a′·ε` where `ε² = 0`. The first
//! component is the *real part* (the value of the function at the
//! evaluation point) and the second is the *tangent* (the derivative
//! with respect to whichever input was seeded with tangent `1`).
//!
//! Arithmetic lives in [`crate::arith`], transcendental functions and
//! powers in [`crate::transcendental`]. This module holds construction,
//! comparison, and the small utilities.
//!
//! # Example
//!
//! ```
//! use dualnumber::Dual;
//!
//! // Compute f(x) = x² + 2x at x=3
//! let x = Dual::variable(3.0_f64);
//!
//! let f = x * x + 2.0 * x;
//!
//! assert_eq!(f.real(), 15.0);    // f(3) = 9 + 6 = 15
//! assert_eq!(f.tangent(), 8.0);  // f'(3) = 2*3 + 2 = 8
//! ```

use std::cmp::Ordering;
use std::fmt;

use num_traits::{One, Zero};

/// A dual number representing a value and its derivative.
///
/// `Dual(real, tangent)` represents `real + tangent·ε` where `ε² = 0`.
/// Values are immutable: every operation returns a fresh `Dual`.
///
/// Equality and ordering look at the real part only, so two values at
/// the same point with different tangents compare equal.
///
/// # Type Parameter
///
/// - `T`: The numeric type (typically `f64` or `f32`)
///
/// # Examples
///
/// ```
/// use dualnumber::Dual;
///
/// let x = Dual::variable(5.0_f64);
/// let y = x * x;  // y = x²
///
/// assert_eq!(y.real(), 25.0);     // 5² = 25
/// assert_eq!(y.tangent(), 10.0);  // d/dx(x²) at x=5 is 2*5 = 10
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dual<T> {
    pub(crate) real: T,
    pub(crate) tangent: T,
}

impl<T> Dual<T> {
    /// Create a new dual number with explicit real part and tangent.
    ///
    /// # Example
    ///
    /// ```
    /// use dualnumber::Dual;
    ///
    /// let d = Dual::new(2.0_f64, -3.0);
    /// assert_eq!(d.real(), 2.0);
    /// assert_eq!(d.tangent(), -3.0);
    /// ```
    pub fn new(real: T, tangent: T) -> Self {
        Dual { real, tangent }
    }

    /// Create a constant (tangent = 0).
    ///
    /// This is the promotion applied to a plain scalar whenever it meets
    /// a dual number in a binary operation.
    ///
    /// # Example
    ///
    /// ```
    /// use dualnumber::Dual;
    ///
    /// let c = Dual::constant(5.0_f64);
    /// assert_eq!(c.real(), 5.0);
    /// assert_eq!(c.tangent(), 0.0);
    /// ```
    pub fn constant(real: T) -> Self
    where
        T: Zero,
    {
        Dual {
            real,
            tangent: T::zero(),
        }
    }

    /// Create a variable (tangent = 1).
    ///
    /// Use this to seed the input you're differentiating with respect
    /// to.
    ///
    /// # Example
    ///
    /// ```
    /// use dualnumber::Dual;
    ///
    /// let x = Dual::variable(3.0_f64);
    /// assert_eq!(x.real(), 3.0);
    /// assert_eq!(x.tangent(), 1.0);  // dx/dx = 1
    /// ```
    pub fn variable(real: T) -> Self
    where
        T: One,
    {
        Dual {
            real,
            tangent: T::one(),
        }
    }

    /// Split into `(real, tangent)`.
    pub fn parts(self) -> (T, T) {
        (self.real, self.tangent)
    }
}

impl<T: Copy> Dual<T> {
    /// The real part: the value of the function at the evaluation point.
    pub fn real(&self) -> T {
        self.real
    }

    /// The tangent: the derivative with respect to the seeded input.
    pub fn tangent(&self) -> T {
        self.tangent
    }
}

impl<T: Copy + Zero + std::ops::Neg<Output = T>> Dual<T> {
    /// Conjugate: `(a + a′·ε)* = a - a′·ε`.
    ///
    /// Negates the tangent only; applying it twice restores the input.
    ///
    /// # Example
    ///
    /// ```
    /// use dualnumber::Dual;
    ///
    /// let d = Dual::new(2.0_f64, -3.0).conjugate();
    /// assert_eq!(d.parts(), (2.0, 3.0));
    /// ```
    pub fn conjugate(self) -> Self {
        Dual {
            real: self.real,
            tangent: -self.tangent,
        }
    }

    /// Severs the derivative: returns `(real, 0)`.
    ///
    /// The real part is passed through unchanged, sign included. This
    /// is not `|a|`; callers that want the magnitude must take it
    /// themselves.
    ///
    /// # Example
    ///
    /// ```
    /// use dualnumber::Dual;
    ///
    /// let d = Dual::new(-2.0_f64, 5.0).abs();
    /// assert_eq!(d.parts(), (-2.0, 0.0));
    /// ```
    pub fn abs(self) -> Self {
        Dual {
            real: self.real,
            tangent: T::zero(),
        }
    }
}

/// Promotion of a plain scalar: `x ↦ x + 0·ε`.
impl<T: Zero> From<T> for Dual<T> {
    fn from(real: T) -> Self {
        Dual::constant(real)
    }
}

impl<T: PartialEq> PartialEq for Dual<T> {
    fn eq(&self, other: &Self) -> bool {
        self.real == other.real
    }
}

impl<T: PartialOrd> PartialOrd for Dual<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.real.partial_cmp(&other.real)
    }
}

/// Renders as `(real, tangent)`.
impl<T: fmt::Display> fmt::Display for Dual<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.real, self.tangent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn constant_has_zero_tangent() {
        let c = Dual::constant(5.0_f64);
        assert_eq!(c.real(), 5.0);
        assert_eq!(c.tangent(), 0.0);
    }

    #[test]
    fn variable_has_unit_tangent() {
        let x = Dual::variable(3.0_f32);
        assert_eq!(x.parts(), (3.0, 1.0));
    }

    #[test]
    fn from_scalar_promotes() {
        let d = Dual::from(7.5_f64);
        assert_eq!(d.parts(), (7.5, 0.0));
    }

    #[test]
    fn default_is_zero_pair() {
        assert_eq!(Dual::<f64>::default().parts(), (0.0, 0.0));
    }

    #[test]
    fn equality_ignores_tangent() {
        assert_eq!(Dual::new(2.0_f64, -3.0), Dual::new(2.0_f64, 999.0));
        assert_ne!(Dual::new(2.0_f64, -3.0), Dual::new(-5.0_f64, -3.0));
    }

    #[test]
    fn ordering_uses_real_part() {
        let a = Dual::new(2.0_f64, -3.0);
        let b = Dual::new(-5.0_f64, 7.0);

        assert!(!(a < b));
        assert!(!(a <= b));
        assert!(a > b);
        assert!(a >= b);
        assert!(a >= Dual::new(2.0_f64, 100.0));
        assert!(!(a > Dual::new(2.0_f64, 100.0)));
    }

    #[test]
    fn nan_real_is_unordered() {
        let a = Dual::new(f64::NAN, 0.0);
        assert_eq!(a.partial_cmp(&Dual::constant(1.0_f64)), None);
        assert_ne!(a, a);
    }

    #[test]
    fn conjugate_negates_tangent_only() {
        let d = Dual::new(2.0_f64, -4.0).conjugate();
        assert_eq!(d.real(), 2.0);
        assert_eq!(d.tangent(), 4.0);
    }

    #[test]
    fn abs_keeps_real_and_drops_tangent() {
        assert_eq!(Dual::new(2.0_f64, -3.0).abs().parts(), (2.0, 0.0));
        assert_eq!(Dual::new(-5.0_f64, 7.0).abs().parts(), (-5.0, 0.0));
    }

    #[test]
    fn display_renders_pair() {
        assert_eq!(Dual::new(2.5_f64, -3.0).to_string(), "(2.5, -3)");
        assert_eq!(Dual::new(1.0_f32, 0.25).to_string(), "(1, 0.25)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_keeps_both_components() {
        let d = Dual::new(2.0_f64, -3.0);
        let json = serde_json::to_string(&d).unwrap();
        let back: Dual<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.parts(), (2.0, -3.0));
    }

    proptest! {
        #[test]
        fn conjugate_is_an_involution(real in -1e6f64..1e6, tangent in -1e6f64..1e6) {
            let a = Dual::new(real, tangent);
            prop_assert_eq!(a.conjugate().conjugate().parts(), a.parts());
        }

        #[test]
        fn comparison_ignores_tangent(
            real in -1e6f64..1e6,
            t1 in -1e6f64..1e6,
            t2 in -1e6f64..1e6,
        ) {
            let a = Dual::new(real, t1);
            let b = Dual::new(real, t2);
            prop_assert!(a == b);
            prop_assert!(a <= b && a >= b);
            prop_assert!(!(a < b) && !(a > b));
        }
    }
}
