//! Dual-number arithmetic.
//!
//! Arithmetic operations follow the algebraic rules of dual numbers:
//!
//! - `(a + a′·ε) + (b + b′·ε) = (a+b) + (a′+b′)·ε`
//! - `-(a + a′·ε) = -a + (-a′)·ε`
//! - `(a + a′·ε) - (b + b′·ε) = (a-b) + (a′-b′)·ε`
//! - `(a + a′·ε) * (b + b′·ε) = ab + (ab′ + a′b)·ε`
//! - `(a + a′·ε) / (b + b′·ε) = a/b + ((a′b - ab′)/b²)·ε`, for `b ≠ 0`
//!
//! Every operator accepts a plain scalar on either side. The scalar is
//! promoted to `s + 0·ε` and the same rule applies, so `d + s` and
//! `s + d` agree. Scalar-on-the-left impls exist for `f32` and `f64`.
//!
//! Division is the only fallible operator: it returns
//! [`DualResult`] and rejects a denominator whose real part is zero.
//!
//! ```
//! use dualnumber::Dual;
//!
//! let x = Dual::new(2.0_f64, -3.0);
//! let y = Dual::new(-5.0_f64, 7.0);
//!
//! let q = (x / y).unwrap();
//! assert_eq!(q.real(), -0.4);
//! assert!((q.tangent() - 0.04).abs() < 1e-12);
//!
//! assert!((x / 0.0).is_err());
//! ```

use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{Float, Zero};

use crate::error::{DomainError, DualResult};
use crate::Dual;

/// Addition: (a + a′·ε) + (b + b′·ε) = (a+b) + (a′+b′)·ε
impl<T: Add<Output = T>> Add for Dual<T> {
    type Output = Dual<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Dual {
            real: self.real + rhs.real,
            tangent: self.tangent + rhs.tangent,
        }
    }
}

impl<T: Add<Output = T> + Zero> Add<T> for Dual<T> {
    type Output = Dual<T>;

    fn add(self, rhs: T) -> Self::Output {
        self + Dual::constant(rhs)
    }
}

/// Subtraction: (a + a′·ε) - (b + b′·ε) = (a-b) + (a′-b′)·ε
impl<T: Sub<Output = T>> Sub for Dual<T> {
    type Output = Dual<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Dual {
            real: self.real - rhs.real,
            tangent: self.tangent - rhs.tangent,
        }
    }
}

impl<T: Sub<Output = T> + Zero> Sub<T> for Dual<T> {
    type Output = Dual<T>;

    fn sub(self, rhs: T) -> Self::Output {
        self - Dual::constant(rhs)
    }
}

/// Multiplication: (a + a′·ε) * (b + b′·ε) = ab + (ab′ + a′b)·ε
///
/// This implements the product rule: d/dx(f·g) = f·g′ + f′·g
impl<T: Mul<Output = T> + Add<Output = T> + Copy> Mul for Dual<T> {
    type Output = Dual<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        Dual {
            real: self.real * rhs.real,
            tangent: self.real * rhs.tangent + self.tangent * rhs.real,
        }
    }
}

impl<T: Mul<Output = T> + Add<Output = T> + Zero + Copy> Mul<T> for Dual<T> {
    type Output = Dual<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self * Dual::constant(rhs)
    }
}

/// Division: the quotient rule, d/dx(f/g) = (f′·g - f·g′) / g²
///
/// Fails with [`DomainError::Division`] when the denominator's real part
/// is zero.
#[allow(clippy::suspicious_arithmetic_impl)]
impl<T: Float> Div for Dual<T> {
    type Output = DualResult<T>;

    fn div(self, rhs: Self) -> Self::Output {
        if rhs.real.is_zero() {
            return Err(DomainError::division(rhs.real, rhs.tangent));
        }
        Ok(Dual {
            real: self.real / rhs.real,
            tangent: (self.tangent * rhs.real - self.real * rhs.tangent) / (rhs.real * rhs.real),
        })
    }
}

impl<T: Float> Div<T> for Dual<T> {
    type Output = DualResult<T>;

    fn div(self, rhs: T) -> Self::Output {
        self / Dual::constant(rhs)
    }
}

/// Negation: -(a + a′·ε) = -a + (-a′)·ε
impl<T: Neg<Output = T>> Neg for Dual<T> {
    type Output = Dual<T>;

    fn neg(self) -> Self::Output {
        Dual {
            real: -self.real,
            tangent: -self.tangent,
        }
    }
}

// Reflected forms: the scalar is promoted and the dual-dual rule applies.
macro_rules! scalar_lhs_ops {
    ($($t:ty),*) => {$(
        impl Add<Dual<$t>> for $t {
            type Output = Dual<$t>;

            fn add(self, rhs: Dual<$t>) -> Self::Output {
                Dual::constant(self) + rhs
            }
        }

        impl Sub<Dual<$t>> for $t {
            type Output = Dual<$t>;

            fn sub(self, rhs: Dual<$t>) -> Self::Output {
                Dual::constant(self) + (-rhs)
            }
        }

        impl Mul<Dual<$t>> for $t {
            type Output = Dual<$t>;

            fn mul(self, rhs: Dual<$t>) -> Self::Output {
                Dual::constant(self) * rhs
            }
        }

        impl Div<Dual<$t>> for $t {
            type Output = DualResult<$t>;

            fn div(self, rhs: Dual<$t>) -> Self::Output {
                Dual::constant(self) / rhs
            }
        }
    )*};
}

scalar_lhs_ops!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn negation_flips_both_parts() {
        let y = -Dual::new(2.0_f64, -4.0);
        assert_eq!(y.parts(), (-2.0, 4.0));
    }

    #[test]
    fn addition_with_scalars_on_either_side() {
        let d1 = Dual::new(2.0_f64, -3.0);
        let d2 = Dual::new(-5.0_f64, 7.0);

        assert_eq!((d1 + 11.0).parts(), (13.0, -3.0));
        assert_eq!((11.0 + d1).parts(), (13.0, -3.0));
        assert_eq!((d1 + d2).parts(), (-3.0, 4.0));
    }

    #[test]
    fn subtraction_with_scalars_on_either_side() {
        let d1 = Dual::new(2.0_f64, -3.0);
        let d2 = Dual::new(-5.0_f64, 7.0);

        assert_eq!((d1 - 11.0).parts(), (-9.0, -3.0));
        assert_eq!((11.0 - d1).parts(), (9.0, 3.0));
        assert_eq!((d1 - d2).parts(), (7.0, -10.0));
    }

    #[test]
    fn multiplication_implements_product_rule() {
        let d1 = Dual::new(2.0_f64, -3.0);
        let d2 = Dual::new(-5.0_f64, 7.0);

        assert_eq!((d1 * 11.0).parts(), (22.0, -33.0));
        assert_eq!((11.0 * d1).parts(), (22.0, -33.0));
        assert_eq!((d1 * d2).parts(), (-10.0, 29.0));
    }

    #[test]
    fn square_of_variable() {
        let x = Dual::variable(3.0_f64);
        assert_eq!((x * x).parts(), (9.0, 6.0));
    }

    #[test]
    fn division_implements_quotient_rule() {
        let d1 = Dual::new(2.0_f64, -3.0);
        let d2 = Dual::new(-5.0_f64, 7.0);

        let out = (d1 / 11.0).unwrap();
        assert_relative_eq!(out.real(), 2.0 / 11.0);
        assert_relative_eq!(out.tangent(), -3.0 / 11.0);

        let out = (11.0 / d1).unwrap();
        assert_relative_eq!(out.real(), 5.5);
        assert_relative_eq!(out.tangent(), 33.0 / 4.0);

        let out = (d1 / d2).unwrap();
        assert_relative_eq!(out.real(), -0.4);
        assert_relative_eq!(out.tangent(), 0.04, epsilon = 1e-15);
    }

    #[test]
    fn division_quotient_rule_on_expression() {
        // f(x) = (x+1)/(x+2) at x=3, f'(x) = 1/(x+2)² = 0.04
        let x = Dual::variable(3.0_f64);
        let y = ((x + 1.0) / (x + 2.0)).unwrap();

        assert_eq!(y.real(), 0.8);
        assert_relative_eq!(y.tangent(), 0.04, epsilon = 1e-10);
    }

    #[test_log::test]
    fn division_by_zero_real_part_is_rejected() {
        let err = (Dual::new(5.0_f64, 1.0) / Dual::new(0.0_f64, 1.0)).unwrap_err();
        assert_eq!(
            err,
            DomainError::Division {
                real: 0.0,
                tangent: 1.0
            }
        );
    }

    #[test_log::test]
    fn reflected_division_checks_the_dual() {
        assert!((3.0_f32 / Dual::new(0.0_f32, 2.0)).is_err());
        assert!((Dual::new(1.0_f64, 1.0) / 0.0).is_err());
    }

    #[test]
    fn f32_reflected_operators() {
        let d = Dual::new(2.0_f32, -3.0);
        assert_eq!((1.0_f32 + d).parts(), (3.0, -3.0));
        assert_eq!((1.0_f32 - d).parts(), (-1.0, 3.0));
        assert_eq!((2.0_f32 * d).parts(), (4.0, -6.0));
    }

    proptest! {
        #[test]
        fn scalar_addition_commutes(
            real in -1e6f64..1e6,
            tangent in -1e6f64..1e6,
            s in -1e6f64..1e6,
        ) {
            let a = Dual::new(real, tangent);
            prop_assert_eq!((a + s).parts(), (s + a).parts());
        }

        #[test]
        fn scalar_multiplication_commutes(
            real in -1e6f64..1e6,
            tangent in -1e6f64..1e6,
            s in -1e6f64..1e6,
        ) {
            let a = Dual::new(real, tangent);
            prop_assert_eq!((a * s).parts(), (s * a).parts());
        }

        #[test]
        fn reflected_subtraction_is_negated_forward(
            real in -1e6f64..1e6,
            tangent in -1e6f64..1e6,
            s in -1e6f64..1e6,
        ) {
            let a = Dual::new(real, tangent);
            prop_assert_eq!((s - a).parts(), (-(a - s)).parts());
        }
    }
}
