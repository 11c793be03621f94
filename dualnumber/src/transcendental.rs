//! Transcendental functions and powers of dual numbers.
//!
//! Each function applies the chain rule to the real part:
//! `f(a + a′·ε) = f(a) + f′(a)·a′·ε`.
//!
//! The power operator comes in three forms, all exposed through
//! [`num_traits::Pow`]:
//!
//! | base   | exponent | method                 | precondition       |
//! |--------|----------|------------------------|--------------------|
//! | dual   | dual     | [`Dual::powd`]         | base real part > 0 |
//! | dual   | scalar   | [`Dual::powf`]         | base real part ≠ 0 |
//! | scalar | dual     | [`Dual::scalar_pow`]   | base > 0           |
//!
//! # Example
//!
//! ```
//! use dualnumber::Dual;
//! use num_traits::Pow;
//!
//! // f(x) = x² at x=2, seeded with tangent -3
//! let x = Dual::new(2.0_f64, -3.0);
//! let f = x.pow(2.0).unwrap();
//! assert_eq!(f.real(), 4.0);
//! assert_eq!(f.tangent(), -12.0);
//!
//! // g(x) = 2^x
//! let g = 2.0_f64.pow(x).unwrap();
//! assert_eq!(g.real(), 4.0);
//! ```

use num_traits::{Float, Pow};

use crate::error::{DomainError, DualResult, PowerPrecondition};
use crate::Dual;

impl<T: Float> Dual<T> {
    /// Sine: `sin(a + a′·ε) = sin(a) + (a′·cos(a))·ε`.
    ///
    /// # Example
    ///
    /// ```
    /// use dualnumber::Dual;
    ///
    /// // f(x) = sin(x) at x=0
    /// let f = Dual::variable(0.0_f64).sin();
    ///
    /// assert_eq!(f.real(), 0.0);     // sin(0) = 0
    /// assert_eq!(f.tangent(), 1.0);  // cos(0) = 1
    /// ```
    pub fn sin(self) -> Self {
        Dual {
            real: self.real.sin(),
            tangent: self.real.cos() * self.tangent,
        }
    }

    /// Cosine: `cos(a + a′·ε) = cos(a) + (-a′·sin(a))·ε`.
    pub fn cos(self) -> Self {
        Dual {
            real: self.real.cos(),
            tangent: -self.real.sin() * self.tangent,
        }
    }

    /// Hyperbolic tangent: `tanh(a + a′·ε) = tanh(a) + ((1 - tanh²(a))·a′)·ε`.
    pub fn tanh(self) -> Self {
        let real = self.real.tanh();
        Dual {
            real,
            tangent: (T::one() - real * real) * self.tangent,
        }
    }

    /// Exponential: `e^(a + a′·ε) = e^a + (e^a·a′)·ε`.
    ///
    /// # Example
    ///
    /// ```
    /// use dualnumber::Dual;
    ///
    /// let f = Dual::variable(0.0_f64).exp();
    ///
    /// assert_eq!(f.real(), 1.0);     // e^0 = 1
    /// assert_eq!(f.tangent(), 1.0);  // d/dx(e^x) at x=0 is e^0 = 1
    /// ```
    pub fn exp(self) -> Self {
        let real = self.real.exp();
        Dual {
            real,
            tangent: real * self.tangent,
        }
    }

    /// Natural logarithm: `ln(a + a′·ε) = ln(a) + (a′/a)·ε`.
    ///
    /// Rejects a zero real part with [`DomainError::Logarithm`] and a
    /// negative one with [`DomainError::NegativeLogarithm`].
    ///
    /// # Example
    ///
    /// ```
    /// use dualnumber::Dual;
    ///
    /// let f = Dual::variable(1.0_f64).ln().unwrap();
    /// assert_eq!(f.real(), 0.0);
    /// assert_eq!(f.tangent(), 1.0);
    ///
    /// assert!(Dual::variable(0.0_f64).ln().is_err());
    /// ```
    pub fn ln(self) -> DualResult<T> {
        if self.real.is_zero() {
            return Err(DomainError::logarithm(self.real, self.tangent));
        }
        if self.real < T::zero() {
            return Err(DomainError::negative_logarithm(self.real, self.tangent));
        }
        Ok(Dual {
            real: self.real.ln(),
            tangent: self.tangent / self.real,
        })
    }

    /// Natural logarithm; same as [`Dual::ln`].
    pub fn log(self) -> DualResult<T> {
        self.ln()
    }

    /// Rectified linear unit.
    ///
    /// The identity for a positive real part, `(0, 0)` otherwise. The
    /// tangent at the kink `a = 0` is taken to be zero.
    pub fn relu(self) -> Self {
        if self.real > T::zero() {
            self
        } else {
            Dual {
                real: T::zero(),
                tangent: T::zero(),
            }
        }
    }

    /// Dual base, dual exponent: `f^g = e^(g·ln f)`.
    ///
    /// The tangent is `f^g · (f′/f · g + ln(f) · g′)`.
    /// Rejects a base whose real part is zero or negative, where `ln(f)`
    /// has no real value.
    pub fn powd(self, exponent: Dual<T>) -> DualResult<T> {
        if self.real.is_zero() {
            return Err(DomainError::power(self.real, PowerPrecondition::NonZeroBase));
        }
        if self.real < T::zero() {
            return Err(DomainError::power(self.real, PowerPrecondition::NonNegativeBase));
        }
        let real = self.real.powf(exponent.real);
        Ok(Dual {
            real,
            tangent: real
                * ((self.tangent / self.real) * exponent.real + self.real.ln() * exponent.tangent),
        })
    }

    /// Dual base, scalar exponent: `f^p` with tangent `f^p · (f′/f) · p`.
    ///
    /// Rejects a base whose real part is zero.
    pub fn powf(self, p: T) -> DualResult<T> {
        if self.real.is_zero() {
            return Err(DomainError::power(self.real, PowerPrecondition::NonZeroBase));
        }
        let real = self.real.powf(p);
        Ok(Dual {
            real,
            tangent: real * (self.tangent / self.real) * p,
        })
    }

    /// Scalar base, dual exponent: `b^g`, computed as `(b + 0·ε)^g`.
    ///
    /// Rejects a base that is not strictly positive.
    ///
    /// # Example
    ///
    /// ```
    /// use dualnumber::Dual;
    ///
    /// let x = Dual::new(2.0_f64, -3.0);
    /// let f = Dual::scalar_pow(2.0, x).unwrap();
    ///
    /// assert_eq!(f.real(), 4.0);
    /// assert!((f.tangent() - 4.0 * 2.0_f64.ln() * -3.0).abs() < 1e-12);
    ///
    /// assert!(Dual::scalar_pow(-2.0, Dual::variable(1.0_f64)).is_err());
    /// ```
    pub fn scalar_pow(base: T, exponent: Dual<T>) -> DualResult<T> {
        if !(base > T::zero()) {
            return Err(DomainError::power(base, PowerPrecondition::PositiveBase));
        }
        Dual::constant(base).powd(exponent)
    }
}

impl<T: Float> Pow<Dual<T>> for Dual<T> {
    type Output = DualResult<T>;

    fn pow(self, rhs: Dual<T>) -> Self::Output {
        self.powd(rhs)
    }
}

impl<T: Float> Pow<T> for Dual<T> {
    type Output = DualResult<T>;

    fn pow(self, rhs: T) -> Self::Output {
        self.powf(rhs)
    }
}

macro_rules! scalar_base_pow {
    ($($t:ty),*) => {$(
        impl Pow<Dual<$t>> for $t {
            type Output = DualResult<$t>;

            fn pow(self, rhs: Dual<$t>) -> Self::Output {
                Dual::scalar_pow(self, rhs)
            }
        }
    )*};
}

scalar_base_pow!(f32, f64);
