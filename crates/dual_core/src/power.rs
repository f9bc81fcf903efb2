use crate::dual::Dual;
use crate::error::DualError;
use num_traits::One;
use std::str::FromStr;

/// Exponent accepted by [`Dual::pow`].
///
/// The rule applied depends on the variant, not on the numeric value: an
/// `Int` uses the monomial rule, while `Real` and `Dual` use the generalized
/// rule, which also differentiates through the exponent. `Dual(2, 0)` and
/// `Int(2)` therefore agree on the value but take different code paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Exponent {
    Int(i32),
    Real(f64),
    Dual(Dual),
}

impl Exponent {
    pub fn re(&self) -> f64 {
        match self {
            Exponent::Int(n) => *n as f64,
            Exponent::Real(c) => *c,
            Exponent::Dual(d) => d.x,
        }
    }

    pub fn im(&self) -> f64 {
        match self {
            Exponent::Int(_) | Exponent::Real(_) => 0.0,
            Exponent::Dual(d) => d.y,
        }
    }
}

impl From<i32> for Exponent {
    fn from(n: i32) -> Self {
        Exponent::Int(n)
    }
}

impl From<f64> for Exponent {
    fn from(c: f64) -> Self {
        Exponent::Real(c)
    }
}

impl From<Dual> for Exponent {
    fn from(d: Dual) -> Self {
        Exponent::Dual(d)
    }
}

/// Textual exponents parse as dual numbers.
impl FromStr for Exponent {
    type Err = DualError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Dual>().map(Exponent::Dual)
    }
}

impl TryFrom<&str> for Exponent {
    type Error = DualError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Dual {
    /// Integer power by the monomial rule `(x^n, n x^(n-1) y)`.
    /// Negative exponents are rejected.
    pub fn powi(self, n: i32) -> Result<Self, DualError> {
        match n {
            n if n > 1 => Ok(self.monomial(n)),
            1 => Ok(self),
            0 => Ok(Self::one()),
            _ => Err(DualError::exponent(format!(
                "n must be non-negative, got {n}"
            ))),
        }
    }

    /// General power `self^n`.
    ///
    /// With `c = Re(n)`: `c > 0` picks the rule from the exponent variant,
    /// `c == 0` yields `1`, and `c < 0` is an error.
    pub fn pow(self, n: impl Into<Exponent>) -> Result<Self, DualError> {
        let n = n.into();
        let c = n.re();
        if c > 0.0 {
            match n {
                Exponent::Int(k) => Ok(self.monomial(k)),
                Exponent::Real(_) | Exponent::Dual(_) => {
                    // d/dt x^n(t) = x^n (n x'/x + n' ln x)
                    let d = n.im();
                    let ln_x = self.x.ln();
                    let e = (c * ln_x).exp();
                    Ok(Self::new(e, e * (c * self.y / self.x + d * ln_x)))
                }
            }
        } else if c == 0.0 {
            Ok(Self::one())
        } else {
            Err(DualError::exponent(format!(
                "n must be non-negative, got {c}"
            )))
        }
    }

    /// In-place [`Dual::pow`]. The exponent is always coerced to a dual, so
    /// this takes the generalized rule even for integer exponents.
    /// On error `self` is left untouched.
    pub fn pow_assign(&mut self, n: impl Into<Dual>) -> Result<&mut Self, DualError> {
        *self = self.pow(Exponent::Dual(n.into()))?;
        Ok(self)
    }

    fn monomial(self, n: i32) -> Self {
        Self::new(self.x.powi(n), n as f64 * self.x.powi(n - 1) * self.y)
    }
}
