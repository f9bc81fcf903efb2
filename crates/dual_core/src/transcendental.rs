//! Elementary functions with chain-rule propagation.
//!
//! Each function evaluates at `x` and scales its derivative by `y`.
//! `tan` and `tanh` are built from `sin / cos` and `sinh / cosh` through the
//! division operator, so their derivatives come from the quotient rule.

use crate::dual::Dual;
use crate::error::DualError;

impl Dual {
    pub fn exp(self) -> Self {
        let e = self.x.exp();
        Self::new(e, self.y * e)
    }

    /// Natural logarithm. Non-positive `x` yields NaN/-inf; see [`Dual::checked_log`].
    pub fn log(self) -> Self {
        Self::new(self.x.ln(), self.y / self.x)
    }

    pub fn ln(self) -> Self {
        self.log()
    }

    pub fn checked_log(self) -> Result<Self, DualError> {
        if self.x <= 0.0 {
            return Err(DualError::undefined("log", self.x));
        }
        Ok(self.log())
    }

    pub fn sqrt(self) -> Self {
        let s = self.x.sqrt();
        Self::new(s, self.y / (2.0 * s))
    }

    pub fn sin(self) -> Self {
        Self::new(self.x.sin(), self.y * self.x.cos())
    }

    pub fn cos(self) -> Self {
        Self::new(self.x.cos(), -self.y * self.x.sin())
    }

    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    /// [`Dual::tan`] that fails only when `cos(x)` is exactly zero. The cosine
    /// of a finite `f64` never is, so near `π/2` the result is large but `Ok`.
    pub fn checked_tan(self) -> Result<Self, DualError> {
        checked_quotient(self.sin(), self.cos(), "tan", self.x)
    }

    pub fn sinh(self) -> Self {
        Self::new(self.x.sinh(), self.y * self.x.cosh())
    }

    pub fn cosh(self) -> Self {
        Self::new(self.x.cosh(), self.y * self.x.sinh())
    }

    pub fn tanh(self) -> Self {
        self.sinh() / self.cosh()
    }

    /// [`Dual::tanh`] with the same exact-zero check on `cosh(x)`, which is
    /// never zero for real `x`.
    pub fn checked_tanh(self) -> Result<Self, DualError> {
        checked_quotient(self.sinh(), self.cosh(), "tanh", self.x)
    }
}

/// `num / den`, reporting a zero `den.x` as `op` being undefined at `at`.
fn checked_quotient(num: Dual, den: Dual, op: &'static str, at: f64) -> Result<Dual, DualError> {
    num.checked_div(den).map_err(|_| DualError::undefined(op, at))
}
