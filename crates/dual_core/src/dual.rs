use crate::error::DualError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Absolute tolerance used by `==` on dual numbers.
pub const TOLERANCE: f64 = 1e-8;

/// The indeterminate unit `ε = 0 + 1ε`.
pub const EPSILON: Dual = Dual::new(0.0, 1.0);

/// Dual number for forward-mode AD.
/// x: real part (the value)
/// y: indeterminate part (the derivative)
///
/// Equality is tolerant (see [`TOLERANCE`]) and ordering looks at `x` only, so
/// `Dual` is neither `Eq` nor `Ord`.
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
pub struct Dual {
    pub x: f64,
    pub y: f64,
}

/// Settings for tolerant comparison.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ComparisonSettings {
    pub tolerance: f64,
}

impl Default for ComparisonSettings {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
        }
    }
}

impl Dual {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// A constant: zero derivative.
    pub const fn constant(x: f64) -> Self {
        Self::new(x, 0.0)
    }

    /// The differentiation variable itself: unit derivative.
    pub const fn variable(x: f64) -> Self {
        Self::new(x, 1.0)
    }

    pub fn re(&self) -> f64 {
        self.x
    }

    pub fn im(&self) -> f64 {
        self.y
    }

    /// The derivative carried by this number. Same as [`Dual::im`].
    pub fn d(&self) -> f64 {
        self.y
    }

    /// Magnitude of a dual number is its real part.
    pub fn abs(&self) -> f64 {
        self.x
    }

    /// `y / x`, with IEEE semantics when `x == 0`.
    pub fn arg(&self) -> f64 {
        self.y / self.x
    }

    pub fn checked_arg(&self) -> Result<f64, DualError> {
        if self.x == 0.0 {
            return Err(DualError::undefined("arg", self.x));
        }
        Ok(self.arg())
    }

    pub fn conj(self) -> Self {
        Self::new(self.x, -self.y)
    }

    /// Component-wise absolute value. Not the identity.
    pub fn pos(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Multiplicative inverse `1 / self`.
    pub fn inv(self) -> Self {
        Self::constant(1.0) / self
    }

    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    pub fn approx_eq_with(&self, other: &Self, settings: ComparisonSettings) -> bool {
        self.approx_eq(other, settings.tolerance)
    }
}

impl PartialEq for Dual {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, TOLERANCE)
    }
}

impl PartialEq<f64> for Dual {
    fn eq(&self, other: &f64) -> bool {
        *self == Dual::from(*other)
    }
}

// Ordering only sees the real part; the derivative carries no order.
impl PartialOrd for Dual {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.x.partial_cmp(&other.x)
    }

    fn lt(&self, other: &Self) -> bool {
        self.x < other.x
    }

    fn le(&self, other: &Self) -> bool {
        self.x <= other.x
    }

    fn gt(&self, other: &Self) -> bool {
        self.x > other.x
    }

    fn ge(&self, other: &Self) -> bool {
        self.x >= other.x
    }
}

impl PartialOrd<f64> for Dual {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.partial_cmp(&Dual::from(*other))
    }
}

impl From<f64> for Dual {
    fn from(x: f64) -> Self {
        Self::constant(x)
    }
}

impl From<f32> for Dual {
    fn from(x: f32) -> Self {
        Self::constant(x as f64)
    }
}

impl From<i32> for Dual {
    fn from(x: i32) -> Self {
        Self::constant(x as f64)
    }
}

impl From<i64> for Dual {
    fn from(x: i64) -> Self {
        Self::constant(x as f64)
    }
}

impl From<u32> for Dual {
    fn from(x: u32) -> Self {
        Self::constant(x as f64)
    }
}

impl From<(f64, f64)> for Dual {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
