//! The `dual_core` crate implements dual numbers `x + yε` (with `ε² = 0`) for
//! forward-mode automatic differentiation.
//!
//! Key components:
//! - **Dual**: the value type, its constructors, accessors and tolerant comparisons.
//! - **Ops / Power / Transcendental**: the closed algebra and chain-rule propagation.
//! - **Format**: the canonical `1+2ε` textual form and the `<dual:...>` diagnostic form.
//! - **Diff**: derivative, gradient, Jacobian and Newton drivers built on `Dual`.

pub mod diff;
pub mod dual;
pub mod error;
pub mod format;
pub mod ops;
pub mod power;
pub mod traits;
pub mod transcendental;

pub use dual::{ComparisonSettings, Dual, EPSILON, TOLERANCE};
pub use error::DualError;
pub use power::Exponent;
