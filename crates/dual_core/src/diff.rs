//! Forward-mode differentiation drivers.
//!
//! Every driver seeds one input with `Dual::variable` (derivative part 1),
//! keeps the others constant, and reads derivatives off the `y` parts of the
//! outputs. A Jacobian therefore costs one evaluation per input.

use crate::dual::Dual;
use crate::error::DualError;
use crate::traits::VectorFunction;
use anyhow::{bail, Result};
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

/// Value and first derivative of `f` at `x`.
pub fn derivative<F>(f: F, x: f64) -> (f64, f64)
where
    F: FnOnce(Dual) -> Dual,
{
    let out = f(Dual::variable(x));
    (out.x, out.y)
}

/// [`derivative`] for functions built from fallible operations such as `pow`.
pub fn try_derivative<F>(f: F, x: f64) -> Result<(f64, f64), DualError>
where
    F: FnOnce(Dual) -> Result<Dual, DualError>,
{
    let out = f(Dual::variable(x))?;
    Ok((out.x, out.y))
}

/// Gradient of a scalar function of several variables.
pub fn gradient<F>(f: F, x: &[f64]) -> Result<DVector<f64>>
where
    F: Fn(&[Dual]) -> Dual,
{
    if x.is_empty() {
        bail!("Gradient requires at least one input.");
    }

    let n = x.len();
    let mut seeded: Vec<Dual> = x.iter().map(|&v| Dual::constant(v)).collect();
    let mut grad = DVector::zeros(n);
    for j in 0..n {
        seeded[j].y = 1.0;
        grad[j] = f(&seeded[..]).y;
        seeded[j].y = 0.0;
    }
    Ok(grad)
}

/// Jacobian `J[i, j] = d out_i / d x_j` of a vector function at `x`.
pub fn jacobian<S: VectorFunction>(system: &S, x: &[f64]) -> Result<DMatrix<f64>> {
    let n = system.inputs();
    let m = system.outputs();
    if n == 0 || m == 0 {
        bail!("Function has zero dimension ({} inputs, {} outputs).", n, m);
    }
    if x.len() != n {
        bail!(
            "Input dimension mismatch. Expected {}, got {}.",
            n,
            x.len()
        );
    }

    let mut jac = DMatrix::zeros(m, n);
    let mut dual_x = vec![Dual::constant(0.0); n];
    let mut dual_out = vec![Dual::constant(0.0); m];

    // Column j comes from one evaluation with x_j seeded.
    for j in 0..n {
        for i in 0..n {
            dual_x[i] = Dual::new(x[i], if i == j { 1.0 } else { 0.0 });
        }
        system.apply(&dual_x, &mut dual_out);
        for i in 0..m {
            jac[(i, j)] = dual_out[i].y;
        }
    }
    log::debug!("evaluated {}x{} jacobian at {:?}", m, n, x);

    Ok(jac)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NewtonSettings {
    pub max_steps: usize,
    pub damping: f64,
    pub tolerance: f64,
}

impl Default for NewtonSettings {
    fn default() -> Self {
        Self {
            max_steps: 25,
            damping: 1.0,
            tolerance: 1e-9,
        }
    }
}

impl NewtonSettings {
    fn validate(&self) -> Result<()> {
        if self.max_steps == 0 {
            bail!("max_steps must be greater than zero.");
        }
        if self.damping <= 0.0 {
            bail!("damping must be positive.");
        }
        if self.tolerance <= 0.0 {
            bail!("tolerance must be positive.");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewtonResult {
    pub root: f64,
    pub residual: f64,
    pub iterations: usize,
}

/// Scalar Newton iteration using the exact dual derivative of `f`.
pub fn newton<F>(f: F, initial_guess: f64, settings: NewtonSettings) -> Result<NewtonResult>
where
    F: Fn(Dual) -> Dual,
{
    settings.validate()?;

    let mut x = initial_guess;
    let (mut value, mut slope) = derivative(&f, x);
    let mut iterations = 0usize;

    loop {
        if value.abs() <= settings.tolerance {
            break;
        }

        if iterations >= settings.max_steps {
            log::warn!(
                "newton stopped after {} steps at x = {} (|f(x)| = {})",
                iterations,
                x,
                value.abs()
            );
            bail!(
                "Newton solver failed to converge in {} steps (|f(x)| = {}).",
                settings.max_steps,
                value.abs()
            );
        }

        if slope == 0.0 || !slope.is_finite() {
            log::warn!("newton hit derivative {} at x = {}", slope, x);
            bail!("Derivative is zero or not finite at x = {}.", x);
        }

        x -= settings.damping * value / slope;
        iterations += 1;
        (value, slope) = derivative(&f, x);
        log::debug!("newton step {}: x = {}, f(x) = {}", iterations, x, value);
    }

    Ok(NewtonResult {
        root: x,
        residual: value.abs(),
        iterations,
    })
}
