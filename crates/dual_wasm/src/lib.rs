use dual_core::Dual;
use wasm_bindgen::prelude::*;

mod dual;

pub use dual::WasmDual;

/// Evaluates `p(x) = c0 + c1 x + ... + cn x^n` and its derivative.
/// Returns `[p(x), p'(x)]`.
#[wasm_bindgen]
pub fn polynomial_derivative(coefficients: &[f64], x: f64) -> js_sys::Float64Array {
    let value = horner(coefficients, Dual::variable(x));
    js_sys::Float64Array::from(&[value.x, value.y][..])
}

pub(crate) fn horner(coefficients: &[f64], t: Dual) -> Dual {
    coefficients
        .iter()
        .rev()
        .fold(Dual::constant(0.0), |acc, &c| acc * t + c)
}
