//! `WasmDual`: the dual number exposed as a JavaScript class.

use dual_core::{Dual, DualError, Exponent};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

fn to_js_error(err: DualError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct WasmDual {
    pub(crate) inner: Dual,
}

impl From<Dual> for WasmDual {
    fn from(inner: Dual) -> Self {
        Self { inner }
    }
}

#[wasm_bindgen]
impl WasmDual {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64) -> WasmDual {
        console_error_panic_hook::set_once();
        Dual::new(x, y).into()
    }

    /// Parses the canonical `1+2ε` form.
    pub fn parse(text: &str) -> Result<WasmDual, JsValue> {
        console_error_panic_hook::set_once();
        text.parse::<Dual>().map(WasmDual::from).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = fromJSON)]
    pub fn from_json(value: JsValue) -> Result<WasmDual, JsValue> {
        from_value::<Dual>(value)
            .map(WasmDual::from)
            .map_err(|e| JsValue::from_str(&format!("Deserialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        to_value(&self.inner).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_canonical_string(&self) -> String {
        self.inner.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.re()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.im()
    }

    pub fn derivative(&self) -> f64 {
        self.inner.d()
    }

    pub fn add(&self, other: &WasmDual) -> WasmDual {
        (self.inner + other.inner).into()
    }

    pub fn sub(&self, other: &WasmDual) -> WasmDual {
        (self.inner - other.inner).into()
    }

    pub fn mul(&self, other: &WasmDual) -> WasmDual {
        (self.inner * other.inner).into()
    }

    /// Division rejecting a zero denominator instead of returning Infinity.
    pub fn div(&self, other: &WasmDual) -> Result<WasmDual, JsValue> {
        self.inner
            .checked_div(other.inner)
            .map(WasmDual::from)
            .map_err(to_js_error)
    }

    pub fn neg(&self) -> WasmDual {
        (-self.inner).into()
    }

    pub fn conj(&self) -> WasmDual {
        self.inner.conj().into()
    }

    pub fn powi(&self, n: i32) -> Result<WasmDual, JsValue> {
        self.inner.powi(n).map(WasmDual::from).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = powReal)]
    pub fn pow_real(&self, c: f64) -> Result<WasmDual, JsValue> {
        self.pow_exponent(Exponent::Real(c))
    }

    pub fn pow(&self, n: &WasmDual) -> Result<WasmDual, JsValue> {
        self.pow_exponent(Exponent::Dual(n.inner))
    }

    pub fn exp(&self) -> WasmDual {
        self.inner.exp().into()
    }

    pub fn log(&self) -> Result<WasmDual, JsValue> {
        self.inner.checked_log().map(WasmDual::from).map_err(to_js_error)
    }

    pub fn sqrt(&self) -> WasmDual {
        self.inner.sqrt().into()
    }

    pub fn sin(&self) -> WasmDual {
        self.inner.sin().into()
    }

    pub fn cos(&self) -> WasmDual {
        self.inner.cos().into()
    }

    pub fn tan(&self) -> Result<WasmDual, JsValue> {
        self.inner.checked_tan().map(WasmDual::from).map_err(to_js_error)
    }

    pub fn sinh(&self) -> WasmDual {
        self.inner.sinh().into()
    }

    pub fn cosh(&self) -> WasmDual {
        self.inner.cosh().into()
    }

    pub fn tanh(&self) -> Result<WasmDual, JsValue> {
        self.inner.checked_tanh().map(WasmDual::from).map_err(to_js_error)
    }

    pub fn equals(&self, other: &WasmDual) -> bool {
        self.inner == other.inner
    }

    #[wasm_bindgen(js_name = lessThan)]
    pub fn less_than(&self, other: &WasmDual) -> bool {
        self.inner < other.inner
    }
}

impl WasmDual {
    fn pow_exponent(&self, n: Exponent) -> Result<WasmDual, JsValue> {
        self.inner.pow(n).map(WasmDual::from).map_err(to_js_error)
    }
}
