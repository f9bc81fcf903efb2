use crate::dual::Dual;

/// A vector-valued function `R^n -> R^m` that can be evaluated on dual numbers.
pub trait VectorFunction {
    /// Number of inputs `n`.
    fn inputs(&self) -> usize;

    /// Number of outputs `m`.
    fn outputs(&self) -> usize;

    /// Evaluates the function.
    /// x: input point (length `inputs()`)
    /// out: buffer to write the result (length `outputs()`)
    fn apply(&self, x: &[Dual], out: &mut [Dual]);
}

/// Adapts a closure into a [`VectorFunction`] with fixed dimensions.
pub struct VectorFn<F> {
    pub inputs: usize,
    pub outputs: usize,
    pub f: F,
}

impl<F> VectorFn<F>
where
    F: Fn(&[Dual], &mut [Dual]),
{
    pub fn new(inputs: usize, outputs: usize, f: F) -> Self {
        Self { inputs, outputs, f }
    }
}

impl<F> VectorFunction for VectorFn<F>
where
    F: Fn(&[Dual], &mut [Dual]),
{
    fn inputs(&self) -> usize {
        self.inputs
    }

    fn outputs(&self) -> usize {
        self.outputs
    }

    fn apply(&self, x: &[Dual], out: &mut [Dual]) {
        (self.f)(x, out)
    }
}
