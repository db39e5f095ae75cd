use crate::error::Result;
use crate::math::matrix::Matrix;

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies `W ← W − lr · grad` in place.
    pub fn step(&self, weights: &mut Matrix, grad: &Matrix) -> Result<()> {
        *weights = weights.checked_sub(&grad.scale(self.learning_rate))?;
        Ok(())
    }
}
