use crate::error::{Error, Result};

/// Fraction of rows whose argmax agrees between `predicted` and `expected`.
pub fn accuracy(predicted: &[Vec<f64>], expected: &[Vec<f64>]) -> Result<f64> {
    if predicted.len() != expected.len() {
        return Err(Error::dimension("accuracy sample count", expected.len(), predicted.len()));
    }
    if predicted.is_empty() {
        return Err(Error::dimension("accuracy sample count", 1, 0));
    }
    let mut correct = 0usize;
    for (p, e) in predicted.iter().zip(expected.iter()) {
        if p.len() != e.len() {
            return Err(Error::dimension("accuracy row width", e.len(), p.len()));
        }
        if argmax(p) == argmax(e) {
            correct += 1;
        }
    }
    Ok(correct as f64 / predicted.len() as f64)
}

/// Index of the maximum element in a slice; the first one wins on ties.
pub fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &x)| match best {
            Some((_, b)) if x <= b || x.is_nan() => best,
            _ => Some((i, x)),
        })
        .map(|(i, _)| i)
        .unwrap_or(0)
}
