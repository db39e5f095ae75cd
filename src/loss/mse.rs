use crate::error::{Error, Result};

/// Half mean-squared error, the network's reporting loss.
pub struct MseLoss;

impl MseLoss {
    /// Σ(predicted - expected)² / (2 · element count), over every sample and
    /// output dimension.
    pub fn loss(predicted: &[Vec<f64>], expected: &[Vec<f64>]) -> Result<f64> {
        if predicted.len() != expected.len() {
            return Err(Error::dimension("loss sample count", expected.len(), predicted.len()));
        }
        let mut sum = 0.0;
        let mut count = 0usize;
        for (p, e) in predicted.iter().zip(expected.iter()) {
            if p.len() != e.len() {
                return Err(Error::dimension("loss output width", e.len(), p.len()));
            }
            sum += p.iter().zip(e.iter()).map(|(a, b)| (a - b).powi(2)).sum::<f64>();
            count += p.len();
        }
        if count == 0 {
            return Err(Error::dimension("loss element count", 1, 0));
        }

        let loss = sum / (2.0 * count as f64);
        if !loss.is_finite() {
            return Err(Error::Arithmetic(format!("loss is not finite ({loss})")));
        }
        Ok(loss)
    }

    /// Per-output gradient for one sample: predicted - expected
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Result<Vec<f64>> {
        if predicted.len() != expected.len() {
            return Err(Error::dimension("target vector", predicted.len(), expected.len()));
        }
        Ok(predicted.iter().zip(expected.iter())
            .map(|(a, b)| a - b)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_for_exact_predictions() {
        let y = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        assert_eq!(MseLoss::loss(&y, &y).unwrap(), 0.0);
    }

    #[test]
    fn halves_the_mean() {
        // (1 + 4 + 0 + 9) / (2 * 4)
        let p = vec![vec![1.0, 2.0], vec![0.0, 3.0]];
        let e = vec![vec![0.0, 0.0], vec![0.0, 0.0]];
        assert_eq!(MseLoss::loss(&p, &e).unwrap(), 14.0 / 8.0);
    }

    #[test]
    fn positive_and_symmetric_for_distinct_vectors() {
        let a = vec![vec![0.2, 0.9, -1.5]];
        let b = vec![vec![0.7, 0.1, 2.0]];
        let ab = MseLoss::loss(&a, &b).unwrap();
        let ba = MseLoss::loss(&b, &a).unwrap();
        assert!(ab > 0.0);
        assert_eq!(ab, ba);
    }

    #[test]
    fn shape_errors() {
        assert!(MseLoss::loss(&[vec![1.0]], &[vec![1.0], vec![0.0]]).is_err());
        assert!(MseLoss::loss(&[vec![1.0, 2.0]], &[vec![1.0]]).is_err());
        assert!(MseLoss::loss(&[], &[]).is_err());
        assert!(MseLoss::derivative(&[1.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn non_finite_loss_is_reported() {
        let err = MseLoss::loss(&[vec![f64::NAN]], &[vec![0.0]]).unwrap_err();
        assert!(matches!(err, Error::Arithmetic(_)));
    }

    #[test]
    fn derivative_is_difference() {
        assert_eq!(MseLoss::derivative(&[0.75, 0.0], &[1.0, 0.5]).unwrap(), vec![-0.25, -0.5]);
    }
}
