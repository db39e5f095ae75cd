use crate::error::{Error, Result};
use crate::network::network::Network;

/// A feature matrix paired row-by-row with a target matrix.
///
/// Rows are checked to be rectangular on construction; whether the widths fit
/// a particular network is checked separately by [`Dataset::validate_for`].
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: Vec<Vec<f64>>,
    targets: Vec<Vec<f64>>,
}

impl Dataset {
    pub fn new(features: Vec<Vec<f64>>, targets: Vec<Vec<f64>>) -> Result<Dataset> {
        if features.len() != targets.len() {
            return Err(Error::dimension("target row count", features.len(), targets.len()));
        }
        check_rectangular(&features, "feature row")?;
        check_rectangular(&targets, "target row")?;
        Ok(Dataset { features, targets })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn features(&self) -> &[Vec<f64>] {
        &self.features
    }

    pub fn targets(&self) -> &[Vec<f64>] {
        &self.targets
    }

    /// Number of features per sample (0 for an empty dataset).
    pub fn feature_width(&self) -> usize {
        self.features.first().map_or(0, Vec::len)
    }

    pub fn target_width(&self) -> usize {
        self.targets.first().map_or(0, Vec::len)
    }

    /// Fails unless features match the input layer and targets the output layer.
    pub fn validate_for(&self, network: &Network) -> Result<()> {
        if self.is_empty() {
            return Err(Error::dimension("dataset sample count", 1, 0));
        }
        if self.feature_width() != network.input_size() {
            return Err(Error::dimension("feature width", network.input_size(), self.feature_width()));
        }
        if self.target_width() != network.output_size() {
            return Err(Error::dimension("target width", network.output_size(), self.target_width()));
        }
        Ok(())
    }

    /// Feature rows with the bias term 1.0 appended to each.
    pub fn augmented(&self) -> Vec<Vec<f64>> {
        self.features.iter()
            .map(|row| {
                let mut row = row.clone();
                row.push(1.0);
                row
            })
            .collect()
    }
}

fn check_rectangular(rows: &[Vec<f64>], context: &str) -> Result<()> {
    let width = rows.first().map_or(0, Vec::len);
    match rows.iter().find(|row| row.len() != width) {
        Some(bad) => Err(Error::dimension(context, width, bad.len())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationKind;

    #[test]
    fn rejects_mismatched_row_counts() {
        let err = Dataset::new(vec![vec![0.0]; 3], vec![vec![1.0]; 2]).unwrap_err();
        assert!(matches!(err, Error::Dimension { expected: 3, actual: 2, .. }));
    }

    #[test]
    fn rejects_ragged_rows() {
        assert!(Dataset::new(vec![vec![0.0, 1.0], vec![1.0]], vec![vec![1.0]; 2]).is_err());
        assert!(Dataset::new(vec![vec![0.0]; 2], vec![vec![1.0], vec![]]).is_err());
    }

    #[test]
    fn augmented_appends_bias() {
        let data = Dataset::new(vec![vec![0.5, 2.0]], vec![vec![1.0]]).unwrap();
        assert_eq!(data.augmented(), vec![vec![0.5, 2.0, 1.0]]);
        assert_eq!(data.features(), &[vec![0.5, 2.0]]);
    }

    #[test]
    fn validate_for_checks_both_ends() {
        let net = Network::with_seed(vec![2, 3, 2], ActivationKind::Sigmoid, 0.1, 0).unwrap();
        let ok = Dataset::new(vec![vec![0.0, 1.0]], vec![vec![1.0, 0.0]]).unwrap();
        assert!(ok.validate_for(&net).is_ok());

        let wide = Dataset::new(vec![vec![0.0, 1.0, 2.0]], vec![vec![1.0, 0.0]]).unwrap();
        assert!(matches!(
            wide.validate_for(&net),
            Err(Error::Dimension { expected: 2, actual: 3, .. })
        ));

        let narrow_targets = Dataset::new(vec![vec![0.0, 1.0]], vec![vec![1.0]]).unwrap();
        assert!(matches!(
            narrow_targets.validate_for(&net),
            Err(Error::Dimension { expected: 2, actual: 1, .. })
        ));

        let empty = Dataset::new(vec![], vec![]).unwrap();
        assert!(empty.validate_for(&net).is_err());
    }
}
