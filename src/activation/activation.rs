use serde::{Serialize, Deserialize};
use std::f64::consts::E;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The closed set of element-wise activations a network can be built with.
///
/// One kind is shared by every transition of a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationKind {
    /// Heaviside step with `step(0) = 1`.
    UnitStep,
    #[default]
    Sigmoid,
    #[serde(rename = "relu")]
    ReLU,
    Identity,
}

impl ActivationKind {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationKind::UnitStep => if x >= 0.0 { 1.0 } else { 0.0 },
            ActivationKind::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationKind::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationKind::Identity => x,
        }
    }

    /// Derivative evaluated at the pre-activation `x`.
    ///
    /// The step function has no useful gradient; it is treated as 0 everywhere.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationKind::UnitStep => 0.0,
            ActivationKind::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            },
            ActivationKind::ReLU => if x > 0.0 { 1.0 } else { 0.0 },
            ActivationKind::Identity => 1.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivationKind::UnitStep => "unit_step",
            ActivationKind::Sigmoid => "sigmoid",
            ActivationKind::ReLU => "relu",
            ActivationKind::Identity => "identity",
        }
    }
}

impl fmt::Display for ActivationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unit_step" => Ok(ActivationKind::UnitStep),
            "sigmoid" => Ok(ActivationKind::Sigmoid),
            "relu" => Ok(ActivationKind::ReLU),
            "identity" => Ok(ActivationKind::Identity),
            other => Err(Error::Configuration(format!(
                "unknown activation `{other}` (expected unit_step, sigmoid, relu or identity)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_step_thresholds_at_zero() {
        let f = ActivationKind::UnitStep;
        assert_eq!(f.function(0.0), 1.0);
        assert_eq!(f.function(-1e-9), 0.0);
        assert_eq!(f.function(3.0), 1.0);
        assert_eq!(f.derivative(0.0), 0.0);
    }

    #[test]
    fn sigmoid_values_and_derivative() {
        let f = ActivationKind::Sigmoid;
        assert_eq!(f.function(0.0), 0.5);
        assert_eq!(f.derivative(0.0), 0.25);
        assert_eq!(f.function(-1000.0), 0.0);
        assert!((f.function(1000.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn relu_and_identity() {
        assert_eq!(ActivationKind::ReLU.function(-2.0), 0.0);
        assert_eq!(ActivationKind::ReLU.function(2.5), 2.5);
        assert_eq!(ActivationKind::ReLU.derivative(0.0), 0.0);
        assert_eq!(ActivationKind::ReLU.derivative(0.1), 1.0);
        assert_eq!(ActivationKind::Identity.function(-7.0), -7.0);
        assert_eq!(ActivationKind::Identity.derivative(-7.0), 1.0);
    }

    #[test]
    fn parses_known_names_only() {
        for kind in [
            ActivationKind::UnitStep,
            ActivationKind::Sigmoid,
            ActivationKind::ReLU,
            ActivationKind::Identity,
        ] {
            assert_eq!(kind.name().parse::<ActivationKind>().unwrap(), kind);
        }
        assert!(matches!("tanh".parse::<ActivationKind>(), Err(Error::Configuration(_))));
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let json = serde_json::to_string(&ActivationKind::UnitStep).unwrap();
        assert_eq!(json, "\"unit_step\"");
        let relu: ActivationKind = serde_json::from_str("\"relu\"").unwrap();
        assert_eq!(relu, ActivationKind::ReLU);
    }
}
