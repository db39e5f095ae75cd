use crate::{
    error::{Error, Result},
    loss::mse::MseLoss,
    math::matrix::Matrix,
    network::network::Network,
    optim::sgd::Sgd,
};

/// One online gradient step on a single sample.
///
/// `input` must already carry its trailing bias term. Every transition is
/// updated in place before this returns, so the next sample sees the new
/// weights.
pub fn train_sample(network: &mut Network, input: &[f64], target: &[f64]) -> Result<()> {
    if target.len() != network.output_size() {
        return Err(Error::dimension("target vector", network.output_size(), target.len()));
    }

    let trace = network.forward_augmented(input)?;
    let activation = network.activation();
    let optimizer = Sgd::new(network.learning_rate());

    // ∂L/∂a for the output layer
    let mut error = MseLoss::derivative(trace.output(), target)?;

    for i in (0..network.weights.len()).rev() {
        let pre = &trace.pre_activations[i];
        if error.len() != pre.len() {
            return Err(Error::dimension(format!("error vector at transition {i}"), pre.len(), error.len()));
        }

        // δ = error ⊙ f'(z)
        let slope = Matrix::row(pre.clone()).map(|z| activation.derivative(z));
        let delta = Matrix::row(std::mem::take(&mut error)).hadamard(&slope)?
            .data.into_iter().next().unwrap_or_default();

        let weights_grad = Matrix::outer(&trace.inputs[i], &delta);

        // Borrow-checker ordering: propagate through W_i before W_i is stepped.
        if i > 0 {
            let propagated = Matrix::row(delta).checked_mul(&network.weights[i].transpose())?;
            error = propagated.data.into_iter().next().unwrap_or_default();
        }

        optimizer.step(&mut network.weights[i], &weights_grad)?;
    }

    Ok(())
}
