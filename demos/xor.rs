use backprop_nn::data::logic;
use backprop_nn::{ActivationKind, Network, TracingReporter, TrainConfig};

fn main() -> backprop_nn::Result<()> {
    tracing_subscriber::fmt::init();

    let mut network = Network::new(vec![2, 2, 1], ActivationKind::Sigmoid, 0.1)?;
    let dataset = logic::xor();

    // Two hidden units at lr 0.1: the loss falls steadily but need not reach zero.
    network.fit(&dataset, &TrainConfig::new(1000, 100), &mut TracingReporter)?;

    for input in dataset.features() {
        println!("Input: {:?} -> Output: {:.4}", input, network.predict(input)?[0]);
    }
    Ok(())
}
