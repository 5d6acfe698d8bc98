use minigrad_core::autograd::{check_grad, topological_sort, GradCheckConfig};
use minigrad_core::Scalar;
use std::error::Error;

// Single neuron: loss = (sigmoid(w * x + b) - target)^2
fn neuron_loss(params: &[Scalar]) -> Scalar {
    let (w, b) = (&params[0], &params[1]);
    let x = Scalar::constant(1.5);
    let target = 0.8;

    let out = (&(w * &x) + b).sigmoid();
    let diff = &out - target;
    &diff * &diff
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let w = Scalar::new(0.3).with_name("w");
    let b = Scalar::new(-0.1).with_name("b");
    let params = [w.clone(), b.clone()];

    let loss = neuron_loss(&params);
    let order = topological_sort(&loss)?;
    log::info!("loss = {:.6}, graph has {} tracked nodes", loss.value(), order.len());

    loss.backward()?;
    log::info!("dloss/dw = {:?}", w.derivative());
    log::info!("dloss/db = {:?}", b.derivative());

    check_grad(neuron_loss, &[0.3, -0.1], &GradCheckConfig::default())?;
    log::info!("analytic derivatives agree with central differences");

    Ok(())
}
