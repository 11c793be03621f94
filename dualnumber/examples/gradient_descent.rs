//! Gradient descent on a single weight, with the gradient read off a
//! dual number.
//!
//! Minimises `loss(w) = (0 - data·w)²` starting from `w = 3` for a sweep
//! of learning rates and prints the weight trajectory of each run.
//!
//! Run with: `cargo run --example gradient_descent`
//! (per-step progress logs at `info`; `RUST_LOG=warn` silences it)

use anyhow::{ensure, Result};
use dualnumber::Dual;
use num_traits::Pow;

const LEARNING_RATES: [f64; 4] = [0.01, 0.2, 0.4, 0.8];

#[derive(Debug, Clone, Copy)]
struct DescentConfig {
    weight_init: f64,
    n_steps: usize,
    learning_rate: f64,
    keep_every_n_steps: usize,
}

impl Default for DescentConfig {
    fn default() -> Self {
        DescentConfig {
            weight_init: 3.0,
            n_steps: 10,
            learning_rate: 0.2,
            keep_every_n_steps: 1,
        }
    }
}

/// Toy model with a single scalar weight.
struct Model {
    weight: Dual<f64>,
    grad: f64,
}

impl Model {
    fn new(weight_init: f64) -> Self {
        // Seeding the weight makes every derived tangent d/dw.
        Model {
            weight: Dual::variable(weight_init),
            grad: 0.0,
        }
    }

    fn forward(&self, data: f64) -> Dual<f64> {
        data * self.weight
    }

    /// Squared error against a zero target; records the gradient.
    fn loss(&mut self, data: f64) -> Result<f64> {
        let out = (0.0 - self.forward(data)).pow(2.0)?;
        self.grad = out.tangent();
        Ok(out.real())
    }
}

fn gradient_descent(config: &DescentConfig) -> Result<Vec<f64>> {
    ensure!(
        config.keep_every_n_steps > 0,
        "keep_every_n_steps must be positive"
    );

    let mut model = Model::new(config.weight_init);
    let mut history = vec![model.weight.real()];

    for step in 0..config.n_steps {
        let loss = model.loss(1.0)?;
        log::info!("step {step}: loss = {loss:.6}, grad = {:.6}", model.grad);

        model.weight = model.weight - config.learning_rate * model.grad;

        if (step + 1) % config.keep_every_n_steps == 0 {
            history.push(model.weight.real());
        }
    }

    Ok(history)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Gradient descent with dual numbers ===\n");

    for learning_rate in LEARNING_RATES {
        let config = DescentConfig {
            learning_rate,
            ..DescentConfig::default()
        };
        log::info!("running {config:?}");

        let history = gradient_descent(&config)?;

        println!("lr = {learning_rate}");
        for (i, w) in history.iter().enumerate() {
            println!("  {i:>3}  w = {w:>10.6}  loss = {:>10.6}", w * w);
        }
        println!();
    }

    Ok(())
}
