//! Example demonstrating automatic differentiation with transcendental
//! functions and powers.
//!
//! Run with: `cargo run --example dual_transcendentals`

use anyhow::Result;
use dualnumber::Dual;
use num_traits::Pow;

fn main() -> Result<()> {
    println!("=== Dual Numbers: Transcendental Functions ===\n");

    // f(x) = e^x at x=0
    println!("Example 1: f(x) = e^x at x=0");
    let f = Dual::variable(0.0_f64).exp();
    println!("  f = {f} (expected tangent: 1)");
    println!();

    // f(x) = ln(x) at x=2
    println!("Example 2: f(x) = ln(x) at x=2");
    let f = Dual::variable(2.0_f64).ln()?;
    println!("  f = {f} (expected tangent: 0.5)");
    println!();

    // f(x) = sin(x) at x=π/2
    println!("Example 3: f(x) = sin(x) at x=π/2");
    let f = Dual::variable(std::f64::consts::FRAC_PI_2).sin();
    println!("  f = {f} (expected tangent: ~0)");
    println!();

    // f(x) = tanh(x) at x=0
    println!("Example 4: f(x) = tanh(x) at x=0");
    let f = Dual::variable(0.0_f64).tanh();
    println!("  f = {f} (expected tangent: 1)");
    println!();

    // f(x) = relu(x) either side of the kink
    println!("Example 5: f(x) = relu(x) at x=-1 and x=1");
    println!("  f(-1) = {}", Dual::variable(-1.0_f64).relu());
    println!("  f(1)  = {}", Dual::variable(1.0_f64).relu());
    println!();

    // σ(x) = 1 / (1 + e^(-x)) at x=0
    println!("Example 6: Sigmoid σ(x) = 1/(1 + e^(-x)) at x=0");
    let x = Dual::variable(0.0_f64);
    let sigmoid = (1.0 / (1.0 + (-x).exp()))?;
    println!("  σ = {sigmoid} (expected tangent: 0.25)");
    println!();

    // f(x) = x^x at x=2, f'(x) = x^x·(1 + ln x)
    println!("Example 7: f(x) = x^x at x=2");
    let x = Dual::variable(2.0_f64);
    let f = x.pow(x)?;
    println!("  f = {f} (expected tangent: {})", 4.0 * (1.0 + 2.0_f64.ln()));
    println!();

    // f(x) = 2^(x²) at x=1
    println!("Example 8: f(x) = 2^(x²) at x=1");
    let x = Dual::variable(1.0_f64);
    let f = 2.0_f64.pow(x * x)?;
    println!("  f = {f} (expected tangent: {})", 4.0 * 2.0_f64.ln());
    println!();

    // f(x) = ln(sin(e^x)) at x=0
    println!("Example 9: f(x) = ln(sin(e^x)) at x=0");
    let f = Dual::variable(0.0_f64).exp().sin().ln()?;
    println!("  f = {f}");
    println!();

    // Domain errors surface instead of NaN
    println!("Example 10: f(x) = 1/x at x=0");
    match 1.0 / Dual::variable(0.0_f64) {
        Ok(f) => println!("  f = {f}"),
        Err(err) => println!("  error: {err}"),
    }

    Ok(())
}
