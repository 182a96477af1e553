//! Factory throughput and limiting-input math.

use crate::catalog::{Product, Stockpile};
use serde::{Deserialize, Serialize};

/// A production recipe instance installed on a body.
///
/// Converts `inputs` (per-second rates) into `output` at up to `max_rate`
/// units per second. `current_rate` allows throttling below capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factory {
    pub output: Product,
    pub max_rate: f32,
    pub current_rate: f32,
    pub inputs: Vec<(Product, f32)>,
}

impl Factory {
    /// New factory running at full capacity.
    pub fn new(output: Product, max_rate: f32, inputs: Vec<(Product, f32)>) -> Self {
        Self {
            output,
            max_rate,
            current_rate: max_rate,
            inputs,
        }
    }
}

/// Fraction of one full-rate second the scarcest input allows.
///
/// Infinite for a factory with no inputs (extraction).
pub fn limiting_fraction(inputs: &[(Product, f32)], stock: &Stockpile) -> f32 {
    let mut limit = f32::INFINITY;
    for (product, rate) in inputs {
        if *rate <= 0.0 {
            continue;
        }
        limit = limit.min(stock.get(*product) / rate);
    }
    limit
}

/// Advance one factory by `delta` seconds against live stock.
///
/// The conversion fraction is throttled by both the factory's duty cycle and
/// the scarcest input, so deductions never exceed what is present. A zero
/// fraction leaves the stockpile untouched. Returns the quantity produced
/// after the efficiency tax.
pub fn run_factory(
    factory: &Factory,
    stock: &mut Stockpile,
    efficiency_loss: f32,
    delta: f32,
) -> f32 {
    if factory.max_rate <= 0.0 {
        return 0.0;
    }
    let duty = factory.current_rate / factory.max_rate;
    let fraction = (duty * delta).min(limiting_fraction(&factory.inputs, stock));
    if fraction <= 0.0 {
        return 0.0;
    }
    for (product, rate) in &factory.inputs {
        stock.deduct(*product, rate * fraction);
    }
    let produced = fraction * factory.max_rate * (1.0 - efficiency_loss);
    stock.add(factory.output, produced);
    produced
}
