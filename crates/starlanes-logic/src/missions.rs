//! Mission math: fulfilment checks and demand rolls.

use crate::catalog::{Product, Stockpile};

/// True when the target stock covers every required quantity.
///
/// Pure over its inputs; the engine calls this both to gate completion and
/// to mark missions as ready in the UI.
pub fn requirements_met(required: &[(Product, f32)], stock: &Stockpile) -> bool {
    required
        .iter()
        .all(|(product, amount)| stock.get(*product) >= *amount)
}

/// Demand quantity for a fresh mission from a roll in `[0, 1)`.
///
/// Steps of 5 on top of a 100-unit floor, capping at 245.
pub fn demand_quantity(roll: f32) -> f32 {
    (roll * 30.0).floor() * 5.0 + 100.0
}

/// Credit reward for a fresh mission from a roll in `[0, 1)`.
pub fn reward_credits(roll: f32) -> u64 {
    (roll * 10.0) as u64 * 5 + 100
}
