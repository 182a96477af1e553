//! Production system - run every factory against its body's live stock.

use crate::components::{Body, Industry};
use hecs::World;
use starlanes_logic::catalog::Stockpile;
use starlanes_logic::production::run_factory;

/// Advance every body's factories by `delta` seconds.
///
/// Factories on a body run sequentially against the live stockpile: a later
/// factory sees the deductions and credits of earlier ones in the same tick.
/// That keeps deductions within what is actually present and gives
/// earlier-built factories priority on scarce inputs.
pub fn production_system(world: &mut World, delta: f32) {
    for (_, (body, stock, industry)) in world
        .query::<(&Body, &mut Stockpile, &Industry)>()
        .iter()
    {
        for factory in &industry.factories {
            run_factory(factory, stock, body.efficiency_loss, delta);
        }
    }
}
