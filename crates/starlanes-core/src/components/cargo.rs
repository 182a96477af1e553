//! Cargo ship component.

use super::body::ShipClass;
use hecs::Entity;
use starlanes_logic::catalog::Stockpile;

/// An in-transit freighter. Lives alongside a [`super::Position`] and is
/// despawned when its load is put down.
#[derive(Debug, Clone)]
pub struct CargoShip {
    /// Body currently being flown toward.
    pub hop: Entity,
    /// Final delivery target.
    pub destination: Entity,
    /// Goods on board; empty for a repositioning flight.
    pub cargo: Stockpile,
    /// Capability taken from the origin hangar, returned on delivery.
    pub class: ShipClass,
    /// Transit speed, world units per second.
    pub speed: f32,
}
