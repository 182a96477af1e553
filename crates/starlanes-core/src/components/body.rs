//! Celestial body components: identity, industry, hangar, routes.

use hecs::Entity;
use serde::{Deserialize, Serialize};
use starlanes_logic::catalog::Product;
use starlanes_logic::production::Factory;
use std::collections::HashMap;

/// Body classification, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
    Asteroid,
    Station,
}

impl BodyKind {
    /// Physical radius used when this kind is spawned procedurally.
    pub fn spawn_radius(&self) -> f32 {
        match self {
            BodyKind::Star => 60.0,
            BodyKind::Planet => 40.0,
            BodyKind::Moon => 20.0,
            BodyKind::Asteroid => 10.0,
            BodyKind::Station => 20.0,
        }
    }
}

/// Core identity of a celestial body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub name: String,
    pub kind: BodyKind,
    /// Doubles as the arrival radius for cargo ships.
    pub radius: f32,
    /// Fraction of every factory conversion lost in the process.
    pub efficiency_loss: f32,
}

impl Body {
    pub fn new(name: impl Into<String>, kind: BodyKind) -> Self {
        Self {
            name: name.into(),
            kind,
            radius: kind.spawn_radius(),
            efficiency_loss: 0.0237,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_efficiency_loss(mut self, loss: f32) -> Self {
        self.efficiency_loss = loss;
        self
    }
}

/// Production recipes installed on a body, in build order.
///
/// Order matters: factories run sequentially against live stock each tick,
/// so earlier entries win contention for scarce inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Industry {
    pub factories: Vec<Factory>,
}

impl Industry {
    /// True when a factory already produces `product` here.
    pub fn has_output(&self, product: Product) -> bool {
        self.factories.iter().any(|f| f.output == product)
    }
}

/// A docked ship capability descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipClass {
    /// Maximum length of a single hop, world units.
    pub range: f32,
}

/// Ships docked at a body, available for dispatch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hangar {
    pub ships: Vec<ShipClass>,
}

impl Hangar {
    /// Longest range among docked ships; zero when the hangar is empty.
    pub fn best_range(&self) -> f32 {
        self.ships.iter().map(|s| s.range).fold(0.0, f32::max)
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Undock one ship for dispatch.
    pub fn take(&mut self) -> Option<ShipClass> {
        self.ships.pop()
    }

    /// Return a ship capability to this body.
    pub fn dock(&mut self, class: ShipClass) {
        self.ships.push(class);
    }
}

/// One routing entry: the recorded lane length and which neighbour to leave
/// through on the way to the keyed destination.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub distance: f32,
    pub next: Entity,
}

/// Per-body routing table: final destination to next hop.
///
/// Directed and per-source; relay selection minimises the recorded distance
/// without any global pathfinding.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<Entity, Route>,
}

impl RouteTable {
    pub fn get(&self, to: Entity) -> Option<&Route> {
        self.routes.get(&to)
    }

    pub fn contains(&self, to: Entity) -> bool {
        self.routes.contains_key(&to)
    }

    pub fn insert(&mut self, to: Entity, route: Route) {
        self.routes.insert(to, route);
    }

    pub fn remove(&mut self, to: Entity) -> Option<Route> {
        self.routes.remove(&to)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Entity, &Route)> + '_ {
        self.routes.iter().map(|(to, route)| (*to, route))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Present only while a station is under construction at this body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StationSite {
    /// Seconds of construction remaining.
    pub time_left: f32,
}
