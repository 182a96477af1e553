//! Cargo transit - movement, arrival, greedy rerouting, delivery.

use crate::components::{Body, CargoShip, Hangar, Position, RouteTable, Vec2};
use crate::events::{EventQueue, GameEvent};
use hecs::{Entity, World};
use starlanes_logic::catalog::Stockpile;

enum Step {
    Move(Vec2),
    Advance(Entity),
    Deliver { at: Entity, fallback: bool },
}

/// Advance every cargo ship by `delta` seconds.
///
/// A ship flies straight at its current hop until inside the hop's radius.
/// At the final destination it delivers; at an intermediate hop it consults
/// the hop's route table and advances when the next leg is within its range.
/// With no usable next leg the load is put down where the ship stands - a
/// degraded delivery, never a stranded ship.
pub fn transit_system(world: &mut World, events: &mut EventQueue, delta: f32) {
    // Phase 1: decide each ship's step with shared borrows only.
    let mut steps: Vec<(Entity, Step)> = Vec::new();
    for (entity, (ship, pos)) in world.query::<(&CargoShip, &Position)>().iter() {
        let (hop_at, hop_radius) = match hop_geometry(world, ship.hop) {
            Some(geometry) => geometry,
            None => {
                log::warn!("cargo ship {:?} targets a missing hop, skipping", entity);
                continue;
            }
        };

        let distance = pos.at.distance(&hop_at);
        if distance > hop_radius {
            let direction = (hop_at - pos.at).normalize();
            steps.push((entity, Step::Move(pos.at + direction * (ship.speed * delta))));
        } else if ship.hop == ship.destination {
            steps.push((
                entity,
                Step::Deliver {
                    at: ship.hop,
                    fallback: false,
                },
            ));
        } else {
            let next = world
                .get::<&RouteTable>(ship.hop)
                .ok()
                .and_then(|table| table.get(ship.destination).map(|route| route.next));
            let reachable = next.and_then(|next| {
                let (next_at, _) = hop_geometry(world, next)?;
                (hop_at.distance(&next_at) < ship.class.range).then_some(next)
            });
            match reachable {
                Some(next) => steps.push((entity, Step::Advance(next))),
                None => {
                    log::warn!(
                        "cargo ship {:?} has no usable hop toward its destination, unloading",
                        entity
                    );
                    events.push(GameEvent::RouteFailed {
                        ship: entity,
                        at: ship.hop,
                        destination: ship.destination,
                    });
                    steps.push((
                        entity,
                        Step::Deliver {
                            at: ship.hop,
                            fallback: true,
                        },
                    ));
                }
            }
        }
    }

    // Phase 2: apply, no query borrows held.
    for (entity, step) in steps {
        match step {
            Step::Move(to) => {
                if let Ok(mut pos) = world.get::<&mut Position>(entity) {
                    pos.at = to;
                }
            }
            Step::Advance(next) => {
                if let Ok(mut ship) = world.get::<&mut CargoShip>(entity) {
                    ship.hop = next;
                }
            }
            Step::Deliver { at, fallback } => {
                deliver(world, events, entity, at, fallback);
            }
        }
    }
}

fn hop_geometry(world: &World, hop: Entity) -> Option<(Vec2, f32)> {
    let at = world.get::<&Position>(hop).ok()?.at;
    let radius = world.get::<&Body>(hop).ok()?.radius;
    Some((at, radius))
}

/// Unload a ship at `at`: credit the cargo, return the capability to the
/// hangar, despawn the entity, and emit the delivery event.
fn deliver(world: &mut World, events: &mut EventQueue, entity: Entity, at: Entity, fallback: bool) {
    let mut ship = match world.remove_one::<CargoShip>(entity) {
        Ok(ship) => ship,
        Err(_) => return,
    };

    if let Ok(mut stock) = world.get::<&mut Stockpile>(at) {
        ship.cargo.transfer_into(&mut stock);
    }
    if let Ok(mut hangar) = world.get::<&mut Hangar>(at) {
        hangar.dock(ship.class);
    }
    let _ = world.despawn(entity);
    events.push(GameEvent::CargoDelivered {
        ship: entity,
        at,
        fallback,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{BodyKind, Industry, ShipClass};
    use starlanes_logic::catalog::Product;

    fn spawn_body(world: &mut World, name: &str, x: f32, y: f32) -> Entity {
        world.spawn((
            Body::new(name, BodyKind::Planet),
            Position::new(x, y),
            Stockpile::new(),
            Industry::default(),
            Hangar::default(),
            RouteTable::default(),
        ))
    }

    fn spawn_ship(world: &mut World, hop: Entity, destination: Entity, cargo: Stockpile) -> Entity {
        world.spawn((
            CargoShip {
                hop,
                destination,
                cargo,
                class: ShipClass { range: 500.0 },
                speed: 100.0,
            },
            Position::new(0.0, 0.0),
        ))
    }

    #[test]
    fn test_ship_advances_toward_hop() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let dest = spawn_body(&mut world, "Earth", 1000.0, 0.0);
        let ship = spawn_ship(&mut world, dest, dest, Stockpile::new());

        transit_system(&mut world, &mut events, 1.0);

        let pos = world.get::<&Position>(ship).unwrap();
        assert!((pos.at.x - 100.0).abs() < 1e-3);
        assert!(events.is_empty());
    }

    #[test]
    fn test_delivery_at_final_destination() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let dest = spawn_body(&mut world, "Earth", 30.0, 0.0);
        let cargo = Stockpile::new().with(Product::Iron, 100.0);
        let ship = spawn_ship(&mut world, dest, dest, cargo);

        // Within the destination's radius (40): arrival this tick.
        transit_system(&mut world, &mut events, 1.0);

        assert!(world.get::<&CargoShip>(ship).is_err());
        let stock = world.get::<&Stockpile>(dest).unwrap();
        assert_eq!(stock.get(Product::Iron), 100.0);
        let hangar = world.get::<&Hangar>(dest).unwrap();
        assert_eq!(hangar.len(), 1);
        assert_eq!(
            events.drain(),
            vec![GameEvent::CargoDelivered {
                ship,
                at: dest,
                fallback: false,
            }]
        );
    }

    #[test]
    fn test_relay_advances_to_next_hop() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let hub = spawn_body(&mut world, "Hub", 20.0, 0.0);
        let dest = spawn_body(&mut world, "Far", 400.0, 0.0);
        world
            .get::<&mut RouteTable>(hub)
            .unwrap()
            .insert(dest, crate::components::Route { distance: 380.0, next: dest });
        let ship = spawn_ship(&mut world, hub, dest, Stockpile::new());

        transit_system(&mut world, &mut events, 1.0);

        let ship_data = world.get::<&CargoShip>(ship).unwrap();
        assert_eq!(ship_data.hop, dest);
        assert!(events.is_empty());
    }

    #[test]
    fn test_fallback_delivery_when_route_missing() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let hub = spawn_body(&mut world, "Hub", 20.0, 0.0);
        let dest = spawn_body(&mut world, "Far", 4000.0, 0.0);
        let cargo = Stockpile::new().with(Product::Water, 25.0);
        let ship = spawn_ship(&mut world, hub, dest, cargo);

        transit_system(&mut world, &mut events, 1.0);

        // Ship unloaded at the hub, capability returned there.
        assert!(world.get::<&CargoShip>(ship).is_err());
        assert_eq!(
            world.get::<&Stockpile>(hub).unwrap().get(Product::Water),
            25.0
        );
        assert_eq!(world.get::<&Hangar>(hub).unwrap().len(), 1);
        assert_eq!(world.get::<&Hangar>(dest).unwrap().len(), 0);

        let drained = events.drain();
        assert_eq!(
            drained,
            vec![
                GameEvent::RouteFailed {
                    ship,
                    at: hub,
                    destination: dest,
                },
                GameEvent::CargoDelivered {
                    ship,
                    at: hub,
                    fallback: true,
                },
            ]
        );
    }

    #[test]
    fn test_fallback_when_next_hop_out_of_range() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let hub = spawn_body(&mut world, "Hub", 20.0, 0.0);
        let mid = spawn_body(&mut world, "Mid", 900.0, 0.0);
        let dest = spawn_body(&mut world, "Far", 1800.0, 0.0);
        // A route exists, but its next leg exceeds the ship's 500 range.
        world
            .get::<&mut RouteTable>(hub)
            .unwrap()
            .insert(dest, crate::components::Route { distance: 880.0, next: mid });
        let ship = spawn_ship(&mut world, hub, dest, Stockpile::new());

        transit_system(&mut world, &mut events, 1.0);

        assert!(world.get::<&CargoShip>(ship).is_err());
        assert_eq!(world.get::<&Hangar>(hub).unwrap().len(), 1);
    }
}
