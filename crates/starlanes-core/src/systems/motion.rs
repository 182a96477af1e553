//! Motion system - drifting bodies and spin accumulation.

use crate::components::{Drift, Position, Spin};
use hecs::World;

/// Advance spin and drift for every entity that has them.
///
/// Drift targets are cleared (the component removed) once the entity is
/// within `arrival_epsilon` of the target.
pub fn motion_system(world: &mut World, delta: f32, arrival_epsilon: f32) {
    for (_, spin) in world.query::<&mut Spin>().iter() {
        spin.angle += spin.rate * delta;
    }

    // Collect arrivals; components can't be removed mid-iteration.
    let mut arrived = Vec::new();
    for (entity, (pos, drift)) in world.query::<(&mut Position, &Drift)>().iter() {
        let distance = pos.at.distance(&drift.target);
        if distance < arrival_epsilon {
            arrived.push(entity);
        } else {
            let direction = (drift.target - pos.at).normalize();
            pos.at = pos.at + direction * (drift.speed * delta);
        }
    }
    for entity in arrived {
        let _ = world.remove_one::<Drift>(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Vec2;

    #[test]
    fn test_drift_moves_toward_target() {
        let mut world = World::new();
        let entity = world.spawn((
            Position::new(0.0, 0.0),
            Drift {
                target: Vec2::new(100.0, 0.0),
                speed: 10.0,
            },
        ));

        motion_system(&mut world, 1.0, 1.0);

        let pos = world.get::<&Position>(entity).unwrap();
        assert!((pos.at.x - 10.0).abs() < 1e-4);
        assert_eq!(pos.at.y, 0.0);
    }

    #[test]
    fn test_drift_clears_on_arrival() {
        let mut world = World::new();
        let entity = world.spawn((
            Position::new(99.5, 0.0),
            Drift {
                target: Vec2::new(100.0, 0.0),
                speed: 10.0,
            },
        ));

        motion_system(&mut world, 1.0, 1.0);

        assert!(world.get::<&Drift>(entity).is_err());
    }

    #[test]
    fn test_spin_accumulates() {
        let mut world = World::new();
        let entity = world.spawn((Spin::new(0.5, 0.2),));

        motion_system(&mut world, 2.0, 1.0);

        let spin = world.get::<&Spin>(entity).unwrap();
        assert!((spin.angle - 0.9).abs() < 1e-5);
    }
}
