//! Station construction - countdown timers that spawn new stations.

use crate::components::{
    Body, BodyKind, Hangar, Industry, Position, RouteTable, Spin, StationSite, Vec2,
};
use crate::config::GameConfig;
use crate::events::{EventQueue, GameEvent};
use crate::generation::unique_body_name;
use hecs::{Entity, World};
use rand::Rng;
use starlanes_logic::catalog::Stockpile;

/// Tick station sites; spawn a station next to each parent whose timer ran
/// out. Returns the new station entities so the engine can register them.
pub fn construction_system(
    world: &mut World,
    events: &mut EventQueue,
    config: &GameConfig,
    rng: &mut impl Rng,
    delta: f32,
) -> Vec<Entity> {
    let mut completed: Vec<(Entity, Vec2, f32)> = Vec::new();
    for (entity, (body, pos, site)) in world
        .query::<(&Body, &Position, &mut StationSite)>()
        .iter()
    {
        site.time_left -= delta;
        if site.time_left <= 0.0 {
            completed.push((entity, pos.at, body.radius));
        }
    }

    let mut spawned = Vec::new();
    for (parent, parent_at, parent_radius) in completed {
        let _ = world.remove_one::<StationSite>(parent);

        let name = unique_body_name(world, rng);
        let angle = rng.gen::<f32>() * std::f32::consts::TAU;
        let at = parent_at + Vec2::from_angle(angle) * (parent_radius * 2.0);
        let rate = (rng.gen::<f32>() * 0.2 + 0.1) * if rng.gen_bool(0.5) { 1.0 } else { -1.0 };

        log::info!("station {} completed", name);
        let station = world.spawn((
            Body::new(name, BodyKind::Station)
                .with_radius(config.station_radius)
                .with_efficiency_loss(config.efficiency_loss),
            Position { at },
            Spin::new(2.0, rate),
            Stockpile::new(),
            Industry::default(),
            Hangar::default(),
            RouteTable::default(),
        ));
        events.push(GameEvent::BodyAdded(station));
        spawned.push(station);
    }
    spawned
}
