//! World seeding and procedural body spawning.

use crate::components::{
    Body, BodyKind, Hangar, Industry, Position, Route, RouteTable, ShipClass, Spin, Vec2,
};
use crate::config::GameConfig;
use crate::generation::unique_body_name;
use hecs::{Entity, World};
use rand::Rng;
use starlanes_logic::catalog::{Product, Stockpile};
use starlanes_logic::placement;
use starlanes_logic::production::Factory;
use starlanes_logic::tables;

/// Give up rejection sampling after this many candidates and settle for one
/// that only clears the minimum band.
const PLACEMENT_ATTEMPTS: usize = 256;

/// Spawn a fully-equipped body entity.
fn spawn_equipped(
    world: &mut World,
    body: Body,
    at: Vec2,
    spin: Spin,
    stock: Stockpile,
    industry: Industry,
    hangar: Hangar,
) -> Entity {
    world.spawn((
        body,
        Position { at },
        spin,
        stock,
        industry,
        hangar,
        RouteTable::default(),
    ))
}

/// Seed the fixed home system: a star, a planet, and a moon with starter
/// stock and industry, plus the planet's two pre-laid routes.
pub fn seed_home_system(world: &mut World, config: &GameConfig) -> Vec<Entity> {
    let mut sun_industry = Industry::default();
    sun_industry.factories.push(Factory::new(
        Product::Helium,
        50.0,
        vec![(Product::Hydrogen, 5.0)],
    ));
    let sun = spawn_equipped(
        world,
        Body::new("Sun", BodyKind::Star).with_efficiency_loss(config.efficiency_loss),
        Vec2::new(100.0, 200.0),
        Spin::new(0.5, 0.2),
        Stockpile::new().with(Product::Hydrogen, 10_000.0),
        sun_industry,
        Hangar {
            ships: vec![
                ShipClass {
                    range: config.ship_range,
                },
                ShipClass {
                    range: config.ship_range,
                },
            ],
        },
    );

    let iron_works = || {
        let mut industry = Industry::default();
        industry.factories.push(Factory::new(
            Product::Iron,
            100.0,
            vec![(Product::Helium, 50.0), (Product::Carbon, 50.0)],
        ));
        industry
    };

    let earth = spawn_equipped(
        world,
        Body::new("Earth", BodyKind::Planet).with_efficiency_loss(config.efficiency_loss),
        Vec2::new(400.0, 440.0),
        Spin::new(4.0, 0.2),
        Stockpile::new().with(Product::Carbon, 7_000.0),
        iron_works(),
        Hangar::default(),
    );

    let moon = spawn_equipped(
        world,
        Body::new("Moon", BodyKind::Moon).with_efficiency_loss(config.efficiency_loss),
        Vec2::new(800.0, 340.0),
        Spin::new(2.0, 0.2),
        Stockpile::new().with(Product::Carbon, 3_000.0),
        iron_works(),
        Hangar::default(),
    );

    // The planet starts with lanes to both neighbours.
    if let Ok(mut routes) = world.get::<&mut RouteTable>(earth) {
        routes.insert(
            sun,
            Route {
                distance: 300.0,
                next: sun,
            },
        );
        routes.insert(
            moon,
            Route {
                distance: 300.0,
                next: moon,
            },
        );
    }

    vec![sun, earth, moon]
}

/// Roll a spawn position via rejection sampling around a random anchor.
///
/// Candidates must clear the minimum band around every body and leave at
/// least one body beyond the maximum band. After [`PLACEMENT_ATTEMPTS`]
/// failures the best merely-clear candidate is taken so a crowded cluster
/// cannot stall the tick.
pub fn roll_spawn_position(positions: &[(f32, f32)], rng: &mut impl Rng) -> (f32, f32) {
    let min_distance = placement::min_spawn_distance(positions.len());
    let max_distance = placement::max_spawn_distance(positions.len());
    let mut fallback = None;

    for _ in 0..PLACEMENT_ATTEMPTS {
        let anchor = positions[rng.gen_range(0..positions.len())];
        let distance = rng.gen_range(min_distance..max_distance);
        let angle = rng.gen::<f32>() * std::f32::consts::TAU;
        let candidate = (
            anchor.0 + angle.cos() * distance,
            anchor.1 + angle.sin() * distance,
        );

        if placement::candidate_ok(candidate, positions, min_distance, max_distance) {
            return candidate;
        }
        let clear = positions
            .iter()
            .all(|p| ((candidate.0 - p.0).powi(2) + (candidate.1 - p.1).powi(2)).sqrt() >= min_distance);
        if clear && fallback.is_none() {
            fallback = Some(candidate);
        }
    }

    log::warn!("body placement fell back after {} attempts", PLACEMENT_ATTEMPTS);
    fallback.unwrap_or_else(|| {
        let anchor = positions[rng.gen_range(0..positions.len())];
        (anchor.0 + max_distance, anchor.1)
    })
}

/// Procedurally spawn a new star, planet, or moon and return its handle.
///
/// Stars are seeded with a rarity-weighted product and a factory burning it
/// one step up the fusion chain; a star seeded with a terminal product gets
/// the stock but no factory.
pub fn spawn_random_body(world: &mut World, config: &GameConfig, rng: &mut impl Rng) -> Entity {
    let positions: Vec<(f32, f32)> = world
        .query::<(&Body, &Position)>()
        .iter()
        .map(|(_, (_, pos))| (pos.at.x, pos.at.y))
        .collect();

    let kind = [BodyKind::Star, BodyKind::Planet, BodyKind::Moon][rng.gen_range(0..3)];
    let name = unique_body_name(world, rng);
    let (x, y) = roll_spawn_position(&positions, rng);
    let rate = (rng.gen::<f32>() * 0.2 + 0.1) * if rng.gen_bool(0.5) { 1.0 } else { -1.0 };

    let mut stock = Stockpile::new();
    let mut industry = Industry::default();
    if kind == BodyKind::Star {
        let seeded =
            tables::weighted_pick(tables::STAR_RARITIES, rng.gen()).unwrap_or(Product::Hydrogen);
        stock.add(seeded, rng.gen_range(10..30) as f32 * 1000.0);
        if let Some(output) = tables::star_recipe(seeded) {
            let max_rate = (rng.gen_range(0..10) * 10 + 100) as f32;
            industry.factories.push(Factory::new(
                output,
                max_rate,
                vec![(seeded, (rng.gen_range(0..10) * 5 + 50) as f32)],
            ));
        }
    }

    log::info!("spawned {:?} {} at ({:.0}, {:.0})", kind, name, x, y);
    spawn_equipped(
        world,
        Body::new(name, kind).with_efficiency_loss(config.efficiency_loss),
        Vec2::new(x, y),
        Spin::new(0.5, rate),
        stock,
        industry,
        Hangar::default(),
    )
}
