//! Body name generation

use crate::components::Body;
use hecs::World;
use rand::Rng;

/// Generate a random catalog-style body name, e.g. `AlphaCentauri42`.
pub fn generate_body_name(rng: &mut impl Rng) -> String {
    let first = NAME_FIRSTS[rng.gen_range(0..NAME_FIRSTS.len())];
    let second = NAME_SECONDS[rng.gen_range(0..NAME_SECONDS.len())];
    format!("{}{}{}", first, second, rng.gen_range(1..=100))
}

/// Generate a name no existing body carries, re-rolling until unique.
pub fn unique_body_name(world: &World, rng: &mut impl Rng) -> String {
    loop {
        let name = generate_body_name(rng);
        let taken = world
            .query::<&Body>()
            .iter()
            .any(|(_, body)| body.name == name);
        if !taken {
            return name;
        }
    }
}

static NAME_FIRSTS: &[&str] = &[
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta", "Iota", "Kappa",
    "Lambda", "Mu", "Nu",
];

static NAME_SECONDS: &[&str] = &[
    "Centauri", "Cygni", "Pegasi", "Ceti", "Arietis", "Tauri", "Orionis", "Canis", "Majoris",
    "Minoris", "Ursae",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::BodyKind;

    #[test]
    fn test_generated_name_shape() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let name = generate_body_name(&mut rng);
            assert!(NAME_FIRSTS.iter().any(|first| name.starts_with(first)));
            assert!(name.chars().last().map(|c| c.is_ascii_digit()).unwrap_or(false));
        }
    }

    #[test]
    fn test_unique_name_avoids_existing() {
        let mut world = World::new();
        let mut rng = rand::thread_rng();

        // Occupy a large slice of the name space, then demand fresh names.
        let mut taken = std::collections::HashSet::new();
        for _ in 0..200 {
            let name = unique_body_name(&world, &mut rng);
            assert!(taken.insert(name.clone()), "name {} repeated", name);
            world.spawn((Body::new(name, BodyKind::Moon),));
        }
    }
}
