//! Rarity and recipe tables driving generation.
//!
//! Weights come from the game's balance sheet. Picks are pure over a
//! caller-supplied roll in `[0, 1)` so generation stays reproducible under a
//! seeded rng.

use crate::catalog::Product;

/// Relative abundance of products seeded on freshly spawned stars.
pub const STAR_RARITIES: &[(Product, f32)] = &[
    (Product::Hydrogen, 1.0),
    (Product::Helium, 0.3),
    (Product::Carbon, 0.2),
    (Product::Neon, 0.1),
    (Product::Oxygen, 0.1),
    (Product::Silicon, 0.04),
];

/// Relative demand weights for mission products.
pub const MISSION_WEIGHTS: &[(Product, f32)] = &[
    (Product::Iron, 1.0),
    (Product::Helium, 0.2),
    (Product::Carbon, 0.15),
    (Product::Neon, 0.05),
    (Product::Oxygen, 0.1),
    (Product::Silicon, 0.05),
    (Product::Water, 0.1),
];

/// What a star burns its seeded product into, one step up the fusion chain.
///
/// Neon is seeded on stars but fuses no further; a neon star is a mining
/// stop, not a refinery.
pub fn star_recipe(input: Product) -> Option<Product> {
    match input {
        Product::Hydrogen => Some(Product::Helium),
        Product::Helium => Some(Product::Carbon),
        Product::Carbon => Some(Product::Oxygen),
        Product::Oxygen => Some(Product::Silicon),
        Product::Silicon => Some(Product::Iron),
        _ => None,
    }
}

/// Inputs a player-built factory needs to produce `output`.
///
/// Products without a recipe are extracted from nothing (at a reduced rate
/// via [`production_multiplier`]).
pub fn factory_inputs(output: Product) -> &'static [Product] {
    match output {
        Product::Water => &[Product::Hydrogen, Product::Oxygen],
        Product::Iron => &[Product::Helium, Product::Carbon],
        _ => &[],
    }
}

/// Multiplier applied to a freshly built factory's rolled production rate.
pub fn production_multiplier(output: Product) -> f32 {
    match output {
        Product::Carbon => 0.1,
        _ => 1.0,
    }
}

/// Pick from a weighted table with a roll in `[0, 1)`.
///
/// Returns `None` only for an empty table; accumulated float error on the
/// final entry falls back to that entry rather than failing.
pub fn weighted_pick(table: &[(Product, f32)], roll: f32) -> Option<Product> {
    let total: f32 = table.iter().map(|(_, weight)| weight).sum();
    let mut remaining = roll * total;
    for (product, weight) in table {
        if remaining < *weight {
            return Some(*product);
        }
        remaining -= weight;
    }
    table.last().map(|(product, _)| *product)
}
