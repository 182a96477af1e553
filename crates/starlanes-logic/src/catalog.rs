//! Product catalog and stockpile storage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of products in the catalog.
pub const PRODUCT_COUNT: usize = 8;

/// The closed set of tradeable products.
///
/// The catalog is fixed at compile time; the discriminant doubles as a dense
/// index into per-product arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Product {
    Hydrogen,
    Helium,
    Carbon,
    Neon,
    Oxygen,
    Silicon,
    Iron,
    Water,
}

impl Product {
    /// Every product, in catalog order.
    pub const ALL: [Product; PRODUCT_COUNT] = [
        Product::Hydrogen,
        Product::Helium,
        Product::Carbon,
        Product::Neon,
        Product::Oxygen,
        Product::Silicon,
        Product::Iron,
        Product::Water,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Product::Hydrogen => "Hydrogen",
            Product::Helium => "Helium",
            Product::Carbon => "Carbon",
            Product::Neon => "Neon",
            Product::Oxygen => "Oxygen",
            Product::Silicon => "Silicon",
            Product::Iron => "Iron",
            Product::Water => "Water",
        }
    }

    /// Dense index into per-product arrays.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-product quantity store for a body inventory or a cargo hold.
///
/// Quantities are expected to stay non-negative; the production math only
/// deducts what the limiting-input computation allows, and commands validate
/// before deducting. Nothing hard-enforces the floor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stockpile {
    amounts: [f32; PRODUCT_COUNT],
}

impl Stockpile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style seeding: `Stockpile::new().with(Product::Iron, 300.0)`.
    pub fn with(mut self, product: Product, amount: f32) -> Self {
        self.amounts[product.index()] = amount;
        self
    }

    pub fn get(&self, product: Product) -> f32 {
        self.amounts[product.index()]
    }

    pub fn set(&mut self, product: Product, amount: f32) {
        self.amounts[product.index()] = amount;
    }

    pub fn add(&mut self, product: Product, amount: f32) {
        self.amounts[product.index()] += amount;
    }

    pub fn deduct(&mut self, product: Product, amount: f32) {
        self.amounts[product.index()] -= amount;
    }

    /// True when every quantity is zero.
    pub fn is_empty(&self) -> bool {
        self.amounts.iter().all(|a| *a == 0.0)
    }

    /// Non-zero entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Product, f32)> + '_ {
        Product::ALL
            .iter()
            .map(|p| (*p, self.amounts[p.index()]))
            .filter(|(_, amount)| *amount != 0.0)
    }

    /// Move the entire contents into `dest`, leaving this stockpile empty.
    pub fn transfer_into(&mut self, dest: &mut Stockpile) {
        for i in 0..PRODUCT_COUNT {
            dest.amounts[i] += self.amounts[i];
            self.amounts[i] = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_indices_are_dense() {
        for (i, product) in Product::ALL.iter().enumerate() {
            assert_eq!(product.index(), i);
        }
    }

    #[test]
    fn test_stockpile_accounting() {
        let mut stock = Stockpile::new().with(Product::Iron, 100.0);
        stock.add(Product::Iron, 50.0);
        stock.deduct(Product::Iron, 25.0);
        assert_eq!(stock.get(Product::Iron), 125.0);
        assert_eq!(stock.get(Product::Water), 0.0);
    }

    #[test]
    fn test_stockpile_iter_skips_zero() {
        let stock = Stockpile::new()
            .with(Product::Hydrogen, 10.0)
            .with(Product::Water, 5.0);
        let entries: Vec<_> = stock.iter().collect();
        assert_eq!(
            entries,
            vec![(Product::Hydrogen, 10.0), (Product::Water, 5.0)]
        );
    }

    #[test]
    fn test_transfer_into_empties_source() {
        let mut hold = Stockpile::new().with(Product::Carbon, 40.0);
        let mut dest = Stockpile::new().with(Product::Carbon, 10.0);
        hold.transfer_into(&mut dest);
        assert!(hold.is_empty());
        assert_eq!(dest.get(Product::Carbon), 50.0);
    }
}
