//! Pure simulation logic for Starlanes.
//!
//! This crate contains all game arithmetic that is independent of any ECS,
//! renderer, or runtime. Functions take plain data and return results, making
//! them unit-testable and portable between the engine crate and headless
//! tools. Nothing here draws a random number; generation rolls are supplied
//! by the caller so every outcome is reproducible in tests.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Product catalog and dense stockpile storage |
//! | [`missions`] | Mission fulfilment predicate and demand/reward rolls |
//! | [`placement`] | Body spawn bands and candidate acceptance |
//! | [`production`] | Factory throughput and limiting-input math |
//! | [`tables`] | Rarity and recipe tables with weighted picks |
//! | [`units`] | Display conversions for world distances |

pub mod catalog;
pub mod missions;
pub mod placement;
pub mod production;
pub mod tables;
pub mod units;
