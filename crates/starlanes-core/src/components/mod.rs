//! Component definitions for the ECS simulation.
//!
//! Components are pure data structs attached to entities.
//! They have no behavior - that lives in systems.

mod body;
mod cargo;
mod common;

pub use body::*;
pub use cargo::*;
pub use common::*;
