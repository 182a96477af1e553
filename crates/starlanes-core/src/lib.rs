//! Starlanes Core - Celestial Economy Simulation Engine
//!
//! An ECS-based simulation of a small star cluster: bodies refine resources
//! through factory chains, cargo ships relay goods along player-laid routes,
//! and missions pay out credits on delivery.
//!
//! # Architecture
//!
//! The simulation uses an Entity Component System (ECS) via `hecs`:
//! - **Entities**: celestial bodies and cargo ships
//! - **Components**: pure data attached to entities (Position, Stockpile,
//!   Industry, RouteTable, etc.)
//! - **Systems**: logic that queries and updates components once per tick
//!
//! The [`engine::Game`] aggregate owns the world and exposes the command
//! surface. Structural changes and non-fatal failures are queued as
//! [`events::GameEvent`]s for the driver to drain each frame; there are no
//! observer callbacks and no global state.
//!
//! # Example
//!
//! ```rust,no_run
//! use starlanes_core::engine::Game;
//!
//! let mut game = Game::new();
//! game.generate();
//!
//! loop {
//!     game.update(1.0 / 60.0);
//!     for event in game.drain_events() {
//!         // attach/detach visuals, surface failure toasts
//!         let _ = event;
//!     }
//! }
//! ```

pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod generation;
pub mod missions;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::engine::Game;
    pub use crate::error::CommandError;
    pub use crate::events::GameEvent;
    pub use starlanes_logic::catalog::{Product, Stockpile};
}
