//! Generation - seeding the home system and spawning new bodies

mod bodies;
mod names;

pub use bodies::*;
pub use names::*;
