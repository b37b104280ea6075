//! Systems that operate on the simulation world each tick.
//!
//! Systems are functions taking `&mut World` (or `&World` for read-only)
//! plus the session state they mutate. They do not own state.

pub mod effects;
pub mod player;
pub mod projectile;
pub mod snapshot;
pub mod spawner;
pub mod zombie;
