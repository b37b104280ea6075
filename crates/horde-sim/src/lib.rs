//! Simulation engine for HORDE.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the host.

pub mod engine;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use horde_core as core;
