//! Game state snapshot — the complete visible state handed to the render
//! and HUD collaborators each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Vec2};

/// Complete read-only state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub camera: CameraView,
    pub zombies: Vec<ZombieView>,
    pub projectiles: Vec<ProjectileView>,
    pub effects: Vec<EffectView>,
    pub hud: HudView,
    pub events: Vec<GameEvent>,
}

/// Player avatar for drawing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    /// Top-left corner in world space.
    pub position: Position,
    pub size: f64,
    pub facing: Facing,
}

/// Camera/world offset keeping the player screen-centered.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CameraView {
    pub offset: Vec2,
}

/// A zombie for drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZombieView {
    pub id: u64,
    pub position: Position,
    pub size: f64,
    pub frozen: bool,
    /// Remaining health as a fraction of max, for damage tinting.
    pub health_fraction: f64,
}

/// A projectile for drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    /// Projectile center in world space.
    pub position: Position,
    pub radius: f64,
    /// None for plain shots.
    pub power: Option<PowerFamily>,
    /// Chain strike positions for arc drawing; empty otherwise.
    pub trail: Vec<Position>,
}

/// A decaying visual effect for drawing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectView {
    pub kind: EffectKind,
    pub position: Position,
    pub radius: f64,
    pub alpha: f64,
}

/// Scalar HUD fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub zombie_count: u32,
    pub kills_this_level: u32,
    pub kills_needed: u32,
    pub area_level: u32,
    pub chain_level: u32,
    pub control_level: u32,
    /// Seconds until the control power may fire again; 0 when ready.
    pub control_cooldown_secs: f64,
}
