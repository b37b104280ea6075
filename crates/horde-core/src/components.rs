//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{EffectKind, Facing, PowerFamily};
use crate::types::{Position, Vec2};

/// The player avatar. One instance exists per session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerPawn {
    /// Box side (pixels).
    pub size: f64,
    /// Movement speed per axis (pixels per tick).
    pub speed: f64,
    pub facing: Facing,
    /// Tick of the last shot, for the fire cooldown.
    pub last_fire_tick: Option<u64>,
}

/// A homing enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zombie {
    /// Monotonically increasing spawn id; ties in hit scans resolve to the
    /// lowest id so removal order matches spawn order.
    pub id: u64,
    /// Box side (pixels).
    pub size: f64,
    /// Per-instance speed, fixed at spawn from level + jitter.
    pub speed: f64,
    pub health: u32,
    pub max_health: u32,
    /// Remaining frozen ticks; 0 means not frozen.
    pub frozen_remaining: u32,
}

impl Zombie {
    pub fn is_frozen(&self) -> bool {
        self.frozen_remaining > 0
    }

    pub fn health_fraction(&self) -> f64 {
        if self.max_health == 0 {
            0.0
        } else {
            self.health as f64 / self.max_health as f64
        }
    }
}

/// Power payload carried by a projectile, snapshotted from the power state
/// at fire time. Later level-ups never affect in-flight projectiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProjectilePayload {
    /// No power: 1 damage, terminates on first hit.
    Plain,
    /// Blast damaging every zombie within `radius` of the impact point,
    /// then terminates.
    Area { damage: u32, radius: f64 },
    /// Strikes up to `remaining` more zombies, retargeting the nearest
    /// not-yet-hit one after each strike.
    Chain {
        remaining: u32,
        /// Spawn ids of zombies already struck.
        hit_ids: Vec<u64>,
        /// Strike positions, for the render collaborator's arc drawing.
        trail: Vec<Position>,
    },
}

impl ProjectilePayload {
    /// Power family tag for views, None for plain shots.
    pub fn family(&self) -> Option<PowerFamily> {
        match self {
            ProjectilePayload::Plain => None,
            ProjectilePayload::Area { .. } => Some(PowerFamily::Area),
            ProjectilePayload::Chain { .. } => Some(PowerFamily::Chain),
        }
    }
}

/// A fired projectile. Position component holds its center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Velocity per tick (unit direction scaled by projectile speed).
    pub velocity: Vec2,
    /// Pixels traveled so far.
    pub traveled: f64,
    /// Travel cutoff (pixels).
    pub max_range: f64,
    /// Radius for views (pixels).
    pub radius: f64,
    pub payload: ProjectilePayload,
}

/// A transient decaying shape: radius grows toward `max_radius` while
/// alpha fades to zero over the same lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    pub origin: Position,
    pub max_radius: f64,
    /// Ticks lived so far.
    pub age: u32,
    /// Total lifetime in ticks.
    pub lifetime: u32,
}

impl Effect {
    pub fn advance(&mut self) {
        self.age = (self.age + 1).min(self.lifetime);
    }

    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }

    pub fn radius(&self) -> f64 {
        self.max_radius * self.age as f64 / self.lifetime as f64
    }

    pub fn alpha(&self) -> f64 {
        1.0 - self.age as f64 / self.lifetime as f64
    }
}
