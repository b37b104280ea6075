//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
///
/// `NotStarted → Running ⇆ PowerSelection`, `Running → GameOver`,
/// `GameOver → Running` via restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    NotStarted,
    Running,
    /// Milestone reached; ticking and spawning are suspended until the
    /// player picks a power.
    PowerSelection,
    GameOver,
}

/// Which way the player avatar faces, for the render collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    /// Toward the viewer (down-screen). Default at spawn.
    #[default]
    Front,
    Left,
    Right,
    /// Away from the viewer (up-screen).
    Back,
}

impl Facing {
    /// Facing from a movement or aim vector, by dominant axis.
    /// Zero vectors leave no preference; callers keep the previous facing.
    pub fn from_vec(v: crate::types::Vec2) -> Option<Facing> {
        if v.x == 0.0 && v.y == 0.0 {
            return None;
        }
        Some(if v.x.abs() > v.y.abs() {
            if v.x > 0.0 {
                Facing::Right
            } else {
                Facing::Left
            }
        } else if v.y > 0.0 {
            Facing::Front
        } else {
            Facing::Back
        })
    }

    /// Unit vector for this facing. Fallback aim direction for degenerate
    /// fire targets.
    pub fn unit_vec(&self) -> crate::types::Vec2 {
        use crate::types::Vec2;
        match self {
            Facing::Front => Vec2::new(0.0, 1.0),
            Facing::Back => Vec2::new(0.0, -1.0),
            Facing::Left => Vec2::new(-1.0, 0.0),
            Facing::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// The three independently-leveled power families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerFamily {
    /// Fire: blast damage around the impact point.
    Area,
    /// Lightning: strikes a sequence of zombies via retargeting.
    Chain,
    /// Freeze: on-demand crowd incapacitation, cooldown-gated.
    Control,
}

/// Kind of transient visual effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Expanding ring from an area blast.
    Blast,
    /// Pulse emitted when the control power fires.
    FreezePulse,
}
