//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::PowerFamily;

/// Events drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A zombie was killed by a projectile.
    ZombieSlain { zombie_id: u64, score: u64 },
    /// A zombie reached the player.
    PlayerHit { lives_remaining: u32 },
    /// Kill threshold reached; level advanced.
    LevelUp { level: u32 },
    /// A milestone level opened the power selection screen.
    PowerSelectionOpened { level: u32 },
    /// A power was chosen at a milestone.
    PowerChosen { family: PowerFamily, new_level: u32 },
    /// The control power froze the horde.
    FreezeActivated { duration_ticks: u32 },
    /// Lives reached zero.
    GameOver { score: u64, level: u32 },
}
