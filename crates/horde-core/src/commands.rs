//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. A command
//! that is invalid for the current game phase is a no-op, never an error.

use serde::{Deserialize, Serialize};

use crate::enums::PowerFamily;
use crate::types::Position;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Begin a fresh session. Valid from NotStarted or GameOver.
    Start,
    /// Alias of Start: re-enters Running through the same reset path.
    Restart,
    /// Replace the held-movement input state.
    SetMovement {
        up: bool,
        down: bool,
        left: bool,
        right: bool,
    },
    /// Fire a projectile from the player center toward a world-space point.
    Fire { target: Position },
    /// Use the control power: freeze every live zombie, subject to the
    /// cooldown. No target; keyboard-triggered.
    ActivateControl,
    /// Choose a power at a milestone. Only valid during PowerSelection.
    SelectPower { family: PowerFamily },
}
