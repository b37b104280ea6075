//! Session state kept beside the ECS world: progression, powers, and input.
//!
//! The whole aggregate is reset on (re)start and owned by the engine; no
//! component of it lives in the world itself.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use horde_core::components::ProjectilePayload;
use horde_core::constants::*;
use horde_core::enums::PowerFamily;
use horde_core::types::Vec2;

/// Everything a single play-through carries outside the entity world.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub progression: ProgressionState,
    pub powers: PowerState,
    pub input: InputState,
    /// Next zombie spawn id.
    pub next_zombie_id: u64,
    /// Tick at which the spawner fires next.
    pub next_spawn_tick: u64,
}

impl GameSession {
    pub fn new(start_tick: u64) -> Self {
        Self {
            progression: ProgressionState::new(),
            powers: PowerState::default(),
            input: InputState::default(),
            next_zombie_id: 0,
            next_spawn_tick: start_tick + SPAWN_INTERVAL_TICKS,
        }
    }
}

/// Score, lives, and level/wave progression.
#[derive(Debug, Clone)]
pub struct ProgressionState {
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub kills_this_level: u32,
    pub kills_needed: u32,
    /// Set when a level-up lands on a power milestone; consumed by the
    /// engine after the tick completes.
    pending_selection: bool,
}

impl ProgressionState {
    pub fn new() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            kills_this_level: 0,
            kills_needed: INITIAL_KILLS_NEEDED,
            pending_selection: false,
        }
    }

    /// Record a zombie kill: fixed score reward plus the level-kill counter.
    pub fn record_kill(&mut self) {
        self.score += KILL_SCORE;
        self.kills_this_level += 1;
    }

    /// Advance the level if the kill threshold is met. Returns the new
    /// level when a level-up fired.
    pub fn try_level_up(&mut self) -> Option<u32> {
        if self.kills_this_level < self.kills_needed {
            return None;
        }
        self.level += 1;
        self.kills_this_level = 0;
        self.kills_needed = KILLS_NEEDED_BASE + KILLS_NEEDED_PER_LEVEL * self.level;
        if self.level % POWER_MILESTONE_INTERVAL == 0 {
            self.pending_selection = true;
        }
        Some(self.level)
    }

    /// Lose one life (never going negative). Returns remaining lives.
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    /// Consume the pending power-selection request.
    pub fn take_pending_selection(&mut self) -> bool {
        std::mem::take(&mut self.pending_selection)
    }

    #[cfg(test)]
    pub fn set_threshold(&mut self, level: u32, kills_needed: u32) {
        self.level = level;
        self.kills_this_level = 0;
        self.kills_needed = kills_needed;
    }
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Acquired power levels and the control-power cooldown stamp.
///
/// Levels only ever increase within a session; derived attributes are
/// recomputed from the level on demand.
#[derive(Debug, Clone, Default)]
pub struct PowerState {
    pub area_level: u32,
    pub chain_level: u32,
    pub control_level: u32,
    /// Tick of the last control activation; the cooldown is measured
    /// against this stamp, not a pausable countdown.
    pub control_last_used_tick: Option<u64>,
}

impl PowerState {
    pub fn level(&self, family: PowerFamily) -> u32 {
        match family {
            PowerFamily::Area => self.area_level,
            PowerFamily::Chain => self.chain_level,
            PowerFamily::Control => self.control_level,
        }
    }

    /// Raise a family by one level and return the new level.
    pub fn raise(&mut self, family: PowerFamily) -> u32 {
        let slot = match family {
            PowerFamily::Area => &mut self.area_level,
            PowerFamily::Chain => &mut self.chain_level,
            PowerFamily::Control => &mut self.control_level,
        };
        *slot += 1;
        *slot
    }

    pub fn area_damage(&self) -> u32 {
        1 + self.area_level / AREA_DAMAGE_LEVEL_DIVISOR
    }

    pub fn area_radius(&self) -> f64 {
        AREA_BASE_RADIUS + self.area_level as f64 * AREA_RADIUS_PER_LEVEL
    }

    pub fn chain_strikes(&self) -> u32 {
        (1 + self.chain_level).min(CHAIN_MAX_STRIKES)
    }

    pub fn freeze_duration_ticks(&self) -> u32 {
        FREEZE_BASE_TICKS + self.control_level.saturating_sub(1) * FREEZE_TICKS_PER_LEVEL
    }

    /// Whether the control power may fire at `tick`.
    pub fn control_ready(&self, tick: u64) -> bool {
        if self.control_level == 0 {
            return false;
        }
        match self.control_last_used_tick {
            None => true,
            Some(last) => (tick.saturating_sub(last)) as f64 * DT >= CONTROL_COOLDOWN_SECS,
        }
    }

    /// Seconds until the control power is ready again; 0 when ready.
    pub fn control_cooldown_remaining_secs(&self, tick: u64) -> f64 {
        match self.control_last_used_tick {
            None => 0.0,
            Some(last) => {
                (CONTROL_COOLDOWN_SECS - (tick.saturating_sub(last)) as f64 * DT).max(0.0)
            }
        }
    }

    /// Pick the payload for one shot.
    ///
    /// Ranged families are weighted by `level * 0.2` and the roll is
    /// normalized over the sum, so owning any ranged power means every
    /// shot carries one. No ranged power owned means a plain shot.
    pub fn payload_for_shot(&self, rng: &mut ChaCha8Rng) -> ProjectilePayload {
        let area_weight = self.area_level as f64 * POWER_WEIGHT_PER_LEVEL;
        let chain_weight = self.chain_level as f64 * POWER_WEIGHT_PER_LEVEL;
        let total = area_weight + chain_weight;
        if total <= 0.0 {
            return ProjectilePayload::Plain;
        }
        let roll: f64 = rng.gen_range(0.0..total);
        if roll < area_weight {
            ProjectilePayload::Area {
                damage: self.area_damage(),
                radius: self.area_radius(),
            }
        } else {
            ProjectilePayload::Chain {
                remaining: self.chain_strikes(),
                hit_ids: Vec::new(),
                trail: Vec::new(),
            }
        }
    }
}

/// Held movement keys, replaced wholesale by SetMovement commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Per-axis movement direction in {-1, 0, 1}. Not normalized:
    /// diagonal movement applies full speed on both axes.
    pub fn movement_vec(&self) -> Vec2 {
        Vec2::new(
            (self.right as i32 - self.left as i32) as f64,
            (self.down as i32 - self.up as i32) as f64,
        )
    }
}
