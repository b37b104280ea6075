//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the session aggregate,
//! processes player commands at tick boundaries, runs all systems in a
//! fixed order, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use horde_core::commands::PlayerCommand;
use horde_core::components::{PlayerPawn, Zombie};
use horde_core::constants::{FIRE_COOLDOWN_TICKS, FREEZE_PULSE_RADIUS, PROJECTILE_SPEED};
use horde_core::enums::{EffectKind, Facing, GamePhase};
use horde_core::events::GameEvent;
use horde_core::state::GameStateSnapshot;
use horde_core::types::{Position, SimTime, Vec2};

use crate::session::{GameSession, InputState};
use crate::systems;
use crate::world_setup;

/// Configuration for a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    session: GameSession,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            session: GameSession::new(0),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Systems only run while `Running`; commands are always processed, so
    /// power selection and restart work from their respective phases. A
    /// tick that has begun always runs to completion — game-over and
    /// power-selection transitions apply afterward.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_systems();
            self.time.advance();

            let milestone = self.session.progression.take_pending_selection();
            if self.session.progression.lives == 0 {
                self.phase = GamePhase::GameOver;
                self.events.push(GameEvent::GameOver {
                    score: self.session.progression.score,
                    level: self.session.progression.level,
                });
            } else if milestone {
                self.phase = GamePhase::PowerSelection;
                self.events.push(GameEvent::PowerSelectionOpened {
                    level: self.session.progression.level,
                });
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, &self.session, events)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Commands invalid for the current
    /// phase are no-ops.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Start | PlayerCommand::Restart => {
                if matches!(self.phase, GamePhase::NotStarted | GamePhase::GameOver) {
                    self.start_session();
                }
            }
            PlayerCommand::SetMovement {
                up,
                down,
                left,
                right,
            } => {
                self.session.input = InputState {
                    up,
                    down,
                    left,
                    right,
                };
            }
            PlayerCommand::Fire { target } => {
                if self.phase == GamePhase::Running {
                    self.fire(target);
                }
            }
            PlayerCommand::ActivateControl => {
                if self.phase == GamePhase::Running {
                    self.activate_control();
                }
            }
            PlayerCommand::SelectPower { family } => {
                if self.phase == GamePhase::PowerSelection {
                    let new_level = self.session.powers.raise(family);
                    self.events
                        .push(GameEvent::PowerChosen { family, new_level });
                    self.phase = GamePhase::Running;
                }
            }
        }
    }

    /// Reset all session state and enter Running. Start and restart share
    /// this path.
    fn start_session(&mut self) {
        self.world = World::new();
        self.time = SimTime::default();
        self.session = GameSession::new(0);
        self.events.clear();
        world_setup::spawn_player(&mut self.world);
        self.phase = GamePhase::Running;
    }

    /// Fire a projectile from the player center toward a world point.
    /// Gated by the fire cooldown; the payload snapshots the current
    /// power state via the weighted per-shot choice.
    fn fire(&mut self, target: Position) {
        let tick = self.time.tick;
        let mut shot: Option<(Position, Vec2)> = None;

        for (_entity, (pawn, pos)) in self.world.query_mut::<(&mut PlayerPawn, &Position)>() {
            if let Some(last) = pawn.last_fire_tick {
                if tick.saturating_sub(last) < FIRE_COOLDOWN_TICKS {
                    return;
                }
            }
            let origin = pos.box_center(pawn.size);
            let mut dir = origin.vec_to(&target).normalized_or_zero();
            if dir == Vec2::default() {
                // Target on top of the player: fall back to facing.
                dir = pawn.facing.unit_vec();
            }
            if let Some(facing) = Facing::from_vec(dir) {
                pawn.facing = facing;
            }
            pawn.last_fire_tick = Some(tick);
            shot = Some((origin, dir));
        }

        let Some((origin, dir)) = shot else {
            return;
        };
        let payload = self.session.powers.payload_for_shot(&mut self.rng);
        world_setup::spawn_projectile(
            &mut self.world,
            origin,
            dir.scaled(PROJECTILE_SPEED),
            payload,
        );
    }

    /// Freeze every live zombie for the level-scaled duration, subject to
    /// the cooldown stamp. Unowned or cooling down: no-op.
    fn activate_control(&mut self) {
        let tick = self.time.tick;
        if !self.session.powers.control_ready(tick) {
            return;
        }
        let duration = self.session.powers.freeze_duration_ticks();
        for (_entity, zombie) in self.world.query_mut::<&mut Zombie>() {
            zombie.frozen_remaining = duration;
        }
        self.session.powers.control_last_used_tick = Some(tick);

        if let Some(center) = systems::player::player_center(&self.world) {
            world_setup::spawn_effect(
                &mut self.world,
                EffectKind::FreezePulse,
                center,
                FREEZE_PULSE_RADIUS,
            );
        }
        self.events.push(GameEvent::FreezeActivated {
            duration_ticks: duration,
        });
    }

    /// Run all systems in the fixed per-tick order.
    fn run_systems(&mut self) {
        // 1. Spawner (independent timer, serialized with the tick)
        systems::spawner::run(&mut self.world, &mut self.rng, &mut self.session, self.time.tick);
        // 2. Player movement
        systems::player::run(&mut self.world, &self.session.input);
        // 3. Zombies: freeze countdown, seek, player contact
        systems::zombie::run(
            &mut self.world,
            &mut self.session.progression,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 4. Projectiles: movement + combat resolution
        systems::projectile::run(
            &mut self.world,
            &mut self.session.progression,
            &mut self.events,
        );
        // 5. Effect decay
        systems::effects::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// Spawn a zombie at a fixed position (for tests).
    #[cfg(test)]
    pub fn spawn_test_zombie(&mut self, pos: Position, health: u32, speed: f64) -> hecs::Entity {
        let id = self.session.next_zombie_id;
        self.session.next_zombie_id += 1;
        self.world.spawn((
            Zombie {
                id,
                size: horde_core::constants::ZOMBIE_SIZE,
                speed,
                health,
                max_health: health,
                frozen_remaining: 0,
            },
            pos,
        ))
    }

    /// Move the player to a fixed position (for tests).
    #[cfg(test)]
    pub fn set_player_position(&mut self, pos: Position) {
        for (_entity, (_pawn, p)) in self.world.query_mut::<(&PlayerPawn, &mut Position)>() {
            *p = pos;
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }
}
