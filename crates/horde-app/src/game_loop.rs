//! Game loop thread — runs the simulation engine at the fixed tick rate.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; snapshots land in a
//! shared slot for synchronous polling. The engine itself guarantees the
//! spawner and tick logic are serialized — this thread is the only place
//! session state is ever touched.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use horde_core::constants::TICK_RATE;
use horde_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{GameLoopCommand, GameLoopHandle};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawn the game loop in a new thread and return its handle.
pub fn spawn_game_loop(config: SimConfig) -> GameLoopHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("horde-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &slot);
        })
        .expect("Failed to spawn game loop thread");

    GameLoopHandle {
        command_tx: cmd_tx,
        latest_snapshot,
        thread,
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<horde_core::state::GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (the engine handles phase semantics internally)
        let snapshot = engine.tick();

        // 3. Publish for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horde_core::commands::PlayerCommand;
    use horde_core::enums::GamePhase;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::Start))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 2);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::Start)
        ));
        assert!(matches!(commands[1], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_starts_session_and_shuts_down() {
        let handle = spawn_game_loop(SimConfig::default());
        assert!(handle.send(PlayerCommand::Start));

        // Wait for the loop to pick up Start and publish a Running snapshot.
        let deadline = Instant::now() + Duration::from_secs(2);
        let mut running = false;
        while Instant::now() < deadline {
            if let Some(snap) = handle.snapshot() {
                if snap.phase == GamePhase::Running {
                    running = true;
                    break;
                }
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(running, "Loop should reach Running after Start");

        handle.shutdown();
    }
}
