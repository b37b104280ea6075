//! State shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use horde_core::commands::PlayerCommand;
use horde_core::state::GameStateSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Slot the game loop writes its latest snapshot into after each tick.
pub type SnapshotSlot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Handle to a running game loop.
pub struct GameLoopHandle {
    /// Channel sender to forward commands to the game loop thread.
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    /// Latest snapshot for synchronous polling.
    pub latest_snapshot: SnapshotSlot,
    /// Join handle for clean shutdown.
    pub thread: std::thread::JoinHandle<()>,
}

impl GameLoopHandle {
    /// Send a player command; returns false when the loop is gone.
    pub fn send(&self, command: PlayerCommand) -> bool {
        self.command_tx.send(GameLoopCommand::Player(command)).is_ok()
    }

    /// Read the most recent snapshot, if any tick has completed.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }

    /// Request shutdown and wait for the thread to exit.
    pub fn shutdown(self) {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        let _ = self.thread.join();
    }
}
