//! Headless autoplay driver.
//!
//! Starts a session on the game loop thread and plays it from snapshots
//! alone: aims at the nearest zombie, picks powers round-robin at
//! milestones, and prints one HUD line per simulated second.

mod game_loop;
mod state;

use std::time::{Duration, Instant};

use horde_core::commands::PlayerCommand;
use horde_core::enums::{GamePhase, PowerFamily};
use horde_core::state::GameStateSnapshot;
use horde_core::types::Position;
use horde_sim::engine::SimConfig;

/// Wall-clock cap for the demo run.
const MAX_RUN_TIME: Duration = Duration::from_secs(120);

fn main() {
    let handle = game_loop::spawn_game_loop(SimConfig::default());
    handle.send(PlayerCommand::Start);

    let power_order = [PowerFamily::Area, PowerFamily::Chain, PowerFamily::Control];
    let mut next_power = 0;
    let started = Instant::now();
    let mut last_hud_tick = 0u64;

    loop {
        std::thread::sleep(Duration::from_millis(50));
        let Some(snap) = handle.snapshot() else {
            continue;
        };

        match snap.phase {
            GamePhase::Running => {
                if let Some(target) = nearest_zombie_center(&snap) {
                    handle.send(PlayerCommand::Fire { target });
                }
                if snap.hud.control_level > 0
                    && snap.hud.control_cooldown_secs == 0.0
                    && snap.hud.zombie_count >= 5
                {
                    handle.send(PlayerCommand::ActivateControl);
                }
            }
            GamePhase::PowerSelection => {
                let family = power_order[next_power % power_order.len()];
                next_power += 1;
                handle.send(PlayerCommand::SelectPower { family });
            }
            GamePhase::GameOver => {
                println!(
                    "game over: {}",
                    serde_json::to_string(&snap.hud).expect("HUD serializes")
                );
                break;
            }
            GamePhase::NotStarted => {}
        }

        if snap.time.tick >= last_hud_tick + 60 {
            last_hud_tick = snap.time.tick;
            println!(
                "t={:>5.1}s score={} lives={} level={} zombies={}",
                snap.time.elapsed_secs,
                snap.hud.score,
                snap.hud.lives,
                snap.hud.level,
                snap.hud.zombie_count,
            );
        }

        if started.elapsed() > MAX_RUN_TIME {
            println!("time limit reached, shutting down");
            break;
        }
    }

    handle.shutdown();
}

/// Center of the zombie closest to the player, from the snapshot alone.
fn nearest_zombie_center(snap: &GameStateSnapshot) -> Option<Position> {
    let player = snap.player.position.box_center(snap.player.size);
    snap.zombies
        .iter()
        .map(|z| z.position.box_center(z.size))
        .min_by(|a, b| {
            player
                .distance_to(a)
                .total_cmp(&player.distance_to(b))
        })
}
