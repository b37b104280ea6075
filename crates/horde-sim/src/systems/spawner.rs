//! Enemy spawner — fires on its own fixed interval, independent of the
//! rest of the tick ordering, and injects a wave scaled by the level.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use horde_core::constants::{MAX_SPAWN_PER_WAVE, SPAWN_INTERVAL_TICKS};

use crate::session::GameSession;
use crate::world_setup;

/// Check the spawn timer and inject a wave when due.
/// Wave size is `min(level, MAX_SPAWN_PER_WAVE)`.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, session: &mut GameSession, tick: u64) {
    if tick < session.next_spawn_tick {
        return;
    }
    session.next_spawn_tick = tick + SPAWN_INTERVAL_TICKS;

    let count = session.progression.level.min(MAX_SPAWN_PER_WAVE);
    for _ in 0..count {
        let id = session.next_zombie_id;
        session.next_zombie_id += 1;
        world_setup::spawn_zombie(world, rng, session.progression.level, id);
    }
}
