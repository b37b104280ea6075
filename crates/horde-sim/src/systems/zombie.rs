//! Zombie behavior system: freeze countdown, player seeking, and contact.

use hecs::World;

use horde_core::components::Zombie;
use horde_core::events::GameEvent;
use horde_core::types::{boxes_overlap, Position};

use crate::session::ProgressionState;
use crate::systems::player;

/// Update every zombie in a single pass.
///
/// Frozen zombies count down and skip both movement and contact. The rest
/// seek the player's current position at their per-instance speed; any
/// zombie whose box then overlaps the player's is buffered for removal and
/// costs exactly one life.
pub fn run(
    world: &mut World,
    progression: &mut ProgressionState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<hecs::Entity>,
) {
    let Some((player_pos, player_size)) = player::player_box(world) else {
        return;
    };

    despawn_buffer.clear();
    for (entity, (zombie, pos)) in world.query_mut::<(&mut Zombie, &mut Position)>() {
        if zombie.is_frozen() {
            zombie.frozen_remaining -= 1;
            continue;
        }

        // Normalized seek; co-located with the player degenerates to a
        // zero vector instead of NaN.
        let dir = pos.vec_to(&player_pos).normalized_or_zero();
        pos.x += dir.x * zombie.speed;
        pos.y += dir.y * zombie.speed;

        if boxes_overlap(pos, zombie.size, &player_pos, player_size) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
        let lives_remaining = progression.lose_life();
        events.push(GameEvent::PlayerHit { lives_remaining });
    }
}
