//! Visual effect decay system.

use hecs::World;

use horde_core::components::Effect;

/// Advance every effect and remove the fully decayed ones.
/// Uses the shared despawn buffer to keep iteration removal-safe.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<hecs::Entity>) {
    despawn_buffer.clear();
    for (entity, effect) in world.query_mut::<&mut Effect>() {
        effect.advance();
        if effect.is_expired() {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
