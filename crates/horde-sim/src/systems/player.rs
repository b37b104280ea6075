//! Player movement system.
//!
//! Applies held-direction input at a fixed per-axis speed, clamps the
//! player to the world bounds, and updates facing from the last nonzero
//! movement vector.

use hecs::World;

use horde_core::components::PlayerPawn;
use horde_core::constants::WORLD_SIZE;
use horde_core::enums::Facing;
use horde_core::types::Position;

use crate::session::InputState;

pub fn run(world: &mut World, input: &InputState) {
    let mv = input.movement_vec();
    for (_entity, (pawn, pos)) in world.query_mut::<(&mut PlayerPawn, &mut Position)>() {
        pos.x = (pos.x + mv.x * pawn.speed).clamp(0.0, WORLD_SIZE - pawn.size);
        pos.y = (pos.y + mv.y * pawn.speed).clamp(0.0, WORLD_SIZE - pawn.size);
        if let Some(facing) = Facing::from_vec(mv) {
            pawn.facing = facing;
        }
    }
}

/// Player box (top-left corner + side), used by seek and contact checks.
pub fn player_box(world: &World) -> Option<(Position, f64)> {
    world
        .query::<(&PlayerPawn, &Position)>()
        .iter()
        .next()
        .map(|(_, (pawn, pos))| (*pos, pawn.size))
}

/// Player box center, the projectile origin.
pub fn player_center(world: &World) -> Option<Position> {
    player_box(world).map(|(pos, size)| pos.box_center(size))
}
