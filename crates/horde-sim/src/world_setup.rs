//! Entity spawn factories for the simulation world.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use horde_core::components::{Effect, PlayerPawn, Projectile, ProjectilePayload, Zombie};
use horde_core::constants::*;
use horde_core::enums::{EffectKind, Facing};
use horde_core::types::{Position, Vec2};

/// Spawn the player at the world center.
pub fn spawn_player(world: &mut World) -> hecs::Entity {
    let pawn = PlayerPawn {
        size: PLAYER_SIZE,
        speed: PLAYER_SPEED,
        facing: Facing::default(),
        last_fire_tick: None,
    };
    world.spawn((pawn, Position::new(WORLD_SIZE / 2.0, WORLD_SIZE / 2.0)))
}

/// Spawn one zombie just outside a uniformly random world edge.
///
/// Speed and health scale with the progression level at spawn time.
pub fn spawn_zombie(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    level: u32,
    id: u64,
) -> hecs::Entity {
    let side: u8 = rng.gen_range(0..4);
    let (x, y) = match side {
        0 => (rng.gen_range(0.0..WORLD_SIZE), -ZOMBIE_SIZE), // top
        1 => (WORLD_SIZE, rng.gen_range(0.0..WORLD_SIZE)),   // right
        2 => (rng.gen_range(0.0..WORLD_SIZE), WORLD_SIZE),   // bottom
        _ => (-ZOMBIE_SIZE, rng.gen_range(0.0..WORLD_SIZE)), // left
    };

    let speed = ZOMBIE_BASE_SPEED
        + rng.gen_range(0.0..ZOMBIE_SPEED_JITTER)
        + level as f64 * ZOMBIE_SPEED_PER_LEVEL;
    let health = 1 + level / ZOMBIE_HEALTH_LEVEL_DIVISOR;

    let zombie = Zombie {
        id,
        size: ZOMBIE_SIZE,
        speed,
        health,
        max_health: health,
        frozen_remaining: 0,
    };

    world.spawn((zombie, Position::new(x, y)))
}

/// Spawn a projectile at `origin` (its center) with a per-tick velocity.
/// The payload carries power stats snapshotted at fire time.
pub fn spawn_projectile(
    world: &mut World,
    origin: Position,
    velocity: Vec2,
    payload: ProjectilePayload,
) -> hecs::Entity {
    let radius = if payload == ProjectilePayload::Plain {
        PROJECTILE_RADIUS
    } else {
        POWER_PROJECTILE_RADIUS
    };
    let projectile = Projectile {
        velocity,
        traveled: 0.0,
        max_range: PROJECTILE_MAX_RANGE,
        radius,
        payload,
    };
    world.spawn((projectile, origin))
}

/// Spawn a decaying visual effect centered at `origin`.
pub fn spawn_effect(
    world: &mut World,
    kind: EffectKind,
    origin: Position,
    max_radius: f64,
) -> hecs::Entity {
    world.spawn((Effect {
        kind,
        origin,
        max_radius,
        age: 0,
        lifetime: EFFECT_LIFETIME_TICKS,
    },))
}
