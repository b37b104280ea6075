//! Snapshot system: queries the ECS world and builds a GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use horde_core::components::{Effect, PlayerPawn, Projectile, Zombie};
use horde_core::constants::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use horde_core::enums::GamePhase;
use horde_core::events::GameEvent;
use horde_core::state::*;
use horde_core::types::{Position, SimTime, Vec2};

use crate::session::GameSession;

/// Build the complete per-tick snapshot.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    session: &GameSession,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let (player, camera) = build_player(world);
    let zombies = build_zombies(world);
    GameStateSnapshot {
        time: *time,
        phase,
        hud: build_hud(session, zombies.len() as u32, time.tick),
        player,
        camera,
        zombies,
        projectiles: build_projectiles(world),
        effects: build_effects(world),
        events,
    }
}

/// Player view plus the camera offset that keeps the player centered.
fn build_player(world: &World) -> (PlayerView, CameraView) {
    world
        .query::<(&PlayerPawn, &Position)>()
        .iter()
        .next()
        .map(|(_, (pawn, pos))| {
            let camera = CameraView {
                offset: Vec2::new(
                    pos.x - VIEWPORT_WIDTH / 2.0 + pawn.size / 2.0,
                    pos.y - VIEWPORT_HEIGHT / 2.0 + pawn.size / 2.0,
                ),
            };
            (
                PlayerView {
                    position: *pos,
                    size: pawn.size,
                    facing: pawn.facing,
                },
                camera,
            )
        })
        .unwrap_or_default()
}

fn build_zombies(world: &World) -> Vec<ZombieView> {
    let mut zombies: Vec<ZombieView> = world
        .query::<(&Zombie, &Position)>()
        .iter()
        .map(|(_, (zombie, pos))| ZombieView {
            id: zombie.id,
            position: *pos,
            size: zombie.size,
            frozen: zombie.is_frozen(),
            health_fraction: zombie.health_fraction(),
        })
        .collect();

    zombies.sort_by_key(|z| z.id);
    zombies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (proj, pos))| ProjectileView {
            position: *pos,
            radius: proj.radius,
            power: proj.payload.family(),
            trail: match &proj.payload {
                horde_core::components::ProjectilePayload::Chain { trail, .. } => trail.clone(),
                _ => Vec::new(),
            },
        })
        .collect()
}

fn build_effects(world: &World) -> Vec<EffectView> {
    world
        .query::<&Effect>()
        .iter()
        .map(|(_, effect)| EffectView {
            kind: effect.kind,
            position: effect.origin,
            radius: effect.radius(),
            alpha: effect.alpha(),
        })
        .collect()
}

fn build_hud(session: &GameSession, zombie_count: u32, tick: u64) -> HudView {
    HudView {
        score: session.progression.score,
        lives: session.progression.lives,
        level: session.progression.level,
        zombie_count,
        kills_this_level: session.progression.kills_this_level,
        kills_needed: session.progression.kills_needed,
        area_level: session.powers.area_level,
        chain_level: session.powers.chain_level,
        control_level: session.powers.control_level,
        control_cooldown_secs: session.powers.control_cooldown_remaining_secs(tick),
    }
}
