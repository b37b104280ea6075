//! Projectile movement and combat resolution.
//!
//! Projectiles are processed sequentially in a pre-collected entity list
//! so each one sees the world as left by the previous — a later
//! projectile cannot hit a zombie an earlier one already killed this
//! tick. Each projectile resolves at most one hit per tick.

use hecs::{Entity, World};

use horde_core::components::{Projectile, ProjectilePayload, Zombie};
use horde_core::constants::{CHAIN_STRIKE_DAMAGE, KILL_SCORE, PROJECTILE_SPEED};
use horde_core::enums::EffectKind;
use horde_core::events::GameEvent;
use horde_core::types::{point_in_box, Position};

use crate::session::ProgressionState;
use crate::world_setup;

pub fn run(world: &mut World, progression: &mut ProgressionState, events: &mut Vec<GameEvent>) {
    let projectiles: Vec<Entity> = world
        .query_mut::<&Projectile>()
        .into_iter()
        .map(|(entity, _)| entity)
        .collect();

    for entity in projectiles {
        step(world, progression, events, entity);
    }
}

/// Advance one projectile and resolve its collision, if any.
fn step(
    world: &mut World,
    progression: &mut ProgressionState,
    events: &mut Vec<GameEvent>,
    entity: Entity,
) {
    // Copy the projectile out so the world is free for zombie queries and
    // despawns during resolution; write back (or despawn) at the end.
    let (mut pos, mut proj) = match world.query_one_mut::<(&Position, &Projectile)>(entity) {
        Ok((pos, proj)) => (*pos, proj.clone()),
        Err(_) => return,
    };

    pos = pos.offset_by(proj.velocity);
    proj.traveled += proj.velocity.length();

    let remove = proj.traveled > proj.max_range
        || resolve_hit(world, progression, events, &pos, &mut proj);

    if remove {
        let _ = world.despawn(entity);
    } else if let Ok((w_pos, w_proj)) =
        world.query_one_mut::<(&mut Position, &mut Projectile)>(entity)
    {
        *w_pos = pos;
        *w_proj = proj;
    }
}

/// Resolve a potential hit at the projectile's new position.
/// Returns true when the projectile terminates.
fn resolve_hit(
    world: &mut World,
    progression: &mut ProgressionState,
    events: &mut Vec<GameEvent>,
    pos: &Position,
    proj: &mut Projectile,
) -> bool {
    match &mut proj.payload {
        ProjectilePayload::Plain => {
            let Some(hit) = find_struck(world, pos, &[]) else {
                return false;
            };
            apply_damage(world, progression, events, hit.entity, 1);
            true
        }
        ProjectilePayload::Area { damage, radius } => {
            let Some(hit) = find_struck(world, pos, &[]) else {
                return false;
            };
            let damage = *damage;
            let radius = *radius;

            // Everything within the blast radius of the impact point takes
            // the blast damage, the struck zombie included (distance 0).
            let victims: Vec<Entity> = world
                .query_mut::<(&Zombie, &Position)>()
                .into_iter()
                .filter(|(_, (_, zp))| hit.corner.distance_to(zp) < radius)
                .map(|(entity, _)| entity)
                .collect();
            for victim in victims {
                apply_damage(world, progression, events, victim, damage);
            }

            world_setup::spawn_effect(world, EffectKind::Blast, hit.center, radius);
            true
        }
        ProjectilePayload::Chain {
            remaining,
            hit_ids,
            trail,
        } => {
            let Some(hit) = find_struck(world, pos, hit_ids) else {
                return false;
            };
            apply_damage(world, progression, events, hit.entity, CHAIN_STRIKE_DAMAGE);
            hit_ids.push(hit.id);
            trail.push(hit.center);
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                return true;
            }

            // Retarget the nearest zombie not yet struck; none left
            // terminates the chain early.
            let mut nearest: Option<(f64, Position)> = None;
            for (_, (zombie, zp)) in world.query_mut::<(&Zombie, &Position)>() {
                if hit_ids.contains(&zombie.id) {
                    continue;
                }
                let center = zp.box_center(zombie.size);
                let dist = pos.distance_to(&center);
                if nearest.map_or(true, |(best, _)| dist < best) {
                    nearest = Some((dist, center));
                }
            }
            match nearest {
                Some((_, target)) => {
                    let dir = pos.vec_to(&target).normalized_or_zero();
                    if dir == horde_core::types::Vec2::default() {
                        // Co-located target: keep flying on the old heading.
                        return false;
                    }
                    proj.velocity = dir.scaled(PROJECTILE_SPEED);
                    false
                }
                None => true,
            }
        }
    }
}

/// A zombie struck by a projectile.
struct Struck {
    entity: Entity,
    id: u64,
    /// Top-left corner, the impact point for blast distance checks.
    corner: Position,
    center: Position,
}

/// Find the zombie whose box contains the projectile center, excluding
/// already-hit ids. Ties resolve to the lowest spawn id so the outcome
/// matches spawn order regardless of archetype storage order.
fn find_struck(world: &mut World, point: &Position, exclude: &[u64]) -> Option<Struck> {
    let mut best: Option<Struck> = None;
    for (entity, (zombie, zp)) in world.query_mut::<(&Zombie, &Position)>() {
        if exclude.contains(&zombie.id) {
            continue;
        }
        if !point_in_box(point, zp, zombie.size) {
            continue;
        }
        if best.as_ref().map_or(true, |b| zombie.id < b.id) {
            best = Some(Struck {
                entity,
                id: zombie.id,
                corner: *zp,
                center: zp.box_center(zombie.size),
            });
        }
    }
    best
}

/// Apply damage to one zombie; on death, remove it exactly once and credit
/// score and the level-kill counter, firing a level-up when the threshold
/// is met.
fn apply_damage(
    world: &mut World,
    progression: &mut ProgressionState,
    events: &mut Vec<GameEvent>,
    target: Entity,
    amount: u32,
) {
    let killed = match world.get::<&mut Zombie>(target) {
        Ok(mut zombie) => {
            zombie.health = zombie.health.saturating_sub(amount);
            (zombie.health == 0).then_some(zombie.id)
        }
        Err(_) => return,
    };

    if let Some(zombie_id) = killed {
        let _ = world.despawn(target);
        progression.record_kill();
        events.push(GameEvent::ZombieSlain {
            zombie_id,
            score: KILL_SCORE,
        });
        if let Some(level) = progression.try_level_up() {
            events.push(GameEvent::LevelUp { level });
        }
    }
}
