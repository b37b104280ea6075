//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Threshold below which a vector is treated as zero-length.
pub const GEOMETRY_EPSILON: f64 = 1e-9;

// --- World ---

/// Side length of the square world (pixels).
pub const WORLD_SIZE: f64 = 5000.0;

/// Viewport dimensions used for camera centering (pixels).
/// Rendering is external; these only feed the camera offset math.
pub const VIEWPORT_WIDTH: f64 = 800.0;
pub const VIEWPORT_HEIGHT: f64 = 600.0;

// --- Player ---

/// Player box side (pixels).
pub const PLAYER_SIZE: f64 = 40.0;

/// Player movement speed per axis (pixels per tick).
pub const PLAYER_SPEED: f64 = 5.0;

/// Lives at session start.
pub const STARTING_LIVES: u32 = 3;

/// Minimum ticks between shots.
pub const FIRE_COOLDOWN_TICKS: u64 = 12;

// --- Zombies ---

/// Zombie box side (pixels).
pub const ZOMBIE_SIZE: f64 = 30.0;

/// Base zombie speed (pixels per tick).
pub const ZOMBIE_BASE_SPEED: f64 = 1.0;

/// Random speed jitter added at spawn: uniform in [0, this).
pub const ZOMBIE_SPEED_JITTER: f64 = 1.5;

/// Speed added per progression level.
pub const ZOMBIE_SPEED_PER_LEVEL: f64 = 0.2;

/// Levels per extra point of zombie health (health = 1 + level / this).
pub const ZOMBIE_HEALTH_LEVEL_DIVISOR: u32 = 3;

// --- Projectiles ---

/// Projectile speed (pixels per tick).
pub const PROJECTILE_SPEED: f64 = 10.0;

/// Maximum distance a projectile may travel (pixels).
pub const PROJECTILE_MAX_RANGE: f64 = 300.0;

/// Radius of a plain projectile (pixels, visual/snapshot only).
pub const PROJECTILE_RADIUS: f64 = 5.0;

/// Radius of a power-carrying projectile.
pub const POWER_PROJECTILE_RADIUS: f64 = 8.0;

// --- Scoring and progression ---

/// Score awarded per zombie kill.
pub const KILL_SCORE: u64 = 10;

/// Kill threshold for the first level.
pub const INITIAL_KILLS_NEEDED: u32 = 10;

/// Threshold after a level-up: KILLS_NEEDED_BASE + KILLS_NEEDED_PER_LEVEL * level.
pub const KILLS_NEEDED_BASE: u32 = 10;
pub const KILLS_NEEDED_PER_LEVEL: u32 = 2;

/// Every Nth level opens power selection.
pub const POWER_MILESTONE_INTERVAL: u32 = 5;

// --- Spawner ---

/// Ticks between spawn waves (1 second).
pub const SPAWN_INTERVAL_TICKS: u64 = 60;

/// Zombies per wave: min(level, this).
pub const MAX_SPAWN_PER_WAVE: u32 = 10;

// --- Powers ---

/// Area damage: 1 + level / 2.
pub const AREA_DAMAGE_LEVEL_DIVISOR: u32 = 2;

/// Area blast radius: base + level * per-level (pixels).
pub const AREA_BASE_RADIUS: f64 = 100.0;
pub const AREA_RADIUS_PER_LEVEL: f64 = 20.0;

/// Chain strike cap: min(1 + level, this).
pub const CHAIN_MAX_STRIKES: u32 = 3;

/// Damage dealt by each chain strike.
pub const CHAIN_STRIKE_DAMAGE: u32 = 1;

/// Freeze duration: base + (level - 1) * per-level (ticks).
pub const FREEZE_BASE_TICKS: u32 = 300;
pub const FREEZE_TICKS_PER_LEVEL: u32 = 60;

/// Control power cooldown (seconds, against a last-used tick stamp).
pub const CONTROL_COOLDOWN_SECS: f64 = 30.0;

/// Shot-selection weight contributed per level of a ranged power.
pub const POWER_WEIGHT_PER_LEVEL: f64 = 0.2;

// --- Effects ---

/// Ticks a decay effect takes to reach full radius and zero alpha.
pub const EFFECT_LIFETIME_TICKS: u32 = 20;

/// Radius of the freeze pulse effect (pixels).
pub const FREEZE_PULSE_RADIUS: f64 = 200.0;
