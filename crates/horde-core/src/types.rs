//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

use crate::constants::GEOMETRY_EPSILON;

/// 2D vector in world space (pixels). y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// 2D position in world space (pixels).
///
/// For boxed entities (player, zombies) this is the top-left corner of an
/// axis-aligned square; for projectiles it is the projectile center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Unit vector, or the zero vector when the input is degenerate.
    /// Never produces NaN for zero-length input.
    pub fn normalized_or_zero(&self) -> Vec2 {
        let len = self.length();
        if len < GEOMETRY_EPSILON {
            Vec2::default()
        } else {
            Vec2::new(self.x / len, self.y / len)
        }
    }

    pub fn scaled(&self, factor: f64) -> Vec2 {
        Vec2::new(self.x * factor, self.y * factor)
    }
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from this position to another.
    pub fn vec_to(&self, other: &Position) -> Vec2 {
        Vec2::new(other.x - self.x, other.y - self.y)
    }

    /// Distance to another position in pixels.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.vec_to(other).length()
    }

    /// Center of a square box whose top-left corner is this position.
    pub fn box_center(&self, size: f64) -> Position {
        Position::new(self.x + size / 2.0, self.y + size / 2.0)
    }

    /// Translate by a vector.
    pub fn offset_by(&self, v: Vec2) -> Position {
        Position::new(self.x + v.x, self.y + v.y)
    }
}

/// Axis-aligned overlap of two square boxes given by top-left corner + side.
pub fn boxes_overlap(a: &Position, a_size: f64, b: &Position, b_size: f64) -> bool {
    a.x < b.x + b_size && a.x + a_size > b.x && a.y < b.y + b_size && a.y + a_size > b.y
}

/// Whether a point lies strictly inside a square box.
/// This is the projectile hit test: point-in-box, not circle-vs-box.
pub fn point_in_box(p: &Position, corner: &Position, size: f64) -> bool {
    p.x > corner.x && p.x < corner.x + size && p.y > corner.y && p.y < corner.y + size
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
