//! Torus Invaders - a wraparound space-invaders simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `view`: View-projection contract consumed by frontends

pub mod sim;
pub mod tuning;
pub mod view;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// External clock interval feeding `Tick` events (milliseconds)
    pub const TICK_INTERVAL_MS: u64 = 10;

    /// Side length of the square play area; wrapped axes wrap at this size
    pub const CANVAS_SIZE: f32 = 600.0;

    /// Player defaults - the ship sits low on the canvas, facing up
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Bullet defaults
    pub const BULLET_RADIUS: f32 = 3.0;
    pub const BULLET_SPEED: f32 = 3.0;

    /// Alien defaults
    pub const ALIEN_RADIUS: f32 = 10.0;
    pub const ALIEN_SPEED: f32 = 3.0;
    /// Degrees the weave heading advances per tick
    pub const ALIEN_TURN_RATE: f32 = 4.0;
    /// Constant downward bias added to the rotating weave vector
    pub const ALIEN_DRIFT_Y: f32 = 0.4;
    /// Score per alien destroyed
    pub const ALIEN_SCORE: u64 = 5;

    /// Enemy fire control
    pub const ALIEN_FIRE_INTERVAL: u64 = 60;
    pub const ALIEN_BULLET_RADIUS: f32 = 3.0;
    pub const ALIEN_BULLET_SPEED: f32 = 3.0;

    /// Extra radius beyond a hard hit that still scores a graze
    pub const GRAZE_DISTANCE: f32 = 12.0;

    /// Shield defaults - shields orbit the player
    pub const SHIELD_COUNT: u32 = 3;
    pub const SHIELD_RADIUS: f32 = 12.0;
    pub const SHIELD_ORBIT_RADIUS: f32 = 60.0;
    /// Degrees the shield orbit advances per tick
    pub const SHIELD_ORBIT_RATE: f32 = 2.0;

    /// Wave formation caps and grid geometry
    pub const MAX_WAVE_ROWS: u32 = 4;
    pub const MAX_WAVE_COLS: u32 = 10;
    pub const WAVE_X_SPACING: f32 = 50.0;
    pub const WAVE_Y_SPACING: f32 = 40.0;
    pub const WAVE_TOP_MARGIN: f32 = 60.0;
    pub const WAVE_JITTER: f32 = 6.0;
}

/// Rotate a vector by `deg` degrees.
///
/// Screen coordinates have y pointing down, so positive degrees rotate
/// clockwise on screen.
#[inline]
pub fn rotate_deg(v: Vec2, deg: f32) -> Vec2 {
    let (sin, cos) = deg.to_radians().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Unit vector pointing `deg` degrees clockwise from screen-up `(0, -1)`
#[inline]
pub fn unit_in_direction(deg: f32) -> Vec2 {
    rotate_deg(Vec2::new(0.0, -1.0), deg)
}

/// Wrap both axes onto the `[0, size]` torus
#[inline]
pub fn torus_wrap(pos: Vec2, size: f32) -> Vec2 {
    Vec2::new(wrap_coord(pos.x, size), wrap_coord(pos.y, size))
}

/// Wrap the x axis only; y passes through for out-of-bounds culling
#[inline]
pub fn wrap_x(pos: Vec2, size: f32) -> Vec2 {
    Vec2::new(wrap_coord(pos.x, size), pos.y)
}

#[inline]
fn wrap_coord(v: f32, size: f32) -> f32 {
    if v < 0.0 {
        v + size
    } else if v > size {
        v - size
    } else {
        v
    }
}
