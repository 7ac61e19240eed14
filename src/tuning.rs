//! Data-driven game balance
//!
//! Every balance number the simulation consumes lives here, so rulesets can
//! be tweaked from a JSON file without touching the core. A `Tuning` value
//! is captured into the initial state and travels with every snapshot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance numbers for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Side length of the square play area
    pub canvas_size: f32,

    // === Player ===
    pub player_radius: f32,
    /// Recommended magnitude for Translate/Thrust commands; the input
    /// mapper owns the actual value carried by each event
    pub player_speed: f32,

    // === Projectiles ===
    pub bullet_radius: f32,
    pub bullet_speed: f32,
    pub alien_bullet_radius: f32,
    pub alien_bullet_speed: f32,

    // === Aliens ===
    pub alien_radius: f32,
    pub alien_speed: f32,
    /// Degrees the weave heading advances per tick
    pub alien_turn_rate: f32,
    /// Constant bias added to the rotating weave vector
    pub alien_drift: Vec2,
    /// Ticks between volleys; every live alien fires on the interval
    pub alien_fire_interval: u64,
    /// Kill score per alien destroyed
    pub alien_score: u64,

    // === Scoring ===
    /// Extra radius beyond a hard hit that still scores a graze
    pub graze_distance: f32,

    // === Shields ===
    pub shield_count: u32,
    pub shield_radius: f32,
    pub shield_orbit_radius: f32,
    /// Degrees the shield orbit advances per tick
    pub shield_orbit_rate: f32,

    // === Wave formations ===
    pub max_wave_rows: u32,
    pub max_wave_cols: u32,
    pub wave_x_spacing: f32,
    pub wave_y_spacing: f32,
    pub wave_top_margin: f32,
    /// Per-alien horizontal jitter drawn from the seeded formation stream
    pub wave_jitter: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            bullet_radius: BULLET_RADIUS,
            bullet_speed: BULLET_SPEED,
            alien_bullet_radius: ALIEN_BULLET_RADIUS,
            alien_bullet_speed: ALIEN_BULLET_SPEED,
            alien_radius: ALIEN_RADIUS,
            alien_speed: ALIEN_SPEED,
            alien_turn_rate: ALIEN_TURN_RATE,
            alien_drift: Vec2::new(0.0, ALIEN_DRIFT_Y),
            alien_fire_interval: ALIEN_FIRE_INTERVAL,
            alien_score: ALIEN_SCORE,
            graze_distance: GRAZE_DISTANCE,
            shield_count: SHIELD_COUNT,
            shield_radius: SHIELD_RADIUS,
            shield_orbit_radius: SHIELD_ORBIT_RADIUS,
            shield_orbit_rate: SHIELD_ORBIT_RATE,
            max_wave_rows: MAX_WAVE_ROWS,
            max_wave_cols: MAX_WAVE_COLS,
            wave_x_spacing: WAVE_X_SPACING,
            wave_y_spacing: WAVE_Y_SPACING,
            wave_top_margin: WAVE_TOP_MARGIN,
            wave_jitter: WAVE_JITTER,
        }
    }
}

/// Formation grid for one wave; layout is data, not core logic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveLayout {
    pub rows: u32,
    pub cols: u32,
    pub x_spacing: f32,
    pub y_spacing: f32,
    /// Top-left alien of the grid
    pub origin: Vec2,
    pub jitter: f32,
}

impl Tuning {
    /// Formation for a level: the grid grows with the level up to the caps,
    /// centered horizontally below the top margin.
    pub fn wave_layout(&self, level: u32) -> WaveLayout {
        let rows = (1 + level / 2).clamp(1, self.max_wave_rows);
        let cols = (4 + level).clamp(1, self.max_wave_cols);
        let width = (cols - 1) as f32 * self.wave_x_spacing;
        WaveLayout {
            rows,
            cols,
            x_spacing: self.wave_x_spacing,
            y_spacing: self.wave_y_spacing,
            origin: Vec2::new((self.canvas_size - width) / 2.0, self.wave_top_margin),
            jitter: self.wave_jitter,
        }
    }

    /// Tuning file consulted by the demo binary
    const FILE: &'static str = "tuning.json";

    /// Load tuning from the working directory, falling back to defaults
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", Self::FILE);
                    tuning
                }
                Err(err) => {
                    log::warn!("ignoring malformed {}: {err}", Self::FILE);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Write the current tuning next to the binary
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(Self::FILE, json) {
                    log::warn!("could not write {}: {err}", Self::FILE);
                }
            }
            Err(err) => log::warn!("could not serialize tuning: {err}"),
        }
    }
}
