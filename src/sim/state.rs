//! Game state and event types
//!
//! The state is a value: every event folds the current snapshot into a
//! brand-new one through [`crate::sim::transition`], and nothing here is
//! ever mutated in place by callers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind, EntitySpec};
use crate::tuning::Tuning;
use crate::{torus_wrap, unit_in_direction};

/// Events folded through the transition function, in arrival order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Fixed-interval clock tick carrying the elapsed tick ordinal
    Tick { elapsed: u64 },
    /// Lateral movement intent change (one command per key edge)
    Translate { magnitude: f32 },
    /// Vertical movement intent change (one command per key edge)
    Thrust { magnitude: f32 },
    /// Single-shot fire command
    Shoot,
    /// Replace the alien formation with the one for `level`
    SpawnWave { level: u32 },
    /// Begin the two-phase reset handshake
    Reset,
}

/// Score components, accumulated separately and summed for display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Near-miss points, accrued every tick a shot stays in the graze band
    pub graze: u64,
    /// Points for destroyed aliens
    pub kill: u64,
}

impl Score {
    pub fn total(&self) -> u64 {
        self.graze + self.kill
    }
}

/// Complete world snapshot (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Run seed; wave formations derive their jitter from it
    pub seed: u64,
    /// Last-processed tick ordinal
    pub time: u64,
    /// Exactly one player, never removed except via game over
    pub player: Entity,
    /// Orbiting defensive entities
    pub shields: Vec<Entity>,
    /// Player-fired projectiles
    pub bullets: Vec<Entity>,
    /// Enemy-fired projectiles
    pub alien_bullets: Vec<Entity>,
    /// Enemy entities
    pub aliens: Vec<Entity>,
    /// Entities removed this tick, retained one frame for the view
    pub garbage: Vec<Entity>,
    /// Monotonic counter seeding new entity ids
    pub obj_count: u64,
    pub score: Score,
    /// Total alien bullets ever fired; backs the win precondition
    pub alien_shots_fired: u64,
    /// True for exactly one tick after Reset; the next tick reinitializes
    pub reset_pending: bool,
    /// Terminal loss flag, monotonic once true
    pub game_over: bool,
    /// Terminal win flag, monotonic once true
    pub game_won: bool,
    /// Balance numbers this run was started with
    pub tuning: Tuning,
}

impl State {
    /// Build the designated initial state: player low on the canvas with a
    /// ring of shields in orbit, no projectiles, no aliens.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let canvas = tuning.canvas_size;
        let player_pos = Vec2::new(canvas / 2.0, canvas * 0.8);
        let player = Entity::new(EntitySpec {
            kind: EntityKind::Player,
            id: "player".to_string(),
            radius: tuning.player_radius,
            pos: player_pos,
            vel: Vec2::ZERO,
            created_at: 0,
        });

        let mut state = Self {
            seed,
            time: 0,
            player,
            shields: Vec::new(),
            bullets: Vec::new(),
            alien_bullets: Vec::new(),
            aliens: Vec::new(),
            garbage: Vec::new(),
            obj_count: 0,
            score: Score::default(),
            alien_shots_fired: 0,
            reset_pending: false,
            game_over: false,
            game_won: false,
            tuning,
        };

        let count = state.tuning.shield_count;
        for i in 0..count {
            let angle = i as f32 * 360.0 / count as f32;
            let pos = player_pos + unit_in_direction(angle) * state.tuning.shield_orbit_radius;
            let n = state.next_entity_id();
            state.shields.push(Entity::new(EntitySpec {
                kind: EntityKind::Shield,
                id: format!("shield-{n}"),
                radius: state.tuning.shield_radius,
                pos: torus_wrap(pos, canvas),
                vel: Vec2::ZERO,
                created_at: 0,
            }));
        }

        state
    }

    /// Allocate the next id-seeding counter value
    pub fn next_entity_id(&mut self) -> u64 {
        let id = self.obj_count;
        self.obj_count += 1;
        id
    }

    /// Whether a terminal flag has been reached
    pub fn is_terminal(&self) -> bool {
        self.game_over || self.game_won
    }

    /// All live entities, player first, in stable collection order
    pub fn live_entities(&self) -> impl Iterator<Item = &Entity> {
        std::iter::once(&self.player)
            .chain(self.shields.iter())
            .chain(self.bullets.iter())
            .chain(self.alien_bullets.iter())
            .chain(self.aliens.iter())
    }
}
