//! View-projection contract
//!
//! The core never touches a display surface: after every transition it hands
//! the full snapshot to a [`View`]. A frontend keeps one visual element per
//! entity id, updates positions for live entities, and removes elements for
//! every id in the garbage set. Removal must tolerate ids that are already
//! gone - "out of bounds" and "collided" can bin related entities in the
//! same tick, and a reset may replay ids the view dropped a frame earlier.

use std::collections::HashMap;

use glam::Vec2;

use crate::sim::State;

/// Anything that can project a state snapshot
pub trait View {
    /// Called with the complete snapshot after every transition
    fn present(&mut self, state: &State);
}

/// Headless reference view: tracks sprite positions in a map and logs the
/// interesting transitions.
#[derive(Debug, Default)]
pub struct ConsoleView {
    sprites: HashMap<String, Vec2>,
    announced_terminal: bool,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of visual elements currently tracked
    pub fn sprite_count(&self) -> usize {
        self.sprites.len()
    }
}

impl View for ConsoleView {
    fn present(&mut self, state: &State) {
        for entity in state.live_entities() {
            let _ = self.sprites.insert(entity.id.clone(), entity.pos);
        }
        for binned in &state.garbage {
            if self.sprites.remove(&binned.id).is_none() {
                // Expected double removal; never an error.
                log::trace!("sprite {} was already removed", binned.id);
            }
        }

        log::debug!(
            "tick {}: {} sprites, score {}",
            state.time,
            self.sprites.len(),
            state.score.total()
        );

        if state.is_terminal() && !self.announced_terminal {
            self.announced_terminal = true;
            if state.game_over {
                log::info!("GAME OVER - final score {}", state.score.total());
            } else {
                log::info!("GAME WON - final score {}", state.score.total());
            }
        }
        if !state.is_terminal() {
            self.announced_terminal = false;
        }
    }
}
