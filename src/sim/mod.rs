//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One ordered event stream folded through `transition`
//! - Seeded RNG only
//! - Stable entity ordering (collection order, ids from a monotonic counter)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, graze_hits, overlapping_ids};
pub use entity::{Entity, EntityKind, EntitySpec};
pub use state::{GameEvent, Score, State};
pub use tick::{spawn_wave, transition};
