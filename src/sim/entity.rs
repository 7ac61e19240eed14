//! Simulated entities
//!
//! One plain data struct covers every object in play; behavior is selected
//! by the `kind` tag inside the tick pipeline, never by the entity itself.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Closed set of entity roles; drives movement and collision rule selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Bullet,
    AlienBullet,
    Alien,
    Shield,
}

/// One simulated object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    /// Unique within the owning collection for the entity's lifetime
    pub id: String,
    /// Collision extent (circle model)
    pub radius: f32,
    /// World position, origin top-left, y down
    pub pos: Vec2,
    /// Velocity applied this tick
    pub vel: Vec2,
    /// Velocity promoted to `vel` on the next integration step
    pub pending_vel: Vec2,
    /// Tick of creation; some movement rules use this as a phase offset
    pub created_at: u64,
}

/// Configuration record for [`Entity::new`]
#[derive(Debug, Clone)]
pub struct EntitySpec {
    pub kind: EntityKind,
    pub id: String,
    pub radius: f32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub created_at: u64,
}

impl Entity {
    /// Build an entity from its configuration record; `pending_vel` starts
    /// equal to `vel` so the first integration is a straight continuation.
    pub fn new(spec: EntitySpec) -> Self {
        Self {
            kind: spec.kind,
            id: spec.id,
            radius: spec.radius,
            pos: spec.pos,
            vel: spec.vel,
            pending_vel: spec.vel,
            created_at: spec.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_record() {
        let e = Entity::new(EntitySpec {
            kind: EntityKind::Bullet,
            id: "bullet-7".into(),
            radius: 3.0,
            pos: Vec2::new(10.0, 20.0),
            vel: Vec2::new(0.0, -3.0),
            created_at: 42,
        });
        assert_eq!(e.kind, EntityKind::Bullet);
        assert_eq!(e.pending_vel, e.vel);
        assert_eq!(e.created_at, 42);
    }
}
