//! Pairwise collision detection
//!
//! Everything in play is a circle, so the whole collision model is an
//! overlap threshold applied across pairs of collections. Resolution
//! (removal, scoring) happens in the tick pipeline; this module only
//! answers geometric questions about a post-movement snapshot.

use std::collections::HashSet;

use super::entity::Entity;

/// Strict circle-overlap test: `|a - b| < rA + rB`
#[inline]
pub fn circles_overlap(a: &Entity, b: &Entity) -> bool {
    a.pos.distance(b.pos) < a.radius + b.radius
}

/// Sweep the cross product of two collections and return the id sets of
/// entities on each side that overlap at least one entity on the other.
///
/// An entity matching several pairs appears once per side; removal is keyed
/// by id, not by pair count.
pub fn overlapping_ids(xs: &[Entity], ys: &[Entity]) -> (HashSet<String>, HashSet<String>) {
    let mut hit_xs = HashSet::new();
    let mut hit_ys = HashSet::new();
    for x in xs {
        for y in ys {
            if circles_overlap(x, y) {
                hit_xs.insert(x.id.clone());
                hit_ys.insert(y.id.clone());
            }
        }
    }
    (hit_xs, hit_ys)
}

/// Count shots inside the graze band around the player.
///
/// The threshold is inflated by `graze_distance`, strictly looser than the
/// hard-collision threshold; callers pass the post-removal shot list so a
/// hard hit never doubles as a graze. Counted fresh every tick - a shot
/// loitering in the band accrues points continuously.
pub fn graze_hits(player: &Entity, shots: &[Entity], graze_distance: f32) -> u64 {
    shots
        .iter()
        .filter(|s| player.pos.distance(s.pos) < player.radius + s.radius + graze_distance)
        .count() as u64
}
