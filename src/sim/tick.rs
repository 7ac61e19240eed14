//! The transition function
//!
//! `transition` folds one event into the current snapshot and returns the
//! next one. Tick events run the full per-frame pipeline: movement
//! integration with wrap/cull, enemy fire control, collision resolution and
//! scoring, then terminal detection. Everything is a pure function of
//! `(state, event)` - replaying the same event stream reproduces the same
//! states bit for bit.

use std::collections::HashSet;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{circles_overlap, graze_hits, overlapping_ids};
use super::entity::{Entity, EntityKind, EntitySpec};
use super::state::{GameEvent, State};
use crate::{rotate_deg, torus_wrap, unit_in_direction, wrap_x};

/// Produce the next state for one event.
///
/// Gameplay events are ignored once a terminal flag is set; only the
/// Reset -> Tick handshake leaves a terminal state.
pub fn transition(state: &State, event: &GameEvent) -> State {
    let mut next = state.clone();
    match event {
        GameEvent::Tick { elapsed } => apply_tick(&mut next, *elapsed),
        GameEvent::Translate { magnitude } if !next.is_terminal() => {
            next.player.pending_vel = unit_in_direction(90.0) * *magnitude;
        }
        GameEvent::Thrust { magnitude } if !next.is_terminal() => {
            next.player.pending_vel = unit_in_direction(0.0) * *magnitude;
        }
        GameEvent::Shoot if !next.is_terminal() => spawn_bullet(&mut next),
        GameEvent::SpawnWave { level } if !next.is_terminal() => spawn_wave(&mut next, *level),
        GameEvent::Reset => apply_reset(&mut next),
        _ => {}
    }
    next
}

/// The per-frame pipeline, in the order the rules depend on each other
fn apply_tick(state: &mut State, elapsed: u64) {
    if state.reset_pending {
        *state = State::new(state.seed, state.tuning.clone());
        return;
    }
    if state.is_terminal() {
        return;
    }

    // The view had one frame to consume the previous tick's garbage.
    state.garbage.clear();
    state.time = elapsed;

    move_player(state);
    move_shields(state);
    move_bullets(state);
    move_alien_bullets(state);
    move_aliens(state);
    alien_fire(state);
    resolve_collisions(state);
    check_win(state);
}

/// `pos' = wrap(pos + vel)`, then the commanded velocity catches up.
/// Input therefore takes effect one tick after the command arrives.
fn move_player(state: &mut State) {
    let canvas = state.tuning.canvas_size;
    let p = &mut state.player;
    p.pos = torus_wrap(p.pos + p.vel, canvas);
    p.vel = p.pending_vel;
}

/// Shields integrate like everything else; their pending velocity chases a
/// point on the player's orbit circle, advanced by the orbit rate, so they
/// follow translation input and rotate at the same time.
fn move_shields(state: &mut State) {
    let canvas = state.tuning.canvas_size;
    let orbit_r = state.tuning.shield_orbit_radius;
    let rate = state.tuning.shield_orbit_rate;
    let player_pos = state.player.pos;
    for shield in &mut state.shields {
        shield.pos = torus_wrap(shield.pos + shield.vel, canvas);
        shield.vel = shield.pending_vel;

        let rel = shield.pos - player_pos;
        let rel = if rel.length_squared() > f32::EPSILON {
            rel * (orbit_r / rel.length())
        } else {
            unit_in_direction(0.0) * orbit_r
        };
        shield.pending_vel = player_pos + rotate_deg(rel, rate) - shield.pos;
    }
}

/// Bullets fly straight up at a pinned speed; x wraps, a y exit bins them
fn move_bullets(state: &mut State) {
    let canvas = state.tuning.canvas_size;
    let up = unit_in_direction(0.0) * state.tuning.bullet_speed;
    let mut live = Vec::with_capacity(state.bullets.len());
    for mut bullet in state.bullets.drain(..) {
        bullet.pos = wrap_x(bullet.pos + bullet.vel, canvas);
        bullet.vel = up;
        bullet.pending_vel = up;
        if out_of_bounds_y(bullet.pos, canvas) {
            state.garbage.push(bullet);
        } else {
            live.push(bullet);
        }
    }
    state.bullets = live;
}

/// Alien shots translate on their spawn heading with no wrap at all
fn move_alien_bullets(state: &mut State) {
    let canvas = state.tuning.canvas_size;
    let mut live = Vec::with_capacity(state.alien_bullets.len());
    for mut shot in state.alien_bullets.drain(..) {
        shot.pos += shot.vel;
        shot.vel = shot.pending_vel;
        if out_of_bounds_y(shot.pos, canvas) {
            state.garbage.push(shot);
        } else {
            live.push(shot);
        }
    }
    state.alien_bullets = live;
}

/// Weave: a rotating unit heading plus a constant drift, phase-offset by
/// creation time. A pure function of the tick count - no hidden state.
fn move_aliens(state: &mut State) {
    let canvas = state.tuning.canvas_size;
    let speed = state.tuning.alien_speed;
    let turn = state.tuning.alien_turn_rate;
    let drift = state.tuning.alien_drift;
    let elapsed = state.time;
    for alien in &mut state.aliens {
        alien.pos = torus_wrap(alien.pos + alien.vel, canvas);
        alien.vel = alien.pending_vel;
        let heading = (elapsed + alien.created_at) as f32 * turn;
        alien.pending_vel = unit_in_direction(heading) * speed + drift;
    }
}

fn out_of_bounds_y(pos: Vec2, canvas: f32) -> bool {
    pos.y >= canvas || pos.y <= 0.0
}

/// Every `alien_fire_interval` ticks each live alien fires once, displaced
/// backward along its heading. Shot ids mix the alien id, the tick, and the
/// object counter so no allocator beyond the counter is needed.
fn alien_fire(state: &mut State) {
    if state.aliens.is_empty() || !state.time.is_multiple_of(state.tuning.alien_fire_interval) {
        return;
    }
    let down = unit_in_direction(180.0) * state.tuning.alien_bullet_speed;
    let shot_radius = state.tuning.alien_bullet_radius;
    let muzzles: Vec<(String, Vec2)> = state
        .aliens
        .iter()
        .map(|alien| {
            let heading = if alien.vel.length_squared() > f32::EPSILON {
                alien.vel.normalize()
            } else {
                unit_in_direction(180.0)
            };
            let muzzle = alien.pos - heading * (alien.radius + shot_radius);
            (alien.id.clone(), muzzle)
        })
        .collect();

    state.alien_shots_fired += muzzles.len() as u64;
    for (alien_id, pos) in muzzles {
        let n = state.next_entity_id();
        state.alien_bullets.push(Entity::new(EntitySpec {
            kind: EntityKind::AlienBullet,
            id: format!("{alien_id}-shot-{}-{n}", state.time),
            radius: shot_radius,
            pos,
            vel: down,
            created_at: state.time,
        }));
    }
}

/// Sweep every defined collection pair on the post-movement snapshot, bin
/// each matched entity exactly once, then score kills and grazes.
fn resolve_collisions(state: &mut State) {
    let mut dead_bullets: HashSet<String> = HashSet::new();
    let mut dead_aliens: HashSet<String> = HashSet::new();
    let mut dead_shields: HashSet<String> = HashSet::new();
    let mut dead_shots: HashSet<String> = HashSet::new();
    let mut player_hit = false;

    let (bullets, aliens) = overlapping_ids(&state.bullets, &state.aliens);
    dead_bullets.extend(bullets);
    dead_aliens.extend(aliens);

    let (bullets, shields) = overlapping_ids(&state.bullets, &state.shields);
    dead_bullets.extend(bullets);
    dead_shields.extend(shields);

    let (shields, aliens) = overlapping_ids(&state.shields, &state.aliens);
    dead_shields.extend(shields);
    dead_aliens.extend(aliens);

    let (shields, shots) = overlapping_ids(&state.shields, &state.alien_bullets);
    dead_shields.extend(shields);
    dead_shots.extend(shots);

    for alien in &state.aliens {
        if circles_overlap(&state.player, alien) {
            dead_aliens.insert(alien.id.clone());
            player_hit = true;
        }
    }
    for shot in &state.alien_bullets {
        if circles_overlap(&state.player, shot) {
            dead_shots.insert(shot.id.clone());
            player_hit = true;
        }
    }

    let kills = dead_aliens.len() as u64;

    bin_dead(&mut state.bullets, &dead_bullets, &mut state.garbage);
    bin_dead(&mut state.aliens, &dead_aliens, &mut state.garbage);
    bin_dead(&mut state.shields, &dead_shields, &mut state.garbage);
    bin_dead(&mut state.alien_bullets, &dead_shots, &mut state.garbage);

    state.score.kill += kills * state.tuning.alien_score;
    state.score.graze += graze_hits(
        &state.player,
        &state.alien_bullets,
        state.tuning.graze_distance,
    );

    if player_hit && !state.game_over {
        state.game_over = true;
        log::info!("player hit at tick {}, final score {}", state.time, state.score.total());
    }
}

/// A wave must have actually started (at least one alien shot fired) before
/// an empty alien collection counts as a win. Loss takes precedence when
/// both land on the same tick.
fn check_win(state: &mut State) {
    if state.game_over || state.game_won {
        return;
    }
    if state.aliens.is_empty() && state.alien_shots_fired > 0 {
        state.game_won = true;
        log::info!("wave cleared at tick {}, score {}", state.time, state.score.total());
    }
}

/// Move matched entities to garbage in one step, keyed by id
fn bin_dead(live: &mut Vec<Entity>, dead: &HashSet<String>, garbage: &mut Vec<Entity>) {
    if dead.is_empty() {
        return;
    }
    let mut kept = Vec::with_capacity(live.len());
    for entity in live.drain(..) {
        if dead.contains(&entity.id) {
            garbage.push(entity);
        } else {
            kept.push(entity);
        }
    }
    *live = kept;
}

/// Phase one of the reset handshake: bin every live non-player entity and
/// flag the pending reset. The next tick swaps in the initial state, so the
/// view gets exactly one frame to observe the garbage.
fn apply_reset(state: &mut State) {
    let mut garbage = Vec::new();
    garbage.append(&mut state.shields);
    garbage.append(&mut state.bullets);
    garbage.append(&mut state.alien_bullets);
    garbage.append(&mut state.aliens);
    log::info!("reset requested, {} entities binned", garbage.len());
    state.garbage = garbage;
    state.reset_pending = true;
}

/// One bullet at the player's muzzle, pinned to full speed next integration
fn spawn_bullet(state: &mut State) {
    let pos = state.player.pos + unit_in_direction(0.0) * state.player.radius;
    let n = state.next_entity_id();
    state.bullets.push(Entity::new(EntitySpec {
        kind: EntityKind::Bullet,
        id: format!("bullet-{n}"),
        radius: state.tuning.bullet_radius,
        pos,
        vel: Vec2::ZERO,
        created_at: state.time,
    }));
}

/// Replace the alien formation with the one for `level`.
///
/// The outgoing wave is binned so the view can clean it up. Horizontal
/// jitter comes from a PCG stream seeded by (run seed, level), keeping
/// replays exact while varying formations between runs.
pub fn spawn_wave(state: &mut State, level: u32) {
    let layout = state.tuning.wave_layout(level);
    let old = std::mem::take(&mut state.aliens);
    state.garbage.extend(old);

    let wave_seed = (level as u64).wrapping_mul(2654435761).wrapping_add(state.seed);
    let mut rng = Pcg32::seed_from_u64(wave_seed);
    let canvas = state.tuning.canvas_size;

    for row in 0..layout.rows {
        for col in 0..layout.cols {
            let jitter: f32 = rng.random_range(-layout.jitter..=layout.jitter);
            let pos = Vec2::new(
                layout.origin.x + col as f32 * layout.x_spacing + jitter,
                layout.origin.y + row as f32 * layout.y_spacing,
            );
            let n = state.next_entity_id();
            state.aliens.push(Entity::new(EntitySpec {
                kind: EntityKind::Alien,
                id: format!("alien-{n}"),
                radius: state.tuning.alien_radius,
                pos: torus_wrap(pos, canvas),
                vel: Vec2::ZERO,
                created_at: state.time,
            }));
        }
    }
    log::info!(
        "wave {level}: {} aliens in {}x{} formation",
        state.aliens.len(),
        layout.rows,
        layout.cols
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use proptest::prelude::*;
    use std::collections::HashSet;

    /// Tuning with autonomous alien behavior switched off, for scenarios
    /// that need enemies to hold still.
    fn still_tuning() -> Tuning {
        Tuning {
            alien_speed: 0.0,
            alien_drift: Vec2::ZERO,
            alien_fire_interval: 1_000_000,
            ..Tuning::default()
        }
    }

    fn make_entity(kind: EntityKind, id: &str, radius: f32, pos: Vec2, vel: Vec2) -> Entity {
        Entity::new(EntitySpec {
            kind,
            id: id.to_string(),
            radius,
            pos,
            vel,
            created_at: 0,
        })
    }

    fn tick(state: &State, elapsed: u64) -> State {
        transition(state, &GameEvent::Tick { elapsed })
    }

    #[test]
    fn test_translate_takes_effect_one_tick_late() {
        let state = State::new(1, Tuning::default());
        let state = transition(&state, &GameEvent::Translate { magnitude: 5.0 });
        assert_eq!(state.player.pos.x, 300.0);
        assert!((state.player.pending_vel.x - 5.0).abs() < 1e-4);

        // First tick: position unchanged, commanded velocity catches up.
        let state = tick(&state, 1);
        assert!((state.player.pos.x - 300.0).abs() < 1e-4);

        // Second tick: the ship actually moves.
        let state = tick(&state, 2);
        assert!((state.player.pos.x - 305.0).abs() < 1e-4);
        assert!((state.player.pos.y - 480.0).abs() < 1e-3);
    }

    #[test]
    fn test_thrust_moves_up_screen() {
        let state = State::new(1, Tuning::default());
        let state = transition(&state, &GameEvent::Thrust { magnitude: 5.0 });
        let state = tick(&state, 1);
        let state = tick(&state, 2);
        assert!((state.player.pos.y - 475.0).abs() < 1e-3);
    }

    #[test]
    fn test_player_wraps_on_torus() {
        let mut state = State::new(1, Tuning::default());
        state.player.pos = Vec2::new(2.0, 480.0);
        state.player.vel = Vec2::new(-5.0, 0.0);
        let state = tick(&state, 1);
        assert!((state.player.pos.x - 597.0).abs() < 1e-3);
    }

    #[test]
    fn test_shoot_spawns_bullet_at_muzzle() {
        let state = State::new(1, Tuning::default());
        let before = state.obj_count;
        let state = transition(&state, &GameEvent::Shoot);
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.obj_count, before + 1);
        let bullet = &state.bullets[0];
        assert!((bullet.pos.x - 300.0).abs() < 1e-3);
        assert!((bullet.pos.y - 460.0).abs() < 1e-3);
        assert_eq!(bullet.vel, Vec2::ZERO);
    }

    #[test]
    fn test_bullet_out_of_bounds_binned_exactly_once() {
        let mut state = State::new(1, still_tuning());
        state.bullets.push(make_entity(
            EntityKind::Bullet,
            "bullet-99",
            3.0,
            Vec2::new(300.0, 2.0),
            Vec2::new(0.0, -3.0),
        ));
        let state = tick(&state, 1);
        assert!(state.bullets.is_empty());
        let binned = state.garbage.iter().filter(|e| e.id == "bullet-99").count();
        assert_eq!(binned, 1);
    }

    #[test]
    fn test_bullet_kills_alien_and_scores() {
        let mut state = State::new(1, still_tuning());
        state.aliens.push(make_entity(
            EntityKind::Alien,
            "alien-0",
            10.0,
            Vec2::new(300.0, 100.0),
            Vec2::ZERO,
        ));
        state.bullets.push(make_entity(
            EntityKind::Bullet,
            "bullet-0",
            3.0,
            Vec2::new(300.0, 130.0),
            Vec2::new(0.0, -3.0),
        ));

        let mut state = state;
        for t in 1..=20 {
            state = tick(&state, t);
            if !state.garbage.is_empty() {
                break;
            }
        }
        assert!(state.aliens.is_empty());
        assert!(state.bullets.is_empty());
        assert!(state.garbage.iter().any(|e| e.id == "alien-0"));
        assert!(state.garbage.iter().any(|e| e.id == "bullet-0"));
        assert_eq!(state.score.kill, 5);
        // No alien shot was ever fired, so clearing the field is not a win.
        assert!(!state.game_won);
    }

    #[test]
    fn test_shoot_scenario_from_start_position() {
        // Player at (300, 480), alien at (300, 100) with radius 10; fire and
        // advance until the bullet exits or connects. No shields in the
        // corridor, so directly above the player the bullet must connect.
        let mut state = State::new(1, still_tuning());
        state.shields.clear();
        state.aliens.push(make_entity(
            EntityKind::Alien,
            "alien-0",
            10.0,
            Vec2::new(300.0, 100.0),
            Vec2::ZERO,
        ));
        let mut state = transition(&state, &GameEvent::Shoot);
        for t in 1..=300 {
            state = tick(&state, t);
            if state.bullets.is_empty() {
                break;
            }
        }
        assert!(state.bullets.is_empty());
        assert!(state.aliens.is_empty());
        assert_eq!(state.score.kill, 5);
    }

    #[test]
    fn test_graze_accrues_every_tick() {
        let mut state = State::new(1, still_tuning());
        // Hard-hit threshold is 23, graze threshold 35: park a motionless
        // shot 30 away from the player.
        state.alien_bullets.push(make_entity(
            EntityKind::AlienBullet,
            "shot-0",
            3.0,
            Vec2::new(300.0, 450.0),
            Vec2::ZERO,
        ));
        let mut state = state;
        for t in 1..=3 {
            state = tick(&state, t);
        }
        assert_eq!(state.alien_bullets.len(), 1);
        assert_eq!(state.score.graze, 3);
        assert!(!state.game_over);
    }

    #[test]
    fn test_alien_shot_hit_ends_game() {
        let mut state = State::new(1, still_tuning());
        state.alien_bullets.push(make_entity(
            EntityKind::AlienBullet,
            "shot-0",
            3.0,
            Vec2::new(300.0, 470.0),
            Vec2::ZERO,
        ));
        let state = tick(&state, 1);
        assert!(state.game_over);
        assert!(state.alien_bullets.is_empty());
        assert!(state.garbage.iter().any(|e| e.id == "shot-0"));
        assert_eq!(state.player.id, "player");
    }

    #[test]
    fn test_terminal_state_freezes() {
        let mut state = State::new(1, still_tuning());
        state.game_over = true;
        let frozen = tick(&state, 50);
        assert_eq!(frozen, state);
        let after_shoot = transition(&state, &GameEvent::Shoot);
        assert_eq!(after_shoot, state);
        let after_wave = transition(&state, &GameEvent::SpawnWave { level: 3 });
        assert_eq!(after_wave, state);
    }

    #[test]
    fn test_win_requires_enemy_fire() {
        // Empty field, no wave ever started: never a win.
        let state = State::new(1, Tuning::default());
        let state = tick(&state, 1);
        assert!(!state.game_won);

        // Same field after the enemy has fired at least once: cleared wave.
        let mut fired = State::new(1, Tuning::default());
        fired.alien_shots_fired = 4;
        let fired = tick(&fired, 1);
        assert!(fired.game_won);

        // Won is monotonic across further ticks.
        let later = tick(&fired, 2);
        assert!(later.game_won);
    }

    #[test]
    fn test_alien_fire_interval() {
        let state = State::new(1, Tuning::default());
        let state = transition(&state, &GameEvent::SpawnWave { level: 1 });
        let alien_count = state.aliens.len();
        assert!(alien_count > 0);

        // Off-interval tick: nothing fired.
        let state = tick(&state, 59);
        assert_eq!(state.alien_bullets.len(), 0);

        // On-interval tick: one shot per live alien.
        let state = tick(&state, 60);
        assert_eq!(state.alien_bullets.len(), alien_count);
        assert_eq!(state.alien_shots_fired, alien_count as u64);
        let ids: HashSet<_> = state.alien_bullets.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), alien_count);
        assert!(state.alien_bullets.iter().all(|s| s.created_at == 60));
    }

    #[test]
    fn test_spawn_wave_replaces_and_bins_previous() {
        let state = State::new(1, Tuning::default());
        let state = transition(&state, &GameEvent::SpawnWave { level: 1 });
        let first_wave: HashSet<_> = state.aliens.iter().map(|a| a.id.clone()).collect();

        let state = transition(&state, &GameEvent::SpawnWave { level: 2 });
        for id in &first_wave {
            assert!(state.garbage.iter().any(|e| &e.id == id));
            assert!(!state.aliens.iter().any(|a| &a.id == id));
        }
        let ids: HashSet<_> = state.live_entities().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), 1 + state.shields.len() + state.aliens.len());
    }

    #[test]
    fn test_reset_two_phase_handshake() {
        let state = State::new(9, Tuning::default());
        let state = transition(&state, &GameEvent::SpawnWave { level: 2 });
        let state = transition(&state, &GameEvent::Shoot);
        let state = tick(&state, 1);
        let live_before: Vec<String> = state
            .live_entities()
            .filter(|e| e.kind != EntityKind::Player)
            .map(|e| e.id.clone())
            .collect();
        assert!(!live_before.is_empty());

        // Phase one: everything but the player is binned, reset is pending.
        let state = transition(&state, &GameEvent::Reset);
        assert!(state.reset_pending);
        assert!(state.shields.is_empty());
        assert!(state.bullets.is_empty());
        assert!(state.alien_bullets.is_empty());
        assert!(state.aliens.is_empty());
        assert_eq!(state.garbage.len(), live_before.len());
        for id in &live_before {
            assert_eq!(state.garbage.iter().filter(|e| &e.id == id).count(), 1);
        }

        // Phase two: the next tick swaps in a fresh initial state.
        let state = tick(&state, 2);
        assert_eq!(state, State::new(9, Tuning::default()));
        assert!(state.garbage.is_empty());
    }

    #[test]
    fn test_reset_escapes_terminal_state() {
        let mut state = State::new(3, Tuning::default());
        state.game_over = true;
        let state = transition(&state, &GameEvent::Reset);
        assert!(state.reset_pending);
        let state = tick(&state, 1);
        assert!(!state.game_over);
        assert_eq!(state, State::new(3, Tuning::default()));
    }

    #[test]
    fn test_determinism() {
        let events = [
            GameEvent::SpawnWave { level: 3 },
            GameEvent::Translate { magnitude: -5.0 },
            GameEvent::Tick { elapsed: 1 },
            GameEvent::Shoot,
            GameEvent::Tick { elapsed: 2 },
            GameEvent::Tick { elapsed: 3 },
            GameEvent::Thrust { magnitude: 5.0 },
            GameEvent::Tick { elapsed: 4 },
        ];
        let mut a = State::new(99999, Tuning::default());
        let mut b = State::new(99999, Tuning::default());
        for event in &events {
            a = transition(&a, event);
            b = transition(&b, event);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_wave_jitter_varies_with_seed() {
        let mut a = State::new(1, Tuning::default());
        let mut b = State::new(2, Tuning::default());
        spawn_wave(&mut a, 1);
        spawn_wave(&mut b, 1);
        let moved = a
            .aliens
            .iter()
            .zip(b.aliens.iter())
            .any(|(x, y)| x.pos != y.pos);
        assert!(moved);
    }

    proptest! {
        #[test]
        fn prop_wrap_idempotent_in_range(x in 0.0f32..600.0, y in 0.0f32..600.0) {
            let p = Vec2::new(x, y);
            prop_assert_eq!(torus_wrap(p, 600.0), p);
        }

        #[test]
        fn prop_scores_monotonic_terminals_sticky_ids_unique(
            ops in proptest::collection::vec(0u8..6, 1..100),
        ) {
            let mut state = State::new(11, Tuning::default());
            let mut elapsed = 0;
            for op in ops {
                let event = match op {
                    0 => GameEvent::Translate { magnitude: 5.0 },
                    1 => GameEvent::Translate { magnitude: -5.0 },
                    2 => GameEvent::Thrust { magnitude: 5.0 },
                    3 => GameEvent::Shoot,
                    4 => GameEvent::SpawnWave { level: 2 },
                    _ => {
                        elapsed += 1;
                        GameEvent::Tick { elapsed }
                    }
                };
                let next = transition(&state, &event);
                if !state.game_over {
                    prop_assert!(next.score.kill >= state.score.kill);
                    prop_assert!(next.score.graze >= state.score.graze);
                }
                prop_assert!(!state.game_over || next.game_over);
                prop_assert!(!state.game_won || next.game_won);

                let live_count = next.live_entities().count();
                let unique_count = next
                    .live_entities()
                    .map(|e| e.id.as_str())
                    .collect::<HashSet<_>>()
                    .len();
                prop_assert_eq!(live_count, unique_count);

                state = next;
            }
        }
    }
}
