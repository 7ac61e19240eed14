//! Torus Invaders entry point
//!
//! Headless demo loop: merges a scripted input track with the fixed clock,
//! folds every event through the transition core, and hands each snapshot
//! to the console view. The loop owner - not the core - watches the
//! terminal flags and stops pulling events.

use torus_invaders::Tuning;
use torus_invaders::consts::TICK_INTERVAL_MS;
use torus_invaders::sim::{GameEvent, State, transition};
use torus_invaders::view::{ConsoleView, View};

const DEMO_TICKS: u64 = 3_000;

/// Edge-triggered input script: one command per key transition, exactly as
/// the input-mapper contract requires - never a held-key stream.
fn scripted_inputs(tick: u64, tuning: &Tuning) -> Vec<GameEvent> {
    let speed = tuning.player_speed;
    let mut events = Vec::new();
    match tick % 240 {
        0 => events.push(GameEvent::Translate { magnitude: speed }),
        100 => events.push(GameEvent::Translate { magnitude: 0.0 }),
        120 => events.push(GameEvent::Translate { magnitude: -speed }),
        220 => events.push(GameEvent::Translate { magnitude: 0.0 }),
        _ => {}
    }
    if tick % 35 == 0 {
        events.push(GameEvent::Shoot);
    }
    events
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);

    let tuning = Tuning::load();
    let mut state = State::new(seed, tuning.clone());
    let mut view = ConsoleView::new();

    log::info!(
        "torus-invaders demo: seed {seed}, one tick per {TICK_INTERVAL_MS} ms of simulated time"
    );

    state = transition(&state, &GameEvent::SpawnWave { level: 1 });
    view.present(&state);

    for tick in 1..=DEMO_TICKS {
        for input in scripted_inputs(tick, &tuning) {
            state = transition(&state, &input);
            view.present(&state);
        }
        state = transition(&state, &GameEvent::Tick { elapsed: tick });
        view.present(&state);

        if state.is_terminal() {
            break;
        }
    }

    println!(
        "finished at tick {}: score {} (kill {}, graze {}), game_over={}, game_won={}",
        state.time,
        state.score.total(),
        state.score.kill,
        state.score.graze,
        state.game_over,
        state.game_won
    );
}
