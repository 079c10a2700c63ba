//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session deterministically. All phase
//! transitions happen in [`tick`].

use super::state::{GameEvent, GamePhase, GameState};

/// Logical actions for a single tick.
///
/// Steering and throttle flags are level-triggered (held); `honk`,
/// `toggle_headlights`, `confirm` and `cancel` are edges and must be set for
/// exactly one tick per press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub accelerate: bool,
    pub brake: bool,
    pub honk: bool,
    pub toggle_headlights: bool,
    /// Start / restart
    pub confirm: bool,
    /// Back to menu
    pub cancel: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    match state.phase {
        GamePhase::Menu => {
            if input.confirm {
                start_run(state);
            }
        }

        GamePhase::Playing => tick_playing(state, input),

        GamePhase::Crashing => {
            state.crash_timer += 1;
            if state.crash_timer >= state.tuning.crash_duration {
                let score = state.score.current();
                let best = state.score.best();
                let new_record = state.score.is_new_record();
                log::info!(
                    "Run finished: score {} (best {}){}",
                    score,
                    best,
                    if new_record { " - new record!" } else { "" }
                );
                state.push_event(GameEvent::RunFinished {
                    score,
                    best,
                    new_record,
                });
                state.phase = GamePhase::GameOver;
            }
        }

        GamePhase::GameOver => {
            if input.confirm {
                start_run(state);
            } else if input.cancel {
                // Score is left alone; the next run resets it
                state.phase = GamePhase::Menu;
                state.push_event(GameEvent::ReturnedToMenu);
            }
        }
    }
}

fn start_run(state: &mut GameState) {
    state.reset_run();
    state.phase = GamePhase::Playing;
    state.push_event(GameEvent::RunStarted);
    log::debug!("Run started (best {})", state.score.best());
}

fn tick_playing(state: &mut GameState, input: &TickInput) {
    let step = state.tuning.lateral_step;

    // --- INPUT ---
    if input.move_left {
        state.player.move_left(step);
    }
    if input.move_right {
        state.player.move_right(step);
    }
    if input.accelerate {
        state.player.accelerate();
    }
    if input.brake {
        state.player.brake();
    }
    if input.honk {
        state.player.honk();
        state.push_event(GameEvent::Horn);
    }
    if input.toggle_headlights {
        state.player.toggle_headlights();
        let on = state.player.headlights_on;
        state.push_event(GameEvent::HeadlightsToggled { on });
    }

    // --- MOTION ---
    state.player.decay_tick();
    state.road.update(state.player.speed());
    let (left, right) = state.road.edges();
    state.player.clamp_to_track(left, right);

    // --- SPAWNING ---
    state.spawn_timer += 1;
    if state.try_spawn_obstacle().is_some() {
        state.spawn_timer = 0;
    }
    state.spawn_interval = state.tuning.spawn_interval(state.score.current());

    // --- TRAFFIC ---
    let passed = state.obstacles.advance_all();
    for _ in 0..passed {
        state.score.add_score(1);
        let score = state.score.current();
        state.push_event(GameEvent::ObstaclePassed { score });
    }

    // --- COLLISION ---
    if state.obstacles.any_collides_with(&state.player.bounding_box()) {
        let score = state.score.current();
        log::info!("Crash at score {}", score);
        state.crash_timer = 0;
        state.phase = GamePhase::Crashing;
        state.push_event(GameEvent::Crashed { score });
    }
}
