//! Road Dodge entry point
//!
//! Headless driver: loads settings, wires a session to the log-backed audio
//! and renderer, and plays a scripted key sequence through the fixed
//! timestep loop. A windowed frontend would replace `scripted_keys` with
//! real key polling and `TraceRenderer` with a painter.
//!
//! Usage: `road-dodge [SECONDS] [SETTINGS_PATH]`

use std::path::PathBuf;
use std::time::{Duration, Instant};

use road_dodge::consts::{MAX_SUBSTEPS, SIM_DT};
use road_dodge::platform::{HeldKeys, InputLatch};
use road_dodge::renderer::TraceRenderer;
use road_dodge::settings::DEFAULT_SETTINGS_PATH;
use road_dodge::sim::{GameEvent, GamePhase};
use road_dodge::{FileScoreStore, Session, Settings};

const DEFAULT_RUN_SECONDS: f32 = 30.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let run_seconds = args
        .next()
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(DEFAULT_RUN_SECONDS);
    let settings_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));

    let settings = Settings::load_from(&settings_path);
    let seed = settings.resolve_seed();
    let store = FileScoreStore::new(&settings.record_path);
    let mut session = Session::new(
        settings.tuning.clone(),
        seed,
        settings.audio_manager(),
        store,
    );

    let mut latch = InputLatch::new();
    let mut renderer = TraceRenderer::new();
    let total_ticks = (run_seconds / SIM_DT).max(0.0) as u64;
    let mut ticks_run: u64 = 0;
    let mut phase_ticks: u64 = 0;
    let mut last_phase = session.phase();
    let mut runs = 0u32;

    let dt = Duration::from_secs_f32(SIM_DT);
    let mut accumulator = Duration::ZERO;
    let mut last_time = Instant::now();

    while ticks_run < total_ticks {
        let now = Instant::now();
        // Cap the catch-up so a stall does not spiral
        accumulator += (now - last_time).min(dt * MAX_SUBSTEPS);
        last_time = now;

        let mut substeps = 0;
        while accumulator >= dt && substeps < MAX_SUBSTEPS && ticks_run < total_ticks {
            let keys = scripted_keys(session.phase(), phase_ticks, ticks_run);
            let input = latch.next(keys);
            for event in session.tick(&input) {
                if let GameEvent::RunFinished { .. } = event {
                    runs += 1;
                }
            }

            let phase = session.phase();
            if phase != last_phase {
                log::info!("{:?} -> {:?}", last_phase, phase);
                last_phase = phase;
                phase_ticks = 0;
            } else {
                phase_ticks += 1;
            }

            accumulator -= dt;
            substeps += 1;
            ticks_run += 1;
        }

        session.render(&mut renderer);
        if ticks_run % 60 == 0 {
            if let Some(hud) = renderer.last_hud {
                log::debug!(
                    "score {} best {} speed {:.1}",
                    hud.score,
                    hud.best,
                    hud.speed
                );
            }
        }

        std::thread::sleep(dt.saturating_sub(last_time.elapsed()));
    }

    let state = session.state();
    log::info!(
        "Demo over after {} ticks: {} finished runs, best score {}",
        ticks_run,
        runs,
        state.score.best()
    );
}

/// Demo driver: start from the menu, weave across the road with the
/// throttle down, sound the horn now and then, and restart after a crash.
fn scripted_keys(phase: GamePhase, phase_ticks: u64, total_ticks: u64) -> HeldKeys {
    match phase {
        GamePhase::Menu | GamePhase::GameOver => HeldKeys {
            confirm: phase_ticks >= 60,
            ..Default::default()
        },
        GamePhase::Playing => {
            let lane_cycle = (total_ticks / 45) % 4;
            HeldKeys {
                left: lane_cycle == 0,
                right: lane_cycle == 2,
                up: phase_ticks % 240 < 180,
                down: phase_ticks % 240 >= 220,
                horn: phase_ticks % 300 == 150,
                headlights: phase_ticks == 30,
                ..Default::default()
            }
        }
        GamePhase::Crashing => HeldKeys::default(),
    }
}
