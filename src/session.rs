//! Session controller
//!
//! Owns the simulation together with its two outside collaborators: an
//! audio sink and a score store, both handed in at construction. Each tick
//! runs the simulation, then turns its events into sound and saves.

use crate::audio::{AudioSink, SoundEffect};
use crate::highscores::ScoreTracker;
use crate::persistence::ScoreStore;
use crate::renderer::{Renderer, render_frame};
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::tuning::Tuning;

pub struct Session<A: AudioSink, S: ScoreStore> {
    state: GameState,
    audio: A,
    store: S,
}

impl<A: AudioSink, S: ScoreStore> Session<A, S> {
    /// Start a session in the menu, reading the best score from `store`
    pub fn new(tuning: Tuning, seed: u64, audio: A, store: S) -> Self {
        let best = ScoreTracker::load(&store).best();
        log::info!("Session started (seed {}, best {})", seed, best);
        Self {
            state: GameState::new(tuning, seed, best),
            audio,
            store,
        }
    }

    /// Advance one tick and dispatch the resulting side effects.
    ///
    /// Returns the events so callers can react too (e.g. frontends that
    /// want to flash the HUD on a pass).
    pub fn tick(&mut self, input: &TickInput) -> Vec<GameEvent> {
        tick(&mut self.state, input);
        let events = self.state.drain_events();
        for event in &events {
            match *event {
                GameEvent::Horn => self.audio.play(SoundEffect::Horn),
                GameEvent::RunFinished { .. } => self.state.score.persist(&self.store),
                GameEvent::HeadlightsToggled { on } => {
                    log::debug!("Headlights {}", if on { "on" } else { "off" })
                }
                GameEvent::ObstaclePassed { score } => log::debug!("Passed, score {}", score),
                GameEvent::RunStarted | GameEvent::Crashed { .. } | GameEvent::ReturnedToMenu => {}
            }
        }
        events
    }

    /// Draw the current frame
    pub fn render(&self, renderer: &mut impl Renderer) {
        render_frame(&self.state, renderer);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted setups and tests
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
