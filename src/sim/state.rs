//! Game state and core simulation types
//!
//! Everything one session needs to advance a tick lives here, owned by
//! [`GameState`]. Nothing in this module touches the outside world.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::obstacle::{ObstacleSpawner, ObstacleVehicle};
use super::player::PlayerVehicle;
use super::road::RoadTrack;
use crate::highscores::ScoreTracker;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    Menu,
    /// Active driving
    Playing,
    /// Crash animation, not interruptible
    Crashing,
    /// Run ended, waiting for restart or back-to-menu
    GameOver,
}

/// Side effects produced by a tick, drained by the session each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh run began (entities reset)
    RunStarted,
    /// Horn pressed this tick
    Horn,
    /// Headlights switched
    HeadlightsToggled { on: bool },
    /// An obstacle left the screen unscathed
    ObstaclePassed { score: u64 },
    /// Player hit an obstacle
    Crashed { score: u64 },
    /// Crash animation finished; the best score should be saved
    RunFinished {
        score: u64,
        best: u64,
        new_record: bool,
    },
    /// Left the game over screen for the menu
    ReturnedToMenu,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Balance values every entity was built from
    pub tuning: Tuning,
    /// Seed the RNG was created from, for reproducing a session
    pub seed: u64,
    rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter (never reset)
    pub time_ticks: u64,
    pub score: ScoreTracker,
    pub road: RoadTrack,
    pub player: PlayerVehicle,
    pub obstacles: ObstacleSpawner,
    /// Ticks since the last spawn
    pub spawn_timer: u32,
    /// Ticks between spawns at the current score
    pub spawn_interval: u32,
    /// Ticks spent in the crash animation
    pub crash_timer: u32,
    /// Pending side effects for the session
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// New session in the menu, with a previously recorded best score
    pub fn new(tuning: Tuning, seed: u64, best_score: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            time_ticks: 0,
            score: ScoreTracker::with_best(best_score),
            road: RoadTrack::new(&tuning),
            player: PlayerVehicle::new(&tuning),
            obstacles: ObstacleSpawner::new(&tuning),
            spawn_timer: 0,
            spawn_interval: tuning.spawn_interval(0),
            crash_timer: 0,
            events: Vec::new(),
            tuning,
        }
    }

    /// Put every entity back to its starting condition for a new run.
    ///
    /// The best score survives; the RNG keeps its stream so successive runs
    /// see different traffic.
    pub fn reset_run(&mut self) {
        self.player = PlayerVehicle::new(&self.tuning);
        self.road = RoadTrack::new(&self.tuning);
        self.obstacles.clear();
        self.score.reset_current();
        self.spawn_timer = 0;
        self.spawn_interval = self.tuning.spawn_interval(0);
        self.crash_timer = 0;
    }

    /// Ask the spawner for a car using the current timer, road and score
    pub fn try_spawn_obstacle(&mut self) -> Option<ObstacleVehicle> {
        self.obstacles.try_spawn(
            self.spawn_timer,
            self.spawn_interval,
            self.road.edges(),
            self.road.current_speed(),
            self.score.current(),
            &mut self.rng,
        )
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
