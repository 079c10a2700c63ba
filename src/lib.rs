//! Road Dodge - A top-down arcade driving game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (road, vehicles, spawning, game phases)
//! - `session`: Wires the simulation to audio and score persistence
//! - `renderer`: Draw-call boundary for whatever frontend paints the frame
//! - `platform`: Raw key state to per-tick input translation
//! - `persistence`: High score record storage
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use audio::{AudioManager, AudioSink, SoundEffect};
pub use highscores::ScoreTracker;
pub use persistence::{FileScoreStore, MemoryScoreStore, PersistError, ScoreStore};
pub use session::Session;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one obstacle step per frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Visible area
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Road surface
    pub const ROAD_WIDTH: f32 = 400.0;
    /// Distance between lane marking dashes
    pub const MARKING_PERIOD: f32 = 60.0;

    /// Player car body
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    /// Player row, measured up from the bottom edge
    pub const PLAYER_ROW_FROM_BOTTOM: f32 = 100.0;
    /// Sideways shift per tick while steering
    pub const LATERAL_STEP: f32 = 5.0;

    /// Player speed envelope (units per tick)
    pub const MIN_SPEED: f32 = 5.0;
    pub const MAX_SPEED: f32 = 15.0;
    pub const ACCELERATION: f32 = 0.3;
    pub const BRAKING: f32 = 0.5;
    /// Coasting loss applied every tick
    pub const COAST_DECAY: f32 = 0.05;

    /// Oncoming car body
    pub const OBSTACLE_WIDTH: f32 = 40.0;
    pub const OBSTACLE_HEIGHT: f32 = 80.0;
    /// How far below the screen an obstacle travels before it is retired
    pub const OFFSCREEN_MARGIN: f32 = 50.0;
    /// Keep spawns this far inside the road edges
    pub const SPAWN_MARGIN: f32 = 30.0;
    /// Obstacles always outrun the road by at least this much
    pub const OBSTACLE_SPEED_BONUS: f32 = 2.0;
    /// Extra obstacle speed per point scored
    pub const OBSTACLE_SPEED_PER_POINT: f32 = 0.1;
    /// Number of paint colours an obstacle may be given
    pub const OBSTACLE_PALETTE_SIZE: u8 = 5;

    /// Spawn pacing (ticks)
    pub const SPAWN_BASE_DELAY: u32 = 120;
    pub const SPAWN_MIN_DELAY: u32 = 60;
    pub const SPAWN_DELAY_PER_POINT: u32 = 2;

    /// Crash animation length (ticks)
    pub const CRASH_DURATION: u32 = 90;
    /// Crash overlay blink half-period (ticks)
    pub const CRASH_FLASH_PERIOD: u32 = 8;
}
