//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or file access; side effects leave as [`GameEvent`]s

pub mod collision;
pub mod obstacle;
pub mod player;
pub mod road;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use obstacle::{ObstacleSpawner, ObstacleVehicle};
pub use player::{PlayerVehicle, SpeedEnvelope};
pub use road::RoadTrack;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
