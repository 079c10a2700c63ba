//! Rendering boundary
//!
//! The simulation never draws. Once per frame [`render_frame`] walks the
//! state and issues one-way draw calls on a [`Renderer`]; whatever sits
//! behind the trait (a window, a terminal, a test probe) decides how they
//! look.

use crate::sim::{GamePhase, GameState, ObstacleVehicle, PlayerVehicle, RoadTrack};

/// RGB colours obstacles are painted with, indexed by `ObstacleVehicle::paint`
pub const OBSTACLE_PALETTE: [[u8; 3]; 5] = [
    [0, 0, 255],     // blue
    [255, 165, 0],   // orange
    [128, 0, 128],   // purple
    [0, 255, 255],   // cyan
    [255, 192, 203], // pink
];

/// Heads-up display numbers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hud {
    pub score: u64,
    pub best: u64,
    pub speed: f32,
    pub headlights_on: bool,
}

/// Full-screen layer drawn on top of the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Nothing over the road
    None,
    /// Title and controls hint
    Menu,
    /// Blinking crash flash; `lit` alternates every flash period
    CrashFlash { lit: bool },
    /// Final score card
    GameOver {
        score: u64,
        best: u64,
        new_record: bool,
    },
}

/// Controls hint shown on the menu overlay
pub const CONTROLS_HINT: [&str; 7] = [
    "CONTROLS:",
    "Left / A - steer left",
    "Right / D - steer right",
    "Up / W - accelerate, Down / S - brake",
    "Space - horn",
    "E - headlights",
    "Enter - start, Esc - menu",
];

/// Draw-call sink, fire-and-forget
pub trait Renderer {
    fn draw_road(&mut self, road: &RoadTrack);
    fn draw_player(&mut self, player: &PlayerVehicle);
    fn draw_obstacle(&mut self, obstacle: &ObstacleVehicle);
    fn draw_hud(&mut self, hud: Hud);
    fn draw_overlay(&mut self, overlay: Overlay);
}

/// Overlay for the state's current phase
pub fn overlay_for(state: &GameState) -> Overlay {
    match state.phase {
        GamePhase::Menu => Overlay::Menu,
        GamePhase::Playing => Overlay::None,
        GamePhase::Crashing => {
            let period = state.tuning.crash_flash_period.max(1);
            Overlay::CrashFlash {
                lit: (state.crash_timer / period) % 2 == 0,
            }
        }
        GamePhase::GameOver => Overlay::GameOver {
            score: state.score.current(),
            best: state.score.best(),
            new_record: state.score.is_new_record(),
        },
    }
}

/// Issue every draw call for one frame, back to front
pub fn render_frame(state: &GameState, renderer: &mut impl Renderer) {
    renderer.draw_road(&state.road);
    for obstacle in state.obstacles.iter() {
        renderer.draw_obstacle(obstacle);
    }
    renderer.draw_player(&state.player);
    renderer.draw_hud(Hud {
        score: state.score.current(),
        best: state.score.best(),
        speed: state.player.speed(),
        headlights_on: state.player.headlights_on,
    });
    renderer.draw_overlay(overlay_for(state));
}

/// Renderer that only logs, for headless runs
#[derive(Debug, Default)]
pub struct TraceRenderer {
    pub draw_calls: u64,
    pub last_hud: Option<Hud>,
    pub last_overlay: Option<Overlay>,
}

impl TraceRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for TraceRenderer {
    fn draw_road(&mut self, road: &RoadTrack) {
        self.draw_calls += 1;
        log::trace!(
            "road {:.0}..{:.0} markings@{:.1}",
            road.left_edge(),
            road.right_edge(),
            road.marking_offset()
        );
    }

    fn draw_player(&mut self, player: &PlayerVehicle) {
        self.draw_calls += 1;
        log::trace!(
            "player ({:.1}, {:.1}){}",
            player.pos.x,
            player.pos.y,
            if player.headlights_on { " lights" } else { "" }
        );
    }

    fn draw_obstacle(&mut self, obstacle: &ObstacleVehicle) {
        self.draw_calls += 1;
        let [r, g, b] = OBSTACLE_PALETTE[obstacle.paint as usize % OBSTACLE_PALETTE.len()];
        log::trace!(
            "obstacle ({:.1}, {:.1}) rgb({}, {}, {})",
            obstacle.pos.x,
            obstacle.pos.y,
            r,
            g,
            b
        );
    }

    fn draw_hud(&mut self, hud: Hud) {
        self.draw_calls += 1;
        self.last_hud = Some(hud);
    }

    fn draw_overlay(&mut self, overlay: Overlay) {
        self.draw_calls += 1;
        if self.last_overlay != Some(overlay) {
            match overlay {
                Overlay::Menu => {
                    for line in CONTROLS_HINT {
                        log::debug!("{}", line);
                    }
                }
                Overlay::GameOver {
                    score,
                    best,
                    new_record,
                } => log::debug!(
                    "GAME OVER - score {} best {}{}",
                    score,
                    best,
                    if new_record { " NEW RECORD" } else { "" }
                ),
                _ => {}
            }
        }
        self.last_overlay = Some(overlay);
    }
}
