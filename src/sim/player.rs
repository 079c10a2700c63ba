//! The player's car

use glam::Vec2;

use super::collision::Rect;
use crate::consts::{PLAYER_HEIGHT, PLAYER_ROW_FROM_BOTTOM, PLAYER_WIDTH};
use crate::tuning::Tuning;

/// Speed limits and rates, copied out of [`Tuning`] at spawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedEnvelope {
    pub min: f32,
    pub max: f32,
    pub acceleration: f32,
    pub braking: f32,
    pub coast_decay: f32,
}

impl From<&Tuning> for SpeedEnvelope {
    fn from(tuning: &Tuning) -> Self {
        Self {
            min: tuning.min_speed,
            max: tuning.max_speed,
            acceleration: tuning.acceleration,
            braking: tuning.braking,
            coast_decay: tuning.coast_decay,
        }
    }
}

/// Player-controlled car.
///
/// `speed` is always inside `[envelope.min, envelope.max]`.
#[derive(Debug, Clone)]
pub struct PlayerVehicle {
    /// Center of the car body; only `x` changes during play
    pub pos: Vec2,
    speed: f32,
    pub headlights_on: bool,
    envelope: SpeedEnvelope,
}

impl PlayerVehicle {
    /// Fresh car at the bottom-center spawn point, rolling at minimum speed
    pub fn new(tuning: &Tuning) -> Self {
        let envelope = SpeedEnvelope::from(tuning);
        Self {
            pos: Self::spawn_point(tuning),
            speed: envelope.min,
            headlights_on: false,
            envelope,
        }
    }

    pub fn spawn_point(tuning: &Tuning) -> Vec2 {
        Vec2::new(
            tuning.screen_width / 2.0,
            tuning.screen_height - PLAYER_ROW_FROM_BOTTOM,
        )
    }

    pub fn size() -> Vec2 {
        Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn envelope(&self) -> &SpeedEnvelope {
        &self.envelope
    }

    pub fn move_left(&mut self, step: f32) {
        self.pos.x -= step;
    }

    pub fn move_right(&mut self, step: f32) {
        self.pos.x += step;
    }

    pub fn accelerate(&mut self) {
        self.speed = (self.speed + self.envelope.acceleration).min(self.envelope.max);
    }

    pub fn brake(&mut self) {
        self.speed = (self.speed - self.envelope.braking).max(self.envelope.min);
    }

    /// Natural coasting loss, applied once per tick after input
    pub fn decay_tick(&mut self) {
        if self.speed > self.envelope.min {
            self.speed = (self.speed - self.envelope.coast_decay).max(self.envelope.min);
        }
    }

    /// Keep the whole car body between the road edges
    pub fn clamp_to_track(&mut self, left_edge: f32, right_edge: f32) {
        let half = PLAYER_WIDTH / 2.0;
        let lo = left_edge + half;
        let hi = right_edge - half;
        if lo > hi {
            // Road narrower than the car: pin to the middle
            self.pos.x = (left_edge + right_edge) / 2.0;
        } else {
            self.pos.x = self.pos.x.clamp(lo, hi);
        }
    }

    pub fn toggle_headlights(&mut self) {
        self.headlights_on = !self.headlights_on;
    }

    /// Sounding the horn changes nothing on the car; the tick turns it into
    /// a [`GameEvent::Horn`](super::GameEvent::Horn).
    pub fn honk(&self) {
        log::debug!("horn at x={:.1}", self.pos.x);
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::centered(self.pos, Self::size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_spawn_position_and_speed() {
        let tuning = Tuning::default();
        let car = PlayerVehicle::new(&tuning);
        assert_eq!(car.pos, Vec2::new(400.0, 500.0));
        assert_eq!(car.speed(), tuning.min_speed);
        assert!(!car.headlights_on);
    }

    #[test]
    fn test_lateral_moves_are_unbounded() {
        let mut car = PlayerVehicle::new(&Tuning::default());
        for _ in 0..200 {
            car.move_left(5.0);
        }
        assert_eq!(car.pos.x, 400.0 - 1000.0);
        car.move_right(7.5);
        assert_eq!(car.pos.x, 400.0 - 992.5);
    }

    #[test]
    fn test_clamp_to_track() {
        let mut car = PlayerVehicle::new(&Tuning::default());
        car.pos.x = 0.0;
        car.clamp_to_track(200.0, 600.0);
        assert_eq!(car.pos.x, 225.0);
        car.pos.x = 1000.0;
        car.clamp_to_track(200.0, 600.0);
        assert_eq!(car.pos.x, 575.0);
        car.pos.x = 400.0;
        car.clamp_to_track(200.0, 600.0);
        assert_eq!(car.pos.x, 400.0);
    }

    #[test]
    fn test_decay_reaches_min_exactly() {
        let tuning = Tuning::default();
        let mut car = PlayerVehicle::new(&tuning);
        for _ in 0..100 {
            car.accelerate();
        }
        assert_eq!(car.speed(), tuning.max_speed);

        let mut last = car.speed();
        for _ in 0..10_000 {
            car.decay_tick();
            assert!(car.speed() <= last);
            last = car.speed();
        }
        assert_eq!(car.speed(), tuning.min_speed);
        car.decay_tick();
        assert_eq!(car.speed(), tuning.min_speed);
    }

    #[test]
    fn test_headlights_toggle() {
        let mut car = PlayerVehicle::new(&Tuning::default());
        car.toggle_headlights();
        assert!(car.headlights_on);
        car.toggle_headlights();
        assert!(!car.headlights_on);
    }

    #[test]
    fn test_bounding_box_follows_position() {
        let mut car = PlayerVehicle::new(&Tuning::default());
        car.pos.x = 300.0;
        let bb = car.bounding_box();
        assert_eq!(bb.center(), Vec2::new(300.0, 500.0));
        assert_eq!(bb.width(), PLAYER_WIDTH);
        assert_eq!(bb.height(), PLAYER_HEIGHT);
    }

    proptest! {
        #[test]
        fn prop_speed_stays_in_envelope(ops in prop::collection::vec(0u8..3, 0..300)) {
            let tuning = Tuning::default();
            let mut car = PlayerVehicle::new(&tuning);
            for op in ops {
                match op {
                    0 => car.accelerate(),
                    1 => car.brake(),
                    _ => car.decay_tick(),
                }
                prop_assert!(car.speed() >= tuning.min_speed);
                prop_assert!(car.speed() <= tuning.max_speed);
            }
        }

        #[test]
        fn prop_clamp_is_idempotent(x in -2000.0f32..2000.0, left in 0.0f32..300.0, width in 0.0f32..500.0) {
            let mut car = PlayerVehicle::new(&Tuning::default());
            car.pos.x = x;
            car.clamp_to_track(left, left + width);
            let once = car.pos.x;
            car.clamp_to_track(left, left + width);
            prop_assert_eq!(car.pos.x, once);
        }
    }
}
