//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads comes through [`Tuning`], so
//! a JSON file can rebalance the game without a rebuild. Missing fields fall
//! back to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub screen_width: f32,
    pub screen_height: f32,
    pub road_width: f32,
    pub marking_period: f32,

    // === Player ===
    pub lateral_step: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub acceleration: f32,
    pub braking: f32,
    pub coast_decay: f32,

    // === Traffic ===
    pub spawn_margin: f32,
    pub offscreen_margin: f32,
    pub obstacle_speed_bonus: f32,
    pub obstacle_speed_per_point: f32,
    pub spawn_base_delay: u32,
    pub spawn_min_delay: u32,
    pub spawn_delay_per_point: u32,

    // === Crash ===
    pub crash_duration: u32,
    pub crash_flash_period: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            road_width: ROAD_WIDTH,
            marking_period: MARKING_PERIOD,

            lateral_step: LATERAL_STEP,
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            acceleration: ACCELERATION,
            braking: BRAKING,
            coast_decay: COAST_DECAY,

            spawn_margin: SPAWN_MARGIN,
            offscreen_margin: OFFSCREEN_MARGIN,
            obstacle_speed_bonus: OBSTACLE_SPEED_BONUS,
            obstacle_speed_per_point: OBSTACLE_SPEED_PER_POINT,
            spawn_base_delay: SPAWN_BASE_DELAY,
            spawn_min_delay: SPAWN_MIN_DELAY,
            spawn_delay_per_point: SPAWN_DELAY_PER_POINT,

            crash_duration: CRASH_DURATION,
            crash_flash_period: CRASH_FLASH_PERIOD,
        }
    }
}

impl Tuning {
    /// Repair values that would break simulation invariants.
    ///
    /// Hand-edited files are allowed to be wrong; the game should still run.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !self.screen_width.is_finite() || self.screen_width <= 0.0 {
            log::warn!("tuning: screen_width {} invalid, using default", self.screen_width);
            self.screen_width = defaults.screen_width;
        }
        if !self.screen_height.is_finite() || self.screen_height <= 0.0 {
            log::warn!("tuning: screen_height {} invalid, using default", self.screen_height);
            self.screen_height = defaults.screen_height;
        }
        if !self.min_speed.is_finite() || self.min_speed < 0.0 {
            log::warn!("tuning: min_speed {} invalid, using default", self.min_speed);
            self.min_speed = defaults.min_speed;
        }
        if !self.max_speed.is_finite() || self.max_speed < self.min_speed {
            log::warn!(
                "tuning: max_speed {} invalid for min_speed {}, raising",
                self.max_speed,
                self.min_speed
            );
            self.max_speed = self.min_speed;
        }

        // Rates and margins: negative values flip the meaning of the knob
        reset_if_negative(&mut self.lateral_step, defaults.lateral_step, "lateral_step");
        reset_if_negative(&mut self.acceleration, defaults.acceleration, "acceleration");
        reset_if_negative(&mut self.braking, defaults.braking, "braking");
        reset_if_negative(&mut self.coast_decay, defaults.coast_decay, "coast_decay");
        reset_if_negative(&mut self.spawn_margin, defaults.spawn_margin, "spawn_margin");
        reset_if_negative(
            &mut self.offscreen_margin,
            defaults.offscreen_margin,
            "offscreen_margin",
        );
        if !self.obstacle_speed_bonus.is_finite() {
            log::warn!("tuning: obstacle_speed_bonus must be finite");
            self.obstacle_speed_bonus = defaults.obstacle_speed_bonus;
        }
        if !self.obstacle_speed_per_point.is_finite() {
            log::warn!("tuning: obstacle_speed_per_point must be finite");
            self.obstacle_speed_per_point = defaults.obstacle_speed_per_point;
        }

        if !self.marking_period.is_finite() || self.marking_period <= 0.0 {
            log::warn!("tuning: marking_period must be positive");
            self.marking_period = defaults.marking_period;
        }
        if self.road_width.is_nan() || self.road_width <= 0.0 || self.road_width > self.screen_width {
            log::warn!("tuning: road_width {} does not fit the screen", self.road_width);
            self.road_width = self.screen_width.min(defaults.road_width).max(1.0);
        }
        if self.spawn_min_delay == 0 {
            log::warn!("tuning: spawn_min_delay must be at least 1 tick");
            self.spawn_min_delay = 1;
        }
        if self.spawn_base_delay < self.spawn_min_delay {
            self.spawn_base_delay = self.spawn_min_delay;
        }
        if self.crash_flash_period == 0 {
            self.crash_flash_period = defaults.crash_flash_period;
        }
        self
    }

    /// Ticks between spawns at the given score, floored at `spawn_min_delay`
    pub fn spawn_interval(&self, score: u64) -> u32 {
        let reduction = score.saturating_mul(u64::from(self.spawn_delay_per_point));
        let delay = u64::from(self.spawn_base_delay).saturating_sub(reduction);
        delay.max(u64::from(self.spawn_min_delay)) as u32
    }
}

fn reset_if_negative(value: &mut f32, default: f32, name: &str) {
    if !value.is_finite() || *value < 0.0 {
        log::warn!("tuning: {} {} invalid, using default", name, value);
        *value = default;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_interval_scaling() {
        let tuning = Tuning {
            spawn_base_delay: 120,
            spawn_min_delay: 60,
            spawn_delay_per_point: 2,
            ..Default::default()
        };
        assert_eq!(tuning.spawn_interval(0), 120);
        assert_eq!(tuning.spawn_interval(10), 100);
        assert_eq!(tuning.spawn_interval(30), 60);
        assert_eq!(tuning.spawn_interval(40), 60);
        assert_eq!(tuning.spawn_interval(u64::MAX), 60);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "max_speed": 20.0 }"#).unwrap();
        assert_eq!(tuning.max_speed, 20.0);
        assert_eq!(tuning.min_speed, MIN_SPEED);
        assert_eq!(tuning.spawn_base_delay, SPAWN_BASE_DELAY);
    }

    #[test]
    fn test_sanitized_repairs_bad_values() {
        let tuning = Tuning {
            min_speed: 8.0,
            max_speed: 3.0,
            spawn_min_delay: 0,
            spawn_base_delay: 0,
            marking_period: 0.0,
            acceleration: -1.0,
            braking: -0.5,
            coast_decay: -1.0,
            spawn_margin: -1000.0,
            offscreen_margin: f32::NAN,
            lateral_step: f32::INFINITY,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(tuning.max_speed, 8.0);
        assert_eq!(tuning.spawn_min_delay, 1);
        assert_eq!(tuning.spawn_base_delay, 1);
        assert_eq!(tuning.marking_period, MARKING_PERIOD);
        assert_eq!(tuning.acceleration, ACCELERATION);
        assert_eq!(tuning.braking, BRAKING);
        assert_eq!(tuning.coast_decay, COAST_DECAY);
        assert_eq!(tuning.spawn_margin, SPAWN_MARGIN);
        assert_eq!(tuning.offscreen_margin, OFFSCREEN_MARGIN);
        assert_eq!(tuning.lateral_step, LATERAL_STEP);
    }

    #[test]
    fn test_sanitized_repairs_screen_before_road() {
        let tuning = Tuning {
            screen_width: f32::NAN,
            screen_height: f32::INFINITY,
            max_speed: f32::INFINITY,
            obstacle_speed_per_point: f32::NAN,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(tuning.screen_width, SCREEN_WIDTH);
        assert_eq!(tuning.screen_height, SCREEN_HEIGHT);
        assert_eq!(tuning.road_width, ROAD_WIDTH);
        assert_eq!(tuning.max_speed, tuning.min_speed);
        assert_eq!(tuning.obstacle_speed_per_point, OBSTACLE_SPEED_PER_POINT);

        let tuning = Tuning {
            screen_width: -800.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(tuning.screen_width, SCREEN_WIDTH);
        assert_eq!(tuning.road_width, ROAD_WIDTH);
    }

    #[test]
    fn test_zero_rates_are_kept() {
        let tuning = Tuning {
            coast_decay: 0.0,
            spawn_margin: 0.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(tuning.coast_decay, 0.0);
        assert_eq!(tuning.spawn_margin, 0.0);
    }

    #[test]
    fn test_default_is_already_sane() {
        assert_eq!(Tuning::default().sanitized(), Tuning::default());
    }
}
