//! Scrolling road surface

use crate::tuning::Tuning;

/// The drivable strip in the middle of the screen.
///
/// The road itself never moves; only the dashed centre line scrolls, which
/// is what sells the sense of speed.
#[derive(Debug, Clone)]
pub struct RoadTrack {
    screen_width: f32,
    width: f32,
    marking_period: f32,
    /// Scroll offset of the lane markings, always in `[0, marking_period)`
    marking_offset: f32,
    /// Speed used for the most recent scroll
    current_speed: f32,
}

impl RoadTrack {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            screen_width: tuning.screen_width,
            width: tuning.road_width,
            marking_period: tuning.marking_period,
            marking_offset: 0.0,
            current_speed: tuning.min_speed,
        }
    }

    /// Scroll the markings by `speed` units
    pub fn update(&mut self, speed: f32) {
        self.current_speed = speed;
        self.marking_offset = (self.marking_offset + speed).rem_euclid(self.marking_period);
        // rem_euclid can round up to exactly the period for tiny negatives
        if self.marking_offset >= self.marking_period {
            self.marking_offset = 0.0;
        }
    }

    pub fn left_edge(&self) -> f32 {
        (self.screen_width - self.width) / 2.0
    }

    pub fn right_edge(&self) -> f32 {
        (self.screen_width + self.width) / 2.0
    }

    /// `(left_edge, right_edge)`
    pub fn edges(&self) -> (f32, f32) {
        (self.left_edge(), self.right_edge())
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn marking_offset(&self) -> f32 {
        self.marking_offset
    }

    pub fn marking_period(&self) -> f32 {
        self.marking_period
    }

    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_edges_center_the_road() {
        let road = RoadTrack::new(&Tuning::default());
        assert_eq!(road.left_edge(), 200.0);
        assert_eq!(road.right_edge(), 600.0);
        assert_eq!(road.edges(), (200.0, 600.0));
    }

    #[test]
    fn test_marking_offset_wraps() {
        let mut road = RoadTrack::new(&Tuning::default());
        road.update(50.0);
        assert_eq!(road.marking_offset(), 50.0);
        road.update(15.0);
        assert!((road.marking_offset() - 5.0).abs() < 1e-4);
        road.update(60.0);
        assert!((road.marking_offset() - 5.0).abs() < 1e-4);
        assert_eq!(road.current_speed(), 60.0);
    }

    proptest! {
        #[test]
        fn prop_marking_offset_stays_in_period(speeds in prop::collection::vec(0.0f32..100.0, 0..200)) {
            let mut road = RoadTrack::new(&Tuning::default());
            for speed in speeds {
                road.update(speed);
                prop_assert!(road.marking_offset() >= 0.0);
                prop_assert!(road.marking_offset() < road.marking_period());
            }
        }
    }
}
