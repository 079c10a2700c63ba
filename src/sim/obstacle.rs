//! Oncoming traffic: single obstacle cars and the spawner that owns them

use glam::Vec2;
use rand::Rng;

use super::collision::Rect;
use crate::consts::{OBSTACLE_HEIGHT, OBSTACLE_PALETTE_SIZE, OBSTACLE_WIDTH};
use crate::tuning::Tuning;

/// One oncoming car, driving straight down at a fixed speed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleVehicle {
    pub pos: Vec2,
    /// Downward speed (units per tick), fixed at spawn
    pub speed: f32,
    /// Set once the car leaves the screen without hitting the player
    pub passed: bool,
    /// Palette index for the renderer
    pub paint: u8,
}

impl ObstacleVehicle {
    pub fn new(x: f32, y: f32, speed: f32, paint: u8) -> Self {
        Self {
            pos: Vec2::new(x, y),
            speed,
            passed: false,
            paint,
        }
    }

    pub fn size() -> Vec2 {
        Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT)
    }

    pub fn advance(&mut self) {
        self.pos.y += self.speed;
    }

    /// Past the bottom edge by more than `margin`, so no part is visible
    pub fn is_off_screen(&self, screen_height: f32, margin: f32) -> bool {
        self.pos.y > screen_height + margin
    }

    /// Flag the car as passed. Returns true only the first time.
    pub fn mark_passed(&mut self) -> bool {
        if self.passed {
            return false;
        }
        self.passed = true;
        true
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::centered(self.pos, Self::size())
    }
}

/// Owns every live obstacle, in spawn order
#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    obstacles: Vec<ObstacleVehicle>,
    screen_height: f32,
    spawn_margin: f32,
    offscreen_margin: f32,
    speed_bonus: f32,
    speed_per_point: f32,
}

impl ObstacleSpawner {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            obstacles: Vec::new(),
            screen_height: tuning.screen_height,
            spawn_margin: tuning.spawn_margin,
            offscreen_margin: tuning.offscreen_margin,
            speed_bonus: tuning.obstacle_speed_bonus,
            speed_per_point: tuning.obstacle_speed_per_point,
        }
    }

    /// Spawn a car if the timer has reached the interval.
    ///
    /// The car appears just above the screen at a random x between the road
    /// edges (inset by the spawn margin) and moves faster than the road so it
    /// closes on the player. Returns a copy of the new car.
    pub fn try_spawn<R: Rng>(
        &mut self,
        spawn_timer: u32,
        spawn_interval: u32,
        (left_edge, right_edge): (f32, f32),
        road_speed: f32,
        score: u64,
        rng: &mut R,
    ) -> Option<ObstacleVehicle> {
        if spawn_timer < spawn_interval {
            return None;
        }

        let lo = left_edge + self.spawn_margin;
        let hi = right_edge - self.spawn_margin;
        let x = if lo < hi {
            rng.random_range(lo..=hi)
        } else {
            (left_edge + right_edge) / 2.0
        };
        let speed = road_speed + self.speed_bonus + score as f32 * self.speed_per_point;
        let paint = rng.random_range(0..OBSTACLE_PALETTE_SIZE);

        let car = ObstacleVehicle::new(x, -OBSTACLE_HEIGHT, speed, paint);
        log::trace!("spawned obstacle at x={:.1} speed={:.2}", x, speed);
        self.obstacles.push(car);
        Some(car)
    }

    /// Advance every car one tick and retire the ones that left the screen.
    ///
    /// Returns how many retired cars were passed for the first time, i.e.
    /// how many points the player earned this tick.
    pub fn advance_all(&mut self) -> u32 {
        let screen_height = self.screen_height;
        let margin = self.offscreen_margin;
        let mut scored = 0;

        self.obstacles.retain_mut(|car| {
            car.advance();
            if car.is_off_screen(screen_height, margin) {
                if car.mark_passed() {
                    scored += 1;
                }
                false
            } else {
                true
            }
        });

        scored
    }

    /// True if any live car overlaps `rect`
    pub fn any_collides_with(&self, rect: &Rect) -> bool {
        self.obstacles
            .iter()
            .any(|car| car.bounding_box().intersects(rect))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObstacleVehicle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Insert a car directly, bypassing the timer (tests and scripted setups)
    pub fn push(&mut self, car: ObstacleVehicle) {
        self.obstacles.push(car);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn spawner() -> ObstacleSpawner {
        ObstacleSpawner::new(&Tuning::default())
    }

    #[test]
    fn test_not_due_spawns_nothing() {
        let mut s = spawner();
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(s.try_spawn(59, 60, (200.0, 600.0), 5.0, 0, &mut rng).is_none());
        assert!(s.is_empty());
    }

    #[test]
    fn test_spawn_position_and_speed() {
        let mut s = spawner();
        let mut rng = Pcg32::seed_from_u64(7);
        for score in 0..50u64 {
            let car = s
                .try_spawn(120, 120, (200.0, 600.0), 5.0, score, &mut rng)
                .unwrap();
            assert!(car.pos.x >= 230.0 && car.pos.x <= 570.0);
            assert!(car.pos.y < 0.0);
            assert!((car.speed - (7.0 + score as f32 * 0.1)).abs() < 1e-4);
            assert!(car.paint < OBSTACLE_PALETTE_SIZE);
            assert!(!car.passed);
        }
        assert_eq!(s.len(), 50);
    }

    #[test]
    fn test_narrow_road_spawns_in_middle() {
        let mut s = spawner();
        let mut rng = Pcg32::seed_from_u64(3);
        let car = s.try_spawn(1, 1, (390.0, 410.0), 5.0, 0, &mut rng).unwrap();
        assert_eq!(car.pos.x, 400.0);
    }

    #[test]
    fn test_off_screen_detection() {
        let car = ObstacleVehicle::new(400.0, 650.0, 5.0, 0);
        assert!(!car.is_off_screen(600.0, 50.0));
        let car = ObstacleVehicle::new(400.0, 650.5, 5.0, 0);
        assert!(car.is_off_screen(600.0, 50.0));
    }

    #[test]
    fn test_obstacle_scores_once() {
        let mut car = ObstacleVehicle::new(400.0, 700.0, 5.0, 0);
        assert!(car.is_off_screen(600.0, 50.0));
        assert!(car.mark_passed());
        car.advance();
        assert!(car.is_off_screen(600.0, 50.0));
        assert!(!car.mark_passed());
        assert!(car.passed);
    }

    #[test]
    fn test_advance_all_retires_and_scores() {
        let mut s = spawner();
        s.push(ObstacleVehicle::new(300.0, 648.0, 5.0, 0)); // leaves this tick
        s.push(ObstacleVehicle::new(400.0, 100.0, 5.0, 1)); // stays
        let mut already = ObstacleVehicle::new(500.0, 660.0, 5.0, 2);
        already.passed = true; // leaves but was already counted
        s.push(already);

        assert_eq!(s.advance_all(), 1);
        assert_eq!(s.len(), 1);
        let remaining: Vec<_> = s.iter().collect();
        assert_eq!(remaining[0].pos, Vec2::new(400.0, 105.0));

        // Nothing left to score until the remaining car leaves
        assert_eq!(s.advance_all(), 0);
    }

    #[test]
    fn test_collision_query() {
        let mut s = spawner();
        s.push(ObstacleVehicle::new(400.0, 440.0, 5.0, 0));
        // Obstacle spans y 400..480, x 380..420
        let touching = Rect::new(380.0, 480.0, 50.0, 40.0);
        assert!(!s.any_collides_with(&touching));
        let overlapping = Rect::new(375.0, 470.0, 50.0, 40.0);
        assert!(s.any_collides_with(&overlapping));
        s.clear();
        assert!(!s.any_collides_with(&overlapping));
    }
}
