//! Platform abstraction layer
//!
//! Frontends report which logical keys are held each frame. [`InputLatch`]
//! turns that into a [`TickInput`]: steering and throttle pass straight
//! through, one-shot actions fire only on the frame a key goes down.

use crate::sim::TickInput;

/// Logical keys currently held down. Physical key mapping is the
/// frontend's business (arrows and WASD both steer in the original layout).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub horn: bool,
    pub headlights: bool,
    pub confirm: bool,
    pub cancel: bool,
}

/// Rising-edge detector over successive [`HeldKeys`] snapshots
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    previous: HeldKeys,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the input for the next tick from the keys held right now
    pub fn next(&mut self, held: HeldKeys) -> TickInput {
        let prev = self.previous;
        self.previous = held;
        TickInput {
            move_left: held.left,
            move_right: held.right,
            accelerate: held.up,
            brake: held.down,
            honk: held.horn && !prev.horn,
            toggle_headlights: held.headlights && !prev.headlights,
            confirm: held.confirm && !prev.confirm,
            cancel: held.cancel && !prev.cancel,
        }
    }

    /// Forget held state, e.g. after the window loses focus
    pub fn reset(&mut self) {
        self.previous = HeldKeys::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_pass_through() {
        let mut latch = InputLatch::new();
        let held = HeldKeys {
            left: true,
            up: true,
            ..Default::default()
        };
        for _ in 0..3 {
            let input = latch.next(held);
            assert!(input.move_left && input.accelerate);
            assert!(!input.move_right && !input.brake);
        }
    }

    #[test]
    fn test_one_shot_fires_once_per_press() {
        let mut latch = InputLatch::new();
        let horn = HeldKeys {
            horn: true,
            ..Default::default()
        };
        assert!(latch.next(horn).honk);
        assert!(!latch.next(horn).honk);
        assert!(!latch.next(horn).honk);
        assert!(!latch.next(HeldKeys::default()).honk);
        assert!(latch.next(horn).honk);
    }

    #[test]
    fn test_reset_rearms_edges() {
        let mut latch = InputLatch::new();
        let confirm = HeldKeys {
            confirm: true,
            ..Default::default()
        };
        assert!(latch.next(confirm).confirm);
        latch.reset();
        assert!(latch.next(confirm).confirm);
    }
}
