//! Semi-fixed timestep planning.
//!
//! Each frame's elapsed time is split into steps of at most `1 / TICK_RATE`
//! seconds; the last step carries the remainder. At most
//! `MAX_STEPS_PER_FRAME` steps run, and time beyond that is dropped so a
//! stall does not snowball into a catch-up burst.

use crate::types::{MAX_STEPS_PER_FRAME, TICK_RATE};

// Leftover time below this is rounding noise, not a step.
const EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemiFixedStep {
    step: f32,
    max_steps: usize,
}

impl SemiFixedStep {
    pub fn new(step: f32, max_steps: usize) -> Self {
        Self { step, max_steps }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Step sizes for a frame that took `frame_time` seconds
    pub fn plan(&self, frame_time: f32) -> Steps {
        Steps {
            left: frame_time.max(0.0),
            step: self.step,
            remaining: self.max_steps,
        }
    }
}

impl Default for SemiFixedStep {
    fn default() -> Self {
        Self::new(1.0 / TICK_RATE, MAX_STEPS_PER_FRAME)
    }
}

#[derive(Debug, Clone)]
pub struct Steps {
    left: f32,
    step: f32,
    remaining: usize,
}

impl Iterator for Steps {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.remaining == 0 || self.left <= EPSILON {
            return None;
        }
        let dt = self.left.min(self.step);
        self.left -= dt;
        self.remaining -= 1;
        Some(dt)
    }
}
