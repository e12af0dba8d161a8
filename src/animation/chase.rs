//! Single moving dot.

use super::{Animation, AnimationConfig};
use crate::color::{OFF, Rgb};
use crate::random::RandomSource;

/// Chase animation state
#[derive(Debug, Clone, Default)]
pub struct ChaseAnimation {
    position: usize,
}

impl ChaseAnimation {
    pub const fn new() -> Self {
        Self { position: 0 }
    }

    /// LED lit by the next frame
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl Animation for ChaseAnimation {
    fn render<R: RandomSource>(&mut self, config: &AnimationConfig, _rng: &mut R, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        leds.fill(OFF);
        let position = self.position % leds.len();
        leds[position] = config.color;
        self.position = (position + 1) % leds.len();
    }

    fn reset(&mut self) {
        self.position = 0;
    }
}
