//! Aurora curtains
//!
//! Flowing green/purple curtains. The same three-layer wave sum as the
//! ocean drives the overall intensity, and each layer additionally tints
//! one channel so the hue drifts along the strip.

use super::{Animation, AnimationConfig};
use crate::color::Rgb;
use crate::math8::{smooth_sin, unit_to_channel};
use crate::random::RandomSource;

const TIME_STEP: f32 = 0.03;

/// Aurora animation state
#[derive(Debug, Clone, Default)]
pub struct AuroraAnimation {
    time: f32,
}

impl AuroraAnimation {
    pub const fn new() -> Self {
        Self { time: 0.0 }
    }

    /// Accumulated wave time
    pub const fn time(&self) -> f32 {
        self.time
    }

    #[allow(clippy::cast_precision_loss)]
    fn sample(&self, index: usize, count: usize) -> Rgb {
        // Position along the strip, 0.0-1.0
        let pos = index as f32 / count as f32;
        let wave1 = smooth_sin(self.time + pos * 3.0) * 0.5;
        let wave2 = smooth_sin(self.time * 0.7 + pos * 2.0) * 0.3;
        let wave3 = smooth_sin(self.time * 0.3 + pos) * 0.2;
        let intensity = (wave1 + wave2 + wave3) * 0.8;

        Rgb {
            r: unit_to_channel((0.3 + wave3 * 0.7) * intensity),
            g: unit_to_channel((0.7 + wave1 * 0.3) * intensity),
            b: unit_to_channel((0.5 + wave2 * 0.5) * intensity),
        }
    }
}

impl Animation for AuroraAnimation {
    fn render<R: RandomSource>(&mut self, _config: &AnimationConfig, _rng: &mut R, leds: &mut [Rgb]) {
        let count = leds.len();
        for (i, led) in leds.iter_mut().enumerate() {
            *led = self.sample(i, count);
        }
        self.time += TIME_STEP;
    }

    fn reset(&mut self) {
        self.time = 0.0;
    }
}
