//! Ocean animation
//!
//! Three sine layers at different spatial and temporal frequencies summed
//! into a blue-green swell.

use super::{Animation, AnimationConfig};
use crate::color::Rgb;
use crate::math8::smooth_sin;
use crate::random::RandomSource;

const TIME_STEP: f32 = 0.05;

/// Ocean animation state
#[derive(Debug, Clone, Default)]
pub struct OceanAnimation {
    time: f32,
}

impl OceanAnimation {
    pub const fn new() -> Self {
        Self { time: 0.0 }
    }

    /// Accumulated wave time
    pub const fn time(&self) -> f32 {
        self.time
    }

    /// Combined wave height for one LED, 0.0-0.7
    #[allow(clippy::cast_precision_loss)]
    fn intensity(&self, index: usize) -> f32 {
        let x = index as f32;
        let wave1 = smooth_sin(self.time + x * 0.2) * 0.5;
        let wave2 = smooth_sin(self.time * 0.7 + x * 0.1) * 0.3;
        let wave3 = smooth_sin(self.time * 0.3 + x * 0.05) * 0.2;
        (wave1 + wave2 + wave3) * 0.7
    }
}

impl Animation for OceanAnimation {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render<R: RandomSource>(&mut self, _config: &AnimationConfig, _rng: &mut R, leds: &mut [Rgb]) {
        for (i, led) in leds.iter_mut().enumerate() {
            let intensity = self.intensity(i);
            *led = Rgb {
                r: 0,
                g: (50.0 + intensity * 50.0) as u8,
                b: (100.0 + intensity * 100.0) as u8,
            };
        }
        self.time += TIME_STEP;
    }

    fn reset(&mut self) {
        self.time = 0.0;
    }
}
