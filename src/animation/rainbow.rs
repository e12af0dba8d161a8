//! Rainbow cycling animation
//!
//! Spreads the full hue circle evenly across the strip and rotates it by
//! one degree per frame.

use super::{Animation, AnimationConfig};
use crate::color::{HSV_HUE_MAX, HSV_SATURATION_MAX, HSV_VALUE_MAX, Rgb, hsv_to_rgb};
use crate::random::RandomSource;

/// Rainbow animation state
#[derive(Debug, Clone, Default)]
pub struct RainbowAnimation {
    /// Hue of the first LED, 0-359
    hue: u16,
}

impl RainbowAnimation {
    pub const fn new() -> Self {
        Self { hue: 0 }
    }

    /// Hue of the first LED for the next frame
    pub const fn hue(&self) -> u16 {
        self.hue
    }
}

impl Animation for RainbowAnimation {
    #[allow(clippy::cast_possible_truncation)]
    fn render<R: RandomSource>(&mut self, config: &AnimationConfig, _rng: &mut R, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        // Brightness doubles as the HSV value, which tops out at 100.
        let value = config.brightness.min(HSV_VALUE_MAX);
        let count = leds.len();
        for (i, led) in leds.iter_mut().enumerate() {
            let offset = (i * usize::from(HSV_HUE_MAX) / count) as u16;
            let hue = (self.hue + offset) % HSV_HUE_MAX;
            *led = hsv_to_rgb(hue, HSV_SATURATION_MAX, value);
        }

        self.hue = (self.hue + 1) % HSV_HUE_MAX;
    }

    fn reset(&mut self) {
        self.hue = 0;
    }
}
