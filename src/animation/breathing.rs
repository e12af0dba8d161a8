//! Breathing animation
//!
//! Fades the base color in and out as a triangle wave, one percent per
//! frame. The global brightness is applied on top, so the two scales
//! compound.

use super::{Animation, AnimationConfig};
use crate::color::Rgb;
use crate::math8::scale_percent;
use crate::random::RandomSource;

const LEVEL_MAX: u8 = 100;

/// Breathing animation state
#[derive(Debug, Clone)]
pub struct BreathingAnimation {
    /// Amplitude in percent
    level: u8,
    rising: bool,
}

impl Default for BreathingAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl BreathingAnimation {
    pub const fn new() -> Self {
        Self {
            level: LEVEL_MAX,
            rising: true,
        }
    }

    /// Current amplitude, 0.0-1.0
    pub fn amplitude(&self) -> f32 {
        f32::from(self.level) / f32::from(LEVEL_MAX)
    }

    /// Current amplitude in percent
    pub const fn level(&self) -> u8 {
        self.level
    }

    pub const fn is_rising(&self) -> bool {
        self.rising
    }

    fn step(&mut self) {
        if self.rising {
            self.level = self.level.saturating_add(1).min(LEVEL_MAX);
            if self.level == LEVEL_MAX {
                self.rising = false;
            }
        } else {
            self.level = self.level.saturating_sub(1);
            if self.level == 0 {
                self.rising = true;
            }
        }
    }
}

impl Animation for BreathingAnimation {
    fn render<R: RandomSource>(&mut self, config: &AnimationConfig, _rng: &mut R, leds: &mut [Rgb]) {
        self.step();

        let color = Rgb {
            r: scale_percent(config.color.r, self.level),
            g: scale_percent(config.color.g, self.level),
            b: scale_percent(config.color.b, self.level),
        };
        leds.fill(color);
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}
