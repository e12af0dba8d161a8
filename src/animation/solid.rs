//! Single color fill.

use super::{Animation, AnimationConfig};
use crate::color::{OFF, Rgb};
use crate::random::RandomSource;

/// Fills all LEDs with one color
///
/// Either a fixed color, or the base color of the active configuration.
#[derive(Debug, Clone)]
pub struct SolidAnimation {
    color: Option<Rgb>,
}

impl SolidAnimation {
    /// Every LED off
    pub const fn off() -> Self {
        Self { color: Some(OFF) }
    }

    /// Follow the configured base color
    pub const fn configured() -> Self {
        Self { color: None }
    }
}

impl Animation for SolidAnimation {
    fn render<R: RandomSource>(&mut self, config: &AnimationConfig, _rng: &mut R, leds: &mut [Rgb]) {
        let color = self.color.unwrap_or(config.color);
        leds.fill(color);
    }
}
