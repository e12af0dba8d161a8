//! Fire animation
//!
//! Red/orange flicker, every LED re-randomized every frame.

use super::{Animation, AnimationConfig};
use crate::color::Rgb;
use crate::random::RandomSource;

const GREEN_BASE: u8 = 50;
const FLICKER_SPAN: u32 = 55;

/// Stateless flicker
#[derive(Debug, Clone, Default)]
pub struct FireAnimation;

impl Animation for FireAnimation {
    #[allow(clippy::cast_possible_truncation)]
    fn render<R: RandomSource>(&mut self, _config: &AnimationConfig, rng: &mut R, leds: &mut [Rgb]) {
        for led in leds {
            let flicker = rng.below(FLICKER_SPAN) as u8;
            *led = Rgb {
                r: 255,
                g: GREEN_BASE + flicker,
                b: 0,
            };
        }
    }
}
