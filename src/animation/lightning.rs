//! Lightning animation
//!
//! Dark strip with rare bright blue-white flashes. A flash frame stays
//! up for [`LIGHTNING_HOLD`] on top of the normal frame interval, so
//! flash frames run longer than dark ones.

use embassy_time::Duration;

use super::{Animation, AnimationConfig};
use crate::color::{OFF, Rgb};
use crate::random::RandomSource;

/// Extra hold applied to every flash frame
pub const LIGHTNING_HOLD: Duration = Duration::from_millis(50);

/// Flash probability, in percent per frame
const FLASH_CHANCE: u32 = 5;
const INTENSITY_BASE: u8 = 200;
const INTENSITY_SPAN: u32 = 55;

/// Lightning animation state
#[derive(Debug, Clone, Default)]
pub struct LightningAnimation {
    flashed: bool,
}

impl LightningAnimation {
    pub const fn new() -> Self {
        Self { flashed: false }
    }

    /// Whether the last rendered frame was a flash
    pub const fn flashed(&self) -> bool {
        self.flashed
    }
}

impl Animation for LightningAnimation {
    #[allow(clippy::cast_possible_truncation)]
    fn render<R: RandomSource>(&mut self, _config: &AnimationConfig, rng: &mut R, leds: &mut [Rgb]) {
        self.flashed = rng.below(100) < FLASH_CHANCE;
        if !self.flashed {
            leds.fill(OFF);
            return;
        }

        for led in leds {
            let intensity = INTENSITY_BASE + rng.below(INTENSITY_SPAN) as u8;
            *led = Rgb {
                r: intensity,
                g: intensity,
                b: 255,
            };
        }
    }

    fn hold(&self) -> Duration {
        if self.flashed {
            LIGHTNING_HOLD
        } else {
            Duration::from_ticks(0)
        }
    }

    fn reset(&mut self) {
        self.flashed = false;
    }
}
