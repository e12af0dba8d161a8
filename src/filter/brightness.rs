//! Global brightness
//!
//! Applied uniformly after every animation, including the ones that
//! already scale their own output.

use super::Filter;
use crate::color::{OFF, Rgb, scale_color};

/// Brightness post-scaling, `channel * brightness / 255` rounded down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessFilter {
    brightness: u8,
}

impl BrightnessFilter {
    pub const fn new(brightness: u8) -> Self {
        Self { brightness }
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set(&mut self, brightness: u8) {
        self.brightness = brightness;
    }
}

impl Filter for BrightnessFilter {
    fn apply(&self, frame: &mut [Rgb]) {
        match self.brightness {
            255 => {}
            0 => frame.fill(OFF),
            brightness => {
                for pixel in frame.iter_mut() {
                    *pixel = scale_color(*pixel, brightness);
                }
            }
        }
    }
}
