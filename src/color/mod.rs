mod hsv;
mod utils;

pub use hsv::{HSV_HUE_MAX, HSV_SATURATION_MAX, HSV_VALUE_MAX, hsv_to_rgb};
use smart_leds::RGB8;
pub use utils::{grb_bytes, rgb_from_grb, rgb_from_u32, scale_color};

pub type Rgb = RGB8;

/// All channels off
pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// All channels at full scale
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
