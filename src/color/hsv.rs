//! Integer HSV to RGB conversion on a 360/100/100 scale.

use super::Rgb;

/// Hue wraps at this value
pub const HSV_HUE_MAX: u16 = 360;
/// Full saturation
pub const HSV_SATURATION_MAX: u8 = 100;
/// Full value
pub const HSV_VALUE_MAX: u8 = 100;

const SECTOR_WIDTH: u32 = 60;

/// Convert a hue/saturation/value triple to RGB
///
/// `hue` is taken modulo 360. `sat` and `val` must not exceed 100; they
/// are not clamped here, callers validate them.
#[allow(clippy::many_single_char_names)]
pub fn hsv_to_rgb(hue: u16, sat: u8, val: u8) -> Rgb {
    debug_assert!(sat <= HSV_SATURATION_MAX && val <= HSV_VALUE_MAX);

    let hue = u32::from(hue % HSV_HUE_MAX);
    let max = u32::from(val) * 255 / 100;
    let min = max * u32::from(HSV_SATURATION_MAX.saturating_sub(sat)) / 100;

    let sector = hue / SECTOR_WIDTH;
    let diff = hue % SECTOR_WIDTH;
    let adj = (max - min) * diff / SECTOR_WIDTH;

    let (r, g, b) = match sector {
        0 => (max, min + adj, min),
        1 => (max - adj, max, min),
        2 => (min, max, min + adj),
        3 => (min, max - adj, max),
        4 => (min + adj, min, max),
        _ => (max, min, max - adj),
    };

    Rgb {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}

#[inline]
fn channel(value: u32) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}
