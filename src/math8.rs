//! 8-bit channel arithmetic.

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0), rounding down
///
/// Exact: `scale_linear(v, 255) == v` and `scale_linear(v, 0) == 0`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale_linear(value: u8, scale: u8) -> u8 {
    ((value as u16 * scale as u16) / 255) as u8
}

/// Scale an 8-bit value by a percentage (0-100), rounding down
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale_percent(value: u8, percent: u8) -> u8 {
    let percent = if percent > 100 { 100 } else { percent };
    ((value as u16 * percent as u16) / 100) as u8
}

/// Sine remapped from [-1, 1] to [0, 1]
#[inline]
pub fn smooth_sin(x: f32) -> f32 {
    (libm::sinf(x) + 1.0) / 2.0
}

/// Convert a unit interval value to a channel, saturating at both ends
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn unit_to_channel(value: f32) -> u8 {
    (value * 255.0) as u8
}
