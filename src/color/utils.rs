use crate::{color::Rgb, math8::scale_linear};

/// Wire layout of one pixel: green, red, blue
#[inline]
pub const fn grb_bytes(color: Rgb) -> [u8; 3] {
    [color.g, color.r, color.b]
}

/// Inverse of [`grb_bytes`]
#[inline]
pub const fn rgb_from_grb(bytes: [u8; 3]) -> Rgb {
    Rgb {
        r: bytes[1],
        g: bytes[0],
        b: bytes[2],
    }
}

/// Unpack a `0xRRGGBB` word
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Scale every channel by `scale / 255`, rounding down
#[inline]
pub const fn scale_color(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale_linear(color.r, scale),
        g: scale_linear(color.g, scale),
        b: scale_linear(color.b, scale),
    }
}
