//! Fixed-length frame stored in wire (GRB) order.

use crate::color::{OFF, Rgb, grb_bytes, rgb_from_grb};
use crate::error::Error;

/// One frame for an `N` LED strip
///
/// Pixels are kept as green, red, blue bytes so the buffer can be handed
/// to the encoder without reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<const N: usize> {
    pixels: [[u8; 3]; N],
}

impl<const N: usize> Frame<N> {
    /// All pixels off
    pub const fn off() -> Self {
        Self { pixels: [[0; 3]; N] }
    }

    /// Pack a frame from RGB colors
    pub fn from_colors(colors: &[Rgb; N]) -> Self {
        let mut frame = Self::off();
        for (pixel, color) in frame.pixels.iter_mut().zip(colors) {
            *pixel = grb_bytes(*color);
        }
        frame
    }

    /// Number of pixels
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Set one pixel
    pub fn set(&mut self, index: usize, color: Rgb) -> Result<(), Error> {
        let pixel = self.pixels.get_mut(index).ok_or(Error::InvalidArgument)?;
        *pixel = grb_bytes(color);
        Ok(())
    }

    /// Read one pixel back as RGB
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.pixels.get(index).copied().map(rgb_from_grb)
    }

    /// Every pixel as RGB
    pub fn colors(&self) -> [Rgb; N] {
        let mut colors = [OFF; N];
        for (color, pixel) in colors.iter_mut().zip(&self.pixels) {
            *color = rgb_from_grb(*pixel);
        }
        colors
    }

    /// Wire bytes: `G0 R0 B0 G1 R1 B1 ...`
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_flattened()
    }
}

impl<const N: usize> Default for Frame<N> {
    fn default() -> Self {
        Self::off()
    }
}
