use crate::color::Rgb;

mod brightness;

pub use brightness::BrightnessFilter;

/// Post-processing step applied to every rendered frame
pub trait Filter {
    /// Apply the filter to a frame
    fn apply(&self, frame: &mut [Rgb]);
}
