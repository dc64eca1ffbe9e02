//! Rendering: scaled layout, paint commands and the rasterizer

pub mod layout;
pub mod paint;
pub mod raster;

pub use layout::{icon_layout, splash_layout, IconLayout, SplashLayout};
pub use paint::PaintCommand;
pub use raster::{composite_over, flatten, render_icon, render_splash};

/// Resolution every icon coordinate is authored at.
pub const REFERENCE_SIZE: u32 = 1024;
/// Resolution the splash coordinates are authored at.
pub const SPLASH_REFERENCE_SIZE: u32 = 200;

/// Scale a reference length to `size`, rounding down.
pub fn scale_px(reference: u32, size: u32, reference_size: u32) -> u32 {
    (u64::from(reference) * u64::from(size) / u64::from(reference_size)) as u32
}

/// Scale a stroke width; strokes never vanish.
pub fn scale_width(reference: u32, size: u32, reference_size: u32) -> u32 {
    scale_px(reference, size, reference_size).max(1)
}

/// Scale by a fraction of the canvas, rounding down.
pub fn fraction_of(size: u32, fraction: f64) -> u32 {
    (f64::from(size) * fraction) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_rounds_down() {
        assert_eq!(scale_px(40, 1024, REFERENCE_SIZE), 40);
        assert_eq!(scale_px(40, 48, REFERENCE_SIZE), 1);
        assert_eq!(scale_px(40, 512, REFERENCE_SIZE), 20);
        assert_eq!(scale_px(52, 100, REFERENCE_SIZE), 5);
    }

    #[test]
    fn widths_have_a_floor_of_one() {
        assert_eq!(scale_width(2, 48, REFERENCE_SIZE), 1);
        assert_eq!(scale_width(2, 2048, REFERENCE_SIZE), 4);
    }

    #[test]
    fn fractions_follow_the_canvas() {
        assert_eq!(fraction_of(1024, 0.22), 225);
        assert_eq!(fraction_of(200, 0.15), 30);
    }
}
