//! Fixed brand palette

use image::{Rgb, Rgba};

pub const GOLD: Rgb<u8> = Rgb([201, 169, 110]); // #C9A96E
pub const BG_COLOR: Rgb<u8> = Rgb([17, 17, 17]); // #111111

pub const BORDER_GOLD_30: Rgba<u8> = with_alpha(GOLD, 77);
pub const BORDER_GOLD_15: Rgba<u8> = with_alpha(GOLD, 38);
pub const GOLD_50: Rgba<u8> = with_alpha(GOLD, 128);
pub const GOLD_80: Rgba<u8> = with_alpha(GOLD, 204);

/// Attach an alpha channel to an opaque palette colour.
pub const fn with_alpha(color: Rgb<u8>, alpha: u8) -> Rgba<u8> {
    let [r, g, b] = color.0;
    Rgba([r, g, b, alpha])
}

/// Fully opaque variant of a palette colour.
pub const fn opaque(color: Rgb<u8>) -> Rgba<u8> {
    with_alpha(color, 255)
}
