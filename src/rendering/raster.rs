//! Rasterizer: executes paint commands onto an RGBA canvas

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use log::debug;

use crate::error::{Error, Result};
use crate::font::{Fonts, Typeface};
use crate::palette::{opaque, BG_COLOR};
use crate::rendering::layout::{icon_layout, splash_layout};
use crate::rendering::paint::{FaceRole, PaintCommand, TextAnchor};

/// Render the master icon at `size`. The result is opaque everywhere.
pub fn render_icon(size: u32, fonts: &Fonts) -> Result<RgbaImage> {
    if size == 0 {
        return Err(Error::InvalidSize(size));
    }
    let layout = icon_layout(size);
    debug!("Icon layout: {:?}", layout);
    let base = RgbaImage::from_pixel(size, size, opaque(BG_COLOR));
    Ok(rasterize(base, &layout.commands(), fonts))
}

/// Render the splash mark at `size`, flattened onto the background colour.
pub fn render_splash(size: u32, fonts: &Fonts) -> Result<RgbImage> {
    if size == 0 {
        return Err(Error::InvalidSize(size));
    }
    let layout = splash_layout(size);
    debug!("Splash layout: {:?}", layout);
    let base = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let canvas = rasterize(base, &layout.commands(), fonts);
    Ok(flatten(&canvas, BG_COLOR))
}

/// Composite every command, in order, over `base`.
fn rasterize(mut base: RgbaImage, commands: &[PaintCommand], fonts: &Fonts) -> RgbaImage {
    for cmd in commands {
        debug!("Painting {} layer", cmd.kind());
        let layer = paint_layer(base.width(), base.height(), cmd, fonts);
        composite_over(&mut base, &layer);
    }
    base
}

fn paint_layer(width: u32, height: u32, cmd: &PaintCommand, fonts: &Fonts) -> RgbaImage {
    let mut layer = RgbaImage::new(width, height);
    match cmd {
        PaintCommand::SquareOutline { inset, width: stroke, rgba } => {
            draw_square_outline(&mut layer, *inset, *stroke, *rgba);
        }
        PaintCommand::HLine { x0, x1, y, width: stroke, rgba } => {
            draw_hline(&mut layer, *x0, *x1, *y, *stroke, *rgba);
        }
        PaintCommand::CenteredText { text, face, px, anchor, rgba } => {
            let face: &dyn Typeface = match face {
                FaceRole::Serif => fonts.serif.as_ref(),
                FaceRole::Mono => fonts.mono.as_ref(),
            };
            draw_centered_text(&mut layer, face, text, *px, *anchor, *rgba);
        }
    }
    layer
}

/// Outline `[inset, inset, w-inset-1, h-inset-1]`; each extra unit of
/// stroke adds one ring inside the previous one.
fn draw_square_outline(layer: &mut RgbaImage, inset: u32, stroke: u32, rgba: Rgba<u8>) {
    let (w, h) = layer.dimensions();
    for ring in 0..stroke {
        let lo = inset + ring;
        let (Some(x1), Some(y1)) = (w.checked_sub(lo + 1), h.checked_sub(lo + 1)) else {
            break;
        };
        if lo > x1 || lo > y1 {
            break;
        }
        for x in lo..=x1 {
            layer.put_pixel(x, lo, rgba);
            layer.put_pixel(x, y1, rgba);
        }
        for y in lo..=y1 {
            layer.put_pixel(lo, y, rgba);
            layer.put_pixel(x1, y, rgba);
        }
    }
}

/// Rows `y - stroke/2 .. y - stroke/2 + stroke`, columns `x0..=x1`, clipped.
fn draw_hline(layer: &mut RgbaImage, x0: u32, x1: u32, y: u32, stroke: u32, rgba: Rgba<u8>) {
    let (w, h) = layer.dimensions();
    let top = y.saturating_sub(stroke / 2);
    let bottom = (top + stroke).min(h);
    let right = x1.min(w.saturating_sub(1));
    if x0 > right {
        return;
    }
    for yy in top..bottom {
        for xx in x0..=right {
            layer.put_pixel(xx, yy, rgba);
        }
    }
}

fn draw_centered_text(
    layer: &mut RgbaImage,
    face: &dyn Typeface,
    text: &str,
    px: u32,
    anchor: TextAnchor,
    rgba: Rgba<u8>,
) {
    let px = px as f32;
    let Some(ink) = face.ink_bounds(text, px) else {
        return;
    };
    let (w, h) = layer.dimensions();
    let x = (w as i32 - ink.width()).div_euclid(2);
    let y = match anchor {
        TextAnchor::InkTop(top) => top - ink.min_y,
        TextAnchor::Origin(origin) => origin,
    };
    debug!("Text {:?} ({}) at ({}, {}), ink {:?}", text, face.name(), x, y, ink);

    let [r, g, b, a] = rgba.0;
    face.draw(text, px, (x, y), &mut |qx, qy, coverage| {
        if qx < 0 || qy < 0 || qx as u32 >= w || qy as u32 >= h {
            return;
        }
        let alpha = (coverage.clamp(0.0, 1.0) * f32::from(a)).round() as u8;
        let pixel = layer.get_pixel_mut(qx as u32, qy as u32);
        if alpha > pixel[3] {
            *pixel = Rgba([r, g, b, alpha]);
        }
    });
}

/// Porter-Duff "over": composite `layer` onto `base` in place.
pub fn composite_over(base: &mut RgbaImage, layer: &RgbaImage) {
    for (dst, src) in base.pixels_mut().zip(layer.pixels()) {
        let sa = u32::from(src[3]);
        if sa == 0 {
            continue;
        }
        let da = u32::from(dst[3]);
        let out_a = sa + (da * (255 - sa) + 127) / 255;
        let denom = out_a * 255;
        let mut out = [0u8; 4];
        for c in 0..3 {
            let numer = u32::from(src[c]) * sa * 255 + u32::from(dst[c]) * da * (255 - sa);
            out[c] = ((numer + denom / 2) / denom).min(255) as u8;
        }
        out[3] = out_a.min(255) as u8;
        *dst = Rgba(out);
    }
}

/// Drop the alpha channel by blending every pixel onto `background`.
pub fn flatten(img: &RgbaImage, background: Rgb<u8>) -> RgbImage {
    let mut out = RgbImage::from_pixel(img.width(), img.height(), background);
    for (dst, src) in out.pixels_mut().zip(img.pixels()) {
        let a = u32::from(src[3]);
        for c in 0..3 {
            let v = u32::from(src[c]) * a + u32::from(background[c]) * (255 - a);
            dst[c] = ((v + 127) / 255) as u8;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BORDER_GOLD_30, GOLD};

    #[test]
    fn zero_size_is_rejected() {
        let fonts = Fonts::builtin();
        assert!(matches!(render_icon(0, &fonts), Err(Error::InvalidSize(0))));
        assert!(matches!(render_splash(0, &fonts), Err(Error::InvalidSize(0))));
    }

    #[test]
    fn over_an_opaque_base_stays_opaque() {
        let mut base = RgbaImage::from_pixel(2, 1, opaque(BG_COLOR));
        let mut layer = RgbaImage::new(2, 1);
        layer.put_pixel(0, 0, BORDER_GOLD_30);
        composite_over(&mut base, &layer);
        assert_eq!(base.get_pixel(0, 0)[3], 255);
        assert_eq!(*base.get_pixel(1, 0), opaque(BG_COLOR));
        // 30% gold over near-black lands between the two
        let red = base.get_pixel(0, 0)[0];
        assert!(red > BG_COLOR[0] && red < GOLD[0], "red channel {}", red);
    }

    #[test]
    fn over_a_transparent_base_keeps_source() {
        let mut base = RgbaImage::new(1, 1);
        let mut layer = RgbaImage::new(1, 1);
        layer.put_pixel(0, 0, Rgba([10, 20, 30, 128]));
        composite_over(&mut base, &layer);
        assert_eq!(*base.get_pixel(0, 0), Rgba([10, 20, 30, 128]));
    }

    #[test]
    fn flatten_blends_onto_background() {
        let mut img = RgbaImage::new(3, 1);
        img.put_pixel(1, 0, Rgba([255, 255, 255, 255]));
        img.put_pixel(2, 0, Rgba([255, 255, 255, 128]));
        let flat = flatten(&img, Rgb([0, 0, 0]));
        assert_eq!(*flat.get_pixel(0, 0), Rgb([0, 0, 0]));
        assert_eq!(*flat.get_pixel(1, 0), Rgb([255, 255, 255]));
        assert_eq!(*flat.get_pixel(2, 0), Rgb([128, 128, 128]));
    }

    #[test]
    fn outline_ring_is_inclusive() {
        let mut layer = RgbaImage::new(10, 10);
        let c = Rgba([1, 2, 3, 4]);
        draw_square_outline(&mut layer, 2, 1, c);
        assert_eq!(*layer.get_pixel(2, 2), c);
        assert_eq!(*layer.get_pixel(7, 7), c);
        assert_eq!(*layer.get_pixel(7, 2), c);
        assert_eq!(layer.get_pixel(3, 3)[3], 0);
        assert_eq!(layer.get_pixel(8, 8)[3], 0);
    }

    #[test]
    fn outline_that_meets_itself_stops() {
        let mut layer = RgbaImage::new(4, 4);
        draw_square_outline(&mut layer, 1, 5, Rgba([9, 9, 9, 9]));
        // rings at 1 fit, ring 2 would invert
        assert_eq!(layer.get_pixel(0, 0)[3], 0);
        assert_eq!(layer.get_pixel(1, 1)[3], 9);
        assert_eq!(layer.get_pixel(2, 2)[3], 9);
    }

    #[test]
    fn hline_covers_stroke_rows() {
        let mut layer = RgbaImage::new(20, 20);
        let c = Rgba([5, 5, 5, 200]);
        draw_hline(&mut layer, 3, 15, 10, 2, c);
        assert_eq!(*layer.get_pixel(3, 9), c);
        assert_eq!(*layer.get_pixel(15, 10), c);
        assert_eq!(layer.get_pixel(16, 10)[3], 0);
        assert_eq!(layer.get_pixel(5, 8)[3], 0);
        assert_eq!(layer.get_pixel(5, 11)[3], 0);
    }

    #[test]
    fn hline_is_clipped_to_canvas() {
        let mut layer = RgbaImage::new(8, 8);
        draw_hline(&mut layer, 2, 100, 7, 4, Rgba([1, 1, 1, 1]));
        assert_eq!(layer.get_pixel(7, 7)[3], 1);
        assert_eq!(layer.get_pixel(7, 5)[3], 1);
    }

    #[test]
    fn centered_text_is_centered_on_ink() {
        let mut layer = RgbaImage::new(40, 20);
        let face = crate::font::BuiltinFace::new();
        draw_centered_text(&mut layer, &face, "AZ", 16, TextAnchor::InkTop(3), Rgba([7, 7, 7, 255]));
        // ink is 22px wide -> starts at (40 - 22) / 2
        let lit: Vec<(u32, u32)> = layer
            .enumerate_pixels()
            .filter(|(_, _, p)| p[3] > 0)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(lit.iter().map(|p| p.0).min(), Some(9));
        assert_eq!(lit.iter().map(|p| p.0).max(), Some(30));
        assert_eq!(lit.iter().map(|p| p.1).min(), Some(3));
    }

    fn lit_extent(layer: &RgbaImage) -> (u32, u32, u32, u32) {
        let lit: Vec<(u32, u32)> = layer
            .enumerate_pixels()
            .filter(|(_, _, p)| p[3] > 0)
            .map(|(x, y, _)| (x, y))
            .collect();
        let min_x = lit.iter().map(|p| p.0).min().expect("ink");
        let max_x = lit.iter().map(|p| p.0).max().expect("ink");
        let min_y = lit.iter().map(|p| p.1).min().expect("ink");
        let max_y = lit.iter().map(|p| p.1).max().expect("ink");
        (min_x, min_y, max_x, max_y)
    }

    #[test]
    fn truetype_mark_is_anchored_and_centered() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSerif-Bold.ttf");
        let face = crate::font::OutlineFace::from_bytes("serif", std::fs::read(path).expect("read fixture"))
            .expect("parse fixture");
        let layout = icon_layout(1024);
        let ink = face.ink_bounds("AZ", layout.mark_px as f32).expect("ink");

        let mut layer = RgbaImage::new(1024, 1024);
        let anchor = TextAnchor::InkTop(layout.mark_top as i32);
        draw_centered_text(&mut layer, &face, "AZ", layout.mark_px, anchor, Rgba([7, 7, 7, 255]));
        let (min_x, min_y, max_x, max_y) = lit_extent(&layer);

        let top = layout.mark_top;
        assert!(min_y >= top && min_y <= top + 1, "ink top {} vs anchor {}", min_y, top);

        // pen sits at (S - ink_width) / 2, so the ink starts ink.min_x further right
        let left = (1024 - ink.width()).div_euclid(2) + ink.min_x;
        let right = left + ink.width() - 1;
        assert!((min_x as i32 - left).abs() <= 2, "ink left {} vs {}", min_x, left);
        assert!((max_x as i32 - right).abs() <= 2, "ink right {} vs {}", max_x, right);

        // cap height of an em-sized 400px face, well short of the full em
        let height = max_y - min_y + 1;
        assert!(height > 250 && height < 330, "ink height {}", height);
    }
}
