//! Typeface loading
//!
//! Both faces of the design are loaded from TrueType files. Loading never
//! fails: a face that cannot be read or parsed is replaced by the
//! [`BuiltinFace`] and a warning is logged.

pub mod builtin;

use std::path::Path;

use ab_glyph::{point, Font, FontVec, Glyph, GlyphId, PxScale, ScaleFont};
use log::{debug, warn};

pub use builtin::BuiltinFace;

/// Ink box of a text run, in whole pixels relative to the pen origin.
/// The origin is the left end of the ascender line; `max_*` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InkBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl InkBounds {
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn union(&self, other: &InkBounds) -> InkBounds {
        InkBounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// A face that can measure and rasterize a single line of text.
pub trait Typeface {
    /// Human readable face name, used in log messages
    fn name(&self) -> &str;

    /// Whether this is the built-in substitute face
    fn is_builtin(&self) -> bool {
        false
    }

    /// Ink bounds of `text` at `px` with the pen at the origin, or `None`
    /// when nothing would be drawn.
    fn ink_bounds(&self, text: &str, px: f32) -> Option<InkBounds>;

    /// Rasterize `text` with the pen at `origin`, calling `plot(x, y, coverage)`
    /// for every touched pixel. Coordinates may fall outside the canvas.
    fn draw(&self, text: &str, px: f32, origin: (i32, i32), plot: &mut dyn FnMut(i32, i32, f32));
}

/// A TrueType/OpenType face backed by `ab_glyph`.
pub struct OutlineFace {
    name: String,
    font: FontVec,
}

impl OutlineFace {
    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>) -> Result<Self, ab_glyph::InvalidFont> {
        let font = FontVec::try_from_vec(data)?;
        Ok(Self { name: name.into(), font })
    }

    /// `px` is the em size. `PxScale` measures ascent to descent, so convert
    /// through the face's own height/em ratio.
    pub fn scale_for(&self, px: f32) -> PxScale {
        match self.font.units_per_em() {
            Some(upem) if upem > 0.0 => PxScale::from(px * self.font.height_unscaled() / upem),
            _ => PxScale::from(px),
        }
    }

    fn layout(&self, text: &str, px: f32, origin: (f32, f32)) -> Vec<Glyph> {
        let scaled = self.font.as_scaled(self.scale_for(px));
        let mut caret = point(origin.0, origin.1 + scaled.ascent());
        let mut previous: Option<GlyphId> = None;
        let mut glyphs = Vec::with_capacity(text.len());

        for ch in text.chars() {
            let mut glyph = scaled.scaled_glyph(ch);
            if let Some(prev) = previous {
                caret.x += scaled.kern(prev, glyph.id);
            }
            glyph.position = caret;
            caret.x += scaled.h_advance(glyph.id);
            previous = Some(glyph.id);
            glyphs.push(glyph);
        }
        glyphs
    }
}

impl Typeface for OutlineFace {
    fn name(&self) -> &str {
        &self.name
    }

    fn ink_bounds(&self, text: &str, px: f32) -> Option<InkBounds> {
        let mut bounds: Option<InkBounds> = None;
        for glyph in self.layout(text, px, (0.0, 0.0)) {
            let Some(outlined) = self.font.outline_glyph(glyph) else { continue };
            let r = outlined.px_bounds();
            let glyph_bounds = InkBounds {
                min_x: r.min.x.floor() as i32,
                min_y: r.min.y.floor() as i32,
                max_x: r.max.x.ceil() as i32,
                max_y: r.max.y.ceil() as i32,
            };
            bounds = Some(match bounds {
                Some(b) => b.union(&glyph_bounds),
                None => glyph_bounds,
            });
        }
        bounds
    }

    fn draw(&self, text: &str, px: f32, origin: (i32, i32), plot: &mut dyn FnMut(i32, i32, f32)) {
        for glyph in self.layout(text, px, (origin.0 as f32, origin.1 as f32)) {
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let r = outlined.px_bounds();
                let (left, top) = (r.min.x as i32, r.min.y as i32);
                outlined.draw(|x, y, coverage| plot(left + x as i32, top + y as i32, coverage));
            }
        }
    }
}

/// The two faces used by the lettermark.
pub struct Fonts {
    /// Bold serif used for the "AZ" mark
    pub serif: Box<dyn Typeface>,
    /// Medium monospace used for the subtitle
    pub mono: Box<dyn Typeface>,
}

impl Fonts {
    /// Load both faces, substituting the built-in face for any that fail.
    pub fn load(serif_path: &Path, mono_path: &Path) -> Self {
        Self {
            serif: load_face("Playfair Display", serif_path),
            mono: load_face("JetBrains Mono", mono_path),
        }
    }

    /// Both faces replaced by the built-in face. Output is fully deterministic.
    pub fn builtin() -> Self {
        Self {
            serif: Box::new(BuiltinFace::new()),
            mono: Box::new(BuiltinFace::new()),
        }
    }
}

/// Load a face from disk, falling back to [`BuiltinFace`] on any failure.
pub fn load_face(label: &str, path: &Path) -> Box<dyn Typeface> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            warn!("Could not load {} font from {}: {}", label, path.display(), e);
            return Box::new(BuiltinFace::new());
        }
    };
    match OutlineFace::from_bytes(label, data) {
        Ok(face) => {
            debug!("Loaded {} font from {}", label, path.display());
            Box::new(face)
        }
        Err(e) => {
            warn!("Could not load {} font from {}: {}", label, path.display(), e);
            Box::new(BuiltinFace::new())
        }
    }
}
