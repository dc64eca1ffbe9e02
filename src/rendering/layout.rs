//! Scaled geometry for the icon and splash designs
//!
//! All icon coordinates are authored at 1024px and the splash at 200px;
//! other sizes scale linearly, rounding down.

use crate::palette::{BORDER_GOLD_15, BORDER_GOLD_30, GOLD, GOLD_50, GOLD_80};
use crate::palette::opaque;
use crate::rendering::paint::{letter_spaced, FaceRole, PaintCommand, TextAnchor};
use crate::rendering::{fraction_of, scale_px, scale_width, REFERENCE_SIZE, SPLASH_REFERENCE_SIZE};

pub const MARK_TEXT: &str = "AZ";
pub const SUBTITLE_TEXT: &str = "BARBER";

/// Icon geometry at one output size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconLayout {
    pub size: u32,
    pub outer_inset: u32,
    pub outer_width: u32,
    pub inner_inset: u32,
    pub inner_width: u32,
    pub mark_px: u32,
    pub mark_top: u32,
    pub line_y: u32,
    pub line_x0: u32,
    pub line_x1: u32,
    pub line_width: u32,
    pub subtitle_px: u32,
    pub subtitle_y: u32,
}

pub fn icon_layout(size: u32) -> IconLayout {
    let px = |r| scale_px(r, size, REFERENCE_SIZE);
    let width = |r| scale_width(r, size, REFERENCE_SIZE);
    IconLayout {
        size,
        outer_inset: px(40),
        outer_width: width(2),
        inner_inset: px(52),
        inner_width: width(1),
        mark_px: px(400),
        // visual centre sits a little above the middle
        mark_top: fraction_of(size, 0.22),
        line_y: px(630),
        line_x0: px(280),
        line_x1: px(744),
        line_width: width(2),
        subtitle_px: px(52),
        subtitle_y: px(670),
    }
}

impl IconLayout {
    /// Paint commands in compositing order. The background fill is implied.
    pub fn commands(&self) -> Vec<PaintCommand> {
        vec![
            PaintCommand::SquareOutline {
                inset: self.outer_inset,
                width: self.outer_width,
                rgba: BORDER_GOLD_30,
            },
            PaintCommand::SquareOutline {
                inset: self.inner_inset,
                width: self.inner_width,
                rgba: BORDER_GOLD_15,
            },
            PaintCommand::CenteredText {
                text: MARK_TEXT.to_string(),
                face: FaceRole::Serif,
                px: self.mark_px,
                anchor: TextAnchor::InkTop(self.mark_top as i32),
                rgba: opaque(GOLD),
            },
            PaintCommand::HLine {
                x0: self.line_x0,
                x1: self.line_x1,
                y: self.line_y,
                width: self.line_width,
                rgba: GOLD_50,
            },
            PaintCommand::CenteredText {
                text: letter_spaced(SUBTITLE_TEXT),
                face: FaceRole::Mono,
                px: self.subtitle_px,
                anchor: TextAnchor::Origin(self.subtitle_y as i32),
                rgba: GOLD_80,
            },
        ]
    }
}

/// Splash geometry: the mark only, no frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashLayout {
    pub size: u32,
    pub mark_px: u32,
    pub mark_top: u32,
}

pub fn splash_layout(size: u32) -> SplashLayout {
    SplashLayout {
        size,
        mark_px: scale_px(140, size, SPLASH_REFERENCE_SIZE),
        mark_top: fraction_of(size, 0.15),
    }
}

impl SplashLayout {
    pub fn commands(&self) -> Vec<PaintCommand> {
        vec![PaintCommand::CenteredText {
            text: MARK_TEXT.to_string(),
            face: FaceRole::Serif,
            px: self.mark_px,
            anchor: TextAnchor::InkTop(self.mark_top as i32),
            rgba: opaque(GOLD),
        }]
    }
}
