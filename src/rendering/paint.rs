//! Paint command set for the lettermark designs.
//!
//! Each command is drawn on its own transparent layer and composited over
//! the canvas, in order.

use image::Rgba;

/// Which of the two faces a text command uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceRole {
    Serif,
    Mono,
}

/// Vertical anchoring of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// The topmost inked pixel lands on this row
    InkTop(i32),
    /// The pen origin (ascender line) sits on this row
    Origin(i32),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Square outline `[inset, inset, size-inset-1, size-inset-1]`, growing inward.
    SquareOutline {
        inset: u32,
        width: u32,
        rgba: Rgba<u8>,
    },
    /// Horizontal line over the inclusive column range `x0..=x1`.
    HLine {
        x0: u32,
        x1: u32,
        y: u32,
        width: u32,
        rgba: Rgba<u8>,
    },
    /// A single line of text, horizontally centred on its ink width.
    CenteredText {
        text: String,
        face: FaceRole,
        px: u32,
        anchor: TextAnchor,
        rgba: Rgba<u8>,
    },
}

impl PaintCommand {
    /// Short label used in debug logging.
    pub fn kind(&self) -> &'static str {
        match self {
            PaintCommand::SquareOutline { .. } => "outline",
            PaintCommand::HLine { .. } => "line",
            PaintCommand::CenteredText { .. } => "text",
        }
    }
}

/// Insert a space between every character: `BARBER` -> `B A R B E R`.
pub fn letter_spaced(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (i, ch) in text.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
