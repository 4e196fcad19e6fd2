#![forbid(unsafe_code)]

//! Measurement and placement of the toast stack.
//!
//! Widths are display columns via `unicode-width`, so CJK text and
//! wide symbols measure correctly in a terminal grid.

use unicode_width::UnicodeWidthStr;

use crate::host::ActiveToast;

/// Horizontal chrome around the content: border, icon cell, padding.
const CHROME_WIDTH: u16 = 4;

/// Narrowest box worth drawing.
const MIN_WIDTH: u16 = 12;

/// An axis-aligned cell rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// First column past the right edge.
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// First row past the bottom edge.
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }
}

/// A toast with its computed screen position for this frame.
#[derive(Debug)]
pub struct PlacedToast<'a> {
    pub toast: &'a ActiveToast,
    pub rect: Rect,
    /// `0.0..=1.0`, driven by the entrance and exit animations.
    pub opacity: f32,
}

/// Box size for a toast: bordered, one content line plus an optional
/// title line, width fitted to the wider of the two.
pub(crate) fn measure(toast: &ActiveToast, max_width: u16) -> (u16, u16) {
    // Icon cell plus a space ahead of the message.
    let message_width = toast.message.width() as u16 + 2;
    let title_width = toast.display_title().width() as u16;
    let content = message_width.max(title_width);
    let width = content
        .saturating_add(CHROME_WIDTH)
        .clamp(MIN_WIDTH, max_width.max(MIN_WIDTH));
    let height = if toast.title.is_some() { 4 } else { 3 };
    (width, height)
}

/// Interpolate between two rows with fractional rounding.
pub(crate) fn lerp_row(from: u16, to: u16, t: f32) -> u16 {
    let from = f32::from(from);
    let to = f32::from(to);
    (from + (to - from) * t).round() as u16
}
