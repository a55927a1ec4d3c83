#![forbid(unsafe_code)]

//! Drawing primitives for the surface.
//!
//! Ergonomic helpers on top of [`Surface::set`] so the overlay can paint
//! panel backgrounds and stamp aligned text without duplicating low-level
//! cell loops. Text width is measured with Unicode display-width
//! semantics, which is also how the overlay derives its shared label
//! column.

use crate::cell::Cell;
use crate::surface::Surface;
use thud_core::geometry::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in cells.
#[inline]
pub fn text_width(text: &str) -> u16 {
    UnicodeWidthStr::width(text) as u16
}

/// Extension trait for drawing on a [`Surface`].
pub trait Draw {
    /// Fill a rectangular region with blank cells of the given background.
    fn fill_rect(&mut self, rect: Rect, bg: crate::cell::Rgba);

    /// Stamp text at (x, y) using the colors of `base`.
    ///
    /// Glyphs replace cell content; fg/bg come from `base`. Stops at the
    /// surface edge. Returns the x position after the last glyph.
    fn print_text(&mut self, x: u16, y: u16, text: &str, base: Cell) -> u16;

    /// Stamp text with a right-side clipping boundary.
    ///
    /// Like [`Draw::print_text`] but stops at `max_x` (exclusive).
    /// Returns the x position after the last glyph.
    fn print_text_clipped(&mut self, x: u16, y: u16, text: &str, base: Cell, max_x: u16) -> u16;

    /// Stamp text right-aligned so it ends at `end_x` (exclusive).
    ///
    /// Text wider than `[min_x, end_x)` is stamped from `min_x` and
    /// clipped on the right, keeping the leading (most significant)
    /// glyphs visible. Returns the x position of the first glyph.
    fn print_text_right(&mut self, min_x: u16, end_x: u16, y: u16, text: &str, base: Cell) -> u16;

    /// Stamp text centered within the given rect's top row.
    fn print_text_centered(&mut self, rect: Rect, text: &str, base: Cell);
}

impl Draw for Surface {
    fn fill_rect(&mut self, rect: Rect, bg: crate::cell::Rgba) {
        self.fill(rect, Cell::blank(bg));
    }

    fn print_text(&mut self, x: u16, y: u16, text: &str, base: Cell) -> u16 {
        self.print_text_clipped(x, y, text, base, self.width())
    }

    fn print_text_clipped(&mut self, x: u16, y: u16, text: &str, base: Cell, max_x: u16) -> u16 {
        let mut cx = x;
        for c in text.chars() {
            let width = UnicodeWidthChar::width(c).unwrap_or(0);
            if width == 0 {
                continue;
            }
            if cx >= max_x || cx + width as u16 > max_x {
                break;
            }
            self.set(cx, y, base.with_char(c));
            cx = cx.saturating_add(width as u16);
        }
        cx
    }

    fn print_text_right(&mut self, min_x: u16, end_x: u16, y: u16, text: &str, base: Cell) -> u16 {
        let w = text_width(text);
        let start = if end_x.saturating_sub(min_x) >= w {
            end_x - w
        } else {
            min_x
        };
        self.print_text_clipped(start, y, text, base, end_x);
        start
    }

    fn print_text_centered(&mut self, rect: Rect, text: &str, base: Cell) {
        if rect.is_empty() {
            return;
        }
        let w = text_width(text);
        let start = rect.x + rect.width.saturating_sub(w) / 2;
        self.print_text_clipped(start, rect.y, text, base, rect.right());
    }
}
