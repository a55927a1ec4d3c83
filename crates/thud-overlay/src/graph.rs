#![forbid(unsafe_code)]

//! Strip-chart graph engine.
//!
//! Each channel's plot region is its own history: a new sample shifts
//! the region one column left and paints only the vacated rightmost
//! column as a bottom-anchored bar. Full cells use the solid block, the
//! fractional top uses one of the eighth-block glyphs, giving
//! [`BAR_LEVELS`] discrete bar heights across [`PLOT_ROWS`] rows.

use crate::layout::{BAR_LEVELS, GRAPH_PANELS_COUNT, PLOT_ROWS};
use crate::overlay::DebugOverlay;
use crate::theme::{CHANNELS, ChannelSpec};
use thud_core::geometry::Rect;
use thud_render::{Cell, Draw};

/// Bar glyphs by eighth (9 levels: empty + 8 partial-to-full blocks).
const BAR_GLYPHS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Map a sample to a bar height in eighth-cell units.
///
/// The value is clamped into `[0, max_value]` first, so over- and
/// under-range samples plot as full and empty bars.
fn bar_eighths(value: f64, max_value: f64) -> u16 {
    let clamped = value.clamp(0.0, max_value);
    ((clamped / max_value) * f64::from(BAR_LEVELS)).round() as u16
}

impl DebugOverlay {
    /// Paint one channel's static chrome: plot and caption backgrounds,
    /// the baseline divider, and the channel name.
    pub(crate) fn init_graph(&mut self, index: usize, spec: &ChannelSpec) {
        let g = self.layout().graphs[index];
        let surface = self.surface_mut();
        surface.fill_rect(g.panel, spec.plot_bg);
        surface.fill_rect(g.caption, spec.strip_bg);

        let divider_fg = spec.fg.with_opacity(0.7).over(spec.plot_bg);
        surface.fill(
            g.divider,
            Cell::from_char('─').with_fg(divider_fg).with_bg(spec.plot_bg),
        );

        let ink = Cell::blank(spec.strip_bg).with_fg(spec.fg);
        surface.print_text(g.caption.x + 1, g.caption.y, spec.name, ink);
    }

    /// Advance a channel's history by one sample.
    ///
    /// `max_value` is the scale ceiling; `value` is clamped into
    /// `[0, max_value]`; `text` is the preformatted display string shown
    /// right-aligned in the caption strip.
    ///
    /// A non-positive or non-finite `max_value`, a non-finite `value`,
    /// or an out-of-range `index` leaves the surface untouched; the
    /// overlay must never fail inside the host's render loop.
    pub fn update_graph(&mut self, index: usize, max_value: f64, value: f64, text: &str) {
        if index >= GRAPH_PANELS_COUNT {
            debug_assert!(false, "graph channel {index} out of range");
            return;
        }
        if !max_value.is_finite() || max_value <= 0.0 || !value.is_finite() {
            return;
        }
        thud_core::trace!(index, value, max_value, "graph sample");

        let spec = &CHANNELS[index];
        let g = self.layout().graphs[index];
        let text_right = self.layout().text_right;
        let value_col = self.value_col();
        let surface = self.surface_mut();

        surface.shift_columns_left(g.plot);

        let bar = bar_eighths(value, max_value);
        let (full, partial) = (bar / 8, bar % 8);
        let x = g.plot.right() - 1;
        for i in 0..PLOT_ROWS {
            let y = g.plot.bottom() - 1 - i;
            let cell = if i < full {
                Cell::from_char('█').with_fg(spec.fg).with_bg(spec.plot_bg)
            } else if i == full && partial > 0 {
                Cell::from_char(BAR_GLYPHS[partial as usize])
                    .with_fg(spec.fg)
                    .with_bg(spec.plot_bg)
            } else {
                Cell::blank(spec.plot_bg)
            };
            surface.set(x, y, cell);
        }

        let strip = Rect::new(
            g.caption.x + value_col,
            g.caption.y,
            g.caption.width.saturating_sub(value_col),
            1,
        );
        surface.fill_rect(strip, spec.strip_bg);
        let ink = Cell::blank(spec.strip_bg).with_fg(spec.fg);
        surface.print_text_right(strip.x, text_right, g.caption.y, text, ink);
    }
}
