#![forbid(unsafe_code)]

//! Overlay layout.
//!
//! Every panel rectangle is derived from a handful of constants by one
//! additive accumulation chain: each section starts where the previous
//! section ended plus the spacing unit. Inserting or reordering a panel
//! means relinking that chain, never editing coordinates by hand.
//!
//! The result is a single immutable [`OverlayLayout`] evaluated at
//! compile time ([`LAYOUT`]); the surface dimensions are by construction
//! exactly the accumulated totals, so no panel can exceed the surface.

use thud_core::geometry::Rect;

/// Spacing unit between panels and around the surface edge, in cells.
pub const SPACING: u16 = 1;

/// Height of one text row, in cells.
pub const TEXT_ROWS: u16 = 1;

/// Number of scrolling graph channels.
pub const GRAPH_PANELS_COUNT: usize = 3;

/// Left edge of the graph panels.
pub const GRAPH_X: u16 = SPACING;

/// Width of a graph panel; also the depth of the visible sample history.
pub const GRAPH_WIDTH: u16 = 100;

/// Rows of the plot region of each graph panel.
pub const PLOT_ROWS: u16 = 6;

/// Vertical bar resolution: eight sub-cell levels per plot row.
pub const BAR_LEVELS: u16 = PLOT_ROWS * 8;

/// Rows of a whole graph panel: caption strip, baseline divider, plot.
const GRAPH_PANEL_ROWS: u16 = TEXT_ROWS + 1 + PLOT_ROWS;

/// Rectangles of one graph panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphRects {
    /// The whole panel.
    pub panel: Rect,
    /// Caption strip: channel name on the left, latest value on the right.
    pub caption: Rect,
    /// Baseline divider between caption and plot.
    pub divider: Rect,
    /// Scrolling plot region; one column per sample.
    pub plot: Rect,
}

impl GraphRects {
    const fn at(y: u16) -> Self {
        Self {
            panel: Rect::new(GRAPH_X, y, GRAPH_WIDTH, GRAPH_PANEL_ROWS),
            caption: Rect::new(GRAPH_X, y, GRAPH_WIDTH, TEXT_ROWS),
            divider: Rect::new(GRAPH_X, y + TEXT_ROWS, GRAPH_WIDTH, 1),
            plot: Rect::new(GRAPH_X, y + TEXT_ROWS + 1, GRAPH_WIDTH, PLOT_ROWS),
        }
    }

    const ZERO: Self = Self {
        panel: Rect::ZERO,
        caption: Rect::ZERO,
        divider: Rect::ZERO,
        plot: Rect::ZERO,
    };
}

/// Rectangles of one readout panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadoutRects {
    /// The whole panel, caption row included.
    pub panel: Rect,
    /// The value rows that get erased and redrawn on every update.
    ///
    /// Starts to the right of the row labels so updates never disturb
    /// the chrome.
    pub values: Rect,
}

impl ReadoutRects {
    const fn at(y: u16, rows: u16, value_x: u16) -> Self {
        Self {
            panel: Rect::new(SPACING, y, TOTAL_WIDTH - 2 * SPACING, TEXT_ROWS + rows),
            values: Rect::new(value_x, y + TEXT_ROWS, TEXT_RIGHT - value_x, rows),
        }
    }
}

const TOTAL_WIDTH: u16 = GRAPH_X + GRAPH_WIDTH + SPACING;

/// Exclusive right boundary all right-aligned text ends at, so values in
/// every panel line up on the same column.
const TEXT_RIGHT: u16 = GRAPH_X + GRAPH_WIDTH;

/// All derived overlay geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayLayout {
    /// Surface width in cells.
    pub width: u16,
    /// Surface height in cells.
    pub height: u16,
    /// Resolution strip at the top.
    pub status: Rect,
    /// The scrolling graph panels, top to bottom.
    pub graphs: [GraphRects; GRAPH_PANELS_COUNT],
    /// Elapsed-time readout (one value row).
    pub time: ReadoutRects,
    /// Camera position readout (x, y, z rows).
    pub camera_pos: ReadoutRects,
    /// Camera direction readout (x, y, z rows).
    pub camera_dir: ReadoutRects,
    /// Camera orientation readout (yaw, pitch rows).
    pub camera_rot: ReadoutRects,
    /// Exclusive right boundary for right-aligned text.
    pub text_right: u16,
}

impl OverlayLayout {
    /// Derive all panel rectangles from the layout constants.
    pub const fn compute() -> Self {
        let mut y = SPACING;

        let status = Rect::new(SPACING, y, TOTAL_WIDTH - 2 * SPACING, TEXT_ROWS);
        y += TEXT_ROWS + SPACING;

        let mut graphs = [GraphRects::ZERO; GRAPH_PANELS_COUNT];
        let mut i = 0;
        while i < GRAPH_PANELS_COUNT {
            graphs[i] = GraphRects::at(y);
            y += GRAPH_PANEL_ROWS + SPACING;
            i += 1;
        }

        let time = ReadoutRects::at(y, 1, SPACING);
        y += TEXT_ROWS + 1 + SPACING;

        // Value rows start past the single-letter row labels.
        let camera_pos = ReadoutRects::at(y, 3, SPACING + 2);
        y += TEXT_ROWS + 3 + SPACING;

        let camera_dir = ReadoutRects::at(y, 3, SPACING + 2);
        y += TEXT_ROWS + 3 + SPACING;

        // "pitch" is five cells wide; values start one past it.
        let camera_rot = ReadoutRects::at(y, 2, SPACING + 6);
        y += TEXT_ROWS + 2 + SPACING;

        Self {
            width: TOTAL_WIDTH,
            height: y,
            status,
            graphs,
            time,
            camera_pos,
            camera_dir,
            camera_rot,
            text_right: TEXT_RIGHT,
        }
    }
}

/// The overlay layout, evaluated once at compile time.
pub const LAYOUT: OverlayLayout = OverlayLayout::compute();
