#![forbid(unsafe_code)]

//! The overlay itself: owned surface, derived layout, panel chrome.
//!
//! [`DebugOverlay::new`] creates a blank surface sized by the layout;
//! [`DebugOverlay::init_graphs`] paints all static chrome once. After
//! that the overlay is in its steady state and accepts update calls for
//! the lifetime of the process; there is no teardown.

use crate::layout::{LAYOUT, OverlayLayout, ReadoutRects};
use crate::theme::{
    CAMERA_DIR_STYLE, CAMERA_POS_STYLE, CAMERA_ROT_STYLE, CHANNELS, ReadoutStyle, SURFACE_BG,
    TIME_STYLE,
};
use crate::viewport::RenderView;
use thud_render::{Cell, Draw, Surface, text_width};

/// The debug telemetry overlay.
///
/// Owns its raster surface exclusively; every entry point is a bounded,
/// synchronous pixel write. The host composites [`DebugOverlay::surface`]
/// over its main view each frame.
pub struct DebugOverlay {
    surface: Surface,
    layout: OverlayLayout,
    /// Shared column where graph value text may begin, one column to the
    /// right of the widest channel name. Set during [`Self::init_graphs`].
    value_col: u16,
}

impl DebugOverlay {
    /// Create an uninitialized overlay with a blank surface.
    ///
    /// Call [`Self::init_graphs`] before any update call.
    pub fn new() -> Self {
        Self {
            surface: Surface::new(LAYOUT.width, LAYOUT.height),
            layout: LAYOUT,
            value_col: 0,
        }
    }

    /// Read-only access to the rendered surface.
    #[inline]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The derived layout this overlay was built with.
    #[inline]
    pub fn layout(&self) -> &OverlayLayout {
        &self.layout
    }

    pub(crate) fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    pub(crate) fn value_col(&self) -> u16 {
        self.value_col
    }

    /// One-time setup of backgrounds, captions, and row labels for the
    /// graph channels, the readout panels, and the resolution strip.
    ///
    /// Label widths for all channels are measured before any chrome is
    /// drawn, so the shared value column does not depend on the order the
    /// channels are painted in.
    pub fn init_graphs(&mut self, view: &dyn RenderView) {
        thud_core::debug!("painting overlay chrome");
        self.surface.clear_with(Cell::blank(SURFACE_BG));

        let mut col = 0u16;
        for spec in &CHANNELS {
            col = col.max(text_width(spec.name) + 2);
        }
        self.value_col = col;

        for (index, spec) in CHANNELS.iter().enumerate() {
            self.init_graph(index, spec);
        }
        self.update_canvas_size(view);

        let (time, pos, dir, rot) = (
            self.layout.time,
            self.layout.camera_pos,
            self.layout.camera_dir,
            self.layout.camera_rot,
        );
        self.init_readout(time, TIME_STYLE, "time", &[]);
        self.init_readout(pos, CAMERA_POS_STYLE, "camera pos", &["x", "y", "z"]);
        self.init_readout(dir, CAMERA_DIR_STYLE, "camera dir", &["x", "y", "z"]);
        self.init_readout(rot, CAMERA_ROT_STYLE, "camera rot", &["yaw", "pitch"]);
    }

    /// Paint one readout panel's static chrome: background, right-aligned
    /// caption, and left-aligned row labels.
    fn init_readout(
        &mut self,
        rects: ReadoutRects,
        style: ReadoutStyle,
        caption: &str,
        labels: &[&str],
    ) {
        self.surface.fill_rect(rects.panel, style.bg);
        let ink = Cell::blank(style.bg).with_fg(style.caption_fg);
        self.surface.print_text_right(
            rects.panel.x,
            self.layout.text_right,
            rects.panel.y,
            caption,
            ink,
        );
        for (i, label) in labels.iter().enumerate() {
            self.surface
                .print_text(rects.panel.x, rects.values.y + i as u16, label, ink);
        }
    }
}

impl Default for DebugOverlay {
    fn default() -> Self {
        Self::new()
    }
}
