#![forbid(unsafe_code)]

//! Surface sizing controller.
//!
//! The primary 3D view can change resolution independently of the
//! overlay (a quality toggle halving render resolution, a window
//! resize), so the resolution strip re-reads the view's *current*
//! dimensions on every call instead of caching them at construction.

use crate::overlay::DebugOverlay;
use crate::theme::STATUS_STYLE;
use thud_render::{Cell, Draw};

/// The primary render surface, as seen by the overlay.
///
/// The host passes its main view here at startup and again from its
/// window-resize handler.
pub trait RenderView {
    /// Current pixel resolution of the view.
    fn resolution(&self) -> (u32, u32);
}

/// A plain `(width, height)` pair is enough for hosts and tests.
impl RenderView for (u32, u32) {
    fn resolution(&self) -> (u32, u32) {
        *self
    }
}

impl DebugOverlay {
    /// Redraw the resolution strip from the view's current dimensions.
    pub fn update_canvas_size(&mut self, view: &dyn RenderView) {
        let (w, h) = view.resolution();
        thud_core::debug!(w, h, "primary view resolution");
        let status = self.layout().status;
        let surface = self.surface_mut();
        surface.fill_rect(status, STATUS_STYLE.bg);
        let ink = Cell::blank(STATUS_STYLE.bg).with_fg(STATUS_STYLE.caption_fg);
        surface.print_text_centered(status, &format!("{w}⨯{h} px"), ink);
    }
}
