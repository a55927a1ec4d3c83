#![forbid(unsafe_code)]

//! Debug telemetry overlay.
//!
//! A fixed-layout diagnostic HUD rendered onto an owned raster
//! [`Surface`]: three scrolling strip-chart graphs (FPS, frame time,
//! render time) above live numeric readouts (elapsed time, camera
//! position, direction, and orientation), topped by a strip showing the
//! primary render view's current resolution.
//!
//! The graphs keep an unbounded rolling history in bounded memory: each
//! sample shifts the plot region one column left and paints only the
//! newly vacated column, so the pixel buffer itself is the history and
//! per-sample cost does not grow with uptime.
//!
//! # Example
//!
//! ```
//! use thud_overlay::{DebugOverlay, CHANNEL_FPS};
//!
//! let mut hud = DebugOverlay::new();
//! hud.init_graphs(&(800u32, 600u32));
//! hud.update_graph(CHANNEL_FPS, 120.0, 58.7, "58.7");
//! hud.update_graph_info(Some(12.5));
//! // composite hud.surface() over the main view
//! ```

pub mod layout;
pub mod overlay;
pub mod stats;
pub mod theme;
pub mod viewport;

mod graph;
mod readout;

pub use glam::{Vec2, Vec3};
pub use layout::{LAYOUT, OverlayLayout};
pub use overlay::DebugOverlay;
pub use stats::{FPS_GRAPH_CEILING, FrameStats, MS_GRAPH_CEILING};
pub use theme::{CHANNEL_FPS, CHANNEL_FRAME, CHANNEL_RENDER};
pub use thud_render::{Cell, Rgba, Surface};
pub use viewport::RenderView;
