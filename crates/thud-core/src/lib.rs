#![forbid(unsafe_code)]

//! Shared foundation for the telemetry HUD crates.
//!
//! Provides the geometry primitives ([`geometry::Rect`], [`geometry::Size`])
//! used by the raster surface and the overlay layout, plus the logging shim
//! in [`logging`] (real `tracing` macros behind the `tracing` feature,
//! no-op macros otherwise).

pub mod geometry;
pub mod logging;

pub use geometry::{Rect, Size};

// With the feature enabled the real macros are re-exported here at the
// crate root, matching the path the no-op macros get from #[macro_export].
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, warn};
