#![forbid(unsafe_code)]

//! Raster substrate for the telemetry HUD.
//!
//! The overlay draws onto a [`Surface`]: an owned 2D grid of [`Cell`]s,
//! each holding one glyph plus foreground and background [`Rgba`] colors.
//! [`Draw`] layers rectangle fills and aligned text stamping on top of the
//! raw cell accessors, and [`Surface::shift_columns_left`] provides the
//! column scroll used by the strip-chart graphs.

pub mod cell;
pub mod draw;
pub mod surface;

pub use cell::{Cell, Rgba};
pub use draw::{Draw, text_width};
pub use surface::Surface;
