#![forbid(unsafe_code)]

//! Overlay palette.
//!
//! Dark panel backgrounds with one saturated accent per graph channel,
//! and a matching dim/bright pair per readout panel (captions and row
//! labels dim, live values bright).

use crate::layout::GRAPH_PANELS_COUNT;
use thud_render::Rgba;

/// Channel index of the frames-per-second graph.
pub const CHANNEL_FPS: usize = 0;
/// Channel index of the frame-time graph.
pub const CHANNEL_FRAME: usize = 1;
/// Channel index of the render-time graph.
pub const CHANNEL_RENDER: usize = 2;

/// Identity of one graph channel: display name and color set.
#[derive(Debug, Clone, Copy)]
pub struct ChannelSpec {
    /// Channel name, stamped at the caption's top-left.
    pub name: &'static str,
    /// Background of the plot region.
    pub plot_bg: Rgba,
    /// Background of the caption strip.
    pub strip_bg: Rgba,
    /// Plot bars and text.
    pub fg: Rgba,
}

/// The three graph channels, in index order.
pub const CHANNELS: [ChannelSpec; GRAPH_PANELS_COUNT] = [
    ChannelSpec {
        name: "FPS",
        plot_bg: Rgba::rgb(0x00, 0x11, 0x33),
        strip_bg: Rgba::rgb(0x00, 0x22, 0x44),
        fg: Rgba::rgb(0x00, 0xbb, 0xff),
    },
    ChannelSpec {
        name: "frame",
        plot_bg: Rgba::rgb(0x00, 0x22, 0x11),
        strip_bg: Rgba::rgb(0x00, 0x33, 0x11),
        fg: Rgba::rgb(0x00, 0xdd, 0x77),
    },
    ChannelSpec {
        name: "render",
        plot_bg: Rgba::rgb(0x00, 0x11, 0x22),
        strip_bg: Rgba::rgb(0x00, 0x11, 0x33),
        fg: Rgba::rgb(0x00, 0x77, 0xdd),
    },
];

/// Colors of one readout panel.
#[derive(Debug, Clone, Copy)]
pub struct ReadoutStyle {
    /// Panel background.
    pub bg: Rgba,
    /// Caption and row labels.
    pub caption_fg: Rgba,
    /// Live values.
    pub value_fg: Rgba,
}

/// Resolution strip at the top.
pub const STATUS_STYLE: ReadoutStyle = ReadoutStyle {
    bg: Rgba::rgb(0x00, 0x00, 0x55),
    caption_fg: Rgba::rgb(0xaa, 0xaa, 0xee),
    value_fg: Rgba::rgb(0xaa, 0xaa, 0xee),
};

/// Elapsed-time panel.
pub const TIME_STYLE: ReadoutStyle = ReadoutStyle {
    bg: Rgba::rgb(0x22, 0x00, 0x22),
    caption_fg: Rgba::rgb(0xaa, 0xaa, 0xff),
    value_fg: Rgba::rgb(0xaa, 0xaa, 0xff),
};

/// Camera position panel.
pub const CAMERA_POS_STYLE: ReadoutStyle = ReadoutStyle {
    bg: Rgba::rgb(0x00, 0x11, 0x22),
    caption_fg: Rgba::rgb(0x88, 0xcc, 0xee),
    value_fg: Rgba::rgb(0x99, 0xee, 0xff),
};

/// Camera direction panel.
pub const CAMERA_DIR_STYLE: ReadoutStyle = ReadoutStyle {
    bg: Rgba::rgb(0x00, 0x22, 0x11),
    caption_fg: Rgba::rgb(0x88, 0xee, 0xcc),
    value_fg: Rgba::rgb(0x99, 0xff, 0xee),
};

/// Camera orientation panel.
pub const CAMERA_ROT_STYLE: ReadoutStyle = ReadoutStyle {
    bg: Rgba::rgb(0x11, 0x22, 0x00),
    caption_fg: Rgba::rgb(0xee, 0xcc, 0x88),
    value_fg: Rgba::rgb(0xee, 0xff, 0x99),
};

/// Background of the surface outside any panel.
pub const SURFACE_BG: Rgba = Rgba::BLACK;
