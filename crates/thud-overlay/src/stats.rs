#![forbid(unsafe_code)]

//! Frame statistics collector.
//!
//! Turns the host loop's raw frame and render durations into the samples
//! the graph channels plot. Durations are injected by the caller rather
//! than sampled internally, so the collector is deterministic under test
//! and adds no clock reads to the frame budget.

use crate::overlay::DebugOverlay;
use crate::theme::{CHANNEL_FPS, CHANNEL_FRAME, CHANNEL_RENDER};
use std::collections::VecDeque;
use std::time::Duration;

/// Number of recent frames averaged for the FPS figure.
const FPS_WINDOW: usize = 30;

/// Scale ceiling of the FPS channel.
pub const FPS_GRAPH_CEILING: f64 = 120.0;

/// Scale ceiling of the frame-time and render-time channels, in
/// milliseconds.
pub const MS_GRAPH_CEILING: f64 = 50.0;

/// Rolling frame timing statistics.
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    window: VecDeque<Duration>,
    window_total: Duration,
    frame: Duration,
    render: Duration,
    elapsed: Duration,
}

impl FrameStats {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one whole frame's duration.
    pub fn record_frame(&mut self, frame: Duration) {
        self.frame = frame;
        self.elapsed += frame;
        self.window.push_back(frame);
        self.window_total += frame;
        while self.window.len() > FPS_WINDOW {
            if let Some(old) = self.window.pop_front() {
                self.window_total -= old;
            }
        }
    }

    /// Record the render portion of the current frame.
    pub fn record_render(&mut self, render: Duration) {
        self.render = render;
    }

    /// Frames per second averaged over the recent window.
    ///
    /// Zero until the first frame is recorded.
    pub fn fps(&self) -> f64 {
        let secs = self.window_total.as_secs_f64();
        if secs <= 0.0 {
            return 0.0;
        }
        self.window.len() as f64 / secs
    }

    /// Most recent frame duration in milliseconds.
    pub fn frame_ms(&self) -> f64 {
        self.frame.as_secs_f64() * 1000.0
    }

    /// Most recent render duration in milliseconds.
    pub fn render_ms(&self) -> f64 {
        self.render.as_secs_f64() * 1000.0
    }

    /// Total wall-clock seconds recorded so far.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Push the current figures into the overlay: one sample per graph
    /// channel plus the elapsed-time readout.
    pub fn apply_to(&self, hud: &mut DebugOverlay) {
        let fps = self.fps();
        let frame = self.frame_ms();
        let render = self.render_ms();
        hud.update_graph(CHANNEL_FPS, FPS_GRAPH_CEILING, fps, &format!("{fps:.1}"));
        hud.update_graph(CHANNEL_FRAME, MS_GRAPH_CEILING, frame, &format!("{frame:.2}"));
        hud.update_graph(CHANNEL_RENDER, MS_GRAPH_CEILING, render, &format!("{render:.2}"));
        hud.update_graph_info(Some(self.elapsed_seconds()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collector_reports_zero() {
        let stats = FrameStats::new();
        assert_eq!(stats.fps(), 0.0);
        assert_eq!(stats.frame_ms(), 0.0);
        assert_eq!(stats.elapsed_seconds(), 0.0);
    }

    #[test]
    fn steady_frames_give_matching_fps() {
        let mut stats = FrameStats::new();
        for _ in 0..60 {
            stats.record_frame(Duration::from_millis(10));
        }
        let fps = stats.fps();
        assert!((fps - 100.0).abs() < 0.5, "fps was {fps}");
        assert!((stats.frame_ms() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn window_forgets_old_frames() {
        let mut stats = FrameStats::new();
        // A slow start the window should age out completely.
        for _ in 0..10 {
            stats.record_frame(Duration::from_millis(100));
        }
        for _ in 0..FPS_WINDOW {
            stats.record_frame(Duration::from_millis(10));
        }
        let fps = stats.fps();
        assert!((fps - 100.0).abs() < 0.5, "fps was {fps}");
    }

    #[test]
    fn elapsed_accumulates_past_the_window() {
        let mut stats = FrameStats::new();
        for _ in 0..100 {
            stats.record_frame(Duration::from_millis(10));
        }
        assert!((stats.elapsed_seconds() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn render_time_is_tracked_separately() {
        let mut stats = FrameStats::new();
        stats.record_frame(Duration::from_millis(16));
        stats.record_render(Duration::from_millis(4));
        assert!((stats.frame_ms() - 16.0).abs() < 1e-9);
        assert!((stats.render_ms() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn apply_to_plots_all_three_channels() {
        use crate::layout::{GRAPH_WIDTH, LAYOUT};

        let mut hud = DebugOverlay::new();
        hud.init_graphs(&(640u32, 480u32));
        let mut stats = FrameStats::new();
        stats.record_frame(Duration::from_millis(20));
        stats.record_render(Duration::from_millis(5));
        stats.apply_to(&mut hud);

        for g in &LAYOUT.graphs {
            let col = hud
                .surface()
                .column_cells(g.plot.x + GRAPH_WIDTH - 1, g.plot);
            assert!(col.iter().any(|c| c.ch != ' '), "channel not plotted");
        }
        let time_row = hud.surface().row_string(LAYOUT.time.values.y);
        assert!(time_row.contains("0.020"));
    }
}
