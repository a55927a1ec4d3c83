//! End-to-end overlay session: chrome, a long run of samples, camera
//! updates, and a mid-session resolution change, the way a host frame
//! loop drives the overlay.

use std::time::Duration;

use thud_overlay::layout::{GRAPH_WIDTH, LAYOUT};
use thud_overlay::{CHANNEL_FPS, DebugOverlay, FrameStats, Vec2, Vec3};

fn ready_overlay() -> DebugOverlay {
    let mut hud = DebugOverlay::new();
    hud.init_graphs(&(800u32, 600u32));
    hud
}

#[test]
fn full_session_smoke() {
    let mut hud = ready_overlay();
    let mut stats = FrameStats::new();

    // Well past the plot width, so the history wraps.
    for frame in 0..150u32 {
        stats.record_frame(Duration::from_millis(16 + (frame % 5) as u64));
        stats.record_render(Duration::from_millis(4));
        stats.apply_to(&mut hud);
        hud.update_camera_position(Vec3::new(-44.0, 4.0, 11.0));
        hud.update_camera_direction(Vec3::new(0.0, 0.0, -1.0));
        hud.update_camera_euler_angles(Vec2::new(1.2217305, 0.0));
    }

    let s = hud.surface();
    assert!(s.row_string(LAYOUT.status.y).contains("800⨯600 px"));
    assert!(s.row_string(LAYOUT.time.panel.y).contains("time"));
    assert!(s.row_string(LAYOUT.camera_pos.values.y).contains("-44.000"));
    assert!(s.row_string(LAYOUT.camera_dir.values.y + 2).contains("-1.0000"));
    // 1.2217305 rad is 70 degrees.
    assert!(s.row_string(LAYOUT.camera_rot.values.y).contains("70.0"));

    // Every plot column of the FPS channel carries a bar by now.
    let plot = LAYOUT.graphs[CHANNEL_FPS].plot;
    for x in plot.x..plot.right() {
        let column = s.column_cells(x, plot);
        assert!(
            column.iter().any(|c| c.ch != ' '),
            "column {x} has no plotted bar"
        );
    }
}

#[test]
fn resolution_change_mid_session() {
    let mut hud = ready_overlay();
    hud.update_graph(CHANNEL_FPS, 120.0, 60.0, "60.0");

    // Quality toggle halves the render resolution; the strip must track it.
    hud.update_canvas_size(&(400u32, 300u32));

    let s = hud.surface();
    assert!(s.row_string(LAYOUT.status.y).contains("400⨯300 px"));
    let caption_row = s.row_string(LAYOUT.graphs[CHANNEL_FPS].caption.y);
    assert!(caption_row.contains("60.0"), "graph strip was disturbed");
}

#[test]
fn update_before_init_does_not_panic() {
    // Uninitialized overlay: chrome is missing but updates stay safe.
    let mut hud = DebugOverlay::new();
    hud.update_graph(CHANNEL_FPS, 120.0, 60.0, "60.0");
    hud.update_graph_info(Some(1.0));
    hud.update_camera_position(Vec3::ZERO);
    assert_eq!(hud.surface().width(), LAYOUT.width);
}

#[test]
fn history_depth_equals_plot_width() {
    let mut hud = ready_overlay();
    // Tall marker first, then exactly GRAPH_WIDTH - 1 short samples: the
    // marker survives in the leftmost history column.
    hud.update_graph(CHANNEL_FPS, 100.0, 100.0, "x");
    for _ in 0..(GRAPH_WIDTH - 1) {
        hud.update_graph(CHANNEL_FPS, 100.0, 10.0, "x");
    }
    let plot = LAYOUT.graphs[CHANNEL_FPS].plot;
    let leftmost = hud.surface().column_cells(plot.x, plot);
    assert_eq!(
        leftmost.iter().filter(|c| c.ch == '█').count(),
        plot.height as usize
    );

    // One more sample pushes the marker off the edge for good.
    hud.update_graph(CHANNEL_FPS, 100.0, 10.0, "x");
    for x in plot.x..plot.right() {
        let column = hud.surface().column_cells(x, plot);
        assert_ne!(
            column.iter().filter(|c| c.ch == '█').count(),
            plot.height as usize,
            "full-height marker survived at column {x}"
        );
    }
}
