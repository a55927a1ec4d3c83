#![forbid(unsafe_code)]

//! Live readout rendering.
//!
//! Four fire-and-forget entry points, each repainting only its own value
//! rows. Captions and row labels are chrome painted by `init_graphs`;
//! updates never touch them, so the entry points stay idempotent and
//! mutually independent.

use crate::layout::ReadoutRects;
use crate::overlay::DebugOverlay;
use crate::theme::{CAMERA_DIR_STYLE, CAMERA_POS_STYLE, CAMERA_ROT_STYLE, ReadoutStyle, TIME_STYLE};
use glam::{Vec2, Vec3};
use thud_render::{Cell, Draw};

impl DebugOverlay {
    /// Update the elapsed-time row.
    ///
    /// Tolerates an absent or non-finite value as a no-op; the caller may
    /// not have a clock sample on the first frames.
    pub fn update_graph_info(&mut self, time_in_seconds: Option<f64>) {
        let Some(t) = time_in_seconds else { return };
        if !t.is_finite() {
            return;
        }
        let rects = self.layout().time;
        self.write_values(rects, TIME_STYLE, &[format!("{t:.3}")]);
    }

    /// Update the camera position rows (x, y, z), three decimal places.
    pub fn update_camera_position(&mut self, position: Vec3) {
        let rects = self.layout().camera_pos;
        self.write_values(
            rects,
            CAMERA_POS_STYLE,
            &[
                format!("{:.3}", position.x),
                format!("{:.3}", position.y),
                format!("{:.3}", position.z),
            ],
        );
    }

    /// Update the camera direction rows (x, y, z).
    ///
    /// Four decimal places: direction components are unit-scale, so they
    /// need finer precision than positions.
    pub fn update_camera_direction(&mut self, direction: Vec3) {
        let rects = self.layout().camera_dir;
        self.write_values(
            rects,
            CAMERA_DIR_STYLE,
            &[
                format!("{:.4}", direction.x),
                format!("{:.4}", direction.y),
                format!("{:.4}", direction.z),
            ],
        );
    }

    /// Update the camera orientation rows (yaw, pitch).
    ///
    /// The simulation stores radians; the display is human-oriented, so
    /// the components are converted to degrees, one decimal place.
    pub fn update_camera_euler_angles(&mut self, euler: Vec2) {
        let rects = self.layout().camera_rot;
        self.write_values(
            rects,
            CAMERA_ROT_STYLE,
            &[
                format!("{:.1}", euler.x.to_degrees()),
                format!("{:.1}", euler.y.to_degrees()),
            ],
        );
    }

    /// Erase a panel's value rows and stamp the given strings
    /// right-aligned, one per row.
    fn write_values(&mut self, rects: ReadoutRects, style: ReadoutStyle, rows: &[String]) {
        let text_right = self.layout().text_right;
        let surface = self.surface_mut();
        surface.fill_rect(rects.values, style.bg);
        let ink = Cell::blank(style.bg).with_fg(style.value_fg);
        for (i, row) in rows.iter().enumerate() {
            surface.print_text_right(rects.values.x, text_right, rects.values.y + i as u16, row, ink);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LAYOUT;
    use std::f32::consts::FRAC_PI_2;

    fn ready_overlay() -> DebugOverlay {
        let mut hud = DebugOverlay::new();
        hud.init_graphs(&(640u32, 480u32));
        hud
    }

    fn value_row(hud: &DebugOverlay, rects: ReadoutRects, i: u16) -> String {
        hud.surface().row_string(rects.values.y + i)
    }

    #[test]
    fn time_is_formatted_to_three_decimals() {
        let mut hud = ready_overlay();
        hud.update_graph_info(Some(12.5));
        assert!(value_row(&hud, LAYOUT.time, 0).contains("12.500"));
    }

    #[test]
    fn missing_time_is_a_noop() {
        let mut hud = ready_overlay();
        hud.update_graph_info(Some(1.0));
        let before = hud.surface().clone();
        hud.update_graph_info(None);
        hud.update_graph_info(Some(f64::NAN));
        assert!(hud.surface().content_eq(&before));
    }

    #[test]
    fn position_rows_are_stacked() {
        let mut hud = ready_overlay();
        hud.update_camera_position(Vec3::new(-44.0, 4.0, 11.25));
        let r = LAYOUT.camera_pos;
        assert!(value_row(&hud, r, 0).contains("-44.000"));
        assert!(value_row(&hud, r, 1).contains("4.000"));
        assert!(value_row(&hud, r, 2).contains("11.250"));
    }

    #[test]
    fn direction_uses_four_decimals() {
        let mut hud = ready_overlay();
        hud.update_camera_direction(Vec3::new(0.5, -0.25, 0.8292));
        let r = LAYOUT.camera_dir;
        assert!(value_row(&hud, r, 0).contains("0.5000"));
        assert!(value_row(&hud, r, 1).contains("-0.2500"));
        assert!(value_row(&hud, r, 2).contains("0.8292"));
    }

    #[test]
    fn euler_angles_are_converted_to_degrees() {
        let mut hud = ready_overlay();
        hud.update_camera_euler_angles(Vec2::new(FRAC_PI_2, 0.0));
        let r = LAYOUT.camera_rot;
        assert!(value_row(&hud, r, 0).contains("90.0"));
        assert!(value_row(&hud, r, 1).contains("0.0"));
    }

    #[test]
    fn updates_are_idempotent() {
        let mut hud = ready_overlay();
        hud.update_camera_position(Vec3::new(1.0, 2.0, 3.0));
        let once = hud.surface().clone();
        hud.update_camera_position(Vec3::new(1.0, 2.0, 3.0));
        assert!(hud.surface().content_eq(&once));
    }

    #[test]
    fn sibling_readouts_are_untouched() {
        let mut hud = ready_overlay();
        hud.update_camera_position(Vec3::new(1.0, 2.0, 3.0));
        hud.update_graph_info(Some(5.0));
        let before_pos: Vec<String> =
            (0..3).map(|i| value_row(&hud, LAYOUT.camera_pos, i)).collect();
        hud.update_camera_direction(Vec3::new(0.1, 0.2, 0.3));
        hud.update_camera_euler_angles(Vec2::new(0.5, 0.25));
        let after_pos: Vec<String> =
            (0..3).map(|i| value_row(&hud, LAYOUT.camera_pos, i)).collect();
        assert_eq!(before_pos, after_pos);
        assert!(value_row(&hud, LAYOUT.time, 0).contains("5.000"));
    }

    #[test]
    fn row_labels_survive_updates() {
        let mut hud = ready_overlay();
        hud.update_camera_position(Vec3::new(9.0, 9.0, 9.0));
        let r = LAYOUT.camera_pos;
        assert!(value_row(&hud, r, 0).starts_with(" x"));
        assert!(value_row(&hud, r, 1).starts_with(" y"));
        assert!(value_row(&hud, r, 2).starts_with(" z"));
    }
}
