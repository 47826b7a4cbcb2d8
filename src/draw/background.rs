use egui::{Color32, Pos2};

use super::DrawContext;

const GAP: f32 = 16.;
const DOT_RADIUS: f32 = 1.;
const COLOR: Color32 = Color32::from_rgb(0xaa, 0xaa, 0xaa);
/// Below this on-screen spacing the grid turns into noise and is skipped
const MIN_SCREEN_GAP: f32 = 4.;

/// Dot grid aligned to the canvas origin so it moves with pan and zoom.
pub(crate) fn draw_background(ctx: &DrawContext) {
    let meta = ctx.meta;
    if meta.canvas_to_screen_size(GAP) < MIN_SCREEN_GAP {
        return;
    }

    let visible = meta.visible_canvas();
    let first_x = (visible.min.x / GAP).floor() as i64;
    let last_x = (visible.max.x / GAP).ceil() as i64;
    let first_y = (visible.min.y / GAP).floor() as i64;
    let last_y = (visible.max.y / GAP).ceil() as i64;

    let r = meta.canvas_to_screen_size(DOT_RADIUS).max(0.5);
    for ix in first_x..=last_x {
        for iy in first_y..=last_y {
            let p = Pos2::new(ix as f32 * GAP, iy as f32 * GAP);
            ctx.painter
                .circle_filled(meta.canvas_to_screen_pos(p), r, COLOR);
        }
    }
}
