use egui::{Color32, Pos2, Shape, Stroke, Vec2};

use super::{node::source_handle, node::target_handle, DrawContext};
use crate::elements::{Edge, Node};

const EDGE: Color32 = Color32::from_rgb(0xb1, 0xb1, 0xb7);
const DASH: f32 = 5.;
const GAP: f32 = 5.;
/// Canvas units per second the dashes of animated edges travel
const DASH_SPEED: f64 = 20.;
const TIP_SIZE: f32 = 8.;
const TIP_ANGLE: f32 = std::f32::consts::TAU / 14.;

/// Draws a dependency from the source handle of `start` to the target handle of `end`.
pub(crate) fn draw_edge(ctx: &DrawContext, e: &Edge, start: &Node, end: &Node) {
    let meta = ctx.meta;
    let style = e.style();

    let color = style.stroke().unwrap_or(EDGE).gamma_multiply(style.opacity());
    let stroke = Stroke::new(meta.canvas_to_screen_size(style.stroke_width()), color);

    let from = meta.canvas_to_screen_pos(source_handle(start));
    let to = meta.canvas_to_screen_pos(target_handle(end));
    let vec = to - from;
    if vec.length() < f32::EPSILON {
        return;
    }
    let dir = vec.normalized();

    if e.animated() {
        let period = f64::from(DASH + GAP);
        // offset grows backwards so the dashes flow from source to target
        let offset = (period - (ctx.time * DASH_SPEED) % period) as f32;
        ctx.painter.extend(Shape::dashed_line_with_offset(
            &[from, to],
            stroke,
            &[meta.canvas_to_screen_size(DASH)],
            &[meta.canvas_to_screen_size(GAP)],
            meta.canvas_to_screen_size(offset),
        ));
    } else {
        ctx.painter.line_segment([from, to], stroke);
    }

    let tip = meta.canvas_to_screen_size(TIP_SIZE);
    ctx.painter.add(Shape::convex_polygon(
        vec![
            to,
            to - tip * rotate_vector(dir, TIP_ANGLE),
            to - tip * rotate_vector(dir, -TIP_ANGLE),
        ],
        color,
        Stroke::NONE,
    ));
}

/// Line following the pointer while a new dependency is being dragged out.
pub(crate) fn draw_connection_preview(ctx: &DrawContext, start: &Node, pointer: Pos2) {
    let from = ctx.meta.canvas_to_screen_pos(source_handle(start));
    ctx.painter.extend(Shape::dashed_line(
        &[from, pointer],
        Stroke::new(1., EDGE),
        DASH,
        GAP,
    ));
}

fn rotate_vector(vec: Vec2, angle: f32) -> Vec2 {
    let cos = angle.cos();
    let sin = angle.sin();
    Vec2::new(cos * vec.x - sin * vec.y, sin * vec.x + cos * vec.y)
}
