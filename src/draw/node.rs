use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, StrokeKind, Vec2};

use super::DrawContext;
use crate::elements::Node;

/// Size of a node card in canvas units. Node location is the card center.
pub(crate) const NODE_SIZE: Vec2 = Vec2::new(160., 48.);
pub(crate) const HANDLE_RADIUS: f32 = 4.;

const CORNER_RADIUS: f32 = 6.;
const BORDER: Color32 = Color32::from_rgb(0xe2, 0xe8, 0xf0);
const PRIMARY: Color32 = Color32::from_rgb(0x0f, 0x17, 0x2a);
const FILL: Color32 = Color32::WHITE;
const TEXT: Color32 = Color32::from_rgb(0x0f, 0x17, 0x2a);
const TEXT_MUTED: Color32 = Color32::from_rgb(0x64, 0x74, 0x8b);
const HANDLE: Color32 = Color32::from_rgb(0x1a, 0x19, 0x2b);

pub(crate) fn node_rect(n: &Node) -> Rect {
    Rect::from_center_size(n.location(), NODE_SIZE)
}

/// Connection point new dependencies start from, canvas coordinates.
pub(crate) fn source_handle(n: &Node) -> Pos2 {
    n.location() + Vec2::new(0., NODE_SIZE.y / 2.)
}

/// Connection point new dependencies end at, canvas coordinates.
pub(crate) fn target_handle(n: &Node) -> Pos2 {
    n.location() - Vec2::new(0., NODE_SIZE.y / 2.)
}

pub(crate) fn draw_node(ctx: &DrawContext, n: &Node) {
    let meta = ctx.meta;
    let opacity = n.style().opacity();
    let fade = |c: Color32| c.gamma_multiply(opacity);

    let rect = Rect::from_min_max(
        meta.canvas_to_screen_pos(node_rect(n).min),
        meta.canvas_to_screen_pos(node_rect(n).max),
    );
    let focused = ctx.focused == Some(n.id());
    let border = match n.style().stroke() {
        Some(c) => c,
        None if focused => PRIMARY,
        None => BORDER,
    };

    let p = ctx.painter;
    p.rect(
        rect,
        meta.canvas_to_screen_size(CORNER_RADIUS),
        fade(FILL),
        Stroke::new(1., fade(border)),
        StrokeKind::Inside,
    );

    let pad = meta.canvas_to_screen_size(12.);
    let dot = meta.canvas_to_screen_size(5.);
    let dot_center = Pos2::new(rect.min.x + pad + dot, rect.center().y);
    p.circle_filled(dot_center, dot, fade(n.accent()));

    let text_x = dot_center.x + dot + pad / 2.;
    p.text(
        Pos2::new(text_x, rect.center().y - 1.),
        Align2::LEFT_BOTTOM,
        n.label(),
        FontId::proportional(meta.canvas_to_screen_size(13.)),
        fade(TEXT),
    );
    p.text(
        Pos2::new(text_x, rect.center().y + 1.),
        Align2::LEFT_TOP,
        n.category(),
        FontId::proportional(meta.canvas_to_screen_size(11.)),
        fade(TEXT_MUTED),
    );

    let r = meta.canvas_to_screen_size(HANDLE_RADIUS);
    p.circle_filled(meta.canvas_to_screen_pos(target_handle(n)), r, fade(HANDLE));
    p.circle_filled(meta.canvas_to_screen_pos(source_handle(n)), r, fade(HANDLE));
}
