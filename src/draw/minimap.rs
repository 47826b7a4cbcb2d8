use egui::{Color32, Rect, Stroke, StrokeKind, Vec2};

use super::{node::node_rect, DrawContext};
use crate::Graph;

const SIZE: Vec2 = Vec2::new(200., 150.);
const MARGIN: f32 = 10.;
const NODE_STROKE: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);
const NODE_CORNER_RADIUS: f32 = 2.;
const BACKGROUND: Color32 = Color32::from_rgb(0xf8, 0xfa, 0xfc);
const VIEWPORT: Color32 = Color32::from_rgb(0x94, 0xa3, 0xb8);

/// Screen rect the minimap occupies inside the widget.
pub(crate) fn minimap_rect(canvas: Rect) -> Rect {
    Rect::from_min_size(canvas.max - SIZE - Vec2::splat(MARGIN), SIZE)
}

/// Overview of the whole graph with the visible part of the canvas outlined.
pub(crate) fn draw_minimap(ctx: &DrawContext, g: &Graph) {
    let meta = ctx.meta;
    let area = minimap_rect(meta.canvas);
    let visible = meta.visible_canvas();

    let world = g
        .nodes_iter()
        .map(node_rect)
        .fold(visible, |acc, r| acc.union(r));
    if world.width() <= 0. || world.height() <= 0. {
        return;
    }

    let scale = (area.width() / world.width()).min(area.height() / world.height());
    let offset = area.center() - world.center().to_vec2() * scale;
    let project = |r: Rect| {
        Rect::from_min_max(
            offset + r.min.to_vec2() * scale,
            offset + r.max.to_vec2() * scale,
        )
    };

    let p = ctx.painter;
    p.rect(
        area,
        4.,
        BACKGROUND,
        Stroke::new(1., NODE_STROKE.gamma_multiply(0.3)),
        StrokeKind::Inside,
    );

    for n in g.nodes_iter() {
        p.rect(
            project(node_rect(n)),
            NODE_CORNER_RADIUS,
            n.accent(),
            Stroke::new(1., n.style().stroke().unwrap_or(NODE_STROKE)),
            StrokeKind::Inside,
        );
    }

    p.rect_stroke(
        project(visible).intersect(area),
        0.,
        Stroke::new(1., VIEWPORT),
        StrokeKind::Inside,
    );
}

