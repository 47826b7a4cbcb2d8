use egui::{Button, Pos2, Rect, Ui, Vec2};

const BUTTON: Vec2 = Vec2::new(26., 26.);
const MARGIN: f32 = 10.;
const SPACING: f32 = 2.;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ControlAction {
    ZoomIn,
    ZoomOut,
    Fit,
}

/// Zoom and fit buttons stacked in the bottom left corner of `canvas`.
pub(crate) fn show_controls(ui: &mut Ui, canvas: Rect) -> Option<ControlAction> {
    let buttons = [
        ("+", "zoom in", ControlAction::ZoomIn),
        ("−", "zoom out", ControlAction::ZoomOut),
        ("□", "fit view", ControlAction::Fit),
    ];

    let total = buttons.len() as f32 * (BUTTON.y + SPACING) - SPACING;
    let mut top = canvas.max.y - MARGIN - total;
    let mut res = None;

    for (text, hint, action) in buttons {
        let rect = Rect::from_min_size(Pos2::new(canvas.min.x + MARGIN, top), BUTTON);
        if ui.put(rect, Button::new(text)).on_hover_text(hint).clicked() {
            res = Some(action);
        }
        top += BUTTON.y + SPACING;
    }

    res
}
