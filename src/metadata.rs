use egui::{Id, Pos2, Rect, Ui, Vec2};
use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    elements::NodeId,
    settings::SettingsNavigation,
    viewport::{Animation, CenterRequest, Viewport},
};

const KEY_PREFIX: &str = "depgraph_metadata";

/// Gesture in progress between drag start and drag stop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum DragState {
    Pan,
    Node(NodeId),
    /// Started on the source handle of the node
    Connect(NodeId),
}

/// Viewport state of a [`crate::DependencyGraphView`] kept in egui memory between frames.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// Whether the frame is the first one
    pub first_frame: bool,
    /// Current zoom factor
    pub zoom: f32,
    /// Current pan offset relative to the top left corner of the widget
    pub pan: Vec2,
    /// Screen rect of the widget in the last frame
    pub canvas: Rect,

    pub(crate) drag: Option<DragState>,

    #[serde(skip)]
    animation: Option<Animation>,

    /// Custom key to identify the metadata
    id: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            first_frame: true,
            zoom: 1.,
            pan: Vec2::ZERO,
            canvas: Rect::ZERO,
            drag: None,
            animation: None,
            id: String::new(),
        }
    }
}

impl Metadata {
    pub fn new(id: Option<String>) -> Self {
        Self {
            id: id.unwrap_or_default(),
            ..Default::default()
        }
    }

    pub fn load(self, ui: &Ui) -> Self {
        ui.data_mut(|data| {
            data.get_persisted::<Metadata>(Id::new(self.get_key()))
                .unwrap_or(self)
        })
    }

    pub fn save(self, ui: &mut Ui) {
        ui.data_mut(|data| {
            data.insert_persisted(Id::new(self.get_key()), self);
        });
    }

    pub fn canvas_to_screen_pos(&self, pos: Pos2) -> Pos2 {
        self.canvas.min + pos.to_vec2() * self.zoom + self.pan
    }

    pub fn canvas_to_screen_size(&self, size: f32) -> f32 {
        size * self.zoom
    }

    pub fn screen_to_canvas_pos(&self, pos: Pos2) -> Pos2 {
        ((pos - self.canvas.min - self.pan) / self.zoom).to_pos2()
    }

    /// Part of the canvas currently visible in the widget.
    pub fn visible_canvas(&self) -> Rect {
        Rect::from_min_max(
            self.screen_to_canvas_pos(self.canvas.min),
            self.screen_to_canvas_pos(self.canvas.max),
        )
    }

    /// Pans and zooms so that `bounds` fits the widget with relative `padding` around it.
    pub fn fit(&mut self, bounds: Rect, nav: &SettingsNavigation) {
        self.animation = None;
        if !bounds.is_finite() || bounds.is_negative() {
            return;
        }

        let size = bounds.size() * (1. + nav.fit_padding);
        let canvas_size = self.canvas.size();
        let zoom = match (size.x > 0., size.y > 0.) {
            (true, true) => (canvas_size.x / size.x).min(canvas_size.y / size.y),
            (true, false) => canvas_size.x / size.x,
            (false, true) => canvas_size.y / size.y,
            (false, false) => 1.,
        };

        self.zoom = nav.clamp_zoom(zoom);
        self.pan = self.pan_centering(bounds.center(), self.zoom);
    }

    /// Multiplies zoom by `factor` keeping the canvas point under `anchor` (screen) in place.
    pub fn zoom_at(&mut self, anchor: Pos2, factor: f32, nav: &SettingsNavigation) {
        self.animation = None;

        let anchor_canvas = self.screen_to_canvas_pos(anchor);
        let new_zoom = nav.clamp_zoom(self.zoom * factor);
        self.pan = anchor - self.canvas.min - anchor_canvas.to_vec2() * new_zoom;
        self.zoom = new_zoom;
    }

    pub fn pan_by(&mut self, delta: Vec2) {
        self.animation = None;
        self.pan += delta;
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Advances the running centering animation. Returns true while it is still running.
    pub fn tick(&mut self) -> bool {
        let Some(animation) = &self.animation else {
            return false;
        };

        let (pan, zoom, done) = animation.sample();
        self.pan = pan;
        self.zoom = zoom;
        if done {
            self.animation = None;
        }
        !done
    }

    /// Get key which is used to store metadata in egui cache.
    pub fn get_key(&self) -> String {
        format!("{KEY_PREFIX}_{}", self.id)
    }

    fn pan_centering(&self, target: Pos2, zoom: f32) -> Vec2 {
        self.canvas.size() / 2. - target.to_vec2() * zoom
    }
}

impl Viewport for Metadata {
    fn center_on(&mut self, request: CenterRequest) {
        let to_pan = self.pan_centering(request.target, request.zoom);
        trace!(
            "centering on {:?} at zoom {} over {:?}",
            request.target,
            request.zoom,
            request.duration
        );

        self.animation = Some(Animation::new(
            (self.pan, self.zoom),
            (to_pan, request.zoom),
            request.duration,
        ));
        // zero duration jumps right away
        self.tick();
    }
}

/// Resets [`Metadata`] state
pub fn reset_metadata(ui: &mut Ui, id: Option<String>) {
    Metadata::new(id).save(ui);
}
