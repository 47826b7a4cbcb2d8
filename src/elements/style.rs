use egui::Color32;
use serde::{Deserialize, Serialize};

/// Visual overrides layered over a [`super::Node`] at draw time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeStyle {
    opacity: f32,
    /// If `stroke` is None the widget default border is used.
    stroke: Option<Color32>,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            opacity: 1.,
            stroke: None,
        }
    }
}

impl NodeStyle {
    pub fn new(opacity: f32, stroke: Option<Color32>) -> Self {
        Self {
            opacity: opacity.clamp(0., 1.),
            stroke,
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0., 1.);
        self
    }

    pub fn stroke(&self) -> Option<Color32> {
        self.stroke
    }

    pub fn with_stroke(mut self, stroke: Option<Color32>) -> Self {
        self.stroke = stroke;
        self
    }
}

/// Visual overrides layered over an [`super::Edge`] at draw time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeStyle {
    opacity: f32,
    stroke: Option<Color32>,
    stroke_width: f32,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            opacity: 1.,
            stroke: None,
            stroke_width: 1.,
        }
    }
}

impl EdgeStyle {
    pub fn new(opacity: f32, stroke: Option<Color32>, stroke_width: f32) -> Self {
        Self {
            opacity: opacity.clamp(0., 1.),
            stroke,
            stroke_width: stroke_width.max(0.),
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0., 1.);
        self
    }

    pub fn stroke(&self) -> Option<Color32> {
        self.stroke
    }

    pub fn with_stroke(mut self, stroke: Option<Color32>) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn with_stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width.max(0.);
        self
    }
}
