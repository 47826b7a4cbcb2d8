use std::time::Duration;

use egui::Color32;
use serde::{Deserialize, Serialize};

/// Styling applied to the focused node's neighbourhood and to everything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsHighlight {
    /// Opacity of nodes and edges outside the focused neighbourhood.
    pub dimmed_opacity: f32,

    /// Stroke of edges touching the focused node.
    pub highlight_color: Color32,

    /// Stroke width of edges touching the focused node.
    pub highlight_width: f32,

    /// Stroke width of every other edge, and of all edges when nothing is focused.
    pub default_width: f32,
}

impl Default for SettingsHighlight {
    fn default() -> Self {
        Self {
            dimmed_opacity: 0.25,
            highlight_color: Color32::from_rgb(0x3b, 0x82, 0xf6),
            highlight_width: 2.,
            default_width: 1.,
        }
    }
}

impl SettingsHighlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dimmed_opacity(mut self, opacity: f32) -> Self {
        self.dimmed_opacity = opacity.clamp(0., 1.);
        self
    }

    pub fn with_highlight_color(mut self, color: Color32) -> Self {
        self.highlight_color = color;
        self
    }

    pub fn with_highlight_width(mut self, width: f32) -> Self {
        self.highlight_width = width;
        self
    }
}

/// Viewport centering requested when a node gets focused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsFocus {
    pub zoom: f32,
    pub duration: Duration,
}

impl Default for SettingsFocus {
    fn default() -> Self {
        Self {
            zoom: 1.5,
            duration: Duration::from_millis(800),
        }
    }
}

impl SettingsFocus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Which edges a drag-connect gesture may create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsConnect {
    /// Edge from a node to itself
    pub allow_self_loops: bool,

    /// Second edge for an already connected `source -> target` pair
    pub allow_duplicates: bool,
}

impl Default for SettingsConnect {
    fn default() -> Self {
        Self {
            allow_self_loops: true,
            allow_duplicates: true,
        }
    }
}

impl SettingsConnect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_self_loops(mut self, allow: bool) -> Self {
        self.allow_self_loops = allow;
        self
    }

    pub fn with_duplicates(mut self, allow: bool) -> Self {
        self.allow_duplicates = allow;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsNavigation {
    /// Zoom step applied per scroll notch and per zoom button press
    pub zoom_step: f32,

    /// Padding around the graph when fitting to screen, relative to graph size
    pub fit_padding: f32,

    pub min_zoom: f32,
    pub max_zoom: f32,
}

impl Default for SettingsNavigation {
    fn default() -> Self {
        Self {
            zoom_step: 0.1,
            fit_padding: 0.1,
            min_zoom: 0.1,
            max_zoom: 4.,
        }
    }
}

impl SettingsNavigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zoom_step(mut self, step: f32) -> Self {
        self.zoom_step = step;
        self
    }

    pub fn with_fit_padding(mut self, padding: f32) -> Self {
        self.fit_padding = padding;
        self
    }

    pub fn with_zoom_range(mut self, min: f32, max: f32) -> Self {
        self.min_zoom = min.min(max);
        self.max_zoom = max.max(min);
        self
    }

    pub(crate) fn clamp_zoom(&self, zoom: f32) -> f32 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}

/// Overlays drawn on top of or beneath the graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsStyle {
    pub minimap: bool,
    pub controls: bool,
    pub background: bool,
}

impl Default for SettingsStyle {
    fn default() -> Self {
        Self {
            minimap: true,
            controls: true,
            background: true,
        }
    }
}

impl SettingsStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_minimap(mut self, minimap: bool) -> Self {
        self.minimap = minimap;
        self
    }

    pub fn with_controls(mut self, controls: bool) -> Self {
        self.controls = controls;
        self
    }

    pub fn with_background(mut self, background: bool) -> Self {
        self.background = background;
        self
    }
}
