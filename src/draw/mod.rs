mod background;
mod controls;
mod edge;
mod minimap;
mod node;

pub(crate) use self::background::draw_background;
pub(crate) use self::controls::{show_controls, ControlAction};
pub(crate) use self::edge::{draw_connection_preview, draw_edge};
pub(crate) use self::minimap::{draw_minimap, minimap_rect};
pub(crate) use self::node::{
    draw_node, node_rect, source_handle, target_handle, HANDLE_RADIUS, NODE_SIZE,
};

use egui::Painter;

use crate::{elements::NodeId, Metadata};

/// Contains all the data about current widget state which is needed for drawing.
pub(crate) struct DrawContext<'a> {
    pub painter: &'a Painter,
    pub meta: &'a Metadata,
    pub focused: Option<&'a NodeId>,
    /// Seconds since app start, drives the dash flow of animated edges
    pub time: f64,
}
