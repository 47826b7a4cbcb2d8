use egui::{Painter, Pos2, Rect, Response, Sense, Ui, Widget};
use log::{debug, warn};

use crate::{
    controller::{Controller, Interaction},
    draw::{
        draw_background, draw_connection_preview, draw_edge, draw_minimap, draw_node,
        minimap_rect, node_rect, show_controls, source_handle, target_handle, ControlAction,
        DrawContext, HANDLE_RADIUS, NODE_SIZE,
    },
    elements::{Edge, NodeId},
    metadata::{DragState, Metadata},
    settings::{SettingsNavigation, SettingsStyle},
    Graph,
};

#[cfg(feature = "events")]
use crate::controller::{Selection, Transition};
#[cfg(feature = "events")]
use crate::events::{
    Event, EventSink, PayloadCenter, PayloadEdgeAdd, PayloadNodeDeselect, PayloadNodeMove,
    PayloadNodeSelect,
};

/// Minimal on-screen distance at which a handle reacts to the pointer.
const HANDLE_HIT_RADIUS: f32 = 8.;

/// Widget drawing a [`Graph`] and feeding user input to a [`Controller`].
///
/// Clicking a node focuses it, clicking it again or clicking the empty canvas clears the
/// focus. Dragging a node body moves it, dragging from the handle at the bottom of a node
/// to the handle at the top of another one adds a dependency, dragging the empty canvas
/// pans and scrolling zooms.
///
/// Pan and zoom live in egui memory as [`Metadata`] under the optional custom id, so two
/// views of the same graph need different ids.
pub struct DependencyGraphView<'a> {
    g: &'a mut Graph,
    controller: &'a mut Controller,

    settings_navigation: SettingsNavigation,
    settings_style: SettingsStyle,

    custom_id: Option<String>,

    #[cfg(feature = "events")]
    events_sink: Option<&'a dyn EventSink>,
}

impl Widget for &mut DependencyGraphView<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (resp, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());

        let mut meta = Metadata::new(self.custom_id.clone()).load(ui);
        meta.canvas = resp.rect;
        if meta.first_frame {
            meta.fit(self.fit_bounds(), &self.settings_navigation);
            meta.first_frame = false;
        }
        meta.tick();

        let (pointer, press_origin) =
            ui.input(|i| (i.pointer.latest_pos(), i.pointer.press_origin()));
        self.handle_zoom(ui, &resp, &mut meta, pointer);
        self.handle_drags(&resp, &mut meta, press_origin, pointer);
        self.handle_click(&resp, &mut meta);

        self.draw(&painter, &meta, ui.input(|i| i.time), pointer);

        if self.settings_style.controls {
            if let Some(action) = show_controls(ui, resp.rect) {
                self.apply_control(action, &mut meta);
            }
        }

        if meta.is_animating() || meta.drag.is_some() || self.g.edges_iter().any(Edge::animated)
        {
            ui.ctx().request_repaint();
        }

        meta.save(ui);

        resp
    }
}

impl<'a> DependencyGraphView<'a> {
    pub fn new(g: &'a mut Graph, controller: &'a mut Controller) -> Self {
        Self {
            g,
            controller,

            settings_navigation: SettingsNavigation::default(),
            settings_style: SettingsStyle::default(),

            custom_id: None,

            #[cfg(feature = "events")]
            events_sink: None,
        }
    }

    /// Sets a custom id for the view, used as the key of its [`Metadata`] in egui memory.
    pub fn with_id(mut self, custom_id: Option<String>) -> Self {
        self.custom_id = custom_id;
        self
    }

    pub fn with_navigations(mut self, settings_navigation: &SettingsNavigation) -> Self {
        self.settings_navigation = settings_navigation.clone();
        self
    }

    pub fn with_styles(mut self, settings_style: &SettingsStyle) -> Self {
        self.settings_style = settings_style.clone();
        self
    }

    /// Make every accepted interaction be reported to `sink`.
    #[cfg(feature = "events")]
    pub fn with_event_sink(mut self, sink: &'a dyn EventSink) -> Self {
        self.events_sink = Some(sink);
        self
    }

    fn fit_bounds(&self) -> Rect {
        // node locations are card centers
        self.g.bounds().expand2(NODE_SIZE / 2.)
    }

    /// Topmost node whose card contains `screen`.
    fn node_at(&self, meta: &Metadata, screen: Pos2) -> Option<NodeId> {
        let pos = meta.screen_to_canvas_pos(screen);
        let nodes: Vec<_> = self.g.nodes_iter().collect();
        nodes
            .into_iter()
            .rev()
            .find(|n| node_rect(n).contains(pos))
            .map(|n| n.id().clone())
    }

    fn handle_at(
        &self,
        meta: &Metadata,
        screen: Pos2,
        handle: fn(&crate::Node) -> Pos2,
    ) -> Option<NodeId> {
        let hit = meta
            .canvas_to_screen_size(HANDLE_RADIUS)
            .max(HANDLE_HIT_RADIUS);
        let nodes: Vec<_> = self.g.nodes_iter().collect();
        nodes
            .into_iter()
            .rev()
            .find(|n| (meta.canvas_to_screen_pos(handle(n)) - screen).length() <= hit)
            .map(|n| n.id().clone())
    }

    fn handle_zoom(&self, ui: &Ui, resp: &Response, meta: &mut Metadata, pointer: Option<Pos2>) {
        if !resp.hovered() {
            return;
        }

        let (zoom_delta, scroll) = ui.input(|i| (i.zoom_delta(), i.smooth_scroll_delta));
        let factor = if zoom_delta != 1. {
            zoom_delta
        } else if scroll.y != 0. {
            1. + self.settings_navigation.zoom_step * scroll.y.signum()
        } else {
            return;
        };

        let anchor = pointer.unwrap_or(resp.rect.center());
        meta.zoom_at(anchor, factor, &self.settings_navigation);
    }

    /// The drag target is hit-tested at the press origin, not where egui detected the drag.
    fn handle_drags(
        &mut self,
        resp: &Response,
        meta: &mut Metadata,
        press_origin: Option<Pos2>,
        pointer: Option<Pos2>,
    ) {
        if resp.drag_started() {
            if let Some(pos) = press_origin.or_else(|| resp.interact_pointer_pos()) {
                let state = if let Some(id) = self.handle_at(meta, pos, source_handle) {
                    DragState::Connect(id)
                } else if let Some(id) = self.node_at(meta, pos) {
                    DragState::Node(id)
                } else {
                    DragState::Pan
                };
                debug!("drag started: {state:?}");
                meta.drag = Some(state);
            }
        }

        if resp.dragged() {
            let delta = resp.drag_delta();
            match meta.drag.clone() {
                Some(DragState::Pan) => meta.pan_by(delta),
                Some(DragState::Node(id)) => self.move_node(&id, delta / meta.zoom),
                Some(DragState::Connect(_)) | None => {}
            }
        }

        if resp.drag_stopped() {
            if let Some(DragState::Connect(source)) = meta.drag.take() {
                let target = pointer.and_then(|pos| self.handle_at(meta, pos, target_handle));
                match target {
                    Some(target) => self.interact(meta, Interaction::Connect { source, target }),
                    None => debug!("connection from {source} dropped on empty space"),
                }
            }
            meta.drag = None;
        }
    }

    fn handle_click(&mut self, resp: &Response, meta: &mut Metadata) {
        if !resp.clicked() {
            return;
        }
        let Some(pos) = resp.interact_pointer_pos() else {
            return;
        };
        if self.settings_style.minimap && minimap_rect(meta.canvas).contains(pos) {
            return;
        }

        let interaction = match self.node_at(meta, pos) {
            Some(id) => Interaction::NodeClick(id),
            None => Interaction::PaneClick,
        };
        self.interact(meta, interaction);
    }

    fn move_node(&mut self, id: &NodeId, delta: egui::Vec2) {
        let Some(location) = self.g.node(id.as_str()).map(crate::Node::location) else {
            return;
        };
        let new_pos = location + delta;
        if let Err(err) = self.g.move_node(id.as_str(), new_pos) {
            warn!("failed to move {id}: {err}");
            return;
        }

        #[cfg(feature = "events")]
        self.publish(Event::NodeMove(PayloadNodeMove {
            id: id.to_string(),
            diff: delta.into(),
            new_pos: new_pos.into(),
        }));
    }

    fn interact(&mut self, meta: &mut Metadata, interaction: Interaction) {
        #[cfg(feature = "events")]
        let prev = self.controller.selection().clone();

        match self.controller.handle(self.g, meta, interaction.clone()) {
            Ok(transition) => {
                debug!("{interaction:?} -> {transition:?}");
                #[cfg(feature = "events")]
                self.publish_transition(&prev, &transition);
            }
            Err(err) => warn!("{interaction:?} rejected: {err}"),
        }
    }

    fn apply_control(&self, action: ControlAction, meta: &mut Metadata) {
        let step = 1. + self.settings_navigation.zoom_step;
        let center = meta.canvas.center();
        match action {
            ControlAction::ZoomIn => meta.zoom_at(center, step, &self.settings_navigation),
            ControlAction::ZoomOut => meta.zoom_at(center, 1. / step, &self.settings_navigation),
            ControlAction::Fit => meta.fit(self.fit_bounds(), &self.settings_navigation),
        }
    }

    fn draw(&self, painter: &Painter, meta: &Metadata, time: f64, pointer: Option<Pos2>) {
        let focused = self.controller.selection().focused();
        let ctx = DrawContext {
            painter,
            meta,
            focused,
            time,
        };

        if self.settings_style.background {
            draw_background(&ctx);
        }

        for e in self.g.edges_iter() {
            let start = self.g.node(e.source().as_str());
            let end = self.g.node(e.target().as_str());
            if let (Some(start), Some(end)) = (start, end) {
                draw_edge(&ctx, e, start, end);
            }
        }

        // focused node goes on top of its neighbours
        for n in self.g.nodes_iter().filter(|n| Some(n.id()) != focused) {
            draw_node(&ctx, n);
        }
        if let Some(n) = focused.and_then(|id| self.g.node(id.as_str())) {
            draw_node(&ctx, n);
        }

        if let (Some(DragState::Connect(source)), Some(pointer)) = (&meta.drag, pointer) {
            if let Some(start) = self.g.node(source.as_str()) {
                draw_connection_preview(&ctx, start, pointer);
            }
        }

        if self.settings_style.minimap {
            draw_minimap(&ctx, self.g);
        }
    }

    #[cfg(feature = "events")]
    fn publish_transition(&self, prev: &Selection, transition: &Transition) {
        match transition {
            Transition::Focused(id) => {
                if let Some(old) = prev.focused() {
                    self.publish(Event::NodeDeselect(PayloadNodeDeselect {
                        id: old.to_string(),
                    }));
                }
                self.publish(Event::NodeSelect(PayloadNodeSelect { id: id.to_string() }));

                if let Some(n) = self.g.node(id.as_str()) {
                    let focus = self.controller.settings_focus();
                    self.publish(Event::CenterRequest(PayloadCenter {
                        target: n.location().into(),
                        zoom: focus.zoom,
                        duration_ms: focus.duration.as_millis() as u64,
                    }));
                }
            }
            Transition::Released(id) => {
                self.publish(Event::NodeDeselect(PayloadNodeDeselect { id: id.to_string() }));
            }
            Transition::Connected(id) => {
                if let Some((source, target)) = self.g.edge_endpoints(id.as_str()) {
                    self.publish(Event::EdgeAdd(PayloadEdgeAdd {
                        id: id.to_string(),
                        source: source.to_string(),
                        target: target.to_string(),
                    }));
                }
            }
            Transition::Unchanged => {}
        }
    }

    #[cfg(feature = "events")]
    fn publish(&self, event: Event) {
        if let Some(sink) = self.events_sink {
            sink.send(event);
        }
    }
}
