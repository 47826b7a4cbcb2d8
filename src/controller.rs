use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    elements::{EdgeId, NodeId},
    highlight,
    settings::{SettingsFocus, SettingsHighlight},
    viewport::{CenterRequest, Viewport},
    Graph, GraphError,
};

/// Node currently focused by the user, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Idle,
    Focused(NodeId),
}

impl Selection {
    pub fn focused(&self) -> Option<&NodeId> {
        match self {
            Selection::Idle => None,
            Selection::Focused(id) => Some(id),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }
}

/// User input reported by the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interaction {
    NodeClick(NodeId),
    /// Click on the empty canvas
    PaneClick,
    /// Drag from the source handle of `source` to the target handle of `target`
    Connect { source: NodeId, target: NodeId },
}

/// What an accepted [`Interaction`] changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Node became the selection, either from idle or replacing another node.
    Focused(NodeId),
    /// Selection of the node was cleared.
    Released(NodeId),
    Connected(EdgeId),
    Unchanged,
}

/// Two-state machine turning user input into styles on the [`Graph`].
///
/// Selection lives here and nowhere else. After every transition the styles stored in
/// the graph match [`highlight::node_style_for`] and [`highlight::edge_style_for`] for
/// the current selection, except for edges connected after the last selection change
/// which keep their default style.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    selection: Selection,

    settings_highlight: SettingsHighlight,
    settings_focus: SettingsFocus,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_highlight(mut self, settings: SettingsHighlight) -> Self {
        self.settings_highlight = settings;
        self
    }

    pub fn with_focus(mut self, settings: SettingsFocus) -> Self {
        self.settings_focus = settings;
        self
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn settings_highlight(&self) -> &SettingsHighlight {
        &self.settings_highlight
    }

    pub fn settings_focus(&self) -> &SettingsFocus {
        &self.settings_focus
    }

    pub fn handle(
        &mut self,
        g: &mut Graph,
        viewport: &mut impl Viewport,
        interaction: Interaction,
    ) -> Result<Transition, GraphError> {
        match interaction {
            Interaction::NodeClick(id) => self.click_node(g, viewport, id),
            Interaction::PaneClick => self.click_pane(g),
            Interaction::Connect { source, target } => {
                let id = g.add_edge(source.as_str(), target.as_str())?;
                debug!("connected {source} -> {target} as {id}");
                Ok(Transition::Connected(id))
            }
        }
    }

    fn click_node(
        &mut self,
        g: &mut Graph,
        viewport: &mut impl Viewport,
        id: NodeId,
    ) -> Result<Transition, GraphError> {
        let location = g
            .node(id.as_str())
            .map(crate::Node::location)
            .ok_or_else(|| GraphError::UnknownEntity(id.to_string()))?;

        if self.selection.focused() == Some(&id) {
            return self.release(g);
        }

        let next = Selection::Focused(id.clone());
        highlight::apply(g, &next, &self.settings_highlight)?;
        debug!("selection {:?} -> {next:?}", self.selection);
        self.selection = next;

        viewport.center_on(CenterRequest {
            target: location,
            zoom: self.settings_focus.zoom,
            duration: self.settings_focus.duration,
        });

        Ok(Transition::Focused(id))
    }

    fn click_pane(&mut self, g: &mut Graph) -> Result<Transition, GraphError> {
        match self.selection {
            Selection::Idle => Ok(Transition::Unchanged),
            Selection::Focused(_) => self.release(g),
        }
    }

    fn release(&mut self, g: &mut Graph) -> Result<Transition, GraphError> {
        highlight::apply(g, &Selection::Idle, &self.settings_highlight)?;
        let prev = std::mem::take(&mut self.selection);
        debug!("selection {prev:?} -> Idle");

        Ok(match prev {
            Selection::Focused(id) => Transition::Released(id),
            Selection::Idle => Transition::Unchanged,
        })
    }
}
