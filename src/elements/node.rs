use std::borrow::Borrow;
use std::fmt;

use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

use super::NodeStyle;

/// Unique identifier of a [`Node`] inside a [`crate::Graph`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A single file in the dependency graph.
///
/// Identity (`id`, `label`, `category`, `accent`) is fixed at creation. Location and
/// [`NodeStyle`] are the only parts changed by interactions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    label: String,
    category: String,

    /// Color of the file type, used for the icon dot and the minimap.
    accent: Color32,

    location: Pos2,
    style: NodeStyle,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            category: category.into(),
            accent: Color32::GRAY,
            location: Pos2::ZERO,
            style: NodeStyle::default(),
        }
    }

    pub fn with_location(mut self, location: Pos2) -> Self {
        self.location = location;
        self
    }

    pub fn with_accent(mut self, accent: Color32) -> Self {
        self.accent = accent;
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn accent(&self) -> Color32 {
        self.accent
    }

    pub fn location(&self) -> Pos2 {
        self.location
    }

    pub(crate) fn set_location(&mut self, location: Pos2) {
        self.location = location;
    }

    pub fn style(&self) -> &NodeStyle {
        &self.style
    }

    pub(crate) fn set_style(&mut self, style: NodeStyle) {
        self.style = style;
    }
}
