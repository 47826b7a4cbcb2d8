use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{EdgeStyle, NodeId};

/// Unique identifier of an [`Edge`] inside a [`crate::Graph`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(String);

impl EdgeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EdgeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Borrow<str> for EdgeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Directed dependency `source -> target`: the source file depends on the target file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Edge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
    animated: bool,
    style: EdgeStyle,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, source: NodeId, target: NodeId, animated: bool) -> Self {
        Self {
            id,
            source,
            target,
            animated,
            style: EdgeStyle::default(),
        }
    }

    pub fn id(&self) -> &EdgeId {
        &self.id
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    pub fn animated(&self) -> bool {
        self.animated
    }

    /// Whether `node` is either end of this edge.
    pub fn touches(&self, node: &str) -> bool {
        self.source.as_str() == node || self.target.as_str() == node
    }

    pub fn style(&self) -> &EdgeStyle {
        &self.style
    }

    pub(crate) fn set_style(&mut self, style: EdgeStyle) {
        self.style = style;
    }
}
