use thiserror::Error;

/// Errors returned by [`crate::Graph`] mutations and propagated by [`crate::Controller`].
///
/// A failed mutation never leaves the graph partially changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// No node or edge with the given id exists.
    #[error("unknown entity: {0}")]
    UnknownEntity(String),

    /// An edge endpoint does not reference an existing node.
    #[error("unknown edge endpoint: {0}")]
    UnknownEndpoint(String),

    /// Edge from a node to itself while self loops are disabled.
    #[error("self loop on {0} is not allowed")]
    SelfLoop(String),

    /// Edge between the same ordered pair already exists while duplicates are disabled.
    #[error("edge {from} -> {to} already exists")]
    DuplicateEdge { from: String, to: String },

    #[error("node id {0} is already taken")]
    DuplicateNodeId(String),

    #[error("edge id {0} is already taken")]
    DuplicateEdgeId(String),
}
