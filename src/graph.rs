use std::collections::HashMap;

use egui::{Pos2, Rect};
use petgraph::{
    stable_graph::{EdgeIndex, NodeIndex, StableGraph},
    visit::EdgeRef,
    Directed, Direction,
};
use serde::{Deserialize, Serialize};

use crate::{
    elements::{Edge, EdgeId, EdgeStyle, Node, NodeId, NodeStyle},
    settings::SettingsConnect,
    GraphError,
};

/// In-memory dependency graph backed by [`petgraph::stable_graph::StableGraph`].
///
/// Nodes and edges are addressed by their string ids. Every edge endpoint always
/// references an existing node: edges can only be added through [`Graph::add_edge`]
/// and [`Graph::add_edge_with_id`] which validate both ends, and nothing is ever removed.
///
/// Serialized as a flat list of nodes and edges. Deserializing rebuilds the graph through
/// the same checks, so a snapshot with dangling endpoints or repeated ids is rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "GraphSnapshot", into = "GraphSnapshot")]
pub struct Graph {
    g: StableGraph<Node, Edge, Directed>,

    node_idx: HashMap<NodeId, NodeIndex>,
    edge_idx: HashMap<EdgeId, EdgeIndex>,

    connect: SettingsConnect,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_connect_settings(mut self, connect: SettingsConnect) -> Self {
        self.connect = connect;
        self
    }

    pub fn connect_settings(&self) -> &SettingsConnect {
        &self.connect
    }

    pub fn set_connect_settings(&mut self, connect: SettingsConnect) {
        self.connect = connect;
    }

    pub fn add_node(&mut self, node: Node) -> Result<NodeId, GraphError> {
        let id = node.id().clone();
        if self.node_idx.contains_key(&id) {
            return Err(GraphError::DuplicateNodeId(id.to_string()));
        }

        let idx = self.g.add_node(node);
        self.node_idx.insert(id.clone(), idx);

        Ok(id)
    }

    /// Adds an animated edge `source -> target` with a generated id.
    ///
    /// Fails without touching the graph if either endpoint is unknown or the edge is
    /// rejected by the current [`SettingsConnect`].
    pub fn add_edge(&mut self, source: &str, target: &str) -> Result<EdgeId, GraphError> {
        let id = self.free_edge_id(source, target);
        self.add_edge_with_id(id, source, target, true)
    }

    pub fn add_edge_with_id(
        &mut self,
        id: impl Into<EdgeId>,
        source: &str,
        target: &str,
        animated: bool,
    ) -> Result<EdgeId, GraphError> {
        let id = id.into();
        if self.edge_idx.contains_key(&id) {
            return Err(GraphError::DuplicateEdgeId(id.to_string()));
        }

        let (Some(&start), Some(&end)) = (self.node_idx.get(source), self.node_idx.get(target))
        else {
            let unknown = if self.node_idx.contains_key(source) {
                target
            } else {
                source
            };
            return Err(GraphError::UnknownEndpoint(unknown.to_string()));
        };

        if start == end && !self.connect.allow_self_loops {
            return Err(GraphError::SelfLoop(source.to_string()));
        }
        if !self.connect.allow_duplicates && self.g.contains_edge(start, end) {
            return Err(GraphError::DuplicateEdge {
                from: source.to_string(),
                to: target.to_string(),
            });
        }

        let edge = Edge::new(id.clone(), source.into(), target.into(), animated);
        let idx = self.g.add_edge(start, end, edge);
        self.edge_idx.insert(id.clone(), idx);

        Ok(id)
    }

    pub fn set_node_style(&mut self, id: &str, style: NodeStyle) -> Result<(), GraphError> {
        self.node_mut(id)?.set_style(style);
        Ok(())
    }

    pub fn set_edge_style(&mut self, id: &str, style: EdgeStyle) -> Result<(), GraphError> {
        let idx = self
            .edge_idx
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownEntity(id.to_string()))?;
        let edge = self
            .g
            .edge_weight_mut(idx)
            .ok_or_else(|| GraphError::UnknownEntity(id.to_string()))?;
        edge.set_style(style);
        Ok(())
    }

    /// Moves node to `location` in canvas coordinates. No bounds or collision checks.
    pub fn move_node(&mut self, id: &str, location: Pos2) -> Result<(), GraphError> {
        self.node_mut(id)?.set_location(location);
        Ok(())
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_idx.get(id).and_then(|idx| self.g.node_weight(*idx))
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edge_idx.get(id).and_then(|idx| self.g.edge_weight(*idx))
    }

    pub fn edge_endpoints(&self, id: &str) -> Option<(&NodeId, &NodeId)> {
        self.edge(id).map(|e| (e.source(), e.target()))
    }

    /// Provides iterator over all nodes in insertion order.
    pub fn nodes_iter(&self) -> impl Iterator<Item = &Node> {
        self.g.node_weights()
    }

    /// Provides iterator over all edges in insertion order.
    pub fn edges_iter(&self) -> impl Iterator<Item = &Edge> {
        self.g.edge_weights()
    }

    /// Whether an edge connects `a` and `b` in either direction.
    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        match (self.node_idx.get(a), self.node_idx.get(b)) {
            (Some(&a), Some(&b)) => self.g.find_edge_undirected(a, b).is_some(),
            _ => false,
        }
    }

    /// Ids of the nodes connected to `id` in either direction, without duplicates.
    pub fn neighbors(&self, id: &str) -> Vec<&NodeId> {
        let Some(&idx) = self.node_idx.get(id) else {
            return Vec::new();
        };

        let mut res: Vec<&NodeId> = Vec::new();
        for n in self.g.neighbors_undirected(idx) {
            if let Some(node) = self.g.node_weight(n) {
                if !res.contains(&node.id()) {
                    res.push(node.id());
                }
            }
        }
        res
    }

    /// Ids of the edges with `id` as either endpoint.
    pub fn edges_touching(&self, id: &str) -> Vec<&EdgeId> {
        let Some(&idx) = self.node_idx.get(id) else {
            return Vec::new();
        };

        self.g
            .edges_directed(idx, Direction::Outgoing)
            // self loops show up in both directions
            .chain(
                self.g
                    .edges_directed(idx, Direction::Incoming)
                    .filter(|e| e.source() != e.target()),
            )
            .map(|e| e.weight().id())
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.g.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.g.edge_count()
    }

    /// Bounding rect of all node locations in canvas coordinates.
    pub fn bounds(&self) -> Rect {
        let points: Vec<Pos2> = self.nodes_iter().map(Node::location).collect();
        if points.is_empty() {
            return Rect::NOTHING;
        }
        Rect::from_points(&points)
    }

    fn node_mut(&mut self, id: &str) -> Result<&mut Node, GraphError> {
        self.node_idx
            .get(id)
            .copied()
            .and_then(|idx| self.g.node_weight_mut(idx))
            .ok_or_else(|| GraphError::UnknownEntity(id.to_string()))
    }

    fn free_edge_id(&self, source: &str, target: &str) -> EdgeId {
        let base = format!("e-{source}-{target}");
        if !self.edge_idx.contains_key(base.as_str()) {
            return EdgeId::new(base);
        }

        let mut n = 2usize;
        loop {
            let candidate = format!("{base}-{n}");
            if !self.edge_idx.contains_key(candidate.as_str()) {
                return EdgeId::new(candidate);
            }
            n += 1;
        }
    }
}

#[derive(Serialize, Deserialize)]
struct GraphSnapshot {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    connect: SettingsConnect,
}

impl From<Graph> for GraphSnapshot {
    fn from(g: Graph) -> Self {
        Self {
            nodes: g.nodes_iter().cloned().collect(),
            edges: g.edges_iter().cloned().collect(),
            connect: g.connect,
        }
    }
}

impl TryFrom<GraphSnapshot> for Graph {
    type Error = GraphError;

    fn try_from(snapshot: GraphSnapshot) -> Result<Self, Self::Error> {
        // edges accepted under older connect settings stay loadable
        let mut g = Graph::new();
        for node in snapshot.nodes {
            g.add_node(node)?;
        }
        for edge in snapshot.edges {
            let id = g.add_edge_with_id(
                edge.id().clone(),
                edge.source().as_str(),
                edge.target().as_str(),
                edge.animated(),
            )?;
            g.set_edge_style(id.as_str(), *edge.style())?;
        }

        g.connect = snapshot.connect;
        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut g = Graph::new();
        for id in ["a", "b", "c"] {
            g.add_node(Node::new(id, id, "test")).unwrap();
        }
        g.add_edge_with_id("ab", "a", "b", false).unwrap();
        g.add_edge_with_id("bc", "b", "c", false).unwrap();
        g
    }

    #[test]
    fn add_edge_generates_unique_ids() {
        let mut g = triangle();

        let first = g.add_edge("a", "c").unwrap();
        let second = g.add_edge("a", "c").unwrap();
        let third = g.add_edge("a", "c").unwrap();

        assert_eq!(first.as_str(), "e-a-c");
        assert_eq!(second.as_str(), "e-a-c-2");
        assert_eq!(third.as_str(), "e-a-c-3");
        assert_eq!(g.edge_count(), 5);
        assert!(g.edge(first.as_str()).unwrap().animated());
    }

    #[test]
    fn add_edge_rejects_unknown_endpoint_without_changes() {
        let mut g = triangle();

        assert_eq!(
            g.add_edge("a", "missing"),
            Err(GraphError::UnknownEndpoint("missing".to_string()))
        );
        assert_eq!(
            g.add_edge("missing", "a"),
            Err(GraphError::UnknownEndpoint("missing".to_string()))
        );
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn connect_settings_govern_self_loops_and_duplicates() {
        let mut g = triangle();
        assert!(g.add_edge("a", "a").is_ok());
        assert!(g.add_edge("a", "b").is_ok());

        let mut g = triangle().with_connect_settings(
            SettingsConnect::new()
                .with_self_loops(false)
                .with_duplicates(false),
        );
        assert_eq!(
            g.add_edge("a", "a"),
            Err(GraphError::SelfLoop("a".to_string()))
        );
        assert_eq!(
            g.add_edge("a", "b"),
            Err(GraphError::DuplicateEdge {
                from: "a".to_string(),
                to: "b".to_string()
            })
        );
        // opposite direction is a different dependency
        assert!(g.add_edge("b", "a").is_ok());
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut g = triangle();
        assert_eq!(
            g.add_node(Node::new("a", "again", "test")),
            Err(GraphError::DuplicateNodeId("a".to_string()))
        );
        assert_eq!(
            g.add_edge_with_id("ab", "b", "c", false),
            Err(GraphError::DuplicateEdgeId("ab".to_string()))
        );
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn style_and_move_on_unknown_ids_fail() {
        let mut g = triangle();
        assert_eq!(
            g.set_node_style("nope", NodeStyle::default()),
            Err(GraphError::UnknownEntity("nope".to_string()))
        );
        assert_eq!(
            g.set_edge_style("nope", EdgeStyle::default()),
            Err(GraphError::UnknownEntity("nope".to_string()))
        );
        assert_eq!(
            g.move_node("nope", Pos2::ZERO),
            Err(GraphError::UnknownEntity("nope".to_string()))
        );
    }

    #[test]
    fn move_node_is_unconstrained() {
        let mut g = triangle();
        g.move_node("a", Pos2::new(-1e6, 42.)).unwrap();
        assert_eq!(g.node("a").unwrap().location(), Pos2::new(-1e6, 42.));
    }

    #[test]
    fn adjacency_ignores_direction() {
        let g = triangle();
        assert!(g.are_adjacent("a", "b"));
        assert!(g.are_adjacent("b", "a"));
        assert!(!g.are_adjacent("a", "c"));
        assert!(!g.are_adjacent("a", "missing"));

        let mut n = g.neighbors("b");
        n.sort();
        assert_eq!(n, vec![&NodeId::from("a"), &NodeId::from("c")]);

        let mut e = g.edges_touching("b");
        e.sort();
        assert_eq!(e, vec![&EdgeId::from("ab"), &EdgeId::from("bc")]);
    }

    #[test]
    fn bounds_cover_all_locations() {
        let mut g = triangle();
        g.move_node("a", Pos2::new(-10., 5.)).unwrap();
        g.move_node("c", Pos2::new(30., -20.)).unwrap();

        let b = g.bounds();
        assert_eq!(b.min, Pos2::new(-10., -20.));
        assert_eq!(b.max, Pos2::new(30., 5.));
        assert!(!Graph::new().bounds().is_positive());
    }
}
