//! Styles derived from the current [`Selection`].
//!
//! Everything here is a pure function of the selection, the adjacency of the graph
//! and [`SettingsHighlight`]. Nothing depends on previously applied styles.

use log::trace;

use crate::{
    elements::{Edge, EdgeStyle, Node, NodeStyle},
    settings::SettingsHighlight,
    Graph, GraphError, Selection,
};

pub fn node_style_for(
    g: &Graph,
    selection: &Selection,
    node: &Node,
    settings: &SettingsHighlight,
) -> NodeStyle {
    match selection {
        Selection::Idle => NodeStyle::default(),
        Selection::Focused(focus) => {
            let id = node.id().as_str();
            if id == focus.as_str() || g.are_adjacent(id, focus.as_str()) {
                NodeStyle::default()
            } else {
                NodeStyle::default().with_opacity(settings.dimmed_opacity)
            }
        }
    }
}

pub fn edge_style_for(selection: &Selection, edge: &Edge, settings: &SettingsHighlight) -> EdgeStyle {
    let base = EdgeStyle::default().with_stroke_width(settings.default_width);
    match selection {
        Selection::Idle => base,
        Selection::Focused(focus) if edge.touches(focus.as_str()) => base
            .with_stroke(Some(settings.highlight_color))
            .with_stroke_width(settings.highlight_width),
        Selection::Focused(_) => base.with_opacity(settings.dimmed_opacity),
    }
}

/// Recomputes and writes the style of every node and edge of `g`.
pub fn apply(g: &mut Graph, selection: &Selection, settings: &SettingsHighlight) -> Result<(), GraphError> {
    let nodes: Vec<_> = g
        .nodes_iter()
        .map(|n| (n.id().clone(), node_style_for(g, selection, n, settings)))
        .collect();
    let edges: Vec<_> = g
        .edges_iter()
        .map(|e| (e.id().clone(), edge_style_for(selection, e, settings)))
        .collect();

    trace!(
        "restyling {} nodes and {} edges for {selection:?}",
        nodes.len(),
        edges.len()
    );

    for (id, style) in nodes {
        g.set_node_style(id.as_str(), style)?;
    }
    for (id, style) in edges {
        g.set_edge_style(id.as_str(), style)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dataset::sample_graph, NodeId};

    #[test]
    fn idle_styles_are_defaults() {
        let g = sample_graph().unwrap();
        let s = SettingsHighlight::default();
        for n in g.nodes_iter() {
            assert_eq!(node_style_for(&g, &Selection::Idle, n, &s), NodeStyle::default());
        }
        for e in g.edges_iter() {
            assert_eq!(edge_style_for(&Selection::Idle, e, &s), EdgeStyle::default());
        }
    }

    #[test]
    fn focused_edges_are_highlighted_in_both_directions() {
        let g = sample_graph().unwrap();
        let s = SettingsHighlight::default();
        let focus = Selection::Focused(NodeId::from("components-header"));

        // incoming
        let e = g.edge("e1-3").unwrap();
        let style = edge_style_for(&focus, e, &s);
        assert_eq!(style.opacity(), 1.);
        assert_eq!(style.stroke(), Some(s.highlight_color));
        assert_eq!(style.stroke_width(), 2.);

        // outgoing
        let e = g.edge("e2-5").unwrap();
        assert_eq!(edge_style_for(&focus, e, &s).stroke_width(), 2.);

        // unrelated
        let e = g.edge("e4-7").unwrap();
        let style = edge_style_for(&focus, e, &s);
        assert_eq!(style.opacity(), 0.25);
        assert_eq!(style.stroke(), None);
        assert_eq!(style.stroke_width(), 1.);
    }

    #[test]
    fn custom_dimmed_opacity_is_used() {
        let mut g = sample_graph().unwrap();
        let s = SettingsHighlight::new().with_dimmed_opacity(0.1);
        apply(&mut g, &Selection::Focused(NodeId::from("package-json")), &s).unwrap();

        // package.json has no edges, so only it stays visible
        for n in g.nodes_iter() {
            let expected = if n.id().as_str() == "package-json" { 1. } else { 0.1 };
            assert_eq!(n.style().opacity(), expected, "{}", n.id());
        }
        assert!(g.edges_iter().all(|e| e.style().opacity() == 0.1));
    }
}
