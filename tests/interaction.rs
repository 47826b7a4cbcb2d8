use depgraph::{
    sample_graph, CenterRequest, Controller, EdgeId, EdgeStyle, Graph, GraphError, Interaction,
    NodeId, NodeStyle, Selection, Viewport,
};

#[derive(Default)]
struct RecordingViewport {
    requests: Vec<CenterRequest>,
}

impl Viewport for RecordingViewport {
    fn center_on(&mut self, request: CenterRequest) {
        self.requests.push(request);
    }
}

struct Setup {
    g: Graph,
    c: Controller,
    v: RecordingViewport,
}

impl Setup {
    fn new() -> Self {
        Self {
            g: sample_graph().expect("sample graph"),
            c: Controller::new(),
            v: RecordingViewport::default(),
        }
    }

    fn click(&mut self, id: &str) {
        self.c
            .handle(&mut self.g, &mut self.v, Interaction::NodeClick(NodeId::from(id)))
            .expect("click on known node");
    }

    fn click_pane(&mut self) {
        self.c
            .handle(&mut self.g, &mut self.v, Interaction::PaneClick)
            .expect("pane click");
    }

    fn opacity(&self, id: &str) -> f32 {
        self.g.node(id).expect("node exists").style().opacity()
    }
}

fn assert_pristine(g: &Graph) {
    for n in g.nodes_iter() {
        assert_eq!(n.style(), &NodeStyle::default(), "node {}", n.id());
    }
    for e in g.edges_iter() {
        assert_eq!(e.style(), &EdgeStyle::default(), "edge {}", e.id());
    }
}

fn all_ids() -> Vec<String> {
    let g = sample_graph().expect("sample graph");
    g.nodes_iter().map(|n| n.id().to_string()).collect()
}

const LIB_API_VISIBLE: [&str; 4] = ["lib-api", "components-header", "app-api-route", "db-schema"];
const LIB_API_DIMMED: [&str; 6] = [
    "app-page",
    "app-layout",
    "components-footer",
    "lib-utils",
    "components-button",
    "package-json",
];

#[test]
fn idle_graph_is_fully_opaque() {
    let s = Setup::new();
    assert!(s.c.selection().is_idle());
    assert_pristine(&s.g);
}

#[test]
fn selecting_lib_api_highlights_its_neighbourhood() {
    let mut s = Setup::new();
    s.click("lib-api");

    for id in LIB_API_VISIBLE {
        assert_eq!(s.opacity(id), 1., "{id}");
    }
    for id in LIB_API_DIMMED {
        assert_eq!(s.opacity(id), 0.25, "{id}");
    }

    let highlight = s.c.settings_highlight().highlight_color;
    for e in s.g.edges_iter() {
        let style = e.style();
        if ["e2-6", "e4-7", "e6-9"].contains(&e.id().as_str()) {
            assert_eq!(style.opacity(), 1.);
            assert_eq!(style.stroke(), Some(highlight));
            assert_eq!(style.stroke_width(), 2.);
        } else {
            assert_eq!(style.opacity(), 0.25, "edge {}", e.id());
            assert_eq!(style.stroke(), None);
            assert_eq!(style.stroke_width(), 1.);
        }
    }

    let mut touching: Vec<&str> = s
        .g
        .edges_touching("lib-api")
        .into_iter()
        .map(EdgeId::as_str)
        .collect();
    touching.sort_unstable();
    assert_eq!(touching, ["e2-6", "e4-7", "e6-9"]);
}

#[test]
fn clicking_focused_node_again_returns_to_idle() {
    for id in all_ids() {
        let mut s = Setup::new();
        s.click(&id);
        s.click(&id);

        assert_eq!(s.c.selection(), &Selection::Idle, "{id}");
        assert_pristine(&s.g);
    }
}

#[test]
fn pane_click_equals_never_selecting() {
    let fresh = Setup::new();
    for id in all_ids() {
        let mut s = Setup::new();
        s.click(&id);
        s.click_pane();

        assert_eq!(s.c.selection(), fresh.c.selection(), "{id}");
        for n in fresh.g.nodes_iter() {
            let node = n.id().as_str();
            assert_eq!(s.g.node(node).unwrap().style(), n.style(), "{id}: {node}");
        }
        for e in fresh.g.edges_iter() {
            let edge = e.id().as_str();
            assert_eq!(s.g.edge(edge).unwrap().style(), e.style(), "{id}: {edge}");
        }
    }
}

#[test]
fn switching_selection_leaves_no_residue() {
    let mut s = Setup::new();
    s.click("lib-api");
    s.click("app-page");

    assert_eq!(s.c.selection(), &Selection::Focused(NodeId::from("app-page")));
    for n in s.g.nodes_iter() {
        let expected = match n.id().as_str() {
            "app-page" | "app-layout" => 1.,
            _ => 0.25,
        };
        assert_eq!(n.style().opacity(), expected, "{}", n.id());
    }
    for e in s.g.edges_iter() {
        let touching = e.id().as_str() == "e1-2";
        assert_eq!(e.style().stroke().is_some(), touching, "edge {}", e.id());
        assert_eq!(e.style().opacity(), if touching { 1. } else { 0.25 });
    }

    assert_eq!(s.v.requests.len(), 2);
}

#[test]
fn adding_edge_keeps_existing_endpoints() {
    let mut s = Setup::new();
    let before: Vec<_> = s
        .g
        .edges_iter()
        .map(|e| (e.id().clone(), e.source().clone(), e.target().clone()))
        .collect();

    let id = s
        .c
        .handle(
            &mut s.g,
            &mut s.v,
            Interaction::Connect {
                source: NodeId::from("package-json"),
                target: NodeId::from("lib-utils"),
            },
        )
        .expect("connect");

    assert_eq!(s.g.edge_count(), before.len() + 1);
    for (id, source, target) in &before {
        let (s2, t2) = s.g.edge_endpoints(id.as_str()).expect("edge kept");
        assert_eq!((s2, t2), (source, target));
    }
    assert!(matches!(id, depgraph::Transition::Connected(_)));
}

#[test]
fn adding_edge_with_unknown_endpoint_changes_nothing() {
    let mut s = Setup::new();

    let err = s
        .c
        .handle(
            &mut s.g,
            &mut s.v,
            Interaction::Connect {
                source: NodeId::from("does-not-exist"),
                target: NodeId::from("lib-utils"),
            },
        )
        .expect_err("unknown endpoint");

    assert_eq!(err, GraphError::UnknownEndpoint("does-not-exist".into()));
    assert_eq!(s.g.edge_count(), 9);
    assert!(s.g.add_edge("lib-utils", "nowhere").is_err());
    assert_eq!(s.g.edge_count(), 9);
}

#[test]
fn new_edge_is_styled_on_next_selection_change() {
    let mut s = Setup::new();
    s.click("lib-api");

    let id = s.g.add_edge("package-json", "app-page").expect("edge");
    assert_eq!(s.g.edge(id.as_str()).unwrap().style(), &EdgeStyle::default());
    assert_eq!(s.opacity("package-json"), 0.25);

    s.click("package-json");
    let e = s.g.edge(id.as_str()).unwrap();
    assert_eq!(e.style().stroke_width(), 2.);
    assert_eq!(s.opacity("app-page"), 1.);
    assert_eq!(s.opacity("lib-api"), 0.25);
}

#[test]
fn every_focus_change_recenters_at_fixed_zoom() {
    let mut s = Setup::new();
    s.click("lib-api");
    s.click("db-schema");
    s.click_pane();
    s.click("package-json");

    let targets: Vec<_> = s.v.requests.iter().map(|r| (r.target.x, r.target.y)).collect();
    assert_eq!(targets, vec![(200., 300.), (200., 400.), (400., 400.)]);
    assert!(s.v.requests.iter().all(|r| r.zoom == 1.5));
    assert!(s
        .v
        .requests
        .iter()
        .all(|r| r.duration == std::time::Duration::from_millis(800)));
}
