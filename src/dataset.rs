//! Fixed sample graph of a small React/Next.js project.

use egui::{Color32, Pos2};

use crate::{Graph, GraphError, Node};

const BLUE: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);
const INDIGO: Color32 = Color32::from_rgb(0x63, 0x66, 0xf1);
const GRAY: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80);
const GREEN: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e);
const RED: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
const YELLOW: Color32 = Color32::from_rgb(0xea, 0xb3, 0x08);
const ORANGE: Color32 = Color32::from_rgb(0xf9, 0x73, 0x16);

// id, label, category, accent, x, y
const NODES: [(&str, &str, &str, Color32, f32, f32); 10] = [
    ("app-page", "page.tsx", "Page Component", BLUE, 250., 0.),
    ("app-layout", "layout.tsx", "Layout Component", BLUE, 250., 100.),
    ("components-header", "header.tsx", "UI Component", INDIGO, 100., 200.),
    ("components-footer", "footer.tsx", "UI Component", INDIGO, 400., 200.),
    ("lib-utils", "utils.ts", "Utility", GRAY, 0., 300.),
    ("lib-api", "api.ts", "API Client", GREEN, 200., 300.),
    ("components-button", "button.tsx", "UI Component", INDIGO, 400., 300.),
    ("app-api-route", "route.ts", "API Route", RED, 600., 300.),
    ("db-schema", "schema.ts", "Database Schema", YELLOW, 200., 400.),
    ("package-json", "package.json", "Config", ORANGE, 400., 400.),
];

// id, source, target
const EDGES: [(&str, &str, &str); 9] = [
    ("e1-2", "app-page", "app-layout"),
    ("e1-3", "app-layout", "components-header"),
    ("e1-4", "app-layout", "components-footer"),
    ("e2-5", "components-header", "lib-utils"),
    ("e2-6", "components-header", "lib-api"),
    ("e3-6", "components-footer", "components-button"),
    ("e4-7", "lib-api", "app-api-route"),
    ("e5-8", "app-api-route", "db-schema"),
    ("e6-9", "lib-api", "db-schema"),
];

/// Builds the sample dependency graph: 10 files and 9 animated dependency edges.
pub fn sample_graph() -> Result<Graph, GraphError> {
    let mut g = Graph::new();

    for (id, label, category, accent, x, y) in NODES {
        g.add_node(
            Node::new(id, label, category)
                .with_accent(accent)
                .with_location(Pos2::new(x, y)),
        )?;
    }

    for (id, source, target) in EDGES {
        g.add_edge_with_id(id, source, target, true)?;
    }

    Ok(g)
}
