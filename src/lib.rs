mod controller;
mod dataset;
mod draw;
mod elements;
mod error;
mod graph;
mod metadata;
mod settings;
mod view;
mod viewport;

pub mod highlight;

pub use self::controller::{Controller, Interaction, Selection, Transition};
pub use self::dataset::sample_graph;
pub use self::elements::{Edge, EdgeId, EdgeStyle, Node, NodeId, NodeStyle};
pub use self::error::GraphError;
pub use self::graph::Graph;
pub use self::metadata::{reset_metadata, Metadata};
pub use self::settings::{
    SettingsConnect, SettingsFocus, SettingsHighlight, SettingsNavigation, SettingsStyle,
};
pub use self::view::DependencyGraphView;
pub use self::viewport::{CenterRequest, NoViewport, Viewport};

#[cfg(feature = "events")]
pub mod events;
