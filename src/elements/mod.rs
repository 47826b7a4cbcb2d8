mod edge;
mod node;
mod style;

pub use self::edge::{Edge, EdgeId};
pub use self::node::{Node, NodeId};
pub use self::style::{EdgeStyle, NodeStyle};
