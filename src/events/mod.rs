mod event;
mod sink;

pub use event::{
    Event, PayloadCenter, PayloadEdgeAdd, PayloadNodeDeselect, PayloadNodeMove, PayloadNodeSelect,
};

pub use sink::EventSink;
