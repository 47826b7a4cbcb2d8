use std::cell::RefCell;

use super::Event;

/// Receiver of [`Event`]s produced by the widget. Sending must not block the frame.
pub trait EventSink {
    fn send(&self, event: Event);
}

impl EventSink for crossbeam::channel::Sender<Event> {
    fn send(&self, event: Event) {
        // a dropped receiver only means nobody listens anymore
        let _ = crossbeam::channel::Sender::send(self, event);
    }
}

impl EventSink for RefCell<Vec<Event>> {
    fn send(&self, event: Event) {
        self.borrow_mut().push(event);
    }
}
