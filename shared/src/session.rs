//! In-process shell: one model, one list view, one map view and a FIFO of
//! pending events.

use std::collections::VecDeque;
use tracing::debug;

use crate::app::Model;
use crate::error::AreaError;
use crate::event::Event;
use crate::list_view::ListView;
use crate::map_view::{Camera, MapView};
use crate::view::{ViewAdapter, ViewModel};

/// Drives the render contract: after every event, both views redraw from
/// the resulting view model before the next queued event is handled.
pub struct Session<C> {
    model: Model,
    list: ListView,
    map: MapView<C>,
    queue: VecDeque<Event>,
    errors: Vec<AreaError>,
}

impl<C: Camera> Session<C> {
    /// Starts from `model` and draws the first frame.
    pub fn new(model: Model, camera: C) -> Self {
        let mut session = Self {
            model,
            list: ListView::new(),
            map: MapView::new(camera),
            queue: VecDeque::new(),
            errors: Vec::new(),
        };
        session.publish();
        session.drain();
        session
    }

    #[must_use]
    pub fn list(&self) -> &ListView {
        &self.list
    }

    #[must_use]
    pub fn map(&self) -> &MapView<C> {
        &self.map
    }

    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    #[must_use]
    pub fn view(&self) -> ViewModel {
        self.model.view_model()
    }

    /// Errors from rejected events, oldest first. Draining them is up to the
    /// shell.
    pub fn take_errors(&mut self) -> Vec<AreaError> {
        std::mem::take(&mut self.errors)
    }

    /// Queues `event` and processes it together with any follow-ups the
    /// views emit.
    pub fn dispatch(&mut self, event: Event) {
        self.queue.push_back(event);
        self.drain();
    }

    /// Dispatches what a view gesture produced; gestures that map to no
    /// event (a click outside any row, say) are ignored.
    pub fn dispatch_opt(&mut self, event: Option<Event>) {
        if let Some(event) = event {
            self.dispatch(event);
        }
    }

    fn drain(&mut self) {
        while let Some(event) = self.queue.pop_front() {
            if let Err(e) = self.model.handle(event) {
                self.errors.push(e);
            }
            self.publish();
        }
    }

    fn publish(&mut self) {
        let view = self.model.view_model();
        let follow_ups = [self.list.render(&view), self.map.render(&view)];
        for event in follow_ups.into_iter().flatten() {
            debug!(event = event.name(), "view queued follow-up event");
            self.queue.push_back(event);
        }
    }
}
