use crux_core::render::Render;
use tracing::{debug, trace, warn};

use crate::config::MapConfig;
use crate::error::{AreaError, ConfigError};
use crate::event::Event;
use crate::store::AreaStore;
use crate::view::ViewModel;

/// Owned application state. Only [`Model::handle`] mutates it.
#[derive(Debug, Default)]
pub struct Model {
    pub store: AreaStore,
    pub config: MapConfig,
    pub last_error: Option<AreaError>,
}

impl Model {
    pub fn new(store: AreaStore, config: MapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            store,
            config,
            last_error: None,
        })
    }

    /// Applies one event. A rejected event leaves the store untouched and is
    /// remembered for the view until the next accepted one.
    pub fn handle(&mut self, event: Event) -> Result<(), AreaError> {
        let name = event.name();
        if event.is_high_frequency() {
            trace!(event = name, "handling event");
        } else {
            debug!(event = name, "handling event");
        }

        match self.store.apply(event) {
            Ok(()) => {
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                warn!(event = name, error = %e, code = e.kind().code(), "event rejected");
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    #[must_use]
    pub fn view_model(&self) -> ViewModel {
        ViewModel::build(&self.store, &self.config, self.last_error.as_ref())
    }
}

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub render: Render<Event>,
}

#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        // Rejections are already recorded on the model for the view.
        let _ = model.handle(event);
        caps.render.render();
    }

    fn view(&self, model: &Model) -> ViewModel {
        model.view_model()
    }
}
