// lib.rs - shared core for the area editor: one area/location model kept in
// sync between a list view and a map view.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod list_view;
pub mod map_view;
pub mod model;
pub mod seed;
pub mod session;
pub mod store;
pub mod view;

pub use app::{App, Capabilities, Effect, Model};
pub use config::MapConfig;
pub use crux_core::{render::Render, App as CruxApp};
pub use error::{AreaError, ConfigError, ErrorKind, ErrorView, SeedError};
pub use event::Event;
pub use list_view::{ListView, ListViewModel, LocationRow};
pub use map_view::{AreaOutline, Camera, MapView, MapViewModel, Marker};
pub use model::{Area, AreaCollection, AreaName, FocusRequest, Location, LocationId, Selection};
pub use session::Session;
pub use store::{AreaStore, Snapshot};
pub use view::{AreaOption, ViewAdapter, ViewModel};

pub const DEFAULT_MAP_CENTER: Location = Location::new(60.164_976, 24.931_738_7);
pub const DEFAULT_MAP_ZOOM: f64 = 14.0;
pub const MIN_ZOOM: f64 = 0.0;
pub const MAX_ZOOM: f64 = 20.0;
pub const DEFAULT_COORDINATE_DECIMALS: usize = 7;
pub const MAX_COORDINATE_DECIMALS: usize = 15;
pub const DEFAULT_OUTLINE_COLOR: &str = "#173ec0";
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
