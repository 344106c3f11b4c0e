use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::Location;
use crate::{
    DEFAULT_COORDINATE_DECIMALS, DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM, DEFAULT_OUTLINE_COLOR,
    MAX_COORDINATE_DECIMALS, MAX_ZOOM, MIN_ZOOM, OSM_ATTRIBUTION, OSM_TILE_URL,
};

/// Presentation settings handed to both view adapters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub initial_center: Location,
    pub initial_zoom: f64,
    /// Decimals shown in list rows.
    pub coordinate_decimals: usize,
    pub outline_color: String,
    pub tile_url: String,
    pub tile_attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            initial_center: DEFAULT_MAP_CENTER,
            initial_zoom: DEFAULT_MAP_ZOOM,
            coordinate_decimals: DEFAULT_COORDINATE_DECIMALS,
            outline_color: DEFAULT_OUTLINE_COLOR.into(),
            tile_url: OSM_TILE_URL.into(),
            tile_attribution: OSM_ATTRIBUTION.into(),
        }
    }
}

impl MapConfig {
    /// Parses a (possibly partial) JSON override; missing fields keep their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let Location {
            latitude,
            longitude,
        } = self.initial_center;
        if !latitude.is_finite()
            || !longitude.is_finite()
            || !(-90.0..=90.0).contains(&latitude)
            || !(-180.0..=180.0).contains(&longitude)
        {
            return Err(ConfigError::InvalidCenter(latitude, longitude));
        }
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&self.initial_zoom) {
            return Err(ConfigError::ZoomOutOfRange {
                zoom: self.initial_zoom,
                min: MIN_ZOOM,
                max: MAX_ZOOM,
            });
        }
        if self.coordinate_decimals > MAX_COORDINATE_DECIMALS {
            return Err(ConfigError::PrecisionTooHigh(self.coordinate_decimals));
        }
        if self.outline_color.trim().is_empty() {
            return Err(ConfigError::Empty("outline_color"));
        }
        if self.tile_url.trim().is_empty() {
            return Err(ConfigError::Empty("tile_url"));
        }
        Ok(())
    }
}
