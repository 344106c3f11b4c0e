use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{AreaName, LocationId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidReference,
    InvalidSeed,
    InvalidConfig,
}

impl ErrorKind {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidReference => "INVALID_REFERENCE",
            Self::InvalidSeed => "INVALID_SEED",
            Self::InvalidConfig => "INVALID_CONFIG",
        }
    }
}

/// A protocol operation named an area or location the model does not hold.
///
/// Raised before any side effect, so a rejected operation never leaves a
/// partially applied model behind.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum AreaError {
    #[error("unknown area: {0}")]
    UnknownArea(AreaName),
    #[error("unknown location {location} in area {area}")]
    UnknownLocation { area: AreaName, location: LocationId },
}

impl AreaError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidReference
    }
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("seed must contain at least one area")]
    Empty,
    #[error("malformed seed: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl SeedError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidSeed
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("initial center ({0}, {1}) is not a valid coordinate")]
    InvalidCenter(f64, f64),
    #[error("zoom {zoom} outside [{min}, {max}]")]
    ZoomOutOfRange { zoom: f64, min: f64, max: f64 },
    #[error("coordinate precision {0} exceeds {max}", max = crate::MAX_COORDINATE_DECIMALS)]
    PrecisionTooHigh(usize),
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("malformed config: {0}")]
    Malformed(String),
}

impl ConfigError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidConfig
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed(e.to_string())
    }
}

/// Serializable notice about the last rejected event, for the shell to show.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorView {
    pub code: String,
    pub message: String,
}

impl From<&AreaError> for ErrorView {
    fn from(e: &AreaError) -> Self {
        Self {
            code: e.kind().code().to_string(),
            message: e.to_string(),
        }
    }
}
