use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::SeedError;

// --- Typed IDs ---

macro_rules! typed_id {
    ($name:ident) => {
        #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

typed_id!(AreaName);
typed_id!(LocationId);

impl LocationId {
    /// Fresh UUID v4 identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

/// A latitude/longitude point. Identity comes from its key in an [`Area`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            latitude: (self.latitude + other.latitude) / 2.0,
            longitude: (self.longitude + other.longitude) / 2.0,
        }
    }

    /// `"lat, lon"` with a fixed number of decimals.
    #[must_use]
    pub fn label(self, decimals: usize) -> String {
        format!(
            "{:.prec$}, {:.prec$}",
            self.latitude,
            self.longitude,
            prec = decimals
        )
    }

    /// `[lat, lon]`, the order map widgets take positions in.
    #[must_use]
    pub const fn position(self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

/// Locations keyed by id, iterated in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub locations: IndexMap<LocationId, Location>,
}

impl Area {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locations<I>(locations: I) -> Self
    where
        I: IntoIterator<Item = (LocationId, Location)>,
    {
        Self {
            locations: locations.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn get(&self, id: &LocationId) -> Option<&Location> {
        self.locations.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &LocationId) -> bool {
        self.locations.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LocationId, &Location)> {
        self.locations.iter()
    }

    /// Midpoint of the first and last location in iteration order, or the
    /// origin when the area is empty.
    #[must_use]
    pub fn insertion_point(&self) -> Location {
        match (self.locations.first(), self.locations.last()) {
            (Some((_, first)), Some((_, last))) => first.midpoint(*last),
            _ => Location::default(),
        }
    }
}

/// All areas, keyed by name, in seed order. Never empty.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AreaCollection(IndexMap<AreaName, Area>);

impl AreaCollection {
    pub fn new<I>(areas: I) -> Result<Self, SeedError>
    where
        I: IntoIterator<Item = (AreaName, Area)>,
    {
        let areas: IndexMap<AreaName, Area> = areas.into_iter().collect();
        if areas.is_empty() {
            return Err(SeedError::Empty);
        }
        Ok(Self(areas))
    }

    /// Parses a seed of shape `{ "<area>": { "locations": { "<id>": {..} } } }`.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let areas: IndexMap<AreaName, Area> = serde_json::from_str(json)?;
        Self::new(areas)
    }

    /// Caller guarantees `areas` is non-empty.
    pub(crate) fn from_map_unchecked(areas: IndexMap<AreaName, Area>) -> Self {
        debug_assert!(!areas.is_empty());
        Self(areas)
    }

    #[must_use]
    pub fn get(&self, name: &AreaName) -> Option<&Area> {
        self.0.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &AreaName) -> Option<&mut Area> {
        self.0.get_mut(name)
    }

    #[must_use]
    pub fn contains(&self, name: &AreaName) -> bool {
        self.0.contains_key(name)
    }

    /// First area in collection order; it exists because the collection is
    /// never empty.
    pub(crate) fn first_name(&self) -> Option<&AreaName> {
        self.0.keys().next()
    }

    pub fn names(&self) -> impl Iterator<Item = &AreaName> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AreaName, &Area)> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for AreaCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let areas = IndexMap::<AreaName, Area>::deserialize(deserializer)?;
        Self::new(areas).map_err(serde::de::Error::custom)
    }
}

/// Which area the user works on and which of its locations is highlighted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub active_area: AreaName,
    pub active_location: Option<LocationId>,
}

/// One-shot camera instruction for the map view.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FocusRequest {
    pub pending: bool,
    pub target: Location,
}

impl FocusRequest {
    #[must_use]
    pub const fn pending_target(&self) -> Option<Location> {
        if self.pending {
            Some(self.target)
        } else {
            None
        }
    }
}
