use std::sync::Arc;
use tracing::{info, instrument, trace};

use crate::error::{AreaError, SeedError};
use crate::event::Event;
use crate::model::{Area, AreaCollection, AreaName, FocusRequest, Location, LocationId, Selection};
use crate::seed;

/// Immutable view of the store at one point in time.
///
/// The area collection is shared with the store; later mutations copy it
/// instead of writing through, so a snapshot never observes them.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub areas: Arc<AreaCollection>,
    pub selection: Selection,
    pub focus: FocusRequest,
}

impl Snapshot {
    #[must_use]
    pub fn active_area(&self) -> Option<&Area> {
        self.areas.get(&self.selection.active_area)
    }
}

/// Single source of truth for areas, selection and the pending camera focus.
///
/// Every operation checks its references before touching anything, so an
/// `Err` always leaves the store exactly as it was.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaStore {
    areas: Arc<AreaCollection>,
    selection: Selection,
    focus: FocusRequest,
}

impl Default for AreaStore {
    fn default() -> Self {
        Self::new(seed::helsinki())
    }
}

impl AreaStore {
    /// Starts with the first area of `areas` active and nothing selected.
    #[must_use]
    pub fn new(areas: AreaCollection) -> Self {
        let active_area = areas
            .first_name()
            .cloned()
            .unwrap_or_else(|| AreaName::new(""));
        Self {
            areas: Arc::new(areas),
            selection: Selection {
                active_area,
                active_location: None,
            },
            focus: FocusRequest::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        seed::from_json(json).map(Self::new)
    }

    #[must_use]
    pub fn areas(&self) -> &AreaCollection {
        &self.areas
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn focus(&self) -> FocusRequest {
        self.focus
    }

    #[must_use]
    pub fn active_area(&self) -> Option<&Area> {
        self.areas.get(&self.selection.active_area)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            areas: Arc::clone(&self.areas),
            selection: self.selection.clone(),
            focus: self.focus,
        }
    }

    /// Switching to another area drops the location selection, which belongs
    /// to the area being left.
    #[instrument(level = "debug", skip(self))]
    pub fn select_area(&mut self, name: &AreaName) -> Result<(), AreaError> {
        if !self.areas.contains(name) {
            return Err(AreaError::UnknownArea(name.clone()));
        }
        if self.selection.active_area != *name {
            info!(area = %name, "active area changed");
            self.selection.active_area = name.clone();
            self.selection.active_location = None;
        }
        Ok(())
    }

    /// Highlights `id` in the active area and asks the map to fly to
    /// `location`, the coordinates as the user saw them when clicking.
    #[instrument(level = "debug", skip(self))]
    pub fn select_location(
        &mut self,
        id: &LocationId,
        location: Location,
    ) -> Result<(), AreaError> {
        let active = &self.selection.active_area;
        let known = self.areas.get(active).is_some_and(|area| area.contains(id));
        if !known {
            return Err(AreaError::UnknownLocation {
                area: active.clone(),
                location: id.clone(),
            });
        }
        self.selection.active_location = Some(id.clone());
        self.focus = FocusRequest {
            pending: true,
            target: location,
        };
        Ok(())
    }

    /// Appends a location at the midpoint of the area's first and last
    /// locations and returns its fresh id. Selection is left alone.
    #[instrument(level = "debug", skip(self))]
    pub fn insert_location(&mut self, area: &AreaName) -> Result<LocationId, AreaError> {
        let target = self.area_mut(area)?;
        let location = target.insertion_point();
        let id = LocationId::generate();
        target.locations.insert(id.clone(), location);
        info!(area = %area, location_id = %id, ?location, "location inserted");
        Ok(id)
    }

    /// Removes `id`, keeping the relative order of the remaining locations.
    /// Clears the selection if it pointed at the removed location.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_location(
        &mut self,
        area: &AreaName,
        id: &LocationId,
    ) -> Result<Location, AreaError> {
        self.ensure_location(area, id)?;
        let removed = self
            .area_mut(area)?
            .locations
            .shift_remove(id)
            .ok_or_else(|| unknown_location(area, id))?;
        if self.selection.active_location.as_ref() == Some(id) {
            self.selection.active_location = None;
        }
        info!(area = %area, location_id = %id, "location removed");
        Ok(removed)
    }

    /// Moves `id` to `location` in place. Runs once per drag-move event.
    pub fn relocate_location(
        &mut self,
        area: &AreaName,
        id: &LocationId,
        location: Location,
    ) -> Result<(), AreaError> {
        self.ensure_location(area, id)?;
        let slot = self
            .area_mut(area)?
            .locations
            .get_mut(id)
            .ok_or_else(|| unknown_location(area, id))?;
        *slot = location;
        trace!(area = %area, location_id = %id, ?location, "location relocated");
        Ok(())
    }

    /// The map performed the camera move. Returns whether a request was
    /// actually pending.
    pub fn consume_focus(&mut self) -> bool {
        std::mem::replace(&mut self.focus.pending, false)
    }

    /// Routes one protocol event to its handler.
    pub fn apply(&mut self, event: Event) -> Result<(), AreaError> {
        match event {
            Event::SelectArea { area } => self.select_area(&area),
            Event::SelectLocation {
                location_id,
                location,
            } => self.select_location(&location_id, location),
            Event::InsertLocation { area } => self.insert_location(&area).map(drop),
            Event::RemoveLocation { area, location_id } => {
                self.remove_location(&area, &location_id).map(drop)
            }
            Event::RelocateLocation {
                area,
                location_id,
                location,
            } => self.relocate_location(&area, &location_id, location),
            Event::FocusConsumed => {
                self.consume_focus();
                Ok(())
            }
        }
    }

    fn ensure_location(&self, area: &AreaName, id: &LocationId) -> Result<(), AreaError> {
        let found = self
            .areas
            .get(area)
            .ok_or_else(|| AreaError::UnknownArea(area.clone()))?;
        if found.contains(id) {
            Ok(())
        } else {
            Err(unknown_location(area, id))
        }
    }

    /// Copy-on-write access to one area; clones the collection first if a
    /// snapshot still shares it.
    fn area_mut(&mut self, area: &AreaName) -> Result<&mut Area, AreaError> {
        if !self.areas.contains(area) {
            return Err(AreaError::UnknownArea(area.clone()));
        }
        Arc::make_mut(&mut self.areas)
            .get_mut(area)
            .ok_or_else(|| AreaError::UnknownArea(area.clone()))
    }
}

fn unknown_location(area: &AreaName, id: &LocationId) -> AreaError {
    AreaError::UnknownLocation {
        area: area.clone(),
        location: id.clone(),
    }
}
