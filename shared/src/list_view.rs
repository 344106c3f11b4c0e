//! Sidebar: area picker, the active area's locations and the +/− buttons.

use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::model::{AreaName, Location, LocationId};
use crate::store::Snapshot;
use crate::view::{AreaOption, ViewAdapter, ViewModel};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LocationRow {
    pub id: LocationId,
    pub location: Location,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ListViewModel {
    pub area: AreaName,
    pub rows: Vec<LocationRow>,
    pub can_remove: bool,
}

impl ListViewModel {
    /// Rows for the active area only, in iteration order.
    #[must_use]
    pub fn build(snapshot: &Snapshot, decimals: usize) -> Self {
        let active = snapshot.selection.active_location.as_ref();
        let rows: Vec<LocationRow> = snapshot
            .active_area()
            .into_iter()
            .flat_map(|area| area.iter())
            .map(|(id, location)| LocationRow {
                id: id.clone(),
                location: *location,
                label: location.label(decimals),
                selected: active == Some(id),
            })
            .collect();
        Self {
            area: snapshot.selection.active_area.clone(),
            can_remove: rows.iter().any(|row| row.selected),
            rows,
        }
    }
}

/// Headless list adapter. Keeps the last rendered rows and turns clicks on
/// them into protocol events.
#[derive(Debug, Default)]
pub struct ListView {
    areas: Vec<AreaOption>,
    current: Option<ListViewModel>,
    renders: usize,
}

impl ListView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rows(&self) -> &[LocationRow] {
        self.current
            .as_ref()
            .map(|list| list.rows.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn area_options(&self) -> &[AreaOption] {
        &self.areas
    }

    #[must_use]
    pub fn selected_row(&self) -> Option<&LocationRow> {
        self.rows().iter().find(|row| row.selected)
    }

    #[must_use]
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Picking an entry in the area dropdown.
    #[must_use]
    pub fn pick_area(&self, area: &AreaName) -> Event {
        Event::SelectArea { area: area.clone() }
    }

    /// Clicking a row selects it with the coordinates the row displays.
    #[must_use]
    pub fn click(&self, id: &LocationId) -> Option<Event> {
        self.rows()
            .iter()
            .find(|row| &row.id == id)
            .map(|row| Event::SelectLocation {
                location_id: row.id.clone(),
                location: row.location,
            })
    }

    #[must_use]
    pub fn click_row(&self, index: usize) -> Option<Event> {
        let id = self.rows().get(index)?.id.clone();
        self.click(&id)
    }

    /// The "+" button.
    #[must_use]
    pub fn insert_clicked(&self) -> Option<Event> {
        self.current.as_ref().map(|list| Event::InsertLocation {
            area: list.area.clone(),
        })
    }

    /// The "−" button; does nothing without a selected row.
    #[must_use]
    pub fn remove_clicked(&self) -> Option<Event> {
        let list = self.current.as_ref()?;
        let row = self.selected_row()?;
        Some(Event::RemoveLocation {
            area: list.area.clone(),
            location_id: row.id.clone(),
        })
    }
}

impl ViewAdapter for ListView {
    fn render(&mut self, view: &ViewModel) -> Option<Event> {
        self.areas.clone_from(&view.areas);
        self.current = Some(view.list.clone());
        self.renders += 1;
        None
    }
}
