use serde::{Deserialize, Serialize};

use crate::config::MapConfig;
use crate::error::{AreaError, ErrorView};
use crate::event::Event;
use crate::list_view::ListViewModel;
use crate::map_view::MapViewModel;
use crate::model::AreaName;
use crate::store::AreaStore;

/// An entry of the area dropdown.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AreaOption {
    pub name: AreaName,
    pub selected: bool,
}

/// Everything both views need for one frame, built from a single snapshot.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ViewModel {
    pub areas: Vec<AreaOption>,
    pub list: ListViewModel,
    pub map: MapViewModel,
    /// Why the last event was rejected, until the next one is accepted.
    pub error: Option<ErrorView>,
}

impl ViewModel {
    #[must_use]
    pub fn build(store: &AreaStore, config: &MapConfig, error: Option<&AreaError>) -> Self {
        let snapshot = store.snapshot();
        let areas = snapshot
            .areas
            .names()
            .map(|name| AreaOption {
                name: name.clone(),
                selected: *name == snapshot.selection.active_area,
            })
            .collect();
        Self {
            areas,
            list: ListViewModel::build(&snapshot, config.coordinate_decimals),
            map: MapViewModel::build(&snapshot, config),
            error: error.map(ErrorView::from),
        }
    }
}

/// A view that redraws from each new view model. It may answer with one
/// follow-up event, which is queued behind the event being processed.
pub trait ViewAdapter {
    fn render(&mut self, view: &ViewModel) -> Option<Event>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Location;

    #[test]
    fn dropdown_lists_every_area_with_active_flagged() {
        let store = AreaStore::default();
        let view = ViewModel::build(&store, &MapConfig::default(), None);
        assert_eq!(view.areas.len(), 5);
        assert!(view.areas[0].selected);
        assert_eq!(view.areas.iter().filter(|a| a.selected).count(), 1);
        assert_eq!(view.list.area, view.map.active_area);
    }

    #[test]
    fn list_and_map_agree_on_locations() {
        let mut store = AreaStore::default();
        store.select_area(&"Punavuori".into()).unwrap();
        let view = ViewModel::build(&store, &MapConfig::default(), None);

        let rows: Vec<_> = view.list.rows.iter().map(|r| (&r.id, r.location.position())).collect();
        let markers: Vec<_> = view.map.markers.iter().map(|m| (&m.id, m.position)).collect();
        assert_eq!(rows, markers);
        assert_eq!(rows.len(), 12);
    }

    #[test]
    fn rejection_is_reported() {
        let store = AreaStore::default();
        let error = AreaError::UnknownArea("Nowhere".into());
        let view = ViewModel::build(&store, &MapConfig::default(), Some(&error));
        assert_eq!(view.error.map(|e| e.code), Some("INVALID_REFERENCE".to_string()));
        assert_eq!(view.map.fly_to, None::<Location>);
    }
}
