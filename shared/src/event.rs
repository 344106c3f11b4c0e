use serde::{Deserialize, Serialize};

use crate::model::{AreaName, Location, LocationId};

/// Everything a view can ask of the core. Each variant has exactly one
/// handler in [`crate::App`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Event {
    SelectArea {
        area: AreaName,
    },
    /// `location` is the row's coordinates at click time; the map flies there.
    SelectLocation {
        location_id: LocationId,
        location: Location,
    },
    InsertLocation {
        area: AreaName,
    },
    RemoveLocation {
        area: AreaName,
        location_id: LocationId,
    },
    /// Sent on every drag-move, not only on release.
    RelocateLocation {
        area: AreaName,
        location_id: LocationId,
        location: Location,
    },
    /// The map view performed the pending camera move.
    FocusConsumed,
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectArea { .. } => "select_area",
            Self::SelectLocation { .. } => "select_location",
            Self::InsertLocation { .. } => "insert_location",
            Self::RemoveLocation { .. } => "remove_location",
            Self::RelocateLocation { .. } => "relocate_location",
            Self::FocusConsumed => "focus_consumed",
        }
    }

    /// Drag updates arrive in bursts; callers log them at trace level.
    #[must_use]
    pub const fn is_high_frequency(&self) -> bool {
        matches!(self, Self::RelocateLocation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_are_stable() {
        assert_eq!(Event::FocusConsumed.name(), "focus_consumed");
        assert_eq!(
            Event::SelectArea {
                area: "Kamppi".into()
            }
            .name(),
            "select_area"
        );
    }

    #[test]
    fn only_drags_are_high_frequency() {
        let drag = Event::RelocateLocation {
            area: "A".into(),
            location_id: "p1".into(),
            location: Location::new(1.0, 2.0),
        };
        assert!(drag.is_high_frequency());
        assert!(!Event::InsertLocation { area: "A".into() }.is_high_frequency());
    }

    #[test]
    fn events_serialize_with_plain_string_ids() {
        let event = Event::RemoveLocation {
            area: "A".into(),
            location_id: "p1".into(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"RemoveLocation": {"area": "A", "location_id": "p1"}})
        );
        let back: Event = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn event_size_is_reasonable() {
        let size = std::mem::size_of::<Event>();
        assert!(size <= 96, "Event enum is {size} bytes");
    }
}
