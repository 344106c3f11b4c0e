//! Map: every area's outline, the active area's draggable markers and the
//! one-shot camera focus.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::MapConfig;
use crate::event::Event;
use crate::model::{AreaName, Location, LocationId};
use crate::store::Snapshot;
use crate::view::{ViewAdapter, ViewModel};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AreaOutline {
    pub area: AreaName,
    /// `[lat, lon]` in the area's iteration order.
    pub positions: Vec<[f64; 2]>,
    pub color: String,
    pub active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Marker {
    pub id: LocationId,
    pub position: [f64; 2],
    pub popup: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MapViewModel {
    pub initial_center: [f64; 2],
    pub initial_zoom: f64,
    pub tile_url: String,
    pub tile_attribution: String,
    pub active_area: AreaName,
    pub outlines: Vec<AreaOutline>,
    pub markers: Vec<Marker>,
    /// Set only while a focus request is pending.
    pub fly_to: Option<Location>,
}

impl MapViewModel {
    #[must_use]
    pub fn build(snapshot: &Snapshot, config: &MapConfig) -> Self {
        let active_area = &snapshot.selection.active_area;
        let outlines = snapshot
            .areas
            .iter()
            .map(|(name, area)| AreaOutline {
                area: name.clone(),
                positions: area.iter().map(|(_, loc)| loc.position()).collect(),
                color: config.outline_color.clone(),
                active: name == active_area,
            })
            .collect();
        let markers = snapshot
            .active_area()
            .into_iter()
            .flat_map(|area| area.iter())
            .map(|(id, loc)| Marker {
                id: id.clone(),
                position: loc.position(),
                popup: format!("{}, {}", loc.latitude, loc.longitude),
            })
            .collect();
        Self {
            initial_center: config.initial_center.position(),
            initial_zoom: config.initial_zoom,
            tile_url: config.tile_url.clone(),
            tile_attribution: config.tile_attribution.clone(),
            active_area: active_area.clone(),
            outlines,
            markers,
            fly_to: snapshot.focus.pending_target(),
        }
    }

    /// Outlines as GeoJSON polygons. Areas with fewer than three locations
    /// do not form a ring and are left out.
    #[must_use]
    pub fn outlines_geojson(&self) -> FeatureCollection {
        let features = self
            .outlines
            .iter()
            .filter(|outline| outline.positions.len() >= 3)
            .map(|outline| {
                // GeoJSON positions are [lon, lat] and rings repeat their start.
                let mut ring: Vec<Vec<f64>> = outline
                    .positions
                    .iter()
                    .map(|[lat, lon]| vec![*lon, *lat])
                    .collect();
                if let Some(start) = ring.first().cloned() {
                    ring.push(start);
                }

                let mut properties = JsonObject::new();
                properties.insert("area".into(), outline.area.as_str().into());
                properties.insert("active".into(), outline.active.into());
                properties.insert("color".into(), outline.color.clone().into());

                Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
                    id: None,
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();
        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}

/// Whatever moves the map camera. Animations are fire-and-forget: the core
/// never waits for them to finish.
pub trait Camera {
    fn fly_to(&mut self, target: Location);
}

impl<F> Camera for F
where
    F: FnMut(Location),
{
    fn fly_to(&mut self, target: Location) {
        self(target);
    }
}

/// Headless map adapter. Turns marker drags into relocations and pending
/// focus requests into exactly one camera move each.
#[derive(Debug)]
pub struct MapView<C> {
    camera: C,
    current: Option<MapViewModel>,
}

impl<C: Camera> MapView<C> {
    pub fn new(camera: C) -> Self {
        Self {
            camera,
            current: None,
        }
    }

    #[must_use]
    pub fn camera(&self) -> &C {
        &self.camera
    }

    #[must_use]
    pub fn current(&self) -> Option<&MapViewModel> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        self.current
            .as_ref()
            .map(|map| map.markers.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn outlines(&self) -> &[AreaOutline] {
        self.current
            .as_ref()
            .map(|map| map.outlines.as_slice())
            .unwrap_or_default()
    }

    /// One drag-move of marker `id` to its live position. Only markers of
    /// the rendered active area can be dragged.
    #[must_use]
    pub fn drag(&self, id: &LocationId, latitude: f64, longitude: f64) -> Option<Event> {
        let map = self.current.as_ref()?;
        map.markers.iter().any(|marker| &marker.id == id).then(|| {
            Event::RelocateLocation {
                area: map.active_area.clone(),
                location_id: id.clone(),
                location: Location::new(latitude, longitude),
            }
        })
    }
}

impl<C: Camera> ViewAdapter for MapView<C> {
    fn render(&mut self, view: &ViewModel) -> Option<Event> {
        let fly_to = view.map.fly_to;
        self.current = Some(view.map.clone());
        let target = fly_to?;
        debug!(?target, "flying camera to focus target");
        self.camera.fly_to(target);
        Some(Event::FocusConsumed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Area, AreaCollection};
    use crate::store::AreaStore;

    fn store() -> AreaStore {
        let a = Area::with_locations([
            (LocationId::from("a1"), Location::new(60.0, 24.0)),
            (LocationId::from("a2"), Location::new(60.1, 24.0)),
            (LocationId::from("a3"), Location::new(60.1, 24.1)),
        ]);
        let b = Area::with_locations([(LocationId::from("b1"), Location::new(61.0, 25.0))]);
        AreaStore::new(
            AreaCollection::new([(AreaName::from("A"), a), (AreaName::from("B"), b)]).unwrap(),
        )
    }

    #[test]
    fn outlines_cover_all_areas_markers_only_active() {
        let map = MapViewModel::build(&store().snapshot(), &MapConfig::default());
        assert_eq!(map.outlines.len(), 2);
        assert!(map.outlines[0].active);
        assert!(!map.outlines[1].active);
        assert_eq!(map.outlines[1].positions, vec![[61.0, 25.0]]);

        let ids: Vec<&str> = map.markers.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["a1", "a2", "a3"]);
        assert_eq!(map.markers[1].popup, "60.1, 24");
        assert_eq!(map.fly_to, None);
        assert_eq!(map.initial_center, [60.164_976, 24.931_738_7]);
    }

    #[test]
    fn geojson_closes_rings_and_skips_degenerate_areas() {
        let map = MapViewModel::build(&store().snapshot(), &MapConfig::default());
        let collection = map.outlines_geojson();
        assert_eq!(collection.features.len(), 1);

        let feature = &collection.features[0];
        let props = feature.properties.as_ref().unwrap();
        assert_eq!(props.get("area"), Some(&serde_json::json!("A")));
        assert_eq!(props.get("active"), Some(&serde_json::json!(true)));

        let Some(Value::Polygon(rings)) = feature.geometry.as_ref().map(|g| &g.value) else {
            panic!("expected polygon geometry");
        };
        assert_eq!(rings[0].len(), 4);
        assert_eq!(rings[0][0], vec![24.0, 60.0]);
        assert_eq!(rings[0].first(), rings[0].last());
    }

    #[test]
    fn drag_emits_relocation_for_active_markers_only() {
        let store = store();
        let mut view = MapView::new(|_: Location| {});
        assert_eq!(view.drag(&"a1".into(), 1.0, 2.0), None);

        view.render(&ViewModel::build(&store, &MapConfig::default(), None));
        assert_eq!(
            view.drag(&"a1".into(), 1.0, 2.0),
            Some(Event::RelocateLocation {
                area: "A".into(),
                location_id: "a1".into(),
                location: Location::new(1.0, 2.0),
            })
        );
        assert_eq!(view.drag(&"b1".into(), 1.0, 2.0), None);
    }

    #[test]
    fn pending_focus_flies_once_and_reports_consumption() {
        let mut store = store();
        store
            .select_location(&"a2".into(), Location::new(60.1, 24.0))
            .unwrap();

        let mut flights = Vec::new();
        {
            let mut view = MapView::new(|target: Location| flights.push(target));
            let vm = ViewModel::build(&store, &MapConfig::default(), None);
            assert_eq!(view.render(&vm), Some(Event::FocusConsumed));

            store.consume_focus();
            let vm = ViewModel::build(&store, &MapConfig::default(), None);
            assert_eq!(view.render(&vm), None);
        }
        assert_eq!(flights, vec![Location::new(60.1, 24.0)]);
    }
}
