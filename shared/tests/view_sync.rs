use std::cell::RefCell;
use std::rc::Rc;

use shared::{AreaName, Camera, Event, Location, Model, Session};

#[derive(Clone, Default)]
struct SharedCamera(Rc<RefCell<Vec<Location>>>);

impl SharedCamera {
    fn flights(&self) -> Vec<Location> {
        self.0.borrow().clone()
    }
}

impl Camera for SharedCamera {
    fn fly_to(&mut self, target: Location) {
        self.0.borrow_mut().push(target);
    }
}

fn session() -> (Session<SharedCamera>, SharedCamera) {
    let camera = SharedCamera::default();
    (Session::new(Model::default(), camera.clone()), camera)
}

fn list_and_map_agree(session: &Session<SharedCamera>) {
    let rows: Vec<_> = session
        .list()
        .rows()
        .iter()
        .map(|row| (row.id.clone(), row.location.position()))
        .collect();
    let markers: Vec<_> = session
        .map()
        .markers()
        .iter()
        .map(|marker| (marker.id.clone(), marker.position))
        .collect();
    assert_eq!(rows, markers);
}

#[test]
fn switching_area_updates_both_views() {
    let (mut session, camera) = session();
    let punavuori = AreaName::from("Punavuori");

    let pick = session.list().pick_area(&punavuori);
    session.dispatch(pick);

    assert_eq!(session.list().rows().len(), 12);
    assert_eq!(session.map().markers().len(), 12);
    let active: Vec<_> = session
        .map()
        .outlines()
        .iter()
        .filter(|outline| outline.active)
        .map(|outline| outline.area.clone())
        .collect();
    assert_eq!(active, vec![punavuori.clone()]);
    assert!(session
        .list()
        .area_options()
        .iter()
        .any(|option| option.selected && option.name == punavuori));
    list_and_map_agree(&session);
    assert!(camera.flights().is_empty());
}

#[test]
fn drag_updates_list_on_every_move() {
    let (mut session, _camera) = session();
    let id = session.map().markers()[0].id.clone();

    for step in 1..=5 {
        let offset = f64::from(step) * 0.001;
        let drag = session.map().drag(&id, 60.17 + offset, 24.93 + offset);
        session.dispatch_opt(drag);

        let row = &session.list().rows()[0];
        assert_eq!(row.id, id);
        assert_eq!(row.location, Location::new(60.17 + offset, 24.93 + offset));
        list_and_map_agree(&session);
    }
    // Dragged point keeps its place in the polygon.
    let kamppi = &session.map().outlines()[0];
    assert_eq!(kamppi.positions[0], session.list().rows()[0].location.position());
    assert_eq!(kamppi.positions.len(), 8);
}

#[test]
fn click_select_flies_once_then_stays_put() {
    let (mut session, camera) = session();

    let click = session.list().click_row(3);
    let expected = session.list().rows()[3].location;
    session.dispatch_opt(click);

    assert_eq!(camera.flights(), vec![expected]);
    assert_eq!(session.list().selected_row().map(|r| r.location), Some(expected));

    let insert = session.list().insert_clicked();
    session.dispatch_opt(insert);
    let id = session.map().markers()[0].id.clone();
    let drag = session.map().drag(&id, 60.0, 24.0);
    session.dispatch_opt(drag);

    assert_eq!(camera.flights().len(), 1);

    let click = session.list().click_row(0);
    session.dispatch_opt(click);
    assert_eq!(camera.flights().len(), 2);
}

#[test]
fn remove_button_deletes_selected_point_from_both_views() {
    let (mut session, _camera) = session();

    let click = session.list().click_row(1);
    session.dispatch_opt(click);
    let removed = session.list().selected_row().unwrap().id.clone();

    let remove = session.list().remove_clicked();
    session.dispatch_opt(remove);

    assert_eq!(session.list().rows().len(), 7);
    assert!(session.list().rows().iter().all(|row| row.id != removed));
    assert!(session.map().markers().iter().all(|m| m.id != removed));
    assert!(session.list().selected_row().is_none());
    assert_eq!(session.list().remove_clicked(), None);
    assert_eq!(session.map().outlines()[0].positions.len(), 7);
}

#[test]
fn stale_drag_from_removed_marker_is_rejected() {
    let (mut session, _camera) = session();
    let id = session.map().markers()[0].id.clone();
    let stale = Event::RelocateLocation {
        area: "Kamppi".into(),
        location_id: id.clone(),
        location: Location::new(0.0, 0.0),
    };

    session.dispatch(Event::RemoveLocation {
        area: "Kamppi".into(),
        location_id: id,
    });
    session.dispatch(stale);

    assert_eq!(session.take_errors().len(), 1);
    assert_eq!(session.list().rows().len(), 7);
    assert_eq!(
        session.view().error.map(|e| e.code),
        Some("INVALID_REFERENCE".to_string())
    );
}
