//! Editor session integration tests: full draw-close-drag-save
//! workflows through the public API.

use polydraw_core::Point;
use polydraw_editor::{
    EditorConfig, EditorSession, EditorState, PointerEvent, PolygonRecord, PolygonStore,
    SessionChange,
};

#[test]
fn test_complete_editing_workflow() {
    let mut session = EditorSession::new(EditorConfig::default());

    // Draw a triangle
    assert_eq!(
        session.handle_pointer(&PointerEvent::canvas_down(Point::new(100.0, 100.0))),
        SessionChange::VertexAdded
    );
    session.handle_pointer(&PointerEvent::canvas_down(Point::new(400.0, 120.0)));
    session.handle_pointer(&PointerEvent::canvas_down(Point::new(250.0, 380.0)));
    assert_eq!(session.vertices().len(), 3);
    assert_eq!(session.state(), EditorState::Open);

    // Close by clicking near the first vertex
    assert_eq!(
        session.handle_pointer(&PointerEvent::canvas_down(Point::new(110.0, 95.0))),
        SessionChange::PolygonClosed
    );
    assert!(session.is_closed());
    assert_eq!(session.vertices().len(), 3);

    // Adjust a vertex after closing
    let second = session.vertices().as_slice()[1].id;
    assert_eq!(
        session.handle_pointer(&PointerEvent::drag(second, Point::new(420.0, 140.0))),
        SessionChange::VertexMoved
    );
    assert_eq!(
        session.vertices().as_slice()[1].position(),
        Point::new(420.0, 140.0)
    );
    assert_eq!(session.vertices().as_slice()[1].id, second);

    // Assemble, validate, persist
    let record = PolygonRecord::from_session("triangle", &session);
    assert!(record.validate().is_empty());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("polygons.json");
    let mut store = PolygonStore::new();
    let id = store.upsert(record);
    store.save_to_file(&path).unwrap();

    // Reload and resume editing
    let store = PolygonStore::load_from_file(&path).unwrap();
    let saved = store.get(&id).unwrap();
    let resumed = EditorSession::from_record(saved, EditorConfig::default());
    assert!(resumed.is_closed());
    assert_eq!(resumed.vertices().len(), 3);
    assert_eq!(resumed.line_buffer(), session.line_buffer());
}

#[test]
fn test_clicks_inside_proximity_box_do_not_pile_up() {
    let mut session = EditorSession::new(EditorConfig::default());
    session.handle_pointer(&PointerEvent::canvas_down(Point::new(200.0, 200.0)));

    // A second click 30 units away is inside the 35-unit box around
    // the first vertex, so it closes rather than stacking a
    // near-coincident vertex on the close target.
    session.handle_pointer(&PointerEvent::canvas_down(Point::new(230.0, 230.0)));
    assert!(session.is_closed());
    assert_eq!(session.vertices().len(), 1);
}

#[test]
fn test_custom_threshold_changes_the_close_target() {
    let config = EditorConfig {
        proximity_threshold: 5.0,
        ..Default::default()
    };
    let mut session = EditorSession::new(config);
    session.handle_pointer(&PointerEvent::canvas_down(Point::new(0.0, 0.0)));

    // 30 units away: outside a 5-unit box, so this adds a vertex
    session.handle_pointer(&PointerEvent::canvas_down(Point::new(30.0, 30.0)));
    assert_eq!(session.state(), EditorState::Open);
    assert_eq!(session.vertices().len(), 2);

    // 4 units away from the first vertex: closes
    session.handle_pointer(&PointerEvent::canvas_down(Point::new(4.0, 0.0)));
    assert!(session.is_closed());
    assert_eq!(session.vertices().len(), 2);
}

#[test]
fn test_clear_restarts_a_closed_session() {
    let mut session = EditorSession::new(EditorConfig::default());
    session.handle_pointer(&PointerEvent::canvas_down(Point::new(50.0, 50.0)));
    session.handle_pointer(&PointerEvent::canvas_down(Point::new(50.0, 50.0)));
    assert!(session.is_closed());

    session.clear();
    assert_eq!(session.state(), EditorState::Open);
    assert!(session.vertices().is_empty());
    assert!(session.line_buffer().is_empty());

    // The cleared session accepts a new polygon
    session.handle_pointer(&PointerEvent::canvas_down(Point::new(10.0, 10.0)));
    assert_eq!(session.vertices().len(), 1);
}

#[test]
fn test_open_record_resumes_open() {
    let mut session = EditorSession::new(EditorConfig::default());
    session.handle_pointer(&PointerEvent::canvas_down(Point::new(0.0, 0.0)));
    session.handle_pointer(&PointerEvent::canvas_down(Point::new(100.0, 0.0)));

    let record = PolygonRecord::from_session("unfinished", &session);
    assert!(!record.is_closed);

    let mut resumed = EditorSession::from_record(&record, EditorConfig::default());
    assert_eq!(resumed.state(), EditorState::Open);

    // Still accepting vertices, and the original first vertex is
    // still the close target
    resumed.handle_pointer(&PointerEvent::canvas_down(Point::new(100.0, 100.0)));
    assert_eq!(resumed.vertices().len(), 3);
    resumed.handle_pointer(&PointerEvent::canvas_down(Point::new(2.0, 2.0)));
    assert!(resumed.is_closed());
}

#[test]
fn test_drag_moves_commit_immediately() {
    let mut session = EditorSession::new(EditorConfig::default());
    session.handle_pointer(&PointerEvent::canvas_down(Point::new(0.0, 0.0)));
    session.handle_pointer(&PointerEvent::canvas_down(Point::new(100.0, 0.0)));
    session.handle_pointer(&PointerEvent::canvas_down(Point::new(0.0, 0.0)));

    // Each drag step lands in the model; there is no pending state
    let second = session.vertices().as_slice()[1].id;
    for step in 1..=5 {
        let target = Point::new(100.0 + f64::from(step) * 10.0, 0.0);
        session.handle_pointer(&PointerEvent::drag(second, target));
        assert_eq!(session.vertices().as_slice()[1].position(), target);
    }
}
