//! End-to-end test through the root crate's re-exports: draw, close,
//! persist, reload, render.

use polydraw::{
    render_thumbnail, EditorConfig, EditorSession, Point, PointerEvent, PolygonRecord,
    PolygonStore, ThumbnailOptions, VertexSequence,
};

#[test]
fn test_draw_persist_reload_render() {
    let mut session = EditorSession::new(EditorConfig::default());
    for (x, y) in [(120.0, 110.0), (520.0, 140.0), (560.0, 430.0)] {
        session.handle_pointer(&PointerEvent::canvas_down(Point::new(x, y)));
    }
    session.handle_pointer(&PointerEvent::canvas_down(Point::new(125.0, 105.0)));
    assert!(session.is_closed());

    let record = PolygonRecord::from_session("roundtrip", &session);
    assert!(record.validate().is_empty());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("polygons.json");
    let mut store = PolygonStore::new();
    let id = store.upsert(record);
    store.save_to_file(&path).unwrap();

    let reloaded = PolygonStore::load_from_file(&path).unwrap();
    let saved = reloaded.get(&id).unwrap();
    assert_eq!(saved.points.len(), 3);
    assert!(saved.is_closed);

    let thumbnail = render_thumbnail(
        &VertexSequence::from_vertices(saved.points.clone()),
        saved.is_closed,
        &ThumbnailOptions::default(),
    );
    assert_eq!(thumbnail.dimensions(), (115, 100));
    // Something was drawn
    assert!(thumbnail.pixels().any(|p| p.0[3] != 0));
}
