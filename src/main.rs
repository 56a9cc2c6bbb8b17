//! Scripted demo of a full editing session: draw a polygon, close it,
//! adjust a vertex, persist the record, and render a thumbnail.

use anyhow::Context;
use polydraw::{
    init_logging, render_thumbnail, EditorConfig, EditorSession, Point, PointerEvent,
    PolygonRecord, PolygonStore, ThumbnailOptions, VertexSequence,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!(
        version = polydraw::VERSION,
        built = polydraw::BUILD_DATE,
        "polydraw demo"
    );

    let config = match EditorConfig::default_path() {
        Some(path) => EditorConfig::load_from_file(&path)?,
        None => EditorConfig::default(),
    };

    let mut session = EditorSession::new(config);

    // Place four vertices, then close by clicking near the first one
    for (x, y) in [
        (120.0, 110.0),
        (520.0, 140.0),
        (560.0, 430.0),
        (180.0, 470.0),
    ] {
        session.handle_pointer(&PointerEvent::canvas_down(Point::new(x, y)));
    }
    session.handle_pointer(&PointerEvent::canvas_down(Point::new(125.0, 105.0)));
    info!(
        vertices = session.vertices().len(),
        closed = session.is_closed(),
        "polygon closed"
    );

    // Nudge the first vertex, draggable now that the polygon is
    // closed
    if let Some(first) = session.vertices().first() {
        let id = first.id;
        session.handle_pointer(&PointerEvent::drag(id, Point::new(100.0, 100.0)));
    }

    let record = PolygonRecord::from_session("demo polygon", &session);
    let issues = record.validate();
    anyhow::ensure!(issues.is_empty(), "record failed validation: {issues:?}");

    let mut store = PolygonStore::new();
    let id = store.upsert(record);
    let store_path = std::env::temp_dir().join("polydraw-demo.json");
    store
        .save_to_file(&store_path)
        .context("saving demo polygon store")?;
    info!(polygon_id = %id, path = %store_path.display(), "polygon saved");

    // Static thumbnail, as the saved-polygons list would show it
    let saved = store.get(&id).context("saved polygon missing from store")?;
    let thumbnail = render_thumbnail(
        &VertexSequence::from_vertices(saved.points.clone()),
        saved.is_closed,
        &ThumbnailOptions::default(),
    );
    let thumb_path = std::env::temp_dir().join("polydraw-demo.png");
    thumbnail
        .save(&thumb_path)
        .context("writing demo thumbnail")?;
    info!(path = %thumb_path.display(), "thumbnail rendered");

    Ok(())
}
