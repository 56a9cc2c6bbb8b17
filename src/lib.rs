//! # Polydraw
//!
//! A polygon drawing toolkit: click to place vertices, drag to adjust
//! them, re-click the first vertex to close the loop, then validate
//! and persist the result.
//!
//! ## Architecture
//!
//! Polydraw is organized as a workspace with multiple crates:
//!
//! 1. **polydraw-core** - Vertex model, proximity testing, line geometry
//! 2. **polydraw-editor** - Interaction state machine, config, records
//! 3. **polydraw-thumbnail** - Static thumbnail rendering for list views
//! 4. **polydraw** - Demo binary that integrates all crates

pub use polydraw_core::{
    flat_line_buffer, is_near, CoreError, Point, Vertex, VertexId, VertexSequence,
};

pub use polydraw_editor::{
    classify, Centroid, EditorConfig, EditorSession, EditorState, PointerAction, PointerEvent,
    PointerKind, PolygonListResponse, PolygonRecord, PolygonStore, SessionChange, ValidationIssue,
};

pub use polydraw_thumbnail::{render_thumbnail, ThumbnailOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
