//! # Polydraw Thumbnail
//!
//! Static thumbnail rendering for saved polygons, used by list views.
//! A thumbnail is a one-shot, read-only projection of a finalized
//! `{vertices, closed}` pair: no hit-testing, no dragging, no state.
//! Rendering uses tiny-skia for anti-aliased output into an `image`
//! buffer.

mod renderer;

pub use renderer::{render_thumbnail, ThumbnailOptions};
