//! Coarse proximity testing between a pointer position and a vertex.
//!
//! The test is an axis-aligned box, not a circular radius: a pointer
//! counts as "on" a vertex when both coordinate deltas are strictly
//! below the threshold. That makes the effective target a 70x70 square
//! around a 10-unit marker. Intentional: the dominant use is the
//! closing click on the first vertex, where a generous target beats
//! geometric precision and avoids stacking near-coincident vertices
//! on top of the close target.

use crate::model::{Point, Vertex};

/// Returns true when `pointer` falls inside the axis-aligned box of
/// half-width `threshold` around `vertex`.
///
/// The boundary is exclusive: a delta of exactly `threshold` misses.
/// An absent vertex (e.g. an empty sequence asked for its first
/// vertex) never matches.
pub fn is_near(vertex: Option<&Vertex>, pointer: Point, threshold: f64) -> bool {
    match vertex {
        Some(v) => (v.x - pointer.x).abs() < threshold && (v.y - pointer.y).abs() < threshold,
        None => false,
    }
}
