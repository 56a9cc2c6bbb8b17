//! Line derivation: projects the vertex sequence into the flat
//! coordinate buffer renderers consume.

use crate::model::VertexSequence;

/// Interleaves each vertex's x then y in drawing order:
/// `[x0, y0, x1, y1, ...]`.
///
/// This is the only geometry any renderer needs. Closing the visual
/// path is a renderer-level flag; the first vertex is never duplicated
/// at the end of the buffer.
pub fn flat_line_buffer(sequence: &VertexSequence) -> Vec<f64> {
    let mut buffer = Vec::with_capacity(sequence.len() * 2);
    for vertex in sequence {
        buffer.push(vertex.x);
        buffer.push(vertex.y);
    }
    buffer
}
