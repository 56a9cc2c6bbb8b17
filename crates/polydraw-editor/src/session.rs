//! The editing session: an explicit two-state machine over the vertex
//! model.
//!
//! `Open` accepts new vertices and locks the first one; `Closed`
//! accepts drags only. The only transition out of `Closed` is a full
//! [`EditorSession::clear`], never a vertex-level action.

use polydraw_core::{flat_line_buffer, CoreError, VertexSequence};
use tracing::warn;

use crate::config::EditorConfig;
use crate::events::{classify, PointerAction, PointerEvent};
use crate::serialization::PolygonRecord;

/// The two interaction states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Accepting new vertices; the first vertex is not draggable.
    Open,
    /// No new vertices; every vertex is draggable.
    Closed,
}

/// What a handled event did to the session, so the surrounding form
/// knows whether to re-validate and re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChange {
    /// A vertex was appended.
    VertexAdded,
    /// A vertex changed position.
    VertexMoved,
    /// The polygon transitioned to `Closed`.
    PolygonClosed,
    /// Nothing changed.
    None,
}

/// One polygon-editing session owning the vertex sequence and the
/// closed flag.
///
/// All mutation goes through [`handle_pointer`](Self::handle_pointer)
/// or [`clear`](Self::clear); events are applied one at a time on the
/// dispatching thread, so no two mutations are ever in flight.
#[derive(Debug, Clone)]
pub struct EditorSession {
    vertices: VertexSequence,
    state: EditorState,
    config: EditorConfig,
}

impl EditorSession {
    /// Starts an empty session in `Open`.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            vertices: VertexSequence::new(),
            state: EditorState::Open,
            config,
        }
    }

    /// Seeds a session from a persisted record, for editing an
    /// existing polygon.
    pub fn from_record(record: &PolygonRecord, config: EditorConfig) -> Self {
        Self {
            vertices: VertexSequence::from_vertices(record.points.clone()),
            state: if record.is_closed {
                EditorState::Closed
            } else {
                EditorState::Open
            },
            config,
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == EditorState::Closed
    }

    pub fn vertices(&self) -> &VertexSequence {
        &self.vertices
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The flat interleaved coordinate buffer for the current frame.
    pub fn line_buffer(&self) -> Vec<f64> {
        flat_line_buffer(&self.vertices)
    }

    /// Classifies and applies one raw pointer event.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> SessionChange {
        let action = classify(event, self);
        self.apply(action)
    }

    /// Applies an already-classified action.
    pub fn apply(&mut self, action: PointerAction) -> SessionChange {
        match action {
            PointerAction::AddVertex(position) => {
                // classify() never emits AddVertex while closed, but
                // the state machine enforces it anyway for callers
                // applying actions directly.
                if self.state == EditorState::Closed {
                    return SessionChange::None;
                }
                self.vertices = self.vertices.with_appended(position);
                SessionChange::VertexAdded
            }
            PointerAction::DragVertex(id, position) => {
                match self.vertices.with_moved(id, position) {
                    Ok(moved) => {
                        self.vertices = moved;
                        SessionChange::VertexMoved
                    }
                    Err(CoreError::VertexNotFound { id }) => {
                        // Transient event-ordering race; keep the
                        // sequence and carry on.
                        warn!(%id, "drag targeted a vertex not in the sequence");
                        SessionChange::None
                    }
                }
            }
            PointerAction::AttemptClose => {
                if self.state == EditorState::Open && !self.vertices.is_empty() {
                    self.state = EditorState::Closed;
                    SessionChange::PolygonClosed
                } else {
                    SessionChange::None
                }
            }
            PointerAction::Ignore => SessionChange::None,
        }
    }

    /// Full reset: back to `Open` with an empty sequence, from any
    /// state.
    pub fn clear(&mut self) {
        self.vertices = VertexSequence::new();
        self.state = EditorState::Open;
    }
}
