//! Pointer-event classification.
//!
//! The original editor decided between "add vertex", "drag vertex",
//! and "close polygon" inside event closures by comparing the event
//! target's id against the first vertex and suppressing bubbling.
//! Here that policy is one pure function, [`classify`], so the state
//! machine stays independent of any event library and every routing
//! rule is testable in isolation.

use polydraw_core::{is_near, Point, VertexId};

use crate::session::{EditorSession, EditorState};

/// The raw gesture kind delivered by the UI event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Primary-button press.
    PrimaryDown,
    /// Movement while a drag gesture is in progress.
    DragMove,
    /// Primary-button release.
    PrimaryUp,
}

/// One raw pointer event, already resolved to canvas coordinates.
///
/// `target` carries the id of the vertex marker the event landed on,
/// or `None` for the bare canvas. Resolving screen targets to ids is
/// the rendering surface's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub target: Option<VertexId>,
    pub kind: PointerKind,
}

impl PointerEvent {
    pub fn new(position: Point, target: Option<VertexId>, kind: PointerKind) -> Self {
        Self {
            position,
            target,
            kind,
        }
    }

    /// Convenience for a primary press on the bare canvas.
    pub fn canvas_down(position: Point) -> Self {
        Self::new(position, None, PointerKind::PrimaryDown)
    }

    /// Convenience for a drag step on the marker identified by `id`.
    pub fn drag(id: VertexId, position: Point) -> Self {
        Self::new(position, Some(id), PointerKind::DragMove)
    }
}

/// What a pointer event should do to the vertex model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    /// Append a fresh vertex at the position.
    AddVertex(Point),
    /// Move the identified vertex to the position.
    DragVertex(VertexId, Point),
    /// Try to close the polygon (commits only if the proximity test
    /// against the first vertex passes).
    AttemptClose,
    /// No model mutation.
    Ignore,
}

/// Maps a raw pointer event to a model mutation, given the current
/// session state.
///
/// Routing rules:
/// - A primary press targeting the first vertex is the closing
///   gesture while the polygon is open; it must never fall through to
///   "add vertex". While closed it is inert (the drag gesture itself
///   arrives as `DragMove`).
/// - A primary press on the bare canvas adds a vertex while open,
///   unless it lands near the first vertex, which closes instead.
///   Once closed, canvas presses do nothing.
/// - A drag step moves its target vertex, except the first vertex
///   while open: pointer-down and drag-start share one physical
///   gesture, so an unlocked first vertex could not distinguish
///   "drag" from "close". The first vertex stays locked until the
///   polygon is closed.
/// - Releases never mutate the model.
pub fn classify(event: &PointerEvent, session: &EditorSession) -> PointerAction {
    let first_id = session.vertices().first().map(|v| v.id);

    match event.kind {
        PointerKind::PrimaryDown => match event.target {
            Some(id) if Some(id) == first_id => match session.state() {
                EditorState::Open => PointerAction::AttemptClose,
                EditorState::Closed => PointerAction::Ignore,
            },
            // Presses on other markers are drag-starts; the drag steps
            // themselves carry the mutation.
            Some(_) => PointerAction::Ignore,
            None => match session.state() {
                EditorState::Open => {
                    if is_near(
                        session.vertices().first(),
                        event.position,
                        session.config().proximity_threshold,
                    ) {
                        PointerAction::AttemptClose
                    } else {
                        PointerAction::AddVertex(event.position)
                    }
                }
                EditorState::Closed => PointerAction::Ignore,
            },
        },
        PointerKind::DragMove => match event.target {
            Some(id) => {
                let first_locked =
                    session.state() == EditorState::Open && Some(id) == first_id;
                if first_locked {
                    PointerAction::Ignore
                } else {
                    PointerAction::DragVertex(id, event.position)
                }
            }
            None => PointerAction::Ignore,
        },
        PointerKind::PrimaryUp => PointerAction::Ignore,
    }
}
