//! # Polydraw Editor
//!
//! The event-arbitration layer of polydraw: consumes raw pointer and
//! drag events, decides whether each one adds a vertex, drags an
//! existing one, or closes the polygon, and mutates the vertex model
//! accordingly.
//!
//! ## Architecture
//!
//! ```text
//! PointerEvent
//!   └── classify()          -> PointerAction (pure, independently testable)
//!         └── EditorSession -> applies the action to the vertex model
//!               ├── Open    (accepting vertices; first vertex locked)
//!               └── Closed  (drag-only; clear() is the way back)
//! ```
//!
//! The session is single-threaded and synchronous: events arrive one
//! at a time from the UI event source and every mutation commits
//! before the next event is seen.
//!
//! Persistence records (`PolygonRecord`) and the JSON file store live
//! in [`serialization`]; the editor fills in only `points` and
//! `isClosed`, the rest of the record belongs to the surrounding form.

pub mod config;
pub mod events;
pub mod serialization;
pub mod session;

pub use config::EditorConfig;
pub use events::{classify, PointerAction, PointerEvent, PointerKind};
pub use serialization::{
    Centroid, PolygonListResponse, PolygonRecord, PolygonStore, ValidationIssue,
};
pub use session::{EditorSession, EditorState, SessionChange};
