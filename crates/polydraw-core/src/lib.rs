//! # Polydraw Core
//!
//! Core types and geometry for the polydraw vertex editor.
//! Provides the fundamental abstractions the interaction layer and the
//! renderers are built on:
//!
//! - **Vertex model**: an ordered sequence of identity-stable vertices
//!   with value-replacing mutation operations
//! - **Proximity testing**: the coarse hit-test that decides whether a
//!   pointer position counts as "the same point" as a vertex
//! - **Line derivation**: the flat interleaved coordinate buffer that
//!   is the sole geometry export consumed by renderers
//!
//! The crate is synchronous and UI-free; pointer-event arbitration
//! lives in `polydraw-editor` and rendering in `polydraw-thumbnail`.

pub mod constants;
pub mod error;
pub mod line;
pub mod model;
pub mod proximity;

pub use error::{CoreError, Result};
pub use line::flat_line_buffer;
pub use model::{Point, Vertex, VertexId, VertexSequence};
pub use proximity::is_near;
