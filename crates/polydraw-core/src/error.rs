//! Error types for the polydraw core.
//!
//! The interaction core has no fatal conditions: every error here is
//! recoverable by leaving the model unchanged. Errors use `thiserror`
//! for ergonomic handling at the call sites.

use crate::model::VertexId;
use thiserror::Error;

/// Core model error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A mutation referenced a vertex id that is not in the sequence.
    /// Indicates a transient event-ordering race, not user error;
    /// callers log it and keep the previous sequence.
    #[error("no vertex with id {id} in sequence")]
    VertexNotFound {
        /// The id the mutation asked for.
        id: VertexId,
    },
}

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
