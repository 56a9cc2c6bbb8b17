//! Vertex model: points, identity-stable vertices, and the ordered
//! vertex sequence a polygon is built from.
//!
//! All sequence mutations are value-replacing: they return a new
//! `VertexSequence` instead of editing in place, so callers can keep
//! the previous snapshot and compare ("did anything change?") without
//! defensive copies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, Result};

/// A plain coordinate pair in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Stable identifier for one vertex.
///
/// Identity survives drags: dragging changes a vertex's coordinates
/// but never its id, so dragged markers can be matched back into the
/// sequence. Ids are surrogate v4 UUIDs; hashing the initial position
/// would collide for two clicks at the same coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(Uuid);

impl VertexId {
    /// Generates a fresh id, unique for the polygon's lifetime.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for VertexId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One vertex of the polygon being drawn.
///
/// Serializes with the persisted record's field names (`pointId`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    #[serde(rename = "pointId")]
    pub id: VertexId,
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    /// Creates a vertex at `position` with a fresh id.
    pub fn at(position: Point) -> Self {
        Self {
            id: VertexId::new(),
            x: position.x,
            y: position.y,
        }
    }

    /// The vertex's coordinates as a point.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// The ordered sequence of vertices defining the polygon path.
///
/// Insertion order is drawing order and determines the rendered line
/// path. The first vertex is distinguished: it is the only close
/// target, and it is locked against dragging while the polygon is
/// still open (see `polydraw-editor`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexSequence {
    vertices: Vec<Vertex>,
}

impl VertexSequence {
    /// An empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sequence from already-persisted vertices, e.g. when
    /// editing an existing polygon.
    pub fn from_vertices(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The distinguished first vertex, if any.
    pub fn first(&self) -> Option<&Vertex> {
        self.vertices.first()
    }

    /// Looks up a vertex by id.
    pub fn get(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns a new sequence with a fresh vertex appended at
    /// `position`. All existing vertices are carried over unchanged.
    pub fn with_appended(&self, position: Point) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.push(Vertex::at(position));
        Self { vertices }
    }

    /// Returns a new sequence with the vertex matching `id` moved to
    /// `position`, preserving its id and the order of the sequence.
    ///
    /// An unknown id yields `CoreError::VertexNotFound`; the receiver
    /// is untouched either way, so callers recover by simply keeping
    /// their current sequence.
    pub fn with_moved(&self, id: VertexId, position: Point) -> Result<Self> {
        let index = self
            .vertices
            .iter()
            .position(|v| v.id == id)
            .ok_or(CoreError::VertexNotFound { id })?;
        let mut vertices = self.vertices.clone();
        vertices[index] = Vertex {
            id,
            x: position.x,
            y: position.y,
        };
        Ok(Self { vertices })
    }
}

impl<'a> IntoIterator for &'a VertexSequence {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
