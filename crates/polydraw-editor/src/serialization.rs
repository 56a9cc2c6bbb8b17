//! Persistence records and the JSON file store.
//!
//! The record shape is owned by the external persistence layer; this
//! crate consumes it. Field names are camelCase on the wire to stay
//! compatible with existing saved polygons. The editor fills in only
//! `points` and `isClosed`; name, notes, and the geographic fields
//! belong to the surrounding form.

use anyhow::{Context, Result};
use polydraw_core::Vertex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::session::EditorSession;

/// Geographic centroid attached to polygons that represent areas on a
/// map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    pub latitude: f64,
    pub longitude: f64,
}

/// One persisted polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonRecord {
    pub name: String,
    pub points: Vec<Vertex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polygon_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub is_closed: bool,
    pub is_geographical: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centroid: Option<Centroid>,
}

/// List envelope returned by the persistence layer.
///
/// `success: false` means the backend failed; an empty `polygons`
/// list alone does not (there may simply be nothing saved yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonListResponse {
    pub polygons: Vec<PolygonRecord>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Field-level validation problems, surfaced by the form as
/// user-visible messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("polygon has no vertices")]
    NoVertices,
    #[error("polygon name is empty")]
    EmptyName,
    #[error("geographic polygon has no centroid")]
    MissingCentroid,
    #[error("centroid given but polygon is not geographic")]
    UnexpectedCentroid,
}

impl PolygonRecord {
    /// Assembles a record from a finished editing session. The
    /// metadata fields start empty; the form fills them before
    /// saving.
    pub fn from_session(name: impl Into<String>, session: &EditorSession) -> Self {
        Self {
            name: name.into(),
            points: session.vertices().as_slice().to_vec(),
            polygon_id: None,
            notes: None,
            is_closed: session.is_closed(),
            is_geographical: false,
            centroid: None,
        }
    }

    /// Checks the save-time invariants, returning every problem at
    /// once so the form can annotate all offending fields.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if self.name.trim().is_empty() {
            issues.push(ValidationIssue::EmptyName);
        }
        if self.points.is_empty() {
            issues.push(ValidationIssue::NoVertices);
        }
        if self.is_geographical && self.centroid.is_none() {
            issues.push(ValidationIssue::MissingCentroid);
        }
        if !self.is_geographical && self.centroid.is_some() {
            issues.push(ValidationIssue::UnexpectedCentroid);
        }
        issues
    }
}

/// JSON file-backed store of saved polygons.
///
/// Stand-in for the network persistence layer: same record shape,
/// same list envelope, local file instead of a service.
#[derive(Debug, Clone, Default)]
pub struct PolygonStore {
    polygons: Vec<PolygonRecord>,
}

impl PolygonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a store from a JSON file, accepting either a bare record
    /// list or the full response envelope. A missing file is an empty
    /// store.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading polygon store from {}", path.display()))?;
        let polygons = match serde_json::from_str::<PolygonListResponse>(&contents) {
            Ok(response) => response.polygons,
            Err(_) => serde_json::from_str::<Vec<PolygonRecord>>(&contents)
                .with_context(|| format!("parsing polygon store {}", path.display()))?,
        };
        Ok(Self { polygons })
    }

    /// Saves the store as a response envelope.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating store directory {}", parent.display()))?;
        }
        let response = PolygonListResponse {
            polygons: self.polygons.clone(),
            success: true,
            error: None,
        };
        let contents =
            serde_json::to_string_pretty(&response).context("serializing polygon store")?;
        std::fs::write(path, contents)
            .with_context(|| format!("writing polygon store to {}", path.display()))?;
        Ok(())
    }

    pub fn polygons(&self) -> &[PolygonRecord] {
        &self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Inserts or replaces a record. Records with a `polygon_id`
    /// replace the stored record with the same id; records without
    /// one get a fresh id and are appended.
    pub fn upsert(&mut self, mut record: PolygonRecord) -> String {
        match record.polygon_id.clone() {
            Some(id) => {
                match self
                    .polygons
                    .iter_mut()
                    .find(|p| p.polygon_id.as_deref() == Some(id.as_str()))
                {
                    Some(existing) => *existing = record,
                    None => self.polygons.push(record),
                }
                id
            }
            None => {
                let id = uuid_string();
                record.polygon_id = Some(id.clone());
                self.polygons.push(record);
                id
            }
        }
    }

    pub fn get(&self, polygon_id: &str) -> Option<&PolygonRecord> {
        self.polygons
            .iter()
            .find(|p| p.polygon_id.as_deref() == Some(polygon_id))
    }
}

fn uuid_string() -> String {
    // VertexId already wraps a v4 UUID; reuse it rather than pulling
    // uuid into this module's interface.
    polydraw_core::VertexId::new().to_string()
}
