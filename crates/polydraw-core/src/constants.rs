//! Reference-UI constants shared across the workspace.
//!
//! The proximity threshold is a tunable interaction constant, not a
//! value derived from the marker radius; `EditorConfig` in
//! `polydraw-editor` lets callers override it per session.

/// Half-width of the axis-aligned proximity box, in canvas units.
/// Deliberately much larger than the visible marker so the closing
/// click has a forgiving target.
pub const PROXIMITY_THRESHOLD: f64 = 35.0;

/// Render radius of a vertex marker.
pub const MARKER_RADIUS: f64 = 10.0;

/// Stroke width of a vertex marker outline.
pub const MARKER_STROKE_WIDTH: f64 = 2.0;

/// Interactive canvas size.
pub const CANVAS_WIDTH: u32 = 750;
/// Interactive canvas height.
pub const CANVAS_HEIGHT: u32 = 650;

/// Static thumbnail surface size.
pub const THUMBNAIL_WIDTH: u32 = 115;
/// Static thumbnail surface height.
pub const THUMBNAIL_HEIGHT: u32 = 100;
/// Scale applied when projecting canvas coordinates into a thumbnail.
pub const THUMBNAIL_SCALE: f32 = 0.15;

/// Polygon fill color (RGB).
pub const FILL_COLOR: (u8, u8, u8) = (0x00, 0xdd, 0x55);
/// Polygon outline color (RGB).
pub const STROKE_COLOR: (u8, u8, u8) = (0x55, 0x55, 0x55);
/// Polygon outline stroke width.
pub const STROKE_WIDTH: f64 = 5.0;
/// Marker fill for every vertex except the first.
pub const MARKER_COLOR: (u8, u8, u8) = (0x00, 0x00, 0x00);
/// Marker fill for the first vertex, which is the close target and is
/// colored differently so users can find it.
pub const FIRST_MARKER_COLOR: (u8, u8, u8) = (0x03, 0x7f, 0xfc);
