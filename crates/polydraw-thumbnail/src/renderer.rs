//! Thumbnail renderer for finalized polygons.
//!
//! Draws the polygon path from the same flat line buffer the
//! interactive canvas uses, then the vertex markers on top, scaled
//! down into a small surface. The first vertex keeps its distinct
//! color so thumbnails read the same way the editor does.

use image::RgbaImage;
use polydraw_core::{constants, flat_line_buffer, VertexSequence};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

fn fill_color() -> Color {
    let (r, g, b) = constants::FILL_COLOR;
    Color::from_rgba8(r, g, b, 255)
}
fn stroke_color() -> Color {
    let (r, g, b) = constants::STROKE_COLOR;
    Color::from_rgba8(r, g, b, 255)
}
fn marker_color() -> Color {
    let (r, g, b) = constants::MARKER_COLOR;
    Color::from_rgba8(r, g, b, 255)
}
fn first_marker_color() -> Color {
    let (r, g, b) = constants::FIRST_MARKER_COLOR;
    Color::from_rgba8(r, g, b, 255)
}

/// Size and scale of the rendered thumbnail. Defaults match the
/// reference list view: a 115x100 surface at 0.15 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailOptions {
    pub width: u32,
    pub height: u32,
    /// Uniform scale from canvas coordinates to thumbnail pixels.
    /// Applies to marker radii and stroke widths too, matching a
    /// scaled-down render of the full canvas.
    pub scale: f32,
}

impl Default for ThumbnailOptions {
    fn default() -> Self {
        Self {
            width: constants::THUMBNAIL_WIDTH,
            height: constants::THUMBNAIL_HEIGHT,
            scale: constants::THUMBNAIL_SCALE,
        }
    }
}

/// Renders a finalized polygon into an RGBA image with a transparent
/// background.
///
/// `closed` controls whether the path is filled and its last segment
/// drawn back to the first vertex; the vertex list itself never
/// duplicates the first vertex. An empty sequence yields a blank
/// image.
pub fn render_thumbnail(
    vertices: &VertexSequence,
    closed: bool,
    options: &ThumbnailOptions,
) -> RgbaImage {
    let blank = || RgbaImage::new(options.width, options.height);
    let Some(mut pixmap) = Pixmap::new(options.width, options.height) else {
        return blank();
    };

    // Paths are built in canvas coordinates; the scale happens at
    // draw time, as the interactive canvas does for zoom.
    let transform = Transform::from_scale(options.scale, options.scale);

    let buffer = flat_line_buffer(vertices);
    if let Some(path) = line_path(&buffer, closed) {
        let mut paint = Paint::default();
        paint.anti_alias = true;

        if closed {
            paint.set_color(fill_color());
            pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
        }

        paint.set_color(stroke_color());
        let stroke = Stroke {
            width: constants::STROKE_WIDTH as f32,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, transform, None);
    }

    // Markers on top of the path, first vertex color-distinguished
    let first_id = vertices.first().map(|v| v.id);
    for vertex in vertices {
        let Some(circle) = PathBuilder::from_circle(
            vertex.x as f32,
            vertex.y as f32,
            constants::MARKER_RADIUS as f32,
        ) else {
            continue;
        };

        let mut paint = Paint::default();
        paint.anti_alias = true;
        paint.set_color(if Some(vertex.id) == first_id {
            first_marker_color()
        } else {
            marker_color()
        });
        pixmap.fill_path(&circle, &paint, FillRule::Winding, transform, None);

        paint.set_color(marker_color());
        let stroke = Stroke {
            width: constants::MARKER_STROKE_WIDTH as f32,
            ..Default::default()
        };
        pixmap.stroke_path(&circle, &paint, &stroke, transform, None);
    }

    RgbaImage::from_raw(options.width, options.height, pixmap.take()).unwrap_or_else(blank)
}

fn line_path(buffer: &[f64], closed: bool) -> Option<tiny_skia::Path> {
    let mut coords = buffer.chunks_exact(2);
    let start = coords.next()?;

    let mut pb = PathBuilder::new();
    pb.move_to(start[0] as f32, start[1] as f32);
    for pair in coords {
        pb.line_to(pair[0] as f32, pair[1] as f32);
    }
    if closed {
        pb.close();
    }
    pb.finish()
}
