//! Shape generation for 2D primitives

use glam::Vec2;

use super::font::{self, GLYPH_HEIGHT, GLYPH_WIDTH};
use super::vertex::Vertex;

/// Logical pixels per font cell
pub const TEXT_SCALE: f32 = 2.0;
pub const GLYPH_ADVANCE: f32 = (GLYPH_WIDTH + 1) as f32 * TEXT_SCALE;
pub const LINE_ADVANCE: f32 = (GLYPH_HEIGHT + 2) as f32 * TEXT_SCALE;

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(top_left: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0) = (top_left.x, top_left.y);
    let (x1, y1) = (top_left.x + size.x, top_left.y + size.y);

    // Two triangles
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled square
pub fn square(top_left: Vec2, size: f32, color: [f32; 4]) -> [Vertex; 6] {
    rect(top_left, Vec2::splat(size), color)
}

/// Generate vertices for a line of text; one small square per lit font cell.
/// Newlines start a new line. Characters without a glyph draw as '?'.
pub fn text(origin: Vec2, text: &str, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let mut cursor = origin;

    for ch in text.chars() {
        if ch == '\n' {
            cursor = Vec2::new(origin.x, cursor.y + LINE_ADVANCE);
            continue;
        }
        let glyph = font::glyph_for(ch).unwrap_or(font::FALLBACK);
        for (col, row) in glyph.cells() {
            let cell = cursor + Vec2::new(col as f32, row as f32) * TEXT_SCALE;
            vertices.extend_from_slice(&square(cell, TEXT_SCALE, color));
        }
        cursor.x += GLYPH_ADVANCE;
    }

    vertices
}
