//! Shape generation for 2D primitives
//!
//! Converts arena rectangles (pixels, y down) into triangles in normalized
//! device coordinates (-1..1, y up).

use super::Frame;
use super::vertex::{Vertex, colors};
use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::sim::{Rect, Side, arena, border};

/// Vertices per filled rectangle (two triangles)
pub const QUAD_VERTICES: usize = 6;

/// Map an arena point to normalized device coordinates
pub fn to_ndc(x: i32, y: i32) -> [f32; 2] {
    [
        x as f32 / ARENA_WIDTH as f32 * 2.0 - 1.0,
        1.0 - y as f32 / ARENA_HEIGHT as f32 * 2.0,
    ]
}

/// Generate vertices for a filled rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> [Vertex; QUAD_VERTICES] {
    let [l, t] = to_ndc(r.x(), r.y());
    let [rt, b] = to_ndc(r.right(), r.bottom());

    [
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, t, color),
        Vertex::new(rt, t, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, b, color),
    ]
}

/// Area covered by a ship sprite (rotated a quarter turn, so width and
/// height are swapped relative to the hitbox)
pub fn ship_sprite(hitbox: &Rect) -> Rect {
    Rect::new(hitbox.x(), hitbox.y(), hitbox.height(), hitbox.width())
}

fn side_color(side: Side) -> [f32; 4] {
    match side {
        Side::Yellow => colors::YELLOW,
        Side::Red => colors::RED,
    }
}

/// Generate the full triangle list for a frame, back to front:
/// background, border, bullets, ships
pub fn frame_vertices(frame: &Frame<'_>) -> Vec<Vertex> {
    let bullet_count = frame.yellow_bullets.len() + frame.red_bullets.len();
    let mut vertices = Vec::with_capacity((4 + bullet_count) * QUAD_VERTICES);

    vertices.extend(rect(&arena(), colors::BACKGROUND));
    vertices.extend(rect(&border(), colors::BORDER));

    for side in [Side::Yellow, Side::Red] {
        for bullet in frame.bullets(side) {
            vertices.extend(rect(&bullet.rect, side_color(side)));
        }
    }

    for side in [Side::Yellow, Side::Red] {
        let sprite = ship_sprite(&frame.ship(side).rect);
        vertices.extend(rect(&sprite, side_color(side)));
    }

    vertices
}
