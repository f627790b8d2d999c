//! Rectangle geometry and overlap tests
//!
//! Everything in the arena is an axis-aligned rectangle in integer pixel
//! space, origin top-left, y growing downward.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// One past the rightmost column
    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    /// One past the bottom row
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Check overlap with another rectangle
    pub fn intersects(&self, other: &Rect) -> bool {
        intersects(self, other)
    }
}

/// Axis-aligned overlap test.
///
/// Ranges are half-open, so rectangles that merely share an edge do not
/// overlap, and a zero-sized rectangle never overlaps anything.
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.x() < b.right() && b.x() < a.right() && a.y() < b.bottom() && b.y() < a.bottom()
}

/// The vertical bar splitting the arena
pub const fn border() -> Rect {
    Rect::new(BORDER_X, 0, BORDER_WIDTH, ARENA_HEIGHT)
}

/// The whole play area
pub const fn arena() -> Rect {
    Rect::new(0, 0, ARENA_WIDTH, ARENA_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(intersects(&a, &b));
        assert!(intersects(&b, &a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        // Shares the x = 10 edge
        assert!(!intersects(&a, &Rect::new(10, 0, 10, 10)));
        // Shares the y = 10 edge
        assert!(!intersects(&a, &Rect::new(0, 10, 10, 10)));
        // One column of overlap is enough
        assert!(intersects(&a, &Rect::new(9, 9, 10, 10)));
    }

    #[test]
    fn test_contained_rect_intersects() {
        let outer = Rect::new(100, 300, SHIP_WIDTH, SHIP_HEIGHT);
        let inner = Rect::new(120, 310, BULLET_WIDTH, BULLET_HEIGHT);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_zero_sized_rect_never_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!intersects(&a, &Rect::new(5, 5, 0, 0)));
    }

    #[test]
    fn test_border_layout() {
        let border = border();
        assert_eq!(border.x(), 445);
        assert_eq!(border.right(), 455);
        assert_eq!(border.height(), ARENA_HEIGHT);
        // Border sits in the middle of the arena
        assert_eq!(border.x() + border.width() / 2, arena().width() / 2);
    }
}
