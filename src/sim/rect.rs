//! Axis-aligned rectangle geometry for every collidable thing
//!
//! Screen space: x grows right, y grows down. A rectangle is stored as its
//! top-left corner plus its size:
//! - left/right: `min.x` / `min.x + size.x`
//! - top/bottom: `min.y` / `min.y + size.y`

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height (both > 0)
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        debug_assert!(size.x > 0.0 && size.y > 0.0, "degenerate rect {size:?}");
        Self { min, size }
    }

    /// Build from the top-left corner
    pub fn from_top_left(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    /// Build from the center point
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center - size / 2.0, size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Check if a point lies inside (left/top edges inclusive)
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_from_center() {
        let r = Rect::from_center(Vec2::new(400.0, 450.0), Vec2::new(128.0, 40.0));
        assert_eq!(r.left(), 336.0);
        assert_eq!(r.right(), 464.0);
        assert_eq!(r.top(), 430.0);
        assert_eq!(r.bottom(), 470.0);
        assert_eq!(r.center(), Vec2::new(400.0, 450.0));
    }

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::from_top_left(0.0, 0.0, 10.0, 10.0);
        let b = Rect::from_top_left(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::from_top_left(0.0, 0.0, 10.0, 10.0);
        let below = Rect::from_top_left(0.0, 10.0, 10.0, 10.0);
        let beside = Rect::from_top_left(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&beside));
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::from_top_left(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(Vec2::new(0.0, 0.0)));
        assert!(r.contains_point(Vec2::new(9.9, 5.0)));
        assert!(!r.contains_point(Vec2::new(10.0, 5.0)));
    }
}
