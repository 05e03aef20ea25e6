//! Collision tests for the platformer
//!
//! Everything is axis-aligned boxes. Platforms are one-way: a body only lands
//! when it is falling and its feet are still above the platform's midline, so
//! jumping up through a platform or walking into its side passes through.

use super::rect::Rect;

/// True if `body` overlaps any of `others`
pub fn rects_overlap<I>(body: &Rect, others: I) -> bool
where
    I: IntoIterator<Item = Rect>,
{
    others.into_iter().any(|other| body.intersects(&other))
}

/// Y the body's bottom should snap to if it lands on `platform` this tick
///
/// Landing needs all three: overlap, falling or resting (`vy >= 0`), and the
/// body's bottom above the platform's vertical center.
pub fn landing_top(body: &Rect, vy: f32, platform: &Rect) -> Option<f32> {
    let landing =
        body.intersects(platform) && vy >= 0.0 && body.bottom() < platform.center().y;
    landing.then_some(platform.top())
}

/// Check if the body dropped completely below the visible area
#[inline]
pub fn fell_out(body: &Rect, floor_y: f32) -> bool {
    body.top() > floor_y
}
