//! Frame-timer sprite animation shared by the player and the bees
//!
//! An `AnimatedSprite` is embedded by value in each entity. Frames are looked
//! up by (action, facing) in a static `AnimationSet`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::ANIMATION_RATE;

/// Horizontal facing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Direction of travel for a horizontal velocity (zero counts as right)
    pub fn of_velocity(vx: f32) -> Self {
        if vx < 0.0 { Facing::Left } else { Facing::Right }
    }
}

/// What the entity is doing, selects the frame sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Idle,
    Walk,
}

/// Static table of frame sequences keyed by (action, facing)
#[derive(Debug)]
pub struct AnimationSet {
    entries: &'static [(Action, Facing, &'static [&'static str])],
}

impl AnimationSet {
    pub const fn new(entries: &'static [(Action, Facing, &'static [&'static str])]) -> Self {
        Self { entries }
    }

    /// Frames registered for a key. Empty sequences count as unregistered.
    pub fn frames(&self, action: Action, facing: Facing) -> Option<&'static [&'static str]> {
        self.entries
            .iter()
            .find(|(a, f, _)| *a == action && *f == facing)
            .map(|&(_, _, frames)| frames)
            .filter(|frames| !frames.is_empty())
    }
}

/// A positioned sprite with an (action, facing) animation state machine
#[derive(Debug, Clone, Serialize)]
pub struct AnimatedSprite {
    /// Sprite center
    pub pos: Vec2,
    /// Collision box size, centered on `pos`
    pub size: Vec2,
    facing: Facing,
    action: Action,
    frame_index: usize,
    frame_timer: f32,
    #[serde(skip)]
    animations: &'static AnimationSet,
    /// Sprite id the renderer should draw
    image: Option<&'static str>,
}

impl AnimatedSprite {
    pub fn new(
        animations: &'static AnimationSet,
        pos: Vec2,
        size: Vec2,
        action: Action,
        facing: Facing,
    ) -> Self {
        let image = animations.frames(action, facing).map(|frames| frames[0]);
        Self {
            pos,
            size,
            facing,
            action,
            frame_index: 0,
            frame_timer: 0.0,
            animations,
            image,
        }
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn image(&self) -> Option<&'static str> {
        self.image
    }

    /// Collision rectangle centered on the sprite position
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    /// Move so the bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y / 2.0;
    }

    /// Switch action, restarting on the first frame of the new sequence
    pub fn set_action(&mut self, action: Action) {
        if self.action == action {
            return;
        }
        self.action = action;
        self.frame_index = 0;
        self.frame_timer = 0.0;
        if let Some(frames) = self.animations.frames(self.action, self.facing) {
            self.image = Some(frames[0]);
        }
    }

    /// Turn without restarting the animation
    pub fn set_facing(&mut self, facing: Facing) {
        if self.facing == facing {
            return;
        }
        self.facing = facing;
        if let Some(frames) = self.animations.frames(self.action, self.facing) {
            self.frame_index %= frames.len();
        }
    }

    /// Accumulate time and step to the next frame every `ANIMATION_RATE` seconds
    pub fn update_animation(&mut self, dt: f32) {
        self.frame_timer += dt;
        if self.frame_timer < ANIMATION_RATE {
            return;
        }
        self.frame_timer = 0.0;

        match self.animations.frames(self.action, self.facing) {
            Some(frames) => {
                self.frame_index = (self.frame_index + 1) % frames.len();
                self.image = Some(frames[self.frame_index]);
            }
            None => {
                log::trace!(
                    "no frames for {:?}/{:?}, keeping {:?}",
                    self.action,
                    self.facing,
                    self.image
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    static WALKER: AnimationSet = AnimationSet::new(&[
        (Action::Idle, Facing::Right, &["stand"]),
        (Action::Idle, Facing::Left, &["stand_left"]),
        (Action::Walk, Facing::Right, &["walk1", "walk2", "walk3"]),
        (Action::Walk, Facing::Left, &["walk1_left", "walk2_left"]),
    ]);

    static PARTIAL: AnimationSet = AnimationSet::new(&[
        (Action::Idle, Facing::Right, &["only"]),
        (Action::Walk, Facing::Right, &[]),
    ]);

    fn walker() -> AnimatedSprite {
        AnimatedSprite::new(
            &WALKER,
            Vec2::new(50.0, 50.0),
            Vec2::new(10.0, 20.0),
            Action::Idle,
            Facing::Right,
        )
    }

    #[test]
    fn test_initial_image_is_first_frame() {
        let sprite = walker();
        assert_eq!(sprite.image(), Some("stand"));
        assert_eq!(sprite.frame_index(), 0);
    }

    #[test]
    fn test_frame_advances_only_after_rate() {
        let mut sprite = walker();
        sprite.set_action(Action::Walk);

        sprite.update_animation(0.05);
        assert_eq!(sprite.frame_index(), 0);
        assert_eq!(sprite.image(), Some("walk1"));

        sprite.update_animation(0.05);
        assert_eq!(sprite.frame_index(), 1);
        assert_eq!(sprite.image(), Some("walk2"));
    }

    #[test]
    fn test_frame_wraps() {
        let mut sprite = walker();
        sprite.set_action(Action::Walk);
        for _ in 0..3 {
            sprite.update_animation(ANIMATION_RATE);
        }
        assert_eq!(sprite.frame_index(), 0);
        assert_eq!(sprite.image(), Some("walk1"));
    }

    #[test]
    fn test_set_action_resets_frame_and_timer() {
        let mut sprite = walker();
        sprite.set_action(Action::Walk);
        sprite.update_animation(ANIMATION_RATE);
        sprite.update_animation(0.07);
        assert_eq!(sprite.frame_index(), 1);

        sprite.set_action(Action::Idle);
        assert_eq!(sprite.frame_index(), 0);
        assert_eq!(sprite.image(), Some("stand"));

        // Timer restarted: 0.07 more is not enough for another frame
        sprite.update_animation(0.07);
        assert_eq!(sprite.frame_index(), 0);
    }

    #[test]
    fn test_set_same_action_is_noop() {
        let mut sprite = walker();
        sprite.set_action(Action::Walk);
        sprite.update_animation(ANIMATION_RATE);
        sprite.set_action(Action::Walk);
        assert_eq!(sprite.frame_index(), 1);
    }

    #[test]
    fn test_facing_change_keeps_index_in_range() {
        let mut sprite = walker();
        sprite.set_action(Action::Walk);
        sprite.update_animation(ANIMATION_RATE);
        sprite.update_animation(ANIMATION_RATE);
        assert_eq!(sprite.frame_index(), 2);

        // Left walk has two frames
        sprite.set_facing(Facing::Left);
        assert_eq!(sprite.frame_index(), 0);
    }

    #[test]
    fn test_missing_key_leaves_image_unchanged() {
        let mut sprite = AnimatedSprite::new(
            &PARTIAL,
            Vec2::ZERO,
            Vec2::ONE,
            Action::Idle,
            Facing::Right,
        );
        assert_eq!(sprite.image(), Some("only"));

        // Walk/Right is registered empty, Idle/Left not at all
        sprite.set_action(Action::Walk);
        sprite.update_animation(ANIMATION_RATE);
        assert_eq!(sprite.image(), Some("only"));

        sprite.set_facing(Facing::Left);
        sprite.update_animation(ANIMATION_RATE);
        assert_eq!(sprite.image(), Some("only"));
        assert_eq!(sprite.frame_index(), 0);
    }

    #[test]
    fn test_set_bottom() {
        let mut sprite = walker();
        sprite.set_bottom(100.0);
        assert_eq!(sprite.rect().bottom(), 100.0);
        assert_eq!(sprite.pos.y, 90.0);
    }

    #[test]
    fn test_facing_of_velocity() {
        assert_eq!(Facing::of_velocity(-1.0), Facing::Left);
        assert_eq!(Facing::of_velocity(1.0), Facing::Right);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Tick(f32),
        Act(bool),
        Face(bool),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0.0f32..0.25).prop_map(Op::Tick),
            any::<bool>().prop_map(Op::Act),
            any::<bool>().prop_map(Op::Face),
        ]
    }

    proptest! {
        #[test]
        fn frame_index_stays_in_active_sequence(ops in prop::collection::vec(op(), 0..64)) {
            let mut sprite = walker();
            for op in ops {
                match op {
                    Op::Tick(dt) => sprite.update_animation(dt),
                    Op::Act(walk) => sprite.set_action(if walk { Action::Walk } else { Action::Idle }),
                    Op::Face(left) => sprite.set_facing(if left { Facing::Left } else { Facing::Right }),
                }
                let len = WALKER.frames(sprite.action(), sprite.facing()).map_or(1, |f| f.len());
                prop_assert!(sprite.frame_index() < len);
            }
        }
    }
}
