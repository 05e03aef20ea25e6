//! Per-frame simulation tick
//!
//! Moves the player and the bees, then resolves contacts into phase changes.
//! Only one outcome fires per tick, checked in this order:
//! 1. bee contact (lose)
//! 2. last cherry picked up (next level or win)
//! 3. fell below the screen (lose)

use super::collision::{fell_out, rects_overlap};
use super::state::{GamePhase, World};
use crate::audio::SoundSink;
use crate::consts::HEIGHT;

/// Input intents for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Walk left (wins over right)
    pub left: bool,
    /// Walk right
    pub right: bool,
    /// Jump if standing on a platform
    pub jump: bool,
}

/// Advance the world by `dt` seconds
pub fn tick(world: &mut World, input: &TickInput, dt: f32, audio: &mut dyn SoundSink) {
    // Menu and end screens are frozen
    if world.phase != GamePhase::Playing {
        return;
    }

    world.player.move_step(dt, input, &world.platforms, audio);
    for enemy in &mut world.enemies {
        enemy.move_step(dt);
    }

    check_collisions(world, audio);
}

/// Resolve player contacts after movement
pub fn check_collisions(world: &mut World, audio: &mut dyn SoundSink) {
    let player = world.player.rect();

    if rects_overlap(&player, world.enemies.iter().map(|e| e.rect())) {
        audio.play_defeat();
        world.phase = GamePhase::Lose;
        log::info!("Stung on level {}", world.level);
        return;
    }

    let before = world.collectibles.len();
    world.collectibles.retain(|c| !c.rect().intersects(&player));
    let picked = before - world.collectibles.len();
    if picked > 0 {
        for _ in 0..picked {
            audio.play_collect();
        }
        world.player.cherries_collected += picked as u32;
        log::debug!(
            "Picked {} cherries ({} total, {} left)",
            picked,
            world.player.cherries_collected,
            world.collectibles.len()
        );

        if world.collectibles.is_empty() {
            if world.advance_level() {
                log::info!("Level cleared, advancing to {}", world.level);
            } else {
                world.phase = GamePhase::Win;
                log::info!("Escaped with {} cherries", world.player.cherries_collected);
            }
            return;
        }
    }

    if fell_out(&player, HEIGHT) {
        audio.play_defeat();
        world.phase = GamePhase::Lose;
        log::info!("Fell off level {}", world.level);
    }
}
