//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - `dt` and input are supplied by the caller each tick
//! - Sound goes out through the `SoundSink` collaborator only
//! - Stable iteration order (platforms, cherries and bees keep authored order)

pub mod animation;
pub mod collision;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use animation::{Action, AnimatedSprite, AnimationSet, Facing};
pub use collision::{fell_out, landing_top, rects_overlap};
pub use level::{EnemySpawn, LevelDescriptor, PlatformKind, PlatformSpawn};
pub use rect::Rect;
pub use state::{Collectible, Enemy, GamePhase, Platform, Player, World};
pub use tick::{TickInput, check_collisions, tick};
