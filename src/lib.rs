//! Cherry Escape - A candy-land platformer
//!
//! Core modules:
//! - `sim`: Simulation (physics, collisions, animation, game phases)
//! - `audio`: Sound collaborator interface and mute gating
//! - `settings`: Runtime preferences loaded from JSON
//! - `game`: Frame driver feeding the simulation fixed timesteps

pub mod audio;
pub mod game;
pub mod settings;
pub mod sim;

pub use audio::{LogAudio, NullAudio, SoundEffect, SoundSink};
pub use game::Game;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Screen dimensions (pixels, y grows downward)
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 800.0;
    /// Horizontal walk speed (pixels/s)
    pub const PLAYER_SPEED: f32 = 200.0;
    /// Initial vertical velocity of a jump (negative = up)
    pub const JUMP_STRENGTH: f32 = -500.0;
    /// Seconds each animation frame stays on screen
    pub const ANIMATION_RATE: f32 = 0.1;

    /// Bee patrol speed before the per-level multiplier
    pub const ENEMY_BASE_SPEED: f32 = 60.0;

    /// Number of authored levels
    pub const MAX_LEVEL: u32 = 3;

    /// Where a fresh player appears (sprite center)
    pub const PLAYER_SPAWN: (f32, f32) = (100.0, 400.0);

    /// Sprite sizes (width, height)
    pub const PLAYER_SIZE: (f32, f32) = (48.0, 64.0);
    pub const ENEMY_SIZE: (f32, f32) = (48.0, 40.0);
    pub const CHERRY_SIZE: (f32, f32) = (32.0, 32.0);
    pub const CHOCO_SIZE: (f32, f32) = (64.0, 40.0);
    pub const CAKE_SIZE: (f32, f32) = (128.0, 40.0);

    /// Fixed simulation timestep used by the frame driver (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the driver will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
