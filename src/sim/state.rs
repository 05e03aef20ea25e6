//! Game state and core simulation types
//!
//! `World` owns everything the renderer draws and everything a tick mutates.

use glam::Vec2;
use serde::Serialize;

use super::animation::{Action, AnimatedSprite, AnimationSet, Facing};
use super::collision::landing_top;
use super::level::{EnemySpawn, LevelDescriptor, PlatformKind};
use super::rect::Rect;
use super::tick::{TickInput, tick};
use crate::audio::SoundSink;
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Title screen, waiting for start
    Menu,
    /// Active gameplay
    Playing,
    /// Final cherry of the final level collected
    Win,
    /// Stung by a bee or fell off the map
    Lose,
}

pub static PLAYER_ANIMATIONS: AnimationSet = AnimationSet::new(&[
    (Action::Idle, Facing::Right, &["alien_pink_stand"]),
    (Action::Idle, Facing::Left, &["alien_pink_stand_left"]),
    (Action::Walk, Facing::Right, &["alien_pink_walk1", "alien_pink_walk2"]),
    (Action::Walk, Facing::Left, &["alien_pink_walk1_left", "alien_pink_walk2_left"]),
]);

// Bee art is drawn facing the other way, hence the swapped names
pub static BEE_ANIMATIONS: AnimationSet = AnimationSet::new(&[
    (Action::Walk, Facing::Left, &["bee_fly"]),
    (Action::Walk, Facing::Right, &["bee_fly_left"]),
    (Action::Idle, Facing::Left, &["bee"]),
    (Action::Idle, Facing::Right, &["bee_left"]),
]);

/// The controllable alien
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub sprite: AnimatedSprite,
    /// Horizontal velocity chosen on the last tick
    pub vx: f32,
    /// Vertical velocity (positive = falling)
    pub vy: f32,
    /// Resting on a platform top
    pub on_ground: bool,
    /// Cherries picked up during this run
    pub cherries_collected: u32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            sprite: AnimatedSprite::new(
                &PLAYER_ANIMATIONS,
                pos,
                Vec2::new(PLAYER_SIZE.0, PLAYER_SIZE.1),
                Action::Idle,
                Facing::Right,
            ),
            vx: 0.0,
            vy: 0.0,
            on_ground: false,
            cherries_collected: 0,
        }
    }

    /// Fresh player at the level spawn point
    pub fn spawn() -> Self {
        Self::new(Vec2::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1))
    }

    pub fn pos(&self) -> Vec2 {
        self.sprite.pos
    }

    pub fn rect(&self) -> Rect {
        self.sprite.rect()
    }

    /// Apply input, gravity and platform landing for one tick
    pub fn move_step(
        &mut self,
        dt: f32,
        input: &TickInput,
        platforms: &[Platform],
        audio: &mut dyn SoundSink,
    ) {
        self.vx = if input.left {
            self.sprite.set_facing(Facing::Left);
            -PLAYER_SPEED
        } else if input.right {
            self.sprite.set_facing(Facing::Right);
            PLAYER_SPEED
        } else {
            0.0
        };

        if self.on_ground && input.jump {
            self.vy = JUMP_STRENGTH;
            audio.play_jump();
        }

        self.vy += GRAVITY * dt;
        self.sprite.pos.x += self.vx * dt;
        self.sprite.pos.y += self.vy * dt;

        // Later platforms win if several qualify
        self.on_ground = false;
        for platform in platforms {
            if let Some(top) = landing_top(&self.rect(), self.vy, &platform.rect) {
                self.sprite.set_bottom(top);
                self.vy = 0.0;
                self.on_ground = true;
            }
        }

        // Airborne frames keep the last grounded action
        if self.on_ground {
            let action = if self.vx == 0.0 {
                Action::Idle
            } else {
                Action::Walk
            };
            self.sprite.set_action(action);
        }

        self.sprite.update_animation(dt);
    }
}

/// A bee patrolling back and forth
#[derive(Debug, Clone, Serialize)]
pub struct Enemy {
    pub sprite: AnimatedSprite,
    /// Left patrol bound
    pub start_x: f32,
    /// Right patrol bound (>= start_x)
    pub end_x: f32,
    /// Horizontal velocity (sign = direction)
    pub vx: f32,
}

impl Enemy {
    /// Spawn heading left at `speed`, patrolling right of the spawn point
    pub fn new(spawn: &EnemySpawn, speed: f32) -> Self {
        let pos = Vec2::new(spawn.pos.0, spawn.pos.1);
        Self {
            sprite: AnimatedSprite::new(
                &BEE_ANIMATIONS,
                pos,
                Vec2::new(ENEMY_SIZE.0, ENEMY_SIZE.1),
                Action::Walk,
                Facing::Left,
            ),
            start_x: pos.x,
            end_x: pos.x + spawn.patrol_dist.max(0.0),
            vx: -speed.abs(),
        }
    }

    pub fn rect(&self) -> Rect {
        self.sprite.rect()
    }

    /// Advance along the patrol, turning around at either bound
    pub fn move_step(&mut self, dt: f32) {
        let x = self.sprite.pos.x + self.vx * dt;
        if self.vx < 0.0 && x < self.start_x {
            self.sprite.pos.x = self.start_x;
            self.turn_around();
        } else if self.vx > 0.0 && x > self.end_x {
            self.sprite.pos.x = self.end_x;
            self.turn_around();
        } else {
            self.sprite.pos.x = x;
        }
        self.sprite.update_animation(dt);
    }

    fn turn_around(&mut self) {
        self.vx = -self.vx;
        self.sprite.set_facing(Facing::of_velocity(self.vx));
    }
}

/// A cherry waiting to be picked up
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Collectible {
    /// Sprite center
    pub pos: Vec2,
}

impl Collectible {
    pub const SPRITE: &'static str = "cherry";

    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::new(CHERRY_SIZE.0, CHERRY_SIZE.1))
    }
}

/// A static platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Platform {
    pub kind: PlatformKind,
    pub rect: Rect,
}

impl Platform {
    pub fn sprite(&self) -> &'static str {
        self.kind.sprite()
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize)]
pub struct World {
    /// Current phase
    pub phase: GamePhase,
    /// Current level (1-based, <= MAX_LEVEL)
    pub level: u32,
    pub player: Player,
    /// Live platforms (authored order)
    pub platforms: Vec<Platform>,
    /// Cherries not yet collected
    pub collectibles: Vec<Collectible>,
    /// Live bees
    pub enemies: Vec<Enemy>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Create a world on the menu screen with level 1 laid out
    pub fn new() -> Self {
        let mut world = Self {
            phase: GamePhase::Menu,
            level: 1,
            player: Player::spawn(),
            platforms: Vec::new(),
            collectibles: Vec::new(),
            enemies: Vec::new(),
        };
        world.setup_level(true);
        world
    }

    /// Rebuild platforms, cherries and bees for the current level
    ///
    /// The player is replaced only when `respawn_player` is set, so a level
    /// advance keeps position, velocity and cherry count.
    pub fn setup_level(&mut self, respawn_player: bool) {
        let Some(layout) = LevelDescriptor::for_level(self.level) else {
            log::error!("No layout for level {}", self.level);
            return;
        };

        self.platforms = layout
            .platform_rects()
            .into_iter()
            .map(|(kind, rect)| Platform { kind, rect })
            .collect();
        self.collectibles = layout
            .cherries
            .iter()
            .map(|&(x, y)| Collectible::new(Vec2::new(x, y)))
            .collect();
        let speed = layout.enemy_speed();
        self.enemies = layout.enemies.iter().map(|spawn| Enemy::new(spawn, speed)).collect();

        if respawn_player {
            self.player = Player::spawn();
        }

        log::info!(
            "Level {}: {} platforms, {} cherries, {} bees at speed {}",
            self.level,
            self.platforms.len(),
            self.collectibles.len(),
            self.enemies.len(),
            speed
        );
    }

    /// Move on to the next level; false if this was the last one
    pub fn advance_level(&mut self) -> bool {
        if self.level >= MAX_LEVEL {
            return false;
        }
        self.level += 1;
        self.setup_level(false);
        true
    }

    /// Reset to level 1 with a fresh player and start playing
    fn begin_run(&mut self) {
        self.level = 1;
        self.setup_level(true);
        self.phase = GamePhase::Playing;
        log::info!("Run started");
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn level_index(&self) -> u32 {
        self.level
    }

    pub fn collected_count(&self) -> u32 {
        self.player.cherries_collected
    }

    /// Cherries the current level's layout places
    pub fn total_collectibles_in_level(&self) -> usize {
        LevelDescriptor::for_level(self.level).map_or(0, |layout| layout.cherries.len())
    }

    /// HUD counter: (collected, collected + still on the map)
    pub fn hud_counter(&self) -> (u32, u32) {
        let collected = self.collected_count();
        (collected, collected + self.collectibles.len() as u32)
    }

    /// Advance the simulation one tick (no-op outside Playing)
    pub fn update(&mut self, dt: f32, input: &TickInput, audio: &mut dyn SoundSink) {
        tick(self, input, dt, audio);
    }

    /// Start button: accepted on every screen except during play
    pub fn on_start_requested(&mut self) -> bool {
        if self.phase == GamePhase::Playing {
            return false;
        }
        self.begin_run();
        true
    }

    /// Restart button: only shown on the win and lose screens
    pub fn on_restart_requested(&mut self) -> bool {
        if !matches!(self.phase, GamePhase::Win | GamePhase::Lose) {
            return false;
        }
        self.begin_run();
        true
    }

    /// Music button: flips the sink's mute flag outside of play
    pub fn on_music_toggle_requested(&mut self, audio: &mut dyn SoundSink) -> bool {
        if self.phase == GamePhase::Playing {
            return false;
        }
        let muted = !audio.is_muted();
        audio.set_muted(muted);
        true
    }
}
