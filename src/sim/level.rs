//! Compiled-in level layouts
//!
//! Each level is a ground strip (one cake slab on the far left plus a row of
//! chocolate tiles) with floating platforms, cherries resting above them, and
//! bees patrolling to the right of their spawn point.

use glam::Vec2;
use serde::Serialize;

use super::rect::Rect;
use crate::consts::*;

/// Platform sprite kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlatformKind {
    Cake,
    Choco,
}

impl PlatformKind {
    pub fn size(self) -> Vec2 {
        let (w, h) = match self {
            PlatformKind::Cake => CAKE_SIZE,
            PlatformKind::Choco => CHOCO_SIZE,
        };
        Vec2::new(w, h)
    }

    pub fn sprite(self) -> &'static str {
        match self {
            PlatformKind::Cake => "platform_cake",
            PlatformKind::Choco => "platform_choco",
        }
    }
}

/// A floating platform placed by its center
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlatformSpawn {
    pub kind: PlatformKind,
    pub center: (f32, f32),
}

/// A bee spawn: patrols from `pos.x` to `pos.x + patrol_dist`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnemySpawn {
    pub pos: (f32, f32),
    pub patrol_dist: f32,
}

/// Immutable template for one level
#[derive(Debug, Serialize)]
pub struct LevelDescriptor {
    /// 1-based level number
    pub index: u32,
    /// Number of chocolate tiles in the ground strip
    pub ground_tiles: u32,
    /// Horizontal step between ground tiles
    pub ground_step: f32,
    pub platforms: &'static [PlatformSpawn],
    pub cherries: &'static [(f32, f32)],
    pub enemies: &'static [EnemySpawn],
    /// Applied once to bee speed at spawn
    pub enemy_speed_mult: f32,
}

const fn cake(x: f32, y: f32) -> PlatformSpawn {
    PlatformSpawn { kind: PlatformKind::Cake, center: (x, y) }
}

const fn choco(x: f32, y: f32) -> PlatformSpawn {
    PlatformSpawn { kind: PlatformKind::Choco, center: (x, y) }
}

const fn bee(x: f32, y: f32, patrol_dist: f32) -> EnemySpawn {
    EnemySpawn { pos: (x, y), patrol_dist }
}

pub static LEVELS: [LevelDescriptor; MAX_LEVEL as usize] = [
    LevelDescriptor {
        index: 1,
        ground_tiles: 15,
        ground_step: 64.0,
        platforms: &[
            cake(400.0, 450.0),
            choco(250.0, 350.0),
            choco(550.0, 300.0),
            cake(350.0, 200.0),
        ],
        cherries: &[(250.0, 310.0), (550.0, 260.0), (350.0, 160.0)],
        enemies: &[bee(550.0, 480.0, 200.0)],
        enemy_speed_mult: 1.0,
    },
    LevelDescriptor {
        index: 2,
        ground_tiles: 16,
        ground_step: 60.0,
        platforms: &[
            cake(400.0, 500.0),
            choco(200.0, 400.0),
            choco(600.0, 350.0),
            cake(300.0, 250.0),
            choco(500.0, 180.0),
        ],
        cherries: &[(200.0, 360.0), (600.0, 310.0), (500.0, 140.0), (300.0, 210.0)],
        enemies: &[bee(550.0, 480.0, 250.0), bee(250.0, 380.0, 120.0)],
        enemy_speed_mult: 1.3,
    },
    LevelDescriptor {
        index: 3,
        ground_tiles: 18,
        ground_step: 50.0,
        platforms: &[
            cake(400.0, 520.0),
            choco(150.0, 430.0),
            choco(650.0, 400.0),
            cake(300.0, 320.0),
            choco(500.0, 270.0),
            cake(200.0, 200.0),
            choco(600.0, 150.0),
        ],
        cherries: &[
            (150.0, 390.0),
            (650.0, 360.0),
            (500.0, 230.0),
            (200.0, 160.0),
            (600.0, 110.0),
        ],
        enemies: &[
            bee(550.0, 500.0, 300.0),
            bee(250.0, 420.0, 180.0),
            bee(500.0, 250.0, 150.0),
        ],
        enemy_speed_mult: 1.7,
    },
];

impl LevelDescriptor {
    /// Look up a level by its 1-based number
    pub fn for_level(index: u32) -> Option<&'static LevelDescriptor> {
        let slot = index.checked_sub(1)? as usize;
        LEVELS.get(slot)
    }

    /// Every platform of the level in draw order: ground first, then floating
    pub fn platform_rects(&self) -> Vec<(PlatformKind, Rect)> {
        let ground_y = HEIGHT - 40.0;
        let mut out = Vec::with_capacity(1 + self.ground_tiles as usize + self.platforms.len());

        let cake = PlatformKind::Cake.size();
        out.push((PlatformKind::Cake, Rect::from_top_left(-100.0, ground_y, cake.x, cake.y)));

        let choco = PlatformKind::Choco.size();
        for i in 0..self.ground_tiles {
            let x = i as f32 * self.ground_step;
            out.push((PlatformKind::Choco, Rect::from_top_left(x, ground_y, choco.x, choco.y)));
        }

        for spawn in self.platforms {
            let center = Vec2::new(spawn.center.0, spawn.center.1);
            out.push((spawn.kind, Rect::from_center(center, spawn.kind.size())));
        }
        out
    }

    /// Bee patrol speed for this level
    pub fn enemy_speed(&self) -> f32 {
        ENEMY_BASE_SPEED * self.enemy_speed_mult
    }
}
