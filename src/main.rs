//! Cherry Escape entry point
//!
//! Headless native runner: loads settings, starts a run and drives it with a
//! scripted input timeline at 60 frames per second until the run ends.
//!
//! Usage: `cherry-escape [settings.json] [--dump]`

use std::path::PathBuf;

use cherry_escape::sim::{GamePhase, TickInput};
use cherry_escape::{Game, LogAudio, Settings};

/// Frame time of the simulated display
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up after this many seconds of play
const MAX_RUN_SECS: f32 = 60.0;

/// Hold right and hop every 0.9 seconds
fn demo_input(t: f32) -> TickInput {
    TickInput {
        left: false,
        right: true,
        jump: (t % 0.9) < FRAME_DT,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Cherry Escape (headless) starting...");

    let mut settings_path = std::env::var_os(Settings::ENV_PATH).map(PathBuf::from);
    let mut dump = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--dump" => dump = true,
            _ => settings_path = Some(PathBuf::from(arg)),
        }
    }

    let settings = Settings::load_or_default(settings_path.as_deref());
    let mut game = Game::new(&settings, LogAudio::from_settings(&settings));
    game.start();

    let mut t = 0.0;
    while game.world.phase() == GamePhase::Playing && t < MAX_RUN_SECS {
        game.input = demo_input(t);
        game.frame(FRAME_DT);
        t += FRAME_DT;
    }

    let (collected, total) = game.world.hud_counter();
    println!(
        "{:?} after {:.1}s ({} ticks): level {}, cherries {} / {}, {} sounds",
        game.world.phase(),
        t,
        game.ticks(),
        game.world.level_index(),
        collected,
        total,
        game.audio.played()
    );

    if dump {
        match serde_json::to_string_pretty(&game.world) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize world: {e}"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is the deliverable on wasm
}
