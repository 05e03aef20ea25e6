//! Frame driver
//!
//! Sits between a front end's frame callback and the simulation: turns
//! variable frame times into world ticks and forwards button presses.

use crate::audio::SoundSink;
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GamePhase, TickInput, World};

/// Game instance holding the world and its collaborators
pub struct Game<A: SoundSink> {
    pub world: World,
    pub audio: A,
    /// Held input, sampled by the front end before each frame
    pub input: TickInput,
    fixed_timestep: bool,
    accumulator: f32,
    ticks: u64,
    last_phase: GamePhase,
}

impl<A: SoundSink> Game<A> {
    pub fn new(settings: &Settings, audio: A) -> Self {
        let world = World::new();
        let last_phase = world.phase();
        Self {
            world,
            audio,
            input: TickInput::default(),
            fixed_timestep: settings.fixed_timestep,
            accumulator: 0.0,
            ticks: 0,
            last_phase,
        }
    }

    /// Run simulation ticks for a frame of `dt` seconds; returns ticks run
    pub fn frame(&mut self, dt: f32) -> u32 {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);

        let steps = if self.fixed_timestep {
            self.accumulator += dt;
            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                self.world.update(SIM_DT, &self.input, &mut self.audio);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
            // Behind by more than a step: drop the backlog
            if substeps == MAX_SUBSTEPS {
                self.accumulator = self.accumulator.min(SIM_DT);
            }
            substeps
        } else {
            self.world.update(dt, &self.input, &mut self.audio);
            1
        };

        self.ticks += u64::from(steps);
        self.note_phase_change();
        steps
    }

    pub fn start(&mut self) -> bool {
        let started = self.world.on_start_requested();
        self.after_button();
        started
    }

    pub fn restart(&mut self) -> bool {
        let restarted = self.world.on_restart_requested();
        self.after_button();
        restarted
    }

    pub fn toggle_music(&mut self) -> bool {
        self.world.on_music_toggle_requested(&mut self.audio)
    }

    /// Ticks run since the game was created
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Unconsumed frame time (seconds)
    pub fn pending_time(&self) -> f32 {
        self.accumulator
    }

    fn after_button(&mut self) {
        self.accumulator = 0.0;
        self.note_phase_change();
    }

    fn note_phase_change(&mut self) {
        let phase = self.world.phase();
        if phase != self.last_phase {
            log::info!(
                "Phase {:?} -> {:?} (level {}, cherries {}/{})",
                self.last_phase,
                phase,
                self.world.level_index(),
                self.world.hud_counter().0,
                self.world.hud_counter().1
            );
            self.last_phase = phase;
        }
    }
}
