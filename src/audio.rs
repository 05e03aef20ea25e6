//! Sound collaborator interface
//!
//! The simulation never plays audio itself. It fires effects at a `SoundSink`
//! and checks the sink's mute flag first. Actual playback belongs to
//! whatever front end implements the trait.

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player left the ground
    Jump,
    /// Cherry picked up
    Collect,
    /// Stung by a bee or fell off the map
    Defeat,
}

impl SoundEffect {
    /// Asset name of the sample
    pub fn asset(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump",
            SoundEffect::Collect => "collect",
            SoundEffect::Defeat => "defeat",
        }
    }
}

/// Something that can play sound effects and owns the global mute flag
pub trait SoundSink {
    /// Play an effect unconditionally
    fn play(&mut self, effect: SoundEffect);

    fn is_muted(&self) -> bool;

    /// Mute/unmute all audio (music included)
    fn set_muted(&mut self, muted: bool);

    /// Play unless muted
    fn trigger(&mut self, effect: SoundEffect) {
        if !self.is_muted() {
            self.play(effect);
        }
    }

    fn play_jump(&mut self) {
        self.trigger(SoundEffect::Jump);
    }

    fn play_collect(&mut self) {
        self.trigger(SoundEffect::Collect);
    }

    fn play_defeat(&mut self) {
        self.trigger(SoundEffect::Defeat);
    }
}

/// Silent sink for headless runs
#[derive(Debug, Clone, Default)]
pub struct NullAudio {
    pub muted: bool,
}

impl SoundSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}

/// Sink that reports effects through the `log` facade
#[derive(Debug, Clone)]
pub struct LogAudio {
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
    /// Effects played so far (for the end-of-run summary)
    played: usize,
}

impl Default for LogAudio {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl LogAudio {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            music_volume: settings.music_volume.clamp(0.0, 1.0),
            muted: !settings.music_on,
            played: 0,
        }
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn played(&self) -> usize {
        self.played
    }
}

impl SoundSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.played += 1;
        log::debug!("sfx {} at volume {:.2}", effect.asset(), vol);
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if muted {
            log::info!("Music paused");
        } else {
            log::info!("Music resumed at volume {:.2}", self.master_volume * self.music_volume);
        }
    }
}

/// Sink that remembers every effect it was asked to play
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingAudio {
    pub muted: bool,
    pub played: Vec<SoundEffect>,
}

#[cfg(test)]
impl SoundSink for RecordingAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.played.push(effect);
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}
