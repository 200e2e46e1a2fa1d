//! Audio contracts
//!
//! Sound playback itself belongs to the host; this module decides when the
//! music restarts, when the engine hums and how loud, and which simulation
//! events make a bang.

use crate::settings::Settings;
use crate::sim::{GameEvent, GameMode, GameState};

/// Loaded sound handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    /// Background track, restarted whenever it finishes
    Music,
    /// One-shot blast for every explosion
    Explosion,
    /// Engine hum while the ship is thrusting
    Engine,
}

/// Playback controls the host audio device provides
pub trait AudioDevice {
    fn play(&mut self, sound: Sound);
    fn stop(&mut self, sound: Sound);
    fn is_playing(&self, sound: Sound) -> bool;
    /// Volume in 0.0 - 1.0
    fn set_volume(&mut self, sound: Sound, volume: f32);
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    music_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            music_volume: 0.7,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut audio = Self::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_music_volume(settings.music_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective(&self, channel: f32) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * channel
        }
    }

    /// Restart the background track if it has finished
    pub fn keep_music_alive(&self, device: &mut impl AudioDevice) {
        if !device.is_playing(Sound::Music) {
            device.set_volume(Sound::Music, self.effective(self.music_volume));
            device.play(Sound::Music);
        }
    }

    /// Start, stop and scale the engine hum to match the ship's throttle
    ///
    /// The engine is silent unless a live ship is flying in `Play`.
    pub fn sync_engine(&self, device: &mut impl AudioDevice, state: &GameState) {
        let ship = &state.ship;
        let speed = if state.mode == GameMode::Play && !ship.dead {
            ship.engine_speed
        } else {
            0.0
        };

        let playing = device.is_playing(Sound::Engine);
        if speed > 0.0 && !playing {
            device.play(Sound::Engine);
        } else if speed <= 0.0 && playing {
            device.stop(Sound::Engine);
        }

        if device.is_playing(Sound::Engine) {
            let throttle = (speed / state.tuning.max_engine_speed).clamp(0.0, 1.0);
            device.set_volume(Sound::Engine, self.effective(self.sfx_volume) * throttle);
        }
    }

    /// Fire one-shot effects for the events of the last tick
    pub fn handle_events(&self, device: &mut impl AudioDevice, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::ExplosionSpawned { .. } = event {
                device.set_volume(Sound::Explosion, self.effective(self.sfx_volume));
                device.play(Sound::Explosion);
            }
        }
    }
}
