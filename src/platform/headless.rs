//! Headless platform pieces for tests and the native demo
//!
//! Scripted keyboard input, an audio device that only records what it was
//! asked to do, and a window that closes after a fixed number of frames.
//! `HeadlessPlatform` bundles the input script and the window.

use std::collections::{HashMap, HashSet};

use super::{Input, Key, Window};
use crate::audio::{AudioDevice, Sound};

/// A key held over the frame range `[from, to)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cue {
    pub key: Key,
    pub from: u64,
    pub to: u64,
}

/// Keyboard that replays a fixed script of cues
///
/// A cue reports its key as pressed on its first frame and held on
/// every frame of its range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    cues: Vec<Cue>,
    frame: u64,
}

impl ScriptedInput {
    pub fn new(cues: Vec<Cue>) -> Self {
        Self { cues, frame: 0 }
    }

    /// Hold `key` for `len` frames starting at `from`
    pub fn hold(mut self, key: Key, from: u64, len: u64) -> Self {
        self.cues.push(Cue {
            key,
            from,
            to: from + len,
        });
        self
    }

    /// Tap `key` on frame `at`
    pub fn tap(self, key: Key, at: u64) -> Self {
        self.hold(key, at, 1)
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Move to the next frame
    pub fn next_frame(&mut self) {
        self.frame += 1;
    }
}

impl Input for ScriptedInput {
    fn is_key_down(&self, key: Key) -> bool {
        self.cues
            .iter()
            .any(|c| c.key == key && (c.from..c.to).contains(&self.frame))
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.cues
            .iter()
            .any(|c| c.key == key && c.from == self.frame && c.to > c.from)
    }
}

/// Audio device that tracks playback state instead of making noise
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    playing: HashSet<Sound>,
    plays: HashMap<Sound, u32>,
    volumes: HashMap<Sound, f32>,
}

impl RecordingAudio {
    /// Number of times `sound` was started
    pub fn play_count(&self, sound: Sound) -> u32 {
        self.plays.get(&sound).copied().unwrap_or(0)
    }

    pub fn volume(&self, sound: Sound) -> f32 {
        self.volumes.get(&sound).copied().unwrap_or(1.0)
    }

    /// Pretend `sound` reached its end
    pub fn finish(&mut self, sound: Sound) {
        self.playing.remove(&sound);
    }
}

impl AudioDevice for RecordingAudio {
    fn play(&mut self, sound: Sound) {
        self.playing.insert(sound);
        *self.plays.entry(sound).or_insert(0) += 1;
    }

    fn stop(&mut self, sound: Sound) {
        self.playing.remove(&sound);
    }

    fn is_playing(&self, sound: Sound) -> bool {
        self.playing.contains(&sound)
    }

    fn set_volume(&mut self, sound: Sound, volume: f32) {
        self.volumes.insert(sound, volume);
    }
}

/// Window that asks to close after a fixed number of frames
#[derive(Debug, Clone)]
pub struct FrameBudget {
    remaining: u64,
    presented: u64,
}

impl FrameBudget {
    pub fn new(frames: u64) -> Self {
        Self {
            remaining: frames,
            presented: 0,
        }
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl Window for FrameBudget {
    fn should_close(&self) -> bool {
        self.remaining == 0
    }

    fn end_frame(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
        self.presented += 1;
    }
}

/// Scripted keyboard plus a frame budget: a whole host in one value
#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    pub input: ScriptedInput,
    pub window: FrameBudget,
}

impl HeadlessPlatform {
    pub fn new(input: ScriptedInput, frames: u64) -> Self {
        Self {
            input,
            window: FrameBudget::new(frames),
        }
    }
}

impl Input for HeadlessPlatform {
    fn is_key_down(&self, key: Key) -> bool {
        self.input.is_key_down(key)
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.input.is_key_pressed(key)
    }
}

impl Window for HeadlessPlatform {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn end_frame(&mut self) {
        self.window.end_frame();
        self.input.next_frame();
    }
}
