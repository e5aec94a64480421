//! Sound registry
//!
//! Owns the playback handles for looping tracks, keyed by sound id. Handles
//! are created on first use and released by `dispose`. Actual playback is
//! delegated to an `AudioBackend` supplied by the platform layer.

use hashbrown::HashMap;
use log::debug;
use strum::{Display, EnumIter};
use thiserror::Error;

/// Volume used for tracks while their channel is enabled
pub const DEFAULT_VOLUME: f32 = 0.5;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SoundError {
    #[error("Could not load sound '{path}': {reason}")]
    Load { path: String, reason: String },
}

/// Every sound the game plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum SoundId {
    CatIn,
    CatWait,
    CatWin,
    Click,
    Dir,
    GameMusic,
    MenuMusic,
    MouseStart,
    MouseWin,
}

impl SoundId {
    /// Asset path of the sound file
    pub const fn path(&self) -> &'static str {
        match self {
            SoundId::CatIn => "/sounds/cat-in.mp3",
            SoundId::CatWait => "/sounds/cat-wait.mp3",
            SoundId::CatWin => "/sounds/cat-win.mp3",
            SoundId::Click => "/sounds/click.mp3",
            SoundId::Dir => "/sounds/dir.mp3",
            SoundId::GameMusic => "/sounds/game-music.mp3",
            SoundId::MenuMusic => "/sounds/menu-music.mp3",
            SoundId::MouseStart => "/sounds/mouse-start.mp3",
            SoundId::MouseWin => "/sounds/mouse-win.mp3",
        }
    }

    /// The cat's waiting loop is an effect, so it follows the sound switch
    /// rather than the music switch.
    pub const fn follows_sound_switch(&self) -> bool {
        matches!(self, SoundId::CatWait)
    }
}

/// Platform playback
pub trait AudioBackend {
    type Handle;

    /// Load a looping track
    fn load(&mut self, path: &str) -> Result<Self::Handle, SoundError>;
    fn play(&mut self, handle: &Self::Handle);
    fn pause(&mut self, handle: &Self::Handle);
    fn rewind(&mut self, handle: &Self::Handle);
    fn set_volume(&mut self, handle: &Self::Handle, volume: f32);
    fn release(&mut self, handle: Self::Handle);

    /// Fire-and-forget playback of a one-shot effect
    fn play_once(&mut self, path: &str) -> Result<(), SoundError>;
}

/// Track handles plus the sound and music switches
pub struct SoundRegistry<B: AudioBackend> {
    backend: B,
    tracks: HashMap<SoundId, B::Handle>,
    sound_enabled: bool,
    music_enabled: bool,
}

impl<B: AudioBackend> SoundRegistry<B> {
    pub fn new(backend: B) -> Self {
        Self::with_switches(backend, true, true)
    }

    pub fn with_switches(backend: B, sound_enabled: bool, music_enabled: bool) -> Self {
        Self {
            backend,
            tracks: HashMap::new(),
            sound_enabled,
            music_enabled,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn music_enabled(&self) -> bool {
        self.music_enabled
    }

    pub fn is_loaded(&self, id: SoundId) -> bool {
        self.tracks.contains_key(&id)
    }

    /// Play a one-shot effect. Skipped while sound is off unless `force` is set.
    pub fn play_effect(&mut self, id: SoundId, force: bool) -> Result<(), SoundError> {
        if !force && !self.sound_enabled {
            return Ok(());
        }
        self.backend.play_once(id.path())
    }

    /// Start (or restart) a looping track if its switch is on
    pub fn play_track(&mut self, id: SoundId) -> Result<(), SoundError> {
        let enabled = if id.follows_sound_switch() {
            self.sound_enabled
        } else {
            self.music_enabled
        };
        if !enabled {
            return Ok(());
        }

        if let Some(handle) = self.tracks.get(&id) {
            self.backend.rewind(handle);
            self.backend.play(handle);
            return Ok(());
        }

        debug!("loading track {}", id);
        let handle = self.backend.load(id.path())?;
        self.backend.set_volume(&handle, DEFAULT_VOLUME);
        self.backend.play(&handle);
        self.tracks.insert(id, handle);
        Ok(())
    }

    /// Pause a track if it has been loaded
    pub fn stop(&mut self, id: SoundId) {
        if let Some(handle) = self.tracks.get(&id) {
            self.backend.pause(handle);
        }
    }

    /// Flip the sound switch. Mutes or restores the loaded effect loops.
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.apply_volume(true, self.sound_enabled);
        self.sound_enabled
    }

    /// Flip the music switch. Mutes or restores the loaded music tracks.
    pub fn toggle_music(&mut self) -> bool {
        self.music_enabled = !self.music_enabled;
        self.apply_volume(false, self.music_enabled);
        self.music_enabled
    }

    fn apply_volume(&mut self, sound_channel: bool, enabled: bool) {
        let volume = if enabled { DEFAULT_VOLUME } else { 0.0 };
        for (id, handle) in &self.tracks {
            if id.follows_sound_switch() == sound_channel {
                self.backend.set_volume(handle, volume);
            }
        }
    }

    /// Release every loaded track
    pub fn dispose(&mut self) {
        for (id, handle) in self.tracks.drain() {
            debug!("releasing track {}", id);
            self.backend.release(handle);
        }
    }
}
