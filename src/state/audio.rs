//! Audio and voice context
//!
//! Shared by the status bar controls, the music player, the voice overlay and
//! the narration of the tutorial. Nothing is decoded or played here: the
//! context tracks what the player would be doing and records narration and
//! sound cues so the UI can surface them.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::settings::SpeechSettings;
use crate::config::Settings;
use crate::models::{AudioTrack, SoundCue};

/// Narration languages offered by the language selector
pub const LANGUAGES: &[(&str, &str)] = &[
    ("pt-PT", "Português (Portugal)"),
    ("pt-BR", "Português (Brasil)"),
    ("en-US", "English (US)"),
    ("es-ES", "Español"),
    ("fr-FR", "Français"),
];

/// Volume slider resolution (tenths)
const VOLUME_STEPS: u8 = 10;

/// Something Lumin said
#[derive(Debug, Clone, PartialEq)]
pub struct Narration {
    pub text: String,
    pub language: String,
    pub rate: f32,
    pub pitch: f32,
}

#[derive(Debug, Clone)]
pub struct AudioContext {
    tracks: Vec<AudioTrack>,
    current: usize,
    playing: bool,
    muted: bool,
    /// Volume in tenths, 0..=10
    volume: u8,
    position_ms: u64,
    listening: bool,
    language: String,
    speech: SpeechSettings,
    narration: Option<Narration>,
    last_cue: Option<SoundCue>,
}

impl AudioContext {
    pub fn new(settings: &Settings) -> Self {
        Self {
            tracks: settings.tracks.clone(),
            current: 0,
            playing: false,
            muted: settings.muted,
            volume: to_steps(settings.volume),
            position_ms: 0,
            listening: false,
            language: settings.language.clone(),
            speech: settings.speech,
            narration: None,
            last_cue: None,
        }
    }

    pub fn tracks(&self) -> &[AudioTrack] {
        &self.tracks
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_track(&self) -> Option<&AudioTrack> {
        self.tracks.get(self.current)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn toggle_music(&mut self) {
        self.playing = !self.playing && !self.tracks.is_empty();
        debug!(playing = self.playing, "background music toggled");
    }

    /// Advance to the next track, wrapping to the first
    pub fn next_track(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.tracks.len();
        self.position_ms = 0;
    }

    /// Go back to the previous track, wrapping to the last
    pub fn previous_track(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.current = (self.current + self.tracks.len() - 1) % self.tracks.len();
        self.position_ms = 0;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn volume(&self) -> f32 {
        self.volume as f32 / VOLUME_STEPS as f32
    }

    /// Set volume, snapped to the nearest tenth and clamped to [0, 1]
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = to_steps(volume);
    }

    pub fn volume_up(&mut self) {
        self.volume = (self.volume + 1).min(VOLUME_STEPS);
    }

    pub fn volume_down(&mut self) {
        self.volume = self.volume.saturating_sub(1);
    }

    /// Elapsed time in the current track, in whole seconds
    pub fn current_time(&self) -> u32 {
        (self.position_ms / 1000) as u32
    }

    pub fn duration(&self) -> u32 {
        self.current_track().map(|t| t.duration_secs).unwrap_or(0)
    }

    /// Jump within the current track
    pub fn seek(&mut self, secs: u32) {
        self.position_ms = u64::from(secs.min(self.duration())) * 1000;
    }

    /// Move the play position forward; a finished track rolls over to the next
    pub fn tick(&mut self, elapsed: Duration) {
        if !self.playing {
            return;
        }
        self.position_ms += elapsed.as_millis() as u64;

        let duration_ms = u64::from(self.duration()) * 1000;
        if duration_ms > 0 && self.position_ms >= duration_ms {
            self.next_track();
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn set_listening(&mut self, listening: bool) {
        self.listening = listening;
    }

    pub fn toggle_listening(&mut self) {
        self.listening = !self.listening;
        debug!(listening = self.listening, "voice listening toggled");
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Switch narration language; unknown codes are ignored
    pub fn set_language(&mut self, code: &str) -> bool {
        if LANGUAGES.iter().any(|(c, _)| *c == code) {
            self.language = code.to_string();
            true
        } else {
            false
        }
    }

    /// Narrate text in the current language and voice
    pub fn speak(&mut self, text: &str) {
        info!(language = %self.language, "narration: {}", text);
        self.narration = Some(Narration {
            text: text.to_string(),
            language: self.language.clone(),
            rate: self.speech.rate,
            pitch: self.speech.pitch,
        });
    }

    pub fn narration(&self) -> Option<&Narration> {
        self.narration.as_ref()
    }

    pub fn clear_narration(&mut self) {
        self.narration = None;
    }

    /// Play a short cue; muted audio drops it
    pub fn play_sound(&mut self, cue: SoundCue) {
        if self.muted {
            return;
        }
        debug!(source = cue.source(), "sound cue");
        self.last_cue = Some(cue);
    }

    /// Take the most recent cue so it is only surfaced once
    pub fn take_cue(&mut self) -> Option<SoundCue> {
        self.last_cue.take()
    }
}

fn to_steps(volume: f32) -> u8 {
    (volume.clamp(0.0, 1.0) * VOLUME_STEPS as f32).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> AudioContext {
        AudioContext::new(&Settings::default())
    }

    #[test]
    fn test_track_navigation_wraps() {
        let mut audio = context();
        assert_eq!(audio.current_index(), 0);
        audio.previous_track();
        assert_eq!(audio.current_index(), 2);
        audio.next_track();
        assert_eq!(audio.current_index(), 0);
    }

    #[test]
    fn test_volume_steps_and_clamp() {
        let mut audio = context();
        audio.set_volume(1.7);
        assert_eq!(audio.volume(), 1.0);
        audio.volume_up();
        assert_eq!(audio.volume(), 1.0);

        audio.set_volume(0.1);
        audio.volume_down();
        audio.volume_down();
        assert_eq!(audio.volume(), 0.0);

        audio.set_volume(0.44);
        assert!((audio.volume() - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tick_rolls_over_to_next_track() {
        let mut audio = context();
        audio.tick(Duration::from_secs(30));
        assert_eq!(audio.current_time(), 0);

        audio.toggle_music();
        audio.tick(Duration::from_secs(30));
        assert_eq!(audio.current_time(), 30);

        let duration = audio.duration();
        audio.tick(Duration::from_secs(u64::from(duration)));
        assert_eq!(audio.current_index(), 1);
        assert_eq!(audio.current_time(), 0);
    }

    #[test]
    fn test_seek_clamped_to_duration() {
        let mut audio = context();
        audio.seek(10_000);
        assert_eq!(audio.current_time(), audio.duration());
    }

    #[test]
    fn test_language_selection() {
        let mut audio = context();
        assert!(audio.set_language("fr-FR"));
        assert!(!audio.set_language("de-DE"));
        assert_eq!(audio.language(), "fr-FR");

        audio.speak("Bonjour");
        let narration = audio.narration().unwrap();
        assert_eq!(narration.language, "fr-FR");
        assert_eq!(narration.rate, 0.9);
    }

    #[test]
    fn test_muted_drops_sound_cues() {
        let mut audio = context();
        audio.toggle_mute();
        audio.play_sound(SoundCue::Coin);
        assert!(audio.take_cue().is_none());

        audio.toggle_mute();
        audio.play_sound(SoundCue::Coin);
        assert_eq!(audio.take_cue(), Some(SoundCue::Coin));
        assert!(audio.take_cue().is_none());
    }

    #[test]
    fn test_empty_playlist_never_plays() {
        let mut settings = Settings::default();
        settings.tracks.clear();
        let mut audio = AudioContext::new(&settings);
        audio.toggle_music();
        assert!(!audio.is_playing());
        audio.next_track();
        assert!(audio.current_track().is_none());
    }
}
