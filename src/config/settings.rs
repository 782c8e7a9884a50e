//! User settings for MY POUPAR+
//!
//! Manages the backend location, logging level, narration voice and the
//! background music playlist.

use serde::{Deserialize, Serialize};

use super::paths::PouparPaths;
use crate::error::PouparError;
use crate::models::AudioTrack;

/// Speech synthesis parameters used for narration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeechSettings {
    /// Speaking rate (1.0 = normal)
    pub rate: f32,
    /// Voice pitch (1.0 = normal)
    pub pitch: f32,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            rate: 0.9,
            pitch: 1.1,
        }
    }
}

/// User settings for POUPAR+
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the POUPAR+ backend
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Bearer token for the backend session, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// tracing filter directive (e.g. "info", "poupar=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Narration language tag
    #[serde(default = "default_language")]
    pub language: String,

    /// Initial music volume (0.0 - 1.0)
    #[serde(default = "default_volume")]
    pub volume: f32,

    /// Whether audio starts muted
    #[serde(default)]
    pub muted: bool,

    /// Background music playlist
    #[serde(default = "default_tracks")]
    pub tracks: Vec<AudioTrack>,

    /// Narration voice parameters
    #[serde(default)]
    pub speech: SpeechSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    15
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_language() -> String {
    "pt-PT".to_string()
}

fn default_volume() -> f32 {
    0.5
}

fn default_tracks() -> Vec<AudioTrack> {
    vec![
        AudioTrack::new("Poupança Tranquila", "/music/lofi-savings.mp3", 184),
        AudioTrack::new("Moedas ao Luar", "/music/moonlight-coins.mp3", 212),
        AudioTrack::new("Rumo à Meta", "/music/goal-rush.mp3", 158),
    ]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            api_token: None,
            request_timeout_secs: default_request_timeout_secs(),
            log_level: default_log_level(),
            language: default_language(),
            volume: default_volume(),
            muted: false,
            tracks: default_tracks(),
            speech: SpeechSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PouparPaths) -> Result<Self, PouparError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PouparError::Io(format!("Failed to read settings file: {}", e)))?;

        let mut settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| PouparError::Config(format!("Failed to parse settings file: {}", e)))?;

        if settings.tracks.is_empty() {
            settings.tracks = default_tracks();
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PouparPaths) -> Result<(), PouparError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PouparError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PouparError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Override the backend URL (from the command line or environment)
    pub fn with_api_base_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.api_base_url = url;
        }
        self
    }

    /// Backend URL without a trailing slash
    pub fn api_root(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}
