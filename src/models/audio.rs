//! Background music tracks

use serde::{Deserialize, Serialize};

/// A playable track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioTrack {
    pub name: String,
    /// Asset location on the audio host
    pub source: String,
    /// Track length in seconds
    #[serde(default)]
    pub duration_secs: u32,
}

impl AudioTrack {
    pub fn new(name: impl Into<String>, source: impl Into<String>, duration_secs: u32) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            duration_secs,
        }
    }
}

/// Short sound cues played on top of the music
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Coin,
}

impl SoundCue {
    pub fn source(&self) -> &'static str {
        match self {
            Self::Coin => "/sounds/coin.mp3",
        }
    }
}

/// Format seconds as `m:ss`
pub fn format_time(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(600), "10:00");
    }
}
