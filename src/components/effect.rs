//! Side effects requested by component transitions
//!
//! Components never speak, play sounds or touch the network themselves; they
//! return effects in order and the app runs them.

use crate::models::SoundCue;
use crate::services::ApiRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Error,
}

/// A toast-style message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, title, message)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Narrate text through the audio context
    Speak(String),
    PlaySound(SoundCue),
    Notify(Notice),
    /// Mark a cached query stale so it is refetched
    InvalidateQuery(&'static str),
    /// Start a backend request
    Request(ApiRequest),
}
