//! Core data models for MY POUPAR+
//!
//! Goals, routes, the static tutorial and voice-command catalogues, music
//! tracks and the user profile.

pub mod audio;
pub mod goal;
pub mod money;
pub mod route;
pub mod tutorial;
pub mod user;
pub mod voice;

pub use audio::{AudioTrack, SoundCue};
pub use goal::{Goal, GoalCategory, GoalType};
pub use money::Money;
pub use route::Route;
pub use tutorial::{Reward, TutorialStep, TutorialStepKind, TUTORIAL_STEPS};
pub use user::UserProfile;
pub use voice::{RouteContext, VoiceAction, VoiceCommand, VOICE_COMMANDS};
