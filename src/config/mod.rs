//! Configuration module for MY POUPAR+
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PouparPaths;
pub use settings::Settings;
