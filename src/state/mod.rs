//! Application-wide contexts
//!
//! Owned by the TUI app and passed explicitly to the views and components
//! that need them.

pub mod audio;
pub mod session;
pub mod theme;

pub use audio::{AudioContext, Narration, LANGUAGES};
pub use session::Session;
pub use theme::{Palette, Theme, ThemeContext};
