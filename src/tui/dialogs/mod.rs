//! Modal dialogs for the TUI

pub mod command_palette;
pub mod goal_wizard;
pub mod help;
pub mod language;
pub mod premium;
pub mod terms;
pub mod tutorial;
