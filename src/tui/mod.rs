//! Terminal User Interface module
//!
//! Full-screen front-end built on ratatui: a page per route, a navigation
//! menu, the music player and the modal dialogs. Backend requests run on
//! worker threads and report back through the event channel.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod worker;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Commands
pub mod commands;

pub use app::App;
pub use terminal::run_tui;
