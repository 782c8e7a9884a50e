//! TUI Views module
//!
//! Page content, navigation chrome, the music player and the overlays drawn
//! above them.

pub mod music_player;
pub mod overlays;
pub mod pages;
pub mod sidebar;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(
        frame.area(),
        app.player_expanded,
        app.cookie_banner.is_visible(),
    );

    if let Some(area) = layout.sidebar {
        sidebar::render(frame, app, area);
    }
    if let Some(area) = layout.top_bar {
        sidebar::render_top_bar(frame, app, area);
    }

    pages::render(frame, app, layout.main);

    if app.mobile_menu_open && layout.sidebar.is_none() {
        sidebar::render_sheet(frame, app, layout.main);
    }

    music_player::render(frame, app, layout.player);
    if let Some(area) = layout.banner {
        overlays::render_cookie_banner(frame, app, area);
    }
    status_bar::render(frame, app, layout.status_bar);

    overlays::render_voice_overlay(frame, app, layout.main);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    overlays::render_notification(frame, app, frame.area());
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::CommandPalette => dialogs::command_palette::render(frame, app),
        ActiveDialog::GoalWizard => dialogs::goal_wizard::render(frame, app),
        ActiveDialog::Tutorial => dialogs::tutorial::render(frame, app),
        ActiveDialog::Premium => dialogs::premium::render(frame, app),
        ActiveDialog::Terms => dialogs::terms::render(frame, app),
        ActiveDialog::Language => dialogs::language::render(frame, app),
        ActiveDialog::None => {}
    }
}
