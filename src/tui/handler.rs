//! Event handler for the TUI
//!
//! Routes keyboard, mouse and backend events to the app based on the
//! current state: dialogs first, then the voice overlay, the menu and the
//! page.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use super::app::{ActiveDialog, App, FocusedPanel, MENU_ITEMS};
use super::commands::{filter_commands, CommandAction};
use super::dialogs;
use super::event::Event;
use crate::components::{Swipe, VoiceOverlay};
use crate::models::{Route, VoiceAction};

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event, tick_rate: Duration) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => {
            handle_mouse_event(app, mouse);
            Ok(())
        }
        Event::Tick => {
            app.tick(tick_rate);
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
        Event::Api(completion) => {
            app.on_api_completion(completion);
            Ok(())
        }
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    if app.audio.is_listening() && handle_listening_key(app, key) {
        return Ok(());
    }

    if app.mobile_menu_open && handle_menu_key(app, key) {
        return Ok(());
    }

    if app.cookie_banner.is_visible() {
        match key.code {
            KeyCode::Char('y') => {
                app.accept_cookies();
                return Ok(());
            }
            KeyCode::Char('n') | KeyCode::Char('x') => {
                app.decline_cookies();
                return Ok(());
            }
            _ => {}
        }
    }

    handle_normal_key(app, key)
}

/// Digits run the numbered voice command; Esc stops listening
fn handle_listening_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('v') => {
            app.audio.set_listening(false);
            true
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let overlay = VoiceOverlay::visible(true, app.route.path());
            let command = c
                .to_digit(10)
                .and_then(|n| overlay.and_then(|o| o.command_for_digit(n as usize)));
            match command {
                Some(command) => {
                    debug!(command = command.command, "voice command");
                    app.execute_voice_action(command.action);
                }
                None => app.set_status("Comando não reconhecido"),
            }
            true
        }
        _ => false,
    }
}

/// Keys for the menu, in the sidebar or the sheet
fn handle_menu_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.menu_down(),
        KeyCode::Char('k') | KeyCode::Up => app.menu_up(),
        KeyCode::Enter => {
            app.select_menu_item();
            app.focused_panel = FocusedPanel::Main;
        }
        KeyCode::Esc | KeyCode::Char('M') if app.mobile_menu_open => {
            app.mobile_menu_open = false;
        }
        _ => return false,
    }
    true
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char(':') | KeyCode::Char('/') => app.open_dialog(ActiveDialog::CommandPalette),
        KeyCode::Tab => app.toggle_panel_focus(),

        KeyCode::Esc => {
            app.clear_status();
            app.audio.clear_narration();
            app.notifications.dismiss_current();
        }

        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if let Some((_, route)) = MENU_ITEMS.get(index) {
                app.navigate(*route);
            }
        }
        KeyCode::Backspace => {
            if !app.go_back() {
                app.set_status("Não há página anterior");
            }
        }
        KeyCode::Char('[') => app.handle_swipe(Swipe::Right),
        KeyCode::Char(']') => app.handle_swipe(Swipe::Left),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('M') => app.mobile_menu_open = !app.mobile_menu_open,

        KeyCode::Char('g') => app.open_goal_wizard(),
        KeyCode::Char('p') => app.open_dialog(ActiveDialog::Premium),
        KeyCode::Char('t') => app.open_dialog(ActiveDialog::Terms),
        KeyCode::Char('L') => app.open_dialog(ActiveDialog::Language),
        KeyCode::Char('T') => app.toggle_theme(),

        KeyCode::Char(' ') => app.audio.toggle_music(),
        KeyCode::Char(',') => app.audio.previous_track(),
        KeyCode::Char('.') => app.audio.next_track(),
        KeyCode::Char('m') => app.audio.toggle_mute(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.audio.volume_up(),
        KeyCode::Char('-') => app.audio.volume_down(),
        KeyCode::Char('e') => app.player_expanded = !app.player_expanded,
        KeyCode::Char('v') => app.audio.toggle_listening(),

        _ => match app.focused_panel {
            FocusedPanel::Menu => {
                handle_menu_key(app, key);
            }
            FocusedPanel::Main => handle_page_key(app, key),
        },
    }
    Ok(())
}

/// Keys specific to the current page
fn handle_page_key(app: &mut App, key: KeyEvent) {
    if app.route != Route::Dreams {
        return;
    }
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.selected_goal_index + 1 < app.goals.len() {
                app.selected_goal_index += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.selected_goal_index = app.selected_goal_index.saturating_sub(1);
        }
        KeyCode::Char('c') => app.contribute_to_selected_goal(),
        _ => {}
    }
}

/// Mouse drags become swipes
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if app.has_dialog() {
        app.swipe.cancel();
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.swipe.press(mouse.column, mouse.row),
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(swipe) = app.swipe.release(mouse.column, mouse.row) {
                debug!(?swipe, "swipe");
                app.handle_swipe(swipe);
            }
        }
        _ => {}
    }
}

fn handle_command_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => {
            let commands = filter_commands(&app.command_input);
            let selected = app
                .selected_command_index
                .min(commands.len().saturating_sub(1));
            let action = commands.get(selected).map(|cmd| cmd.action);

            app.close_dialog();
            if let Some(action) = action {
                execute_command_action(app, action)?;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
            app.selected_command_index = 0;
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            app.selected_command_index = 0;
        }
        KeyCode::Up => {
            app.selected_command_index = app.selected_command_index.saturating_sub(1);
        }
        KeyCode::Down => {
            let count = filter_commands(&app.command_input).len();
            if app.selected_command_index + 1 < count {
                app.selected_command_index += 1;
            }
        }
        _ => {}
    }
    Ok(())
}

fn execute_command_action(app: &mut App, action: CommandAction) -> Result<()> {
    match action {
        CommandAction::Navigate(route) => app.navigate(route),
        CommandAction::GoBack => app.execute_voice_action(VoiceAction::GoBack),
        CommandAction::NewGoal => app.open_goal_wizard(),
        CommandAction::Premium => app.open_dialog(ActiveDialog::Premium),
        CommandAction::Terms => app.open_dialog(ActiveDialog::Terms),
        CommandAction::Language => app.open_dialog(ActiveDialog::Language),
        CommandAction::ToggleMusic => app.audio.toggle_music(),
        CommandAction::NextTrack => app.audio.next_track(),
        CommandAction::ToggleMute => app.audio.toggle_mute(),
        CommandAction::ToggleListening => app.audio.toggle_listening(),
        CommandAction::ToggleTheme => app.toggle_theme(),
        CommandAction::Refresh => app.refresh(),
        CommandAction::Help => app.open_dialog(ActiveDialog::Help),
        CommandAction::Quit => app.quit(),
    }
    Ok(())
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::CommandPalette => handle_command_key(app, key)?,
        ActiveDialog::GoalWizard => {
            dialogs::goal_wizard::handle_key(app, key);
        }
        ActiveDialog::Tutorial => {
            dialogs::tutorial::handle_key(app, key);
        }
        ActiveDialog::Premium => {
            dialogs::premium::handle_key(app, key);
        }
        ActiveDialog::Terms => {
            dialogs::terms::handle_key(app, key);
        }
        ActiveDialog::Language => {
            dialogs::language::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    use crate::services::ApiRequest;
    use crate::tui::app::tests::test_app;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit_and_help() {
        let (mut app, _dispatcher, _dir) = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.active_dialog, ActiveDialog::None);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_digits_open_menu_entries() {
        let (mut app, _dispatcher, _dir) = test_app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.route, Route::Chat);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.route, Route::Home);
    }

    #[test]
    fn test_voice_digit_runs_command() {
        let (mut app, _dispatcher, _dir) = test_app();
        press(&mut app, KeyCode::Char('v'));
        assert!(app.audio.is_listening());

        // "/" offers "Abrir faturas" first
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.route, Route::BillReader);
        assert!(!app.audio.is_listening());
    }

    #[test]
    fn test_cookie_keys_only_while_banner_visible() {
        let (mut app, _dispatcher, _dir) = test_app();
        press(&mut app, KeyCode::Char('y'));
        assert!(!app.cookie_banner.is_visible());

        // 'n' no longer belongs to the banner
        press(&mut app, KeyCode::Char('n'));
        assert!(!app.cookie_banner.is_visible());
    }

    #[test]
    fn test_palette_runs_selected_command() {
        let (mut app, _dispatcher, _dir) = test_app();
        press(&mut app, KeyCode::Char(':'));
        type_str(&mut app, "sonhos");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.active_dialog, ActiveDialog::None);
        assert_eq!(app.route, Route::Dreams);
    }

    #[test]
    fn test_swipe_keys_walk_route_order() {
        let (mut app, _dispatcher, _dir) = test_app();
        app.navigate(Route::Dreams);
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.route, Route::Games);
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.route, Route::Dreams);
    }

    #[test]
    fn test_wizard_keys_reach_backend() {
        let (mut app, dispatcher, _dir) = test_app();
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.active_dialog, ActiveDialog::GoalWizard);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        assert!(matches!(
            dispatcher.last().map(|(_, r)| r),
            Some(ApiRequest::Recommendation { .. })
        ));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.active_dialog, ActiveDialog::None);
        assert!(app.goal_wizard.is_none());
    }

    #[test]
    fn test_mouse_drag_swipes() {
        let (mut app, _dispatcher, _dir) = test_app();
        app.navigate(Route::News);
        let event = |kind, column| MouseEvent {
            kind,
            column,
            row: 10,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(&mut app, event(MouseEventKind::Down(MouseButton::Left), 40));
        handle_mouse_event(&mut app, event(MouseEventKind::Up(MouseButton::Left), 20));
        assert_eq!(app.route, Route::Wallet);
    }
}
