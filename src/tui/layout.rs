//! Layout definitions for the TUI
//!
//! Wide terminals get a sidebar menu; narrow ones get a one-line top bar and
//! a sheet menu opened on demand. The music player, cookie banner and status
//! bar stack at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminal width from which the sidebar is shown
pub const WIDE_MIN_WIDTH: u16 = 100;

const SIDEBAR_WIDTH: u16 = 24;
const BANNER_HEIGHT: u16 = 3;

/// Layout regions for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Menu column, wide terminals only
    pub sidebar: Option<Rect>,
    /// Title line with the menu hint, narrow terminals only
    pub top_bar: Option<Rect>,
    /// Page content
    pub main: Rect,
    pub player: Rect,
    pub banner: Option<Rect>,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect, player_expanded: bool, banner_visible: bool) -> Self {
        let player_height = if player_expanded { 3 } else { 1 };
        let banner_height = if banner_visible { BANNER_HEIGHT } else { 0 };

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(player_height),
                Constraint::Length(banner_height),
                Constraint::Length(1),
            ])
            .split(area);

        let body = vertical[0];
        let (sidebar, top_bar, main) = if Self::is_wide(area) {
            let horizontal = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
                .split(body);
            (Some(horizontal[0]), None, horizontal[1])
        } else {
            let stacked = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(2)])
                .split(body);
            (None, Some(stacked[0]), stacked[1])
        };

        Self {
            sidebar,
            top_bar,
            main,
            player: vertical[1],
            banner: banner_visible.then_some(vertical[2]),
            status_bar: vertical[3],
        }
    }

    pub fn is_wide(area: Rect) -> bool {
        area.width >= WIDE_MIN_WIDTH
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout_has_sidebar() {
        let layout = AppLayout::new(Rect::new(0, 0, 120, 40), false, true);
        assert_eq!(layout.sidebar.map(|r| r.width), Some(SIDEBAR_WIDTH));
        assert!(layout.top_bar.is_none());
        assert_eq!(layout.banner.map(|r| r.height), Some(BANNER_HEIGHT));
        assert_eq!(layout.status_bar.y, 39);
    }

    #[test]
    fn test_narrow_layout_has_top_bar() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 30), true, false);
        assert!(layout.sidebar.is_none());
        assert_eq!(layout.top_bar.map(|r| r.height), Some(1));
        assert_eq!(layout.player.height, 3);
        assert!(layout.banner.is_none());
        assert_eq!(layout.main.width, 80);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let area = centered_rect_fixed(100, 50, Rect::new(0, 0, 80, 24));
        assert_eq!(area, Rect::new(0, 0, 80, 24));
    }
}
