//! Toast notification widget
//!
//! Toasts are built from component [`Notice`]s and dismiss themselves after a
//! few seconds.

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::components::{Notice, NoticeKind};

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }
}

impl From<NoticeKind> for NotificationType {
    fn from(kind: NoticeKind) -> Self {
        match kind {
            NoticeKind::Info => Self::Info,
            NoticeKind::Success => Self::Success,
            NoticeKind::Warning => Self::Warning,
            NoticeKind::Error => Self::Error,
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    /// Time when notification was created (for auto-dismiss)
    pub created_at: Instant,
    /// Duration to display (in seconds)
    pub duration_secs: u64,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        notification_type: NotificationType,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration_secs: 4,
        }
    }

    pub fn with_duration(mut self, seconds: u64) -> Self {
        self.duration_secs = seconds;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() >= self.duration_secs
    }
}

impl From<Notice> for Notification {
    fn from(notice: Notice) -> Self {
        let notification = Self::new(notice.title, notice.message, notice.kind.into());
        // Errors stay up longer
        match notification.notification_type {
            NotificationType::Error => notification.with_duration(6),
            _ => notification,
        }
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = self.notification.notification_type;
        let color = kind.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} {} ", kind.icon(), self.notification.title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// A queue of notifications to display
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// Oldest notification still showing
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    /// Drop the notification on screen
    pub fn dismiss_current(&mut self) {
        if !self.notifications.is_empty() {
            self.notifications.remove(0);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_notice() {
        let n = Notification::from(Notice::error("Erro ao avançar", "Tente novamente."));
        assert_eq!(n.title, "Erro ao avançar");
        assert_eq!(n.notification_type, NotificationType::Error);
        assert_eq!(n.duration_secs, 6);
    }

    #[test]
    fn test_notification_queue() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.push(Notice::info("Primeiro", "a").into());
        queue.push(Notice::success("Segundo", "b").into());
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().map(|n| n.title.as_str()), Some("Primeiro"));

        queue.dismiss_current();
        assert_eq!(queue.current().map(|n| n.title.as_str()), Some("Segundo"));
    }

    #[test]
    fn test_expired_are_removed() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::new("Velho", "x", NotificationType::Info).with_duration(0));
        queue.remove_expired();
        assert!(queue.is_empty());
    }
}
