//! Toast notification widget
//!
//! Shows short-lived feedback after a store mutation or theme change.
//! Expired toasts are dropped on each tick.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::models::Palette;

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
    Error,
}

impl NotificationType {
    /// Border color drawn from the active palette
    pub fn color(&self, palette: &Palette) -> Color {
        match self {
            Self::Info => palette.secondary.into(),
            Self::Success => palette.primary.into(),
            Self::Error => palette.error.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Done",
            Self::Error => "Error",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    created_at: Instant,
    duration: Duration,
}

impl Notification {
    pub fn new(
        message: impl Into<String>,
        notification_type: NotificationType,
        duration: Duration,
    ) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
    palette: &'a Palette,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification, palette: &'a Palette) -> Self {
        Self {
            notification,
            palette,
        }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.notification_type.color(self.palette);

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(self.palette.card.into()))
            .title(format!(" {} ", self.notification.notification_type.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(self.palette.text.into()))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Queue of notifications; the oldest live one is shown
#[derive(Debug)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
    duration: Duration,
}

impl NotificationQueue {
    /// Create a queue whose toasts live for `duration`
    pub fn new(duration: Duration) -> Self {
        Self {
            notifications: Vec::new(),
            duration,
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(message, NotificationType::Info);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message, NotificationType::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message, NotificationType::Error);
    }

    fn push(&mut self, message: impl Into<String>, notification_type: NotificationType) {
        self.notifications
            .push(Notification::new(message, notification_type, self.duration));
    }

    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
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
    use crate::models::palette::LIGHT;

    #[test]
    fn test_queue_order() {
        let mut queue = NotificationQueue::new(Duration::from_secs(60));
        assert!(queue.is_empty());

        queue.success("Expense added");
        queue.error("Expense not found: 9");

        assert_eq!(queue.len(), 2);
        let current = queue.current().unwrap();
        assert_eq!(current.message, "Expense added");
        assert_eq!(current.notification_type, NotificationType::Success);
    }

    #[test]
    fn test_expired_removed() {
        let mut queue = NotificationQueue::new(Duration::ZERO);
        queue.info("gone");
        queue.remove_expired();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_colors_follow_palette() {
        assert_eq!(NotificationType::Error.color(&LIGHT), Color::from(LIGHT.error));
        assert_eq!(
            NotificationType::Success.color(&LIGHT),
            Color::from(LIGHT.primary)
        );
    }
}
