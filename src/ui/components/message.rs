//! Error and notification message components
//!
//! Provides consistent styling for error messages and notifications.
//! For empty states, use `empty_state` module.

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Build an error message line for overlay display
///
/// Format: `[red bg] Error: [/red bg][red text] message [/red text]`
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)),
    ])
}

/// Build a notification line, truncated with "…" to `max_width` columns
pub fn build_notification_line(notification: &Notification, max_width: usize) -> Line<'static> {
    let (label, label_bg) = match notification.kind {
        NotificationKind::Info => (" Info: ", Color::Cyan),
        NotificationKind::Warning => (" Warning: ", Color::Yellow),
    };

    let available = max_width.saturating_sub(label.len() + 2);
    let message = &notification.message;
    let message = if message.chars().count() > available {
        let kept: String = message.chars().take(available.saturating_sub(1)).collect();
        format!("{kept}…")
    } else {
        message.clone()
    };

    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Black).bg(label_bg)),
        Span::styled(format!(" {message} "), Style::default().fg(label_bg)),
    ])
}
