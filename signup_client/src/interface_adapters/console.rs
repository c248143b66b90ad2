use console::{Term, style};
use std::sync::{Mutex, PoisonError};

use crate::domain::{Navigator, Notification, NotificationLevel, Notifier};

// Prints notifications as single toast-like lines on stderr.
#[derive(Clone)]
pub struct ConsoleNotifier {
    term: Term,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render_notification(notification: &Notification) -> String {
    match notification.level {
        NotificationLevel::Success => {
            format!("{} {}", style("✓").green(), style(&notification.message).bold())
        }
        NotificationLevel::Error => {
            format!("{} {}", style("✗").red(), style(&notification.message).bold())
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        tracing::debug!(level = ?notification.level, message = %notification.message, "notify");
        if let Err(e) = self.term.write_line(&render_notification(&notification)) {
            tracing::warn!(error = %e, "failed to write notification.");
        }
    }
}

// Terminal stand-in for a router: remembers the current route and
// tells the user where the app would go next.
pub struct ConsoleNavigator {
    base_url: String,
    current: Mutex<Option<String>>,
}

impl ConsoleNavigator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            current: Mutex::new(None),
        }
    }

    pub fn current_route(&self) -> Option<String> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn location(&self, route: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), route)
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: &str) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(route.to_string());
        let location = self.location(route);
        tracing::info!(route, %location, "navigate");
        eprintln!("{} {}", style("→").cyan(), style(location).dim());
    }
}
