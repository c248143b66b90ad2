use async_trait::async_trait;

use crate::domain::registration::{FieldError, RegistrationInput};

// Key under which the auth token is persisted for the rest of the app.
pub const TOKEN_KEY: &str = "token";

// Route the client is sent to after a successful registration.
pub const HOME_ROUTE: &str = "/";

// Route offered to users who already have an account.
pub const LOGIN_ROUTE: &str = "/login";

// Port for the validation schema. Implementations report every violation
// instead of stopping at the first one.
pub trait RegistrationValidator: Send + Sync {
    fn validate(&self, input: &RegistrationInput) -> Vec<FieldError>;
}

// Port for durable client-side key/value storage.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn set(&self, key: &str, value: &str) -> Result<(), String>;
    async fn get(&self, key: &str) -> Result<Option<String>, String>;
}

// Port for moving the client to another view.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

// Port for short user-facing notices (toasts).
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
