pub mod account;
pub mod errors;
pub mod ports;
pub mod registration;

// Re-export the domain boundary types and ports.
pub use account::{AccountError, AccountProvider, AuthResult, CreateAccountRequest};
pub use errors::SubmitError;
pub use ports::{
    HOME_ROUTE, LOGIN_ROUTE, Navigator, Notification, NotificationLevel, Notifier,
    RegistrationValidator, TOKEN_KEY, TokenStore,
};
pub use registration::{Field, FieldError, FieldErrors, RegistrationInput};
