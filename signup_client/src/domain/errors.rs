use std::fmt;

use crate::domain::registration::FieldErrors;

// Ways a registration submit can end without an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    // Another submit on the same form has not resolved yet.
    InFlight,
    Invalid(FieldErrors),
    Rejected,
    Transport(String),
    Storage(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::InFlight => write!(f, "a registration is already in progress"),
            SubmitError::Invalid(errors) => write!(f, "invalid registration input: {errors}"),
            SubmitError::Rejected => write!(f, "account service rejected the registration"),
            SubmitError::Transport(err) => write!(f, "{err}"),
            SubmitError::Storage(err) => write!(f, "failed to store auth token: {err}"),
        }
    }
}

impl std::error::Error for SubmitError {}
