use async_trait::async_trait;
use std::fmt;

// Credentials sent to the account service. The confirmation field never
// leaves the form, so it has no slot here.
#[derive(Clone, PartialEq, Eq)]
pub struct CreateAccountRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for CreateAccountRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateAccountRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

// Outcome reported by the account service for one creation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthResult {
    // Account created; the token authenticates later requests.
    Created { token: String },
    // Service was reachable but refused to create the account.
    Rejected,
}

// Failures where no usable answer came back from the account service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    Transport(String),
    Upstream { status: u16, message: Option<String> },
    Decode(String),
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountError::Transport(err) => write!(f, "account service unreachable: {err}"),
            AccountError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "account service error {status}: {message}")
                } else {
                    write!(f, "account service error {status}")
                }
            }
            AccountError::Decode(err) => write!(f, "account response decode error: {err}"),
        }
    }
}

impl std::error::Error for AccountError {}

// The form depends on this trait, not on the reqwest client.
#[async_trait]
pub trait AccountProvider: Send + Sync {
    async fn create_account(&self, req: CreateAccountRequest) -> Result<AuthResult, AccountError>;
}
