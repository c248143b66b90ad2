use crate::domain::{AccountError, AccountProvider, AuthResult, CreateAccountRequest};
use crate::interface_adapters::protocol::{CreateUserRequest, CreateUserResponse, ErrorResponse};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::fmt;
use std::time::Duration;
use url::Url;

pub const CREATE_USER_PATH: &str = "/api/auth/createuser";

// Build the account endpoint by appending the route to the configured host,
// keeping any path prefix the host already carries.
pub fn create_user_url(auth_host: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!(
        "{}{}",
        auth_host.trim_end_matches('/'),
        CREATE_USER_PATH
    ))
}

// Thin wrapper around reqwest for account service calls.
#[derive(Clone)]
pub struct AccountClient {
    http: Client,
    pub endpoint: Url,
}

#[derive(Debug)]
pub enum AccountClientError {
    Transport(reqwest::Error),
    Upstream {
        status: StatusCode,
        message: Option<String>,
    },
    Decode(String),
}

impl fmt::Display for AccountClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountClientError::Transport(err) => write!(f, "account transport error: {err}"),
            AccountClientError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "account upstream error {status}: {message}")
                } else {
                    write!(f, "account upstream error {status}")
                }
            }
            AccountClientError::Decode(err) => write!(f, "account response decode error: {err}"),
        }
    }
}

impl std::error::Error for AccountClientError {}

impl From<AccountClientError> for AccountError {
    fn from(err: AccountClientError) -> Self {
        match err {
            AccountClientError::Transport(err) => AccountError::Transport(err.to_string()),
            AccountClientError::Upstream { status, message } => AccountError::Upstream {
                status: status.as_u16(),
                message,
            },
            AccountClientError::Decode(err) => AccountError::Decode(err),
        }
    }
}

impl AccountClient {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint })
    }

    async fn send(&self, req: &CreateAccountRequest) -> Result<AuthResult, AccountClientError> {
        let res = self
            .http
            .post(self.endpoint.clone())
            .json(&CreateUserRequest {
                name: &req.name,
                email: &req.email,
                password: &req.password,
            })
            .send()
            .await
            .map_err(AccountClientError::Transport)?;
        let status = res.status();
        let body = res.bytes().await.map_err(AccountClientError::Transport)?;

        // The success flag decides the outcome, whatever the status code says.
        match serde_json::from_slice::<CreateUserResponse>(&body) {
            Ok(reply) => into_auth_result(reply),
            Err(err) if status.is_success() => Err(AccountClientError::Decode(err.to_string())),
            Err(_) => {
                let message = serde_json::from_slice::<ErrorResponse>(&body)
                    .ok()
                    .map(|payload| payload.message);
                Err(AccountClientError::Upstream { status, message })
            }
        }
    }
}

fn into_auth_result(reply: CreateUserResponse) -> Result<AuthResult, AccountClientError> {
    match (reply.success, reply.authtoken) {
        (true, Some(token)) => Ok(AuthResult::Created { token }),
        (true, None) => Err(AccountClientError::Decode(
            "success reply is missing authtoken".to_string(),
        )),
        (false, _) => Ok(AuthResult::Rejected),
    }
}

#[async_trait]
impl AccountProvider for AccountClient {
    #[tracing::instrument(name = "create_account", skip_all, fields(endpoint = %self.endpoint))]
    async fn create_account(&self, req: CreateAccountRequest) -> Result<AuthResult, AccountError> {
        let result = self.send(&req).await;
        if let Err(err) = &result {
            tracing::warn!(error = %err, "account request did not complete.");
        }
        result.map_err(AccountError::from)
    }
}
