use serde::{Deserialize, Serialize};

// JSON body for POST /api/auth/createuser.
#[derive(Debug, Serialize)]
pub struct CreateUserRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

// Reply from the account service. `authtoken` is only present on success.
#[derive(Debug, Deserialize)]
pub struct CreateUserResponse {
    pub success: bool,
    #[serde(default)]
    pub authtoken: Option<String>,
}

// Error envelope some deployments send alongside a failure status.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(alias = "error")]
    pub message: String,
}
