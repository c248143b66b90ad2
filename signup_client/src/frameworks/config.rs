use directories::ProjectDirs;
use std::{env, path::PathBuf, time::Duration};

// Runtime constants and environment lookups for the client.

pub const DEFAULT_AUTH_HOST: &str = "http://localhost:5000";
pub const DEFAULT_APP_URL: &str = "http://localhost:3000";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn auth_host() -> String {
    env::var("AUTH_HOST").unwrap_or_else(|_| DEFAULT_AUTH_HOST.to_string())
}

// Where the web app lives; only used to show the redirect target.
pub fn app_url() -> String {
    env::var("APP_URL").unwrap_or_else(|_| DEFAULT_APP_URL.to_string())
}

pub fn auth_request_timeout() -> Duration {
    parse_timeout_ms(env::var("AUTH_REQUEST_TIMEOUT_MS").ok().as_deref())
}

pub fn storage_file() -> PathBuf {
    env::var_os("SIGNUP_STORAGE_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(default_storage_file)
}

fn parse_timeout_ms(value: Option<&str>) -> Duration {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|millis| *millis > 0)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT)
}

fn default_storage_file() -> PathBuf {
    ProjectDirs::from("", "", "signup")
        .map(|dirs| dirs.data_dir().join("storage.json"))
        .unwrap_or_else(|| PathBuf::from(".signup").join("storage.json"))
}
