// Local stand-in for the account service used by the integration tests.
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

pub const TAKEN_EMAIL: &str = "taken@example.com";
pub const BROKEN_EMAIL: &str = "boom@example.com";

// A recorded request: content type plus the raw JSON body.
#[derive(Clone, Debug)]
pub struct Recorded {
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone, Default)]
struct StubState {
    requests: Arc<Mutex<Vec<Recorded>>>,
}

pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl StubServer {
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("requests mutex poisoned").clone()
    }
}

async fn create_user(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state
        .requests
        .lock()
        .expect("requests mutex poisoned")
        .push(Recorded {
            content_type,
            body: body.clone(),
        });

    match body["email"].as_str() {
        Some(TAKEN_EMAIL) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "error": "Sorry a user with this email already exists"
            })),
        )
            .into_response(),
        Some(BROKEN_EMAIL) => (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response(),
        _ => {
            let name = body["name"].as_str().unwrap_or_default().replace(' ', "-");
            Json(json!({
                "success": true,
                "authtoken": format!("token-for-{name}")
            }))
            .into_response()
        }
    }
}

// Serve the stub on an ephemeral port for the lifetime of the test runtime.
pub async fn spawn_stub() -> StubServer {
    let state = StubState::default();
    let requests = state.requests.clone();
    let app = Router::new()
        .route("/api/auth/createuser", post(create_user))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server failed");
    });

    StubServer {
        base_url: format!("http://{addr}"),
        requests,
    }
}

// Base URL that nothing listens on.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    drop(listener);
    format!("http://{addr}")
}
