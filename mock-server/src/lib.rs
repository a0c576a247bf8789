use axum::{
    body::Bytes,
    extract::Path,
    http::{header, HeaderMap, StatusCode},
    response::{AppendHeaders, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Fixed JSON payload served by `/greet`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
    pub service: String,
}

/// Endpoints exercising an HTTP client: body echo, body-length echo,
/// request-header echo, a 302 redirect hop, and duplicate response
/// headers.
pub fn app() -> Router {
    Router::new()
        .route("/greet", get(greet))
        .route("/target", get(target))
        .route("/redirect", get(redirect))
        .route("/echo", post(echo))
        .route("/echo/len", post(echo_len))
        .route("/request-header/{name}", get(request_header))
        .route("/response-headers/dup", get(duplicate_headers))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn greet() -> Json<Greeting> {
    Json(Greeting {
        message: "hello".to_string(),
        service: "mock-server".to_string(),
    })
}

async fn target() -> &'static str {
    "landed"
}

/// Plain 302 so a non-following client sees the hop itself.
async fn redirect() -> impl IntoResponse {
    (
        StatusCode::FOUND,
        [(header::LOCATION, "/target")],
        "redirecting to /target",
    )
}

/// Echo the raw request body back, byte for byte.
async fn echo(body: Bytes) -> Bytes {
    body
}

/// Respond with the request body's byte length in decimal.
async fn echo_len(body: Bytes) -> String {
    body.len().to_string()
}

/// Echo the value of the named request header, or an empty body if the
/// header was not sent.
async fn request_header(Path(name): Path<String>, headers: HeaderMap) -> String {
    headers
        .get(name.as_str())
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

/// Two response headers with the same name, in a fixed order.
async fn duplicate_headers() -> impl IntoResponse {
    (
        AppendHeaders([("x-dup", "one"), ("x-dup", "two")]),
        "dup",
    )
}
