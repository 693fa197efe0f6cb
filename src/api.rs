//! REST API Client
//!
//! One-shot `fetch` wrappers for the todo API. No retry, no batching, no
//! timeouts: every call is a single request/response exchange and every
//! failure is reported to the caller as an [`ApiError`].

use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::models::{Column, Todo, User};
use crate::session::Session;

/// Fallback base URL when `TODO_API_URL` is not set at build time
const DEFAULT_API_URL: &str = "/api";

fn api_url() -> &'static str {
    option_env!("TODO_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Everything that can go wrong with an API call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    Network(String),
    /// Non-success HTTP status, with the server message when one was sent
    Status { status: u16, message: String },
    /// The response body did not have the expected shape
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ApiError::Status { status: 429, .. })
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Status { status, message } => write!(f, "HTTP {}: {}", status, message),
            ApiError::Decode(msg) => write!(f, "bad response: {}", msg),
        }
    }
}

// ========================
// Request/Response Bodies
// ========================

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterArgs<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
pub struct CreateTodoArgs<'a> {
    pub content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<Column>,
}

#[derive(Serialize)]
pub struct UpdateTodoArgs<'a> {
    pub content: &'a str,
    pub done: bool,
}

#[derive(Serialize, Default)]
pub struct PatchTodoArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<Column>,
}

#[derive(Deserialize)]
struct TokenBody {
    token: Option<String>,
}

#[derive(Deserialize)]
struct CreatedBody {
    id: i64,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

// ========================
// Auth Endpoints
// ========================

/// `POST /login`, returns the bearer token
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    let body = encode_body(&LoginArgs { email, password })?;
    let (status, text) = send("POST", "/login", None, Some(body)).await?;
    let text = ensure_ok(status, text, "Login failed")?;
    let parsed: TokenBody = decode_body(&text)?;
    parsed
        .token
        .ok_or_else(|| ApiError::Decode("response carried no token".to_string()))
}

/// `POST /register`, creates an account; no token is returned
pub async fn register(username: &str, email: &str, password: &str) -> Result<(), ApiError> {
    let body = encode_body(&RegisterArgs {
        username,
        email,
        password,
    })?;
    let (status, text) = send("POST", "/register", None, Some(body)).await?;
    ensure_ok(status, text, "Registration failed")?;
    Ok(())
}

/// `GET /me`, the current user profile
pub async fn me(session: &Session) -> Result<User, ApiError> {
    let (status, text) = send("GET", "/me", Some(session), None).await?;
    let text = ensure_ok(status, text, "Could not load your profile")?;
    decode_body(&text)
}

// ========================
// Todo Endpoints
// ========================

/// `GET /todo`, all todos for the current user
pub async fn list_todos(session: &Session) -> Result<Vec<Todo>, ApiError> {
    let (status, text) = send("GET", "/todo", Some(session), None).await?;
    let text = ensure_ok(status, text, "Could not load tasks")?;
    decode_body(&text)
}

/// `POST /todo`, returns the id assigned by the server
pub async fn create_todo(session: &Session, args: &CreateTodoArgs<'_>) -> Result<i64, ApiError> {
    let body = encode_body(args)?;
    let (status, text) = send("POST", "/todo", Some(session), Some(body)).await?;
    let text = ensure_ok(status, text, "Could not create the task")?;
    let created: CreatedBody = decode_body(&text)?;
    Ok(created.id)
}

/// `GET /todo/:id`
pub async fn get_todo(session: &Session, id: i64) -> Result<Todo, ApiError> {
    let (status, text) = send("GET", &format!("/todo/{}", id), Some(session), None).await?;
    let text = ensure_ok(status, text, "Could not load the task")?;
    decode_body(&text)
}

/// `PUT /todo/:id`, full update of content and done flag
pub async fn update_todo(
    session: &Session,
    id: i64,
    args: &UpdateTodoArgs<'_>,
) -> Result<(), ApiError> {
    let body = encode_body(args)?;
    let (status, text) = send("PUT", &format!("/todo/{}", id), Some(session), Some(body)).await?;
    ensure_ok(status, text, "Could not update the task")?;
    Ok(())
}

/// `PATCH /todo/:id`, partial update of content and/or column
pub async fn patch_todo(
    session: &Session,
    id: i64,
    args: &PatchTodoArgs<'_>,
) -> Result<(), ApiError> {
    let body = encode_body(args)?;
    let (status, text) = send("PATCH", &format!("/todo/{}", id), Some(session), Some(body)).await?;
    ensure_ok(status, text, "Could not update the task")?;
    Ok(())
}

/// `DELETE /todo/:id`
pub async fn delete_todo(session: &Session, id: i64) -> Result<(), ApiError> {
    let (status, text) = send("DELETE", &format!("/todo/{}", id), Some(session), None).await?;
    ensure_ok(status, text, "Could not delete the task")?;
    Ok(())
}

// ========================
// Plumbing
// ========================

fn encode_body<T: Serialize>(args: &T) -> Result<String, ApiError> {
    serde_json::to_string(args).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode_body<T: for<'de> Deserialize<'de>>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pass the body through on 2xx, otherwise surface the server-provided
/// `{ message }` or the per-call fallback.
fn ensure_ok(status: u16, text: String, fallback: &str) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        return Ok(text);
    }
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.message)
        .unwrap_or_else(|_| fallback.to_string());
    Err(ApiError::Status { status, message })
}

fn js_error_message(value: JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .unwrap_or_else(|| format!("{:?}", value))
}

fn network(value: JsValue) -> ApiError {
    ApiError::Network(js_error_message(value))
}

/// Issue one request and return the raw status and body text
async fn send(
    method: &str,
    path: &str,
    session: Option<&Session>,
    body: Option<String>,
) -> Result<(u16, String), ApiError> {
    let init = RequestInit::new();
    init.set_method(method);

    let headers = Headers::new().map_err(network)?;
    if body.is_some() {
        headers.set("Content-Type", "application/json").map_err(network)?;
    }
    if let Some(session) = session {
        headers.set("Authorization", &session.bearer()).map_err(network)?;
    }
    init.set_headers(&headers);
    if let Some(body) = &body {
        init.set_body(&JsValue::from_str(body));
    }

    let url = format!("{}{}", api_url(), path);
    let request = Request::new_with_str_and_init(&url, &init).map_err(network)?;
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch returned a non-response".to_string()))?;

    let status = response.status();
    let text_promise = response.text().map_err(network)?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(network)?
        .as_string()
        .unwrap_or_default();

    Ok((status, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_ok_passes_success_body_through() {
        let result = ensure_ok(200, "{\"id\":1}".to_string(), "failed");
        assert_eq!(result, Ok("{\"id\":1}".to_string()));
    }

    #[test]
    fn test_ensure_ok_prefers_server_message() {
        let err = ensure_ok(422, "{\"message\":\"content too long\"}".to_string(), "failed")
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 422,
                message: "content too long".to_string()
            }
        );
    }

    #[test]
    fn test_ensure_ok_falls_back_on_opaque_body() {
        let err = ensure_ok(500, "<html>".to_string(), "Could not load tasks").unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: "Could not load tasks".to_string()
            }
        );
    }

    #[test]
    fn test_status_classification() {
        let unauthorized = ensure_ok(403, String::new(), "x").unwrap_err();
        assert!(unauthorized.is_unauthorized());
        assert!(!unauthorized.is_rate_limited());

        let limited = ensure_ok(429, String::new(), "x").unwrap_err();
        assert!(limited.is_rate_limited());
        assert!(!limited.is_unauthorized());
    }

    #[test]
    fn test_patch_args_omit_unset_fields() {
        let args = PatchTodoArgs {
            column: Some(Column::Done),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&args).unwrap(), "{\"column\":2}");

        let args = PatchTodoArgs {
            content: Some("new text"),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&args).unwrap(),
            "{\"content\":\"new text\"}"
        );
    }
}
