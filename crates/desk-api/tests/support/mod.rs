#![allow(dead_code)]

use axum::{
    body::{self, Body, Bytes},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use desk_accounts::{Account, AccountPolicy, TokenPolicy};
use desk_api::middleware::auth::{AppState, SESSION_COOKIE};
use desk_types::CreateAccountRequest;
use serde_json::Value;
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@ukraine.gov";
pub const ADMIN_PASSWORD: &str = "password123";

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// `session_token=<key>` from the Set-Cookie header, ready for a Cookie header.
    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .find(|pair| pair.starts_with(&format!("{SESSION_COOKIE}=")))
            .filter(|pair| pair.len() > SESSION_COOKIE.len() + 1)
            .map(str::to_string)
    }
}

pub fn test_state() -> AppState {
    AppState::in_memory(AccountPolicy::default(), TokenPolicy::default(), false)
}

pub fn app(state: &AppState) -> Router {
    desk_api::api_router(state.clone())
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn json_request(method: Method, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

/// POST with an arbitrary body, for payloads `json!` cannot express.
pub fn raw_request(uri: &str, content_type: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn authorized_json_request(
    method: Method,
    uri: &str,
    token: &str,
    payload: Option<&Value>,
) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Token {token}"));

    match payload {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(payload).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub fn page_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn form_request(uri: &str, form: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

pub async fn create_user(state: &AppState, email: &str, password: &str, name: &str) -> Account {
    state
        .accounts
        .create_account(CreateAccountRequest {
            email: Some(email.into()),
            password: Some(password.into()),
            name: Some(name.into()),
        })
        .await
        .unwrap()
}

pub async fn create_superuser(state: &AppState, email: &str, password: &str) -> Account {
    state
        .accounts
        .create_superuser(CreateAccountRequest {
            email: Some(email.into()),
            password: Some(password.into()),
            name: None,
        })
        .await
        .unwrap()
}

/// Logs in through the admin form and returns the session cookie.
pub async fn admin_login(app: &Router, email: &str, password: &str) -> String {
    let form = format!(
        "email={}&password={password}",
        email.replace('@', "%40")
    );
    let response = send(app, form_request("/admin/login", &form, None)).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    response.session_cookie().expect("login did not set a session cookie")
}
