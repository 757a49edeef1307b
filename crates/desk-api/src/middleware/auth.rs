use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use desk_accounts::{
    session::ADMIN_LOGIN_FAILED, Account, AccountError, AccountPolicy, AccountService,
    MemoryStore, SessionService, TokenPolicy, TokenService,
};
use http::header;
use serde::Deserialize;
use tracing::info;

use crate::error::ApiError;

pub const SESSION_COOKIE: &str = "session_token";

const DEFAULT_ADMIN_PAGE: &str = "/admin/users";

#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
    pub tokens: TokenService,
    pub sessions: SessionService,
    pub secure_cookies: bool,
}

impl AppState {
    /// All services backed by one shared in-memory store.
    pub fn in_memory(
        accountPolicy: AccountPolicy,
        tokenPolicy: TokenPolicy,
        secureCookies: bool,
    ) -> Self {
        let store = Arc::new(MemoryStore::new());
        let accounts = AccountService::new(store.clone(), accountPolicy);
        let tokens = TokenService::new(accounts.clone(), store.clone(), tokenPolicy);
        let sessions = SessionService::new(accounts.clone(), store);

        Self {
            accounts,
            tokens,
            sessions,
            secure_cookies: secureCookies,
        }
    }
}

#[derive(Deserialize, Default)]
struct LoginQuery {
    #[serde(default)]
    next: Option<String>,
}

#[derive(Deserialize)]
struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    next: String,
}

pub fn auth_routes(_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/admin/login", get(login_page).post(handle_login))
        .route("/admin/logout", post(handle_logout))
}

async fn login_page(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<LoginQuery>,
) -> Response {
    let next = safe_next(query.next.as_deref());

    if let Ok(Some(account)) = session_account(&state, &jar).await {
        if account.can_administer() {
            return Redirect::to(&next).into_response();
        }
    }

    Html(desk_ui::render_login(None, String::new(), next)).into_response()
}

async fn handle_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let next = safe_next(Some(&form.next));

    match state.sessions.login(&form.email, &form.password).await {
        Ok((key, _)) => {
            let cookie = Cookie::build((SESSION_COOKIE, key))
                .path("/")
                .http_only(true)
                .secure(state.secure_cookies)
                .same_site(SameSite::Strict);
            (jar.add(cookie), Redirect::to(&next)).into_response()
        }
        Err(AccountError::Authentication(_)) => Html(desk_ui::render_login(
            Some(ADMIN_LOGIN_FAILED.into()),
            form.email,
            next,
        ))
        .into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

async fn handle_logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Err(e) = state.sessions.logout(cookie.value()).await {
            return ApiError(e).into_response();
        }
        info!("admin session closed");
    }

    let removal = Cookie::build(SESSION_COOKIE).path("/");
    (jar.remove(removal), Redirect::to("/admin/login")).into_response()
}

async fn session_account(state: &AppState, jar: &CookieJar) -> Result<Option<Account>, AccountError> {
    match jar.get(SESSION_COOKIE) {
        Some(cookie) => state.sessions.account_for_session(cookie.value()).await,
        None => Ok(None),
    }
}

/// Only local admin paths are followed after login.
fn safe_next(next: Option<&str>) -> String {
    match next {
        Some(path)
            if path.starts_with("/admin/")
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.starts_with("/admin/login")
                && !path.starts_with("/admin/logout") =>
        {
            path.to_string()
        }
        _ => DEFAULT_ADMIN_PAGE.to_string(),
    }
}

/// Middleware for token-protected API routes: `Authorization: Token <key>`
/// (or `Bearer <key>`). The resolved account is added to request extensions.
pub async fn require_api_auth(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(extract_token)
        .map(str::to_string);

    let Some(token) = presented else {
        return ApiError(AccountError::Unauthenticated).into_response();
    };

    match state.tokens.account_for_token(&token).await {
        Ok(account) => {
            request.extensions_mut().insert(account);
            next.run(request).await
        }
        Err(e) => ApiError(e).into_response(),
    }
}

/// Middleware for admin pages: anonymous callers go to the login page,
/// signed-in accounts without superuser rights get 403.
pub async fn require_admin(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let account = match session_account(&state, &jar).await {
        Ok(account) => account,
        Err(e) => return ApiError(e).into_response(),
    };

    let Some(account) = account else {
        let path = request.uri().path();
        return Redirect::to(&format!("/admin/login?next={path}")).into_response();
    };

    match account.ensure_admin() {
        Ok(()) => {
            request.extensions_mut().insert(account);
            next.run(request).await
        }
        Err(AccountError::Forbidden) => {
            (StatusCode::FORBIDDEN, Html(desk_ui::render_forbidden())).into_response()
        }
        Err(e) => ApiError(e).into_response(),
    }
}

fn extract_token(authHeader: &str) -> Option<&str> {
    let (scheme, token) = authHeader.trim().split_once(' ')?;
    let token = token.trim();
    let knownScheme =
        scheme.eq_ignore_ascii_case("token") || scheme.eq_ignore_ascii_case("bearer");

    (knownScheme && !token.is_empty()).then_some(token)
}
