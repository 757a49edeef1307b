use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use desk_accounts::Account;
use desk_types::{CreateAccountRequest, PublicAccount, UpdateProfileRequest};

use crate::error::ApiError;
use crate::extract::Payload;
use crate::middleware::auth::{require_api_auth, AppState};

pub fn routes(state: AppState) -> Router<AppState> {
    let profileRoutes = Router::new()
        .route("/users/me", get(get_profile).patch(update_profile))
        .route_layer(middleware::from_fn_with_state(state, require_api_auth));

    Router::new()
        .route("/users/create", post(create_user))
        .merge(profileRoutes)
}

async fn create_user(
    State(state): State<AppState>,
    Payload(body): Payload<CreateAccountRequest>,
) -> Result<(StatusCode, Json<PublicAccount>), ApiError> {
    let account = state.accounts.create_account(body).await?;
    Ok((StatusCode::CREATED, Json(account.to_public())))
}

async fn get_profile(Extension(account): Extension<Account>) -> Json<PublicAccount> {
    Json(account.to_public())
}

async fn update_profile(
    State(state): State<AppState>,
    Extension(account): Extension<Account>,
    Payload(body): Payload<UpdateProfileRequest>,
) -> Result<Json<PublicAccount>, ApiError> {
    let updated = state.accounts.update_profile(account.id, body).await?;
    Ok(Json(updated.to_public()))
}
