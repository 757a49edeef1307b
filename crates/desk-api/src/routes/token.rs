use axum::{extract::State, routing::post, Json, Router};
use desk_types::{TokenRequest, TokenResponse};

use crate::error::ApiError;
use crate::extract::Payload;
use crate::middleware::auth::AppState;

pub fn routes(_state: AppState) -> Router<AppState> {
    Router::new().route("/users/token", post(create_token))
}

async fn create_token(
    State(state): State<AppState>,
    Payload(body): Payload<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state.tokens.issue_token(body).await?;
    Ok(Json(TokenResponse { token }))
}
