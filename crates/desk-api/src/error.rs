use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use desk_accounts::AccountError;
use desk_types::ErrorResponse;
use tracing::error;

/// Handler error: wraps the service error and picks the HTTP status.
#[derive(Debug)]
pub struct ApiError(pub AccountError);

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            AccountError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_fields("validation failed", fields),
            ),
            AccountError::Authentication(fields) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_fields("unable to authenticate with provided credentials", fields),
            ),
            AccountError::Unauthenticated => {
                let mut response = (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse::new(AccountError::Unauthenticated.to_string())),
                )
                    .into_response();
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Token"));
                return response;
            }
            err @ AccountError::Forbidden => (StatusCode::FORBIDDEN, ErrorResponse::new(err.to_string())),
            err @ AccountError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorResponse::new(err.to_string())),
            err @ (AccountError::Hashing(_) | AccountError::Store(_)) => {
                error!("request failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
