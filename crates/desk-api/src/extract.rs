use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header,
    Form, Json,
};
use desk_accounts::AccountError;
use desk_types::{FieldErrors, NON_FIELD_ERRORS};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Request body read from either a JSON or a urlencoded form post.
/// Every rejection becomes a 400 validation error.
pub struct Payload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| malformed(rejection.body_text()))?;
            return Ok(Payload(value));
        }

        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| malformed(rejection.body_text()))?;
        decode_json(value).map(Payload)
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"))
}

fn malformed(message: impl Into<String>) -> ApiError {
    ApiError(AccountError::field(NON_FIELD_ERRORS, message))
}

/// Decodes a JSON object into `T`. When that fails, each member is decoded
/// on its own so the error lands under the offending field.
fn decode_json<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    let members = match value {
        Value::Object(members) => members,
        other => {
            return Err(malformed(format!(
                "Invalid data. Expected a dictionary, but got {}.",
                json_kind(&other)
            )))
        }
    };

    let whole = match serde_json::from_value::<T>(Value::Object(members.clone())) {
        Ok(decoded) => return Ok(decoded),
        Err(e) => e,
    };

    let mut errors = FieldErrors::new();
    for (name, member) in members {
        let single = Map::from_iter([(name.clone(), member)]);
        if let Err(e) = serde_json::from_value::<T>(Value::Object(single)) {
            errors.entry(name).or_default().push(e.to_string());
        }
    }
    if errors.is_empty() {
        errors.insert(NON_FIELD_ERRORS.to_string(), vec![whole.to_string()]);
    }

    Err(ApiError(AccountError::Validation(errors)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
