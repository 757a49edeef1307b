use axum::{
    extract::{Path, State},
    middleware,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Extension, Form, Router,
};
use desk_accounts::{Account, AccountError};
use desk_types::{AccountDetail, AdminAccountUpdate, CreateAccountRequest, FieldErrors};
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::auth::{require_admin, AppState};

#[derive(Deserialize)]
struct CreateForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    password1: String,
    #[serde(default)]
    password2: String,
}

/// Unchecked boxes are simply absent from the submission.
#[derive(Deserialize)]
struct EditForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    name: String,
    is_active: Option<String>,
    is_staff: Option<String>,
    is_superuser: Option<String>,
}

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/admin", get(admin_index))
        .route("/admin/users", get(list_users))
        .route("/admin/users/create", get(create_form).post(create_user))
        .route("/admin/users/:id/edit", get(edit_form).post(edit_user))
        .route_layer(middleware::from_fn_with_state(state, require_admin))
}

async fn admin_index() -> Redirect {
    Redirect::to("/admin/users")
}

async fn list_users(
    State(state): State<AppState>,
    Extension(admin): Extension<Account>,
) -> Result<Html<String>, ApiError> {
    let accounts: Vec<AccountDetail> = state
        .accounts
        .list()
        .await?
        .iter()
        .map(Account::to_detail)
        .collect();

    Ok(Html(desk_ui::render_user_list(admin.email, accounts)))
}

async fn create_form(Extension(admin): Extension<Account>) -> Html<String> {
    Html(desk_ui::render_user_create(
        admin.email,
        String::new(),
        String::new(),
        FieldErrors::new(),
    ))
}

async fn create_user(
    State(state): State<AppState>,
    Extension(admin): Extension<Account>,
    Form(form): Form<CreateForm>,
) -> Result<Response, ApiError> {
    let request = CreateAccountRequest {
        email: Some(form.email.clone()),
        password: Some(form.password1),
        name: Some(form.name.clone()),
    };

    match state.accounts.create_confirmed(request, &form.password2).await {
        Ok(account) => {
            Ok(Redirect::to(&format!("/admin/users/{}/edit", account.id)).into_response())
        }
        Err(AccountError::Validation(errors)) => Ok(Html(desk_ui::render_user_create(
            admin.email,
            form.email,
            form.name,
            errors,
        ))
        .into_response()),
        Err(e) => Err(e.into()),
    }
}

async fn edit_form(
    State(state): State<AppState>,
    Extension(admin): Extension<Account>,
    Path(id): Path<u64>,
) -> Result<Html<String>, ApiError> {
    let account = state.accounts.get(id).await?;
    Ok(Html(desk_ui::render_user_edit(
        admin.email,
        account.to_detail(),
        FieldErrors::new(),
    )))
}

async fn edit_user(
    State(state): State<AppState>,
    Extension(admin): Extension<Account>,
    Path(id): Path<u64>,
    Form(form): Form<EditForm>,
) -> Result<Response, ApiError> {
    let update = AdminAccountUpdate {
        email: form.email,
        name: form.name,
        is_active: form.is_active.is_some(),
        is_staff: form.is_staff.is_some(),
        is_superuser: form.is_superuser.is_some(),
    };

    match state.accounts.admin_update(id, update.clone()).await {
        Ok(_) => Ok(Redirect::to("/admin/users").into_response()),
        Err(AccountError::Validation(errors)) => {
            let submitted = AccountDetail {
                id,
                email: update.email,
                name: update.name,
                is_active: update.is_active,
                is_staff: update.is_staff,
                is_superuser: update.is_superuser,
            };
            Ok(Html(desk_ui::render_user_edit(admin.email, submitted, errors)).into_response())
        }
        Err(e) => Err(e.into()),
    }
}
