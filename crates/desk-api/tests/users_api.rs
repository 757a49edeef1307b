mod support;

use axum::http::{Method, StatusCode};
use serde_json::json;
use support::*;

const CREATE_USER_URL: &str = "/users/create";

#[tokio::test]
async fn create_valid_user_success() {
    let state = test_state();
    let app = app(&state);

    let payload = json!({
        "email": "test@ukraine.gov",
        "password": "test123",
        "name": "johngalt",
    });
    let response = send(&app, json_request(Method::POST, CREATE_USER_URL, &payload)).await;

    assert_eq!(response.status, StatusCode::CREATED);
    let body = response.json();
    assert_eq!(body["email"], "test@ukraine.gov");
    assert_eq!(body["name"], "johngalt");
    assert!(body["id"].is_u64());
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());

    let account = state
        .accounts
        .find_by_email("test@ukraine.gov")
        .await
        .unwrap()
        .expect("account was not stored");
    assert_eq!(body["id"], account.id);
    assert!(desk_accounts::password::verify_password("test123", &account.password_hash));
}

#[tokio::test]
async fn name_is_optional() {
    let state = test_state();
    let app = app(&state);

    let payload = json!({"email": "noname@ukraine.gov", "password": "test123"});
    let response = send(&app, json_request(Method::POST, CREATE_USER_URL, &payload)).await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json()["name"], "");
}

#[tokio::test]
async fn duplicate_user_fails() {
    let state = test_state();
    let app = app(&state);
    create_user(&state, "test@ukraine.gov", "testPass", "").await;

    let payload = json!({"email": "test@ukraine.gov", "password": "testPass"});
    let response = send(&app, json_request(Method::POST, CREATE_USER_URL, &payload)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json()["fields"]["email"][0],
        "user with this email already exists."
    );

    let matching = state
        .accounts
        .list()
        .await
        .unwrap()
        .into_iter()
        .filter(|a| a.email == "test@ukraine.gov")
        .count();
    assert_eq!(matching, 1);
}

#[tokio::test]
async fn duplicate_check_uses_normalized_domain() {
    let state = test_state();
    let app = app(&state);
    create_user(&state, "test@ukraine.gov", "testPass", "").await;

    let payload = json!({"email": "test@UKRAINE.GOV", "password": "testPass"});
    let response = send(&app, json_request(Method::POST, CREATE_USER_URL, &payload)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn password_too_short_error_returned() {
    let state = test_state();
    let app = app(&state);

    let payload = json!({"email": "test@ukraine.gov", "name": "test", "password": "pass"});
    let response = send(&app, json_request(Method::POST, CREATE_USER_URL, &payload)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json()["fields"]["password"][0],
        "Ensure this field has at least 5 characters."
    );
}

#[tokio::test]
async fn password_too_short_user_not_created() {
    let state = test_state();
    let app = app(&state);

    let payload = json!({"email": "test@ukraine.gov", "name": "test", "password": "pass"});
    send(&app, json_request(Method::POST, CREATE_USER_URL, &payload)).await;

    let exists = state
        .accounts
        .find_by_email("test@ukraine.gov")
        .await
        .unwrap()
        .is_some();
    assert!(!exists);
}

#[tokio::test]
async fn missing_fields_are_reported_together() {
    let state = test_state();
    let app = app(&state);

    let response = send(&app, json_request(Method::POST, CREATE_USER_URL, &json!({}))).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json();
    assert_eq!(body["fields"]["email"][0], "This field is required.");
    assert_eq!(body["fields"]["password"][0], "This field is required.");
    assert!(state.accounts.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn invalid_email_rejected() {
    let state = test_state();
    let app = app(&state);

    let payload = json!({"email": "not-an-email", "password": "test123"});
    let response = send(&app, json_request(Method::POST, CREATE_USER_URL, &payload)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["fields"]["email"][0], "Enter a valid email address.");
}

#[tokio::test]
async fn profile_requires_token() {
    let state = test_state();
    let app = app(&state);

    let response = send(&app, page_request("/users/me", None)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = send(
        &app,
        authorized_json_request(Method::GET, "/users/me", "not-a-token", None),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn profile_read_and_update() {
    let state = test_state();
    let app = app(&state);
    create_user(&state, "test@ukraine.gov", "test123", "johngalt").await;

    let issued = send(
        &app,
        json_request(
            Method::POST,
            "/users/token",
            &json!({"email": "test@ukraine.gov", "password": "test123"}),
        ),
    )
    .await;
    let token = issued.json()["token"].as_str().unwrap().to_string();

    let me = send(
        &app,
        authorized_json_request(Method::GET, "/users/me", &token, None),
    )
    .await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.json()["email"], "test@ukraine.gov");
    assert_eq!(me.json()["name"], "johngalt");

    let updated = send(
        &app,
        authorized_json_request(
            Method::PATCH,
            "/users/me",
            &token,
            Some(&json!({"name": "new name", "password": "newpassword"})),
        ),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.json()["name"], "new name");
    assert!(updated.json().get("password").is_none());

    let account = state
        .accounts
        .authenticate("test@ukraine.gov", "newpassword")
        .await
        .unwrap();
    assert!(account.is_some());
}

#[tokio::test]
async fn profile_update_rejects_short_password() {
    let state = test_state();
    let app = app(&state);
    create_user(&state, "test@ukraine.gov", "test123", "").await;
    let token = state
        .tokens
        .issue_token(desk_types::TokenRequest {
            email: Some("test@ukraine.gov".into()),
            password: Some("test123".into()),
        })
        .await
        .unwrap();

    let response = send(
        &app,
        authorized_json_request(
            Method::PATCH,
            "/users/me",
            &token,
            Some(&json!({"password": "abc"})),
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json()["fields"]["password"].is_array());
}

#[tokio::test]
async fn form_encoded_signup_is_accepted() {
    let state = test_state();
    let app = app(&state);

    let form = "email=test%40ukraine.gov&password=test123&name=johngalt";
    let response = send(&app, form_request(CREATE_USER_URL, form, None)).await;

    assert_eq!(response.status, StatusCode::CREATED);
    let body = response.json();
    assert_eq!(body["email"], "test@ukraine.gov");
    assert_eq!(body["name"], "johngalt");
    assert!(body.get("password").is_none());
    assert!(state.accounts.find_by_email("test@ukraine.gov").await.unwrap().is_some());
}

#[tokio::test]
async fn wrong_field_type_is_a_validation_error() {
    let state = test_state();
    let app = app(&state);

    let payload = json!({"email": 123, "password": "test123"});
    let response = send(&app, json_request(Method::POST, CREATE_USER_URL, &payload)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json();
    assert_eq!(body["error"], "validation failed");
    assert!(body["fields"]["email"][0].is_string());
    assert!(body["fields"].get("password").is_none());
    assert!(state.accounts.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_json_is_a_validation_error() {
    let state = test_state();
    let app = app(&state);

    let response = send(&app, raw_request(CREATE_USER_URL, "application/json", "{not json")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json();
    assert_eq!(body["error"], "validation failed");
    assert!(body["fields"]["non_field_errors"][0].is_string());
}

#[tokio::test]
async fn unsupported_body_is_a_validation_error() {
    let state = test_state();
    let app = app(&state);

    let response = send(&app, raw_request(CREATE_USER_URL, "text/plain", "hello")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json()["fields"]["non_field_errors"][0].is_string());
}

#[tokio::test]
async fn whitespace_password_is_rejected() {
    let state = test_state();
    let app = app(&state);

    let payload = json!({"email": "blank@ukraine.gov", "password": "     "});
    let response = send(&app, json_request(Method::POST, CREATE_USER_URL, &payload)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["fields"]["password"][0], "This field is required.");
    assert!(state.accounts.find_by_email("blank@ukraine.gov").await.unwrap().is_none());
}
