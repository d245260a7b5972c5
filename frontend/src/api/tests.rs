#![cfg(not(coverage))]

use super::*;
use httpmock::prelude::*;
use serde_json::json;

fn credentials() -> Credentials {
    Credentials::new("a@b.com", "x")
}

#[tokio::test]
async fn login_posts_email_and_password_and_parses_result() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/users/login")
                .json_body(json!({ "email": "a@b.com", "password": "x" }));
            then.status(200)
                .json_body(json!({ "role": "Student", "name": "Asha", "token": "t-1" }));
        })
        .await;

    let client = ApiClient::new_with_base_url(server.url("/api"));
    let result = client.login(&credentials()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.role, Role::Student);
    assert_eq!(result.field("token"), Some(&json!("t-1")));
}

#[tokio::test]
async fn login_maps_not_found_and_bad_request() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/users/login")
                .json_body(json!({ "email": "ghost@b.com", "password": "x" }));
            then.status(404).json_body(json!({ "message": "no such user" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/users/login")
                .json_body(json!({ "email": "a@b.com", "password": "wrong" }));
            then.status(400).json_body(json!({ "message": "bad password" }));
        })
        .await;

    let client = ApiClient::new_with_base_url(server.base_url());

    let missing = client
        .login(&Credentials::new("ghost@b.com", "x"))
        .await
        .unwrap_err();
    assert_eq!(missing, LoginError::UserNotFound);
    assert_eq!(missing.to_string(), "User not found. Please try again.");

    let wrong = client
        .login(&Credentials::new("a@b.com", "wrong"))
        .await
        .unwrap_err();
    assert_eq!(wrong, LoginError::IncorrectPassword);
    assert_eq!(wrong.to_string(), "Incorrect password. Please try again.");
}

#[tokio::test]
async fn login_treats_other_statuses_as_generic_failure() {
    for status in [401_u16, 403, 500, 502, 201] {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/users/login");
                then.status(status).json_body(json!({ "role": "Admin" }));
            })
            .await;

        let client = ApiClient::new_with_base_url(server.base_url());
        let error = client.login(&credentials()).await.unwrap_err();

        assert_eq!(mock.hits_async().await, 1, "status {status}");
        assert!(matches!(error, LoginError::Failed { .. }), "status {status}");
        assert_eq!(error.to_string(), "Login failed. Please try again.");
    }
}

#[tokio::test]
async fn login_without_body_is_a_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/users/login");
            then.status(200);
        })
        .await;

    let client = ApiClient::new_with_base_url(server.base_url());
    let error = client.login(&credentials()).await.unwrap_err();
    assert!(matches!(error, LoginError::Failed { .. }));
}

#[tokio::test]
async fn login_with_body_missing_role_succeeds_with_unknown_role() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/users/login");
            then.status(200).json_body(json!({ "name": "Asha" }));
        })
        .await;

    let client = ApiClient::new_with_base_url(server.base_url());
    let result = client.login(&credentials()).await.unwrap();
    assert_eq!(result.role, Role::Unknown(String::new()));
    assert_eq!(result.field("name"), Some(&json!("Asha")));
}

#[tokio::test]
async fn login_transport_error_is_a_failure() {
    // Nothing listens on the discard port.
    let client = ApiClient::new_with_base_url("http://127.0.0.1:9");
    let error = client.login(&credentials()).await.unwrap_err();
    match error {
        LoginError::Failed { detail } => assert!(detail.starts_with("Request failed")),
        other => panic!("unexpected error: {other:?}"),
    }
}
