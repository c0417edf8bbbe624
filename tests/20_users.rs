mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn create_user_then_duplicate() -> Result<()> {
    let app = common::TestApp::new();
    let body = json!({ "username": "alice", "password": "pw", "email": "a@x.com" });

    let res = app.post_json("/api/users", None, body.clone()).await?;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body, "User alice has been created.");

    let res = app.post_json("/api/users", None, body).await?;
    assert_eq!(res.status, StatusCode::CONFLICT);
    assert_eq!(res.body, "User already exists.");
    Ok(())
}

#[tokio::test]
async fn missing_fields_are_reported_in_order() -> Result<()> {
    let app = common::TestApp::new();

    let cases = [
        (json!({ "username": "", "password": "pw", "email": "a@x.com" }), "Missing Username"),
        (json!({ "password": "pw", "email": "a@x.com" }), "Missing Username"),
        (json!({}), "Missing Username"),
        (json!({ "username": "bob", "email": "b@x.com" }), "Missing Password"),
        (json!({ "username": "bob", "password": "", "email": "" }), "Missing Password"),
        (json!({ "username": "bob", "password": "pw" }), "Missing Email"),
    ];

    for (body, expected) in cases {
        let res = app.post_json("/api/users", None, body.clone()).await?;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(res.body, expected, "body {body}");
    }

    // Nothing was created along the way
    let alice = app.user("alice").await;
    let res = app.get("/api/users/bob", Some(&app.token_for(&alice))).await?;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn empty_username_wins_over_malformed_fields() -> Result<()> {
    let app = common::TestApp::new();

    let cases = [
        (Some("application/json"), r#"{"username": "", "password": "pw", "email": 5}"#),
        (Some("application/json"), r#"{"username": 42, "password": "pw", "email": "a@x.com"}"#),
        (Some("application/json"), "{not json"),
        (Some("application/json"), "[]"),
        (Some("application/json"), ""),
        (None, ""),
        (Some("text/plain"), "hello"),
        (Some("application/x-www-form-urlencoded"), "username=&password=pw&email=a%40x.com"),
    ];

    for (content_type, body) in cases {
        let res = app.post_raw("/api/users", content_type, body).await?;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{content_type:?} {body}");
        assert_eq!(res.body, "Missing Username", "{content_type:?} {body}");
    }
    Ok(())
}

#[tokio::test]
async fn non_string_sibling_counts_as_missing() -> Result<()> {
    let app = common::TestApp::new();

    let res = app
        .post_raw("/api/users", Some("application/json"), r#"{"username": "bob", "password": "pw", "email": 5}"#)
        .await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Missing Email");
    Ok(())
}

#[tokio::test]
async fn create_user_from_form_body() -> Result<()> {
    let app = common::TestApp::new();
    let form = "username=alice&password=pw&email=a%40x.com";

    let res = app.post_raw("/api/users", Some("application/x-www-form-urlencoded"), form).await?;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body, "User alice has been created.");

    let res = app.post_raw("/api/users", Some("application/x-www-form-urlencoded"), "username=bob&password=pw").await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body, "Missing Email");

    // The form-created account can log in
    let res = app
        .post_json("/auth/login", None, json!({ "username": "alice", "password": "pw" }))
        .await?;
    assert_eq!(res.status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn unknown_username_is_not_found() -> Result<()> {
    let app = common::TestApp::new();
    let alice = app.user("alice").await;

    let res = app.get("/api/users/ghost", Some(&app.token_for(&alice))).await?;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body, "ghost does't exist.");
    Ok(())
}

#[tokio::test]
async fn read_user_hides_password_hash() -> Result<()> {
    let app = common::TestApp::new();
    let alice = app.user("alice").await;
    app.user("bob").await;

    let res = app.get("/api/users/bob", Some(&app.token_for(&alice))).await?;
    assert_eq!(res.status, StatusCode::OK);
    let user = &res.json()["data"];
    assert_eq!(user["username"], "bob");
    assert_eq!(user["email"], "bob@example.com");
    assert!(user.get("password_hash").is_none(), "hash leaked: {}", res.body);
    Ok(())
}

#[tokio::test]
async fn read_user_requires_token() -> Result<()> {
    let app = common::TestApp::new();
    app.user("alice").await;

    let res = app.get("/api/users/alice", None).await?;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn users_only_allow_get_and_post() -> Result<()> {
    let app = common::TestApp::new();
    let alice = app.user("alice").await;
    let token = app.token_for(&alice);

    for method in [Method::PUT, Method::DELETE, Method::PATCH] {
        let res = app.send(method.clone(), "/api/users/alice", Some(&token), None).await?;
        assert_eq!(res.status, StatusCode::METHOD_NOT_ALLOWED, "{method}");
    }

    let res = app.get("/api/users", Some(&token)).await?;
    assert_eq!(res.status, StatusCode::METHOD_NOT_ALLOWED);
    Ok(())
}

#[tokio::test]
async fn created_user_can_log_in_and_read() -> Result<()> {
    let app = common::TestApp::new();
    let res = app
        .post_json("/api/users", None, json!({ "username": "carol", "password": "s3cret", "email": "c@x.com" }))
        .await?;
    assert_eq!(res.status, StatusCode::CREATED);

    let res = app
        .post_json("/auth/login", None, json!({ "username": "carol", "password": "s3cret" }))
        .await?;
    assert_eq!(res.status, StatusCode::OK);
    let data = &res.json()["data"];
    assert_eq!(data["token_type"], "Bearer");
    let token = data["token"].as_str().expect("token").to_string();

    let res = app.get("/api/contacts", Some(&token)).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.data_array().is_empty());
    Ok(())
}

#[tokio::test]
async fn login_rejects_wrong_password() -> Result<()> {
    let app = common::TestApp::new();
    app.user_with_password("dave", "right").await;

    let res = app
        .post_json("/auth/login", None, json!({ "username": "dave", "password": "wrong" }))
        .await?;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    let res = app
        .post_json("/auth/login", None, json!({ "username": "nobody", "password": "right" }))
        .await?;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn login_survives_oversized_token_lifetime() -> Result<()> {
    let mut config = jot_api::config::AppConfig::development();
    config.api.enable_request_logging = false;
    config.security.jwt_expiry_hours = u64::MAX;
    let app = common::TestApp::with_config(config);
    app.user_with_password("alice", "pw").await;

    let res = app.post_json("/auth/login", None, json!({ "username": "alice", "password": "pw" })).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["data"]["expires_in"], jot_api::config::MAX_JWT_EXPIRY_HOURS * 3600);
    Ok(())
}
