#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::Value;
use tower::ServiceExt;

use jot_api::auth::{generate_jwt, hash_password, Claims};
use jot_api::config::AppConfig;
use jot_api::database::models::{NewUser, User};
use jot_api::database::{MemoryStore, Store};
use jot_api::AppState;

/// Router over a fresh in-memory store, driven in-process
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub config: AppConfig,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or_else(|e| panic!("body is not JSON ({e}): {}", self.body))
    }

    /// The `data` array of a success envelope
    pub fn data_array(&self) -> Vec<Value> {
        let body = self.json();
        assert_eq!(body["success"], true, "not a success envelope: {}", self.body);
        body["data"].as_array().cloned().unwrap_or_else(|| panic!("data should be an array: {}", self.body))
    }
}

impl TestApp {
    pub fn new() -> Self {
        let mut config = AppConfig::development();
        config.api.enable_request_logging = false;
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        let router = jot_api::app(AppState::new(store.clone(), config.clone()));
        Self { router, store, config }
    }

    /// Insert a user directly. The password hash is a placeholder, so use
    /// `user_with_password` when the test logs in.
    pub async fn user(&self, username: &str) -> User {
        self.insert(username, "unused".to_string()).await
    }

    pub async fn user_with_password(&self, username: &str, password: &str) -> User {
        let hash = hash_password(password).expect("hash password");
        self.insert(username, hash).await
    }

    async fn insert(&self, username: &str, password_hash: String) -> User {
        self.store
            .insert_user(NewUser {
                username: username.to_string(),
                email: format!("{username}@example.com"),
                password_hash,
            })
            .await
            .expect("insert user")
    }

    pub fn token_for(&self, user: &User) -> String {
        generate_jwt(&Claims::new(user, 1), &self.config.security).expect("generate token")
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> Result<TestResponse> {
        self.send(Method::GET, path, token, None).await
    }

    pub async fn post_json(&self, path: &str, token: Option<&str>, body: Value) -> Result<TestResponse> {
        self.send(Method::POST, path, token, Some(body)).await
    }

    /// POST an arbitrary body, optionally with a content type
    pub async fn post_raw(&self, path: &str, content_type: Option<&str>, body: &str) -> Result<TestResponse> {
        let mut builder = Request::builder().method(Method::POST).uri(path);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(Body::from(body.to_string()))?;
        self.dispatch(request).await
    }

    pub async fn send(&self, method: Method, path: &str, token: Option<&str>, body: Option<Value>) -> Result<TestResponse> {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: Request<Body>) -> Result<TestResponse> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        Ok(TestResponse {
            status,
            body: String::from_utf8(bytes.to_vec())?,
        })
    }
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Ids of the records in a `data` array
pub fn ids(records: &[Value]) -> Vec<i64> {
    records.iter().map(|r| r["id"].as_i64().expect("numeric id")).collect()
}
