use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::auth::{hash_password, verify_password};
use crate::database::models::{NewUser, User};
use crate::database::{DatabaseError, Store};
use crate::error::ApiError;

/// Account creation input. Every field is optional at the type level so a
/// missing one is reported by `validate` rather than by the body parser.
#[derive(Debug, Clone, Default)]
pub struct CreateUser {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Error)]
pub enum UserError {
    #[error("{0} does't exist.")]
    NotFound(String),

    #[error("Missing Username")]
    MissingUsername,

    #[error("Missing Password")]
    MissingPassword,

    #[error("Missing Email")]
    MissingEmail,

    #[error("User already exists.")]
    AlreadyExists,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::not_found(err.to_string()),
            UserError::MissingUsername | UserError::MissingPassword | UserError::MissingEmail => {
                ApiError::bad_request(err.to_string())
            }
            UserError::AlreadyExists => ApiError::conflict(err.to_string()),
            UserError::InvalidCredentials => ApiError::unauthorized(err.to_string()),
            UserError::Hashing(msg) => {
                tracing::error!("Password hashing failed: {}", msg);
                ApiError::internal_server_error("Failed to create user")
            }
            UserError::Database(e) => e.into(),
        }
    }
}

/// Confirmation text returned after a successful creation
pub fn created_message(username: &str) -> String {
    format!("User {} has been created.", username)
}

/// Validated creation fields: (username, password, email)
pub type ValidatedFields<'a> = (&'a str, &'a str, &'a str);

impl CreateUser {
    /// Read the creation fields from a JSON or form-encoded body.
    ///
    /// Never fails: an unreadable body, a non-object JSON document or a
    /// non-string field all leave the affected fields unset.
    pub fn from_body(content_type: Option<&str>, body: &[u8]) -> Self {
        let is_json = content_type
            .and_then(|ct| ct.split(';').next())
            .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json(body)
        } else {
            Self::from_form(body)
        }
    }

    fn from_json(body: &[u8]) -> Self {
        let object = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(object)) => object,
            _ => return Self::default(),
        };
        let field = |name: &str| object.get(name).and_then(Value::as_str).map(str::to_string);

        Self {
            username: field("username"),
            password: field("password"),
            email: field("email"),
        }
    }

    fn from_form(body: &[u8]) -> Self {
        let mut request = Self::default();
        for (key, value) in url::form_urlencoded::parse(body) {
            let slot = match key.as_ref() {
                "username" => &mut request.username,
                "password" => &mut request.password,
                "email" => &mut request.email,
                _ => continue,
            };
            // First occurrence wins
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        request
    }

    /// First missing field wins, checked in order username, password, email.
    pub fn validate(&self) -> Result<ValidatedFields<'_>, UserError> {
        let username = present(&self.username).ok_or(UserError::MissingUsername)?;
        let password = present(&self.password).ok_or(UserError::MissingPassword)?;
        let email = present(&self.email).ok_or(UserError::MissingEmail)?;
        Ok((username, password, email))
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// User lookup, creation and credential checks
pub struct UserService {
    store: Arc<dyn Store>,
}

impl UserService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Exact-match lookup by username
    pub async fn read(&self, username: &str) -> Result<User, UserError> {
        self.store
            .find_user(username)
            .await?
            .ok_or_else(|| UserError::NotFound(username.to_string()))
    }

    /// Create an account. The existence check is a pre-check only; a
    /// concurrent insert is caught by the store's unique constraint.
    pub async fn create(&self, request: &CreateUser) -> Result<User, UserError> {
        let (username, password, email) = request.validate()?;

        if self.store.find_user(username).await?.is_some() {
            warn!("Refusing to create duplicate user '{}'", username);
            return Err(UserError::AlreadyExists);
        }

        let password_hash = hash_password(password).map_err(|e| UserError::Hashing(e.to_string()))?;
        let new_user = NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
        };

        let user = match self.store.insert_user(new_user).await {
            Ok(user) => user,
            Err(DatabaseError::UniqueViolation(_)) => {
                warn!("User '{}' was created concurrently", username);
                return Err(UserError::AlreadyExists);
            }
            Err(e) => return Err(e.into()),
        };

        info!("Created user '{}' (id {})", user.username, user.id);
        Ok(user)
    }

    /// Check a username/password pair, rejecting inactive accounts
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, UserError> {
        let user = match self.store.find_user(username).await? {
            Some(user) if user.is_active => user,
            _ => return Err(UserError::InvalidCredentials),
        };

        if !verify_password(password, &user.password_hash) {
            warn!("Failed login for '{}'", username);
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }
}
