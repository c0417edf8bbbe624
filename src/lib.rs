pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod state;

use axum::{
    extract::{DefaultBodyLimit, State},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method, StatusCode,
    },
    middleware::from_fn_with_state,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use state::AppState;

/// Build the full router: public routes, bearer-protected routes, global layers
pub fn app(state: AppState) -> Router {
    let mut router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(public_routes())
        // Protected API
        .merge(protected_routes(state.clone()))
        .layer(DefaultBodyLimit::max(state.config.api.max_request_size_bytes));

    if state.config.security.enable_cors {
        router = router.layer(cors_layer(&state.config.security.cors_origins));
    }
    if state.config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

fn public_routes() -> Router<AppState> {
    use handlers::public;

    Router::new()
        .route("/auth/login", post(public::login_post))
        .route("/api/users", post(public::user_create))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    use handlers::protected;

    Router::new()
        .route("/api/users/:username", get(protected::user_get))
        .route("/api/contacts", get(protected::contacts_list))
        .route("/api/contacts/:contact_id", get(protected::contact_get))
        .route("/api/groups", get(protected::groups_list))
        .route("/api/groups/:group_id", get(protected::group_get))
        .route("/api/jots/daily", get(protected::daily_jots_list))
        .route("/api/jots/daily/:jot_id", get(protected::daily_jot_get))
        .route("/api/jots/contact", get(protected::contact_jots_list))
        .route("/api/jots/contact/:contact_id", get(protected::contact_jots_get))
        .route("/api/jots/group", get(protected::group_jots_list))
        .route("/api/jots/group/:group_id", get(protected::group_jots_get))
        .route_layer(from_fn_with_state(state, middleware::jwt_auth_middleware))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Jot API",
            "version": version,
            "endpoints": {
                "health": "GET /health (public)",
                "login": "POST /auth/login (public)",
                "users": "POST /api/users (public), GET /api/users/:username",
                "contacts": "GET /api/contacts[/:contact_id]",
                "groups": "GET /api/groups[/:group_id]",
                "daily_jots": "GET /api/jots/daily[/:jot_id]",
                "contact_jots": "GET /api/jots/contact[/:contact_id]",
                "group_jots": "GET /api/jots/group[/:group_id]",
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "success": false,
                    "error": "database unavailable",
                    "data": {
                        "status": "degraded",
                        "timestamp": now
                    }
                })),
            )
        }
    }
}
