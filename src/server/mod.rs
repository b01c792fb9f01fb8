//! REST server: a thin request/response mapping over the SQLite store.

pub mod auth;
pub mod routes;

use crate::config::BasicAuth;
use crate::errors::AppError;
use crate::store::SqliteStore;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the application router. When `auth` is set every route is guarded
/// by HTTP basic authentication.
pub fn router(store: Arc<SqliteStore>, auth: Option<BasicAuth>) -> Router {
    let mut app = Router::new()
        .route(
            "/entries",
            get(routes::list_entries)
                .post(routes::create_entry)
                .delete(routes::delete_all),
        )
        .route("/entries/latest", get(routes::latest_entry))
        .route(
            "/entries/{id}",
            get(routes::get_entry)
                .put(routes::update_entry)
                .delete(routes::delete_entry),
        )
        .with_state(store)
        .layer(TraceLayer::new_for_http());

    if let Some(credentials) = auth {
        app = app.layer(axum::middleware::from_fn_with_state(
            Arc::new(credentials),
            auth::require_basic_auth,
        ));
    }

    app
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::OpenEntry => StatusCode::CONFLICT,
            AppError::InvalidDuration(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
