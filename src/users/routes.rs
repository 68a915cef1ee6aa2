//! User routes

use axum::{routing::post, Router};

use super::handlers;

/// Creates and returns the users router
///
/// # Routes
/// - `POST /api/users` - Register a user
pub fn users_routes() -> Router {
    Router::new().route("/api/users", post(handlers::register_user))
}
