use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// User management routes, nested under /api/admin (all require admin)
pub fn admin_routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route(
            "/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .with_state(service)
}
