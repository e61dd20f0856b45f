pub mod auth;
pub mod error;
pub mod handlers;
pub mod state;
pub mod templates;

use axum::Router;
use axum::routing::{get, post};
use state::AppState;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Builds the full route table over a shared [`AppState`].
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/blog", get(handlers::blog_index))
        .route("/blog/{date}", get(handlers::blog_entry))
        .route("/admin", get(handlers::admin_index))
        .route("/admin/edit", get(handlers::admin_edit))
        .route("/admin/entry", post(handlers::admin_post_entry))
        .route("/admin/delete", post(handlers::admin_delete_entry))
        .route(
            "/admin/login",
            get(handlers::login_page).post(handlers::login_submit),
        )
        .route("/admin/logout", get(handlers::logout))
        .nest_service("/public", ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
