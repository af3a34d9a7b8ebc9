use crate::middleware::auth::{require_user, require_admin};
use crate::state::AppState;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};

pub mod admin;
pub mod auth;
pub mod public;
pub mod user;

/// Merges the public, user and admin routers into the application router.
pub fn router() -> Router<AppState> {
    let public = Router::new()
        .route("/", get(public::home))
        .route("/about", get(public::about))
        .route("/health", get(public::health))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/login", get(auth::login_page).post(auth::login))
        .route(
            "/admin/login",
            get(auth::admin_login_page).post(auth::admin_login),
        )
        .route("/logout", get(auth::logout));

    let user = Router::new()
        .route("/user/dashboard", get(user::dashboard))
        .route("/consultation", get(user::consultation))
        .route("/diagnosis", post(user::diagnose))
        .route("/history", get(user::history))
        .route("/history/:id", get(user::history_detail))
        .route_layer(from_fn(require_user));

    let admin = admin::router().route_layer(from_fn(require_admin));

    Router::new().merge(public).merge(user).merge(admin)
}
