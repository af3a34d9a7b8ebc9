use crate::middleware::auth::{dashboard_path, AuthUser};
use crate::state::AppState;
use crate::views;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Json,
};
use serde_json::{json, Value};

pub async fn home(viewer: Option<Extension<AuthUser>>) -> Response {
    match viewer {
        Some(Extension(AuthUser(user))) => Redirect::to(dashboard_path(user.role)).into_response(),
        None => views::public::home().into_response(),
    }
}

pub async fn about(viewer: Option<Extension<AuthUser>>) -> Html<String> {
    let viewer = viewer.map(|Extension(AuthUser(user))| user);
    views::public::about(viewer.as_ref())
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let database = match state.db.health_check().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!("{:#}", e);
            "unavailable"
        }
    };
    Json(json!({ "status": "ok", "database": database }))
}
