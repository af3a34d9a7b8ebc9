use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::services::auth_service::{parse_id, AuthService};
use crate::state::AppState;
use crate::views;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Extension, Form,
};
use shared::dto::UserForm;

pub async fn list(
    State(state): State<AppState>,
    Extension(AuthUser(admin)): Extension<AuthUser>,
) -> Result<Html<String>, AppError> {
    let users = AuthService::new(state.db.clone()).list_users().await?;
    Ok(views::admin::users(&admin, &users))
}

pub async fn add_page(Extension(AuthUser(admin)): Extension<AuthUser>) -> Html<String> {
    views::admin::user_form(&admin, None)
}

pub async fn edit_page(
    State(state): State<AppState>,
    Extension(AuthUser(admin)): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&id)?;
    let user = AuthService::new(state.db.clone())
        .find_user(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Account".to_string()))?;
    Ok(views::admin::user_form(&admin, Some(&user)))
}

pub async fn save(
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> Result<Redirect, AppError> {
    AuthService::new(state.db.clone()).save(&form).await?;
    Ok(Redirect::to("/admin/users"))
}
