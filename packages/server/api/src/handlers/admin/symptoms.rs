use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::services::catalog::next_symptom_code;
use crate::state::AppState;
use crate::views;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Extension, Form,
};
use database::repositories::SymptomRepository;
use shared::dto::SymptomForm;

const LIST: &str = "/admin/symptoms";

fn name_of(form: &SymptomForm) -> Result<&str, AppError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Symptom name is required".to_string()));
    }
    Ok(name)
}

pub async fn list(
    State(state): State<AppState>,
    Extension(AuthUser(admin)): Extension<AuthUser>,
) -> Result<Html<String>, AppError> {
    let symptoms = SymptomRepository::new(state.db.pool.clone())
        .list_by_id()
        .await?;
    Ok(views::admin::symptoms(&admin, &symptoms))
}

pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<SymptomForm>,
) -> Result<Redirect, AppError> {
    let name = name_of(&form)?;
    let code = next_symptom_code(&state.db).await?;
    SymptomRepository::new(state.db.pool.clone())
        .create(&code, name)
        .await?;
    tracing::info!("Symptom {} created", code);
    Ok(Redirect::to(LIST))
}

pub async fn edit_page(
    State(state): State<AppState>,
    Extension(AuthUser(admin)): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let symptom = SymptomRepository::new(state.db.pool.clone())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Symptom".to_string()))?;
    Ok(views::admin::symptom_edit(&admin, &symptom))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<SymptomForm>,
) -> Result<Redirect, AppError> {
    let name = name_of(&form)?;
    if !SymptomRepository::new(state.db.pool.clone())
        .update(&id, name)
        .await?
    {
        return Err(AppError::NotFound("Symptom".to_string()));
    }
    Ok(Redirect::to(LIST))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    if !SymptomRepository::new(state.db.pool.clone())
        .delete(&id)
        .await?
    {
        return Err(AppError::NotFound("Symptom".to_string()));
    }
    tracing::info!("Symptom {} deleted", id);
    Ok(Redirect::to(LIST))
}
