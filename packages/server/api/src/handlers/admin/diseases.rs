use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::services::catalog::next_disease_code;
use crate::state::AppState;
use crate::views;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Extension, Form,
};
use database::repositories::DiseaseRepository;
use shared::dto::DiseaseForm;

const LIST: &str = "/admin/diseases";

fn name_of(form: &DiseaseForm) -> Result<&str, AppError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Disease name is required".to_string()));
    }
    Ok(name)
}

pub async fn list(
    State(state): State<AppState>,
    Extension(AuthUser(admin)): Extension<AuthUser>,
) -> Result<Html<String>, AppError> {
    let diseases = DiseaseRepository::new(state.db.pool.clone())
        .list_by_id()
        .await?;
    Ok(views::admin::diseases(&admin, &diseases))
}

pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<DiseaseForm>,
) -> Result<Redirect, AppError> {
    let name = name_of(&form)?;
    let code = next_disease_code(&state.db).await?;
    DiseaseRepository::new(state.db.pool.clone())
        .create(&code, name, form.description.trim(), form.remedy.trim())
        .await?;
    tracing::info!("Disease {} created", code);
    Ok(Redirect::to(LIST))
}

pub async fn edit_page(
    State(state): State<AppState>,
    Extension(AuthUser(admin)): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let disease = DiseaseRepository::new(state.db.pool.clone())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Disease".to_string()))?;
    Ok(views::admin::disease_edit(&admin, &disease))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<DiseaseForm>,
) -> Result<Redirect, AppError> {
    let name = name_of(&form)?;
    if !DiseaseRepository::new(state.db.pool.clone())
        .update(&id, name, form.description.trim(), form.remedy.trim())
        .await?
    {
        return Err(AppError::NotFound("Disease".to_string()));
    }
    Ok(Redirect::to(LIST))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    if !DiseaseRepository::new(state.db.pool.clone())
        .delete(&id)
        .await?
    {
        return Err(AppError::NotFound("Disease".to_string()));
    }
    tracing::info!("Disease {} deleted", id);
    Ok(Redirect::to(LIST))
}
