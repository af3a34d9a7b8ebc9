use crate::error::AppError;
use crate::forms::selected_symptoms;
use crate::middleware::auth::AuthUser;
use crate::services::auth_service::parse_id;
use crate::services::stores::{HistoryLog, RuleEvidence};
use crate::state::AppState;
use crate::views;
use axum::{
    extract::{Path, RawForm, State},
    response::Html,
    Extension,
};
use database::repositories::{HistoryRepository, SymptomRepository};
use domain::DiagnosisEngine;

pub async fn dashboard(Extension(AuthUser(user)): Extension<AuthUser>) -> Html<String> {
    views::user::dashboard(&user)
}

pub async fn consultation(
    State(state): State<AppState>,
    Extension(AuthUser(user)): Extension<AuthUser>,
) -> Result<Html<String>, AppError> {
    let symptoms = SymptomRepository::new(state.db.pool.clone())
        .list_by_name()
        .await?;
    Ok(views::user::consultation(&user, &symptoms))
}

pub async fn diagnose(
    State(state): State<AppState>,
    Extension(AuthUser(user)): Extension<AuthUser>,
    RawForm(body): RawForm,
) -> Result<Html<String>, AppError> {
    let selected = selected_symptoms(&body);
    let engine = DiagnosisEngine::new(RuleEvidence::new(&state.db), HistoryLog::new(&state.db));

    let diagnosis = engine.diagnose(user.id, selected).await?;
    Ok(views::user::diagnosis(&user, &diagnosis))
}

pub async fn history(
    State(state): State<AppState>,
    Extension(AuthUser(user)): Extension<AuthUser>,
) -> Result<Html<String>, AppError> {
    let records = HistoryRepository::new(state.db.pool.clone())
        .list_for_user(user.id)
        .await?;
    Ok(views::user::history(&user, &records))
}

pub async fn history_detail(
    State(state): State<AppState>,
    Extension(AuthUser(user)): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&id)?;
    let record = HistoryRepository::new(state.db.pool.clone())
        .find_for_user(id, user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Diagnosis".to_string()))?;
    Ok(views::user::history_detail(&user, &record))
}
