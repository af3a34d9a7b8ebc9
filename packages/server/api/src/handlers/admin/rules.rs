use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::services::auth_service::parse_id;
use crate::state::AppState;
use crate::views;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Extension, Form,
};
use database::repositories::{DiseaseRepository, RuleRepository, SymptomRepository};
use domain::Weight;
use shared::dto::RuleForm;

const LIST: &str = "/admin/rules";

struct ValidRule<'a> {
    disease_id: &'a str,
    symptom_id: &'a str,
    weight: Weight,
}

fn validate(form: &RuleForm) -> Result<ValidRule<'_>, AppError> {
    let disease_id = form.disease_id.trim();
    let symptom_id = form.symptom_id.trim();
    if disease_id.is_empty() || symptom_id.is_empty() {
        return Err(AppError::BadRequest(
            "Choose both a disease and a symptom".to_string(),
        ));
    }
    let weight: Weight = form
        .cf
        .parse()
        .map_err(|e: domain::WeightError| AppError::BadRequest(e.to_string()))?;

    Ok(ValidRule {
        disease_id,
        symptom_id,
        weight,
    })
}

pub async fn list(
    State(state): State<AppState>,
    Extension(AuthUser(admin)): Extension<AuthUser>,
) -> Result<Html<String>, AppError> {
    let pool = &state.db.pool;
    let rules = RuleRepository::new(pool.clone()).list().await?;
    let diseases = DiseaseRepository::new(pool.clone()).list_by_name().await?;
    let symptoms = SymptomRepository::new(pool.clone()).list_by_name().await?;
    Ok(views::admin::rules(&admin, &rules, &diseases, &symptoms))
}

pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<RuleForm>,
) -> Result<Redirect, AppError> {
    let rule = validate(&form)?;
    RuleRepository::new(state.db.pool.clone())
        .create(rule.disease_id, rule.symptom_id, rule.weight.value())
        .await?;
    Ok(Redirect::to(LIST))
}

pub async fn edit_page(
    State(state): State<AppState>,
    Extension(AuthUser(admin)): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&id)?;
    let pool = &state.db.pool;
    let rule = RuleRepository::new(pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Rule".to_string()))?;
    let diseases = DiseaseRepository::new(pool.clone()).list_by_name().await?;
    let symptoms = SymptomRepository::new(pool.clone()).list_by_name().await?;
    Ok(views::admin::rule_edit(&admin, &rule, &diseases, &symptoms))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<RuleForm>,
) -> Result<Redirect, AppError> {
    let id = parse_id(&id)?;
    let rule = validate(&form)?;
    if !RuleRepository::new(state.db.pool.clone())
        .update(id, rule.disease_id, rule.symptom_id, rule.weight.value())
        .await?
    {
        return Err(AppError::NotFound("Rule".to_string()));
    }
    Ok(Redirect::to(LIST))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let id = parse_id(&id)?;
    if !RuleRepository::new(state.db.pool.clone()).delete(id).await? {
        return Err(AppError::NotFound("Rule".to_string()));
    }
    Ok(Redirect::to(LIST))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(disease: &str, symptom: &str, cf: &str) -> RuleForm {
        RuleForm {
            disease_id: disease.to_string(),
            symptom_id: symptom.to_string(),
            cf: cf.to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_range() {
        let f = form("P01", " G02 ", "-0.4");
        let rule = validate(&f).unwrap();
        assert_eq!(rule.symptom_id, "G02");
        assert_eq!(rule.weight.value(), -0.4);
    }

    #[test]
    fn test_validate_rejects_bad_weight() {
        assert!(matches!(
            validate(&form("P01", "G01", "1.2")),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            validate(&form("P01", "G01", "high")),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            validate(&form("", "G01", "0.5")),
            Err(AppError::BadRequest(_))
        ));
    }
}
