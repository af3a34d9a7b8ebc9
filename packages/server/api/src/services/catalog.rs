use crate::error::AppError;
use database::repositories::{DiseaseRepository, SymptomRepository};
use database::Database;
use domain::codes::{highest_code, next_code, DISEASE_PREFIX, SYMPTOM_PREFIX};

pub async fn next_symptom_code(db: &Database) -> Result<String, AppError> {
    let ids = SymptomRepository::new(db.pool.clone()).all_ids().await?;
    let last = highest_code(SYMPTOM_PREFIX, ids.iter().map(String::as_str));
    Ok(next_code(SYMPTOM_PREFIX, last))
}

pub async fn next_disease_code(db: &Database) -> Result<String, AppError> {
    let ids = DiseaseRepository::new(db.pool.clone()).all_ids().await?;
    let last = highest_code(DISEASE_PREFIX, ids.iter().map(String::as_str));
    Ok(next_code(DISEASE_PREFIX, last))
}
