use crate::models::Symptom;
use sqlx::{PgPool, Result};

pub struct SymptomRepository {
    pool: PgPool,
}

impl SymptomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_by_id(&self) -> Result<Vec<Symptom>> {
        sqlx::query_as::<_, Symptom>("SELECT * FROM symptoms ORDER BY LENGTH(id), id")
            .fetch_all(&self.pool)
            .await
    }

    /// Alphabetical listing used for the consultation checklist.
    pub async fn list_by_name(&self) -> Result<Vec<Symptom>> {
        sqlx::query_as::<_, Symptom>("SELECT * FROM symptoms ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Symptom>> {
        sqlx::query_as::<_, Symptom>("SELECT * FROM symptoms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn all_ids(&self) -> Result<Vec<String>> {
        sqlx::query_scalar("SELECT id FROM symptoms")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn create(&self, id: &str, name: &str) -> Result<Symptom> {
        sqlx::query_as::<_, Symptom>(
            "INSERT INTO symptoms (id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
    }

    /// Returns false when no symptom has the given id.
    pub async fn update(&self, id: &str, name: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE symptoms SET name = $1 WHERE id = $2")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM symptoms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM symptoms")
            .fetch_one(&self.pool)
            .await
    }
}
