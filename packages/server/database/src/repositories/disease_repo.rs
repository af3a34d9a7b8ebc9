use crate::models::Disease;
use sqlx::{PgPool, Result};

pub struct DiseaseRepository {
    pool: PgPool,
}

impl DiseaseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_by_id(&self) -> Result<Vec<Disease>> {
        sqlx::query_as::<_, Disease>("SELECT * FROM diseases ORDER BY LENGTH(id), id")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn list_by_name(&self) -> Result<Vec<Disease>> {
        sqlx::query_as::<_, Disease>("SELECT * FROM diseases ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Disease>> {
        sqlx::query_as::<_, Disease>("SELECT * FROM diseases WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn all_ids(&self) -> Result<Vec<String>> {
        sqlx::query_scalar("SELECT id FROM diseases")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn create(
        &self,
        id: &str,
        name: &str,
        description: &str,
        remedy: &str,
    ) -> Result<Disease> {
        sqlx::query_as::<_, Disease>(
            r#"
            INSERT INTO diseases (id, name, description, remedy)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(remedy)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(
        &self,
        id: &str,
        name: &str,
        description: &str,
        remedy: &str,
    ) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE diseases SET name = $1, description = $2, remedy = $3 WHERE id = $4",
        )
        .bind(name)
        .bind(description)
        .bind(remedy)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM diseases WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM diseases")
            .fetch_one(&self.pool)
            .await
    }
}
