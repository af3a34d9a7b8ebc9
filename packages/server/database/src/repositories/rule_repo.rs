use crate::models::{Evidence, Rule, RuleListing};
use sqlx::{PgPool, Result};
use uuid::Uuid;

pub struct RuleRepository {
    pool: PgPool,
}

impl RuleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Every rule whose symptom is in `symptom_ids`, with the disease's fields.
    pub async fn evidence_for_symptoms(&self, symptom_ids: &[String]) -> Result<Vec<Evidence>> {
        sqlx::query_as::<_, Evidence>(
            r#"
            SELECT r.disease_id, r.cf,
                   d.name AS disease_name, d.description, d.remedy
            FROM rules r
            JOIN diseases d ON r.disease_id = d.id
            WHERE r.symptom_id = ANY($1)
            "#,
        )
        .bind(symptom_ids)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn list(&self) -> Result<Vec<RuleListing>> {
        sqlx::query_as::<_, RuleListing>(
            r#"
            SELECT r.id, r.cf,
                   d.id AS disease_id, d.name AS disease_name,
                   s.id AS symptom_id, s.name AS symptom_name
            FROM rules r
            JOIN diseases d ON r.disease_id = d.id
            JOIN symptoms s ON r.symptom_id = s.id
            ORDER BY d.name ASC, s.name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Rule>> {
        sqlx::query_as::<_, Rule>("SELECT * FROM rules WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create(&self, disease_id: &str, symptom_id: &str, cf: f64) -> Result<Rule> {
        sqlx::query_as::<_, Rule>(
            r#"
            INSERT INTO rules (disease_id, symptom_id, cf)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(disease_id)
        .bind(symptom_id)
        .bind(cf)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update(
        &self,
        id: Uuid,
        disease_id: &str,
        symptom_id: &str,
        cf: f64,
    ) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE rules SET disease_id = $1, symptom_id = $2, cf = $3 WHERE id = $4",
        )
        .bind(disease_id)
        .bind(symptom_id)
        .bind(cf)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM rules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
