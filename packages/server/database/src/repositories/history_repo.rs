use crate::models::HistoryRecord;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Result};
use uuid::Uuid;

pub struct HistoryRepository {
    pool: PgPool,
}

impl HistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        user_id: Uuid,
        disease_id: &str,
        cf: f64,
        diagnosed_at: DateTime<Utc>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO history (user_id, disease_id, cf, diagnosed_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user_id)
        .bind(disease_id)
        .bind(cf)
        .bind(diagnosed_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<HistoryRecord>> {
        sqlx::query_as::<_, HistoryRecord>(
            r#"
            SELECT h.id, h.cf, h.diagnosed_at,
                   d.name AS disease_name, d.description, d.remedy
            FROM history h
            JOIN diseases d ON h.disease_id = d.id
            WHERE h.user_id = $1
            ORDER BY h.diagnosed_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Only returns the record if it belongs to `user_id`.
    pub async fn find_for_user(&self, id: Uuid, user_id: Uuid) -> Result<Option<HistoryRecord>> {
        sqlx::query_as::<_, HistoryRecord>(
            r#"
            SELECT h.id, h.cf, h.diagnosed_at,
                   d.name AS disease_name, d.description, d.remedy
            FROM history h
            JOIN diseases d ON h.disease_id = d.id
            WHERE h.id = $1 AND h.user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }
}
