use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String, // 'user' | 'admin'
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Symptom {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Disease {
    pub id: String,
    pub name: String,
    pub description: String,
    pub remedy: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rule {
    pub id: Uuid,
    pub disease_id: String,
    pub symptom_id: String,
    pub cf: f64,
}

/// A rule joined with the names of its disease and symptom.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RuleListing {
    pub id: Uuid,
    pub cf: f64,
    pub disease_id: String,
    pub disease_name: String,
    pub symptom_id: String,
    pub symptom_name: String,
}

/// A rule matching a submitted symptom, joined with its disease.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Evidence {
    pub disease_id: String,
    pub cf: f64,
    pub disease_name: String,
    pub description: String,
    pub remedy: String,
}

/// A past diagnosis joined with its disease.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HistoryRecord {
    pub id: Uuid,
    pub cf: f64,
    pub diagnosed_at: DateTime<Utc>,
    pub disease_name: String,
    pub description: String,
    pub remedy: String,
}
