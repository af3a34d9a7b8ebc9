use super::ids::DiseaseId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One rule matching a submitted symptom, joined with its disease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRow {
    pub disease_id: DiseaseId,
    pub cf: f64,
    pub disease_name: String,
    pub description: String,
    pub remedy: String,
}

/// Aggregated confidence for one disease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub disease_id: DiseaseId,
    pub name: String,
    pub description: String,
    pub remedy: String,
    pub cf: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub user_id: Uuid,
    pub disease_id: DiseaseId,
    pub cf: f64,
    pub recorded_at: DateTime<Utc>,
}
