//! Postgres-backed implementations of the diagnosis engine's store ports.

use async_trait::async_trait;
use database::repositories::{HistoryRepository, RuleRepository};
use database::Database;
use domain::{
    DiseaseId, EvidenceRow, EvidenceStore, HistoryEntry, HistoryStore, StoreError, SymptomId,
};
use std::collections::BTreeSet;

pub struct RuleEvidence {
    rule_repo: RuleRepository,
}

impl RuleEvidence {
    pub fn new(db: &Database) -> Self {
        Self {
            rule_repo: RuleRepository::new(db.pool.clone()),
        }
    }
}

#[async_trait]
impl EvidenceStore for RuleEvidence {
    async fn rules_for_symptoms(
        &self,
        symptoms: &BTreeSet<SymptomId>,
    ) -> Result<Vec<EvidenceRow>, StoreError> {
        let ids: Vec<String> = symptoms.iter().map(|s| s.0.clone()).collect();

        let rows = self
            .rule_repo
            .evidence_for_symptoms(&ids)
            .await
            .map_err(|e| StoreError::new(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| EvidenceRow {
                disease_id: DiseaseId::new(row.disease_id),
                cf: row.cf,
                disease_name: row.disease_name,
                description: row.description,
                remedy: row.remedy,
            })
            .collect())
    }
}

pub struct HistoryLog {
    history_repo: HistoryRepository,
}

impl HistoryLog {
    pub fn new(db: &Database) -> Self {
        Self {
            history_repo: HistoryRepository::new(db.pool.clone()),
        }
    }
}

#[async_trait]
impl HistoryStore for HistoryLog {
    async fn record(&self, entry: HistoryEntry) -> Result<(), StoreError> {
        self.history_repo
            .insert(
                entry.user_id,
                entry.disease_id.as_str(),
                entry.cf,
                entry.recorded_at,
            )
            .await
            .map_err(|e| StoreError::new(e.to_string()))
    }
}
