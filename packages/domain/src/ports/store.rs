use crate::entities::{EvidenceRow, HistoryEntry, SymptomId};
use async_trait::async_trait;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Store unavailable: {0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Read side of the rule base.
#[async_trait]
pub trait EvidenceStore: Send + Sync {
    /// Every rule whose symptom is in `symptoms`, joined with its disease.
    async fn rules_for_symptoms(
        &self,
        symptoms: &BTreeSet<SymptomId>,
    ) -> Result<Vec<EvidenceRow>, StoreError>;
}

/// Append-only log of past diagnoses.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn record(&self, entry: HistoryEntry) -> Result<(), StoreError>;
}
