//! The diagnosis engine: collect evidence for the selected symptoms, combine
//! it per disease, rank, and log the best match to history.

mod error;
pub mod ranking;

pub use error::DiagnosisError;
pub use ranking::{aggregate, best_diagnosis, rank};

use crate::entities::{DiagnosisResult, HistoryEntry, SymptomId};
use crate::ports::store::{EvidenceStore, HistoryStore};
use chrono::Utc;
use std::collections::BTreeSet;
use uuid::Uuid;

/// Outcome of a successful diagnosis.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnosis {
    pub best: DiagnosisResult,
    /// All candidate diseases, best first.
    pub results: Vec<DiagnosisResult>,
}

pub struct DiagnosisEngine<E, H> {
    evidence: E,
    history: H,
}

impl<E, H> DiagnosisEngine<E, H>
where
    E: EvidenceStore,
    H: HistoryStore,
{
    pub fn new(evidence: E, history: H) -> Self {
        Self { evidence, history }
    }

    pub async fn diagnose<I>(&self, user_id: Uuid, symptoms: I) -> Result<Diagnosis, DiagnosisError>
    where
        I: IntoIterator<Item = SymptomId>,
    {
        let symptoms: BTreeSet<SymptomId> = symptoms.into_iter().collect();
        if symptoms.is_empty() {
            return Err(DiagnosisError::InvalidInput);
        }

        let rows = self.evidence.rules_for_symptoms(&symptoms).await?;
        if rows.is_empty() {
            tracing::debug!("No rules match {} selected symptoms", symptoms.len());
            return Err(DiagnosisError::NoMatch);
        }

        let results = rank(aggregate(rows));
        let best = best_diagnosis(&results)
            .cloned()
            .ok_or(DiagnosisError::NoMatch)?;

        self.history
            .record(HistoryEntry {
                user_id,
                disease_id: best.disease_id.clone(),
                cf: best.cf,
                recorded_at: Utc::now(),
            })
            .await?;

        tracing::info!(
            user = %user_id,
            disease = %best.disease_id,
            cf = best.cf,
            candidates = results.len(),
            "Diagnosis recorded"
        );

        Ok(Diagnosis { best, results })
    }
}
