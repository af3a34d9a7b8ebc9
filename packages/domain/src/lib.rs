pub mod certainty;
pub mod codes;
pub mod diagnosis;
pub mod entities;
pub mod ports;

pub use certainty::{CertaintyFactor, Weight, WeightError};
pub use diagnosis::{best_diagnosis, Diagnosis, DiagnosisEngine, DiagnosisError};
pub use entities::{DiagnosisResult, DiseaseId, EvidenceRow, HistoryEntry, SymptomId};
pub use ports::store::{EvidenceStore, HistoryStore, StoreError};
