pub mod evidence;
pub mod ids;

pub use evidence::{DiagnosisResult, EvidenceRow, HistoryEntry};
pub use ids::{DiseaseId, SymptomId};
