use async_trait::async_trait;
use domain::{
    DiagnosisEngine, DiagnosisError, DiseaseId, EvidenceRow, EvidenceStore, HistoryEntry,
    HistoryStore, StoreError, SymptomId,
};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Clone, Default)]
struct InMemoryRules {
    rules: Vec<(SymptomId, EvidenceRow)>,
    lookups: Arc<AtomicUsize>,
}

impl InMemoryRules {
    fn with(mut self, disease: &str, symptom: &str, cf: f64) -> Self {
        self.rules.push((
            SymptomId::new(symptom),
            EvidenceRow {
                disease_id: DiseaseId::new(disease),
                cf,
                disease_name: format!("{} name", disease),
                description: format!("{} description", disease),
                remedy: format!("{} remedy", disease),
            },
        ));
        self
    }

    fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EvidenceStore for InMemoryRules {
    async fn rules_for_symptoms(
        &self,
        symptoms: &BTreeSet<SymptomId>,
    ) -> Result<Vec<EvidenceRow>, StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .rules
            .iter()
            .filter(|(symptom, _)| symptoms.contains(symptom))
            .map(|(_, row)| row.clone())
            .collect())
    }
}

#[derive(Clone, Default)]
struct RecordingHistory {
    entries: Arc<Mutex<Vec<HistoryEntry>>>,
}

impl RecordingHistory {
    fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl HistoryStore for RecordingHistory {
    async fn record(&self, entry: HistoryEntry) -> Result<(), StoreError> {
        self.entries.lock().unwrap().push(entry);
        Ok(())
    }
}

struct UnreachableStore;

#[async_trait]
impl EvidenceStore for UnreachableStore {
    async fn rules_for_symptoms(
        &self,
        _symptoms: &BTreeSet<SymptomId>,
    ) -> Result<Vec<EvidenceRow>, StoreError> {
        Err(StoreError::new("connection refused"))
    }
}

#[async_trait]
impl HistoryStore for UnreachableStore {
    async fn record(&self, _entry: HistoryEntry) -> Result<(), StoreError> {
        Err(StoreError::new("connection refused"))
    }
}

fn symptoms(codes: &[&str]) -> Vec<SymptomId> {
    codes.iter().copied().map(SymptomId::new).collect()
}

fn cattle_rules() -> InMemoryRules {
    InMemoryRules::default()
        .with("P01", "G01", 0.8)
        .with("P01", "G02", 0.5)
        .with("P02", "G02", 0.6)
        .with("P02", "G03", 0.3)
        .with("P02", "G04", -0.2)
        .with("P03", "G05", 0.4)
}

#[tokio::test]
async fn test_two_rules_combine_to_expected_cf() {
    let history = RecordingHistory::default();
    let engine = DiagnosisEngine::new(
        InMemoryRules::default()
            .with("D1", "S1", 0.8)
            .with("D1", "S2", 0.5),
        history.clone(),
    );

    let diagnosis = engine
        .diagnose(Uuid::new_v4(), symptoms(&["S1", "S2"]))
        .await
        .unwrap();

    assert_eq!(diagnosis.results.len(), 1);
    assert!((diagnosis.best.cf - 0.9).abs() < 1e-9);
    assert_eq!(diagnosis.best.name, "D1 name");
}

#[tokio::test]
async fn test_results_sorted_descending() {
    let engine = DiagnosisEngine::new(cattle_rules(), RecordingHistory::default());

    let diagnosis = engine
        .diagnose(
            Uuid::new_v4(),
            symptoms(&["G01", "G02", "G03", "G04", "G05"]),
        )
        .await
        .unwrap();

    assert_eq!(diagnosis.results.len(), 3);
    assert!(diagnosis
        .results
        .windows(2)
        .all(|pair| pair[0].cf >= pair[1].cf));
    assert_eq!(diagnosis.best, diagnosis.results[0]);
    assert_eq!(diagnosis.best.disease_id.as_str(), "P01");
}

#[tokio::test]
async fn test_storage_order_does_not_change_cf() {
    let orders = [
        [("G02", 0.6), ("G03", 0.3), ("G04", -0.2)],
        [("G04", -0.2), ("G03", 0.3), ("G02", 0.6)],
        [("G03", 0.3), ("G04", -0.2), ("G02", 0.6)],
    ];

    let mut seen = Vec::new();
    for order in orders {
        let rules = order
            .iter()
            .fold(InMemoryRules::default(), |rules, (symptom, cf)| {
                rules.with("P02", symptom, *cf)
            });
        let engine = DiagnosisEngine::new(rules, RecordingHistory::default());
        let diagnosis = engine
            .diagnose(Uuid::new_v4(), symptoms(&["G02", "G03", "G04"]))
            .await
            .unwrap();
        seen.push(diagnosis.best.cf);
    }

    assert!(seen.iter().all(|cf| (cf - seen[0]).abs() < 1e-9));
}

#[tokio::test]
async fn test_single_rule_is_identity() {
    let engine = DiagnosisEngine::new(
        InMemoryRules::default().with("P09", "G09", 0.35),
        RecordingHistory::default(),
    );

    let diagnosis = engine
        .diagnose(Uuid::new_v4(), symptoms(&["G09"]))
        .await
        .unwrap();

    assert_eq!(diagnosis.best.cf, 0.35);
}

#[tokio::test]
async fn test_empty_selection_is_rejected_before_lookup() {
    let rules = cattle_rules();
    let history = RecordingHistory::default();
    let engine = DiagnosisEngine::new(rules.clone(), history.clone());

    let err = engine
        .diagnose(Uuid::new_v4(), Vec::<SymptomId>::new())
        .await
        .unwrap_err();

    assert_eq!(err, DiagnosisError::InvalidInput);
    assert!(err.is_user_facing());
    assert_eq!(rules.lookups(), 0);
    assert!(history.entries().is_empty());
}

#[tokio::test]
async fn test_unrelated_rules_give_no_match() {
    let history = RecordingHistory::default();
    let engine = DiagnosisEngine::new(cattle_rules(), history.clone());

    let err = engine
        .diagnose(Uuid::new_v4(), symptoms(&["G42"]))
        .await
        .unwrap_err();

    assert_eq!(err, DiagnosisError::NoMatch);
    assert!(history.entries().is_empty());
}

#[tokio::test]
async fn test_exactly_one_history_entry_for_best() {
    let history = RecordingHistory::default();
    let engine = DiagnosisEngine::new(cattle_rules(), history.clone());
    let user = Uuid::new_v4();

    let diagnosis = engine
        .diagnose(user, symptoms(&["G01", "G02", "G05", "G01"]))
        .await
        .unwrap();

    let entries = history.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].user_id, user);
    assert_eq!(entries[0].disease_id, diagnosis.best.disease_id);
    assert_eq!(entries[0].cf, diagnosis.best.cf);
}

#[tokio::test]
async fn test_ties_resolve_by_disease_code() {
    let engine = DiagnosisEngine::new(
        InMemoryRules::default()
            .with("P05", "G01", 0.7)
            .with("P02", "G01", 0.7),
        RecordingHistory::default(),
    );

    let diagnosis = engine
        .diagnose(Uuid::new_v4(), symptoms(&["G01"]))
        .await
        .unwrap();

    assert_eq!(diagnosis.best.disease_id.as_str(), "P02");
    assert_eq!(diagnosis.results[1].disease_id.as_str(), "P05");
}

#[tokio::test]
async fn test_store_failure_surfaces_without_history() {
    let history = RecordingHistory::default();
    let engine = DiagnosisEngine::new(UnreachableStore, history.clone());

    let err = engine
        .diagnose(Uuid::new_v4(), symptoms(&["G01"]))
        .await
        .unwrap_err();

    assert!(matches!(err, DiagnosisError::StoreUnavailable(_)));
    assert!(!err.is_user_facing());
    assert!(history.entries().is_empty());
}

#[tokio::test]
async fn test_history_failure_is_reported() {
    let engine = DiagnosisEngine::new(cattle_rules(), UnreachableStore);

    let err = engine
        .diagnose(Uuid::new_v4(), symptoms(&["G01"]))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        DiagnosisError::StoreUnavailable(StoreError::new("connection refused"))
    );
}
