use crate::certainty::CertaintyFactor;
use crate::entities::{DiagnosisResult, DiseaseId, EvidenceRow};
use std::cmp::Ordering;
use std::collections::BTreeMap;

struct DiseaseEvidence {
    name: String,
    description: String,
    remedy: String,
    weights: Vec<f64>,
}

/// Groups evidence by disease and folds each group's weights into one factor.
pub fn aggregate(rows: Vec<EvidenceRow>) -> Vec<DiagnosisResult> {
    let grouped = rows.into_iter().fold(
        BTreeMap::<DiseaseId, DiseaseEvidence>::new(),
        |mut acc, row| {
            acc.entry(row.disease_id)
                .or_insert_with(|| DiseaseEvidence {
                    name: row.disease_name,
                    description: row.description,
                    remedy: row.remedy,
                    weights: Vec::new(),
                })
                .weights
                .push(row.cf);
            acc
        },
    );

    grouped
        .into_iter()
        .map(|(disease_id, evidence)| DiagnosisResult {
            disease_id,
            name: evidence.name,
            description: evidence.description,
            remedy: evidence.remedy,
            cf: CertaintyFactor::combine_all(evidence.weights).value(),
        })
        .collect()
}

/// Highest confidence first; equal confidences fall back to disease code.
pub fn by_rank(a: &DiagnosisResult, b: &DiagnosisResult) -> Ordering {
    b.cf
        .total_cmp(&a.cf)
        .then_with(|| a.disease_id.cmp(&b.disease_id))
}

pub fn rank(mut results: Vec<DiagnosisResult>) -> Vec<DiagnosisResult> {
    results.sort_by(by_rank);
    results
}

/// The entry that gets written to history.
pub fn best_diagnosis(results: &[DiagnosisResult]) -> Option<&DiagnosisResult> {
    results.iter().min_by(|a, b| by_rank(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(disease: &str, cf: f64) -> EvidenceRow {
        EvidenceRow {
            disease_id: DiseaseId::new(disease),
            cf,
            disease_name: format!("Disease {}", disease),
            description: String::new(),
            remedy: String::new(),
        }
    }

    fn result(disease: &str, cf: f64) -> DiagnosisResult {
        DiagnosisResult {
            disease_id: DiseaseId::new(disease),
            name: disease.to_string(),
            description: String::new(),
            remedy: String::new(),
            cf,
        }
    }

    #[test]
    fn test_aggregate_groups_by_disease() {
        let results = aggregate(vec![row("P01", 0.8), row("P02", 0.4), row("P01", 0.5)]);

        assert_eq!(results.len(), 2);
        let p01 = results.iter().find(|r| r.disease_id.as_str() == "P01").unwrap();
        assert!((p01.cf - 0.9).abs() < 1e-9);
        assert_eq!(p01.name, "Disease P01");
    }

    #[test]
    fn test_rank_descending_with_code_tie_break() {
        let ranked = rank(vec![
            result("P03", 0.5),
            result("P02", 0.9),
            result("P01", 0.5),
        ]);
        let order: Vec<&str> = ranked.iter().map(|r| r.disease_id.as_str()).collect();
        assert_eq!(order, vec!["P02", "P01", "P03"]);
    }

    #[test]
    fn test_best_agrees_with_rank() {
        let results = vec![result("P07", 0.6), result("P04", 0.6), result("P09", 0.1)];
        let best = best_diagnosis(&results).unwrap();
        assert_eq!(best.disease_id.as_str(), "P04");
        assert_eq!(rank(results.clone())[0], *best);
        assert!(best_diagnosis(&[]).is_none());
    }
}
