use super::{escape, page, percent};
use crate::middleware::auth::SessionUser;
use axum::response::Html;
use database::models::{HistoryRecord, Symptom};
use domain::Diagnosis;
use std::fmt::Write;

pub fn dashboard(user: &SessionUser) -> Html<String> {
    page(
        "Dashboard",
        Some(user),
        &format!(
            r#"<p>Welcome, {}.</p>
<ul>
<li><a href="/consultation">Start a consultation</a></li>
<li><a href="/history">View your diagnosis history</a></li>
</ul>"#,
            escape(&user.name)
        ),
    )
}

pub fn consultation(user: &SessionUser, symptoms: &[Symptom]) -> Html<String> {
    let mut items = String::new();
    for symptom in symptoms {
        let _ = write!(
            items,
            r#"<li><label><input type="checkbox" name="symptoms" value="{id}"> {name} <small>({id})</small></label></li>"#,
            id = escape(&symptom.id),
            name = escape(&symptom.name),
        );
    }

    let body = if symptoms.is_empty() {
        "<p>No symptoms have been configured yet.</p>".to_string()
    } else {
        format!(
            r#"<p>Tick every symptom you observe.</p>
<form method="post" action="/diagnosis">
<ul class="symptoms">{}</ul>
<button type="submit">Diagnose</button>
</form>"#,
            items
        )
    };

    page("Consultation", Some(user), &body)
}

pub fn diagnosis(user: &SessionUser, diagnosis: &Diagnosis) -> Html<String> {
    let best = &diagnosis.best;
    let mut rows = String::new();
    for (rank, result) in diagnosis.results.iter().enumerate() {
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            rank + 1,
            escape(result.disease_id.as_str()),
            escape(&result.name),
            percent(result.cf),
        );
    }

    page(
        "Diagnosis Result",
        Some(user),
        &format!(
            r#"<section class="best">
<h2>{name} ({cf})</h2>
<h3>Description</h3><p>{description}</p>
<h3>Remedy</h3><p>{remedy}</p>
</section>
<h2>All candidates</h2>
<table>
<thead><tr><th>#</th><th>Code</th><th>Disease</th><th>Certainty</th></tr></thead>
<tbody>{rows}</tbody>
</table>
<p><a href="/consultation">New consultation</a> · <a href="/history">History</a></p>"#,
            name = escape(&best.name),
            cf = percent(best.cf),
            description = escape(&best.description),
            remedy = escape(&best.remedy),
            rows = rows,
        ),
    )
}

pub fn history(user: &SessionUser, records: &[HistoryRecord]) -> Html<String> {
    if records.is_empty() {
        return page(
            "History",
            Some(user),
            r#"<p>No diagnoses yet. <a href="/consultation">Start a consultation</a>.</p>"#,
        );
    }

    let mut rows = String::new();
    for record in records {
        let _ = write!(
            rows,
            r#"<tr><td>{}</td><td>{}</td><td>{}</td><td><a href="/history/{}">Detail</a></td></tr>"#,
            record.diagnosed_at.format("%Y-%m-%d %H:%M"),
            escape(&record.disease_name),
            percent(record.cf),
            record.id,
        );
    }

    page(
        "History",
        Some(user),
        &format!(
            r#"<table>
<thead><tr><th>Date</th><th>Disease</th><th>Certainty</th><th></th></tr></thead>
<tbody>{}</tbody>
</table>"#,
            rows
        ),
    )
}

pub fn history_detail(user: &SessionUser, record: &HistoryRecord) -> Html<String> {
    page(
        "Diagnosis Detail",
        Some(user),
        &format!(
            r#"<p>Diagnosed on {date}</p>
<h2>{name} ({cf})</h2>
<h3>Description</h3><p>{description}</p>
<h3>Remedy</h3><p>{remedy}</p>
<p><a href="/history">Back to history</a></p>"#,
            date = record.diagnosed_at.format("%Y-%m-%d %H:%M"),
            name = escape(&record.disease_name),
            cf = percent(record.cf),
            description = escape(&record.description),
            remedy = escape(&record.remedy),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{DiagnosisResult, DiseaseId};
    use shared::Role;
    use uuid::Uuid;

    fn farmer() -> SessionUser {
        SessionUser {
            id: Uuid::new_v4(),
            name: "Budi".to_string(),
            role: Role::User,
        }
    }

    fn result(code: &str, name: &str, cf: f64) -> DiagnosisResult {
        DiagnosisResult {
            disease_id: DiseaseId::new(code),
            name: name.to_string(),
            description: format!("{} description", name),
            remedy: format!("{} remedy", name),
            cf,
        }
    }

    #[test]
    fn test_diagnosis_lists_all_candidates_in_order() {
        let best = result("P01", "Anthrax", 0.9);
        let diagnosis = Diagnosis {
            best: best.clone(),
            results: vec![best, result("P02", "Bloat", 0.4)],
        };

        let Html(html) = super::diagnosis(&farmer(), &diagnosis);
        assert!(html.contains("Anthrax (90.00%)"));
        assert!(html.contains("Anthrax remedy"));
        let anthrax = html.rfind("<td>Anthrax</td>").unwrap();
        let bloat = html.find("<td>Bloat</td>").unwrap();
        assert!(anthrax < bloat);
    }

    #[test]
    fn test_consultation_escapes_names() {
        let symptoms = vec![Symptom {
            id: "G01".to_string(),
            name: "Fever > 40°C".to_string(),
        }];
        let Html(html) = consultation(&farmer(), &symptoms);
        assert!(html.contains(r#"value="G01""#));
        assert!(html.contains("Fever &gt; 40°C"));
    }
}
