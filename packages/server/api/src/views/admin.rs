use super::{escape, page};
use crate::middleware::auth::SessionUser;
use axum::response::Html;
use database::models::{Disease, Rule, RuleListing, Symptom, User};
use std::fmt::Write;

pub struct Stats {
    pub users: i64,
    pub diseases: i64,
    pub symptoms: i64,
}

pub fn dashboard(admin: &SessionUser, stats: &Stats) -> Html<String> {
    page(
        "Dashboard",
        Some(admin),
        &format!(
            r#"<ul class="stats">
<li><strong>{}</strong> users</li>
<li><strong>{}</strong> diseases</li>
<li><strong>{}</strong> symptoms</li>
</ul>"#,
            stats.users, stats.diseases, stats.symptoms
        ),
    )
}

fn delete_button(action: &str) -> String {
    format!(
        r#"<form method="post" action="{}" class="inline" onsubmit="return confirm('Delete this record?')"><button type="submit">Delete</button></form>"#,
        action
    )
}

pub fn symptoms(admin: &SessionUser, symptoms: &[Symptom]) -> Html<String> {
    let mut rows = String::new();
    for s in symptoms {
        let id = escape(&s.id);
        let _ = write!(
            rows,
            r#"<tr><td>{id}</td><td>{name}</td><td><a href="/admin/symptoms/edit/{id}">Edit</a> {delete}</td></tr>"#,
            id = id,
            name = escape(&s.name),
            delete = delete_button(&format!("/admin/symptoms/delete/{}", id)),
        );
    }

    page(
        "Symptoms",
        Some(admin),
        &format!(
            r#"<form method="post" action="/admin/symptoms/add">
<label>New symptom <input type="text" name="name" required></label>
<button type="submit">Add</button>
</form>
<table>
<thead><tr><th>Code</th><th>Name</th><th></th></tr></thead>
<tbody>{}</tbody>
</table>"#,
            rows
        ),
    )
}

pub fn symptom_edit(admin: &SessionUser, symptom: &Symptom) -> Html<String> {
    page(
        "Edit Symptom",
        Some(admin),
        &format!(
            r#"<form method="post" action="/admin/symptoms/update/{id}">
<p>Code: {id}</p>
<label>Name <input type="text" name="name" value="{name}" required></label>
<button type="submit">Save</button> <a href="/admin/symptoms">Cancel</a>
</form>"#,
            id = escape(&symptom.id),
            name = escape(&symptom.name),
        ),
    )
}

pub fn diseases(admin: &SessionUser, diseases: &[Disease]) -> Html<String> {
    let mut rows = String::new();
    for d in diseases {
        let id = escape(&d.id);
        let _ = write!(
            rows,
            r#"<tr><td>{id}</td><td>{name}</td><td>{description}</td><td>{remedy}</td><td><a href="/admin/diseases/edit/{id}">Edit</a> {delete}</td></tr>"#,
            id = id,
            name = escape(&d.name),
            description = escape(&d.description),
            remedy = escape(&d.remedy),
            delete = delete_button(&format!("/admin/diseases/delete/{}", id)),
        );
    }

    page(
        "Diseases",
        Some(admin),
        &format!(
            r#"<form method="post" action="/admin/diseases/add">
<label>Name <input type="text" name="name" required></label>
<label>Description <textarea name="description"></textarea></label>
<label>Remedy <textarea name="remedy"></textarea></label>
<button type="submit">Add</button>
</form>
<table>
<thead><tr><th>Code</th><th>Name</th><th>Description</th><th>Remedy</th><th></th></tr></thead>
<tbody>{}</tbody>
</table>"#,
            rows
        ),
    )
}

pub fn disease_edit(admin: &SessionUser, disease: &Disease) -> Html<String> {
    page(
        "Edit Disease",
        Some(admin),
        &format!(
            r#"<form method="post" action="/admin/diseases/update/{id}">
<p>Code: {id}</p>
<label>Name <input type="text" name="name" value="{name}" required></label>
<label>Description <textarea name="description">{description}</textarea></label>
<label>Remedy <textarea name="remedy">{remedy}</textarea></label>
<button type="submit">Save</button> <a href="/admin/diseases">Cancel</a>
</form>"#,
            id = escape(&disease.id),
            name = escape(&disease.name),
            description = escape(&disease.description),
            remedy = escape(&disease.remedy),
        ),
    )
}

fn options<'a, I>(items: I, selected: Option<&str>) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut html = String::new();
    for (id, name) in items {
        let mark = if Some(id) == selected { " selected" } else { "" };
        let _ = write!(
            html,
            r#"<option value="{}"{}>{} ({})</option>"#,
            escape(id),
            mark,
            escape(name),
            escape(id)
        );
    }
    html
}

fn rule_fields(diseases: &[Disease], symptoms: &[Symptom], current: Option<&Rule>) -> String {
    let disease_options = options(
        diseases.iter().map(|d| (d.id.as_str(), d.name.as_str())),
        current.map(|r| r.disease_id.as_str()),
    );
    let symptom_options = options(
        symptoms.iter().map(|s| (s.id.as_str(), s.name.as_str())),
        current.map(|r| r.symptom_id.as_str()),
    );
    let cf = current.map(|r| r.cf.to_string()).unwrap_or_default();

    format!(
        r#"<label>Disease <select name="disease_id" required>{}</select></label>
<label>Symptom <select name="symptom_id" required>{}</select></label>
<label>Certainty factor <input type="number" name="cf" min="-1" max="1" step="0.01" value="{}" required></label>"#,
        disease_options,
        symptom_options,
        escape(&cf)
    )
}

pub fn rules(
    admin: &SessionUser,
    rules: &[RuleListing],
    diseases: &[Disease],
    symptoms: &[Symptom],
) -> Html<String> {
    let mut rows = String::new();
    for r in rules {
        let _ = write!(
            rows,
            r#"<tr><td>{disease} ({disease_id})</td><td>{symptom} ({symptom_id})</td><td>{cf}</td><td><a href="/admin/rules/edit/{id}">Edit</a> {delete}</td></tr>"#,
            disease = escape(&r.disease_name),
            disease_id = escape(&r.disease_id),
            symptom = escape(&r.symptom_name),
            symptom_id = escape(&r.symptom_id),
            cf = r.cf,
            id = r.id,
            delete = delete_button(&format!("/admin/rules/delete/{}", r.id)),
        );
    }

    page(
        "Rules",
        Some(admin),
        &format!(
            r#"<form method="post" action="/admin/rules/add">
{fields}
<button type="submit">Add rule</button>
</form>
<table>
<thead><tr><th>Disease</th><th>Symptom</th><th>CF</th><th></th></tr></thead>
<tbody>{rows}</tbody>
</table>"#,
            fields = rule_fields(diseases, symptoms, None),
            rows = rows,
        ),
    )
}

pub fn rule_edit(
    admin: &SessionUser,
    rule: &Rule,
    diseases: &[Disease],
    symptoms: &[Symptom],
) -> Html<String> {
    page(
        "Edit Rule",
        Some(admin),
        &format!(
            r#"<form method="post" action="/admin/rules/update/{}">
{}
<button type="submit">Save</button> <a href="/admin/rules">Cancel</a>
</form>"#,
            rule.id,
            rule_fields(diseases, symptoms, Some(rule)),
        ),
    )
}

pub fn users(admin: &SessionUser, users: &[User]) -> Html<String> {
    let mut rows = String::new();
    for u in users {
        let _ = write!(
            rows,
            r#"<tr><td>{name}</td><td>{email}</td><td>{role}</td><td>{created}</td><td><a href="/admin/users/edit/{id}">Edit</a></td></tr>"#,
            name = escape(&u.name),
            email = escape(&u.email),
            role = escape(&u.role),
            created = u.created_at.format("%Y-%m-%d"),
            id = u.id,
        );
    }

    page(
        "Users",
        Some(admin),
        &format!(
            r#"<p><a href="/admin/users/add">Add account</a></p>
<table>
<thead><tr><th>Name</th><th>Email</th><th>Role</th><th>Created</th><th></th></tr></thead>
<tbody>{}</tbody>
</table>"#,
            rows
        ),
    )
}

/// Add form when `user` is `None`, edit form otherwise.
pub fn user_form(admin: &SessionUser, user: Option<&User>) -> Html<String> {
    let title = if user.is_some() { "Edit Account" } else { "Add Account" };
    let id = user.map(|u| u.id.to_string()).unwrap_or_default();
    let name = user.map(|u| escape(&u.name)).unwrap_or_default();
    let email = user.map(|u| escape(&u.email)).unwrap_or_default();
    let role = user.map(|u| u.role.as_str()).unwrap_or("user");
    let password_hint = if user.is_some() {
        " (leave blank to keep current)"
    } else {
        ""
    };
    let selected = |r: &str| if r == role { " selected" } else { "" };

    page(
        title,
        Some(admin),
        &format!(
            r#"<form method="post" action="/admin/users/save">
<input type="hidden" name="id" value="{id}">
<label>Name <input type="text" name="name" value="{name}" required></label>
<label>Email <input type="email" name="email" value="{email}" required></label>
<label>Password{hint} <input type="password" name="password"></label>
<label>Role <select name="role">
<option value="user"{user_sel}>user</option>
<option value="admin"{admin_sel}>admin</option>
</select></label>
<button type="submit">Save</button> <a href="/admin/users">Cancel</a>
</form>"#,
            id = id,
            name = name,
            email = email,
            hint = password_hint,
            user_sel = selected("user"),
            admin_sel = selected("admin"),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_marks_selection() {
        let html = options([("P01", "Anthrax"), ("P02", "Bloat")], Some("P02"));
        assert!(html.contains(r#"<option value="P02" selected>Bloat (P02)</option>"#));
        assert!(html.contains(r#"<option value="P01">Anthrax (P01)</option>"#));
    }
}
