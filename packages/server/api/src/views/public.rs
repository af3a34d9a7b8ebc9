use super::{escape, page};
use axum::response::Html;

pub fn home() -> Html<String> {
    page(
        "Cattle Diagnostic Advisor",
        None,
        r#"<p>Select the symptoms you observe in your cattle and the advisor ranks the likely
diseases using expert certainty factors, together with a description and recommended remedy.</p>
<p><a href="/login">Sign in</a> or <a href="/register">create an account</a> to start a consultation.</p>"#,
    )
}

pub fn about(viewer: Option<&crate::middleware::auth::SessionUser>) -> Html<String> {
    page(
        "About",
        viewer,
        r#"<p>This expert system stores rules linking symptoms to diseases. Each rule carries a
certainty factor between -1 and 1 that expresses how strongly the symptom points to the disease.</p>
<p>When several selected symptoms support the same disease their factors are combined with
<code>CF = CF + w × (1 − CF)</code>, and diseases are listed from most to least likely.</p>"#,
    )
}

/// Sign-in form, shared by users and administrators.
pub fn login(title: &str, action: &str, error: Option<&str>) -> Html<String> {
    let error = error
        .map(|e| format!(r#"<p class="error">{}</p>"#, escape(e)))
        .unwrap_or_default();

    page(
        title,
        None,
        &format!(
            r#"{error}
<form method="post" action="{action}">
<label>Email <input type="email" name="email" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Sign in</button>
</form>"#,
            error = error,
            action = action,
        ),
    )
}

pub fn register(error: Option<&str>) -> Html<String> {
    let error = error
        .map(|e| format!(r#"<p class="error">{}</p>"#, escape(e)))
        .unwrap_or_default();

    page(
        "Register",
        None,
        &format!(
            r#"{}
<form method="post" action="/register">
<label>Name <input type="text" name="name" required></label>
<label>Email <input type="email" name="email" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Create account</button>
</form>
<p>Already registered? <a href="/login">Sign in</a>.</p>"#,
            error
        ),
    )
}
