//! Server-rendered HTML pages.

pub mod admin;
pub mod public;
pub mod user;

use crate::middleware::auth::SessionUser;
use axum::{http::StatusCode, response::Html};
use shared::Role;
use std::fmt::Write;

/// Escapes text for use in HTML bodies and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn nav(viewer: Option<&SessionUser>) -> String {
    let links: &[(&str, &str)] = match viewer.map(|u| u.role) {
        Some(Role::Admin) => &[
            ("/admin/dashboard", "Dashboard"),
            ("/admin/symptoms", "Symptoms"),
            ("/admin/diseases", "Diseases"),
            ("/admin/rules", "Rules"),
            ("/admin/users", "Users"),
            ("/logout", "Logout"),
        ],
        Some(Role::User) => &[
            ("/user/dashboard", "Dashboard"),
            ("/consultation", "Consultation"),
            ("/history", "History"),
            ("/about", "About"),
            ("/logout", "Logout"),
        ],
        None => &[
            ("/", "Home"),
            ("/about", "About"),
            ("/login", "Login"),
            ("/register", "Register"),
            ("/admin/login", "Admin"),
        ],
    };

    let mut html = String::from("<nav>");
    for (href, label) in links {
        let _ = write!(html, r#"<a href="{}">{}</a> "#, href, label);
    }
    if let Some(user) = viewer {
        let _ = write!(html, "<span class=\"who\">{}</span>", escape(&user.name));
    }
    html.push_str("</nav>");
    html
}

pub fn page(title: &str, viewer: Option<&SessionUser>, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Cattle Diagnostic Advisor</title>
</head>
<body>
{nav}
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>"#,
        title = escape(title),
        nav = nav(viewer),
        body = body,
    ))
}

pub fn message_page(status: StatusCode, message: &str) -> Html<String> {
    let title = status.canonical_reason().unwrap_or("Notice");
    page(
        title,
        None,
        &format!(
            r#"<p class="message">{}</p><p><a href="javascript:history.back()">Back</a> · <a href="/">Home</a></p>"#,
            escape(message)
        ),
    )
}

/// Formats a certainty factor as a percentage with two decimals.
pub fn percent(cf: f64) -> String {
    format!("{:.2}%", cf * 100.0)
}
