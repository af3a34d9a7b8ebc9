use axum::{
    body::Body,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use shared::Role;
use tower_sessions::Session;
use uuid::Uuid;

pub const SESSION_USER_KEY: &str = "user";

/// The signed-in account as remembered by the session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
}

#[derive(Clone, Debug)]
pub struct AuthUser(pub SessionUser);

/// Attaches the session's user, if any, to the request extensions.
pub async fn auth_middleware(session: Session, mut req: Request<Body>, next: Next) -> Response {
    match session.get::<SessionUser>(SESSION_USER_KEY).await {
        Ok(Some(user)) => {
            req.extensions_mut().insert(AuthUser(user));
        }
        Ok(None) => {}
        Err(e) => tracing::warn!("Failed to read session: {}", e),
    }

    next.run(req).await
}

pub async fn require_user(req: Request<Body>, next: Next) -> Response {
    require_role(Role::User, "/login", req, next).await
}

pub async fn require_admin(req: Request<Body>, next: Next) -> Response {
    require_role(Role::Admin, "/admin/login", req, next).await
}

async fn require_role(role: Role, login_path: &str, req: Request<Body>, next: Next) -> Response {
    match req.extensions().get::<AuthUser>() {
        Some(AuthUser(user)) if user.role == role => next.run(req).await,
        _ => Redirect::to(login_path).into_response(),
    }
}

/// Where a signed-in user lands after login or on the home page.
pub fn dashboard_path(role: Role) -> &'static str {
    match role {
        Role::User => "/user/dashboard",
        Role::Admin => "/admin/dashboard",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{header, StatusCode},
        middleware::from_fn,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    fn app() -> Router {
        let user = Router::new()
            .route("/consultation", get(|| async { "checklist" }))
            .route_layer(from_fn(require_user));
        let admin = Router::new()
            .route("/admin/symptoms", get(|| async { "symptoms" }))
            .route_layer(from_fn(require_admin));
        Router::new().merge(user).merge(admin)
    }

    fn signed_in(role: Role) -> AuthUser {
        AuthUser(SessionUser {
            id: Uuid::new_v4(),
            name: "Sapi".to_string(),
            role,
        })
    }

    async fn send(path: &str, user: Option<AuthUser>) -> Response {
        let mut req = axum::http::Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap();
        if let Some(user) = user {
            req.extensions_mut().insert(user);
        }
        app().oneshot(req).await.unwrap()
    }

    fn location(response: &Response) -> Option<&str> {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    #[tokio::test]
    async fn test_anonymous_user_route_redirects_to_login() {
        let response = send("/consultation", None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), Some("/login"));
    }

    #[tokio::test]
    async fn test_anonymous_admin_route_redirects_to_admin_login() {
        let response = send("/admin/symptoms", None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), Some("/admin/login"));
    }

    #[tokio::test]
    async fn test_user_cannot_reach_admin_routes() {
        let response = send("/admin/symptoms", Some(signed_in(Role::User))).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), Some("/admin/login"));
    }

    #[tokio::test]
    async fn test_admin_cannot_reach_user_routes() {
        let response = send("/consultation", Some(signed_in(Role::Admin))).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), Some("/login"));
    }

    #[tokio::test]
    async fn test_matching_role_passes_through() {
        let response = send("/consultation", Some(signed_in(Role::User))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(location(&response), None);

        let response = send("/admin/symptoms", Some(signed_in(Role::Admin))).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_dashboard_path_by_role() {
        assert_eq!(dashboard_path(Role::User), "/user/dashboard");
        assert_eq!(dashboard_path(Role::Admin), "/admin/dashboard");
    }
}
