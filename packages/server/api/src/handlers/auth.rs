use crate::error::AppError;
use crate::middleware::auth::{dashboard_path, SESSION_USER_KEY};
use crate::services::auth_service::AuthService;
use crate::state::AppState;
use crate::views;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use shared::dto::{LoginForm, RegisterForm};
use shared::Role;
use tower_sessions::Session;

const BAD_CREDENTIALS: &str = "Invalid email or password";

pub async fn register_page() -> Html<String> {
    views::public::register(None)
}

pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    let auth_service = AuthService::new(state.db.clone());
    match auth_service.register(&form).await {
        Ok(user) => {
            tracing::info!("Registered user {}", user.id);
            Ok(Redirect::to("/login").into_response())
        }
        Err(AppError::BadRequest(msg)) => {
            Ok((StatusCode::BAD_REQUEST, views::public::register(Some(&msg))).into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn login_page() -> Html<String> {
    views::public::login("Login", "/login", None)
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    sign_in(&state, &session, &form, Role::User, "Login", "/login").await
}

pub async fn admin_login_page() -> Html<String> {
    views::public::login("Admin Login", "/admin/login", None)
}

pub async fn admin_login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    sign_in(&state, &session, &form, Role::Admin, "Admin Login", "/admin/login").await
}

async fn sign_in(
    state: &AppState,
    session: &Session,
    form: &LoginForm,
    role: Role,
    title: &str,
    action: &str,
) -> Result<Response, AppError> {
    let auth_service = AuthService::new(state.db.clone());
    let Some(user) = auth_service
        .authenticate(&form.email, &form.password, role)
        .await?
    else {
        return Ok((
            StatusCode::UNAUTHORIZED,
            views::public::login(title, action, Some(BAD_CREDENTIALS)),
        )
            .into_response());
    };

    session.cycle_id().await?;
    session.insert(SESSION_USER_KEY, &user).await?;
    tracing::info!("{} {} signed in", role, user.id);

    Ok(Redirect::to(dashboard_path(role)).into_response())
}

pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    session.flush().await?;
    Ok(Redirect::to("/"))
}
