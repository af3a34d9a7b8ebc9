use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::views::{self, admin::Stats};
use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Extension, Router,
};
use database::repositories::{DiseaseRepository, SymptomRepository, UserRepository};

pub mod diseases;
pub mod rules;
pub mod symptoms;
pub mod users;

/// Routes that require an administrator session. `/admin/login` lives in
/// the public router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/dashboard", get(dashboard))
        .route("/admin/symptoms", get(symptoms::list))
        .route("/admin/symptoms/add", post(symptoms::add))
        .route("/admin/symptoms/edit/:id", get(symptoms::edit_page))
        .route("/admin/symptoms/update/:id", post(symptoms::update))
        .route("/admin/symptoms/delete/:id", post(symptoms::delete))
        .route("/admin/diseases", get(diseases::list))
        .route("/admin/diseases/add", post(diseases::add))
        .route("/admin/diseases/edit/:id", get(diseases::edit_page))
        .route("/admin/diseases/update/:id", post(diseases::update))
        .route("/admin/diseases/delete/:id", post(diseases::delete))
        .route("/admin/rules", get(rules::list))
        .route("/admin/rules/add", post(rules::add))
        .route("/admin/rules/edit/:id", get(rules::edit_page))
        .route("/admin/rules/update/:id", post(rules::update))
        .route("/admin/rules/delete/:id", post(rules::delete))
        .route("/admin/users", get(users::list))
        .route("/admin/users/add", get(users::add_page))
        .route("/admin/users/edit/:id", get(users::edit_page))
        .route("/admin/users/save", post(users::save))
}

pub async fn dashboard(
    State(state): State<AppState>,
    Extension(AuthUser(admin)): Extension<AuthUser>,
) -> Result<Html<String>, AppError> {
    let pool = &state.db.pool;
    let stats = Stats {
        users: UserRepository::new(pool.clone()).count().await?,
        diseases: DiseaseRepository::new(pool.clone()).count().await?,
        symptoms: SymptomRepository::new(pool.clone()).count().await?,
    };
    Ok(views::admin::dashboard(&admin, &stats))
}
