use crate::config::DefaultAdmin;
use crate::error::AppError;
use crate::middleware::auth::SessionUser;
use anyhow::{Context, Result};
use database::models::User;
use database::repositories::UserRepository;
use database::Database;
use shared::dto::{RegisterForm, UserForm};
use shared::password::{hash_password, verify_password};
use shared::Role;
use std::sync::Arc;
use uuid::Uuid;

pub struct AuthService {
    user_repo: UserRepository,
}

impl AuthService {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            user_repo: UserRepository::new(db.pool.clone()),
        }
    }

    /// Checks credentials for an account of the given role.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Option<SessionUser>, AppError> {
        let user = self
            .user_repo
            .find_by_email_and_role(email.trim(), role.as_str())
            .await?;

        Ok(user
            .filter(|u| verify_password(password, &u.password_hash))
            .map(|u| SessionUser {
                id: u.id,
                name: u.name,
                role,
            }))
    }

    pub async fn register(&self, form: &RegisterForm) -> Result<User, AppError> {
        let name = required(&form.name, "Name")?;
        let email = required(&form.email, "Email")?;
        let password = required(&form.password, "Password")?;

        let hashed = hash_password(password)?;
        let user = self
            .user_repo
            .create(name, email, &hashed, Role::User.as_str())
            .await?;
        Ok(user)
    }

    /// Inserts when the form has no id, otherwise updates that account.
    pub async fn save(&self, form: &UserForm) -> Result<(), AppError> {
        let name = required(&form.name, "Name")?;
        let email = required(&form.email, "Email")?;
        let role: Role = form
            .role
            .parse()
            .map_err(|e: anyhow::Error| AppError::BadRequest(e.to_string()))?;

        let password = form.password.trim();

        if form.id.trim().is_empty() {
            let password = required(password, "Password")?;
            let hashed = hash_password(password)?;
            self.user_repo
                .create(name, email, &hashed, role.as_str())
                .await?;
            return Ok(());
        }

        let id = parse_id(&form.id)?;
        let hashed = if password.is_empty() {
            None
        } else {
            Some(hash_password(password)?)
        };
        let updated = self
            .user_repo
            .update(id, name, email, role.as_str(), hashed.as_deref())
            .await?;
        account_found(updated)
    }

    pub async fn find_user(&self, id: Uuid) -> Result<Option<User>, AppError> {
        Ok(self.user_repo.find_by_id(id).await?)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.user_repo.list().await?)
    }

    /// Creates the configured administrator when none exists yet.
    pub async fn ensure_default_admin(&self, admin: &DefaultAdmin) -> Result<()> {
        let admins = self
            .user_repo
            .count_by_role(Role::Admin.as_str())
            .await
            .context("Failed to count administrators")?;

        if admins > 0 {
            return Ok(());
        }

        let hashed = hash_password(&admin.password)?;
        self.user_repo
            .create(&admin.name, &admin.email, &hashed, Role::Admin.as_str())
            .await
            .context("Failed to create default administrator")?;

        tracing::info!("Default administrator created ({})", admin.email);
        Ok(())
    }
}

fn required<'a>(value: &'a str, field: &str) -> Result<&'a str, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(value)
}

fn account_found(found: bool) -> Result<(), AppError> {
    if found {
        Ok(())
    } else {
        Err(AppError::NotFound("Account".to_string()))
    }
}

pub fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::NotFound("Record".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        let db = Database::connect_lazy("postgres://advisor@127.0.0.1:1/advisor").unwrap();
        AuthService::new(db)
    }

    fn form(id: &str, name: &str) -> UserForm {
        UserForm {
            id: id.to_string(),
            name: name.to_string(),
            email: "vet@farm.test".to_string(),
            password: String::new(),
            role: "user".to_string(),
        }
    }

    #[test]
    fn test_update_of_missing_account_is_not_found() {
        assert!(account_found(true).is_ok());
        let err = account_found(false).unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref what) if what == "Account"));
    }

    #[tokio::test]
    async fn test_save_rejects_malformed_id_before_querying() {
        let err = service().save(&form("not-a-uuid", "Budi")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_save_requires_name() {
        let err = service()
            .save(&form(&Uuid::new_v4().to_string(), "  "))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_parse_id_trims() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&format!(" {} ", id)).unwrap(), id);
    }
}
