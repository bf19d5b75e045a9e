use anyhow::{anyhow, Result};
use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::Utc;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::core::persistence::session::session_api_repository_trait::SessionApiRepository;
use crate::core::persistence::session::session_entity::SessionEntity;
use crate::core::persistence::session::session_repository::SessionRepository;
use crate::core::persistence::user::user_api_repository_trait::UserApiRepository;
use crate::core::persistence::user::user_entity::UserEntity;
use crate::core::persistence::user::user_repository::UserRepository;
use crate::domain::auth::dto::user_login_request::UserLoginRequest;
use crate::domain::auth::dto::user_registration_request::UserRegistrationRequest;
use crate::errors::AppError;

pub async fn register(pool: &SqlitePool, req: UserRegistrationRequest) -> Result<Value> {
    let repo = UserRepository::new(pool.clone());
    register_with_repo(&repo, req).await
}

pub async fn login(pool: &SqlitePool, req: UserLoginRequest) -> Result<Value> {
    let users = UserRepository::new(pool.clone());
    let sessions = SessionRepository::new(pool.clone());
    login_with_repo(&users, &sessions, req).await
}

/// Opaque token for browser form clients; nothing server-side checks it.
pub fn issue_csrf_token() -> Value {
    json!({ "csrfToken": Uuid::new_v4().simple().to_string() })
}

async fn register_with_repo<R: UserApiRepository>(
    repo: &R,
    req: UserRegistrationRequest,
) -> Result<Value> {
    req.validate().map_err(AppError::Validation)?;

    let mut errors = ValidationErrors::new();
    if repo.find_by_username(&req.username).await?.is_some() {
        let mut err = ValidationError::new("unique");
        err.message = Some("A user with that username already exists.".into());
        errors.add("username", err);
    }
    if repo.find_by_email(&req.email).await?.is_some() {
        let mut err = ValidationError::new("unique");
        err.message = Some("A user with that email already exists.".into());
        errors.add("email", err);
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors).into());
    }

    let user = UserEntity {
        id: 0,
        username: req.username,
        email: req.email,
        password_hash: hash_password(&req.password)?,
        first_name: req.first_name.unwrap_or_default(),
        last_name: req.last_name.unwrap_or_default(),
        date_joined: Utc::now(),
        last_login: None,
    };

    let id = repo.insert(&user).await?;
    debug!("Registered user '{}' as #{id}", user.username);

    Ok(json!({ "message": "User registered successfully.", "id": id }))
}

async fn login_with_repo<U: UserApiRepository, S: SessionApiRepository>(
    users: &U,
    sessions: &S,
    req: UserLoginRequest,
) -> Result<Value> {
    req.validate().map_err(AppError::Validation)?;

    let Some(user) = users.find_by_email(&req.email).await? else {
        return Err(AppError::InvalidCredentials.into());
    };

    if !verify_password(&req.password, &user.password_hash) {
        return Err(AppError::InvalidCredentials.into());
    }

    let session = SessionEntity {
        token: Uuid::new_v4().to_string(),
        user_id: user.id,
        created_at: Utc::now(),
    };
    sessions.insert(&session).await?;
    users.record_login(user.id, session.created_at).await?;
    debug!("User #{} logged in", user.id);

    Ok(json!({
        "message": "User logged in successfully.",
        "user_id": user.id,
        "session_token": session.token,
    }))
}

fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("Failed to hash password: {}", e))?;
    Ok(hash.to_string())
}

fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::DateTime;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockUserRepository {
        rows: Mutex<Vec<UserEntity>>,
    }

    #[async_trait]
    impl UserApiRepository for MockUserRepository {
        async fn find(&self, id: i64) -> Result<Option<UserEntity>> {
            Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }

        async fn find_by_username(&self, username: &str) -> Result<Option<UserEntity>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.username == username)
                .cloned())
        }

        async fn insert(&self, user: &UserEntity) -> Result<i64> {
            let mut rows = self.rows.lock().unwrap();
            let id = rows.len() as i64 + 1;
            let mut stored = user.clone();
            stored.id = id;
            rows.push(stored);
            Ok(id)
        }

        async fn record_login(&self, id: i64, at: DateTime<Utc>) -> Result<()> {
            if let Some(user) = self.rows.lock().unwrap().iter_mut().find(|u| u.id == id) {
                user.last_login = Some(at);
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockSessionRepository {
        rows: Mutex<Vec<SessionEntity>>,
    }

    #[async_trait]
    impl SessionApiRepository for MockSessionRepository {
        async fn insert(&self, session: &SessionEntity) -> Result<()> {
            self.rows.lock().unwrap().push(session.clone());
            Ok(())
        }
    }

    fn registration(email: &str) -> UserRegistrationRequest {
        UserRegistrationRequest {
            username: "asha".into(),
            email: email.into(),
            password: "plant-the-fields".into(),
            first_name: Some("Asha".into()),
            last_name: None,
        }
    }

    #[tokio::test]
    async fn register_persists_and_returns_id() {
        let repo = MockUserRepository::default();

        let response = register_with_repo(&repo, registration("asha@example.com"))
            .await
            .expect("register should succeed");

        assert_eq!(response["id"], 1);
        assert_eq!(response["message"], "User registered successfully.");

        let rows = repo.rows.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert_ne!(rows[0].password_hash, "plant-the-fields");
    }

    #[tokio::test]
    async fn register_rejects_invalid_email_without_persisting() {
        let repo = MockUserRepository::default();

        let err = register_with_repo(&repo, registration("not-an-email"))
            .await
            .expect_err("invalid email must fail");

        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::Validation(_))
        ));
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email_as_field_error() {
        let repo = MockUserRepository::default();
        register_with_repo(&repo, registration("asha@example.com"))
            .await
            .unwrap();

        let mut dup = registration("asha@example.com");
        dup.username = "asha2".into();
        let err = register_with_repo(&repo, dup).await.expect_err("duplicate");

        match err.downcast_ref::<AppError>() {
            Some(AppError::Validation(errors)) => {
                assert!(errors.field_errors().contains_key("email"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn login_round_trip_creates_session() {
        let users = MockUserRepository::default();
        let sessions = MockSessionRepository::default();
        register_with_repo(&users, registration("asha@example.com"))
            .await
            .unwrap();

        let response = login_with_repo(
            &users,
            &sessions,
            UserLoginRequest {
                email: "asha@example.com".into(),
                password: "plant-the-fields".into(),
            },
        )
        .await
        .expect("login should succeed");

        assert_eq!(response["user_id"], 1);
        assert_eq!(sessions.rows.lock().unwrap().len(), 1);
        assert!(users.rows.lock().unwrap()[0].last_login.is_some());
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_unauthorized() {
        let users = MockUserRepository::default();
        let sessions = MockSessionRepository::default();
        register_with_repo(&users, registration("asha@example.com"))
            .await
            .unwrap();

        let err = login_with_repo(
            &users,
            &sessions,
            UserLoginRequest {
                email: "asha@example.com".into(),
                password: "wrong".into(),
            },
        )
        .await
        .expect_err("wrong password");

        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::InvalidCredentials)
        ));
        assert!(sessions.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn login_with_empty_email_is_validation_failure() {
        let users = MockUserRepository::default();
        let sessions = MockSessionRepository::default();

        let err = login_with_repo(
            &users,
            &sessions,
            UserLoginRequest {
                email: "".into(),
                password: "whatever".into(),
            },
        )
        .await
        .expect_err("missing email");

        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::Validation(_))
        ));
    }
}
