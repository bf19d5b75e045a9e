use anyhow::Result;
use sqlx::SqlitePool;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::core::persistence::extended_user::extended_user_api_repository_trait::ExtendedUserApiRepository;
use crate::core::persistence::extended_user::extended_user_entity::ExtendedUserEntity;
use crate::core::persistence::extended_user::extended_user_repository::ExtendedUserRepository;
use crate::domain::profile::dto::extended_user_create_request::{
    ExtendedUserCreateRequest, PROFILE_ROLES,
};
use crate::domain::profile::dto::extended_user_patch_request::ExtendedUserPatchRequest;
use crate::errors::AppError;

pub async fn list_extended_users(
    pool: &SqlitePool,
    user_id: Option<i64>,
) -> Result<Vec<ExtendedUserEntity>> {
    let repo = ExtendedUserRepository::new(pool.clone());
    list_with_repo(&repo, user_id).await
}

pub async fn get_extended_user(pool: &SqlitePool, id: i64) -> Result<ExtendedUserEntity> {
    let repo = ExtendedUserRepository::new(pool.clone());
    get_with_repo(&repo, id).await
}

pub async fn create_extended_user(
    pool: &SqlitePool,
    req: ExtendedUserCreateRequest,
) -> Result<ExtendedUserEntity> {
    let repo = ExtendedUserRepository::new(pool.clone());
    create_with_repo(&repo, req).await
}

pub async fn patch_extended_user(
    pool: &SqlitePool,
    id: i64,
    req: ExtendedUserPatchRequest,
) -> Result<ExtendedUserEntity> {
    let repo = ExtendedUserRepository::new(pool.clone());
    patch_with_repo(&repo, id, req).await
}

async fn list_with_repo<R: ExtendedUserApiRepository>(
    repo: &R,
    user_id: Option<i64>,
) -> Result<Vec<ExtendedUserEntity>> {
    let profiles = repo.list().await?;
    Ok(match user_id {
        Some(user_id) => profiles.into_iter().filter(|p| p.user_id == user_id).collect(),
        None => profiles,
    })
}

async fn get_with_repo<R: ExtendedUserApiRepository>(
    repo: &R,
    id: i64,
) -> Result<ExtendedUserEntity> {
    repo.find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")).into())
}

async fn create_with_repo<R: ExtendedUserApiRepository>(
    repo: &R,
    req: ExtendedUserCreateRequest,
) -> Result<ExtendedUserEntity> {
    req.validate().map_err(AppError::Validation)?;
    check_role(&req.role)?;

    let mut profile = ExtendedUserEntity {
        id: 0,
        user_id: req.user_id,
        role: req.role,
        phone_number: req.phone_number.unwrap_or_default(),
        address: req.address.unwrap_or_default(),
        city: req.city.unwrap_or_default(),
        state: req.state.unwrap_or_default(),
        pincode: req.pincode.unwrap_or_default(),
    };

    profile.id = repo.insert(&profile).await?;
    Ok(profile)
}

async fn patch_with_repo<R: ExtendedUserApiRepository>(
    repo: &R,
    id: i64,
    req: ExtendedUserPatchRequest,
) -> Result<ExtendedUserEntity> {
    req.validate().map_err(AppError::Validation)?;
    if let Some(role) = &req.role {
        check_role(role)?;
    }

    let mut profile = repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")))?;

    profile.apply_update(req);
    repo.update(&profile).await?;

    Ok(profile)
}

fn check_role(role: &str) -> Result<(), AppError> {
    if PROFILE_ROLES.contains(&role) {
        return Ok(());
    }
    let mut errors = ValidationErrors::new();
    let mut err = ValidationError::new("invalid_role");
    err.message = Some("Role must be 'landowner' or 'farmer'.".into());
    errors.add("role", err);
    Err(AppError::Validation(errors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockExtendedUserRepository {
        rows: Mutex<Vec<ExtendedUserEntity>>,
    }

    #[async_trait]
    impl ExtendedUserApiRepository for MockExtendedUserRepository {
        async fn list(&self) -> Result<Vec<ExtendedUserEntity>> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find(&self, id: i64) -> Result<Option<ExtendedUserEntity>> {
            Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
        }

        async fn insert(&self, profile: &ExtendedUserEntity) -> Result<i64> {
            let mut rows = self.rows.lock().unwrap();
            let id = rows.len() as i64 + 1;
            let mut stored = profile.clone();
            stored.id = id;
            rows.push(stored);
            Ok(id)
        }

        async fn update(&self, profile: &ExtendedUserEntity) -> Result<()> {
            let mut rows = self.rows.lock().unwrap();
            if let Some(slot) = rows.iter_mut().find(|p| p.id == profile.id) {
                *slot = profile.clone();
            }
            Ok(())
        }
    }

    fn create_request(user_id: i64, role: &str) -> ExtendedUserCreateRequest {
        ExtendedUserCreateRequest {
            user_id,
            role: role.into(),
            phone_number: Some("9876543210".into()),
            address: None,
            city: Some("Nashik".into()),
            state: None,
            pincode: None,
        }
    }

    #[tokio::test]
    async fn create_rejects_unknown_role() {
        let repo = MockExtendedUserRepository::default();

        let err = create_with_repo(&repo, create_request(1, "broker"))
            .await
            .expect_err("unknown role");

        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::Validation(_))
        ));
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_scopes_to_user_when_requested() {
        let repo = MockExtendedUserRepository::default();
        create_with_repo(&repo, create_request(1, "landowner")).await.unwrap();
        create_with_repo(&repo, create_request(2, "farmer")).await.unwrap();

        let all = list_with_repo(&repo, None).await.unwrap();
        assert_eq!(all.len(), 2);

        let scoped = list_with_repo(&repo, Some(2)).await.unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].role, "farmer");
    }

    #[tokio::test]
    async fn patch_touches_only_provided_fields() {
        let repo = MockExtendedUserRepository::default();
        let created = create_with_repo(&repo, create_request(1, "landowner")).await.unwrap();

        let patched = patch_with_repo(
            &repo,
            created.id,
            ExtendedUserPatchRequest {
                role: None,
                phone_number: None,
                address: Some("12 Canal Road".into()),
                city: None,
                state: None,
                pincode: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(patched.address, "12 Canal Road");
        assert_eq!(patched.role, "landowner");
        assert_eq!(patched.city, "Nashik");
    }

    #[tokio::test]
    async fn patch_missing_profile_is_not_found() {
        let repo = MockExtendedUserRepository::default();

        let err = patch_with_repo(
            &repo,
            99,
            ExtendedUserPatchRequest {
                role: None,
                phone_number: None,
                address: None,
                city: None,
                state: None,
                pincode: None,
            },
        )
        .await
        .expect_err("missing profile");

        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::NotFound(_))
        ));
    }
}
