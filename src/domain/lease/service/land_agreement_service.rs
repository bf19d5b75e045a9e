use anyhow::Result;
use chrono::Utc;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use validator::Validate;

use crate::core::persistence::land_agreement::land_agreement_api_repository_trait::LandAgreementApiRepository;
use crate::core::persistence::land_agreement::land_agreement_entity::LandAgreementEntity;
use crate::core::persistence::land_agreement::land_agreement_repository::LandAgreementRepository;
use crate::domain::lease::dto::land_agreement_create_request::LandAgreementCreateRequest;
use crate::domain::lease::dto::land_agreement_patch_request::LandAgreementPatchRequest;
use crate::errors::AppError;

pub async fn list_land_agreements(
    pool: &SqlitePool,
    user_id: Option<i64>,
) -> Result<Vec<LandAgreementEntity>> {
    let repo = LandAgreementRepository::new(pool.clone());
    list_with_repo(&repo, user_id).await
}

pub async fn get_land_agreement(pool: &SqlitePool, id: i64) -> Result<LandAgreementEntity> {
    let repo = LandAgreementRepository::new(pool.clone());
    get_with_repo(&repo, id).await
}

pub async fn create_land_agreement(
    pool: &SqlitePool,
    req: LandAgreementCreateRequest,
) -> Result<LandAgreementEntity> {
    let repo = LandAgreementRepository::new(pool.clone());
    create_with_repo(&repo, req).await
}

pub async fn patch_land_agreement(
    pool: &SqlitePool,
    id: i64,
    req: LandAgreementPatchRequest,
) -> Result<LandAgreementEntity> {
    let repo = LandAgreementRepository::new(pool.clone());
    patch_with_repo(&repo, id, req).await
}

pub async fn delete_land_agreement(pool: &SqlitePool, id: i64) -> Result<Value> {
    let repo = LandAgreementRepository::new(pool.clone());
    delete_with_repo(&repo, id).await
}

/// When a user id is given, keep agreements where that user is either party.
async fn list_with_repo<R: LandAgreementApiRepository>(
    repo: &R,
    user_id: Option<i64>,
) -> Result<Vec<LandAgreementEntity>> {
    let agreements = repo.list().await?;
    Ok(match user_id {
        Some(user_id) => agreements
            .into_iter()
            .filter(|a| a.involves(user_id))
            .collect(),
        None => agreements,
    })
}

async fn get_with_repo<R: LandAgreementApiRepository>(
    repo: &R,
    id: i64,
) -> Result<LandAgreementEntity> {
    repo.find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Agreement {id} not found")).into())
}

async fn create_with_repo<R: LandAgreementApiRepository>(
    repo: &R,
    req: LandAgreementCreateRequest,
) -> Result<LandAgreementEntity> {
    req.validate().map_err(AppError::Validation)?;

    let mut agreement = LandAgreementEntity {
        id: 0,
        land_id: req.land_id,
        landowner_id: req.landowner_id,
        farmer_id: req.farmer_id,
        start_date: req.start_date,
        end_date: req.end_date,
        rent_amount: req.rent_amount.unwrap_or(0.0),
        terms: req.terms.unwrap_or_default(),
        signed_at: Utc::now(),
    };

    agreement.id = repo.insert(&agreement).await?;
    Ok(agreement)
}

async fn patch_with_repo<R: LandAgreementApiRepository>(
    repo: &R,
    id: i64,
    req: LandAgreementPatchRequest,
) -> Result<LandAgreementEntity> {
    req.validate().map_err(AppError::Validation)?;

    let mut agreement = repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Agreement {id} not found")))?;

    agreement.apply_update(req);
    repo.update(&agreement).await?;

    Ok(agreement)
}

async fn delete_with_repo<R: LandAgreementApiRepository>(repo: &R, id: i64) -> Result<Value> {
    if !repo.delete(id).await? {
        return Err(AppError::NotFound(format!("Agreement {id} not found")).into());
    }
    Ok(json!({ "message": "Agreement deleted successfully" }))
}
