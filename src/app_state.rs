use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::core::client::predictor::PredictorClient;
use crate::core::persistence::extended_user::extended_user_entity::ExtendedUserEntity;
use crate::core::persistence::farmer_detail::farmer_detail_entity::FarmerDetailEntity;
use crate::core::persistence::image::image_entity::ImageEntity;
use crate::core::persistence::land::land_entity::LandEntity;
use crate::core::persistence::land_agreement::land_agreement_entity::LandAgreementEntity;
use crate::core::persistence::land_application::land_application_entity::LandApplicationEntity;
use crate::core::persistence::storage::storage_entity::StorageEntity;
use crate::core::persistence::storage_application::storage_application_entity::StorageApplicationEntity;
use crate::domain::land::dto::uploaded_image::UploadedImage;

macro_rules! delegate_pool_service {
    ($(fn $name:ident($($arg:ident : $typ:ty),*) -> $ret:ty => $path:path;)+) => {
        $(
            pub async fn $name(&self, $($arg: $typ),*) -> anyhow::Result<$ret> {
                $path(&self.pool, $($arg),*).await
            }
        )+
    };
}

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub prediction_service: Arc<PredictionService>,
    pub profile_service: Arc<ProfileService>,
    pub land_service: Arc<LandService>,
    pub lease_service: Arc<LeaseService>,
    pub storage_service: Arc<StorageService>,
}

pub fn build_app_state(pool: SqlitePool, config: &Config) -> anyhow::Result<AppState> {
    let predictor = PredictorClient::new(config.predictor_base_url.clone())?;

    Ok(AppState {
        auth_service: Arc::new(AuthService { pool: pool.clone() }),
        prediction_service: Arc::new(PredictionService { client: predictor }),
        profile_service: Arc::new(ProfileService { pool: pool.clone() }),
        land_service: Arc::new(LandService {
            pool: pool.clone(),
            media_root: config.media_root.clone(),
        }),
        lease_service: Arc::new(LeaseService { pool: pool.clone() }),
        storage_service: Arc::new(StorageService { pool }),
    })
}

#[derive(Clone)]
pub struct AuthService {
    pool: SqlitePool,
}

impl AuthService {
    delegate_pool_service! {
        fn register(req: crate::domain::auth::dto::user_registration_request::UserRegistrationRequest) -> serde_json::Value => crate::domain::auth::service::auth_service::register;
        fn login(req: crate::domain::auth::dto::user_login_request::UserLoginRequest) -> serde_json::Value => crate::domain::auth::service::auth_service::login;
    }
}

#[derive(Clone)]
pub struct PredictionService {
    client: PredictorClient,
}

impl PredictionService {
    pub async fn predict(&self, payload: serde_json::Value) -> anyhow::Result<serde_json::Value> {
        crate::domain::prediction::service::predict_service::predict(&self.client, payload).await
    }
}

#[derive(Clone)]
pub struct ProfileService {
    pool: SqlitePool,
}

impl ProfileService {
    delegate_pool_service! {
        fn list_extended_users(user_id: Option<i64>) -> Vec<ExtendedUserEntity> => crate::domain::profile::service::extended_user_service::list_extended_users;
        fn get_extended_user(id: i64) -> ExtendedUserEntity => crate::domain::profile::service::extended_user_service::get_extended_user;
        fn create_extended_user(req: crate::domain::profile::dto::extended_user_create_request::ExtendedUserCreateRequest) -> ExtendedUserEntity => crate::domain::profile::service::extended_user_service::create_extended_user;
        fn patch_extended_user(id: i64, req: crate::domain::profile::dto::extended_user_patch_request::ExtendedUserPatchRequest) -> ExtendedUserEntity => crate::domain::profile::service::extended_user_service::patch_extended_user;
        fn list_farmer_details(extended_user_id: Option<i64>) -> Vec<FarmerDetailEntity> => crate::domain::profile::service::farmer_detail_service::list_farmer_details;
        fn get_farmer_detail(id: i64) -> FarmerDetailEntity => crate::domain::profile::service::farmer_detail_service::get_farmer_detail;
        fn create_farmer_detail(req: crate::domain::profile::dto::farmer_detail_create_request::FarmerDetailCreateRequest) -> FarmerDetailEntity => crate::domain::profile::service::farmer_detail_service::create_farmer_detail;
        fn patch_farmer_detail(id: i64, req: crate::domain::profile::dto::farmer_detail_patch_request::FarmerDetailPatchRequest) -> FarmerDetailEntity => crate::domain::profile::service::farmer_detail_service::patch_farmer_detail;
    }
}

#[derive(Clone)]
pub struct LandService {
    pool: SqlitePool,
    media_root: String,
}

impl LandService {
    delegate_pool_service! {
        fn list_lands(owner_id: Option<i64>) -> Vec<LandEntity> => crate::domain::land::service::land_service::list_lands;
        fn get_land(id: i64) -> LandEntity => crate::domain::land::service::land_service::get_land;
        fn create_land(req: crate::domain::land::dto::land_create_request::LandCreateRequest) -> LandEntity => crate::domain::land::service::land_service::create_land;
        fn patch_land(id: i64, req: crate::domain::land::dto::land_patch_request::LandPatchRequest) -> LandEntity => crate::domain::land::service::land_service::patch_land;
        fn delete_land(id: i64) -> serde_json::Value => crate::domain::land::service::land_service::delete_land;
        fn list_images() -> Vec<ImageEntity> => crate::domain::land::service::image_service::list_images;
    }

    pub async fn store_images(&self, uploads: Vec<UploadedImage>) -> anyhow::Result<Vec<ImageEntity>> {
        crate::domain::land::service::image_service::store_images(&self.pool, &self.media_root, uploads)
            .await
    }
}

#[derive(Clone)]
pub struct LeaseService {
    pool: SqlitePool,
}

impl LeaseService {
    delegate_pool_service! {
        fn list_land_applications(land_id: Option<i64>, farmer_id: Option<i64>) -> Vec<LandApplicationEntity> => crate::domain::lease::service::land_application_service::list_land_applications;
        fn get_land_application(id: i64) -> LandApplicationEntity => crate::domain::lease::service::land_application_service::get_land_application;
        fn create_land_application(req: crate::domain::lease::dto::land_application_create_request::LandApplicationCreateRequest) -> LandApplicationEntity => crate::domain::lease::service::land_application_service::create_land_application;
        fn patch_land_application(id: i64, req: crate::domain::lease::dto::land_application_patch_request::LandApplicationPatchRequest) -> LandApplicationEntity => crate::domain::lease::service::land_application_service::patch_land_application;
        fn update_land_application_status(id: i64, req: crate::domain::lease::dto::land_application_status_request::LandApplicationStatusRequest) -> LandApplicationEntity => crate::domain::lease::service::land_application_service::update_land_application_status;
        fn delete_land_application(id: i64) -> serde_json::Value => crate::domain::lease::service::land_application_service::delete_land_application;
        fn list_land_agreements(user_id: Option<i64>) -> Vec<LandAgreementEntity> => crate::domain::lease::service::land_agreement_service::list_land_agreements;
        fn get_land_agreement(id: i64) -> LandAgreementEntity => crate::domain::lease::service::land_agreement_service::get_land_agreement;
        fn create_land_agreement(req: crate::domain::lease::dto::land_agreement_create_request::LandAgreementCreateRequest) -> LandAgreementEntity => crate::domain::lease::service::land_agreement_service::create_land_agreement;
        fn patch_land_agreement(id: i64, req: crate::domain::lease::dto::land_agreement_patch_request::LandAgreementPatchRequest) -> LandAgreementEntity => crate::domain::lease::service::land_agreement_service::patch_land_agreement;
        fn delete_land_agreement(id: i64) -> serde_json::Value => crate::domain::lease::service::land_agreement_service::delete_land_agreement;
    }
}

#[derive(Clone)]
pub struct StorageService {
    pool: SqlitePool,
}

impl StorageService {
    delegate_pool_service! {
        fn list_storages() -> Vec<StorageEntity> => crate::domain::storage::service::storage_service::list_storages;
        fn create_storage(req: crate::domain::storage::dto::storage_create_request::StorageCreateRequest) -> StorageEntity => crate::domain::storage::service::storage_service::create_storage;
        fn list_storage_applications() -> Vec<StorageApplicationEntity> => crate::domain::storage::service::storage_application_service::list_storage_applications;
        fn create_storage_application(req: crate::domain::storage::dto::storage_application_create_request::StorageApplicationCreateRequest) -> serde_json::Value => crate::domain::storage::service::storage_application_service::create_storage_application;
        fn delete_storage_application(id: i64) -> serde_json::Value => crate::domain::storage::service::storage_application_service::delete_storage_application;
    }
}
