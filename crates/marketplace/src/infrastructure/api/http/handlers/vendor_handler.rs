// crates/marketplace/src/infrastructure/api/http/handlers/vendor_handler.rs

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use shared_kernel::application::pagination::{PageRequest, PageResponse};

use crate::application::create_vendor::CreateVendorCommand;
use crate::application::get_vendor::GetVendorQuery;
use crate::application::list_vendors::ListVendorsQuery;
use crate::application::update_vendor::UpdateVendorCommand;
use crate::infrastructure::api::http::dto::{CreateVendorRequest, UpdateVendorRequest, VendorResponse};
use crate::infrastructure::api::http::mappers::{ApiError, ToHttpResult};
use crate::infrastructure::api::http::AppState;

pub async fn list_vendors(
    State(state): State<AppState>,
    page: Result<Query<PageRequest>, QueryRejection>,
) -> Result<Json<PageResponse<VendorResponse>>, ApiError> {
    let Query(page) = page?;

    let vendors = state.list_vendors
        .execute(ListVendorsQuery { page })
        .await
        .map_http()?;

    Ok(Json(vendors.map(VendorResponse::from)))
}

pub async fn get_vendor(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<VendorResponse>, ApiError> {
    let query = GetVendorQuery::try_from_path(&key).map_http()?;
    let vendor = state.get_vendor.execute(query).await.map_http()?;
    Ok(Json(vendor.into()))
}

pub async fn create_vendor(
    State(state): State<AppState>,
    payload: Result<Json<CreateVendorRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<VendorResponse>), ApiError> {
    let Json(req) = payload?;

    let command = CreateVendorCommand::try_from_request(req).map_http()?;
    let vendor = state.create_vendor.execute(command).await.map_http()?;

    Ok((StatusCode::CREATED, Json(vendor.into())))
}

/// PATCH : seuls les champs présents sont modifiés, les médias vides sont ignorés.
pub async fn update_vendor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateVendorRequest>, JsonRejection>,
) -> Result<Json<VendorResponse>, ApiError> {
    let Json(req) = payload?;

    let command = UpdateVendorCommand::try_from_request(&id, req).map_http()?;
    let vendor = state.update_vendor.execute(command).await.map_http()?;

    Ok(Json(vendor.into()))
}
