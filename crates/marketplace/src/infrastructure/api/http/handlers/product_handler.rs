// crates/marketplace/src/infrastructure/api/http/handlers/product_handler.rs

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use shared_kernel::application::pagination::{PageRequest, PageResponse};

use crate::application::create_product::CreateProductCommand;
use crate::application::list_vendor_products::ListVendorProductsQuery;
use crate::application::update_product::UpdateProductCommand;
use crate::infrastructure::api::http::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::infrastructure::api::http::mappers::{ApiError, ToHttpResult};
use crate::infrastructure::api::http::AppState;

pub async fn list_vendor_products(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
    page: Result<Query<PageRequest>, QueryRejection>,
) -> Result<Json<PageResponse<ProductResponse>>, ApiError> {
    let Query(page) = page?;

    let query = ListVendorProductsQuery::try_new(&vendor_id, page).map_http()?;
    let products = state.list_vendor_products.execute(query).await.map_http()?;

    Ok(Json(products.map(ProductResponse::from)))
}

pub async fn create_product(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    let Json(req) = payload?;

    let command = CreateProductCommand::try_from_request(&vendor_id, req).map_http()?;
    let product = state.create_product.execute(command).await.map_http()?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Json<ProductResponse>, ApiError> {
    let Json(req) = payload?;

    let command = UpdateProductCommand::try_from_request(&product_id, req).map_http()?;
    let product = state.update_product.execute(command).await.map_http()?;

    Ok(Json(product.into()))
}
