// crates/marketplace/src/infrastructure/api/http/state.rs

use std::sync::Arc;

use crate::application::create_product::CreateProductUseCase;
use crate::application::create_vendor::CreateVendorUseCase;
use crate::application::get_vendor::GetVendorUseCase;
use crate::application::list_vendor_products::ListVendorProductsUseCase;
use crate::application::list_vendors::ListVendorsUseCase;
use crate::application::update_product::UpdateProductUseCase;
use crate::application::update_vendor::UpdateVendorUseCase;

/// Use cases injectés dans les handlers axum.
#[derive(Clone)]
pub struct AppState {
    pub create_vendor: Arc<CreateVendorUseCase>,
    pub get_vendor: Arc<GetVendorUseCase>,
    pub list_vendors: Arc<ListVendorsUseCase>,
    pub update_vendor: Arc<UpdateVendorUseCase>,
    pub create_product: Arc<CreateProductUseCase>,
    pub list_vendor_products: Arc<ListVendorProductsUseCase>,
    pub update_product: Arc<UpdateProductUseCase>,
}
