pub mod create_product;
pub mod create_vendor;
pub mod get_vendor;
pub mod list_vendor_products;
pub mod list_vendors;
pub mod seed_admin;
pub mod update_product;
pub mod update_vendor;
