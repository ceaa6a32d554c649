mod field_parsing;
mod product_dto;
mod vendor_dto;

pub use field_parsing::{double_option, parse_nullable, parse_optional};
pub use product_dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
pub use vendor_dto::{CreateVendorRequest, UpdateVendorRequest, VendorResponse};
