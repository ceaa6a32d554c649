mod product_builder;
mod vendor_builder;

pub use product_builder::ProductBuilder;
pub use vendor_builder::VendorBuilder;
