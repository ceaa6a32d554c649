mod list_vendor_products_query;
mod list_vendor_products_use_case;
#[cfg(test)]
mod list_vendor_products_use_case_test;

pub use list_vendor_products_query::ListVendorProductsQuery;
pub use list_vendor_products_use_case::ListVendorProductsUseCase;
