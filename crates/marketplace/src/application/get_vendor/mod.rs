mod get_vendor_query;
mod get_vendor_use_case;
#[cfg(test)]
mod get_vendor_use_case_test;

pub use get_vendor_query::GetVendorQuery;
pub use get_vendor_use_case::GetVendorUseCase;
