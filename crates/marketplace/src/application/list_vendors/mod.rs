mod list_vendors_query;
mod list_vendors_use_case;

pub use list_vendors_query::ListVendorsQuery;
pub use list_vendors_use_case::ListVendorsUseCase;
