mod postgres_admin_account_row;
mod postgres_product_row;
mod postgres_vendor_row;

pub use postgres_admin_account_row::PostgresAdminAccountRow;
pub use postgres_product_row::PostgresProductRow;
pub use postgres_vendor_row::PostgresVendorRow;
