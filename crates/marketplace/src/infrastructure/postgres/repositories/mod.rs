mod postgres_admin_account_repository;
mod postgres_product_repository;
mod postgres_vendor_repository;

pub use postgres_admin_account_repository::PostgresAdminAccountRepository;
pub use postgres_product_repository::PostgresProductRepository;
pub use postgres_vendor_repository::PostgresVendorRepository;
