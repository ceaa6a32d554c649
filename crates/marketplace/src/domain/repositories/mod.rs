mod admin_account_repository;
mod product_repository;
mod vendor_repository;

pub use admin_account_repository::AdminAccountRepository;
pub use product_repository::ProductRepository;
pub use vendor_repository::VendorRepository;

#[cfg(test)]
mod admin_account_repository_stub;
#[cfg(test)]
mod product_repository_stub;
#[cfg(test)]
mod vendor_repository_stub;

#[cfg(test)]
pub use admin_account_repository_stub::AdminAccountRepositoryStub;
#[cfg(test)]
pub use product_repository_stub::ProductRepositoryStub;
#[cfg(test)]
pub use vendor_repository_stub::VendorRepositoryStub;
