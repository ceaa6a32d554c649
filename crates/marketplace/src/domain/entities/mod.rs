mod admin_account;
mod product;
mod vendor;

pub use admin_account::AdminAccount;
pub use product::Product;
pub use vendor::Vendor;

#[cfg(test)]
mod tests;
