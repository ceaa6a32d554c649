// crates/marketplace/tests/infrastructure/mod.rs

mod repository_it_for_admin_account;
mod repository_it_for_product;
mod repository_it_for_vendor;
