// crates/shared-kernel/src/infrastructure/postgres/mod.rs

pub mod factories;
pub mod mappers;
pub mod patch;
pub mod transactions;
pub mod utils;
