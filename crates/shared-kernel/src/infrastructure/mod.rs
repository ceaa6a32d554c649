// crates/shared-kernel/src/infrastructure/mod.rs

#[cfg(feature = "postgres")]
pub mod postgres;

pub mod retry;
