// crates/marketplace/tests/common/mod.rs

mod setup_infrastructure;

pub use setup_infrastructure::setup_postgres_test_db;
