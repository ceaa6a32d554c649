mod postgres_migrations;

pub use postgres_migrations::run_marketplace_migrations;
