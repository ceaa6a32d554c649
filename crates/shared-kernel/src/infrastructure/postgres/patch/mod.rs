mod postgres_partial_update;

pub use postgres_partial_update::{build_versioned_update, push_assignments};
