// crates/shared-kernel/src/domain/patch/mod.rs

mod partial_update;
mod partial_update_builder;
mod patch_value;

pub use partial_update::{Assignment, PartialUpdate};
pub use partial_update_builder::PartialUpdateBuilder;
pub use patch_value::PatchValue;

#[cfg(test)]
mod partial_update_builder_test;
