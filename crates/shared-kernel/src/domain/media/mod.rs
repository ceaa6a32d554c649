// crates/shared-kernel/src/domain/media/mod.rs

mod media_candidate;
mod media_guard;

pub use media_candidate::MediaCandidate;
pub use media_guard::{should_update_media, should_update_media_value};

#[cfg(test)]
mod media_guard_test;
