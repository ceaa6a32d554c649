// crates/marketplace/src/infrastructure/api/http/mod.rs

pub mod dto;
pub mod handlers;
pub mod mappers;
mod router;
mod state;

pub use router::build_router;
pub use state::AppState;
