pub mod api;
pub mod postgres;
pub mod security;
