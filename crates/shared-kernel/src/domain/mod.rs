pub mod entities;
mod identifier;
pub mod media;
pub mod patch;
pub mod transaction;
pub mod value_objects;

pub use identifier::Identifier;
