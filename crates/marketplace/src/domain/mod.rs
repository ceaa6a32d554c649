pub mod builders;
pub mod entities;
pub mod params;
pub mod repositories;
pub mod services;
pub mod value_objects;
