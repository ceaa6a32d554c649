mod seed_admin_command;
mod seed_admin_use_case;

pub use seed_admin_command::SeedAdminCommand;
pub use seed_admin_use_case::{SeedAdminOutcome, SeedAdminUseCase};
