mod create_vendor_command;
mod create_vendor_use_case;

pub use create_vendor_command::CreateVendorCommand;
pub use create_vendor_use_case::CreateVendorUseCase;
