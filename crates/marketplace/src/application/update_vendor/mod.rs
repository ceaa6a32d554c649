mod update_vendor_command;
mod update_vendor_use_case;

pub use update_vendor_command::UpdateVendorCommand;
pub use update_vendor_use_case::UpdateVendorUseCase;
