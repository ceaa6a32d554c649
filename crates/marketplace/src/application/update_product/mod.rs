mod update_product_command;
mod update_product_use_case;

pub use update_product_command::UpdateProductCommand;
pub use update_product_use_case::UpdateProductUseCase;
