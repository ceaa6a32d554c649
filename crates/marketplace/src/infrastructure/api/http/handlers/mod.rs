mod product_handler;
mod root_handler;
mod vendor_handler;

pub use product_handler::{create_product, list_vendor_products, update_product};
pub use root_handler::{health, root};
pub use vendor_handler::{create_vendor, get_vendor, list_vendors, update_vendor};
