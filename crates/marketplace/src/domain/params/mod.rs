mod patch_product_params;
mod patch_vendor_params;

pub use patch_product_params::{PatchProductParams, PRODUCTS_TABLE};
pub use patch_vendor_params::{PatchVendorParams, VENDORS_TABLE};

#[cfg(test)]
mod patch_params_test;
