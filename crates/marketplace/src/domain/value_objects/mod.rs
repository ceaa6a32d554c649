mod admin_id;
mod admin_role;
mod business_name;
mod description;
mod display_name;
mod email;
mod location;
mod password_hash;
mod phone_number;
mod price;
mod product_id;
mod product_name;
mod vendor_id;
mod vendor_lookup;

pub use admin_id::AdminId;
pub use admin_role::AdminRole;
pub use business_name::BusinessName;
pub use description::Description;
pub use display_name::DisplayName;
pub use email::Email;
pub use location::Location;
pub use password_hash::PasswordHash;
pub use phone_number::PhoneNumber;
pub use price::Price;
pub use product_id::ProductId;
pub use product_name::ProductName;
pub use vendor_id::VendorId;
pub use vendor_lookup::VendorLookup;

#[cfg(test)]
mod tests;
