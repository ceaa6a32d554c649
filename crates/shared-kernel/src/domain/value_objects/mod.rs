mod media_url;
mod slug;
mod value_object;

pub use media_url::MediaUrl;
pub use slug::Slug;
pub use value_object::ValueObject;
