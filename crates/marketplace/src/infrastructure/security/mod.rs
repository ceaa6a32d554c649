mod pbkdf2_password_hasher;

pub use pbkdf2_password_hasher::Pbkdf2PasswordHasher;
