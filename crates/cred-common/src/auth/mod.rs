//! Password hashing utilities

mod password;

pub use password::{constant_time_eq, generate_salt, PasswordService, MIN_SALT_LEN};
