//! # eventhub-auth
//!
//! Authentication building blocks for Eventhub: Argon2id password
//! hashing and signed, time-bound JWT bearer tokens.

pub mod jwt;
pub mod password;

pub use jwt::claims::Claims;
pub use jwt::decoder::JwtDecoder;
pub use jwt::encoder::JwtEncoder;
pub use password::PasswordHasher;
