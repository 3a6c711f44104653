//! Account services — self-service and admin user management.

pub mod admin;
pub mod service;

pub use admin::AdminUserService;
pub use service::AccountService;
