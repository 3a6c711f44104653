//! Event registration services.

pub mod service;

pub use service::RegistrationService;
