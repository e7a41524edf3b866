//! Request inspector library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod phone;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use phone::{validate_phone, PhoneError};
