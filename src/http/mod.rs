//! HTTP presentation subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, cookie parsing)
//!     → pages/* (one handler per route)
//!     → render.rs (HTML shell, tables, escaping)
//!     → Send to client
//! ```

pub mod pages;
pub mod render;
pub mod request;
pub mod server;

pub use request::{RequestId, RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
