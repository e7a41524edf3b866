//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Parse CLI → Load config → Init tracing → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C or broadcast trigger → Stop accepting → Drain → Exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
