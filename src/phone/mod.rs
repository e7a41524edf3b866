//! Phone-number validation subsystem.
//!
//! # Data Flow
//! ```text
//! raw user string
//!     → normalizer.rs (character check, digit extraction,
//!       prefix classification, length check)
//!     → national 11-digit canonical form
//!     → display format "D-DDD-DDD-DD-DD"
//! ```
//!
//! # Design Decisions
//! - Pure function of the input string; no state, no I/O
//! - Exactly two error kinds, both recoverable by re-prompting
//! - The HTTP layer depends on this module, never the reverse

pub mod normalizer;

pub use normalizer::{validate_phone, PhoneError};
