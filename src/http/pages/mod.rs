//! Page handlers.
//!
//! Each submodule owns one route. Handlers extract what they need from
//! the request, call into the domain (`crate::phone`) where applicable,
//! and hand everything to `render` as plain strings.

pub mod form_data;
pub mod index;
pub mod phone_validator;
pub mod request_info;
