//! # Scribe Shared
//!
//! Request and response types for the post API.
//! Kept free of server dependencies so clients can reuse them.

pub mod dto;
pub mod response;

pub use response::{Collection, ErrorResponse};
