//! Shared utilities and types for feature modules
//!
//! - **validation**: field readers and the [`FromPayload`] conversion trait
//! - **extract**: axum extractors that validate request bodies up front

pub mod extract;
pub mod validation;

// Re-export commonly used types
pub use extract::{FormPayload, Validated};
pub use validation::{require_object, required_number, required_string, FromPayload};
