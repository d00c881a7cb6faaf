//! Services module
//!
//! This module contains the backend gateway and response extraction logic

pub mod backend;
pub mod extract;

// Re-export commonly used services
pub use backend::{render_outcome, BackendGateway, HttpOutcome, RequestSpec};
pub use extract::{extract, Payload};
