//! Shared types for the roster service
//!
//! Common types used across crates: the error type, the API response
//! envelope, and the employee domain model.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};
